use std::marker::PhantomData;

use nalgebra::Point2;

use raster_access::{GridOffset, PixelValue, RasterAccess};

/// Samples a raster at non-integer coordinates by bilinear interpolation.
///
/// Wraps a point-access capability `A` and blends the four cells around the
/// sample point. `V` is the output element type; values pass through the
/// `f32` blending domain via [`PixelValue`], so `V` may differ from the
/// capability's element type (e.g. read `u8`, return `f32`).
///
/// The capability is stored once at construction and reused for every call.
/// Position handles are passed per call and never retained, so one accessor
/// may serve many grid locations.
#[derive(Clone, Copy, Debug)]
pub struct BilinearAccessor<A, V> {
    access: A,
    _value: PhantomData<fn() -> V>,
}

impl<A, V> BilinearAccessor<A, V>
where
    A: RasterAccess,
    A::Value: PixelValue,
    V: PixelValue,
{
    /// Wrap a point-access capability.
    pub fn new(access: A) -> Self {
        Self {
            access,
            _value: PhantomData,
        }
    }

    /// Interpolated value at `(x, y)`, safe up to the far grid edge.
    ///
    /// Valid for `0 <= x <= width - 1` and `0 <= y <= height - 1` of the
    /// grid addressed by `at`. An axis with zero fractional part does not
    /// blend, so a sample exactly on the last column or row never reads a
    /// neighbour outside the grid. The base cell is taken by truncation;
    /// coordinates must be non-negative.
    pub fn sample(&self, at: &A::Pos, x: f32, y: f32) -> V {
        debug_assert!(
            x >= 0.0 && y >= 0.0,
            "negative sample coordinates ({}, {})",
            x,
            y
        );
        let ix = x as i32;
        let iy = y as i32;
        let dx = x - ix as f32;
        let dy = y - iy as f32;

        // Collapse the blend along integral axes so the (+1) neighbour is
        // only read when its weight is nonzero.
        let v = if dx == 0.0 {
            if dy == 0.0 {
                self.corner(at, ix, iy)
            } else {
                (1.0 - dy) * self.corner(at, ix, iy) + dy * self.corner(at, ix, iy + 1)
            }
        } else if dy == 0.0 {
            (1.0 - dx) * self.corner(at, ix, iy) + dx * self.corner(at, ix + 1, iy)
        } else {
            (1.0 - dx) * (1.0 - dy) * self.corner(at, ix, iy)
                + dx * (1.0 - dy) * self.corner(at, ix + 1, iy)
                + (1.0 - dx) * dy * self.corner(at, ix, iy + 1)
                + dx * dy * self.corner(at, ix + 1, iy + 1)
        };
        V::from_f32(v)
    }

    /// Interpolated value at `(x, y)` without the edge handling of
    /// [`sample`](Self::sample); all four corners are always read.
    ///
    /// Valid for `0 <= x < width - 1` and `0 <= y < height - 1` strictly,
    /// so the `(+1, +1)` neighbourhood always exists. Slightly faster than
    /// the checked variant in tight inner loops.
    pub fn sample_unchecked(&self, at: &A::Pos, x: f32, y: f32) -> V {
        debug_assert!(
            x >= 0.0 && y >= 0.0,
            "negative sample coordinates ({}, {})",
            x,
            y
        );
        let ix = x as i32;
        let iy = y as i32;
        let dx = x - ix as f32;
        let dy = y - iy as f32;

        V::from_f32(
            (1.0 - dx) * (1.0 - dy) * self.corner(at, ix, iy)
                + dx * (1.0 - dy) * self.corner(at, ix + 1, iy)
                + (1.0 - dx) * dy * self.corner(at, ix, iy + 1)
                + dx * dy * self.corner(at, ix + 1, iy + 1),
        )
    }

    /// Interpolated value at a sub-pixel point.
    pub fn sample_point(&self, at: &A::Pos, p: Point2<f32>) -> V {
        self.sample(at, p.x, p.y)
    }

    #[inline]
    fn corner(&self, at: &A::Pos, x: i32, y: i32) -> f32 {
        self.access.read(at, GridOffset::new(x, y)).to_f32()
    }
}
