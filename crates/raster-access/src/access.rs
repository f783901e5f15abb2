//! Point-access capabilities over raster grids.

use thiserror::Error;

use crate::coords::{GridOffset, GridPos};

/// Read access to grid values around an opaque position handle.
///
/// Implementations must be side-effect free: sampling code reads the same
/// neighbourhood repeatedly with different offsets relative to one handle.
/// The handle itself is never inspected or retained by consumers.
pub trait RasterAccess {
    /// Opaque position handle combined with offsets on every read.
    type Pos;
    /// Element type stored at each grid cell.
    type Value: Copy;

    /// Value at `at` displaced by `offset`.
    ///
    /// The resolved cell must lie inside the grid's valid coordinate range;
    /// staying there is the caller's responsibility.
    fn read(&self, at: &Self::Pos, offset: GridOffset) -> Self::Value;
}

#[derive(Error, Debug)]
pub enum RasterViewError {
    #[error("buffer length {len} does not match {width}x{height}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
}

/// Borrowed row-major view over a `width x height` grid of values.
///
/// The view does not own or manage the underlying buffer; it is the bundled
/// concrete [`RasterAccess`] capability with [`GridPos`] as its position
/// handle.
#[derive(Clone, Copy, Debug)]
pub struct RasterView<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T], // row-major, len = width * height
}

impl<'a, T: Copy> RasterView<'a, T> {
    /// Wrap a row-major buffer; fails when its length does not match the
    /// requested shape.
    pub fn new(width: usize, height: usize, data: &'a [T]) -> Result<Self, RasterViewError> {
        if width.checked_mul(height) != Some(data.len()) {
            return Err(RasterViewError::ShapeMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True when `p` addresses a cell inside the view.
    pub fn contains(&self, p: GridPos) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Bounds-checked read.
    pub fn get(&self, p: GridPos) -> Option<T> {
        if !self.contains(p) {
            return None;
        }
        Some(self.data[p.y as usize * self.width + p.x as usize])
    }
}

impl<'a, T: Copy> RasterAccess for RasterView<'a, T> {
    type Pos = GridPos;
    type Value = T;

    // Out-of-range reads are a contract violation; they trip the debug
    // assertion and panic on the slice index in release builds.
    fn read(&self, at: &GridPos, offset: GridOffset) -> T {
        let p = at.offset(offset);
        debug_assert!(
            self.contains(p),
            "read at {:?} outside {}x{} view",
            p,
            self.width,
            self.height
        );
        self.data[p.y as usize * self.width + p.x as usize]
    }
}

/// Adapter exposing a closure as a point-access capability.
///
/// Mostly useful in tests, where the closure can observe exactly which cells
/// a sampling call touches.
#[derive(Clone, Copy, Debug)]
pub struct FnAccess<F> {
    read: F,
}

impl<F> FnAccess<F> {
    pub fn new(read: F) -> Self {
        Self { read }
    }
}

impl<F, T> RasterAccess for FnAccess<F>
where
    F: Fn(GridPos) -> T,
    T: Copy,
{
    type Pos = GridPos;
    type Value = T;

    fn read(&self, at: &GridPos, offset: GridOffset) -> T {
        (self.read)(at.offset(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_is_rejected() {
        let data = [0u8; 5];
        assert!(RasterView::new(2, 3, &data).is_err());
        assert!(RasterView::new(5, 1, &data).is_ok());
    }

    #[test]
    fn get_checks_bounds() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let view = RasterView::new(3, 2, &data).expect("shape matches");
        assert_eq!(view.get(GridPos::new(0, 0)), Some(1));
        assert_eq!(view.get(GridPos::new(2, 1)), Some(6));
        assert_eq!(view.get(GridPos::new(3, 0)), None);
        assert_eq!(view.get(GridPos::new(0, 2)), None);
        assert_eq!(view.get(GridPos::new(-1, 0)), None);
    }

    #[test]
    fn reads_resolve_relative_to_the_handle() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let view = RasterView::new(3, 2, &data).expect("shape matches");
        let at = GridPos::new(1, 0);
        assert_eq!(view.read(&at, GridOffset::new(0, 0)), 2);
        assert_eq!(view.read(&at, GridOffset::new(1, 1)), 6);
        assert_eq!(view.read(&at, GridOffset::new(-1, 0)), 1);
    }

    #[test]
    fn closures_act_as_capabilities() {
        let access = FnAccess::new(|p: GridPos| p.x + 100 * p.y);
        assert_eq!(access.read(&GridPos::new(2, 1), GridOffset::new(1, 1)), 203);
    }
}
