//! End-to-end checks of the public sampling surface.

use approx::assert_relative_eq;
use nalgebra::Point2;
use raster_sample::{BilinearAccessor, GridPos, RasterView};

#[test]
fn linear_ramp_is_reproduced_at_any_position() {
    // Bilinear interpolation is exact on a plane, up to and including the
    // far corner of the grid.
    let (w, h) = (8usize, 6usize);
    let data: Vec<f32> = (0..h)
        .flat_map(|y| (0..w).map(move |x| 2.0 * x as f32 + 3.0 * y as f32))
        .collect();
    let view = RasterView::new(w, h, &data).expect("shape matches");
    let sampler: BilinearAccessor<_, f32> = BilinearAccessor::new(view);
    let origin = GridPos::new(0, 0);

    for &(x, y) in &[(0.0f32, 0.0f32), (3.25, 2.5), (6.75, 4.9), (7.0, 5.0)] {
        assert_relative_eq!(sampler.sample(&origin, x, y), 2.0 * x + 3.0 * y, epsilon = 1e-4);
    }
}

#[test]
fn u8_sampling_matches_the_reference_formula() {
    let (w, h) = (5usize, 4usize);
    let data: Vec<u8> = (0..w * h).map(|i| (i * 41 % 256) as u8).collect();
    let view = RasterView::new(w, h, &data).expect("shape matches");
    let sampler: BilinearAccessor<_, u8> = BilinearAccessor::new(view);
    let origin = GridPos::new(0, 0);

    let reference = |x: f32, y: f32| -> u8 {
        let ix = x as usize;
        let iy = y as usize;
        let dx = x - ix as f32;
        let dy = y - iy as f32;
        let at = |cx: usize, cy: usize| f32::from(data[cy * w + cx]);
        let v = (1.0 - dx) * (1.0 - dy) * at(ix, iy)
            + dx * (1.0 - dy) * at(ix + 1, iy)
            + (1.0 - dx) * dy * at(ix, iy + 1)
            + dx * dy * at(ix + 1, iy + 1);
        v.round().clamp(0.0, 255.0) as u8
    };

    for iy in 0..h - 1 {
        for ix in 0..w - 1 {
            for (fx, fy) in [(0.2f32, 0.4f32), (0.5, 0.5), (0.8, 0.1)] {
                let x = ix as f32 + fx;
                let y = iy as f32 + fy;
                assert_eq!(sampler.sample(&origin, x, y), reference(x, y), "at ({}, {})", x, y);
                assert_eq!(sampler.sample_unchecked(&origin, x, y), reference(x, y));
            }
        }
    }
}

#[test]
fn points_and_scalar_coordinates_sample_identically() {
    let data: Vec<u8> = (0..9u8).map(|v| v * 20).collect();
    let view = RasterView::new(3, 3, &data).expect("shape matches");
    let sampler: BilinearAccessor<_, u8> = BilinearAccessor::new(view);
    let origin = GridPos::new(0, 0);

    for &(x, y) in &[(0.5f32, 0.5f32), (1.25, 0.75), (2.0, 2.0)] {
        assert_eq!(
            sampler.sample_point(&origin, Point2::new(x, y)),
            sampler.sample(&origin, x, y)
        );
    }
}
