//! Bilinear sub-pixel sampling over raster access capabilities.
//!
//! A [`BilinearAccessor`] wraps any [`RasterAccess`] capability and evaluates
//! it at arbitrary non-integer coordinates by blending the 2x2 integer
//! neighbourhood around the sample point:
//!
//! ```
//! use raster_access::{GridPos, RasterView};
//! use raster_sample::BilinearAccessor;
//!
//! let data: Vec<u8> = vec![0, 10, 20, 30];
//! let view = RasterView::new(2, 2, &data)?;
//! let sampler: BilinearAccessor<_, u8> = BilinearAccessor::new(view);
//!
//! let origin = GridPos::new(0, 0);
//! assert_eq!(sampler.sample(&origin, 0.5, 0.5), 15);
//! assert_eq!(sampler.sample(&origin, 1.0, 0.0), 10);
//! # Ok::<(), raster_access::RasterViewError>(())
//! ```
//!
//! Higher-order interpolation, boundary-extension policies and image
//! containers are out of scope; callers supply the access capability and
//! keep sample coordinates inside the grid.

mod bilinear;

pub use bilinear::BilinearAccessor;

pub use raster_access::{
    FnAccess, GridOffset, GridPos, PixelValue, RasterAccess, RasterView, RasterViewError,
};
