//! Access capabilities for 2-D raster grids.
//!
//! This crate is intentionally small. It defines how grid values are read
//! (the [`RasterAccess`] capability), how cells are addressed ([`GridPos`],
//! [`GridOffset`]) and how element types pass through the `f32` blending
//! domain ([`PixelValue`]). Interpolating accessors build on these
//! primitives; see the `raster-sample` crate.

mod access;
mod cast;
mod coords;
mod logger;

pub use access::{FnAccess, RasterAccess, RasterView, RasterViewError};
pub use cast::PixelValue;
pub use coords::{GridOffset, GridPos};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;
