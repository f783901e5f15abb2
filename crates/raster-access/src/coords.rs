use serde::{Deserialize, Serialize};

/// Integer coordinates of a cell in a raster grid.
///
/// Serves as the concrete position handle of [`crate::RasterView`]. Sampling
/// code treats position handles as opaque tokens and only combines them with
/// [`GridOffset`] displacements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by an integer displacement.
    pub fn offset(self, d: GridOffset) -> GridPos {
        GridPos {
            x: self.x + d.dx,
            y: self.y + d.dy,
        }
    }
}

/// Signed integer displacement between raster cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct GridOffset {
    pub dx: i32,
    pub dy: i32,
}

impl GridOffset {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}
