//! Sight-line rasterization and the tables built from it.
//! Lines are origin-relative, so one table serves every absolute position on every floor.

mod cache;
mod raster;
mod viewport;

pub use cache::{SightLineCache, WingTable, build_wing_table};
pub use raster::{rasterize, to_cell_lens};
pub use viewport::{ViewportTable, build_viewport_table, viewport_offsets};

/// Cell-center coordinate of the origin cell of every cached line.
pub const ORIGIN_CENTER: f64 = 0.5;
