pub mod config;
pub mod danger;
pub mod engine;
pub mod field_object;
pub mod floor;
pub mod grid;
pub mod sight;
pub mod tile;
pub mod tile_area;
pub mod types;
pub mod visibility;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, GeometryConfig};
pub use danger::{Color24, DangerType};
pub use engine::GeometryEngine;
pub use field_object::{DangerCell, FieldObject, FieldObjectId, hazard_cells, line_attack_cells};
pub use floor::Floor;
pub use grid::{wrap, wrap360};
pub use sight::{SightLineCache, ViewportTable, WingTable, build_viewport_table, rasterize, to_cell_lens, viewport_offsets};
pub use tile::{TileFlag, TileKind, TileOpType};
pub use tile_area::TileArea;
pub use types::*;
pub use visibility::{VisibleArea, visible_cells};
