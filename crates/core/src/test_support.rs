//! Shared test fixtures for the crate's unit test suites.
//! Reference samplers live here so raster tests can compare against them.

use std::collections::BTreeSet;

use crate::tile::{TileFlag, TileKind, TileOpType};
use crate::tile_area::TileArea;
use crate::types::Pos;

/// Cells hit by `samples + 1` evenly spaced points along the segment.
pub(crate) fn brute_force_cells(x0: f64, y0: f64, x1: f64, y1: f64, samples: u32) -> BTreeSet<(i32, i32)> {
    let mut cells = BTreeSet::new();
    for k in 0..=samples {
        let t = f64::from(k) / f64::from(samples);
        let x = x0 + (x1 - x0) * t;
        let y = y0 + (y1 - y0) * t;
        cells.insert((x.floor() as i32, y.floor() as i32));
    }
    cells
}

/// Whether the segment meets the closed unit square of cell `(cx, cy)`, with a
/// small tolerance for corner hits.
pub(crate) fn segment_touches_cell(x0: f64, y0: f64, x1: f64, y1: f64, cx: i32, cy: i32) -> bool {
    const TOLERANCE: f64 = 1e-6;
    let (min_x, max_x) = (f64::from(cx) - TOLERANCE, f64::from(cx) + 1.0 + TOLERANCE);
    let (min_y, max_y) = (f64::from(cy) - TOLERANCE, f64::from(cy) + 1.0 + TOLERANCE);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, d, lo, hi) in [(x0, x1 - x0, min_x, max_x), (y0, y1 - y0, min_y, max_y)] {
        if d == 0.0 {
            if p < lo || p > hi {
                return false;
            }
            continue;
        }
        let (a, b) = ((lo - p) / d, (hi - p) / d);
        t0 = t0.max(a.min(b));
        t1 = t1.min(a.max(b));
    }
    t0 <= t1
}

pub(crate) fn open_room_fixture() -> (TileArea, Pos) {
    let area = TileArea::filled(20, 20, TileFlag::of(TileKind::Room));
    (area, Pos { y: 10, x: 10 })
}

/// Corridor along `y == 5` with a wall plug at `x == 6`.
pub(crate) fn wall_occlusion_fixture() -> (TileArea, Pos) {
    let mut area = TileArea::filled(16, 11, TileFlag::of(TileKind::Wall));
    area.apply_rect(Pos { y: 5, x: 1 }, 14, 1, TileOpType::Override, TileFlag::of(TileKind::Road));
    area.set_tile(Pos { y: 5, x: 6 }, TileFlag::of(TileKind::Wall));
    (area, Pos { y: 5, x: 3 })
}

/// Walled 5x5 room with floor from `(5, 5)` to `(9, 9)` in a 20x20 area.
pub(crate) fn closed_room_fixture() -> TileArea {
    let mut area = TileArea::filled(20, 20, TileFlag::of(TileKind::Grass));
    area.apply_rect(Pos { y: 4, x: 4 }, 7, 7, TileOpType::Override, TileFlag::of(TileKind::Wall));
    area.apply_rect(Pos { y: 5, x: 5 }, 5, 5, TileOpType::Override, TileFlag::of(TileKind::Room));
    area
}

/// Two walls touching only at a corner, leaving a diagonal gap between them.
pub(crate) fn diagonal_gap_fixture() -> (TileArea, Pos) {
    let mut area = TileArea::filled(12, 12, TileFlag::of(TileKind::Room));
    area.set_tile(Pos { y: 5, x: 6 }, TileFlag::of(TileKind::Wall));
    area.set_tile(Pos { y: 6, x: 5 }, TileFlag::of(TileKind::Wall));
    (area, Pos { y: 5, x: 5 })
}
