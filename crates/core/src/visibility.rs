//! Field-of-view resolution against a floor's terrain.
//! This module exists to keep fog-of-war rules deterministic and isolated from tick logic.
//! It does not own the sight-line geometry, which comes precomputed from `ViewportTable`.

use crate::sight::ViewportTable;
use crate::tile_area::TileArea;
use crate::types::{Pos, SightLine, XYLen};

/// Cells visible from one origin on one tile area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleArea {
    origin: Pos,
    width: usize,
    visible: Vec<bool>,
    cells: Vec<Pos>,
}

impl VisibleArea {
    pub fn origin(&self) -> Pos {
        self.origin
    }

    /// Visible absolute cells, nearest first, each listed once.
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `pos` must already be wrapped into the area.
    pub fn is_visible(&self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width {
            return false;
        }
        self.visible.get((pos.y as usize) * self.width + pos.x as usize).copied().unwrap_or(false)
    }
}

/// Whether anything opaque sits on `line` in front of its final cell.
fn occluded(area: &TileArea, origin: Pos, line: &SightLine, target: &XYLen) -> bool {
    line.iter()
        .take_while(|step| !step.same_cell(target.x, target.y))
        .any(|step| area.test_opaque(origin.x + step.x, origin.y + step.y))
}

/// Walks every viewport line from `origin`. A cell is visible when no opaque
/// cell lies before it on its line; opaque cells themselves can be seen.
pub fn visible_cells(area: &TileArea, origin: Pos, viewport: &ViewportTable) -> VisibleArea {
    let origin = area.wrap_pos(origin);
    let mut visible = vec![false; area.total_pos()];
    let mut cells = Vec::new();
    for (offset, line) in viewport.iter() {
        if occluded(area, origin, line, offset) {
            continue;
        }
        let pos = area.wrap_pos(origin.offset(offset.x, offset.y));
        let idx = (pos.y as usize) * area.width() + pos.x as usize;
        if !visible[idx] {
            visible[idx] = true;
            cells.push(pos);
        }
    }
    VisibleArea { origin, width: area.width(), visible, cells }
}

#[allow(dead_code)]
pub(crate) fn draw_area_diag(area: &TileArea, seen: &VisibleArea) -> String {
    let mut text = String::new();
    for y in 0..area.height() {
        for x in 0..area.width() {
            let p = Pos { y: y as i32, x: x as i32 };
            let c = if p == seen.origin() {
                '@'
            } else if area.tile_at(p).is_opaque() {
                '#'
            } else {
                '.'
            };
            let v = if seen.is_visible(p) { 'v' } else { 'h' };
            text.push_str(&format!("{c}{v} "));
        }
        text.push('\n');
    }
    text
}
