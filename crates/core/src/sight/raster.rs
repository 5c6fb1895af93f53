//! Supercover line rasterization.
//!
//! The segment is walked one grid-line crossing at a time, so every cell whose
//! area the segment passes through is emitted, in the order the segment enters
//! it. A lattice corner on the segment, including one it starts or ends on,
//! emits both cells beside it, so a ray can never slip between two diagonally
//! adjacent walls.

use crate::types::{SightLine, XYLen};

/// Crossings closer together than this (in segment parameter or cell units) count as a corner hit.
const CORNER_EPSILON: f64 = 1e-9;

struct Axis {
    cell: i32,
    step: i32,
    t_next: f64,
    t_delta: f64,
}

impl Axis {
    fn new(start: f64, delta: f64) -> Self {
        let cell = start.floor() as i32;
        if delta > 0.0 {
            Axis { cell, step: 1, t_next: (start.floor() + 1.0 - start) / delta, t_delta: 1.0 / delta }
        } else if delta < 0.0 {
            Axis { cell, step: -1, t_next: (start.floor() - start) / delta, t_delta: -1.0 / delta }
        } else {
            Axis { cell, step: 0, t_next: f64::INFINITY, t_delta: f64::INFINITY }
        }
    }

    fn advance(&mut self) {
        self.cell += self.step;
        self.t_next += self.t_delta;
    }
}

fn on_lattice(v: f64) -> bool {
    (v - v.round()).abs() <= CORNER_EPSILON
}

/// The two cells beside the lattice corner a segment starts on, ordered the
/// same way as a corner crossed mid-segment.
fn start_corner_sides(x0: f64, y0: f64, sx: i32, sy: i32) -> Option<[(i32, i32); 2]> {
    if sx == 0 || sy == 0 || !on_lattice(x0) || !on_lattice(y0) {
        return None;
    }
    let (cx, cy) = (x0.round() as i32, y0.round() as i32);
    let out = (if sx > 0 { cx } else { cx - 1 }, if sy > 0 { cy } else { cy - 1 });
    let before = (out.0 - sx, out.1 - sy);
    Some([(out.0, before.1), (before.0, out.1)])
}

#[derive(Default)]
struct LineBuilder {
    cells: Vec<XYLen>,
}

impl LineBuilder {
    fn push(&mut self, x: i32, y: i32, len: f64) {
        if self.cells.iter().rev().any(|c| c.same_cell(x, y)) {
            return;
        }
        let len = self.cells.last().map_or(len, |last| len.max(last.len));
        self.cells.push(XYLen { x, y, len });
    }

    /// Makes `(x, y)` the last cell, moving it there if it was emitted earlier.
    fn finish(&mut self, x: i32, y: i32, len: f64) {
        if let Some(idx) = self.cells.iter().position(|c| c.same_cell(x, y)) {
            if idx + 1 == self.cells.len() {
                return;
            }
            self.cells.remove(idx);
        }
        self.push(x, y, len);
    }
}

/// Rasterizes the segment `(x0, y0) -> (x1, y1)` into the ordered, duplicate-free
/// list of cells it touches. The first cell contains the start with `len == 0`,
/// the last is the cell holding the end point. `len` is the distance travelled
/// when the segment enters each cell.
pub fn rasterize(x0: f64, y0: f64, x1: f64, y1: f64) -> SightLine {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let total = dx.hypot(dy);

    let mut line = LineBuilder::default();
    let mut ax = Axis::new(x0, dx);
    let mut ay = Axis::new(y0, dy);
    line.push(ax.cell, ay.cell, 0.0);
    if let Some(sides) = start_corner_sides(x0, y0, ax.step, ay.step) {
        for (x, y) in sides {
            line.push(x, y, 0.0);
        }
    }

    loop {
        let t = ax.t_next.min(ay.t_next);
        let corner = (ax.t_next - ay.t_next).abs() <= CORNER_EPSILON;
        if t >= 1.0 - CORNER_EPSILON {
            if corner && t <= 1.0 + CORNER_EPSILON {
                line.push(ax.cell + ax.step, ay.cell, total);
                line.push(ax.cell, ay.cell + ay.step, total);
            }
            break;
        }
        let len = t * total;
        if corner {
            line.push(ax.cell + ax.step, ay.cell, len);
            line.push(ax.cell, ay.cell + ay.step, len);
            ax.advance();
            ay.advance();
        } else if ax.t_next < ay.t_next {
            ax.advance();
        } else {
            ay.advance();
        }
        line.push(ax.cell, ay.cell, len);
    }

    line.finish(x1.floor() as i32, y1.floor() as i32, total);
    SightLine::from_cells(line.cells)
}

/// Re-measures a rasterized line in cell-and-length form: each cell's `len`
/// becomes the distance from the first cell to that cell's offset, raised to
/// the previous cell's `len` where it would drop.
pub fn to_cell_lens(line: &SightLine) -> SightLine {
    let Some(origin) = line.first() else {
        return line.clone();
    };
    let (ox, oy) = (origin.x, origin.y);
    let mut reach = 0.0_f64;
    let cells = line
        .iter()
        .map(|c| {
            reach = reach.max(f64::from(c.x - ox).hypot(f64::from(c.y - oy)));
            XYLen { x: c.x, y: c.y, len: reach }
        })
        .collect();
    SightLine::from_cells(cells)
}
