//! Sight lines to every cell within the visibility radius.

use super::ORIGIN_CENTER;
use super::raster::{rasterize, to_cell_lens};
use crate::types::{SightLine, XYLen};

/// All offsets within `radius` of the origin, nearest first. Equal distances
/// are ordered by `y` then `x` so the list is stable.
pub fn viewport_offsets(radius: i32) -> Vec<XYLen> {
    assert!(radius >= 0, "viewport radius must be non-negative, got {radius}");
    let limit = f64::from(radius);
    let mut offsets = Vec::new();
    for y in -radius..=radius {
        for x in -radius..=radius {
            let len = f64::from(x).hypot(f64::from(y));
            if len <= limit {
                offsets.push(XYLen { x, y, len });
            }
        }
    }
    offsets.sort_by(|a, b| a.len.total_cmp(&b.len).then(a.y.cmp(&b.y)).then(a.x.cmp(&b.x)));
    offsets
}

/// One line per offset, from the origin cell center to the offset's cell center,
/// in cell-and-length form.
pub fn build_viewport_table(offsets: &[XYLen]) -> Vec<SightLine> {
    offsets
        .iter()
        .map(|o| {
            to_cell_lens(&rasterize(
                ORIGIN_CENTER,
                ORIGIN_CENTER,
                f64::from(o.x) + ORIGIN_CENTER,
                f64::from(o.y) + ORIGIN_CENTER,
            ))
        })
        .collect()
}

/// Precomputed field-of-view sweep for a fixed radius.
#[derive(Clone, Debug)]
pub struct ViewportTable {
    radius: i32,
    offsets: Vec<XYLen>,
    lines: Vec<SightLine>,
}

impl ViewportTable {
    pub fn new(radius: i32) -> Self {
        let offsets = viewport_offsets(radius);
        let lines = build_viewport_table(&offsets);
        Self { radius, offsets, lines }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// `(offset, line)` pairs in increasing distance order.
    pub fn iter(&self) -> impl Iterator<Item = (&XYLen, &SightLine)> {
        self.offsets.iter().zip(self.lines.iter())
    }

    pub fn line_to(&self, x: i32, y: i32) -> Option<&SightLine> {
        self.offsets.iter().position(|o| o.same_cell(x, y)).map(|idx| &self.lines[idx])
    }
}
