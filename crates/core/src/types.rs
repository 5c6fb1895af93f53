use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// A grid cell. Used both for absolute world cells and for origin-relative offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, x: i32, y: i32) -> Self {
        Self { y: self.y + y, x: self.x + x }
    }
}

/// One cell of a rasterized line: offset from the line origin and the distance
/// travelled along the segment when it enters the cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct XYLen {
    pub x: i32,
    pub y: i32,
    pub len: f64,
}

impl XYLen {
    pub fn pos(&self) -> Pos {
        Pos { y: self.y, x: self.x }
    }

    pub fn same_cell(&self, x: i32, y: i32) -> bool {
        self.x == x && self.y == y
    }
}

/// An immutable rasterized line, ordered by non-decreasing `len` with every
/// cell present at most once. Clones share the same storage.
#[derive(Clone, Debug, PartialEq)]
pub struct SightLine(Arc<[XYLen]>);

impl SightLine {
    pub(crate) fn from_cells(cells: Vec<XYLen>) -> Self {
        Self(cells.into())
    }

    pub fn cells(&self) -> &[XYLen] {
        &self.0
    }

    /// Cell where the line ends.
    pub fn target(&self) -> Option<&XYLen> {
        self.0.last()
    }

    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        self.0.iter().any(|cell| cell.same_cell(x, y))
    }

    /// True when both lines point at the same storage.
    pub fn shares_storage(&self, other: &SightLine) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for SightLine {
    type Target = [XYLen];

    fn deref(&self) -> &[XYLen] {
        &self.0
    }
}

impl Serialize for SightLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}
