//! Toroidal coordinate arithmetic shared by tile areas, hazards and visibility.

use crate::types::Pos;

pub const DEGREES: i32 = 360;

/// Maps any raw coordinate onto `0..len`, wrapping negatives from the far edge.
pub fn wrap(v: i32, len: i32) -> i32 {
    assert!(len > 0, "wrap length must be positive, got {len}");
    ((v % len) + len) % len
}

pub fn wrap360(v: i32) -> i32 {
    wrap(v, DEGREES)
}

/// Wrap function bound to one axis length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wrapper {
    len: i32,
}

impl Wrapper {
    pub fn new(len: usize) -> Self {
        let len = i32::try_from(len).expect("axis length must fit in i32");
        assert!(len > 0, "axis length must be positive");
        Self { len }
    }

    pub fn length(self) -> i32 {
        self.len
    }

    pub fn wrap(self, v: i32) -> i32 {
        wrap(v, self.len)
    }
}

pub fn wrap_pos(pos: Pos, width: Wrapper, height: Wrapper) -> Pos {
    Pos { y: height.wrap(pos.y), x: width.wrap(pos.x) }
}
