//! Wraparound terrain storage for one floor.

use std::fmt;
use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use crate::grid::{Wrapper, wrap_pos};
use crate::tile::{TileFlag, TileOpType};
use crate::types::Pos;

#[derive(Clone, PartialEq, Eq)]
pub struct TileArea {
    width: usize,
    height: usize,
    tiles: Vec<TileFlag>,
}

impl TileArea {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "tile area must be non-empty, got {width}x{height}");
        Self { width, height, tiles: vec![TileFlag::EMPTY; width * height] }
    }

    pub fn filled(width: usize, height: usize, flag: TileFlag) -> Self {
        let mut area = Self::new(width, height);
        area.tiles.fill(flag);
        area
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn total_pos(&self) -> usize {
        self.width * self.height
    }

    pub fn xy_wrappers(&self) -> (Wrapper, Wrapper) {
        (Wrapper::new(self.width), Wrapper::new(self.height))
    }

    pub fn wrap_pos(&self, pos: Pos) -> Pos {
        let (xw, yw) = self.xy_wrappers();
        wrap_pos(pos, xw, yw)
    }

    pub fn tile_at(&self, pos: Pos) -> TileFlag {
        self.tiles[self.index(pos)]
    }

    pub fn tile_mut(&mut self, pos: Pos) -> &mut TileFlag {
        let idx = self.index(pos);
        &mut self.tiles[idx]
    }

    pub fn set_tile(&mut self, pos: Pos, flag: TileFlag) {
        *self.tile_mut(pos) = flag;
    }

    pub fn op_at(&mut self, pos: Pos, op: TileOpType, arg: TileFlag) {
        self.tile_mut(pos).apply(op, arg);
    }

    /// Applies `op` over a `w x h` rectangle whose top-left corner is `origin`.
    /// The rectangle may cross the area edges and wraps around them.
    pub fn apply_rect(&mut self, origin: Pos, w: usize, h: usize, op: TileOpType, arg: TileFlag) {
        for dy in 0..h {
            for dx in 0..w {
                self.op_at(origin.offset(dx as i32, dy as i32), op, arg);
            }
        }
    }

    pub fn test_opaque(&self, x: i32, y: i32) -> bool {
        self.tile_at(Pos { y, x }).is_opaque()
    }

    /// Copy keeping only the cells accepted by `keep`; the rest are left empty.
    pub fn dup_with_filter(&self, mut keep: impl FnMut(Pos) -> bool) -> Self {
        let mut dup = Self::new(self.width, self.height);
        for (idx, flag) in self.tiles.iter().enumerate() {
            let pos = Pos { y: (idx / self.width) as i32, x: (idx % self.width) as i32 };
            if keep(pos) {
                dup.tiles[idx] = *flag;
            }
        }
        dup
    }

    pub fn content_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.width as u64);
        hasher.write_u64(self.height as u64);
        for flag in &self.tiles {
            hasher.write_u16(flag.bits());
        }
        hasher.finish()
    }

    fn index(&self, pos: Pos) -> usize {
        let p = self.wrap_pos(pos);
        (p.y as usize) * self.width + (p.x as usize)
    }
}

impl fmt::Debug for TileArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileArea[{} {}]", self.width, self.height)
    }
}
