//! Per-cell terrain bits.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileKind {
    Swamp,
    Soil,
    Stone,
    Sand,
    Sea,
    Magma,
    Ice,
    Grass,
    Tree,
    Road,
    Room,
    Wall,
    Window,
    Door,
    Fog,
    Smoke,
}

impl TileKind {
    pub const COUNT: usize = 16;

    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Swamp,
        TileKind::Soil,
        TileKind::Stone,
        TileKind::Sand,
        TileKind::Sea,
        TileKind::Magma,
        TileKind::Ice,
        TileKind::Grass,
        TileKind::Tree,
        TileKind::Road,
        TileKind::Room,
        TileKind::Wall,
        TileKind::Window,
        TileKind::Door,
        TileKind::Fog,
        TileKind::Smoke,
    ];

    pub fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Whether this terrain stops sight lines and line attacks.
    pub fn is_opaque(self) -> bool {
        match self {
            TileKind::Wall | TileKind::Tree | TileKind::Fog | TileKind::Smoke => true,
            TileKind::Swamp
            | TileKind::Soil
            | TileKind::Stone
            | TileKind::Sand
            | TileKind::Sea
            | TileKind::Magma
            | TileKind::Ice
            | TileKind::Grass
            | TileKind::Road
            | TileKind::Room
            | TileKind::Window
            | TileKind::Door => false,
        }
    }
}

// Every kind must own a distinct bit of the u16 flag word.
const _: () = {
    assert!(TileKind::COUNT <= u16::BITS as usize);
    let mut i = 0;
    while i < TileKind::COUNT {
        assert!(TileKind::ALL[i] as usize == i);
        i += 1;
    }
};

/// How an incoming flag combines with the flag already stored in a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileOpType {
    Override,
    Merge,
    Clear,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileFlag(u16);

impl TileFlag {
    pub const EMPTY: TileFlag = TileFlag(0);

    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn of(kind: TileKind) -> Self {
        Self(kind.bit())
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn test(self, kind: TileKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn set(&mut self, kind: TileKind) {
        self.0 |= kind.bit();
    }

    pub fn clear(&mut self, kind: TileKind) {
        self.0 &= !kind.bit();
    }

    pub fn merge(&mut self, other: TileFlag) {
        self.0 |= other.0;
    }

    pub fn with(mut self, kind: TileKind) -> Self {
        self.set(kind);
        self
    }

    pub fn apply(&mut self, op: TileOpType, arg: TileFlag) {
        match op {
            TileOpType::Override => self.0 = arg.0,
            TileOpType::Merge => self.0 |= arg.0,
            TileOpType::Clear => self.0 &= !arg.0,
        }
    }

    pub fn is_opaque(self) -> bool {
        self.kinds().any(TileKind::is_opaque)
    }

    pub fn kinds(self) -> impl Iterator<Item = TileKind> {
        TileKind::ALL.into_iter().filter(move |kind| self.test(*kind))
    }
}

impl From<TileKind> for TileFlag {
    fn from(kind: TileKind) -> Self {
        Self::of(kind)
    }
}
