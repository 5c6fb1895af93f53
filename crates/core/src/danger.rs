//! Static attributes of each hazard kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 24-bit RGB display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color24(pub u32);

impl Color24 {
    pub const BLACK: Color24 = Color24(0x000000);
    pub const RED: Color24 = Color24(0xFF0000);
    pub const CRIMSON: Color24 = Color24(0xDC143C);
    pub const FIRE_BRICK: Color24 = Color24(0xB22222);
    pub const DEEP_PINK: Color24 = Color24(0xFF1493);
    pub const ORANGE: Color24 = Color24(0xFFA500);

    pub fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl fmt::Display for Color24 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xFF_FFFF)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DangerType {
    #[default]
    None,
    BasicAttack,
    WideAttack,
    LongAttack,
    RotateLineAttack,
    MineExplode,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct DangerAttrib {
    turn_to_live: u32,
    scale: f64,
    color: Color24,
}

const fn attrib(turn_to_live: u32, scale: f64, color: Color24) -> DangerAttrib {
    DangerAttrib { turn_to_live, scale, color }
}

/// Indexed by `DangerType` ordinal.
const ATTRIBS: [DangerAttrib; DangerType::COUNT] = [
    attrib(0, 1.0, Color24::BLACK),
    attrib(1, 1.0, Color24::RED),
    attrib(1, 1.0, Color24::CRIMSON),
    attrib(1, 1.0, Color24::FIRE_BRICK),
    attrib(1, 2.0, Color24::DEEP_PINK),
    attrib(1, 2.0, Color24::ORANGE),
];

const _: () = {
    let mut i = 0;
    while i < DangerType::COUNT {
        assert!(DangerType::ALL[i] as usize == i);
        i += 1;
    }
};

impl DangerType {
    pub const COUNT: usize = 6;

    pub const ALL: [DangerType; Self::COUNT] = [
        DangerType::None,
        DangerType::BasicAttack,
        DangerType::WideAttack,
        DangerType::LongAttack,
        DangerType::RotateLineAttack,
        DangerType::MineExplode,
    ];

    fn attrib(self) -> &'static DangerAttrib {
        &ATTRIBS[self as usize]
    }

    /// Ticks the hazard stays active once triggered.
    pub fn turn_to_live(self) -> u32 {
        self.attrib().turn_to_live
    }

    /// Hitbox and display size multiplier.
    pub fn scale(self) -> f64 {
        self.attrib().scale
    }

    pub fn color(self) -> Color24 {
        self.attrib().color
    }
}

pub fn lifetime_ticks(kind: DangerType) -> u32 {
    kind.turn_to_live()
}

pub fn scale(kind: DangerType) -> f64 {
    kind.scale()
}

pub fn display_color(kind: DangerType) -> Color24 {
    kind.color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_danger_type_has_a_row() {
        for kind in DangerType::ALL {
            assert!(kind.scale() >= 1.0, "{kind:?} scale");
            assert_eq!(lifetime_ticks(kind), kind.turn_to_live());
        }
        assert_eq!(DangerType::None.turn_to_live(), 0);
        assert_eq!(DangerType::BasicAttack.turn_to_live(), 1);
    }

    #[test]
    fn rotating_and_explosive_hazards_are_drawn_larger() {
        assert_eq!(scale(DangerType::RotateLineAttack), 2.0);
        assert_eq!(scale(DangerType::MineExplode), 2.0);
        assert_eq!(scale(DangerType::LongAttack), 1.0);
    }

    #[test]
    fn colors_render_as_html_hex() {
        assert_eq!(display_color(DangerType::RotateLineAttack).to_string(), "#ff1493");
        assert_eq!(DangerType::MineExplode.color().rgb(), (0xFF, 0xA5, 0x00));
        assert_eq!(DangerType::None.color(), Color24::BLACK);
    }
}
