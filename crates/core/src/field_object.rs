//! Rotating multi-wing line hazards attached to field objects.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::danger::DangerType;
use crate::grid::{DEGREES, wrap360};
use crate::sight::SightLineCache;
use crate::tile_area::TileArea;
use crate::types::{Pos, SightLine};

new_key_type! {
    pub struct FieldObjectId;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldObject {
    pub pos: Pos,
    /// Equally spaced wings swept around `pos`.
    pub wing_count: u32,
    pub wing_len: i32,
    /// Current rotation of the whole assembly, `0..360`.
    pub degree: i32,
    pub degree_per_tick: i32,
    pub danger_type: DangerType,
}

impl FieldObject {
    pub fn rotate_line_attack(pos: Pos, wing_count: u32, wing_len: i32, degree_per_tick: i32) -> Self {
        Self {
            pos,
            wing_count,
            wing_len,
            degree: 0,
            degree_per_tick,
            danger_type: DangerType::RotateLineAttack,
        }
    }

    pub fn with_degree(mut self, degree: i32) -> Self {
        self.degree = wrap360(degree);
        self
    }

    pub fn advance_rotation(&mut self) {
        self.degree = wrap360(self.degree + self.degree_per_tick);
    }

    /// Angle of wing `wing` at the current rotation.
    pub fn wing_degree(&self, wing: u32) -> i32 {
        let spacing = f64::from(DEGREES) / f64::from(self.wing_count);
        wrap360((f64::from(wing) * spacing).floor() as i32 + self.degree)
    }
}

/// Cached lines currently swept by each wing of `obj`, relative to `obj.pos`.
pub fn line_attack_cells(cache: &SightLineCache, obj: &FieldObject) -> Vec<SightLine> {
    assert!(obj.wing_count >= 1, "field object needs at least one wing");
    let table = cache.get_or_build(obj.wing_len);
    (0..obj.wing_count).map(|wing| table[obj.wing_degree(wing) as usize].clone()).collect()
}

/// A world cell covered by a hazard.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DangerCell {
    pub pos: Pos,
    pub danger_type: DangerType,
}

/// Absolute cells covered by `obj` on `area`. Each wing stops before the first
/// opaque cell; cells shared by several wings are reported once.
pub fn hazard_cells(area: &TileArea, cache: &SightLineCache, obj: &FieldObject) -> Vec<DangerCell> {
    let mut seen = BTreeSet::new();
    let mut cells = Vec::new();
    for line in line_attack_cells(cache, obj) {
        for step in line.iter() {
            let pos = area.wrap_pos(obj.pos.offset(step.x, step.y));
            if area.tile_at(pos).is_opaque() {
                break;
            }
            if seen.insert(pos) {
                cells.push(DangerCell { pos, danger_type: obj.danger_type });
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{TileFlag, TileKind};

    fn blade(wing_count: u32, wing_len: i32, degree: i32) -> FieldObject {
        FieldObject::rotate_line_attack(Pos { y: 10, x: 10 }, wing_count, wing_len, 1).with_degree(degree)
    }

    #[test]
    fn four_wings_at_zero_degrees_use_the_right_angles() {
        let cache = SightLineCache::new();
        let lines = line_attack_cells(&cache, &blade(4, 10, 0));
        let table = cache.get_or_build(10);
        assert_eq!(lines.len(), 4);
        for (line, deg) in lines.iter().zip([0, 90, 180, 270]) {
            assert!(line.shares_storage(&table[deg]), "wing at {deg} should reuse the cached line");
        }
    }

    #[test]
    fn wing_degrees_wrap_past_full_turn() {
        let obj = blade(2, 5, 350);
        assert_eq!(obj.wing_degree(0), 350);
        assert_eq!(obj.wing_degree(1), 170);

        let three = blade(3, 5, 0);
        assert_eq!((three.wing_degree(0), three.wing_degree(1), three.wing_degree(2)), (0, 120, 240));

        let seven = blade(7, 5, 0);
        assert_eq!(seven.wing_degree(1), 51);
    }

    #[test]
    fn rotation_advances_and_wraps_each_tick() {
        let mut obj = FieldObject::rotate_line_attack(Pos::default(), 2, 4, 7).with_degree(355);
        obj.advance_rotation();
        assert_eq!(obj.degree, 2);

        let mut backwards = FieldObject::rotate_line_attack(Pos::default(), 2, 4, -5).with_degree(3);
        backwards.advance_rotation();
        assert_eq!(backwards.degree, 358);
    }

    #[test]
    #[should_panic(expected = "at least one wing")]
    fn zero_wings_is_a_contract_violation() {
        line_attack_cells(&SightLineCache::new(), &blade(0, 3, 0));
    }

    #[test]
    fn hazard_cells_stop_at_walls_and_dedup_the_hub() {
        let mut area = TileArea::filled(30, 30, TileFlag::of(TileKind::Room));
        area.set_tile(Pos { y: 10, x: 13 }, TileFlag::of(TileKind::Wall));
        let cache = SightLineCache::new();
        let cells = hazard_cells(&area, &cache, &blade(2, 6, 0));

        let positions: Vec<Pos> = cells.iter().map(|c| c.pos).collect();
        assert_eq!(positions.iter().filter(|p| **p == Pos { y: 10, x: 10 }).count(), 1);
        assert!(positions.contains(&Pos { y: 10, x: 12 }));
        assert!(!positions.contains(&Pos { y: 10, x: 13 }), "wall cell must not be hit");
        assert!(!positions.contains(&Pos { y: 10, x: 14 }), "cells behind the wall must not be hit");
        assert!(positions.contains(&Pos { y: 10, x: 4 }), "west wing is unobstructed");
        assert!(cells.iter().all(|c| c.danger_type == DangerType::RotateLineAttack));
    }

    #[test]
    fn hazard_cells_wrap_around_the_area_edge() {
        let area = TileArea::filled(8, 8, TileFlag::of(TileKind::Room));
        let cache = SightLineCache::new();
        let obj = FieldObject::rotate_line_attack(Pos { y: 0, x: 6 }, 1, 3, 0);
        let cells = hazard_cells(&area, &cache, &obj);
        let positions: Vec<Pos> = cells.iter().map(|c| c.pos).collect();
        assert_eq!(
            positions,
            vec![Pos { y: 0, x: 6 }, Pos { y: 0, x: 7 }, Pos { y: 0, x: 0 }, Pos { y: 0, x: 1 }]
        );
    }
}
