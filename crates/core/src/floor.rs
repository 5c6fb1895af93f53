//! One floor of the world: its terrain, its field objects and its tick counter.
//! A floor is advanced by exactly one tick loop; geometry it needs comes from the shared engine.

use std::collections::BTreeMap;
use std::hash::Hasher;

use slotmap::SlotMap;
use tracing::debug;
use xxhash_rust::xxh3::Xxh3;

use crate::engine::GeometryEngine;
use crate::field_object::{DangerCell, FieldObject, FieldObjectId, hazard_cells};
use crate::tile_area::TileArea;
use crate::types::Pos;
use crate::visibility::{VisibleArea, visible_cells};

pub struct Floor {
    name: String,
    area: TileArea,
    objects: SlotMap<FieldObjectId, FieldObject>,
    tick: u64,
}

impl Floor {
    pub fn new(name: impl Into<String>, area: TileArea) -> Self {
        Self { name: name.into(), area, objects: SlotMap::with_key(), tick: 0 }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> &TileArea {
        &self.area
    }

    pub fn area_mut(&mut self) -> &mut TileArea {
        &mut self.area
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn add_field_object(&mut self, mut obj: FieldObject) -> FieldObjectId {
        assert!(obj.wing_count >= 1, "field object needs at least one wing");
        assert!(obj.wing_len >= 0, "wing length must be non-negative, got {}", obj.wing_len);
        obj.pos = self.area.wrap_pos(obj.pos);
        self.objects.insert(obj)
    }

    pub fn remove_field_object(&mut self, id: FieldObjectId) -> Option<FieldObject> {
        self.objects.remove(id)
    }

    pub fn field_object(&self, id: FieldObjectId) -> Option<&FieldObject> {
        self.objects.get(id)
    }

    pub fn field_objects(&self) -> impl Iterator<Item = (FieldObjectId, &FieldObject)> {
        self.objects.iter()
    }

    /// Rotates every field object by its per-tick step.
    pub fn advance_tick(&mut self) {
        for obj in self.objects.values_mut() {
            obj.advance_rotation();
        }
        self.tick += 1;
    }

    /// Every cell currently covered by a hazard. When hazards overlap, the
    /// object earliest in slot order owns the cell.
    pub fn danger_cells(&self, engine: &GeometryEngine) -> Vec<DangerCell> {
        let mut by_pos: BTreeMap<Pos, DangerCell> = BTreeMap::new();
        for obj in self.objects.values() {
            for cell in hazard_cells(&self.area, engine.cache(), obj) {
                by_pos.entry(cell.pos).or_insert(cell);
            }
        }
        debug!(floor = %self.name, tick = self.tick, cells = by_pos.len(), "resolved danger cells");
        by_pos.into_values().collect()
    }

    pub fn visible_from(&self, engine: &GeometryEngine, pos: Pos) -> VisibleArea {
        visible_cells(&self.area, pos, engine.viewport())
    }

    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.tick);
        hasher.write_u64(self.area.content_hash());
        for obj in self.objects.values() {
            hasher.write_i32(obj.pos.x);
            hasher.write_i32(obj.pos.y);
            hasher.write_u32(obj.wing_count);
            hasher.write_i32(obj.wing_len);
            hasher.write_i32(obj.degree);
            hasher.write_i32(obj.degree_per_tick);
            hasher.write_u8(obj.danger_type as u8);
        }
        hasher.finish()
    }
}
