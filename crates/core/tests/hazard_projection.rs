use sightline_core::{
    DangerType, FieldObject, Floor, GeometryConfig, GeometryEngine, Pos, SightLineCache, TileArea,
    TileFlag, TileKind, line_attack_cells, wrap360,
};

#[test]
fn test_four_wings_match_cardinal_table_entries() {
    let cache = SightLineCache::new();
    let obj = FieldObject::rotate_line_attack(Pos { y: 0, x: 0 }, 4, 10, 0);
    let lines = line_attack_cells(&cache, &obj);
    let table = cache.get_or_build(10);

    assert_eq!(lines.len(), 4);
    for (line, angle) in lines.iter().zip([0_usize, 90, 180, 270]) {
        assert_eq!(line, &table[angle], "wing at {angle} degrees");
    }
}

#[test]
fn test_wing_angles_follow_rotation() {
    let cache = SightLineCache::new();
    let table = cache.get_or_build(6);
    for degree in [0, 45, 179, 359] {
        let obj = FieldObject::rotate_line_attack(Pos::default(), 2, 6, 0).with_degree(degree);
        let lines = line_attack_cells(&cache, &obj);
        assert_eq!(lines[0], table[degree as usize]);
        assert_eq!(lines[1], table[wrap360(degree + 180) as usize]);
    }
}

#[test]
fn test_blade_trap_sweeps_a_full_turn_back_to_start() {
    let engine = GeometryEngine::new(GeometryConfig { viewport_radius: 5, ..GeometryConfig::default() });
    let mut floor = Floor::new("blade hall", TileArea::filled(40, 40, TileFlag::of(TileKind::Room)));
    floor.add_field_object(FieldObject::rotate_line_attack(Pos { y: 20, x: 20 }, 2, 8, 3));

    let start = floor.danger_cells(&engine);
    let start_hash = floor.snapshot_hash();
    for _ in 0..120 {
        floor.advance_tick();
    }
    assert_eq!(floor.danger_cells(&engine), start);
    assert_ne!(floor.snapshot_hash(), start_hash, "tick counter is part of the snapshot");
    assert!(start.iter().all(|c| c.danger_type == DangerType::RotateLineAttack));
}

#[test]
fn test_walls_shield_cells_from_rotating_blades() {
    let engine = GeometryEngine::new(GeometryConfig { viewport_radius: 5, ..GeometryConfig::default() });
    let mut area = TileArea::filled(30, 30, TileFlag::of(TileKind::Room));
    for y in 0..30 {
        area.set_tile(Pos { y, x: 18 }, TileFlag::of(TileKind::Wall));
    }
    let mut floor = Floor::new("shielded", area);
    floor.add_field_object(FieldObject::rotate_line_attack(Pos { y: 15, x: 15 }, 4, 9, 5));

    for _ in 0..72 {
        let cells = floor.danger_cells(&engine);
        assert!(
            cells.iter().all(|c| c.pos.x < 18),
            "tick {}: blade reached past the wall: {:?}",
            floor.current_tick(),
            cells.iter().filter(|c| c.pos.x >= 18).collect::<Vec<_>>()
        );
        floor.advance_tick();
    }
}
