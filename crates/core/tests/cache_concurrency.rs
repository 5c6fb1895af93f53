use std::sync::{Arc, Barrier};
use std::thread;

use sightline_core::sight::build_wing_table;
use sightline_core::{FieldObject, GeometryConfig, GeometryEngine, Pos, SightLineCache, line_attack_cells};

#[test]
fn test_concurrent_requests_for_new_radius_build_once() {
    let cache = Arc::new(SightLineCache::new());
    let barrier = Arc::new(Barrier::new(100));

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                cache.get_or_build(17)
            })
        })
        .collect();

    let tables: Vec<_> = handles.into_iter().map(|h| h.join().expect("worker panicked")).collect();

    assert_eq!(cache.build_count(), 1, "table must be built exactly once");
    assert_eq!(cache.len(), 1);
    for table in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], table), "every caller must observe the same table");
    }
    assert_eq!(tables[0].as_slice(), build_wing_table(17).as_slice());
}

#[test]
fn test_concurrent_floors_mixing_radii_never_duplicate_builds() {
    let engine = Arc::new(GeometryEngine::new(GeometryConfig {
        viewport_radius: 4,
        ..GeometryConfig::default()
    }));

    let handles: Vec<_> = (0..16)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let mut total = 0;
                for tick in 0..50 {
                    let obj = FieldObject::rotate_line_attack(Pos::default(), 3, (worker + tick) % 6, 1)
                        .with_degree(tick * 7);
                    total += line_attack_cells(engine.cache(), &obj).len();
                }
                total
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), 150);
    }
    assert_eq!(engine.cache().radii(), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(engine.cache().build_count(), 6);
}
