//! Per-radius memo of the 360 one-degree sight lines used by wing hazards.

use std::array;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::ORIGIN_CENTER;
use super::raster::{rasterize, to_cell_lens};
use crate::grid::DEGREES;
use crate::types::SightLine;

/// Entry `d` is the line from the origin cell to the point `d` degrees round at the table radius,
/// with each cell's `len` measured to its offset.
pub type WingTable = [SightLine; DEGREES as usize];

pub fn build_wing_table(radius: i32) -> WingTable {
    assert!(radius >= 0, "wing radius must be non-negative, got {radius}");
    let r = f64::from(radius);
    array::from_fn(|deg| {
        let rad = (deg as f64).to_radians();
        to_cell_lens(&rasterize(
            ORIGIN_CENTER,
            ORIGIN_CENTER,
            ORIGIN_CENTER + r * rad.cos(),
            ORIGIN_CENTER + r * rad.sin(),
        ))
    })
}

/// Shared between every floor of a server. Tables are built under one lock and
/// never change or get evicted afterwards.
#[derive(Default)]
pub struct SightLineCache {
    tables: Mutex<BTreeMap<i32, Arc<WingTable>>>,
    builds: AtomicUsize,
}

impl SightLineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table for `radius`, building it on first request. Concurrent
    /// first requests for the same radius wait for a single build.
    pub fn get_or_build(&self, radius: i32) -> Arc<WingTable> {
        assert!(radius >= 0, "wing radius must be non-negative, got {radius}");
        let mut tables = self.tables.lock();
        if let Some(table) = tables.get(&radius) {
            trace!(radius, "sight-line table cache hit");
            return Arc::clone(table);
        }

        let started = Instant::now();
        let table = Arc::new(build_wing_table(radius));
        self.builds.fetch_add(1, Ordering::Relaxed);
        debug!(
            radius,
            elapsed_us = started.elapsed().as_micros() as u64,
            cached_radii = tables.len() + 1,
            "built sight-line table"
        );
        tables.insert(radius, Arc::clone(&table));
        table
    }

    pub fn prewarm(&self, radii: impl IntoIterator<Item = i32>) {
        for radius in radii {
            self.get_or_build(radius);
        }
    }

    pub fn contains(&self, radius: i32) -> bool {
        self.tables.lock().contains_key(&radius)
    }

    pub fn len(&self) -> usize {
        self.tables.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn radii(&self) -> Vec<i32> {
        self.tables.lock().keys().copied().collect()
    }

    /// Number of tables built so far; equals `len()` unless a build was duplicated.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}
