//! The geometry subsystem a server constructs once at startup and shares
//! between every floor it simulates.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::config::GeometryConfig;
use crate::field_object::{FieldObject, line_attack_cells};
use crate::sight::{SightLineCache, ViewportTable};
use crate::types::SightLine;

pub struct GeometryEngine {
    cache: Arc<SightLineCache>,
    viewport: ViewportTable,
    config: GeometryConfig,
}

impl GeometryEngine {
    pub fn new(config: GeometryConfig) -> Self {
        Self::with_cache(config, Arc::new(SightLineCache::new()))
    }

    /// Builds an engine around an existing cache, e.g. one shared with another engine.
    pub fn with_cache(config: GeometryConfig, cache: Arc<SightLineCache>) -> Self {
        let started = Instant::now();
        let viewport = ViewportTable::new(config.viewport_radius);
        cache.prewarm(config.prewarm_wing_lens.iter().copied());
        info!(
            viewport_radius = config.viewport_radius,
            viewport_cells = viewport.len(),
            prewarmed = config.prewarm_wing_lens.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "geometry engine ready"
        );
        Self { cache, viewport, config }
    }

    pub fn cache(&self) -> &Arc<SightLineCache> {
        &self.cache
    }

    pub fn viewport(&self) -> &ViewportTable {
        &self.viewport
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    pub fn line_attack_cells(&self, obj: &FieldObject) -> Vec<SightLine> {
        line_attack_cells(&self.cache, obj)
    }
}
