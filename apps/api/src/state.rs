use std::sync::Arc;

use crate::ranking::geometry::TriangleLayout;
use crate::ranking::store::{MemoryWeightStore, WeightStore};
use crate::scoring::CompatibilityEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the immutable `EngineConfig`; cheap to clone.
    pub engine: CompatibilityEngine,
    /// Pluggable weight persistence. Redis when configured, in-memory otherwise.
    pub weight_store: Arc<dyn WeightStore>,
    /// Vertex layout for the weight triangle.
    pub layout: Arc<TriangleLayout>,
}

impl AppState {
    /// Default engine and layout over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            engine: CompatibilityEngine::default(),
            weight_store: Arc::new(MemoryWeightStore::new()),
            layout: Arc::new(TriangleLayout::default()),
        }
    }
}
