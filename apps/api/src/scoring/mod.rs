// Compatibility Engine: dimension scorers, verification booster, dealbreaker
// gate and score blender. Everything below `handlers` is synchronous and pure.

pub mod blender;
pub mod company;
pub mod config;
pub mod engine;
pub mod facet_match;
pub mod gate;
pub mod handlers;
pub mod logistics;
pub mod performance;
pub mod recommendations;
pub mod requirements;
pub mod search;
pub mod skills;
pub mod verification;

pub use config::EngineConfig;
pub use engine::CompatibilityEngine;
pub use search::SearchCriteria;
