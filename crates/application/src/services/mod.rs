//! Application services
//!
//! Use cases built on top of the ports: the location resolution
//! orchestrator and the dashboard state it feeds.

mod dashboard;
mod generation;
mod location_resolution_service;

pub use dashboard::{Dashboard, DashboardState, RequestOutcome, ResolutionPhase};
pub use generation::{Generation, GenerationTracker};
pub use location_resolution_service::{
    DEFAULT_FALLBACK_CITY, FallbackPolicy, LocationResolutionService, ResolutionConfig,
};
