//! Domain layer for Skycast
//!
//! Contains the weather view model, value objects and the resolution error
//! taxonomy. This layer performs no I/O and defines the ubiquitous language
//! shared by the orchestrator, the upstream adapters and the presentation layer.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::ResolutionError;
pub use value_objects::*;
