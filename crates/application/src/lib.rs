//! Application layer - Use cases and orchestration
//!
//! Defines the ports the upstream adapters implement and the services that
//! resolve a location into a weather snapshot and track dashboard state.

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
