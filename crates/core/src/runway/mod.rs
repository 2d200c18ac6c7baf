//! Runway module - how long savings last, under scenarios and shocks.
//!
//! The service derives everything from two inputs (an expense list and a
//! savings balance): a base runway in months, four comparative spending
//! scenarios, three stress tests and a set of narrative insights. All of
//! it is pure computation; nothing here persists or caches.

mod runway_display;
mod runway_model;
mod runway_service;
mod runway_traits;

// Re-export the public interface
pub use runway_display::format_runway_display;
pub use runway_model::{RunwayResult, RunwayScenario, StressTestScenario, ViabilityTier};
pub use runway_service::RunwayService;
pub use runway_traits::RunwayServiceTrait;
