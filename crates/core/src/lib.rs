//! Greenfield Core - Domain models and calculation engines.
//!
//! This crate contains the deterministic calculators behind the Greenfield
//! Override toolkit: the savings-runway engine, the real-hourly-wage engine,
//! the cognitive-debt assessment, and the small-bets portfolio summary.
//! Every engine is a pure, synchronous function of its inputs; presentation
//! and persistence live in the embedding application.

pub mod bets;
pub mod cognitive;
pub mod constants;
pub mod errors;
pub mod expenses;
pub mod runway;
pub mod wage;
pub mod work;

// Re-export common types from the engine modules
pub use bets::*;
pub use cognitive::*;
pub use expenses::*;
pub use runway::*;
pub use wage::*;
pub use work::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
