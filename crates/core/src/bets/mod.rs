//! Bets module - tracking small income experiments against essentials.

mod bets_model;
mod bets_service;
mod bets_traits;

// Re-export the public interface
pub use bets_model::{
    add_bet, remove_bet, set_bet_status, update_bet_performance, BetStatus, BetsSummary,
    NewSmallBet, SmallBet,
};
pub use bets_service::BetsService;
pub use bets_traits::BetsServiceTrait;
