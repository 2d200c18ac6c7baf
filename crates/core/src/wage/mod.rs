//! Wage module - what an hour of the job is really worth.
//!
//! The calculator starts from the salary figure on the offer letter and
//! works down to the rate actually paid once commute time and job-related
//! costs are counted. It also prices alternative arrangements (remote,
//! freelance, optimized) and scores work-life balance.

mod wage_model;
mod wage_service;
mod wage_traits;

// Re-export the public interface
pub use wage_model::{
    LiberationScenario, RealWageCalculation, TimeReclaiming, WageComparison, WageLiberation,
    WorkLifeBalance,
};
pub use wage_service::WageService;
pub use wage_traits::WageServiceTrait;
