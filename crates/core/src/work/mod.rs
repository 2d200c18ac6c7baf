//! Work module - time and cost profile of a job.

mod work_model;

// Re-export the public interface
pub use work_model::{WorkCosts, WorkHours};
