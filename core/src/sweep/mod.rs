//! Combination planning and sweep execution

pub mod planner;
pub mod record;
pub mod runner;

pub use planner::{plan, CandidateSets};
pub use record::{RecordOutcome, ResultRecord};
pub use runner::SweepRunner;
