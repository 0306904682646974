//! Proportional discount allocation over scored sales agents.
//!
//! The engine composes three pure pieces: a composite score per agent, a
//! narrative band classifying each score against the batch average, and the
//! distribution passes that reconcile proportional shares with the configured
//! bounds before rounding to cents.

pub mod domain;
mod engine;
mod justification;
mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{AgentAllocation, AgentId, AllocationOutcome, SalesAgent};
pub use engine::AllocationEngine;
pub use justification::{PerformanceBand, EQUAL_SPLIT_NARRATIVE, NO_KITTY_NARRATIVE};
