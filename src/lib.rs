//! Performance-weighted discount allocation for sales agent incentive kitties.
//!
//! The engine distributes a fixed budget (the "kitty") across a batch of sales
//! agents in proportion to a weighted composite of their performance
//! attributes, reconciles the proportional split against the configured
//! per-agent bounds, and finalizes in cent precision so the assigned total
//! always equals the kitty.
//!
//! The crate is a pure library. Callers load an [`AllocationConfig`] once,
//! build an [`AllocationEngine`], and invoke
//! [`AllocationEngine::allocate`] with in-memory agent batches; transport and
//! presentation belong to the embedding application.

pub mod allocation;
pub mod config;
pub mod telemetry;

pub use allocation::{
    AgentAllocation, AgentId, AllocationEngine, AllocationOutcome, PerformanceBand, SalesAgent,
};
pub use config::{AllocationConfig, ConfigError, DiscountBounds, NormalizationCaps, ScoreWeights};
