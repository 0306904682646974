use serde::{Deserialize, Serialize};

/// Identifier wrapper for sales agents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub String);

/// Point-in-time performance snapshot for one sales agent.
///
/// The engine treats the snapshot as immutable input; attribute ranges
/// (scores and percentages on a 0-100 scale) are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesAgent {
    pub id: AgentId,
    /// Manager-assessed performance on a 0-100 scale.
    pub performance_score: f64,
    pub seniority_months: u32,
    /// Quota attainment on a 0-100 scale.
    pub target_achieved_percent: f64,
    pub active_clients: u32,
}

/// Discount assigned to a single agent, with the narrative surfaced to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAllocation {
    pub id: AgentId,
    pub assigned_discount: f64,
    pub justification: String,
}

/// Engine output: one allocation per input agent, input order preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    pub allocations: Vec<AgentAllocation>,
}
