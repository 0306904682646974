use super::domain::{AgentId, SalesAgent};
use crate::config::AllocationConfig;

/// Transient score attached to an agent for one allocation batch.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AgentScore {
    pub id: AgentId,
    pub score: f64,
}

/// Weighted composite of the four rubric attributes.
///
/// Seniority and client counts are clamped to their configured caps before
/// normalization, so an agent at or past a cap contributes exactly 100 for
/// that term. Caps are non-zero by `AllocationConfig::validate`.
pub(crate) fn composite_score(agent: &SalesAgent, config: &AllocationConfig) -> f64 {
    let weights = &config.weights;
    let caps = &config.normalization_caps;

    let seniority = normalize(
        agent.seniority_months.min(caps.seniority_months),
        caps.seniority_months,
    );
    let clients = normalize(
        agent.active_clients.min(caps.active_clients),
        caps.active_clients,
    );

    agent.performance_score * weights.performance_score
        + seniority * weights.seniority_months
        + agent.target_achieved_percent * weights.target_achieved_percent
        + clients * weights.active_clients
}

fn normalize(value: u32, cap: u32) -> f64 {
    (f64::from(value) / f64::from(cap)) * 100.0
}
