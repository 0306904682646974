use crate::allocation::domain::{AgentAllocation, AgentId, AllocationOutcome, SalesAgent};
use crate::allocation::AllocationEngine;
use crate::config::{AllocationConfig, DiscountBounds, NormalizationCaps, ScoreWeights};

pub(super) fn allocation_config() -> AllocationConfig {
    AllocationConfig {
        weights: ScoreWeights {
            performance_score: 0.4,
            seniority_months: 0.2,
            target_achieved_percent: 0.3,
            active_clients: 0.1,
        },
        normalization_caps: NormalizationCaps {
            seniority_months: 60,
            active_clients: 20,
        },
        bounds: DiscountBounds::Absolute {
            min_discount: 100.0,
            max_discount: 9000.0,
        },
    }
}

pub(super) fn engine() -> AllocationEngine {
    AllocationEngine::new(allocation_config())
}

pub(super) fn engine_with_bounds(bounds: DiscountBounds) -> AllocationEngine {
    let mut config = allocation_config();
    config.bounds = bounds;
    AllocationEngine::new(config)
}

pub(super) fn agent(
    id: &str,
    performance: f64,
    seniority: u32,
    target: f64,
    clients: u32,
) -> SalesAgent {
    SalesAgent {
        id: AgentId(id.to_string()),
        performance_score: performance,
        seniority_months: seniority,
        target_achieved_percent: target,
        active_clients: clients,
    }
}

pub(super) fn identical_agents(count: usize) -> Vec<SalesAgent> {
    (1..=count)
        .map(|idx| agent(&format!("A{idx}"), 80.0, 12, 80.0, 10))
        .collect()
}

pub(super) fn varied_agents() -> Vec<SalesAgent> {
    vec![
        agent("A1", 90.0, 18, 85.0, 12),
        agent("A2", 70.0, 6, 60.0, 8),
        agent("A3", 95.0, 36, 98.0, 15),
        agent("A4", 55.0, 2, 40.0, 5),
    ]
}

pub(super) fn total_assigned(outcome: &AllocationOutcome) -> f64 {
    outcome
        .allocations
        .iter()
        .map(|allocation| allocation.assigned_discount)
        .sum()
}

pub(super) fn allocation_for<'a>(
    outcome: &'a AllocationOutcome,
    id: &str,
) -> &'a AgentAllocation {
    outcome
        .allocations
        .iter()
        .find(|allocation| allocation.id == AgentId(id.to_string()))
        .unwrap_or_else(|| panic!("allocation present for {id}"))
}
