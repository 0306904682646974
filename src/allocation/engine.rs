use std::cmp::Ordering;

use tracing::debug;

use super::domain::{AgentAllocation, AgentId, AllocationOutcome, SalesAgent};
use super::justification::{PerformanceBand, EQUAL_SPLIT_NARRATIVE, NO_KITTY_NARRATIVE};
use super::scoring::{composite_score, AgentScore};
use crate::config::AllocationConfig;

/// Differences at or below this magnitude are settled during finalization
/// rather than redistributed.
const REDISTRIBUTION_TOLERANCE: f64 = 0.01;

/// Stateless engine applying the configured rubric to batches of agents.
pub struct AllocationEngine {
    config: AllocationConfig,
}

/// Per-agent working state across the proportional and redistribution passes.
struct ProvisionalShare {
    id: AgentId,
    score: f64,
    amount: f64,
    is_clamped: bool,
    band: PerformanceBand,
}

impl AllocationEngine {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    /// Distribute `kitty` across `agents` proportionally to their composite
    /// scores, reconciled against the configured bounds so the assigned total
    /// equals the kitty to the cent.
    ///
    /// Empty batches yield an empty outcome; a non-positive kitty yields a
    /// zero allocation for every agent. Both are defined results, not errors.
    pub fn allocate(&self, kitty: f64, agents: &[SalesAgent]) -> AllocationOutcome {
        if agents.is_empty() {
            return AllocationOutcome {
                allocations: Vec::new(),
            };
        }

        if kitty <= 0.0 {
            debug!(kitty, agents = agents.len(), "no kitty to distribute");
            let allocations = agents
                .iter()
                .map(|agent| AgentAllocation {
                    id: agent.id.clone(),
                    assigned_discount: 0.0,
                    justification: NO_KITTY_NARRATIVE.to_string(),
                })
                .collect();
            return AllocationOutcome { allocations };
        }

        let scores: Vec<AgentScore> = agents
            .iter()
            .map(|agent| AgentScore {
                id: agent.id.clone(),
                score: composite_score(agent, &self.config),
            })
            .collect();
        let total_score: f64 = scores.iter().map(|entry| entry.score).sum();

        if total_score == 0.0 {
            debug!(
                kitty,
                agents = agents.len(),
                "zero total score, splitting kitty equally"
            );
            let share = kitty / agents.len() as f64;
            let entries = scores
                .into_iter()
                .map(|entry| (entry.id, share, EQUAL_SPLIT_NARRATIVE.to_string()))
                .collect();
            return AllocationOutcome {
                allocations: finalize(kitty, entries),
            };
        }

        let average_score = total_score / agents.len() as f64;
        let bounds = self.config.bounds.resolve(kitty);
        // The floor only binds when the kitty can cover every agent's minimum;
        // an unaffordable floor degrades to zero instead of inventing money.
        let floor = if kitty >= bounds.min * agents.len() as f64 {
            bounds.min
        } else {
            0.0
        };

        let mut shares: Vec<ProvisionalShare> = scores
            .into_iter()
            .map(|entry| {
                let raw = (entry.score / total_score) * kitty;
                let mut amount = raw;
                let mut is_clamped = false;
                if amount > bounds.max {
                    amount = bounds.max;
                    is_clamped = true;
                } else if amount < floor {
                    amount = floor;
                    is_clamped = true;
                }
                if is_clamped {
                    debug!(id = ?entry.id, raw, amount, "share clamped to bounds");
                }
                ProvisionalShare {
                    band: PerformanceBand::classify(entry.score, average_score),
                    id: entry.id,
                    score: entry.score,
                    amount,
                    is_clamped,
                }
            })
            .collect();

        let assigned: f64 = shares.iter().map(|share| share.amount).sum();
        let difference = kitty - assigned;
        if difference.abs() > REDISTRIBUTION_TOLERANCE {
            let redistributable_score: f64 = shares
                .iter()
                .filter(|share| !share.is_clamped)
                .map(|share| share.score)
                .sum();
            if redistributable_score > 0.0 {
                debug!(
                    difference,
                    redistributable_score, "redistributing across unclamped agents"
                );
                for share in shares.iter_mut().filter(|share| !share.is_clamped) {
                    share.amount += (share.score / redistributable_score) * difference;
                }
            } else {
                debug!(difference, "every share clamped, residual settles in finalization");
            }
        }

        let entries = shares
            .into_iter()
            .map(|share| (share.id, share.amount, share.band.narrative().to_string()))
            .collect();
        AllocationOutcome {
            allocations: finalize(kitty, entries),
        }
    }
}

/// Currency-safe finalization.
///
/// Floors every amount at zero, rounds to cents (half away from zero), then
/// settles the residual against the kitty one cent at a time. Each cent goes
/// to the agent with the largest rounding deficit in the needed direction,
/// ties broken by input order, and no allocation is driven below zero. The
/// returned amounts therefore sum to the kitty exactly.
fn finalize(kitty: f64, entries: Vec<(AgentId, f64, String)>) -> Vec<AgentAllocation> {
    let kitty_cents = (kitty * 100.0).round() as i64;
    let exact_cents: Vec<f64> = entries
        .iter()
        .map(|(_, amount, _)| amount.max(0.0) * 100.0)
        .collect();
    let mut cents: Vec<i64> = exact_cents.iter().map(|value| value.round() as i64).collect();

    let mut residual = kitty_cents - cents.iter().sum::<i64>();
    if residual != 0 {
        debug!(residual, "settling rounding residual");
    }
    while residual != 0 {
        let step = residual.signum();
        let candidate = (0..cents.len())
            .filter(|&idx| step > 0 || cents[idx] > 0)
            .max_by(|&a, &b| {
                let deficit_a = (exact_cents[a] - cents[a] as f64) * step as f64;
                let deficit_b = (exact_cents[b] - cents[b] as f64) * step as f64;
                deficit_a
                    .partial_cmp(&deficit_b)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.cmp(&a))
            });
        let Some(idx) = candidate else {
            break;
        };
        cents[idx] += step;
        residual -= step;
    }

    entries
        .into_iter()
        .zip(cents)
        .map(|((id, _, justification), amount_cents)| AgentAllocation {
            id,
            assigned_discount: amount_cents as f64 / 100.0,
            justification,
        })
        .collect()
}
