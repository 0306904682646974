use serde::{Deserialize, Serialize};

/// Narrative attached when the kitty is zero or negative.
pub const NO_KITTY_NARRATIVE: &str = "No kitty available for allocation.";

/// Narrative attached when every composite score is zero and the kitty is
/// split evenly.
pub const EQUAL_SPLIT_NARRATIVE: &str =
    "All agents have identical performance scores, resulting in an equal distribution.";

/// Performance band of one agent relative to the batch average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceBand {
    TopTier,
    AboveAverage,
    BelowAverage,
    Moderate,
}

impl PerformanceBand {
    /// Classify a score against the batch average.
    ///
    /// Checks run in order and the first match wins. The bands are not a
    /// partition: scores between 0.70 and 0.90 of the average fall through
    /// to `Moderate`.
    pub fn classify(score: f64, average_score: f64) -> Self {
        if score > average_score * 1.1 {
            return PerformanceBand::TopTier;
        }
        if score > average_score * 0.9 {
            return PerformanceBand::AboveAverage;
        }
        if score < average_score * 0.7 {
            return PerformanceBand::BelowAverage;
        }
        PerformanceBand::Moderate
    }

    /// Fixed narrative surfaced to the agent alongside the amount.
    pub const fn narrative(self) -> &'static str {
        match self {
            PerformanceBand::TopTier => {
                "Consistently high performance and long-term contribution, excelling in all key metrics."
            }
            PerformanceBand::AboveAverage => {
                "Above average performance with consistent contribution across key metrics."
            }
            PerformanceBand::BelowAverage => {
                "Performance below the group average, with a focus on improving key metrics."
            }
            PerformanceBand::Moderate => "Moderate performance with potential for growth.",
        }
    }
}
