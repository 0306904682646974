use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the configuration document.
const CONFIG_PATH_VAR: &str = "ALLOCATION_CONFIG_PATH";

/// Path consulted when the environment names none.
const DEFAULT_CONFIG_PATH: &str = "config/allocation.json";

/// Rubric configuration for the allocation engine.
///
/// Loaded once at startup and read-only afterwards. The document uses
/// camelCase keys with the bound fields at the top level, e.g.
/// `{"weights": {...}, "normalizationCaps": {...}, "minDiscount": 100.0,
/// "maxDiscount": 5000.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationConfig {
    pub weights: ScoreWeights,
    pub normalization_caps: NormalizationCaps,
    #[serde(flatten)]
    pub bounds: DiscountBounds,
}

/// Relative weights for the composite score; they need not sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    pub performance_score: f64,
    pub seniority_months: f64,
    pub target_achieved_percent: f64,
    pub active_clients: f64,
}

/// Ceilings applied to unbounded attributes before normalization.
///
/// Both caps must be non-zero; `validate` rejects documents that would
/// divide by zero during scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationCaps {
    pub seniority_months: u32,
    pub active_clients: u32,
}

/// Per-agent bound conventions observed across deployments.
///
/// Some configurations carry absolute bounds, others a minimum expressed as
/// a fraction of the kitty. Deserialization accepts either shape; the engine
/// resolves whichever was provided to an absolute interval per allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiscountBounds {
    #[serde(rename_all = "camelCase")]
    Absolute { min_discount: f64, max_discount: f64 },
    #[serde(rename_all = "camelCase")]
    PercentOfKitty { min_discount_percent: f64 },
}

/// Bound interval fixed for one allocation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBounds {
    pub min: f64,
    pub max: f64,
}

impl DiscountBounds {
    /// Absolute `[min, max]` interval for a concrete kitty.
    ///
    /// The fraction convention has no separate ceiling, so the kitty itself
    /// caps a single agent's share.
    pub fn resolve(&self, kitty: f64) -> ResolvedBounds {
        match *self {
            DiscountBounds::Absolute {
                min_discount,
                max_discount,
            } => ResolvedBounds {
                min: min_discount,
                max: max_discount,
            },
            DiscountBounds::PercentOfKitty {
                min_discount_percent,
            } => ResolvedBounds {
                min: kitty * min_discount_percent,
                max: kitty,
            },
        }
    }
}

impl AllocationConfig {
    /// Load the document named by `ALLOCATION_CONFIG_PATH`, falling back to
    /// `config/allocation.json`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path =
            env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_path(path)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject documents the engine is not defined over.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normalization_caps.seniority_months == 0 {
            return Err(ConfigError::ZeroCap {
                field: "seniorityMonths",
            });
        }
        if self.normalization_caps.active_clients == 0 {
            return Err(ConfigError::ZeroCap {
                field: "activeClients",
            });
        }

        let weights = [
            self.weights.performance_score,
            self.weights.seniority_months,
            self.weights.target_achieved_percent,
            self.weights.active_clients,
        ];
        if weights.iter().any(|weight| !weight.is_finite() || *weight < 0.0) {
            return Err(ConfigError::InvalidWeights);
        }

        match self.bounds {
            DiscountBounds::Absolute {
                min_discount,
                max_discount,
            } => {
                if min_discount < 0.0 || max_discount < 0.0 {
                    return Err(ConfigError::NegativeBound);
                }
                if min_discount > max_discount {
                    return Err(ConfigError::InvertedBounds {
                        min: min_discount,
                        max: max_discount,
                    });
                }
            }
            DiscountBounds::PercentOfKitty {
                min_discount_percent,
            } => {
                if !(0.0..=1.0).contains(&min_discount_percent) {
                    return Err(ConfigError::PercentOutOfRange(min_discount_percent));
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file '{path}' is unreadable")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("normalization cap '{field}' must be non-zero")]
    ZeroCap { field: &'static str },
    #[error("score weights must be finite and non-negative")]
    InvalidWeights,
    #[error("discount bounds must be non-negative")]
    NegativeBound,
    #[error("minDiscount {min} exceeds maxDiscount {max}")]
    InvertedBounds { min: f64, max: f64 },
    #[error("minDiscountPercent {0} must fall within [0, 1]")]
    PercentOutOfRange(f64),
}
