//! Calculator configuration
//!
//! Supports layered loading:
//! 1. Default values in code
//! 2. An optional JSON override document handed over by the host
//!
//! Nothing is read from disk or the environment; the configuration only
//! lives for one session.

use config::{ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::display::{format_number_for_display, RESULT_DECIMALS};
use crate::error::CalculatorResult;
use crate::models::{DEFAULT_DRY_FACTOR_PCT, DEFAULT_KERNEL_FACTOR_PCT, DEFAULT_MILLED_FACTOR_PCT};
use crate::normalize::normalize_input;
use crate::types::{CornMetric, RiceMetric, WeightUnit};

/// Main calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculatorConfig {
    pub rice: RiceConfig,
    pub corn: CornConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiceConfig {
    /// GKP to GKG conversion percentage
    pub dry_factor_pct: FactorSetting,

    /// GKG to Beras conversion percentage
    pub milled_factor_pct: FactorSetting,

    /// Metric selected when the session starts
    pub metric: RiceMetric,

    /// Unit selected when the session starts
    pub unit: WeightUnit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CornConfig {
    /// LKK to JPK conversion percentage
    pub kernel_factor_pct: FactorSetting,

    pub metric: CornMetric,

    pub unit: WeightUnit,
}

/// A conversion percentage as written in the configuration.
///
/// Text uses the form convention (`"84,25"`); plain JSON numbers (`84.25`)
/// are accepted as well.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FactorSetting {
    /// Must be finite and non-negative; `load` rejects anything else
    Number(f64),
    /// Goes through the keystroke normalizer, so a `-` is dropped like any
    /// other non-digit character
    Text(String),
}

impl FactorSetting {
    fn check(&self, key: &str) -> Result<(), ConfigError> {
        match self {
            FactorSetting::Number(value) if !value.is_finite() || *value < 0.0 => {
                Err(ConfigError::Message(format!(
                    "{key} must be a non-negative percentage, got {value}"
                )))
            }
            _ => Ok(()),
        }
    }

    /// Canonical formatted amount for the settings field
    pub fn to_formatted(&self) -> String {
        match self {
            FactorSetting::Number(value) => {
                normalize_input(&format_number_for_display(*value, RESULT_DECIMALS))
            }
            FactorSetting::Text(text) => normalize_input(text),
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from code defaults and an optional JSON override
    pub fn load(overrides_json: Option<&str>) -> CalculatorResult<Self> {
        let mut builder = config::Config::builder()
            .set_default("rice.dry_factor_pct", DEFAULT_DRY_FACTOR_PCT)?
            .set_default("rice.milled_factor_pct", DEFAULT_MILLED_FACTOR_PCT)?
            .set_default("rice.metric", RiceMetric::default().key())?
            .set_default("rice.unit", WeightUnit::default().key())?
            .set_default("corn.kernel_factor_pct", DEFAULT_KERNEL_FACTOR_PCT)?
            .set_default("corn.metric", CornMetric::default().key())?
            .set_default("corn.unit", WeightUnit::default().key())?;

        if let Some(json) = overrides_json.filter(|json| !json.trim().is_empty()) {
            builder = builder.add_source(File::from_str(json, FileFormat::Json));
        }

        let config: Self = builder.build()?.try_deserialize()?;
        config.rice.dry_factor_pct.check("rice.dry_factor_pct")?;
        config.rice.milled_factor_pct.check("rice.milled_factor_pct")?;
        config.corn.kernel_factor_pct.check("corn.kernel_factor_pct")?;

        tracing::info!(
            rice_dry = %config.rice.dry_factor_pct.to_formatted(),
            rice_milled = %config.rice.milled_factor_pct.to_formatted(),
            corn_kernel = %config.corn.kernel_factor_pct.to_formatted(),
            "Loaded calculator configuration"
        );

        Ok(config)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            rice: RiceConfig {
                dry_factor_pct: FactorSetting::Text(DEFAULT_DRY_FACTOR_PCT.to_string()),
                milled_factor_pct: FactorSetting::Text(DEFAULT_MILLED_FACTOR_PCT.to_string()),
                metric: RiceMetric::default(),
                unit: WeightUnit::default(),
            },
            corn: CornConfig {
                kernel_factor_pct: FactorSetting::Text(DEFAULT_KERNEL_FACTOR_PCT.to_string()),
                metric: CornMetric::default(),
                unit: WeightUnit::default(),
            },
        }
    }
}
