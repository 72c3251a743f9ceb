//! Rice (padi) productivity models

use serde::{Deserialize, Serialize};

use super::{apply_conversion, sample_to_ton_per_ha, SampleWeights};
use crate::normalize::parse_to_number;
use crate::types::RiceMetric;

pub const DEFAULT_DRY_FACTOR_PCT: &str = "84,25";
pub const DEFAULT_MILLED_FACTOR_PCT: &str = "61,99";

/// Rice conversion percentages, kept as formatted amounts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RiceFactors {
    /// GKP to GKG
    pub dry_pct: String,
    /// GKG to Beras
    pub milled_pct: String,
}

impl Default for RiceFactors {
    fn default() -> Self {
        Self {
            dry_pct: DEFAULT_DRY_FACTOR_PCT.to_string(),
            milled_pct: DEFAULT_MILLED_FACTOR_PCT.to_string(),
        }
    }
}

/// Per-hectare rice estimates, cumulative per processing stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct RiceResults {
    pub net_weight_kg: f64,
    pub gkp_ton_per_ha: f64,
    pub gkg_ton_per_ha: f64,
    pub beras_ton_per_ha: f64,
}

impl RiceResults {
    pub fn ton_per_ha(&self, metric: RiceMetric) -> f64 {
        match metric {
            RiceMetric::Gkp => self.gkp_ton_per_ha,
            RiceMetric::Gkg => self.gkg_ton_per_ha,
            RiceMetric::Beras => self.beras_ton_per_ha,
        }
    }
}

/// Compute rice productivity from the weighed sample and conversion factors
pub fn compute_rice(sample: &SampleWeights, factors: &RiceFactors) -> RiceResults {
    let net_weight_kg = sample.net_weight_kg();
    let gkp_ton_per_ha = sample_to_ton_per_ha(net_weight_kg);
    let gkg_ton_per_ha = apply_conversion(gkp_ton_per_ha, parse_to_number(&factors.dry_pct));
    let beras_ton_per_ha =
        apply_conversion(gkg_ton_per_ha, parse_to_number(&factors.milled_pct));

    tracing::debug!(
        net_weight_kg,
        gkp_ton_per_ha,
        gkg_ton_per_ha,
        beras_ton_per_ha,
        "Computed rice productivity"
    );

    RiceResults {
        net_weight_kg,
        gkp_ton_per_ha,
        gkg_ton_per_ha,
        beras_ton_per_ha,
    }
}
