//! Corn (jagung) productivity models

use serde::{Deserialize, Serialize};

use super::{apply_conversion, sample_to_ton_per_ha, SampleWeights};
use crate::normalize::parse_to_number;
use crate::types::CornMetric;

pub const DEFAULT_KERNEL_FACTOR_PCT: &str = "55,94";

/// Corn conversion percentage, kept as a formatted amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CornFactors {
    /// LKK to JPK
    pub kernel_pct: String,
}

impl Default for CornFactors {
    fn default() -> Self {
        Self {
            kernel_pct: DEFAULT_KERNEL_FACTOR_PCT.to_string(),
        }
    }
}

/// Per-hectare corn estimates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CornResults {
    pub net_weight_kg: f64,
    pub lkk_ton_per_ha: f64,
    pub jpk_ton_per_ha: f64,
}

impl CornResults {
    pub fn ton_per_ha(&self, metric: CornMetric) -> f64 {
        match metric {
            CornMetric::Lkk => self.lkk_ton_per_ha,
            CornMetric::Jpk => self.jpk_ton_per_ha,
        }
    }
}

/// Compute corn productivity from the weighed sample and conversion factor
pub fn compute_corn(sample: &SampleWeights, factors: &CornFactors) -> CornResults {
    let net_weight_kg = sample.net_weight_kg();
    let lkk_ton_per_ha = sample_to_ton_per_ha(net_weight_kg);
    let jpk_ton_per_ha = apply_conversion(lkk_ton_per_ha, parse_to_number(&factors.kernel_pct));

    tracing::debug!(
        net_weight_kg,
        lkk_ton_per_ha,
        jpk_ton_per_ha,
        "Computed corn productivity"
    );

    CornResults {
        net_weight_kg,
        lkk_ton_per_ha,
        jpk_ton_per_ha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(gross: &str, tare: &str, kernel_pct: &str) -> CornResults {
        let sample = SampleWeights {
            gross: gross.to_string(),
            tare: tare.to_string(),
        };
        let factors = CornFactors {
            kernel_pct: kernel_pct.to_string(),
        };
        compute_corn(&sample, &factors)
    }

    #[test]
    fn test_compute_corn() {
        let results = compute("6,5", "0,5", "55,94");
        assert!((results.net_weight_kg - 6.0).abs() < 1e-9);
        assert!((results.lkk_ton_per_ha - 9.6).abs() < 1e-9);
        assert!((results.jpk_ton_per_ha - 9.6 * 0.5594).abs() < 1e-9);
    }

    #[test]
    fn test_compute_corn_tare_exceeds_gross() {
        assert_eq!(compute("5", "10", "55,94"), CornResults::default());
    }

    #[test]
    fn test_ton_per_ha_selects_stage() {
        let results = compute("10", "", "50");
        assert_eq!(results.ton_per_ha(CornMetric::Lkk), results.lkk_ton_per_ha);
        assert!((results.ton_per_ha(CornMetric::Jpk) - 8.0).abs() < 1e-9);
    }
}
