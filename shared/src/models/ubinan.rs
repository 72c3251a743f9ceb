//! Sample plot constants and net weight

use serde::{Deserialize, Serialize};

use crate::normalize::parse_to_number;

/// Kilograms per hectare per kilogram of sample.
/// The ubinan plot is 2.5 m × 2.5 m, i.e. 1/1600 hectare.
pub const PLOT_SCALE_FACTOR: f64 = 1600.0;

pub const KG_PER_TON: f64 = 1000.0;

pub const QUINTAL_PER_TON: f64 = 10.0;

/// Weighed sample for one crop, as typed into the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SampleWeights {
    /// Gross sample weight in kg (formatted amount)
    pub gross: String,
    /// Container (sack) weight in kg (formatted amount)
    pub tare: String,
}

impl SampleWeights {
    /// Net sample weight in kg
    pub fn net_weight_kg(&self) -> f64 {
        net_weight(parse_to_number(&self.gross), parse_to_number(&self.tare))
    }
}

/// Gross minus tare, clamped at zero when the tare is heavier
pub fn net_weight(gross_kg: f64, tare_kg: f64) -> f64 {
    (gross_kg - tare_kg).max(0.0)
}

/// Scale a net sample weight to ton per hectare
pub fn sample_to_ton_per_ha(net_weight_kg: f64) -> f64 {
    net_weight_kg * PLOT_SCALE_FACTOR / KG_PER_TON
}

/// Apply a conversion percentage to a stage value
pub fn apply_conversion(value: f64, factor_pct: f64) -> f64 {
    value * (factor_pct / 100.0)
}
