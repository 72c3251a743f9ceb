//! Selection types used across the calculator

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Crops supported by the ubinan survey
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Crop {
    /// Padi
    Rice,
    /// Jagung
    Corn,
}

impl Crop {
    pub const ALL: [Crop; 2] = [Crop::Rice, Crop::Corn];

    pub fn key(&self) -> &'static str {
        match self {
            Crop::Rice => "rice",
            Crop::Corn => "corn",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Crop::Rice => write!(f, "Padi"),
            Crop::Corn => write!(f, "Jagung"),
        }
    }
}

impl FromStr for Crop {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Crop::ALL
            .into_iter()
            .find(|crop| matches_name(s, crop.key(), &crop.to_string()))
            .ok_or_else(|| CalculatorError::UnknownCrop(s.to_string()))
    }
}

/// Rice processing stage shown on the result card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiceMetric {
    /// Gabah Kering Panen (wet unhulled)
    Gkp,
    /// Gabah Kering Giling (dry unhulled)
    #[default]
    Gkg,
    /// Milled rice
    Beras,
}

impl RiceMetric {
    pub const ALL: [RiceMetric; 3] = [RiceMetric::Gkp, RiceMetric::Gkg, RiceMetric::Beras];

    pub fn key(&self) -> &'static str {
        match self {
            RiceMetric::Gkp => "gkp",
            RiceMetric::Gkg => "gkg",
            RiceMetric::Beras => "beras",
        }
    }
}

impl std::fmt::Display for RiceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiceMetric::Gkp => write!(f, "GKP"),
            RiceMetric::Gkg => write!(f, "GKG"),
            RiceMetric::Beras => write!(f, "Beras"),
        }
    }
}

impl FromStr for RiceMetric {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiceMetric::ALL
            .into_iter()
            .find(|metric| matches_name(s, metric.key(), &metric.to_string()))
            .ok_or_else(|| CalculatorError::UnknownMetric(s.to_string()))
    }
}

/// Corn processing stage shown on the result card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CornMetric {
    /// Lepas Kulit Kering (dry unshelled cob)
    Lkk,
    /// Jagung Pipilan Kering (dry shelled kernel)
    #[default]
    Jpk,
}

impl CornMetric {
    pub const ALL: [CornMetric; 2] = [CornMetric::Lkk, CornMetric::Jpk];

    pub fn key(&self) -> &'static str {
        match self {
            CornMetric::Lkk => "lkk",
            CornMetric::Jpk => "jpk",
        }
    }
}

impl std::fmt::Display for CornMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CornMetric::Lkk => write!(f, "LKK (Tongkol)"),
            CornMetric::Jpk => write!(f, "JPK (Pipilan)"),
        }
    }
}

impl FromStr for CornMetric {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CornMetric::ALL
            .into_iter()
            .find(|metric| matches_name(s, metric.key(), &metric.to_string()))
            .ok_or_else(|| CalculatorError::UnknownMetric(s.to_string()))
    }
}

/// Per-hectare weight unit for rendering results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    #[default]
    TonPerHa,
    /// Kuintal per hectare (1 ton = 10 kw)
    QuintalPerHa,
    KgPerHa,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 3] = [
        WeightUnit::TonPerHa,
        WeightUnit::QuintalPerHa,
        WeightUnit::KgPerHa,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            WeightUnit::TonPerHa => "ton_per_ha",
            WeightUnit::QuintalPerHa => "quintal_per_ha",
            WeightUnit::KgPerHa => "kg_per_ha",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::TonPerHa => write!(f, "Ton/Ha"),
            WeightUnit::QuintalPerHa => write!(f, "Kw/Ha"),
            WeightUnit::KgPerHa => write!(f, "Kg/Ha"),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeightUnit::ALL
            .into_iter()
            .find(|unit| matches_name(s, unit.key(), &unit.to_string()))
            .ok_or_else(|| CalculatorError::UnknownUnit(s.to_string()))
    }
}

/// Numeric text fields the host forwards keystrokes from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    RiceGross,
    RiceTare,
    /// GKP to GKG conversion percentage
    RiceDryFactor,
    /// GKG to Beras conversion percentage
    RiceMilledFactor,
    CornGross,
    CornTare,
    /// LKK to JPK conversion percentage
    CornKernelFactor,
}

impl InputField {
    pub const ALL: [InputField; 7] = [
        InputField::RiceGross,
        InputField::RiceTare,
        InputField::RiceDryFactor,
        InputField::RiceMilledFactor,
        InputField::CornGross,
        InputField::CornTare,
        InputField::CornKernelFactor,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            InputField::RiceGross => "rice_gross",
            InputField::RiceTare => "rice_tare",
            InputField::RiceDryFactor => "rice_dry_factor",
            InputField::RiceMilledFactor => "rice_milled_factor",
            InputField::CornGross => "corn_gross",
            InputField::CornTare => "corn_tare",
            InputField::CornKernelFactor => "corn_kernel_factor",
        }
    }
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::RiceGross => write!(f, "Berat Kotor"),
            InputField::RiceTare => write!(f, "Berat Karung"),
            InputField::RiceDryFactor => write!(f, "GKP ke GKG"),
            InputField::RiceMilledFactor => write!(f, "GKG ke Beras"),
            InputField::CornGross => write!(f, "Berat Ubinan"),
            InputField::CornTare => write!(f, "Berat Karung"),
            InputField::CornKernelFactor => write!(f, "LKK ke JPK"),
        }
    }
}

impl FromStr for InputField {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Labels repeat across crops, so only keys are accepted here.
        let name = s.trim();
        InputField::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(name))
            .ok_or_else(|| CalculatorError::UnknownField(s.to_string()))
    }
}

fn matches_name(input: &str, key: &str, label: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case(key) || input.eq_ignore_ascii_case(label)
}
