//! Session state for the calculator form
//!
//! The host owns one [`SessionState`] and replaces it with the record
//! returned by [`SessionState::apply`] after every event. Results change only
//! on an explicit compute event; selection events re-render stored results.

use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::display::{format_number_for_display, render_result, RESULT_DECIMALS};
use crate::error::CalculatorResult;
use crate::models::{
    compute_corn, compute_rice, CornFactors, CornResults, RiceFactors, RiceResults, SampleWeights,
};
use crate::normalize::normalize_input;
use crate::types::{CornMetric, InputField, RiceMetric, WeightUnit};

/// Sub display shown before the first compute
pub const NOT_COMPUTED_HINT: &str = "Tekan tombol Hitung";

/// Events raised by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Event {
    /// A keystroke changed a numeric field; `raw` is the field's new text
    InputChanged { field: InputField, raw: String },
    ComputeRice,
    ComputeCorn,
    SelectRiceMetric(RiceMetric),
    SelectRiceUnit(WeightUnit),
    SelectCornMetric(CornMetric),
    SelectCornUnit(WeightUnit),
    SetSettingsOpen(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiceSession {
    pub sample: SampleWeights,
    pub factors: RiceFactors,
    pub metric: RiceMetric,
    pub unit: WeightUnit,
    /// `None` until the first compute
    pub results: Option<RiceResults>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornSession {
    pub sample: SampleWeights,
    pub factors: CornFactors,
    pub metric: CornMetric,
    pub unit: WeightUnit,
    pub results: Option<CornResults>,
}

/// One summary line: stage label and its ton/ha value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub settings_open: bool,
    pub rice: RiceSession,
    pub corn: CornSession,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}

impl SessionState {
    /// Fresh session seeded with configured factors and selections
    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self {
            settings_open: false,
            rice: RiceSession {
                sample: SampleWeights::default(),
                factors: RiceFactors {
                    dry_pct: config.rice.dry_factor_pct.to_formatted(),
                    milled_pct: config.rice.milled_factor_pct.to_formatted(),
                },
                metric: config.rice.metric,
                unit: config.rice.unit,
                results: None,
            },
            corn: CornSession {
                sample: SampleWeights::default(),
                factors: CornFactors {
                    kernel_pct: config.corn.kernel_factor_pct.to_formatted(),
                },
                metric: config.corn.metric,
                unit: config.corn.unit,
                results: None,
            },
        }
    }

    /// Return the state that follows `event`
    pub fn apply(&self, event: Event) -> SessionState {
        let mut next = self.clone();
        match event {
            Event::InputChanged { field, raw } => {
                *next.field_mut(field) = normalize_input(&raw);
            }
            Event::ComputeRice => {
                next.rice.results = Some(compute_rice(&self.rice.sample, &self.rice.factors));
            }
            Event::ComputeCorn => {
                next.corn.results = Some(compute_corn(&self.corn.sample, &self.corn.factors));
            }
            Event::SelectRiceMetric(metric) => {
                tracing::debug!(%metric, "Rice metric selected");
                next.rice.metric = metric;
            }
            Event::SelectRiceUnit(unit) => {
                tracing::debug!(%unit, "Rice unit selected");
                next.rice.unit = unit;
            }
            Event::SelectCornMetric(metric) => {
                tracing::debug!(%metric, "Corn metric selected");
                next.corn.metric = metric;
            }
            Event::SelectCornUnit(unit) => {
                tracing::debug!(%unit, "Corn unit selected");
                next.corn.unit = unit;
            }
            Event::SetSettingsOpen(open) => next.settings_open = open,
        }
        next
    }

    /// Current formatted text of a field
    pub fn field(&self, field: InputField) -> &str {
        match field {
            InputField::RiceGross => &self.rice.sample.gross,
            InputField::RiceTare => &self.rice.sample.tare,
            InputField::RiceDryFactor => &self.rice.factors.dry_pct,
            InputField::RiceMilledFactor => &self.rice.factors.milled_pct,
            InputField::CornGross => &self.corn.sample.gross,
            InputField::CornTare => &self.corn.sample.tare,
            InputField::CornKernelFactor => &self.corn.factors.kernel_pct,
        }
    }

    fn field_mut(&mut self, field: InputField) -> &mut String {
        match field {
            InputField::RiceGross => &mut self.rice.sample.gross,
            InputField::RiceTare => &mut self.rice.sample.tare,
            InputField::RiceDryFactor => &mut self.rice.factors.dry_pct,
            InputField::RiceMilledFactor => &mut self.rice.factors.milled_pct,
            InputField::CornGross => &mut self.corn.sample.gross,
            InputField::CornTare => &mut self.corn.sample.tare,
            InputField::CornKernelFactor => &mut self.corn.factors.kernel_pct,
        }
    }

    /// Selected rice stage in the selected unit
    pub fn rice_main_display(&self) -> String {
        let results = self.rice.results.unwrap_or_default();
        render_result(results.ton_per_ha(self.rice.metric), self.rice.unit)
    }

    pub fn rice_sub_display(&self) -> String {
        sub_display(self.rice.results.map(|r| r.net_weight_kg))
    }

    /// Every rice stage in ton/ha
    pub fn rice_summary(&self) -> Vec<SummaryRow> {
        let results = self.rice.results.unwrap_or_default();
        RiceMetric::ALL
            .into_iter()
            .map(|metric| summary_row(metric.to_string(), results.ton_per_ha(metric)))
            .collect()
    }

    /// Selected corn stage in the selected unit
    pub fn corn_main_display(&self) -> String {
        let results = self.corn.results.unwrap_or_default();
        render_result(results.ton_per_ha(self.corn.metric), self.corn.unit)
    }

    pub fn corn_sub_display(&self) -> String {
        sub_display(self.corn.results.map(|r| r.net_weight_kg))
    }

    /// Every corn stage in ton/ha
    pub fn corn_summary(&self) -> Vec<SummaryRow> {
        let results = self.corn.results.unwrap_or_default();
        CornMetric::ALL
            .into_iter()
            .map(|metric| summary_row(metric.to_string(), results.ton_per_ha(metric)))
            .collect()
    }

    /// JSON snapshot for the host
    pub fn snapshot_json(&self) -> CalculatorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn sub_display(net_weight_kg: Option<f64>) -> String {
    match net_weight_kg {
        Some(net) => format!(
            "Netto Ubinan: {} Kg",
            format_number_for_display(net, RESULT_DECIMALS)
        ),
        None => NOT_COMPUTED_HINT.to_string(),
    }
}

fn summary_row(label: String, ton_per_ha: f64) -> SummaryRow {
    SummaryRow {
        label,
        value: format_number_for_display(ton_per_ha, RESULT_DECIMALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: SessionState, field: InputField, raw: &str) -> SessionState {
        state.apply(Event::InputChanged {
            field,
            raw: raw.to_string(),
        })
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();
        assert!(!state.settings_open);
        assert_eq!(state.field(InputField::RiceDryFactor), "84,25");
        assert_eq!(state.field(InputField::RiceMilledFactor), "61,99");
        assert_eq!(state.field(InputField::CornKernelFactor), "55,94");
        assert_eq!(state.field(InputField::RiceGross), "");
        assert_eq!(state.rice_main_display(), "0");
        assert_eq!(state.rice_sub_display(), NOT_COMPUTED_HINT);
        assert_eq!(state.corn_main_display(), "0");
        assert_eq!(state.corn_sub_display(), NOT_COMPUTED_HINT);
    }

    #[test]
    fn test_input_is_normalized() {
        let state = typed(SessionState::default(), InputField::RiceGross, "12345.");
        assert_eq!(state.field(InputField::RiceGross), "12.345,");
        let state = typed(state, InputField::RiceGross, "12.345,5");
        assert_eq!(state.field(InputField::RiceGross), "12.345,5");
    }

    #[test]
    fn test_apply_leaves_previous_state_untouched() {
        let before = SessionState::default();
        let after = typed(before.clone(), InputField::CornGross, "7");
        assert_eq!(before.field(InputField::CornGross), "");
        assert_eq!(after.field(InputField::CornGross), "7");
    }

    #[test]
    fn test_typing_does_not_compute() {
        let state = typed(SessionState::default(), InputField::RiceGross, "10");
        assert!(state.rice.results.is_none());
        assert_eq!(state.rice_main_display(), "0");
    }

    #[test]
    fn test_compute_rice_and_render() {
        let state = typed(SessionState::default(), InputField::RiceGross, "1000,50");
        let state = typed(state, InputField::RiceTare, "10,00");
        let state = state
            .apply(Event::ComputeRice)
            .apply(Event::SelectRiceMetric(RiceMetric::Gkp));

        assert_eq!(state.field(InputField::RiceGross), "1.000,50");
        assert_eq!(state.rice_main_display(), "1.584,8");
        assert_eq!(state.rice_sub_display(), "Netto Ubinan: 990,5 Kg");

        let kg = state.apply(Event::SelectRiceUnit(WeightUnit::KgPerHa));
        assert_eq!(kg.rice_main_display(), "1.584.800");
        let kw = state.apply(Event::SelectRiceUnit(WeightUnit::QuintalPerHa));
        assert_eq!(kw.rice_main_display(), "15.848");
    }

    #[test]
    fn test_selection_does_not_recompute() {
        let state = typed(SessionState::default(), InputField::CornGross, "10");
        let computed = state.apply(Event::ComputeCorn);
        // editing after compute must not leak into the stored results
        let edited = typed(computed.clone(), InputField::CornGross, "20");
        let reselected = edited
            .apply(Event::SelectCornMetric(CornMetric::Lkk))
            .apply(Event::SelectCornUnit(WeightUnit::KgPerHa));

        assert_eq!(reselected.corn.results, computed.corn.results);
        assert_eq!(reselected.corn_main_display(), "16.000");
        assert_eq!(reselected.apply(Event::ComputeCorn).corn_main_display(), "32.000");
    }

    #[test]
    fn test_factor_edit_applies_on_next_compute() {
        let state = typed(SessionState::default(), InputField::RiceGross, "10");
        let state = state
            .apply(Event::ComputeRice)
            .apply(Event::SetSettingsOpen(true));
        assert!(state.settings_open);
        assert_eq!(state.rice_main_display(), "13,48");

        let state = typed(state, InputField::RiceDryFactor, "50")
            .apply(Event::SetSettingsOpen(false));
        assert!(!state.settings_open);
        assert_eq!(state.rice_main_display(), "13,48");
        assert_eq!(state.apply(Event::ComputeRice).rice_main_display(), "8");
    }

    #[test]
    fn test_tare_exceeds_gross_yields_zero() {
        let state = typed(SessionState::default(), InputField::RiceGross, "5");
        let state = typed(state, InputField::RiceTare, "10").apply(Event::ComputeRice);
        assert_eq!(state.rice_sub_display(), "Netto Ubinan: 0 Kg");
        assert!(state.rice_summary().iter().all(|row| row.value == "0"));
    }

    #[test]
    fn test_summaries() {
        let state = typed(SessionState::default(), InputField::CornGross, "6,5");
        let state = typed(state, InputField::CornTare, "0,5").apply(Event::ComputeCorn);
        let summary = state.corn_summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].label, "LKK (Tongkol)");
        assert_eq!(summary[0].value, "9,6");
        assert_eq!(summary[1].value, "5,37");

        let labels: Vec<String> = state.rice_summary().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["GKP", "GKG", "Beras"]);
    }

    #[test]
    fn test_from_config_selection() {
        let json = r#"{ "corn": { "metric": "lkk", "unit": "quintal_per_ha" } }"#;
        let config = CalculatorConfig::load(Some(json)).unwrap();
        let state = SessionState::from_config(&config);
        assert_eq!(state.corn.metric, CornMetric::Lkk);
        assert_eq!(state.corn.unit, WeightUnit::QuintalPerHa);
        assert_eq!(state.rice.metric, RiceMetric::Gkg);
    }

    #[test]
    fn test_snapshot_json() {
        let json = SessionState::default().snapshot_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rice"]["factors"]["dry_pct"], "84,25");
        assert_eq!(value["corn"]["metric"], "jpk");
        assert!(value["rice"]["results"].is_null());
    }

    #[test]
    fn test_event_deserialize() {
        let json = r#"{ "type": "input_changed", "value": { "field": "rice_tare", "raw": "2." } }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            Event::InputChanged {
                field: InputField::RiceTare,
                raw: "2.".to_string()
            }
        );

        let event: Event =
            serde_json::from_str(r#"{ "type": "select_rice_unit", "value": "kg_per_ha" }"#).unwrap();
        assert_eq!(event, Event::SelectRiceUnit(WeightUnit::KgPerHa));

        let event: Event = serde_json::from_str(r#"{ "type": "compute_corn" }"#).unwrap();
        assert_eq!(event, Event::ComputeCorn);
    }
}
