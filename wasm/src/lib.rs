//! WebAssembly module for the Ubinan Productivity Calculator
//!
//! Provides the form host with:
//! - Keystroke normalization for numeric fields
//! - Rice and corn productivity computation
//! - Result rendering per metric and unit

use std::str::FromStr;

use wasm_bindgen::prelude::*;

pub mod logging;

// Re-export shared types for Rust hosts
pub use shared::models::*;
pub use shared::types::*;

use shared::{CalculatorConfig, CalculatorError, Event, SessionState};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    logging::init(None);
}

/// Install logging with a custom filter, e.g. `"shared=debug"`
#[wasm_bindgen]
pub fn init_logging(filter: &str) {
    logging::init(Some(filter));
}

/// Reformat raw field text into the `1.234,5` convention
#[wasm_bindgen]
pub fn normalize_input(raw: &str) -> String {
    shared::normalize_input(raw)
}

/// Parse a formatted amount; malformed text is 0
#[wasm_bindgen]
pub fn parse_amount(formatted: &str) -> f64 {
    shared::parse_to_number(formatted)
}

/// Format a number for summary displays
#[wasm_bindgen]
pub fn format_number_for_display(value: f64, decimals: u32) -> String {
    shared::format_number_for_display(value, decimals as usize)
}

/// Render a ton/ha value in the named unit
#[wasm_bindgen]
pub fn render_result(ton_per_ha: f64, unit: &str) -> Result<String, JsValue> {
    let unit = parse_name::<WeightUnit>(unit)?;
    Ok(shared::render_result(ton_per_ha, unit))
}

/// Calculator session bound to one form
#[wasm_bindgen]
pub struct Calculator {
    state: SessionState,
}

#[wasm_bindgen]
impl Calculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Calculator {
        Calculator {
            state: SessionState::default(),
        }
    }

    /// Session seeded from a JSON configuration override
    pub fn with_config(config_json: &str) -> Result<Calculator, JsValue> {
        let config = CalculatorConfig::load(Some(config_json)).map_err(to_js_error)?;
        Ok(Calculator {
            state: SessionState::from_config(&config),
        })
    }

    /// Store a keystroke and return the normalized text for the field
    pub fn input_changed(&mut self, field: &str, raw: &str) -> Result<String, JsValue> {
        let field = parse_name::<InputField>(field)?;
        self.apply(Event::InputChanged {
            field,
            raw: raw.to_string(),
        });
        Ok(self.state.field(field).to_string())
    }

    pub fn field_value(&self, field: &str) -> Result<String, JsValue> {
        let field = parse_name::<InputField>(field)?;
        Ok(self.state.field(field).to_string())
    }

    pub fn compute_rice(&mut self) {
        self.apply(Event::ComputeRice);
    }

    pub fn compute_corn(&mut self) {
        self.apply(Event::ComputeCorn);
    }

    pub fn select_rice_metric(&mut self, name: &str) -> Result<(), JsValue> {
        let metric = parse_name::<RiceMetric>(name)?;
        self.apply(Event::SelectRiceMetric(metric));
        Ok(())
    }

    pub fn select_rice_unit(&mut self, name: &str) -> Result<(), JsValue> {
        let unit = parse_name::<WeightUnit>(name)?;
        self.apply(Event::SelectRiceUnit(unit));
        Ok(())
    }

    pub fn select_corn_metric(&mut self, name: &str) -> Result<(), JsValue> {
        let metric = parse_name::<CornMetric>(name)?;
        self.apply(Event::SelectCornMetric(metric));
        Ok(())
    }

    pub fn select_corn_unit(&mut self, name: &str) -> Result<(), JsValue> {
        let unit = parse_name::<WeightUnit>(name)?;
        self.apply(Event::SelectCornUnit(unit));
        Ok(())
    }

    /// Apply an event given as JSON, e.g. `{"type":"compute_rice"}`
    pub fn dispatch(&mut self, event_json: &str) -> Result<(), JsValue> {
        let event: Event = serde_json::from_str(event_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid event JSON: {}", e)))?;
        self.apply(event);
        Ok(())
    }

    pub fn set_settings_open(&mut self, open: bool) {
        self.apply(Event::SetSettingsOpen(open));
    }

    pub fn settings_open(&self) -> bool {
        self.state.settings_open
    }

    pub fn rice_main_display(&self) -> String {
        self.state.rice_main_display()
    }

    pub fn rice_sub_display(&self) -> String {
        self.state.rice_sub_display()
    }

    pub fn corn_main_display(&self) -> String {
        self.state.corn_main_display()
    }

    pub fn corn_sub_display(&self) -> String {
        self.state.corn_sub_display()
    }

    /// Summary rows (`[{label, value}]`) for the named crop
    pub fn summary_json(&self, crop: &str) -> Result<String, JsValue> {
        let rows = match parse_name::<Crop>(crop)? {
            Crop::Rice => self.state.rice_summary(),
            Crop::Corn => self.state.corn_summary(),
        };
        serde_json::to_string(&rows).map_err(|e| to_js_error(e.into()))
    }

    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.state.snapshot_json().map_err(to_js_error)
    }
}

impl Calculator {
    fn apply(&mut self, event: Event) {
        self.state = self.state.apply(event);
    }

    /// Current session state
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_name<T>(name: &str) -> Result<T, JsValue>
where
    T: FromStr<Err = CalculatorError>,
{
    name.parse::<T>().map_err(to_js_error)
}

fn to_js_error(error: CalculatorError) -> JsValue {
    tracing::warn!("Rejected host call: {}", error);
    JsValue::from_str(&error.to_string())
}
