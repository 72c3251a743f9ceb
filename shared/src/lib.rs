//! Core of the ubinan productivity calculator
//!
//! This crate contains the input normalizer, the conversion engine and the
//! session state shared between the WASM bindings and any other host.

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod normalize;
pub mod state;
pub mod types;

pub use self::config::*;
pub use display::*;
pub use error::*;
pub use models::*;
pub use normalize::*;
pub use state::*;
pub use types::*;
