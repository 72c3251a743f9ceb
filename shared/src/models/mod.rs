//! Domain models and conversion engine for ubinan productivity

mod corn;
mod rice;
mod ubinan;

pub use corn::*;
pub use rice::*;
pub use ubinan::*;
