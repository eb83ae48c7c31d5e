//! Profile view: load state, derived values and text rendering

mod controller;
mod text;

pub use controller::*;
pub use text::*;
