//! Data models for loyalty-program entities

mod customer;
mod points;
mod transaction;

pub use customer::*;
pub use points::*;
pub use transaction::*;
