//! High-level API operations used by the profile view

mod customer;

pub use customer::*;
