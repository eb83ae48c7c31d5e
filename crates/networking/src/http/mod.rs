//! HTTP transport

mod client;

pub use client::{LoyaltyClient, DEFAULT_BASE_URL};
