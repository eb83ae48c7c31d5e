//! Loyalty Networking - HTTP client and API wrappers

pub mod api;
pub mod http;

pub use api::LoyaltyApi;
pub use http::LoyaltyClient;
