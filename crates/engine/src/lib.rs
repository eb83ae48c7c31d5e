//! Loyalty Engine - Points and spend calculations, and the profile view

pub mod points;
pub mod spend;
pub mod view;

pub use points::{active_balance, expiring_balance, PointsSummary};
pub use spend::lifetime_spend;
pub use view::{render, ProfileView, ProfileViewController, ProfileViewState, ViewOptions};
