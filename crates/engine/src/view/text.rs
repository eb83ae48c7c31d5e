//! Plain-text rendering of the profile view

use super::{ProfileView, ProfileViewState};

/// Render the current state as the lines shown to the customer
pub fn render(state: &ProfileViewState) -> String {
    match state {
        ProfileViewState::Loading => "Loading profile...".to_string(),
        ProfileViewState::Failed(message) => message.clone(),
        ProfileViewState::Empty => "No profile data available.".to_string(),
        ProfileViewState::Loaded(view) => render_view(view),
    }
}

fn render_view(view: &ProfileView) -> String {
    let mut lines = vec![
        "Customer Profile".to_string(),
        format!("Name: {}", view.name),
        format!("Email: {}", view.email),
        format!("Tier: {}", view.tier),
        format!("Points Balance: {}", view.points_balance),
    ];
    if view.expiring_points > 0.0 {
        lines.push(format!(
            "Warning: You have {} points expiring within {} days!",
            view.expiring_points, view.warning_window
        ));
    }
    lines.push(format!(
        "Lifetime Spend: {}{}",
        view.currency_symbol,
        format_amount(view.lifetime_spend)
    ));
    lines.join("\n")
}

/// Group thousands with commas and keep at most three fraction digits,
/// dropping trailing zeros (`1234567.5` -> `1,234,567.5`).
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = amount < 0.0 && (grouped != "0" || !frac_part.is_empty());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
