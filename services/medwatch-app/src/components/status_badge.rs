//! Status badge component

use leptos::prelude::*;

/// A colored pill for statuses, notification kinds, and log actions
#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let (color, bg) = badge_colors(&status);

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span style=style>{status}</span>
    }
}

/// Foreground/background pair for a badge label
pub(crate) fn badge_colors(label: &str) -> (&'static str, &'static str) {
    match label {
        "normal" | "success" | "entry" => ("#155724", "#d4edda"),
        "occupied" | "info" | "exit" => ("#004085", "#cce5ff"),
        "anomaly" | "alert" | "denied" => ("#721c24", "#f8d7da"),
        "warning" => ("#856404", "#fff3cd"),
        _ => ("#383d41", "#e2e3e5"),
    }
}

/// Solid marker color for a room status on the floor plan
pub(crate) fn status_color(status: &str) -> &'static str {
    match status {
        "normal" => "#28a745",
        "occupied" => "#17a2b8",
        "anomaly" => "#dc3545",
        "warning" => "#ffc107",
        _ => "#6c757d",
    }
}
