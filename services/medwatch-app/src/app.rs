//! Main App component

use crate::api::{self, StatsResponse};
use crate::components::access_logs::AccessLogs;
use crate::components::floor_plan::FloorPlan;
use crate::components::notification_panel::NotificationPanel;
use crate::components::patient_panel::PatientPanel;
use leptos::prelude::*;

/// Root application component. Owns the selected-patient state shared by the
/// floor plan and the patient panel.
#[component]
pub fn App() -> impl IntoView {
    let selected_patient = RwSignal::new(None::<String>);

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 1200px; margin: 0 auto; padding: 1rem;">
            <header style="display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid #dee2e6; padding-bottom: 1rem; margin-bottom: 1rem;">
                <span>
                    <h1 style="margin: 0; font-size: 1.4rem;">"MedWatch Hospital"</h1>
                    <p style="margin: 0; color: #6c757d; font-size: 0.85rem;">
                        "Real-time Patient Monitoring System"
                    </p>
                </span>
                <span style="text-align: right;">
                    <span style="display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; font-size: 0.8em; font-weight: 600; color: #155724; background-color: #d4edda;">
                        "System Online"
                    </span>
                    <p style="margin: 0.25rem 0 0; font-size: 0.85rem;">"Dr. Sarah Mitchell"</p>
                    <p style="margin: 0; color: #6c757d; font-size: 0.75rem;">"Chief of Staff"</p>
                </span>
            </header>
            <StatsBar />
            <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; align-items: start;">
                <FloorPlan selected_patient />
                <PatientPanel selected_patient />
            </div>
            <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; align-items: start;">
                <AccessLogs />
                <NotificationPanel />
            </div>
        </main>
    }
}

/// Fetches /api/stats and renders the four summary tiles
#[component]
fn StatsBar() -> impl IntoView {
    let stats = Resource::new(
        || (),
        |_| async move {
            api::get_json::<StatsResponse>("/api/stats")
                .await
                .unwrap_or_default()
        },
    );

    view! {
        <Suspense fallback=move || view! { <p>"Loading stats..."</p> }>
            {move || {
                stats.get().map(|s| {
                    view! {
                        <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-bottom: 1.5rem;">
                            <StatTile label="Active Patients" value=s.active_patients.to_string() />
                            <StatTile label="Available Rooms" value=s.available_rooms.to_string() />
                            <StatTile label="Active Alerts" value=s.active_alerts.to_string() />
                            <StatTile label="System Uptime" value=s.uptime />
                        </div>
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
fn StatTile(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div style="background-color: #fff; border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem;">
            <p style="margin: 0; color: #6c757d; font-size: 0.85rem;">{label}</p>
            <strong style="font-size: 1.6rem;">{value}</strong>
        </div>
    }
}
