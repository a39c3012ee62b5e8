//! Room access log table with search and action filtering

use crate::api::{self, format_clock_time, AccessLogResponse};
use crate::components::status_badge::StatusBadge;
use leptos::prelude::*;

const ACTION_FILTERS: [&str; 4] = ["all", "entry", "exit", "denied"];

/// Fetches /api/logs narrowed by the search box and the action filter and
/// renders the access table
#[component]
pub fn AccessLogs() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let action = RwSignal::new("all");
    let logs = Resource::new(
        move || (search.get(), action.get()),
        |(q, a)| async move {
            api::get_json::<Vec<AccessLogResponse>>(&format!("/api/logs?q={}&action={}", q, a))
                .await
                .unwrap_or_default()
        },
    );

    view! {
        <section>
            <h2 style="display: flex; justify-content: space-between; align-items: center;">
                <span>"Room Access Logs"</span>
                // Export is an affordance only, not wired to any generation
                <button style="border: 1px solid #ced4da; background-color: #fff; border-radius: 0.25rem; padding: 0.25rem 0.6rem; font-size: 0.8rem;">
                    "Export CSV"
                </button>
            </h2>
            <div style="display: flex; gap: 0.5rem; margin-bottom: 0.5rem;">
                <input
                    type="search"
                    placeholder="Search logs..."
                    style="flex: 1; padding: 0.4rem 0.6rem; border: 1px solid #ced4da; border-radius: 0.25rem;"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                {ACTION_FILTERS
                    .into_iter()
                    .map(|f| {
                        view! {
                            <button
                                style=move || {
                                    if action.get() == f {
                                        "border: 1px solid #0d6efd; background-color: #0d6efd; \
                                         color: #fff; border-radius: 0.25rem; padding: 0.25rem 0.6rem; \
                                         cursor: pointer;"
                                    } else {
                                        "border: 1px solid #ced4da; background-color: #fff; \
                                         border-radius: 0.25rem; padding: 0.25rem 0.6rem; cursor: pointer;"
                                    }
                                }
                                on:click=move |_| action.set(f)
                            >
                                {f}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Suspense fallback=move || view! { <p>"Loading logs..."</p> }>
                {move || {
                    logs.get().map(|data| {
                        if data.is_empty() {
                            view! { <p style="text-align: center; color: #6c757d;">"No access logs found"</p> }
                                .into_any()
                        } else {
                            view! {
                                <table style="width: 100%; border-collapse: collapse;">
                                    <thead>
                                        <tr style="border-bottom: 2px solid #dee2e6;">
                                            <th style="padding: 0.5rem; text-align: left;">"Time"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Patient"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Room"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Action"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"Duration"</th>
                                            <th style="padding: 0.5rem; text-align: left;">"RFID"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {data.into_iter().map(|log| view! { <LogRow log /> }).collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn LogRow(log: AccessLogResponse) -> impl IntoView {
    // RFID column shows the trailing three characters, "RFID_001" -> "001"
    let rfid: String = log
        .rfid_id
        .chars()
        .skip(log.rfid_id.len().saturating_sub(3))
        .collect();

    view! {
        <tr style="border-bottom: 1px solid #dee2e6;">
            <td style="padding: 0.5rem; font-size: 0.8rem; color: #6c757d;">
                {format_clock_time(log.timestamp_epoch_ms)}
            </td>
            <td style="padding: 0.5rem;">
                <strong style="font-size: 0.85rem;">{log.patient_name}</strong>
                <br />
                <span style="font-size: 0.75rem; color: #6c757d;">{log.patient_id}</span>
            </td>
            <td style="padding: 0.5rem; font-size: 0.85rem;">{log.room}</td>
            <td style="padding: 0.5rem;">
                <StatusBadge status=log.action />
            </td>
            <td style="padding: 0.5rem; font-size: 0.85rem;">
                {log.duration.unwrap_or_else(|| "-".to_string())}
            </td>
            <td style="padding: 0.5rem; font-size: 0.8rem; color: #6c757d;">{rfid}</td>
        </tr>
    }
}
