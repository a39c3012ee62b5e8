//! Ward floor plan with clickable room markers

use crate::api::{self, RoomResponse};
use crate::components::status_badge::{status_color, StatusBadge};
use crate::selection;
use leptos::prelude::*;

/// Fetches /api/rooms and renders positioned room markers. The room holding
/// the selected patient is ringed; clicking a room with an assigned patient
/// moves the selection there.
#[component]
pub fn FloorPlan(selected_patient: RwSignal<Option<String>>) -> impl IntoView {
    let rooms = Resource::new(
        || (),
        |_| async move {
            api::get_json::<Vec<RoomResponse>>("/api/rooms")
                .await
                .unwrap_or_default()
        },
    );
    let hovered = RwSignal::new(None::<String>);

    view! {
        <section>
            <h2 style="display: flex; justify-content: space-between; align-items: center;">
                <span>"Hospital Floor Plan - Ward A"</span>
                <span style="font-size: 0.8rem; font-weight: 400;">
                    <Legend color="#28a745" label="Available" />
                    <Legend color="#17a2b8" label="Occupied" />
                    <Legend color="#ffc107" label="Warning" />
                    <Legend color="#dc3545" label="Alert" />
                </span>
            </h2>
            <Suspense fallback=move || view! { <p>"Loading floor plan..."</p> }>
                {move || {
                    rooms.get().map(|data| {
                        view! {
                            <div style="position: relative; height: 24rem; background-color: #e9ecef; border-radius: 0.5rem;">
                                {data
                                    .into_iter()
                                    .map(|room| view! { <RoomMarker room selected_patient hovered /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn Legend(color: &'static str, label: &'static str) -> impl IntoView {
    let dot = format!(
        "display: inline-block; width: 0.75rem; height: 0.75rem; border-radius: 50%; \
         margin: 0 0.25rem 0 0.75rem; background-color: {};",
        color
    );
    view! {
        <span style=dot></span>
        <span>{label}</span>
    }
}

#[component]
fn RoomMarker(
    room: RoomResponse,
    selected_patient: RwSignal<Option<String>>,
    hovered: RwSignal<Option<String>>,
) -> impl IntoView {
    // Markers show the trailing two digits, "R101" -> "01"
    let label: String = room.id.chars().skip(room.id.len().saturating_sub(2)).collect();

    let base_style = format!(
        "position: absolute; left: {}%; top: {}%; transform: translate(-50%, -50%); \
         width: 2rem; height: 2rem; border-radius: 0.5rem; display: flex; align-items: center; \
         justify-content: center; color: #fff; font-size: 0.75rem; font-weight: 700; \
         cursor: pointer; background-color: {};",
        room.position.x,
        room.position.y,
        status_color(&room.status)
    );

    let patient_for_style = room.patient_id.clone();
    let patient_for_click = room.patient_id.clone();
    let id_for_hover = room.id.clone();
    let id_for_leave = room.id.clone();
    let id_for_tip = room.id.clone();

    let tip_name = room.name.clone();
    let tip_status = room.status.clone();
    let tip_patient = room.patient_id.clone();

    view! {
        <div
            style=move || {
                let ring = if patient_for_style.is_some()
                    && selected_patient.get() == patient_for_style
                {
                    " outline: 4px solid rgba(13, 110, 253, 0.5);"
                } else {
                    ""
                };
                format!("{}{}", base_style, ring)
            }
            on:click=move |_| {
                selected_patient
                    .set(selection::room_clicked(
                        selected_patient.get_untracked(),
                        patient_for_click.as_deref(),
                    ));
            }
            on:mouseenter=move |_| hovered.set(Some(id_for_hover.clone()))
            on:mouseleave=move |_| {
                if hovered.get_untracked().as_deref() == Some(id_for_leave.as_str()) {
                    hovered.set(None);
                }
            }
        >
            {label}
            {move || {
                (hovered.get().as_deref() == Some(id_for_tip.as_str())).then(|| {
                    view! {
                        <div style="position: absolute; top: 100%; left: 50%; transform: translateX(-50%); margin-top: 0.5rem; background-color: #fff; color: #212529; border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 0.5rem; white-space: nowrap; z-index: 10;">
                            <p style="margin: 0 0 0.25rem; font-weight: 600; font-size: 0.85rem;">
                                {tip_name.clone()}
                            </p>
                            <StatusBadge status=tip_status.clone() />
                            {tip_patient
                                .clone()
                                .map(|p| {
                                    view! {
                                        <span style="font-size: 0.75rem; color: #6c757d; margin-left: 0.5rem;">
                                            {format!("Patient: {}", p)}
                                        </span>
                                    }
                                })}
                        </div>
                    }
                })
            }}
        </div>
    }
}
