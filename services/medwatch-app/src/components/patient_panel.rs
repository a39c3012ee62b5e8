//! Searchable patient list

use crate::api::{self, PatientResponse};
use crate::components::status_badge::StatusBadge;
use crate::selection;
use leptos::prelude::*;

/// Fetches /api/patients (narrowed by the search box) and lists patients.
/// Clicking a row selects that patient.
#[component]
pub fn PatientPanel(selected_patient: RwSignal<Option<String>>) -> impl IntoView {
    let search = RwSignal::new(String::new());
    let patients = Resource::new(
        move || search.get(),
        |q| async move {
            api::get_json::<Vec<PatientResponse>>(&format!("/api/patients?q={}", q))
                .await
                .unwrap_or_default()
        },
    );

    view! {
        <section>
            <h2>"Active Patients"</h2>
            <input
                type="search"
                placeholder="Search patients..."
                style="width: 100%; box-sizing: border-box; padding: 0.4rem 0.6rem; margin-bottom: 0.5rem; border: 1px solid #ced4da; border-radius: 0.25rem;"
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <Suspense fallback=move || view! { <p>"Loading patients..."</p> }>
                {move || {
                    patients.get().map(|data| {
                        if data.is_empty() {
                            view! { <p>"No matching patients."</p> }.into_any()
                        } else {
                            view! {
                                <div>
                                    {data
                                        .into_iter()
                                        .map(|patient| {
                                            view! { <PatientRow patient selected_patient /> }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
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
fn PatientRow(patient: PatientResponse, selected_patient: RwSignal<Option<String>>) -> impl IntoView {
    let id_for_style = patient.id.clone();
    let id_for_click = patient.id.clone();

    let vitals = patient.vitals.map(|v| {
        view! {
            <span style="font-size: 0.75rem; color: #6c757d;">
                {format!("HR: {} bpm · Temp: {}°F", v.heart_rate, v.temperature)}
            </span>
        }
    });

    view! {
        <div
            style=move || {
                let highlight = if selected_patient.get().as_deref() == Some(id_for_style.as_str())
                {
                    " background-color: #e7f1ff; border-left: 4px solid #0d6efd;"
                } else {
                    ""
                };
                format!(
                    "border-bottom: 1px solid #dee2e6; padding: 0.75rem; cursor: pointer;{}",
                    highlight
                )
            }
            on:click=move |_| {
                selected_patient
                    .set(selection::select_patient(
                        selected_patient.get_untracked(),
                        &id_for_click,
                    ));
            }
        >
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <span>
                    <strong style="font-size: 0.9rem;">{patient.name}</strong>
                    <span style="font-size: 0.75rem; color: #6c757d; margin-left: 0.5rem;">
                        {format!("{} · Age {}", patient.id, patient.age)}
                    </span>
                </span>
                <StatusBadge status=patient.status />
            </div>
            <div style="font-size: 0.75rem; color: #6c757d; margin: 0.25rem 0;">
                {format!(
                    "{} · {} · {} steps",
                    patient.location,
                    patient.last_activity,
                    patient.movement_steps,
                )}
            </div>
            {vitals}
        </div>
    }
}
