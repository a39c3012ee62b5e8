//! Live-alerts feed with unread badge and mark-read/dismiss controls

use crate::api::{self, format_clock_time, NotificationResponse};
use crate::components::status_badge::StatusBadge;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fetches /api/notifications and renders the feed, newest first. Marking
/// and dismissing post back to the service and reload the feed. An unread
/// alert at the head of the feed surfaces a transient pop-up.
#[component]
pub fn NotificationPanel() -> impl IntoView {
    // Bumped after every mutation to refetch the feed
    let version = RwSignal::new(0u32);
    let feed = Resource::new(
        move || version.get(),
        |_| async move {
            api::get_json::<api::NotificationFeedResponse>("/api/notifications")
                .await
                .unwrap_or_default()
        },
    );

    view! {
        <section>
            <h2 style="display: flex; justify-content: space-between; align-items: center;">
                <span>"Live Alerts"</span>
                {move || {
                    feed.get()
                        .map(|data| data.unread_count)
                        .filter(|count| *count > 0)
                        .map(|count| {
                            view! {
                                <span style="display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; font-size: 0.7em; font-weight: 600; color: #721c24; background-color: #f8d7da;">
                                    {format!("{} new", count)}
                                </span>
                            }
                        })
                }}
            </h2>
            <Suspense fallback=move || view! { <p>"Loading alerts..."</p> }>
                {move || {
                    feed.get().map(|data| {
                        let toast = data
                            .notifications
                            .first()
                            .filter(|n| n.kind == "alert" && !n.is_read)
                            .map(|n| view! { <AlertToast notification=n.clone() /> });

                        if data.notifications.is_empty() {
                            view! {
                                <div>
                                    <p style="text-align: center; color: #6c757d;">"No active alerts"</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div>
                                    {toast}
                                    {data
                                        .notifications
                                        .into_iter()
                                        .map(|notification| {
                                            view! { <NotificationRow notification version /> }
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
fn NotificationRow(notification: NotificationResponse, version: RwSignal<u32>) -> impl IntoView {
    let row_style = if notification.is_read {
        "border-bottom: 1px solid #dee2e6; padding: 0.75rem;"
    } else {
        "border-bottom: 1px solid #dee2e6; padding: 0.75rem; background-color: #eef4ff; \
         border-left: 4px solid #0d6efd;"
    };

    let read_id = notification.id.clone();
    let dismiss_id = notification.id.clone();

    let mark_read = move |_| {
        let id = read_id.clone();
        spawn_local(async move {
            let _ = api::post_empty(&format!("/api/notifications/{}/read", id)).await;
            version.update(|v| *v += 1);
        });
    };
    let dismiss = move |_| {
        let id = dismiss_id.clone();
        spawn_local(async move {
            let _ = api::post_empty(&format!("/api/notifications/{}/dismiss", id)).await;
            version.update(|v| *v += 1);
        });
    };

    let tags: Vec<_> = [notification.patient_id.clone(), notification.room.clone()]
        .into_iter()
        .flatten()
        .map(|tag| view! { <StatusBadge status=tag /> })
        .collect();

    let button_style = "border: 1px solid #ced4da; background-color: #fff; border-radius: 0.25rem; \
                        padding: 0 0.4rem; cursor: pointer;";

    view! {
        <div style=row_style>
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <strong style="font-size: 0.9rem;">{notification.title.clone()}</strong>
                <span>
                    {(!notification.is_read)
                        .then(|| view! { <button style=button_style on:click=mark_read>"✓"</button> })}
                    <button style=button_style on:click=dismiss>"×"</button>
                </span>
            </div>
            <p style="margin: 0.25rem 0; font-size: 0.8rem; color: #6c757d;">
                {notification.message.clone()}
            </p>
            <span style="font-size: 0.75rem; color: #6c757d; margin-right: 0.5rem;">
                {format_clock_time(notification.timestamp_epoch_ms)}
            </span>
            <StatusBadge status=notification.kind.clone() />
            {tags}
        </div>
    }
}

/// Transient pop-up for a fresh high-severity event. Fades out on its own
/// after a few seconds; the feed keeps running underneath.
#[component]
fn AlertToast(notification: NotificationResponse) -> impl IntoView {
    view! {
        <style>
            "@keyframes medwatch-toast-out { to { opacity: 0; visibility: hidden; } }"
        </style>
        <div style="position: fixed; top: 1rem; right: 1rem; z-index: 100; background-color: #721c24; color: #fff; padding: 0.75rem 1rem; border-radius: 0.5rem; animation: medwatch-toast-out 0.5s ease 5s forwards;">
            <strong>{notification.title}</strong>
            <p style="margin: 0.25rem 0 0; font-size: 0.85rem;">{notification.message}</p>
        </div>
    }
}
