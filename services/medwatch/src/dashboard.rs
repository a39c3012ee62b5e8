//! Web dashboard: server-rendered page plus JSON API endpoints

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::filter::{self, ActionFilter};
use crate::model::{AccessLogEntry, Patient};
use crate::state::StateHandle;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub state: StateHandle,
}

/// Build the dashboard axum router
pub fn build_router(state: StateHandle) -> Router {
    let dashboard_state = DashboardState { state };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/patients", get(patients_handler))
        .route("/api/rooms", get(rooms_handler))
        .route("/api/logs", get(logs_handler))
        .route("/api/notifications", get(notifications_handler))
        .route("/api/notifications/{id}/read", post(mark_read_handler))
        .route("/api/notifications/{id}/dismiss", post(dismiss_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(dashboard_state)
}

#[derive(Debug, Default, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Default, Deserialize)]
struct LogParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    action: ActionFilter,
}

async fn index_handler() -> impl IntoResponse {
    Html(INDEX_HTML)
}

async fn patients_handler(
    State(dashboard): State<DashboardState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let state = dashboard.state.read().await;
    let patients: Vec<Patient> = filter::filter_patients(&state.patients, &params.q)
        .into_iter()
        .cloned()
        .collect();
    Json(patients)
}

async fn rooms_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let state = dashboard.state.read().await;
    Json(state.rooms.clone())
}

async fn logs_handler(
    State(dashboard): State<DashboardState>,
    Query(params): Query<LogParams>,
) -> impl IntoResponse {
    let state = dashboard.state.read().await;
    let logs: Vec<AccessLogEntry> = filter::filter_logs(&state.access_logs, &params.q, params.action)
        .into_iter()
        .cloned()
        .collect();
    Json(logs)
}

async fn notifications_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let state = dashboard.state.read().await;
    let notifications: Vec<_> = state.notifications.iter().cloned().collect();
    Json(serde_json::json!({
        "unread_count": state.unread_count(),
        "notifications": notifications,
    }))
}

async fn mark_read_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<String>,
) -> StatusCode {
    let changed = dashboard.state.write().await.mark_as_read(&id);
    if !changed {
        tracing::debug!("mark_as_read: no unread notification with id '{}'", id);
    }
    StatusCode::NO_CONTENT
}

async fn dismiss_handler(
    State(dashboard): State<DashboardState>,
    Path(id): Path<String>,
) -> StatusCode {
    let removed = dashboard.state.write().await.dismiss(&id);
    if !removed {
        tracing::debug!("dismiss: no notification with id '{}'", id);
    }
    StatusCode::NO_CONTENT
}

async fn stats_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let state = dashboard.state.read().await;
    Json(state.stats())
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>MedWatch Hospital</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0; background: #f4f6f9; color: #212529; }
        header { background: #fff; border-bottom: 1px solid #dee2e6; padding: 1rem 1.5rem; display: flex; justify-content: space-between; align-items: center; }
        main { max-width: 1200px; margin: 0 auto; padding: 1rem 1.5rem; }
        section { background: #fff; border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem; margin-bottom: 1.5rem; }
        h2 { margin-top: 0; font-size: 1.1rem; }
        table { width: 100%; border-collapse: collapse; }
        th, td { padding: 0.5rem; text-align: left; border-bottom: 1px solid #dee2e6; }
        .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-bottom: 1.5rem; }
        .tile { background: #fff; border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem; }
        .tile p { margin: 0; color: #6c757d; font-size: 0.85rem; }
        .tile strong { font-size: 1.6rem; }
        .badge { display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; font-size: 0.8em; font-weight: 600; }
        .plan { position: relative; height: 24rem; background: #e9ecef; border-radius: 0.5rem; }
        .marker { position: absolute; transform: translate(-50%, -50%); width: 2rem; height: 2rem; border-radius: 0.5rem; color: #fff; font-size: 0.75rem; font-weight: 700; display: flex; align-items: center; justify-content: center; cursor: pointer; border: 2px solid transparent; }
        .marker.selected { outline: 4px solid rgba(13, 110, 253, 0.5); }
        .row { border-bottom: 1px solid #dee2e6; padding: 0.75rem; cursor: pointer; }
        .row.selected { background: #e7f1ff; border-left: 4px solid #0d6efd; }
        .entry { border-bottom: 1px solid #dee2e6; padding: 0.75rem; }
        .entry.unread { background: #eef4ff; border-left: 4px solid #0d6efd; }
        .muted { color: #6c757d; font-size: 0.8rem; }
        input[type=search] { width: 100%; box-sizing: border-box; padding: 0.4rem 0.6rem; margin-bottom: 0.5rem; border: 1px solid #ced4da; border-radius: 0.25rem; }
        button { cursor: pointer; border: 1px solid #ced4da; background: #fff; border-radius: 0.25rem; padding: 0.25rem 0.6rem; }
        button.active { background: #0d6efd; color: #fff; border-color: #0d6efd; }
        #toast { position: fixed; top: 1rem; right: 1rem; background: #721c24; color: #fff; padding: 0.75rem 1rem; border-radius: 0.5rem; display: none; z-index: 100; }
        .grid { display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem; align-items: start; }
    </style>
</head>
<body>
    <header>
        <div>
            <h1 style="margin: 0; font-size: 1.4rem;">MedWatch Hospital</h1>
            <p class="muted" style="margin: 0;">Real-time Patient Monitoring System</p>
        </div>
        <div style="text-align: right;">
            <span class="badge" style="color: #155724; background: #d4edda;">System Online</span>
            <p style="margin: 0.25rem 0 0; font-size: 0.85rem;">Dr. Sarah Mitchell</p>
            <p class="muted" style="margin: 0;">Chief of Staff</p>
        </div>
    </header>
    <main>
        <div class="stats" id="stats"></div>
        <div class="grid">
            <section>
                <h2>Hospital Floor Plan - Ward A</h2>
                <div class="plan" id="plan"></div>
            </section>
            <section>
                <h2>Active Patients (<span id="patient-count">0</span>)</h2>
                <input type="search" id="patient-search" placeholder="Search patients...">
                <div id="patients"></div>
            </section>
        </div>
        <div class="grid">
            <section>
                <h2 style="display: flex; justify-content: space-between;">
                    <span>Room Access Logs</span>
                    <button id="export-csv" title="Export CSV">Export CSV</button>
                </h2>
                <input type="search" id="log-search" placeholder="Search logs...">
                <div id="log-filters" style="margin-bottom: 0.5rem;"></div>
                <table>
                    <thead>
                        <tr><th>Time</th><th>Patient</th><th>Room</th><th>Action</th><th>Duration</th><th>RFID</th></tr>
                    </thead>
                    <tbody id="log-body"></tbody>
                </table>
            </section>
            <section>
                <h2>Live Alerts <span id="unread-badge" class="badge" style="color: #721c24; background: #f8d7da; display: none;"></span></h2>
                <div id="notifications"></div>
            </section>
        </div>
    </main>
    <div id="toast"></div>
    <script>
        const statusColors = {
            normal: '#28a745',
            occupied: '#17a2b8',
            anomaly: '#dc3545',
            warning: '#ffc107',
            offline: '#6c757d',
        };
        const badgeColors = {
            normal: ['#155724', '#d4edda'],
            occupied: ['#004085', '#cce5ff'],
            anomaly: ['#721c24', '#f8d7da'],
            warning: ['#856404', '#fff3cd'],
            offline: ['#383d41', '#e2e3e5'],
            alert: ['#721c24', '#f8d7da'],
            info: ['#004085', '#cce5ff'],
            success: ['#155724', '#d4edda'],
            entry: ['#155724', '#d4edda'],
            exit: ['#004085', '#cce5ff'],
            denied: ['#721c24', '#f8d7da'],
        };

        let selectedPatientId;
        let actionFilter = 'all';
        let rooms = [];
        const seenAlertIds = new Set();
        let firstNotificationLoad = true;

        function badge(text) {
            const [color, bg] = badgeColors[text] || ['#383d41', '#e2e3e5'];
            return `<span class="badge" style="color: ${color}; background: ${bg};">${text}</span>`;
        }

        function selectPatient(id) {
            // Selection never clears; clicking an empty room keeps the
            // current selection.
            if (id) {
                selectedPatientId = id;
                renderRooms();
                loadPatients();
            }
        }

        function renderRooms() {
            const plan = document.getElementById('plan');
            plan.innerHTML = rooms.map(room => {
                const selected = selectedPatientId && room.patient_id === selectedPatientId;
                return `<div class="marker ${selected ? 'selected' : ''}"
                    style="left: ${room.position.x}%; top: ${room.position.y}%; background: ${statusColors[room.status]};"
                    title="${room.name} (${room.status})${room.patient_id ? ' - Patient: ' + room.patient_id : ''}"
                    onclick="selectPatient('${room.patient_id || ''}')">${room.id.slice(-2)}</div>`;
            }).join('');
        }

        function loadRooms() {
            fetch('/api/rooms').then(r => r.json()).then(data => {
                rooms = data;
                renderRooms();
            });
        }

        function loadStats() {
            fetch('/api/stats').then(r => r.json()).then(stats => {
                document.getElementById('stats').innerHTML = `
                    <div class="tile"><p>Active Patients</p><strong>${stats.active_patients}</strong></div>
                    <div class="tile"><p>Available Rooms</p><strong>${stats.available_rooms}</strong></div>
                    <div class="tile"><p>Active Alerts</p><strong>${stats.active_alerts}</strong></div>
                    <div class="tile"><p>System Uptime</p><strong>${stats.uptime}</strong></div>`;
            });
        }

        function loadPatients() {
            const q = document.getElementById('patient-search').value;
            fetch('/api/patients?q=' + encodeURIComponent(q)).then(r => r.json()).then(data => {
                document.getElementById('patient-count').textContent = data.length;
                document.getElementById('patients').innerHTML = data.map(p => {
                    const selected = p.id === selectedPatientId;
                    const vitals = p.vitals
                        ? `<span class="muted">HR: ${p.vitals.heart_rate} bpm · Temp: ${p.vitals.temperature}°F</span>`
                        : '';
                    return `<div class="row ${selected ? 'selected' : ''}" onclick="selectPatient('${p.id}')">
                        <strong>${p.name}</strong> <span class="muted">${p.id} · Age ${p.age}</span> ${badge(p.status)}<br>
                        <span class="muted">${p.location} · ${p.last_activity} · ${p.movement_steps} steps</span><br>
                        ${vitals}</div>`;
                }).join('');
            });
        }

        function showToast(notification) {
            const toast = document.getElementById('toast');
            toast.textContent = notification.title + ': ' + notification.message;
            toast.style.display = 'block';
            setTimeout(() => { toast.style.display = 'none'; }, 5000);
        }

        function markRead(id) {
            fetch('/api/notifications/' + id + '/read', { method: 'POST' }).then(loadNotifications);
        }

        function dismiss(id) {
            fetch('/api/notifications/' + id + '/dismiss', { method: 'POST' }).then(loadNotifications);
        }

        function loadNotifications() {
            fetch('/api/notifications').then(r => r.json()).then(data => {
                const unreadBadge = document.getElementById('unread-badge');
                if (data.unread_count > 0) {
                    unreadBadge.textContent = data.unread_count + ' new';
                    unreadBadge.style.display = 'inline-block';
                } else {
                    unreadBadge.style.display = 'none';
                }
                for (const n of data.notifications) {
                    if (n.kind === 'alert' && !n.is_read && !seenAlertIds.has(n.id)) {
                        if (!firstNotificationLoad) showToast(n);
                        seenAlertIds.add(n.id);
                    }
                }
                firstNotificationLoad = false;
                const list = document.getElementById('notifications');
                if (data.notifications.length === 0) {
                    list.innerHTML = '<p class="muted">No active alerts</p>';
                    return;
                }
                list.innerHTML = data.notifications.map(n => {
                    const when = new Date(n.timestamp_epoch_ms).toLocaleTimeString();
                    const tags = [n.patient_id, n.room].filter(Boolean).map(badge).join(' ');
                    const readBtn = n.is_read ? '' : `<button onclick="markRead('${n.id}')">✓</button>`;
                    return `<div class="entry ${n.is_read ? '' : 'unread'}">
                        <div style="display: flex; justify-content: space-between;">
                            <strong>${n.title}</strong>
                            <span>${readBtn} <button onclick="dismiss('${n.id}')">×</button></span>
                        </div>
                        <p class="muted" style="margin: 0.25rem 0;">${n.message}</p>
                        <span class="muted">${when}</span> ${badge(n.kind)} ${tags}</div>`;
                }).join('');
            });
        }

        function renderLogFilters() {
            document.getElementById('log-filters').innerHTML = ['all', 'entry', 'exit', 'denied']
                .map(f => `<button class="${f === actionFilter ? 'active' : ''}" onclick="setActionFilter('${f}')">${f}</button>`)
                .join(' ');
        }

        function setActionFilter(f) {
            actionFilter = f;
            renderLogFilters();
            loadLogs();
        }

        function loadLogs() {
            const q = document.getElementById('log-search').value;
            fetch('/api/logs?q=' + encodeURIComponent(q) + '&action=' + actionFilter)
                .then(r => r.json()).then(data => {
                    const body = document.getElementById('log-body');
                    body.innerHTML = data.map(l => {
                        const when = new Date(l.timestamp_epoch_ms)
                            .toLocaleTimeString([], { hour: '2-digit', minute: '2-digit' });
                        return `<tr>
                            <td class="muted">${when}</td>
                            <td><strong>${l.patient_name}</strong><br><span class="muted">${l.patient_id}</span></td>
                            <td>${l.room}</td>
                            <td>${badge(l.action)}</td>
                            <td>${l.duration || '-'}</td>
                            <td class="muted">${l.rfid_id.slice(-3)}</td>
                        </tr>`;
                    }).join('');
                });
        }

        function refreshData() {
            loadStats();
            loadRooms();
            loadPatients();
            loadNotifications();
            loadLogs();
        }

        document.getElementById('patient-search').addEventListener('input', loadPatients);
        document.getElementById('log-search').addEventListener('input', loadLogs);

        renderLogFilters();
        refreshData();
        setInterval(refreshData, 5000);
    </script>
</body>
</html>"##;
