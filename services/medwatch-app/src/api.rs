//! Client-side API fetch helpers
//!
//! These types mirror the server-side JSON response structures
//! and are shared between SSR and client-side hydration.

use serde::{Deserialize, Serialize};

/// Patient vitals as embedded in /api/patients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalsResponse {
    pub heart_rate: u32,
    pub temperature: f64,
}

/// Patient record as returned by /api/patients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientResponse {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub room: Option<String>,
    pub status: String,
    pub location: String,
    pub last_activity: String,
    pub movement_steps: u32,
    pub vitals: Option<VitalsResponse>,
}

/// Floor-plan position as embedded in /api/rooms
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PositionResponse {
    pub x: f64,
    pub y: f64,
}

/// Room record as returned by /api/rooms
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub name: String,
    pub status: String,
    pub position: PositionResponse,
    pub patient_id: Option<String>,
}

/// Access-log row as returned by /api/logs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessLogResponse {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub room: String,
    pub action: String,
    pub timestamp_epoch_ms: u64,
    pub rfid_id: String,
    pub duration: Option<String>,
}

/// Live-alert entry as returned by /api/notifications
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub timestamp_epoch_ms: u64,
    pub patient_id: Option<String>,
    pub room: Option<String>,
    pub is_read: bool,
}

/// Envelope of /api/notifications
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationFeedResponse {
    pub unread_count: usize,
    pub notifications: Vec<NotificationResponse>,
}

/// Summary tiles as returned by /api/stats
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    pub active_patients: usize,
    pub available_rooms: usize,
    pub active_alerts: usize,
    pub uptime: String,
}

/// GET a JSON API endpoint relative to the current origin.
///
/// In SSR mode this returns the default value (the server populates the page
/// on hydration); in hydrate/CSR mode it fetches from the JSON API.
pub async fn get_json<T>(path: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned + Default,
{
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}{}", origin, path);

        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;

        resp.json().await.map_err(|e| format!("{}", e))
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = path;
        Ok(T::default())
    }
}

/// POST to an API endpoint with an empty body, ignoring the response body
pub async fn post_empty(path: &str) -> Result<(), String> {
    #[cfg(all(feature = "hydrate", target_arch = "wasm32"))]
    {
        let window = web_sys::window().ok_or("no window")?;
        let origin = window.location().origin().map_err(|e| format!("{:?}", e))?;
        let url = format!("{}{}", origin, path);

        gloo_net::http::Request::post(&url)
            .send()
            .await
            .map_err(|e| format!("{}", e))?;
        Ok(())
    }

    #[cfg(not(all(feature = "hydrate", target_arch = "wasm32")))]
    {
        let _ = path;
        Ok(())
    }
}

/// Render an epoch-ms timestamp as a wall-clock string (UTC)
pub fn format_clock_time(epoch_ms: u64) -> String {
    let secs = epoch_ms / 1000;
    format!(
        "{:02}:{:02}:{:02}",
        (secs / 3600) % 24,
        (secs / 60) % 60,
        secs % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_time_wraps_at_midnight() {
        assert_eq!(format_clock_time(0), "00:00:00");
        assert_eq!(format_clock_time(24 * 3600 * 1000), "00:00:00");
        // 13:45:07
        assert_eq!(format_clock_time((13 * 3600 + 45 * 60 + 7) * 1000), "13:45:07");
    }

    #[test]
    fn feed_response_parses_server_shape() {
        let json = r#"{
            "unread_count": 1,
            "notifications": [{
                "id": "N001",
                "kind": "alert",
                "title": "Tampering Detection",
                "message": "Patient P003 wristband tampered in Room 103",
                "timestamp_epoch_ms": 1000,
                "patient_id": "P003",
                "room": "R103",
                "is_read": false
            }]
        }"#;
        let feed: NotificationFeedResponse = serde_json::from_str(json).unwrap();
        assert_eq!(feed.unread_count, 1);
        assert_eq!(feed.notifications[0].kind, "alert");
    }
}
