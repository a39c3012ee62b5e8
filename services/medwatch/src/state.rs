//! Shared state for the ward: patients, rooms, access logs, and the live feed

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::data;
use crate::model::{AccessLogEntry, Notification, Patient, Room, Status};

/// Values for the dashboard's summary-stat tiles
#[derive(Debug, Clone, Serialize)]
pub struct WardStats {
    pub active_patients: usize,
    pub available_rooms: usize,
    pub active_alerts: usize,
    pub uptime: String,
}

/// All dashboard state, accessible by the simulator and the HTTP handlers
#[derive(Debug)]
pub struct WardState {
    pub patients: Vec<Patient>,
    pub rooms: Vec<Room>,
    pub access_logs: Vec<AccessLogEntry>,
    /// Live feed, newest first
    pub notifications: VecDeque<Notification>,
    pub notifications_cap: usize,
    pub started_at: Instant,
}

impl WardState {
    /// Empty state, used by tests that seed their own records
    pub fn new(notifications_cap: usize) -> Self {
        Self {
            patients: Vec::new(),
            rooms: Vec::new(),
            access_logs: Vec::new(),
            notifications: VecDeque::with_capacity(notifications_cap),
            notifications_cap,
            started_at: Instant::now(),
        }
    }

    /// State populated with the mock ward datasets
    pub fn seeded(notifications_cap: usize, now_ms: u64) -> Self {
        let mut state = Self::new(notifications_cap);
        state.patients = data::seed_patients();
        state.rooms = data::seed_rooms();
        state.access_logs = data::seed_access_logs(now_ms);
        state.notifications = data::seed_notifications(now_ms).into();
        state.notifications.truncate(notifications_cap);
        state
    }

    /// Insert a notification at the head of the feed, dropping the oldest
    /// entries beyond the cap
    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push_front(notification);
        self.notifications.truncate(self.notifications_cap);
    }

    /// Mark the matching notification read. Returns false when the id is
    /// unknown or the entry was already read; both are silent no-ops.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        if let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) {
            let changed = !n.is_read;
            n.is_read = true;
            changed
        } else {
            false
        }
    }

    /// Remove the matching notification. Returns false when the id is
    /// unknown; a silent no-op.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Count of unread feed entries, shown as the panel badge
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Summary-stat tile values derived from the current state
    pub fn stats(&self) -> WardStats {
        WardStats {
            active_patients: self.patients.len(),
            available_rooms: self
                .rooms
                .iter()
                .filter(|r| r.status == Status::Normal)
                .count(),
            active_alerts: self
                .rooms
                .iter()
                .filter(|r| matches!(r.status, Status::Anomaly | Status::Warning))
                .count(),
            uptime: "99.9%".to_string(),
        }
    }
}

/// Thread-safe shared state handle
pub type StateHandle = Arc<RwLock<WardState>>;

pub fn new_state_handle(notifications_cap: usize) -> StateHandle {
    Arc::new(RwLock::new(WardState::new(notifications_cap)))
}

pub fn new_seeded_handle(notifications_cap: usize, now_ms: u64) -> StateHandle {
    Arc::new(RwLock::new(WardState::seeded(notifications_cap, now_ms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NotificationKind;

    fn notification(id: &str, kind: NotificationKind, is_read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            kind,
            title: format!("{} title", id),
            message: format!("{} message", id),
            timestamp_epoch_ms: 0,
            patient_id: None,
            room: None,
            is_read,
        }
    }

    #[test]
    fn push_inserts_at_head() {
        let mut state = WardState::new(10);
        state.push_notification(notification("A", NotificationKind::Info, false));
        state.push_notification(notification("B", NotificationKind::Info, false));
        let ids: Vec<_> = state.notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn feed_never_exceeds_cap() {
        let mut state = WardState::new(10);
        for i in 0..25 {
            state.push_notification(notification(
                &format!("N{}", i),
                NotificationKind::Info,
                false,
            ));
        }
        assert_eq!(state.notifications.len(), 10);
        // Newest survive, oldest dropped
        assert_eq!(state.notifications.front().unwrap().id, "N24");
        assert_eq!(state.notifications.back().unwrap().id, "N15");
    }

    #[test]
    fn mark_as_read_is_idempotent() {
        let mut state = WardState::new(10);
        state.push_notification(notification("A", NotificationKind::Alert, false));
        assert!(state.mark_as_read("A"));
        let after_once: Vec<_> = state.notifications.iter().cloned().collect();
        assert!(!state.mark_as_read("A"));
        let after_twice: Vec<_> = state.notifications.iter().cloned().collect();
        assert_eq!(after_once.len(), after_twice.len());
        assert!(after_twice[0].is_read);
    }

    #[test]
    fn mark_as_read_unknown_id_is_a_noop() {
        let mut state = WardState::new(10);
        state.push_notification(notification("A", NotificationKind::Info, false));
        assert!(!state.mark_as_read("missing"));
        assert_eq!(state.notifications.len(), 1);
        assert!(!state.notifications[0].is_read);
    }

    #[test]
    fn dismiss_removes_exactly_one() {
        let mut state = WardState::new(10);
        state.push_notification(notification("A", NotificationKind::Info, false));
        state.push_notification(notification("B", NotificationKind::Warning, false));
        assert!(state.dismiss("A"));
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.notifications[0].id, "B");
        assert!(!state.dismiss("A"));
        assert_eq!(state.notifications.len(), 1);
    }

    #[test]
    fn unread_badge_scenario() {
        let mut state = WardState::new(10);
        state.push_notification(notification("N003", NotificationKind::Info, true));
        state.push_notification(notification("N002", NotificationKind::Warning, false));
        state.push_notification(notification("N001", NotificationKind::Alert, false));
        assert_eq!(state.unread_count(), 2);

        state.mark_as_read("N001");
        assert_eq!(state.unread_count(), 1);
        assert!(state
            .notifications
            .iter()
            .find(|n| n.id == "N001")
            .unwrap()
            .is_read);

        let before = state.notifications.len();
        state.dismiss("N002");
        assert_eq!(state.notifications.len(), before - 1);
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn unread_count_tracks_every_mutation() {
        let mut state = WardState::new(3);
        for i in 0..5 {
            state.push_notification(notification(
                &format!("N{}", i),
                NotificationKind::Info,
                i % 2 == 0,
            ));
            assert_eq!(
                state.unread_count(),
                state.notifications.iter().filter(|n| !n.is_read).count()
            );
        }
        state.mark_as_read("N3");
        state.dismiss("N4");
        assert_eq!(
            state.unread_count(),
            state.notifications.iter().filter(|n| !n.is_read).count()
        );
    }

    #[test]
    fn seeded_state_matches_mock_data() {
        let state = WardState::seeded(10, 0);
        assert_eq!(state.patients.len(), 5);
        assert_eq!(state.rooms.len(), 8);
        assert_eq!(state.access_logs.len(), 6);
        assert_eq!(state.notifications.len(), 4);
        assert_eq!(state.unread_count(), 2);
        // Feed is newest first: N001 was seeded 2 minutes ago, N004 30
        assert_eq!(state.notifications.front().unwrap().id, "N001");
        assert_eq!(state.notifications.back().unwrap().id, "N004");
    }

    #[test]
    fn stats_derive_from_seeded_rooms() {
        let state = WardState::seeded(10, 0);
        let stats = state.stats();
        assert_eq!(stats.active_patients, 5);
        assert_eq!(stats.available_rooms, 3);
        assert_eq!(stats.active_alerts, 2);
        assert_eq!(stats.uptime, "99.9%");
    }
}
