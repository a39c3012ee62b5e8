//! Static mock datasets for the ward
//!
//! Everything the dashboard shows at startup comes from here. Timestamps are
//! expressed relative to a caller-supplied "now" so the feed reads naturally
//! no matter when the service starts.

use crate::model::{
    AccessAction, AccessLogEntry, Notification, NotificationKind, Patient, Position, Room, Status,
    Vitals,
};

fn minutes_ago(now_ms: u64, minutes: u64) -> u64 {
    now_ms.saturating_sub(minutes * 60 * 1000)
}

/// The five monitored patients on Ward A
pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P001".to_string(),
            name: "John Smith".to_string(),
            age: 45,
            room: Some("R101".to_string()),
            status: Status::Occupied,
            location: "Room 101".to_string(),
            last_activity: "2 minutes ago".to_string(),
            movement_steps: 1250,
            vitals: Some(Vitals {
                heart_rate: 72,
                temperature: 98.6,
            }),
        },
        Patient {
            id: "P002".to_string(),
            name: "Sarah Johnson".to_string(),
            age: 32,
            room: Some("R104".to_string()),
            status: Status::Occupied,
            location: "Room 104".to_string(),
            last_activity: "5 minutes ago".to_string(),
            movement_steps: 890,
            vitals: Some(Vitals {
                heart_rate: 68,
                temperature: 99.1,
            }),
        },
        Patient {
            id: "P003".to_string(),
            name: "Michael Davis".to_string(),
            age: 67,
            room: Some("R103".to_string()),
            status: Status::Anomaly,
            location: "Room 103".to_string(),
            last_activity: "15 minutes ago".to_string(),
            movement_steps: 45,
            vitals: Some(Vitals {
                heart_rate: 95,
                temperature: 100.2,
            }),
        },
        Patient {
            id: "P004".to_string(),
            name: "Emily Wilson".to_string(),
            age: 28,
            room: Some("R202".to_string()),
            status: Status::Warning,
            location: "Room 202".to_string(),
            last_activity: "8 minutes ago".to_string(),
            movement_steps: 2100,
            vitals: Some(Vitals {
                heart_rate: 88,
                temperature: 98.9,
            }),
        },
        Patient {
            id: "P005".to_string(),
            name: "Robert Brown".to_string(),
            age: 55,
            room: Some("R203".to_string()),
            status: Status::Occupied,
            location: "Room 203".to_string(),
            last_activity: "1 minute ago".to_string(),
            movement_steps: 650,
            vitals: Some(Vitals {
                heart_rate: 75,
                temperature: 98.4,
            }),
        },
    ]
}

/// The eight rooms on the Ward A floor plan
pub fn seed_rooms() -> Vec<Room> {
    fn room(id: &str, name: &str, status: Status, x: f64, y: f64, patient_id: Option<&str>) -> Room {
        Room {
            id: id.to_string(),
            name: name.to_string(),
            status,
            position: Position { x, y },
            patient_id: patient_id.map(str::to_string),
        }
    }

    vec![
        room("R101", "Room 101", Status::Occupied, 15.0, 25.0, Some("P001")),
        room("R102", "Room 102", Status::Normal, 35.0, 25.0, None),
        room("R103", "Room 103", Status::Anomaly, 55.0, 25.0, Some("P003")),
        room("R104", "Room 104", Status::Occupied, 75.0, 25.0, Some("P002")),
        room("R201", "Room 201", Status::Normal, 15.0, 65.0, None),
        room("R202", "Room 202", Status::Warning, 35.0, 65.0, Some("P004")),
        room("R203", "Room 203", Status::Occupied, 55.0, 65.0, Some("P005")),
        room("R204", "Room 204", Status::Normal, 75.0, 65.0, None),
    ]
}

/// Recent RFID access events, newest first
pub fn seed_access_logs(now_ms: u64) -> Vec<AccessLogEntry> {
    struct Row<'a> {
        id: &'a str,
        patient_id: &'a str,
        patient_name: &'a str,
        room: &'a str,
        action: AccessAction,
        minutes_back: u64,
        rfid_id: &'a str,
        duration: Option<&'a str>,
    }

    let rows = [
        Row {
            id: "LOG001",
            patient_id: "P001",
            patient_name: "John Smith",
            room: "R101",
            action: AccessAction::Entry,
            minutes_back: 5,
            rfid_id: "RFID_001",
            duration: None,
        },
        Row {
            id: "LOG002",
            patient_id: "P002",
            patient_name: "Sarah Johnson",
            room: "R104",
            action: AccessAction::Entry,
            minutes_back: 12,
            rfid_id: "RFID_002",
            duration: Some("45 min"),
        },
        Row {
            id: "LOG003",
            patient_id: "P004",
            patient_name: "Emily Wilson",
            room: "Common Area",
            action: AccessAction::Denied,
            minutes_back: 18,
            rfid_id: "RFID_004",
            duration: None,
        },
        Row {
            id: "LOG004",
            patient_id: "P003",
            patient_name: "Michael Davis",
            room: "R103",
            action: AccessAction::Exit,
            minutes_back: 25,
            rfid_id: "RFID_003",
            duration: Some("2h 15min"),
        },
        Row {
            id: "LOG005",
            patient_id: "P005",
            patient_name: "Robert Brown",
            room: "R203",
            action: AccessAction::Entry,
            minutes_back: 32,
            rfid_id: "RFID_005",
            duration: None,
        },
        Row {
            id: "LOG006",
            patient_id: "P001",
            patient_name: "John Smith",
            room: "Pharmacy",
            action: AccessAction::Denied,
            minutes_back: 45,
            rfid_id: "RFID_001",
            duration: None,
        },
    ];

    rows.iter()
        .map(|r| AccessLogEntry {
            id: r.id.to_string(),
            patient_id: r.patient_id.to_string(),
            patient_name: r.patient_name.to_string(),
            room: r.room.to_string(),
            action: r.action,
            timestamp_epoch_ms: minutes_ago(now_ms, r.minutes_back),
            rfid_id: r.rfid_id.to_string(),
            duration: r.duration.map(str::to_string),
        })
        .collect()
}

/// The notifications present before the simulator produces anything
pub fn seed_notifications(now_ms: u64) -> Vec<Notification> {
    vec![
        Notification {
            id: "N001".to_string(),
            kind: NotificationKind::Alert,
            title: "Tampering Detection".to_string(),
            message: "Patient P003 wristband tampered in Room 103".to_string(),
            timestamp_epoch_ms: minutes_ago(now_ms, 2),
            patient_id: Some("P003".to_string()),
            room: Some("R103".to_string()),
            is_read: false,
        },
        Notification {
            id: "N002".to_string(),
            kind: NotificationKind::Warning,
            title: "Boundary Alert".to_string(),
            message: "Patient P004 approaching unauthorized area".to_string(),
            timestamp_epoch_ms: minutes_ago(now_ms, 8),
            patient_id: Some("P004".to_string()),
            room: Some("R202".to_string()),
            is_read: false,
        },
        Notification {
            id: "N003".to_string(),
            kind: NotificationKind::Info,
            title: "Room Access".to_string(),
            message: "Patient P001 entered Room 101".to_string(),
            timestamp_epoch_ms: minutes_ago(now_ms, 15),
            patient_id: Some("P001".to_string()),
            room: Some("R101".to_string()),
            is_read: true,
        },
        Notification {
            id: "N004".to_string(),
            kind: NotificationKind::Success,
            title: "System Check".to_string(),
            message: "All monitoring systems operational".to_string(),
            timestamp_epoch_ms: minutes_ago(now_ms, 30),
            patient_id: None,
            room: None,
            is_read: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts() {
        assert_eq!(seed_patients().len(), 5);
        assert_eq!(seed_rooms().len(), 8);
        assert_eq!(seed_access_logs(0).len(), 6);
        assert_eq!(seed_notifications(0).len(), 4);
    }

    #[test]
    fn every_assigned_room_points_at_a_seeded_patient() {
        let patients = seed_patients();
        for room in seed_rooms() {
            if let Some(pid) = &room.patient_id {
                assert!(
                    patients.iter().any(|p| &p.id == pid),
                    "room {} references unknown patient {}",
                    room.id,
                    pid
                );
            }
        }
    }

    #[test]
    fn two_seed_notifications_are_unread() {
        let unread: Vec<_> = seed_notifications(0)
            .into_iter()
            .filter(|n| !n.is_read)
            .map(|n| n.id)
            .collect();
        assert_eq!(unread, vec!["N001", "N002"]);
    }

    #[test]
    fn log_timestamps_count_back_from_now() {
        let now_ms = 100 * 60 * 1000;
        let logs = seed_access_logs(now_ms);
        assert_eq!(logs[0].timestamp_epoch_ms, now_ms - 5 * 60 * 1000);
        assert_eq!(logs[5].timestamp_epoch_ms, now_ms - 45 * 60 * 1000);
        // Already newest first, the dashboard never re-sorts
        let mut sorted = logs.clone();
        sorted.sort_by(|a, b| b.timestamp_epoch_ms.cmp(&a.timestamp_epoch_ms));
        assert_eq!(
            logs.iter().map(|l| &l.id).collect::<Vec<_>>(),
            sorted.iter().map(|l| &l.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn timestamps_saturate_at_epoch() {
        let logs = seed_access_logs(0);
        assert!(logs.iter().all(|l| l.timestamp_epoch_ms == 0));
    }
}
