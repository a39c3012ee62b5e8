//! Entity types for the monitored ward

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a room or patient, drives badge color coding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Normal,
    Occupied,
    Anomaly,
    Warning,
    Offline,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Normal => write!(f, "normal"),
            Status::Occupied => write!(f, "occupied"),
            Status::Anomaly => write!(f, "anomaly"),
            Status::Warning => write!(f, "warning"),
            Status::Offline => write!(f, "offline"),
        }
    }
}

/// Kind of an access-log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessAction {
    Entry,
    Exit,
    Denied,
}

impl fmt::Display for AccessAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessAction::Entry => write!(f, "entry"),
            AccessAction::Exit => write!(f, "exit"),
            AccessAction::Denied => write!(f, "denied"),
        }
    }
}

/// Severity/category of a live event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Alert,
    Warning,
    Info,
    Success,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Alert => write!(f, "alert"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Success => write!(f, "success"),
        }
    }
}

/// Last known vital signs for a patient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub heart_rate: u32,
    pub temperature: f64,
}

/// A monitored patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub room: Option<String>,
    pub status: Status,
    pub location: String,
    pub last_activity: String,
    pub movement_steps: u32,
    pub vitals: Option<Vitals>,
}

/// Marker position on the floor plan, in percent of the plan's extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A room on the ward floor plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub position: Position,
    pub patient_id: Option<String>,
}

/// One RFID access event. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLogEntry {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub room: String,
    pub action: AccessAction,
    pub timestamp_epoch_ms: u64,
    pub rfid_id: String,
    pub duration: Option<String>,
}

/// A live-alert feed entry, either seeded or synthesized by the simulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp_epoch_ms: u64,
    pub patient_id: Option<String>,
    pub room: Option<String>,
    pub is_read: bool,
}
