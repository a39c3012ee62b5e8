pub mod access_logs;
pub mod floor_plan;
pub mod notification_panel;
pub mod patient_panel;
pub mod status_badge;
