//! Patient selection state
//!
//! The dashboard page owns a single `Option<PatientId>`; these transitions
//! are the only ways it changes. There is deliberately no way back to the
//! unselected state.

/// Clicking a patient row always selects that patient
pub fn select_patient(_current: Option<String>, patient_id: &str) -> Option<String> {
    Some(patient_id.to_string())
}

/// Clicking a room selects its assigned patient; a room without one leaves
/// the current selection untouched
pub fn room_clicked(current: Option<String>, patient_id: Option<&str>) -> Option<String> {
    match patient_id {
        Some(id) => Some(id.to_string()),
        None => current,
    }
}
