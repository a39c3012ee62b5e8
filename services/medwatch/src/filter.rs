//! Search and filter over ward records
//!
//! Matching is case-insensitive substring containment, not tokenized search.
//! An empty query matches everything and results keep the source order.

use serde::Deserialize;

use crate::model::{AccessAction, AccessLogEntry, Patient};

/// Action filter applied to the access-log table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionFilter {
    #[default]
    All,
    Entry,
    Exit,
    Denied,
}

impl ActionFilter {
    pub fn matches(self, action: AccessAction) -> bool {
        match self {
            ActionFilter::All => true,
            ActionFilter::Entry => action == AccessAction::Entry,
            ActionFilter::Exit => action == AccessAction::Exit,
            ActionFilter::Denied => action == AccessAction::Denied,
        }
    }
}

/// Patients whose name or id contains the query
pub fn filter_patients<'a>(patients: &'a [Patient], query: &str) -> Vec<&'a Patient> {
    let q = query.to_lowercase();
    patients
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&q) || p.id.to_lowercase().contains(&q))
        .collect()
}

/// Log entries whose patient name, patient id, or room contains the query,
/// narrowed to the given action
pub fn filter_logs<'a>(
    logs: &'a [AccessLogEntry],
    query: &str,
    action: ActionFilter,
) -> Vec<&'a AccessLogEntry> {
    let q = query.to_lowercase();
    logs.iter()
        .filter(|l| {
            let matches_search = l.patient_name.to_lowercase().contains(&q)
                || l.patient_id.to_lowercase().contains(&q)
                || l.room.to_lowercase().contains(&q);
            matches_search && action.matches(l.action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{seed_access_logs, seed_patients};

    #[test]
    fn empty_query_matches_all_patients() {
        let patients = seed_patients();
        let filtered = filter_patients(&patients, "");
        assert_eq!(filtered.len(), patients.len());
    }

    #[test]
    fn patient_search_is_case_insensitive() {
        let patients = seed_patients();
        let filtered = filter_patients(&patients, "john");
        // Matches "John Smith" by name and "Sarah Johnson" by substring
        let names: Vec<_> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith", "Sarah Johnson"]);

        let by_id = filter_patients(&patients, "p003");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Michael Davis");
    }

    #[test]
    fn patient_search_preserves_source_order() {
        let patients = seed_patients();
        let filtered = filter_patients(&patients, "o");
        let ids: Vec<_> = filtered.iter().map(|p| p.id.as_str()).collect();
        let mut expected: Vec<&str> = Vec::new();
        for p in &patients {
            if p.name.to_lowercase().contains('o') || p.id.contains('o') {
                expected.push(&p.id);
            }
        }
        assert_eq!(ids, expected);
    }

    #[test]
    fn no_match_returns_empty() {
        let patients = seed_patients();
        assert!(filter_patients(&patients, "zzz").is_empty());
    }

    #[test]
    fn empty_query_all_filter_is_identity_for_logs() {
        let logs = seed_access_logs(0);
        let filtered = filter_logs(&logs, "", ActionFilter::All);
        assert_eq!(filtered.len(), logs.len());
        let ids: Vec<_> = filtered.iter().map(|l| l.id.as_str()).collect();
        let expected: Vec<_> = logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn action_filter_narrows_to_matching_rows() {
        let logs = seed_access_logs(0);
        let denied = filter_logs(&logs, "", ActionFilter::Denied);
        assert_eq!(denied.len(), 2);
        assert!(denied.iter().all(|l| l.action == AccessAction::Denied));

        let exits = filter_logs(&logs, "", ActionFilter::Exit);
        assert_eq!(exits.len(), 1);
        assert_eq!(exits[0].id, "LOG004");
    }

    #[test]
    fn search_and_action_compose() {
        let logs = seed_access_logs(0);
        // "john smith" has one entry and one denied row
        let smith_denied = filter_logs(&logs, "john smith", ActionFilter::Denied);
        assert_eq!(smith_denied.len(), 1);
        assert_eq!(smith_denied[0].room, "Pharmacy");
    }

    #[test]
    fn log_search_covers_room_names() {
        let logs = seed_access_logs(0);
        let common = filter_logs(&logs, "common", ActionFilter::All);
        assert_eq!(common.len(), 1);
        assert_eq!(common[0].patient_name, "Emily Wilson");
    }

    #[test]
    fn action_filter_parses_from_query_strings() {
        #[derive(Deserialize)]
        struct Params {
            action: ActionFilter,
        }
        let p: Params = serde_json::from_str(r#"{"action":"denied"}"#).unwrap();
        assert_eq!(p.action, ActionFilter::Denied);
        assert_eq!(ActionFilter::default(), ActionFilter::All);
    }
}
