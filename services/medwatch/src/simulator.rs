//! Timer-driven notification simulator
//!
//! Fabricates live events into the shared feed. Randomness comes in through
//! the [`RandomSource`] seam and each tick's outcome is synthesized as a pure
//! value before being merged into state, so tests can script every draw.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::model::{Notification, NotificationKind};
use crate::state::StateHandle;

/// Kinds the simulator can draw. Success events are only ever seeded.
const SYNTHETIC_KINDS: [NotificationKind; 3] = [
    NotificationKind::Alert,
    NotificationKind::Warning,
    NotificationKind::Info,
];

/// Source of randomness, injected for deterministic tests
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Uniform draw in [0, 1)
    fn next_f64(&self) -> f64;

    /// Uniform index in [0, len)
    fn pick_index(&self, len: usize) -> usize;
}

/// Production source backed by the thread-local rng
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen()
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// One tick's outcome: draw a kind, then emit with the given probability.
/// The title and message are fixed per kind; synthetic events carry no
/// patient or room.
pub fn synthesize(
    rng: &dyn RandomSource,
    emit_probability: f64,
    now_ms: u64,
) -> Option<Notification> {
    let kind = SYNTHETIC_KINDS[rng.pick_index(SYNTHETIC_KINDS.len())];

    if rng.next_f64() >= emit_probability {
        return None;
    }

    let (title, message) = match kind {
        NotificationKind::Alert => ("Security Alert", "Unauthorized access detected"),
        NotificationKind::Warning => ("Patient Movement", "Patient movement anomaly detected"),
        _ => ("System Update", "System status update"),
    };

    Some(Notification {
        id: format!("N{}", now_ms),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp_epoch_ms: now_ms,
        patient_id: None,
        room: None,
        is_read: false,
    })
}

/// Run the simulator until the cancellation token fires. Each period one
/// tick runs; emitted notifications go to the head of the feed and alerts
/// are additionally logged at warn level for the transient pop-up surface.
pub async fn run_simulator(
    state: StateHandle,
    rng: Arc<dyn RandomSource>,
    interval: Duration,
    emit_probability: f64,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = cancel.cancelled() => {
                tracing::debug!("Simulator loop cancelled");
                break;
            }
        }

        let now_ms = current_epoch_ms();
        match synthesize(rng.as_ref(), emit_probability, now_ms) {
            Some(notification) => {
                if notification.kind == NotificationKind::Alert {
                    tracing::warn!("{}: {}", notification.title, notification.message);
                } else {
                    tracing::debug!(
                        "Synthesized {} notification {}",
                        notification.kind,
                        notification.id
                    );
                }
                state.write().await.push_notification(notification);
            }
            None => tracing::trace!("Tick without emission"),
        }
    }
}

pub fn current_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::new_state_handle;

    #[test]
    fn no_emission_when_draw_misses_probability() {
        let mut rng = MockRandomSource::new();
        rng.expect_pick_index().return_const(0usize);
        rng.expect_next_f64().return_const(0.9f64);
        assert!(synthesize(&rng, 0.3, 1000).is_none());
    }

    #[test]
    fn boundary_draw_does_not_emit() {
        let mut rng = MockRandomSource::new();
        rng.expect_pick_index().return_const(0usize);
        rng.expect_next_f64().return_const(0.3f64);
        assert!(synthesize(&rng, 0.3, 1000).is_none());
    }

    #[test]
    fn alert_draw_uses_alert_template() {
        let mut rng = MockRandomSource::new();
        rng.expect_pick_index().return_const(0usize);
        rng.expect_next_f64().return_const(0.0f64);

        let n = synthesize(&rng, 0.3, 1234).unwrap();
        assert_eq!(n.kind, NotificationKind::Alert);
        assert_eq!(n.title, "Security Alert");
        assert_eq!(n.message, "Unauthorized access detected");
        assert_eq!(n.id, "N1234");
        assert_eq!(n.timestamp_epoch_ms, 1234);
        assert!(!n.is_read);
        assert!(n.patient_id.is_none());
        assert!(n.room.is_none());
    }

    #[test]
    fn warning_and_info_draws_use_their_templates() {
        let mut rng = MockRandomSource::new();
        rng.expect_pick_index().return_const(1usize);
        rng.expect_next_f64().return_const(0.0f64);
        let n = synthesize(&rng, 0.3, 1).unwrap();
        assert_eq!(n.kind, NotificationKind::Warning);
        assert_eq!(n.title, "Patient Movement");

        let mut rng = MockRandomSource::new();
        rng.expect_pick_index().return_const(2usize);
        rng.expect_next_f64().return_const(0.0f64);
        let n = synthesize(&rng, 0.3, 2).unwrap();
        assert_eq!(n.kind, NotificationKind::Info);
        assert_eq!(n.title, "System Update");
        assert_eq!(n.message, "System status update");
    }

    #[test]
    fn probability_one_always_emits() {
        let rng = ThreadRngSource;
        for _ in 0..50 {
            assert!(synthesize(&rng, 1.0, 0).is_some());
        }
    }

    #[test]
    fn probability_zero_never_emits() {
        let rng = ThreadRngSource;
        for _ in 0..50 {
            assert!(synthesize(&rng, 0.0, 0).is_none());
        }
    }

    /// Emits an info notification on every tick
    #[derive(Debug)]
    struct AlwaysEmit;

    impl RandomSource for AlwaysEmit {
        fn next_f64(&self) -> f64 {
            0.0
        }

        fn pick_index(&self, _len: usize) -> usize {
            2
        }
    }

    #[tokio::test]
    async fn simulator_emits_into_state_and_respects_cap() {
        let state = new_state_handle(10);
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_simulator(
            Arc::clone(&state),
            Arc::new(AlwaysEmit),
            Duration::from_millis(1),
            1.0,
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("simulator did not stop on cancellation")
            .unwrap();

        let state = state.read().await;
        assert!(!state.notifications.is_empty());
        assert!(state.notifications.len() <= 10);
        assert!(state
            .notifications
            .iter()
            .all(|n| n.kind == NotificationKind::Info && !n.is_read));
    }

    #[tokio::test]
    async fn cancelled_simulator_stops_mutating() {
        let state = new_state_handle(10);
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_simulator(
            Arc::clone(&state),
            Arc::new(AlwaysEmit),
            Duration::from_millis(1),
            1.0,
            cancel.clone(),
        ));

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("simulator did not stop on cancellation")
            .unwrap();

        let len_after_cancel = state.read().await.notifications.len();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(state.read().await.notifications.len(), len_after_cancel);
    }

    #[tokio::test]
    async fn pre_cancelled_token_means_no_ticks() {
        let state = new_state_handle(10);
        let cancel = CancellationToken::new();
        cancel.cancel();

        run_simulator(
            Arc::clone(&state),
            Arc::new(AlwaysEmit),
            Duration::from_secs(3600),
            1.0,
            cancel,
        )
        .await;

        assert!(state.read().await.notifications.is_empty());
    }
}
