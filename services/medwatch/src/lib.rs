//! MedWatch - hospital patient monitoring dashboard
//!
//! Serves a ward dashboard (floor plan, patient list, live alerts, access
//! logs) over mock in-memory data and simulates live events on a timer.

pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod filter;
pub mod model;
pub mod simulator;
pub mod state;

pub use config::{load_config, Config};
pub use error::{MedwatchError, Result};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::simulator::{RandomSource, ThreadRngSource};

/// Run the MedWatch service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let cancel = CancellationToken::new();

    // Seed the ward with the mock datasets, timestamped against startup
    let now_ms = simulator::current_epoch_ms();
    let state = state::new_seeded_handle(config.simulator.max_notifications, now_ms);

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    // Start the notification simulator if enabled
    let simulator_handle = if config.simulator.enabled {
        let rng: Arc<dyn RandomSource> = Arc::new(ThreadRngSource);
        let interval = Duration::from_secs(config.simulator.tick_interval_seconds);
        let emit_probability = config.simulator.emit_probability;
        let simulator_state = Arc::clone(&state);
        let cancel_for_simulator = cancel.clone();

        tracing::info!(
            "Notification simulator running every {}s (emit probability {})",
            config.simulator.tick_interval_seconds,
            emit_probability
        );

        Some(tokio::spawn(simulator::run_simulator(
            simulator_state,
            rng,
            interval,
            emit_probability,
            cancel_for_simulator,
        )))
    } else {
        tracing::info!("Notification simulator disabled");
        None
    };

    // Serve the dashboard
    let router = dashboard::build_router(Arc::clone(&state));
    let addr = SocketAddr::from(([0, 0, 0, 0], config.dashboard.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        MedwatchError::Dashboard(format!(
            "Failed to bind dashboard to port {}: {}",
            config.dashboard.port, e
        ))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    let cancel_for_dashboard = cancel.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel_for_dashboard.cancelled().await;
        })
        .await?;

    // Wait for the simulator to finish its teardown
    if let Some(handle) = simulator_handle {
        let _ = handle.await;
    }
    tracing::info!("MedWatch stopped");

    Ok(())
}
