//! Configuration types for the MedWatch service

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: default_dashboard_port(),
        }
    }
}

/// Notification simulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_tick_interval")]
    pub tick_interval_seconds: u64,
    #[serde(default = "default_emit_probability")]
    pub emit_probability: f64,
    #[serde(default = "default_max_notifications")]
    pub max_notifications: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_interval_seconds: default_tick_interval(),
            emit_probability: default_emit_probability(),
            max_notifications: default_max_notifications(),
        }
    }
}

fn default_dashboard_port() -> u16 {
    11120
}

fn default_true() -> bool {
    true
}

fn default_tick_interval() -> u64 {
    10
}

fn default_emit_probability() -> f64 {
    0.3
}

fn default_max_notifications() -> usize {
    10
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::MedwatchError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let json = r#"{
            "dashboard": {
                "port": 8080
            },
            "simulator": {
                "enabled": false,
                "tick_interval_seconds": 5,
                "emit_probability": 0.5,
                "max_notifications": 20
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.dashboard.port, 8080);
        assert!(!config.simulator.enabled);
        assert_eq!(config.simulator.tick_interval_seconds, 5);
        assert!((config.simulator.emit_probability - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.simulator.max_notifications, 20);
    }

    #[test]
    fn parse_minimal_config() {
        let json = r#"{}"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.dashboard.port, 11120);
        assert!(config.simulator.enabled);
        assert_eq!(config.simulator.tick_interval_seconds, 10);
        assert!((config.simulator.emit_probability - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.simulator.max_notifications, 10);
    }

    #[test]
    fn parse_simulator_defaults() {
        let json = r#"{
            "simulator": {
                "tick_interval_seconds": 2
            }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.simulator.enabled);
        assert_eq!(config.simulator.tick_interval_seconds, 2);
        assert_eq!(config.simulator.max_notifications, 10);
    }

    #[test]
    fn load_config_missing_file() {
        let result = load_config(Path::new("/nonexistent/config.json"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"dashboard": {"port": 9000}}"#).unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.dashboard.port, 9000);
    }

    #[test]
    fn load_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "not json").unwrap();

        let result = load_config(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.dashboard.port, 11120);
        assert!(config.simulator.enabled);
    }
}
