//! Server configuration types
//!
//! Settings read once at startup. The agent configuration (which agents are
//! enabled) lives in a separate JSON file and is re-read per request.

use duet_core::config::DEFAULT_AGENTS_CONFIG_PATH;
use duet_core::SimulatedLatency;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub agents: AgentsSourceConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the agent configuration lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsSourceConfig {
    #[serde(default = "default_agents_config_path")]
    pub config_path: String,
}

fn default_agents_config_path() -> String {
    DEFAULT_AGENTS_CONFIG_PATH.to_string()
}

impl Default for AgentsSourceConfig {
    fn default() -> Self {
        Self {
            config_path: default_agents_config_path(),
        }
    }
}

/// Simulated agent latencies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_analysis_latency")]
    pub analysis_latency_ms: u64,
    #[serde(default = "default_implementation_latency")]
    pub implementation_latency_ms: u64,
    #[serde(default = "default_validation_latency")]
    pub validation_latency_ms: u64,
}

fn default_analysis_latency() -> u64 {
    2000
}
fn default_implementation_latency() -> u64 {
    3000
}
fn default_validation_latency() -> u64 {
    1000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            analysis_latency_ms: default_analysis_latency(),
            implementation_latency_ms: default_implementation_latency(),
            validation_latency_ms: default_validation_latency(),
        }
    }
}

impl SimulationConfig {
    pub fn latency(&self) -> SimulatedLatency {
        SimulatedLatency {
            analysis: Duration::from_millis(self.analysis_latency_ms),
            implementation: Duration::from_millis(self.implementation_latency_ms),
            validation: Duration::from_millis(self.validation_latency_ms),
        }
    }
}
