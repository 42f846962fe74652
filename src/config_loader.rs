//! Layered runtime configuration
//!
//! Defaults, then `orpheus.toml`, then `ORPHEUS_*` environment variables.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Latency, in milliseconds, of each simulated action. Zeroed in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub risk_latency_ms: u64,
    pub geocode_latency_ms: u64,
    pub valuation_latency_ms: u64,
    pub supplier_latency_ms: u64,
    pub market_latency_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            risk_latency_ms: 2000,
            geocode_latency_ms: 1000,
            valuation_latency_ms: 2000,
            supplier_latency_ms: 1500,
            market_latency_ms: 1500,
        }
    }
}

impl SimulationConfig {
    /// All latencies zero, for tests.
    pub fn zero() -> Self {
        Self {
            risk_latency_ms: 0,
            geocode_latency_ms: 0,
            valuation_latency_ms: 0,
            supplier_latency_ms: 0,
            market_latency_ms: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrpheusConfig {
    pub bind_host: String,
    pub bind_port: u16,
    pub data_dir: String,
    #[serde(default)]
    pub session_log_path: Option<String>,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Serialize)]
struct OrpheusConfigDefaults {
    bind_host: String,
    bind_port: u16,
    data_dir: String,
    simulation: SimulationConfig,
}

pub fn load_config() -> Result<OrpheusConfig, figment::Error> {
    let figment = Figment::from(Serialized::defaults(OrpheusConfigDefaults {
        bind_host: "127.0.0.1".into(),
        bind_port: 8080,
        data_dir: "orpheus_data".into(),
        simulation: SimulationConfig::default(),
    }))
    .merge(Toml::file("orpheus.toml"))
    .merge(Env::prefixed("ORPHEUS_"));

    let config: OrpheusConfig = figment.extract()?;

    if config.data_dir.trim().is_empty() {
        return Err(figment::Error::from("data_dir must not be empty".to_string()));
    }

    Ok(config)
}
