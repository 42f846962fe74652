use std::path::PathBuf;
use std::sync::Mutex;

use crate::{
    config_loader::{OrpheusConfig, SimulationConfig},
    errors::OrpheusResult,
    futures_desk::ContractBook,
    session_store::SessionStore,
    simulation::SimulatedOp,
};

/// Shared state behind the router: the session service, one simulated
/// instance per dashboard page, and the contract book.
pub struct AppState {
    pub session: SessionStore,
    pub simulation: SimulationConfig,
    pub session_log_path: Option<PathBuf>,

    pub risk_op: SimulatedOp,
    pub land_op: SimulatedOp,
    pub supply_op: SimulatedOp,
    pub market_op: SimulatedOp,

    pub book: Mutex<ContractBook>,
}

impl AppState {
    pub fn new(
        session: SessionStore,
        simulation: SimulationConfig,
        session_log_path: Option<PathBuf>,
    ) -> Self {
        Self {
            session,
            simulation,
            session_log_path,
            risk_op: SimulatedOp::new("risk analysis"),
            land_op: SimulatedOp::new("land valuation"),
            supply_op: SimulatedOp::new("supplier analysis"),
            market_op: SimulatedOp::new("futures market"),
            book: Mutex::new(ContractBook::seeded()),
        }
    }

    /// Build state from the loaded config, opening the sled-backed session.
    pub fn from_config(config: &OrpheusConfig) -> OrpheusResult<Self> {
        let session = SessionStore::open_sled(&config.data_dir)?;
        Ok(Self::new(
            session,
            config.simulation.clone(),
            config.session_log_path.as_ref().map(PathBuf::from),
        ))
    }
}
