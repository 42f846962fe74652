//! Transact endpoints: market board and the contract book

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::sync::{Arc, PoisonError};
use std::time::Duration;

use crate::{
    app_state::AppState,
    errors::OrpheusError,
    futures_desk::{
        estimated_contract_value, ContractRequest, FuturesContract, MarketQuote, MARKET_BOARD,
    },
    route_guard::CurrentSession,
};

/// Resolve the market board through the desk's simulated instance.
pub async fn market(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<MarketQuote>>, OrpheusError> {
    let latency = Duration::from_millis(app.simulation.market_latency_ms);
    let board = app.market_op.run(latency, || MARKET_BOARD.clone()).await?;
    Ok(Json(board))
}

pub async fn list_contracts(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
) -> Json<Vec<FuturesContract>> {
    let book = app.book.lock().unwrap_or_else(PoisonError::into_inner);
    Json(book.contracts().to_vec())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractResponse {
    pub contract: FuturesContract,
    pub estimated_value: f64,
}

/// Synchronous append: no pending phase, the contract is in the book when
/// the response is built.
pub async fn create_contract(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
    Json(req): Json<ContractRequest>,
) -> Result<Json<CreateContractResponse>, OrpheusError> {
    let contract = {
        let mut book = app.book.lock().unwrap_or_else(PoisonError::into_inner);
        book.open(&req)?
    };
    let estimated_value = estimated_contract_value(&req.commodity, &req.quantity);

    tracing::info!(id = %contract.id, side = ?req.contract_type, "futures contract opened");
    Ok(Json(CreateContractResponse {
        contract,
        estimated_value,
    }))
}
