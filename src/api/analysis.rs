//! Analysis endpoints: economics, land value, supply chain
//!
//! Each handler validates its inputs, then drives the page's simulated
//! instance; a request while the instance is pending gets 409 back.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    app_state::AppState,
    errors::OrpheusError,
    land_valuation::{self, Coordinates, Valuation},
    risk_analysis::{self, RiskReport},
    route_guard::CurrentSession,
    supplier_analysis::{self, Supplier, SupplyChainInputs},
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeCompanyRequest {
    pub company_name: String,
}

pub async fn analyze_insolvency(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
    Json(req): Json<AnalyzeCompanyRequest>,
) -> Result<Json<RiskReport>, OrpheusError> {
    if req.company_name.trim().is_empty() {
        return Err(OrpheusError::validation(
            "companyName",
            "company name is required",
        ));
    }

    let latency = Duration::from_millis(app.simulation.risk_latency_ms);
    let report = app
        .risk_op
        .run(latency, || risk_analysis::assess(&req.company_name))
        .await?;
    Ok(Json(report))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeRequest {
    pub location: String,
}

pub async fn geocode(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
    Json(req): Json<GeocodeRequest>,
) -> Result<Json<Coordinates>, OrpheusError> {
    if req.location.trim().is_empty() {
        return Err(OrpheusError::validation("location", "location is required"));
    }

    let latency = Duration::from_millis(app.simulation.geocode_latency_ms);
    let coords = app
        .land_op
        .run(latency, || land_valuation::geocode(&req.location))
        .await?;
    Ok(Json(coords))
}

pub async fn run_valuation(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
    Json(coords): Json<Coordinates>,
) -> Result<Json<Valuation>, OrpheusError> {
    let latency = Duration::from_millis(app.simulation.valuation_latency_ms);
    let valuation = app
        .land_op
        .run(latency, || land_valuation::appraise(&coords))
        .await?;
    Ok(Json(valuation))
}

pub async fn analyze_supply_chain(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
    Json(inputs): Json<SupplyChainInputs>,
) -> Result<Json<Vec<Supplier>>, OrpheusError> {
    if inputs.manufacturer.trim().is_empty() {
        return Err(OrpheusError::validation(
            "manufacturer",
            "manufacturer is required",
        ));
    }
    if inputs.seed_supplier.trim().is_empty() {
        return Err(OrpheusError::validation(
            "seedSupplier",
            "seed supplier is required",
        ));
    }

    let latency = Duration::from_millis(app.simulation.supplier_latency_ms);
    let suppliers = app
        .supply_op
        .run(latency, || supplier_analysis::verify_chain(&inputs))
        .await?;
    Ok(Json(suppliers))
}

pub async fn find_alternatives(
    _session: CurrentSession,
    State(app): State<Arc<AppState>>,
) -> Result<Json<Vec<Supplier>>, OrpheusError> {
    let latency = Duration::from_millis(app.simulation.supplier_latency_ms);
    let alternatives = app
        .supply_op
        .run(latency, supplier_analysis::alternatives)
        .await?;
    Ok(Json(alternatives))
}
