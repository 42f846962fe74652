//! Router assembly for the Orpheus HTTP surface
//!
//! Three public views (landing, login, signup) plus the session endpoints,
//! and the guarded dashboard surface. Protected handlers carry the
//! [`CurrentSession`](crate::route_guard::CurrentSession) extractor, so the
//! guard runs before any of them.

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api;
use crate::app_state::AppState;

/// Build the full router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // public views
        .route("/", get(landing))
        .route("/login", get(login_view))
        .route("/signup", get(signup_view))
        // session endpoints
        .route("/api/login", post(api::session::login))
        .route("/api/logout", post(api::session::logout))
        .route("/api/signup/keys", post(api::session::generate_keys))
        .route("/api/signup/keys/export", post(api::session::export_keys))
        .route("/api/signup/complete", post(api::session::complete_signup))
        // protected dashboard surface
        .route("/api/dashboard", get(api::dashboard::overview))
        .route(
            "/api/dashboard/land-value/geocode",
            post(api::analysis::geocode),
        )
        .route(
            "/api/dashboard/land-value/valuation",
            post(api::analysis::run_valuation),
        )
        .route(
            "/api/dashboard/supply-chain/analyze",
            post(api::analysis::analyze_supply_chain),
        )
        .route(
            "/api/dashboard/supply-chain/alternatives",
            post(api::analysis::find_alternatives),
        )
        .route(
            "/api/dashboard/economics/analyze",
            post(api::analysis::analyze_insolvency),
        )
        .route("/api/dashboard/transact/market", get(api::transact::market))
        .route(
            "/api/dashboard/transact/contracts",
            get(api::transact::list_contracts).post(api::transact::create_contract),
        )
        // health
        .route("/healthz", get(healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn landing() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "orpheus",
        "tagline": "Agricultural technology command center",
    }))
}

async fn login_view() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "view": "login" }))
}

async fn signup_view() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "view": "signup" }))
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
