//! Session endpoints: login, signup, logout, key export

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    app_state::AppState,
    errors::OrpheusError,
    key_material::{KeyPair, KEY_FILE_NAME},
    session_log::{record, SessionEventKind},
    session_store::Session,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub private_key: String,
}

pub async fn login(
    State(app): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Session>, OrpheusError> {
    app.session.login(&req.private_key)?;
    record(app.session_log_path.as_deref(), SessionEventKind::Login, None);
    Ok(Json(app.session.snapshot()))
}

pub async fn logout(State(app): State<Arc<AppState>>) -> Result<Json<Session>, OrpheusError> {
    app.session.logout()?;
    record(app.session_log_path.as_deref(), SessionEventKind::Logout, None);
    Ok(Json(app.session.snapshot()))
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPairResponse {
    pub private_key: String,
    pub public_key: String,
}

/// Generate a fresh identifier pair. Nothing is stored; the caller must
/// save the secret and acknowledge before completing signup.
pub async fn generate_keys(State(app): State<Arc<AppState>>) -> Json<KeyPairResponse> {
    let pair = KeyPair::generate();
    record(
        app.session_log_path.as_deref(),
        SessionEventKind::KeysGenerated,
        None,
    );
    Json(KeyPairResponse {
        private_key: pair.private_secret,
        public_key: pair.public_identifier,
    })
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportKeysRequest {
    pub private_key: String,
    pub public_key: String,
}

/// Render the displayed pair as the downloadable `orpheus-keys.txt`.
pub async fn export_keys(Json(req): Json<ExportKeysRequest>) -> impl IntoResponse {
    let pair = KeyPair {
        private_secret: req.private_key,
        public_identifier: req.public_key,
    };
    (
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{KEY_FILE_NAME}\""),
            ),
        ],
        pair.export_text(),
    )
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteSignupRequest {
    pub public_key: String,
    #[serde(default)]
    pub acknowledged: bool,
}

pub async fn complete_signup(
    State(app): State<Arc<AppState>>,
    Json(req): Json<CompleteSignupRequest>,
) -> Result<Json<Session>, OrpheusError> {
    app.session.complete_signup(&req.public_key, req.acknowledged)?;
    record(
        app.session_log_path.as_deref(),
        SessionEventKind::SignupCompleted,
        Some(&req.public_key),
    );
    Ok(Json(app.session.snapshot()))
}
