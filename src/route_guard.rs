//! Route guard for the protected dashboard surface
//!
//! Checked once per request, synchronously, before any protected handler
//! runs: `Unchecked -> Authenticated` renders the view, `Unchecked ->
//! Redirecting` sends the caller to the login route and nothing else
//! happens. An unauthenticated hit is not an error and is never surfaced as
//! one.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use crate::app_state::AppState;
use crate::session_store::SessionStore;

/// Route the guard redirects unauthenticated requests to.
pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of the per-request session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Authenticated,
    Redirecting,
}

/// Decide synchronously from the session store.
pub fn evaluate(session: &SessionStore) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Authenticated
    } else {
        GuardDecision::Redirecting
    }
}

/// Extractor placed on every protected handler. Rejection is the silent
/// redirect; success carries the session's public identifier.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub public_identifier: Option<String>,
}

/// Rejection type: an immediate redirect to the login route.
#[derive(Debug)]
pub struct GuardRedirect;

impl IntoResponse for GuardRedirect {
    fn into_response(self) -> Response {
        Redirect::temporary(LOGIN_ROUTE).into_response()
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = GuardRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app = Arc::<AppState>::from_ref(state);
        match evaluate(&app.session) {
            GuardDecision::Authenticated => Ok(CurrentSession {
                public_identifier: app.session.public_identifier(),
            }),
            GuardDecision::Redirecting => {
                tracing::debug!(path = %parts.uri.path(), "unauthenticated request redirected");
                Err(GuardRedirect)
            }
        }
    }
}
