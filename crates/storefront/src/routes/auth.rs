//! Authentication route handlers.
//!
//! Login validates credentials against the fixed user directory and stores
//! the resulting principal in the session. Every failure mode collapses
//! into one uniform 401; the handler never distinguishes unknown accounts
//! from wrong passwords.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;
use serde_json::Value;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{self, AppError, Result};
use crate::middleware::{OptionalAuth, clear_principal, set_principal};
use crate::models::Principal;
use crate::state::AppState;

/// Session user payload: the logged-in principal or `null`.
#[derive(Debug, Serialize)]
pub struct SessionUserView {
    pub user: Option<Principal>,
}

/// Handle login.
///
/// Non-string `email`/`password` fields collapse to empty strings, which
/// verify against the dummy hash like any unknown account; malformed bodies
/// take the same path. Credential inputs are never coerced.
#[instrument(skip(state, session, payload))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<SessionUserView>> {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable login body");
            Value::Null
        }
    };

    let email = body.get("email").and_then(Value::as_str).unwrap_or("");
    let password = body.get("password").and_then(Value::as_str).unwrap_or("");

    let principal = state.auth().login(email, password)?;

    // Fresh session ID at the auth boundary; the cart carries over
    if let Err(e) = session.cycle_id().await {
        tracing::error!("Failed to cycle session ID: {e}");
    }
    if let Err(e) = set_principal(&session, &principal).await {
        tracing::error!("Failed to persist session principal: {e}");
        return Err(AppError::Internal(
            "failed to persist session principal".to_string(),
        ));
    }

    error::set_sentry_user(&principal.id, Some(principal.email.as_str()));
    tracing::info!(user_id = %principal.id, "User logged in");

    Ok(Json(SessionUserView {
        user: Some(principal),
    }))
}

/// Handle logout.
///
/// Clears the principal but keeps the rest of the session, so an anonymous
/// cart survives logging out.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Json<SessionUserView> {
    if let Err(e) = clear_principal(&session).await {
        tracing::error!("Failed to clear session principal: {e}");
    }
    if let Err(e) = session.cycle_id().await {
        tracing::error!("Failed to cycle session ID: {e}");
    }

    error::clear_sentry_user();

    Json(SessionUserView { user: None })
}

/// Return the logged-in principal, if any.
#[instrument(skip(principal))]
pub async fn me(OptionalAuth(principal): OptionalAuth) -> Json<SessionUserView> {
    Json(SessionUserView { user: principal })
}
