//! Account registration handler.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::{Account, AppState};

#[derive(Debug, Deserialize)]
pub struct SignupPayload {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// `POST /signup`. The password is accepted and discarded; the response
/// carries only name and email. Duplicate emails get a 400 whose message
/// the signup page surfaces verbatim.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupPayload>,
) -> Result<Json<Account>, AppError> {
    let mut accounts = state
        .accounts
        .lock()
        .map_err(|_| AppError::Internal("accounts lock poisoned".to_string()))?;
    if accounts.iter().any(|account| account.email == payload.email) {
        return Err(AppError::BadRequest("Email already exists".to_string()));
    }
    let account = Account {
        name: payload.name,
        email: payload.email,
    };
    accounts.push(account.clone());
    Ok(Json(account))
}
