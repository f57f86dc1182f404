//! Token handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tokenvault_core::VaultError;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct StoreTokenRequest {
    project: String,
    token: String,
}

impl StoreTokenRequest {
    fn validate(&self) -> Result<(), VaultError> {
        if self.project.trim().is_empty() {
            return Err(VaultError::Validation("project must not be empty".into()));
        }
        if self.token.trim().is_empty() {
            return Err(VaultError::Validation("token must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct StoreTokenResponse {
    status: &'static str,
    project: String,
}

#[derive(Debug, Serialize)]
pub struct FetchTokenResponse {
    token: String,
}

pub async fn store(
    State(state): State<AppState>,
    payload: Result<Json<StoreTokenRequest>, JsonRejection>,
) -> Result<Json<StoreTokenResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    req.validate()
        .map_err(|e| ApiError::from_vault(e, "Invalid request"))?;

    state
        .db
        .save_token(&req.project, &req.token)
        .await
        .map_err(|e| ApiError::from_vault(e, "Failed to save token"))?;

    info!("Stored token for project: {}", req.project);

    Ok(Json(StoreTokenResponse {
        status: "saved",
        project: req.project,
    }))
}

pub async fn fetch(
    State(state): State<AppState>,
    Path(project): Path<String>,
) -> Result<Json<FetchTokenResponse>, ApiError> {
    let token = state
        .db
        .get_token(&project)
        .await
        .map_err(|e| ApiError::from_vault(e, "Failed to fetch token"))?;

    info!("Served token for project: {}", project);

    Ok(Json(FetchTokenResponse { token }))
}
