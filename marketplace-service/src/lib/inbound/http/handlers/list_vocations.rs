use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::create_vocation::VocationData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::vocation::models::Vocation;
use crate::inbound::http::middleware::CurrentAccount;
use crate::inbound::http::router::AppState;

/// Every listing; unauthenticated.
pub async fn list_vocations(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<VocationData>>, ApiError> {
    state
        .vocation_service
        .list_vocations()
        .await
        .map_err(ApiError::from)
        .map(|vocations| ApiSuccess::new(StatusCode::OK, to_data(&vocations)))
}

/// Listings owned by the authenticated caller.
pub async fn list_my_vocations(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
) -> Result<ApiSuccess<Vec<VocationData>>, ApiError> {
    state
        .vocation_service
        .list_vocations_by_owner(&current.account_id)
        .await
        .map_err(ApiError::from)
        .map(|vocations| ApiSuccess::new(StatusCode::OK, to_data(&vocations)))
}

fn to_data(vocations: &[Vocation]) -> Vec<VocationData> {
    vocations.iter().map(VocationData::from).collect()
}
