use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_vocation::VocationData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::vocation::models::VocationId;
use crate::inbound::http::router::AppState;

pub async fn get_vocation(
    State(state): State<AppState>,
    Path(vocation_id): Path<String>,
) -> Result<ApiSuccess<VocationData>, ApiError> {
    let vocation_id =
        VocationId::from_string(&vocation_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .vocation_service
        .get_vocation(&vocation_id)
        .await
        .map_err(ApiError::from)
        .map(|ref vocation| ApiSuccess::new(StatusCode::OK, vocation.into()))
}
