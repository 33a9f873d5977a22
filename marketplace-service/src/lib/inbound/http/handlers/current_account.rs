use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::register::AccountData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::CurrentAccount;
use crate::inbound::http::router::AppState;

/// Profile of the account the bearer token was issued to.
pub async fn current_account(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    state
        .account_service
        .get_account(&current.account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
