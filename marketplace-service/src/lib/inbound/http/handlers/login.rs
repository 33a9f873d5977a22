use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::register::AccountData;
use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::domain::account::models::LoginCommand;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .account_service
        .login(command, Utc::now())
        .await
        .map_err(ApiError::from)
        .map(|outcome| {
            ApiSuccess::new(
                StatusCode::OK,
                LoginResponseData {
                    token: outcome.token,
                    token_type: "Bearer".to_string(),
                    expires_in: outcome.expires_in,
                    account: (&outcome.account).into(),
                },
            )
        })
}

/// Login body. The account is named by `identifier`, `username` or `email`;
/// when several are sent they are tried in that order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    identifier: Option<String>,
    username: Option<String>,
    email: Option<String>,
    #[serde(alias = "secret")]
    password: String,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        let identifier = self
            .identifier
            .or(self.username)
            .or(self.email)
            .ok_or_else(|| {
                ApiError::UnprocessableEntity("A username or email is required".to_string())
            })?;

        Ok(LoginCommand {
            identifier,
            password: self.password,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub account: AccountData,
}
