use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn home() -> ApiSuccess<HomeData> {
    ApiSuccess::new(
        StatusCode::OK,
        HomeData {
            message: "Welcome to the marketplace".to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeData {
    pub message: String,
}
