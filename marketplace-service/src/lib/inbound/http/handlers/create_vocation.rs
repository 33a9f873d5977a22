use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::JsonBody;
use crate::domain::vocation::models::CreateVocationCommand;
use crate::domain::vocation::models::Vocation;
use crate::domain::vocation::models::VocationDetails;
use crate::domain::vocation::models::VocationName;
use crate::inbound::http::middleware::CurrentAccount;
use crate::inbound::http::router::AppState;

pub async fn create_vocation(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAccount>,
    JsonBody(body): JsonBody<CreateVocationRequest>,
) -> Result<ApiSuccess<VocationData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .vocation_service
        .create_vocation(command, current.account_id)
        .await
        .map_err(ApiError::from)
        .map(|ref vocation| ApiSuccess::new(StatusCode::CREATED, vocation.into()))
}

/// HTTP request body for creating a listing (raw JSON).
///
/// There is no owner field: the owner is the authenticated caller. Unknown
/// fields such as `user_id` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateVocationRequest {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    comment: String,
    #[serde(default)]
    rating: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    price: String,
}

impl CreateVocationRequest {
    fn try_into_command(self) -> Result<CreateVocationCommand, ApiError> {
        let name =
            VocationName::new(self.name).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

        Ok(CreateVocationCommand {
            name,
            details: VocationDetails {
                description: self.description,
                comment: self.comment,
                rating: self.rating,
                phone: self.phone,
                country: self.country,
                city: self.city,
                address: self.address,
                image: self.image,
                price: self.price,
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VocationData {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub comment: String,
    pub rating: String,
    pub phone: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub image: String,
    pub price: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Vocation> for VocationData {
    fn from(vocation: &Vocation) -> Self {
        let details = &vocation.details;
        Self {
            id: vocation.id.to_string(),
            user_id: vocation.owner_id.to_string(),
            name: vocation.name.as_str().to_string(),
            description: details.description.clone(),
            comment: details.comment.clone(),
            rating: details.rating.clone(),
            phone: details.phone.clone(),
            country: details.country.clone(),
            city: details.city.clone(),
            address: details.address.clone(),
            image: details.image.clone(),
            price: details.price.clone(),
            created_at: vocation.created_at,
            updated_at: vocation.updated_at,
        }
    }
}
