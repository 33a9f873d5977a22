use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::vocation::errors::VocationError;
use crate::domain::vocation::models::Vocation;
use crate::domain::vocation::models::VocationDetails;
use crate::domain::vocation::models::VocationId;
use crate::domain::vocation::models::VocationName;
use crate::domain::vocation::ports::VocationRepository;

pub struct PostgresVocationRepository {
    pool: PgPool,
}

impl PostgresVocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VocationRow {
    id: Uuid,
    owner_id: Uuid,
    name: String,
    description: String,
    comment: String,
    rating: String,
    phone: String,
    country: String,
    city: String,
    address: String,
    image: String,
    price: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<VocationRow> for Vocation {
    type Error = VocationError;

    fn try_from(row: VocationRow) -> Result<Self, Self::Error> {
        Ok(Vocation {
            id: VocationId(row.id),
            owner_id: AccountId(row.owner_id),
            name: VocationName::new(row.name)?,
            details: VocationDetails {
                description: row.description,
                comment: row.comment,
                rating: row.rating,
                phone: row.phone,
                country: row.country,
                city: row.city,
                address: row.address,
                image: row.image,
                price: row.price,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, owner_id, name, description, comment, rating, phone,
           country, city, address, image, price, created_at, updated_at
    FROM vocations
"#;

/// SQLSTATE string_data_right_truncation
const VALUE_TOO_LONG: &str = "22001";

fn storage_error(e: sqlx::Error) -> VocationError {
    tracing::error!(error = %e, "Vocation storage failure");
    VocationError::StorageUnavailable(e.to_string())
}

#[async_trait]
impl VocationRepository for PostgresVocationRepository {
    async fn create(&self, vocation: Vocation) -> Result<Vocation, VocationError> {
        sqlx::query(
            r#"
            INSERT INTO vocations (
                id, owner_id, name, description, comment, rating, phone,
                country, city, address, image, price, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(vocation.id.0)
        .bind(vocation.owner_id.0)
        .bind(vocation.name.as_str())
        .bind(&vocation.details.description)
        .bind(&vocation.details.comment)
        .bind(&vocation.details.rating)
        .bind(&vocation.details.phone)
        .bind(&vocation.details.country)
        .bind(&vocation.details.city)
        .bind(&vocation.details.address)
        .bind(&vocation.details.image)
        .bind(&vocation.details.price)
        .bind(vocation.created_at)
        .bind(vocation.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return VocationError::OwnerNotFound(vocation.owner_id.to_string());
                }
                if db_err.code().as_deref() == Some(VALUE_TOO_LONG) {
                    return VocationError::ValueTooLong;
                }
            }
            storage_error(e)
        })?;

        Ok(vocation)
    }

    async fn find_by_id(&self, id: &VocationId) -> Result<Option<Vocation>, VocationError> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = $1");
        let row = sqlx::query_as::<_, VocationRow>(&sql)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.map(Vocation::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Vocation>, VocationError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, VocationRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.into_iter().map(Vocation::try_from).collect()
    }

    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<Vocation>, VocationError> {
        let sql = format!("{SELECT_COLUMNS} WHERE owner_id = $1 ORDER BY created_at DESC");
        let rows = sqlx::query_as::<_, VocationRow>(&sql)
            .bind(owner.0)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.into_iter().map(Vocation::try_from).collect()
    }
}
