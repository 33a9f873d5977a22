use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::vocation::errors::VocationError;
use crate::domain::vocation::models::CreateVocationCommand;
use crate::domain::vocation::models::Vocation;
use crate::domain::vocation::models::VocationId;

/// Port for vocation listing operations.
#[async_trait]
pub trait VocationServicePort: Send + Sync + 'static {
    /// Create a listing owned by `owner`.
    ///
    /// # Errors
    /// * `StorageUnavailable` - Database operation failed
    async fn create_vocation(
        &self,
        command: CreateVocationCommand,
        owner: AccountId,
    ) -> Result<Vocation, VocationError>;

    /// # Errors
    /// * `NotFound` - Listing does not exist
    /// * `StorageUnavailable` - Database operation failed
    async fn get_vocation(&self, id: &VocationId) -> Result<Vocation, VocationError>;

    /// All listings, newest first.
    async fn list_vocations(&self) -> Result<Vec<Vocation>, VocationError>;

    /// Listings owned by one account, newest first.
    async fn list_vocations_by_owner(
        &self,
        owner: &AccountId,
    ) -> Result<Vec<Vocation>, VocationError>;
}

/// Persistence operations for vocation listings.
#[async_trait]
pub trait VocationRepository: Send + Sync + 'static {
    async fn create(&self, vocation: Vocation) -> Result<Vocation, VocationError>;

    async fn find_by_id(&self, id: &VocationId) -> Result<Option<Vocation>, VocationError>;

    async fn list_all(&self) -> Result<Vec<Vocation>, VocationError>;

    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<Vocation>, VocationError>;
}
