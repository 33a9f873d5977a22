use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::account::models::AccountId;
use crate::domain::vocation::errors::VocationError;
use crate::domain::vocation::models::CreateVocationCommand;
use crate::domain::vocation::models::Vocation;
use crate::domain::vocation::models::VocationId;
use crate::domain::vocation::ports::VocationRepository;
use crate::domain::vocation::ports::VocationServicePort;

/// Domain service implementation for vocation listings.
pub struct VocationService<VR>
where
    VR: VocationRepository,
{
    repository: Arc<VR>,
}

impl<VR> VocationService<VR>
where
    VR: VocationRepository,
{
    pub fn new(repository: Arc<VR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<VR> VocationServicePort for VocationService<VR>
where
    VR: VocationRepository,
{
    async fn create_vocation(
        &self,
        command: CreateVocationCommand,
        owner: AccountId,
    ) -> Result<Vocation, VocationError> {
        let now = Utc::now();
        let vocation = Vocation {
            id: VocationId::new(),
            owner_id: owner,
            name: command.name,
            details: command.details,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(vocation).await?;

        tracing::info!(
            vocation_id = %created.id,
            owner_id = %created.owner_id,
            "Vocation created"
        );

        Ok(created)
    }

    async fn get_vocation(&self, id: &VocationId) -> Result<Vocation, VocationError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(VocationError::NotFound(id.to_string()))
    }

    async fn list_vocations(&self) -> Result<Vec<Vocation>, VocationError> {
        self.repository.list_all().await
    }

    async fn list_vocations_by_owner(
        &self,
        owner: &AccountId,
    ) -> Result<Vec<Vocation>, VocationError> {
        self.repository.list_by_owner(owner).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::vocation::models::VocationDetails;
    use crate::domain::vocation::models::VocationName;

    mock! {
        pub TestVocationRepository {}

        #[async_trait]
        impl VocationRepository for TestVocationRepository {
            async fn create(&self, vocation: Vocation) -> Result<Vocation, VocationError>;
            async fn find_by_id(&self, id: &VocationId) -> Result<Option<Vocation>, VocationError>;
            async fn list_all(&self) -> Result<Vec<Vocation>, VocationError>;
            async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<Vocation>, VocationError>;
        }
    }

    fn command() -> CreateVocationCommand {
        CreateVocationCommand {
            name: VocationName::new("Halal Grill".to_string()).unwrap(),
            details: VocationDetails {
                city: "Jakarta".to_string(),
                ..VocationDetails::default()
            },
        }
    }

    #[tokio::test]
    async fn test_create_vocation_sets_owner() {
        let owner = AccountId::new();
        let mut repository = MockTestVocationRepository::new();

        repository
            .expect_create()
            .withf(move |vocation| {
                vocation.owner_id == owner
                    && vocation.name.as_str() == "Halal Grill"
                    && vocation.created_at == vocation.updated_at
            })
            .times(1)
            .returning(|vocation| Ok(vocation));

        let service = VocationService::new(Arc::new(repository));

        let vocation = service
            .create_vocation(command(), owner)
            .await
            .expect("create should succeed");
        assert_eq!(vocation.owner_id, owner);
        assert_eq!(vocation.details.city, "Jakarta");
    }

    #[tokio::test]
    async fn test_get_vocation_not_found() {
        let mut repository = MockTestVocationRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = VocationService::new(Arc::new(repository));

        let result = service.get_vocation(&VocationId::new()).await;
        assert!(matches!(result, Err(VocationError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_by_owner_passes_owner_through() {
        let owner = AccountId::new();
        let mut repository = MockTestVocationRepository::new();
        repository
            .expect_list_by_owner()
            .withf(move |requested| *requested == owner)
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = VocationService::new(Arc::new(repository));

        let vocations = service.list_vocations_by_owner(&owner).await.unwrap();
        assert!(vocations.is_empty());
    }
}
