use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::DateTime;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::LoginIdentifier;
use crate::domain::account::models::LoginOutcome;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;

/// Domain service implementation for account operations.
///
/// Registration hashes through the shared authenticator; login verifies the
/// stored hash and issues a token. Token validation lives in the HTTP
/// middleware and never reaches this service.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and token issuing
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    async fn find_by_identifier(
        &self,
        identifier: &LoginIdentifier,
    ) -> Result<Option<Account>, AccountError> {
        match identifier {
            LoginIdentifier::Username(username) => {
                self.repository.find_by_username(username).await
            }
            LoginIdentifier::Email(email) => self.repository.find_by_email(email).await,
        }
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
        if command.password.is_empty() {
            return Err(AccountError::EmptyPassword);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let account = Account {
            id: AccountId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created = self.repository.create(account).await?;

        tracing::info!(
            account_id = %created.id,
            username = %created.username,
            "Account registered"
        );

        Ok(created)
    }

    async fn login(
        &self,
        command: LoginCommand,
        now: DateTime<Utc>,
    ) -> Result<LoginOutcome, AccountError> {
        // A missing account pays for a password check like a wrong password does
        let Some(identifier) = LoginIdentifier::parse(&command.identifier) else {
            self.authenticator.verify_missing_account(&command.password);
            tracing::info!("Login rejected: identifier cannot name an account");
            return Err(AccountError::UnknownIdentifier(command.identifier));
        };

        let account = match self.find_by_identifier(&identifier).await? {
            Some(account) => account,
            None => {
                self.authenticator.verify_missing_account(&command.password);
                tracing::info!(identifier = %identifier, "Login rejected: unknown identifier");
                return Err(AccountError::UnknownIdentifier(identifier.to_string()));
            }
        };

        let result = self
            .authenticator
            .authenticate(
                &command.password,
                &account.password_hash,
                &account.id.to_string(),
                now,
            )
            .map_err(|e| {
                tracing::info!(account_id = %account.id, error = %e, "Login rejected");
                AccountError::from(e)
            })?;

        tracing::info!(account_id = %account.id, "Login succeeded");

        Ok(LoginOutcome {
            account,
            token: result.access_token,
            expires_in: result.expires_in,
        })
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }
}
