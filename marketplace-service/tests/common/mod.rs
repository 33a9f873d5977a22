use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use auth::SigningKey;
use auth::TokenConfig;
use marketplace_service::domain::account::errors::AccountError;
use marketplace_service::domain::account::models::Account;
use marketplace_service::domain::account::models::AccountId;
use marketplace_service::domain::account::models::EmailAddress;
use marketplace_service::domain::account::models::Username;
use marketplace_service::domain::account::ports::AccountRepository;
use marketplace_service::domain::account::service::AccountService;
use marketplace_service::domain::vocation::errors::VocationError;
use marketplace_service::domain::vocation::models::Vocation;
use marketplace_service::domain::vocation::models::VocationId;
use marketplace_service::domain::vocation::ports::VocationRepository;
use marketplace_service::domain::vocation::service::VocationService;
use marketplace_service::inbound::http::router::create_router;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_config = TokenConfig::with_hours(
            SigningKey::new(JWT_SECRET).expect("Test secret should be long enough"),
            24,
        );
        let authenticator = Arc::new(Authenticator::new(&token_config));

        let accounts = Arc::new(InMemoryAccountRepository::default());
        let vocations = Arc::new(InMemoryVocationRepository::new(Arc::clone(&accounts)));

        let account_service = Arc::new(AccountService::new(
            Arc::clone(&accounts),
            Arc::clone(&authenticator),
        ));
        let vocation_service = Arc::new(VocationService::new(vocations));

        let router = create_router(account_service, vocation_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            accounts,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(&token_config),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register an account and return the response body
    pub async fn register(&self, username: &str, password: &str) -> Value {
        let response = self
            .post("/register")
            .json(&json!({
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }

    /// Register, log in, and return (account id, token)
    pub async fn register_and_login(&self, username: &str) -> (String, String) {
        self.register(username, "pass_word!").await;

        let response = self
            .post("/login")
            .json(&json!({ "username": username, "password": "pass_word!" }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("Failed to parse response");

        (
            body["data"]["account"]["id"].as_str().unwrap().to_string(),
            body["data"]["token"].as_str().unwrap().to_string(),
        )
    }
}

/// Credential store kept in a map; enforces the same uniqueness rules as Postgres
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Mutex<HashMap<AccountId, Account>>,
}

impl InMemoryAccountRepository {
    pub fn remove(&self, id: &AccountId) {
        self.accounts.lock().unwrap().remove(id);
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.lock().unwrap();

        if accounts.values().any(|a| a.username == account.username) {
            return Err(AccountError::UsernameAlreadyExists(
                account.username.as_str().to_string(),
            ));
        }
        if accounts.values().any(|a| a.email == account.email) {
            return Err(AccountError::EmailAlreadyExists(
                account.email.as_str().to_string(),
            ));
        }

        accounts.insert(account.id, account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.lock().unwrap().get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Account>, AccountError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| &a.username == username)
            .cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Account>, AccountError> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .values()
            .find(|a| &a.email == email)
            .cloned())
    }
}

/// Listing store that rejects owners missing from the account store, like the
/// foreign key in Postgres
pub struct InMemoryVocationRepository {
    accounts: Arc<InMemoryAccountRepository>,
    vocations: Mutex<Vec<Vocation>>,
}

impl InMemoryVocationRepository {
    pub fn new(accounts: Arc<InMemoryAccountRepository>) -> Self {
        Self {
            accounts,
            vocations: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl VocationRepository for InMemoryVocationRepository {
    async fn create(&self, vocation: Vocation) -> Result<Vocation, VocationError> {
        let owner_exists = self
            .accounts
            .find_by_id(&vocation.owner_id)
            .await
            .map_err(|e| VocationError::StorageUnavailable(e.to_string()))?
            .is_some();
        if !owner_exists {
            return Err(VocationError::OwnerNotFound(vocation.owner_id.to_string()));
        }

        self.vocations.lock().unwrap().push(vocation.clone());
        Ok(vocation)
    }

    async fn find_by_id(&self, id: &VocationId) -> Result<Option<Vocation>, VocationError> {
        Ok(self
            .vocations
            .lock()
            .unwrap()
            .iter()
            .find(|v| &v.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Vocation>, VocationError> {
        Ok(self.vocations.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn list_by_owner(&self, owner: &AccountId) -> Result<Vec<Vocation>, VocationError> {
        Ok(self
            .vocations
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|v| &v.owner_id == owner)
            .cloned()
            .collect())
    }
}
