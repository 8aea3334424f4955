//! HTTP-backed template store
//!
//! Thin REST adapter over the data service's label-template endpoints.
//! New documents POST, previously saved documents PUT to their id.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::ApiResponse;
use shared::models::TemplateDocument;
use tracing::{info, instrument};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::TemplateStore;

/// Template store backed by the data service REST API
#[derive(Debug, Clone)]
pub struct HttpTemplateStore {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTemplateStore {
    /// Create a store from configuration
    pub fn new(config: &StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }

    /// All templates known to the data service
    pub async fn list(&self) -> StoreResult<Vec<TemplateDocument>> {
        let request = self.authorize(self.client.get(self.url("api/label-templates")));
        Self::handle_response(request.send().await?).await
    }

    /// Remove a template from the data service
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let request =
            self.authorize(self.client.delete(self.url(&format!("api/label-templates/{id}"))));
        let _: bool = Self::handle_response(request.send().await?).await?;
        Ok(())
    }

    /// Map the HTTP response to a typed result
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> StoreResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return match status {
                StatusCode::UNAUTHORIZED => Err(StoreError::Unauthorized),
                StatusCode::NOT_FOUND => Err(StoreError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(StoreError::Validation(text)),
                _ => Err(StoreError::Internal(text)),
            };
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.is_success() {
            return Err(StoreError::Internal(envelope.message));
        }
        envelope
            .data
            .ok_or_else(|| StoreError::InvalidResponse("Missing response data".to_string()))
    }
}

#[async_trait]
impl TemplateStore for HttpTemplateStore {
    #[instrument(skip(self, doc), fields(template = %doc.name, id = ?doc.id))]
    async fn save(&self, doc: &TemplateDocument) -> StoreResult<i64> {
        let request = match doc.id {
            Some(id) => self
                .client
                .put(self.url(&format!("api/label-templates/{id}")))
                .json(doc),
            None => self.client.post(self.url("api/label-templates")).json(doc),
        };
        let saved: TemplateDocument =
            Self::handle_response(self.authorize(request).send().await?).await?;
        let id = saved
            .id
            .ok_or_else(|| StoreError::InvalidResponse("Saved template has no id".to_string()))?;
        info!(id, "template saved");
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn load(&self, id: i64) -> StoreResult<TemplateDocument> {
        let request = self.authorize(
            self.client
                .get(self.url(&format!("api/label-templates/{id}"))),
        );
        Self::handle_response(request.send().await?).await
    }
}
