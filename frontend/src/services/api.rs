use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;
use shared::{Bill, NewUpload, UploadReceipt};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::StoreError;
use crate::storage::traits::{BillStore, SessionStore};

/// Body returned by `POST /bills`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBillResponse {
    file_url: String,
    key: String,
}

/// [`BillStore`] backed by the Billed REST API
pub struct ApiStore {
    client: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiStore {
    /// Create a store talking to the API configured in `config`
    pub fn new(config: &AppConfig, session: Arc<dyn SessionStore>) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Map a non-success response to `Erreur <code>`
    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), body = %body, "bill store returned an error");
        Err(StoreError::Status(status.as_u16()))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    }
}

#[async_trait]
impl BillStore for ApiStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let url = self.url("bills");
        debug!(url = %url, "listing bills");

        let response = self.authorize(self.client.get(&url)).send().await?;
        let bills: Vec<Bill> = Self::check(response).await?.json().await?;

        info!(count = bills.len(), "bills fetched from store");
        Ok(bills)
    }

    async fn create(&self, upload: NewUpload) -> Result<UploadReceipt, StoreError> {
        let url = self.url("bills");
        info!(file_name = %upload.file_name, email = %upload.email, "uploading receipt");

        let part = multipart::Part::bytes(upload.content)
            .file_name(upload.file_name.clone())
            .mime_str(content_type_for(&upload.file_name))
            .map_err(|e| StoreError::Transport(format!("invalid content type: {}", e)))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", upload.email);

        let response = self
            .authorize(self.client.post(&url))
            .multipart(form)
            .send()
            .await?;
        let created: CreateBillResponse = Self::check(response).await?.json().await?;

        Ok(UploadReceipt {
            file_url: created.file_url,
            file_name: upload.file_name,
            key: created.key,
        })
    }

    async fn update(&self, key: &str, bill: &Bill) -> Result<Bill, StoreError> {
        let url = self.url(&format!("bills/{}", key));
        debug!(url = %url, "updating bill");

        let response = self
            .authorize(self.client.patch(&url))
            .json(bill)
            .send()
            .await?;
        let stored: Bill = Self::check(response).await?.json().await?;

        info!(key = %key, "bill persisted");
        Ok(stored)
    }
}
