//! reqwest implementation of the license server API.

use crate::api::{LicenseApi, HEALTH_PROBE_KEY};
use crate::config::LicenseServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::record::{LicenseDraft, LicenseRecord};
use async_trait::async_trait;
use keymint_key::LicenseKey;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

/// User agent sent with every request.
const USER_AGENT: &str = concat!("keymint/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the license server's `/admin/licenses` API.
pub struct HttpLicenseApi {
    api_key: String,
    base_url: String,
    client: Client,
}

impl HttpLicenseApi {
    /// Builds a client from connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot produce a base URL.
    pub fn new(config: LicenseServerConfig) -> ApiResult<Self> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to create HTTP client");

        Ok(Self {
            api_key: config.api_key,
            base_url,
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/admin/licenses{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> ApiResult<Response> {
        let url = self.url(path);
        debug!("GET {}", url);
        self.client
            .get(&url)
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("request to license server failed: {e}")))
    }

    async fn decode_record(response: Response) -> ApiResult<LicenseRecord> {
        response
            .json::<LicenseRecord>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("failed to parse license record: {e}")))
    }
}

#[async_trait]
impl LicenseApi for HttpLicenseApi {
    async fn health_check(&self) -> ApiResult<()> {
        let response = self.get(&format!("/key/{HEALTH_PROBE_KEY}")).await?;
        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ApiError::unexpected_status(status.as_u16())),
        }
    }

    async fn find_by_key(&self, key: &LicenseKey) -> ApiResult<LicenseRecord> {
        let response = self.get(&format!("/key/{key}")).await?;
        match response.status() {
            // Some server builds answer 200 with an empty body for an
            // unknown key; a body without a record id means not found.
            StatusCode::OK => Self::decode_record(response)
                .await
                .map_err(|_| ApiError::NotFound),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => Err(ApiError::unexpected_status(status.as_u16())),
        }
    }

    async fn fetch(&self, id: i64) -> ApiResult<LicenseRecord> {
        let response = self.get(&format!("/{id}")).await?;
        match response.status() {
            StatusCode::OK => Self::decode_record(response).await,
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => Err(ApiError::unexpected_status(status.as_u16())),
        }
    }

    async fn create(&self, draft: &LicenseDraft) -> ApiResult<()> {
        let url = self.url("");
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, &self.api_key)
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("request to license server failed: {e}")))?;

        match response.status() {
            StatusCode::CREATED => {
                info!("created license record for key {}", draft.license_key);
                Ok(())
            }
            status => Err(ApiError::unexpected_status(status.as_u16())),
        }
    }

    async fn update(&self, id: i64, draft: &LicenseDraft) -> ApiResult<()> {
        let url = self.url(&format!("/{id}"));
        debug!("PATCH {}", url);
        let response = self
            .client
            .patch(&url)
            .header(AUTHORIZATION, &self.api_key)
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("request to license server failed: {e}")))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(ApiError::unexpected_status(status.as_u16())),
        }
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let url = self.url(&format!("/{id}"));
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(&url)
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("request to license server failed: {e}")))?;

        // The server answers 200 (not 204) on delete.
        match response.status() {
            StatusCode::OK => {
                info!("deleted license record {}", id);
                Ok(())
            }
            status => Err(ApiError::unexpected_status(status.as_u16())),
        }
    }
}
