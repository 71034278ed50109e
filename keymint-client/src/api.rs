//! Async seam over the license server's admin API.

use crate::error::ApiResult;
use crate::record::{LicenseDraft, LicenseRecord};
use async_trait::async_trait;
use keymint_key::LicenseKey;

/// Probe key used by connection tests. The record does not have to exist;
/// any 200 proves routing and credentials.
pub const HEALTH_PROBE_KEY: &str = "PING";

/// Operations the provisioning layer needs from the license server.
///
/// Implemented over HTTP by [`crate::HttpLicenseApi`]; test suites inject
/// their own implementation or point the HTTP one at a mock server.
#[async_trait]
pub trait LicenseApi: Send + Sync {
    /// Verifies connectivity and credentials.
    async fn health_check(&self) -> ApiResult<()>;

    /// Looks a record up by its license key.
    async fn find_by_key(&self, key: &LicenseKey) -> ApiResult<LicenseRecord>;

    /// Fetches a record by server id.
    async fn fetch(&self, id: i64) -> ApiResult<LicenseRecord>;

    /// Creates a new record. The server answers 201 on success.
    async fn create(&self, draft: &LicenseDraft) -> ApiResult<()>;

    /// Replaces an existing record's fields.
    async fn update(&self, id: i64, draft: &LicenseDraft) -> ApiResult<()>;

    /// Deletes a record.
    async fn delete(&self, id: i64) -> ApiResult<()>;
}
