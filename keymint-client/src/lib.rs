//! REST client for the remote license server.
//!
//! The license server exposes license records under `/admin/licenses`:
//! lookup by key, create, update, delete. This crate owns the wire model,
//! the connection settings, and a small async API seam so the provisioning
//! layer can be driven against a mock server in tests.
//!
//! Calls are synchronous from the dispatcher's point of view: one operation
//! at a time, no retries, the server is the only source of truth.

mod api;
mod config;
mod error;
mod http;
mod record;

pub use api::{LicenseApi, HEALTH_PROBE_KEY};
pub use config::{LicenseServerConfig, DEFAULT_TIMEOUT_SECS};
pub use error::{status_hint, ApiError, ApiResult};
pub use http::HttpLicenseApi;
pub use record::{never_expires, LicenseDraft, LicenseRecord, ReplenishInterval, UnknownInterval};
