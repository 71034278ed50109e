//! License server connection settings.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Connection settings for one license server, as handed over by the
/// billing panel's server assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseServerConfig {
    /// Server hostname or IPv4 address, without a scheme.
    pub hostname: String,
    /// Use https for hostname-based servers.
    pub secure: bool,
    /// API key sent verbatim as the `Authorization` header.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LicenseServerConfig {
    /// Creates a config with the default timeout.
    #[must_use]
    pub fn new(hostname: impl Into<String>, secure: bool, api_key: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            secure,
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Resolves the server's base URL.
    ///
    /// Some panel code paths hand the hostname over with literal `DOT` and
    /// `DASH` tokens in place of the characters; those are unescaped first.
    /// A bare IPv4 address is always plain http; otherwise the scheme
    /// follows the `secure` flag.
    ///
    /// # Errors
    ///
    /// Returns an error if no hostname is configured.
    pub fn base_url(&self) -> ApiResult<String> {
        if self.hostname.is_empty() {
            return Err(ApiError::InvalidConfig(
                "no hostname configured for the license server; is a server group assigned?"
                    .to_string(),
            ));
        }

        let hostname = self.hostname.replace("DOT", ".").replace("DASH", "-");
        let scheme = if hostname.parse::<Ipv4Addr>().is_ok() || !self.secure {
            "http"
        } else {
            "https"
        };

        Ok(format!("{scheme}://{}", hostname.trim_end_matches('/')))
    }
}
