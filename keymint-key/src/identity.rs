//! Account identity handed over by the billing panel.

use crate::key::LicenseKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The stable identity of a billed account: the panel's numeric service id
/// plus the account username. Built fresh for each lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountIdentity {
    /// The panel's numeric service id.
    pub service_id: u64,
    /// The panel username.
    pub username: String,
}

impl AccountIdentity {
    /// Creates an identity.
    #[must_use]
    pub fn new(service_id: u64, username: impl Into<String>) -> Self {
        Self {
            service_id,
            username: username.into(),
        }
    }

    /// The derivation input: `"{service_id}-{username}"`.
    #[must_use]
    pub fn key_input(&self) -> String {
        format!("{}-{}", self.service_id, self.username)
    }

    /// Derives the account's license key.
    #[must_use]
    pub fn license_key(&self) -> LicenseKey {
        LicenseKey::derive(&self.key_input())
    }
}

impl fmt::Display for AccountIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.service_id, self.username)
    }
}
