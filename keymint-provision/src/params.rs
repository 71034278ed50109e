//! The lifecycle dispatcher's parameter bag.

use crate::options::ConfigOption;
use keymint_key::AccountIdentity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters handed to every lifecycle operation by the billing panel.
///
/// Only the fields this module consumes are modelled; the panel sends many
/// more.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionParams {
    /// Numeric id of the billed service.
    pub service_id: u64,
    /// Panel username of the account.
    pub username: String,
    /// Account password; only change-password looks at it.
    #[serde(default)]
    pub password: String,
    /// Client display name.
    #[serde(default)]
    pub client_name: String,
    /// Product config option values, keyed by friendly name or short id.
    #[serde(default)]
    pub config_options: HashMap<String, String>,
    /// Custom field values, keyed by friendly name or short id.
    #[serde(default)]
    pub custom_fields: HashMap<String, String>,
    /// Positional `configoption1`..`configoptionN` values.
    #[serde(default)]
    pub numbered_options: Vec<String>,
}

impl ProvisionParams {
    /// The account identity used for key derivation.
    #[must_use]
    pub fn identity(&self) -> AccountIdentity {
        AccountIdentity::new(self.service_id, self.username.clone())
    }

    /// Resolves an option value.
    ///
    /// Lookup order: config options by friendly name, config options by id,
    /// custom fields by friendly name, custom fields by id, then the
    /// positional `configoptionN` slot. Empty values count as unset.
    #[must_use]
    pub fn option(&self, option: ConfigOption) -> Option<&str> {
        let keys = [option.friendly_name(), option.id()];
        for map in [&self.config_options, &self.custom_fields] {
            for key in keys {
                if let Some(value) = map.get(key) {
                    if !value.is_empty() {
                        return Some(value.as_str());
                    }
                }
            }
        }

        self.numbered_options
            .get(option.position().saturating_sub(1))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}
