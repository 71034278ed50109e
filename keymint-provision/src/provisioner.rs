//! Lifecycle operations against the license server.

use crate::error::{ProvisionError, ProvisionResult};
use crate::options::ConfigOption;
use crate::params::ProvisionParams;
use keymint_client::{
    never_expires, ApiError, HttpLicenseApi, LicenseApi, LicenseDraft, LicenseRecord,
    LicenseServerConfig, ReplenishInterval,
};
use keymint_key::LicenseKey;
use std::sync::Arc;
use tracing::{debug, info};

/// Notes written to records created without an explicit notes option.
pub const DEFAULT_NOTES: &str = "Provisioned by Keymint";

/// Data for the panel's client-area template.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ClientAreaView {
    /// The account's license key.
    pub license_key: LicenseKey,
}

/// Executes lifecycle operations for one license server.
pub struct Provisioner {
    api: Arc<dyn LicenseApi>,
}

impl Provisioner {
    /// Connects to the configured license server.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection settings are unusable.
    pub fn connect(config: LicenseServerConfig) -> ProvisionResult<Self> {
        Ok(Self::with_api(Arc::new(HttpLicenseApi::new(config)?)))
    }

    /// Uses an existing API implementation. Injection point for tests.
    #[must_use]
    pub fn with_api(api: Arc<dyn LicenseApi>) -> Self {
        Self { api }
    }

    /// Verifies connectivity and credentials against the server.
    pub async fn test_connection(&self) -> ProvisionResult<()> {
        self.api.health_check().await?;
        Ok(())
    }

    /// Creates the account's license record and returns the derived key.
    pub async fn create_account(&self, params: &ProvisionParams) -> ProvisionResult<LicenseKey> {
        let key = params.identity().license_key();
        let draft = draft_from_options(params, &key, Some(params.client_name.clone()))?;
        self.api.create(&draft).await?;
        info!("created license record for service {}", params.service_id);
        Ok(key)
    }

    /// Deactivates the account's license.
    pub async fn suspend_account(&self, params: &ProvisionParams) -> ProvisionResult<()> {
        self.set_active(params, false).await
    }

    /// Reactivates the account's license.
    pub async fn unsuspend_account(&self, params: &ProvisionParams) -> ProvisionResult<()> {
        self.set_active(params, true).await
    }

    /// Deletes the account's license record.
    pub async fn terminate_account(&self, params: &ProvisionParams) -> ProvisionResult<()> {
        let record = self.find_record(params).await?;
        self.api.delete(record.id).await?;
        info!(
            "terminated license record {} for service {}",
            record.id, params.service_id
        );
        Ok(())
    }

    /// Re-applies the panel's current option values to the account's
    /// license, keeping the record's key.
    pub async fn change_package(&self, params: &ProvisionParams) -> ProvisionResult<()> {
        let record = self.find_record(params).await?;
        let draft = draft_from_options(params, &record.license_key, None)?;
        self.api.update(record.id, &draft).await?;
        info!(
            "updated license record {} for service {}",
            record.id, params.service_id
        );
        Ok(())
    }

    /// Renews the account's license: refreshes the record when it exists,
    /// recreates it when the server no longer has it.
    pub async fn renew_account(&self, params: &ProvisionParams) -> ProvisionResult<()> {
        match self.find_record(params).await {
            Ok(record) => {
                let draft = draft_from_options(params, &record.license_key, None)?;
                self.api.update(record.id, &draft).await?;
                info!(
                    "renewed license record {} for service {}",
                    record.id, params.service_id
                );
                Ok(())
            }
            Err(ProvisionError::Api(ApiError::NotFound)) => {
                debug!(
                    "no license record behind the key for service {}, recreating",
                    params.service_id
                );
                self.create_account(params).await?;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Validates a password change. The license server holds no password,
    /// so nothing leaves the panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the new password is empty.
    pub fn change_password(&self, params: &ProvisionParams) -> ProvisionResult<()> {
        if params.password.is_empty() {
            return Err(ProvisionError::EmptyPassword);
        }
        Ok(())
    }

    /// Data for the client-area template: the account's derived key.
    #[must_use]
    pub fn client_area_view(&self, params: &ProvisionParams) -> ClientAreaView {
        ClientAreaView {
            license_key: params.identity().license_key(),
        }
    }

    async fn set_active(&self, params: &ProvisionParams, active: bool) -> ProvisionResult<()> {
        let record = self.find_record(params).await?;
        let draft = LicenseDraft::from_record(&record, active);
        self.api.update(record.id, &draft).await?;
        info!(
            "{} license record {} for service {}",
            if active { "unsuspended" } else { "suspended" },
            record.id,
            params.service_id
        );
        Ok(())
    }

    async fn find_record(&self, params: &ProvisionParams) -> ProvisionResult<LicenseRecord> {
        let key = params.identity().license_key();
        debug!(
            "looking up license record for service {} by derived key",
            params.service_id
        );
        Ok(self.api.find_by_key(&key).await?)
    }
}

/// Builds a create/update body from the panel's option values.
///
/// Unset numeric options cascade: the IP limit defaults to 1, validation
/// tokens to three times the IP limit, the validation ceiling to three times
/// the tokens. The replenish amount always equals the validation tokens.
fn draft_from_options(
    params: &ProvisionParams,
    key: &LicenseKey,
    name: Option<String>,
) -> ProvisionResult<LicenseDraft> {
    let ip_limit = numeric_option(params, ConfigOption::IpLimit)?.unwrap_or(1);
    let validation_points = numeric_option(params, ConfigOption::ValidationTokens)?
        .unwrap_or_else(|| ip_limit.saturating_mul(3));
    let validation_limit = numeric_option(params, ConfigOption::ValidationLimit)?
        .unwrap_or_else(|| validation_points.saturating_mul(3));

    let replenish_interval = match params.option(ConfigOption::ReplenishInterval) {
        Some(value) => value
            .parse()
            .map_err(|_| ProvisionError::InvalidOption {
                option: ConfigOption::ReplenishInterval.id(),
                value: value.to_string(),
            })?,
        None => ReplenishInterval::default(),
    };

    Ok(LicenseDraft {
        active: true,
        name,
        notes: Some(
            params
                .option(ConfigOption::Notes)
                .unwrap_or(DEFAULT_NOTES)
                .to_string(),
        ),
        ip_limit,
        license_scope: params.option(ConfigOption::Scope).map(str::to_string),
        expiration_date: never_expires(),
        validation_points,
        validation_limit,
        replenish_amount: validation_points,
        replenish_interval,
        license_key: key.clone(),
    })
}

fn numeric_option(
    params: &ProvisionParams,
    option: ConfigOption,
) -> ProvisionResult<Option<u32>> {
    match params.option(option) {
        None => Ok(None),
        Some(value) => value
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ProvisionError::InvalidOption {
                option: option.id(),
                value: value.to_string(),
            }),
    }
}
