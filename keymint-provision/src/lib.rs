//! Billing-panel provisioning operations for Keymint.
//!
//! The panel's lifecycle dispatcher calls one operation at a time with a
//! parameter bag. Every operation that touches an existing account
//! re-derives the account's license key from `serviceId-username` and uses
//! it to find the remote record; no mapping is stored on the panel side.
//!
//! # Operations
//!
//! - create: derive the key, create the remote record
//! - suspend / unsuspend: look the record up by key, flip its active flag
//! - terminate: look up, delete
//! - change package: look up, re-apply the panel's option values
//! - renew: refresh the record, or recreate it if the server lost it
//! - change password: local validation only
//! - test connection, client area view

mod error;
mod options;
mod params;
mod provisioner;

pub use error::{ProvisionError, ProvisionResult};
pub use options::ConfigOption;
pub use params::ProvisionParams;
pub use provisioner::{ClientAreaView, Provisioner, DEFAULT_NOTES};
