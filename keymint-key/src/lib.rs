//! Deterministic license key derivation for Keymint.
//!
//! The billing panel never stores which remote license record belongs to
//! which account. Instead, every lifecycle operation recomputes the account's
//! license key from its stable identity (`serviceId-username`) and looks the
//! record up by key. That only works because derivation is a pure function:
//! same input bytes, same key, forever.
//!
//! # Key format
//!
//! `XXXXX-XXXXX-XXXX-XXXXXXX-XXXXXXX` — 28 uppercase hex characters in
//! 5-5-4-7-7 groups, 32 characters total.

mod error;
mod identity;
mod key;

pub use error::{KeyError, KeyResult};
pub use identity::AccountIdentity;
pub use key::{LicenseKey, GROUP_LENGTHS, KEY_LENGTH};
