//! Merchant configuration.
//!
//! Holds the recipient data a charge needs. The CLI persists it as TOML and
//! backends hand it out per merchant.

use crate::payload::{MerchantInfo, PixPayload};
use crate::{PixkitError, Result};
use serde::{Deserialize, Serialize};

/// Recipient of PIX charges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// PIX key (phone, e-mail, CNPJ or random key).
    pub key: String,

    /// Merchant name shown to the payer.
    pub name: String,

    /// Merchant city shown to the payer.
    pub city: String,

    /// Reference label used when a charge does not set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_txid: Option<String>,
}

impl MerchantConfig {
    /// Create a new merchant configuration.
    pub fn new(key: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            city: city.into(),
            default_txid: None,
        }
    }

    /// Set the default reference label.
    pub fn with_default_txid(mut self, txid: impl Into<String>) -> Self {
        self.default_txid = Some(txid.into());
        self
    }

    /// Reject configurations with blank required fields.
    pub fn validate(&self) -> Result<()> {
        if self.key.trim().is_empty() {
            return Err(PixkitError::MissingField("key"));
        }
        if self.name.trim().is_empty() {
            return Err(PixkitError::MissingField("name"));
        }
        if self.city.trim().is_empty() {
            return Err(PixkitError::MissingField("city"));
        }
        Ok(())
    }

    /// Merchant shown on charges.
    pub fn merchant(&self) -> MerchantInfo {
        MerchantInfo::new(self.name.clone(), self.city.clone())
    }

    /// Start a charge for this merchant, without amount.
    pub fn to_payload(&self) -> PixPayload {
        let payload = PixPayload::new(self.key.clone(), self.merchant());
        match &self.default_txid {
            Some(txid) => payload.with_txid(txid.clone()),
            None => payload,
        }
    }
}
