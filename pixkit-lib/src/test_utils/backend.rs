//! In-memory charge backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::charge::{Charge, ChargeBackend, ChargeStatus};
use crate::config::MerchantConfig;
use crate::{PixkitError, Result};
use async_trait::async_trait;

/// Backend keeping merchants and charges in process memory.
#[derive(Default)]
pub struct InMemoryBackend {
    merchants: RwLock<HashMap<String, MerchantConfig>>,
    charges: RwLock<HashMap<String, Charge>>,
    offline: AtomicBool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace a merchant.
    pub fn insert_merchant(&self, merchant_id: impl Into<String>, config: MerchantConfig) {
        let mut merchants = self.merchants.write().unwrap_or_else(|e| e.into_inner());
        merchants.insert(merchant_id.into(), config);
    }

    /// Number of recorded charges.
    pub fn charge_count(&self) -> usize {
        self.charges
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    /// Make every call fail with [`PixkitError::Backend`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(PixkitError::Backend("backend unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ChargeBackend for InMemoryBackend {
    async fn fetch_merchant(&self, merchant_id: &str) -> Result<Option<MerchantConfig>> {
        self.check_online()?;
        let merchants = self.merchants.read().unwrap_or_else(|e| e.into_inner());
        Ok(merchants.get(merchant_id).cloned())
    }

    async fn record_charge(&self, charge: &Charge) -> Result<()> {
        self.check_online()?;
        let mut charges = self.charges.write().unwrap_or_else(|e| e.into_inner());
        charges.insert(charge.id.clone(), charge.clone());
        Ok(())
    }

    async fn fetch_charge(&self, charge_id: &str) -> Result<Option<Charge>> {
        self.check_online()?;
        let charges = self.charges.read().unwrap_or_else(|e| e.into_inner());
        Ok(charges.get(charge_id).cloned())
    }

    async fn mark_paid(&self, charge_id: &str) -> Result<()> {
        self.check_online()?;
        let mut charges = self.charges.write().unwrap_or_else(|e| e.into_inner());
        let charge = charges
            .get_mut(charge_id)
            .ok_or_else(|| PixkitError::not_found("charge", charge_id))?;
        charge.status = ChargeStatus::Paid;
        Ok(())
    }
}
