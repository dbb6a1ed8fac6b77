//! Charge creation against an injected backend.
//!
//! The backend-as-a-service client is passed in explicitly; there is no
//! process-wide instance. Callers construct a backend, hand it to
//! [`ChargeService::new`], and drop both when done.

use crate::config::MerchantConfig;
use crate::{Amount, PixkitError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Lifecycle of a charge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeStatus {
    /// Payload issued, payment not confirmed.
    Pending,
    /// Payment confirmed.
    Paid,
}

/// A PIX charge issued for a merchant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Unique charge ID (UUID v4).
    pub id: String,
    /// Merchant the charge pays.
    pub merchant_id: String,
    /// Charged amount.
    pub amount: Amount,
    /// BR Code payload to render as QR.
    pub payload: String,
    /// Current status.
    pub status: ChargeStatus,
    /// Creation time (unix epoch seconds).
    pub created_at: i64,
}

/// Storage operations a charge service needs from the backend.
#[async_trait]
pub trait ChargeBackend: Send + Sync {
    /// Fetch the recipient configuration of a merchant.
    async fn fetch_merchant(&self, merchant_id: &str) -> Result<Option<MerchantConfig>>;

    /// Persist a newly issued charge.
    async fn record_charge(&self, charge: &Charge) -> Result<()>;

    /// Fetch a previously recorded charge.
    async fn fetch_charge(&self, charge_id: &str) -> Result<Option<Charge>>;

    /// Flag a recorded charge as paid.
    async fn mark_paid(&self, charge_id: &str) -> Result<()>;
}

/// Issues charges and records their payment.
pub struct ChargeService<B> {
    backend: B,
}

impl<B: ChargeBackend> ChargeService<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Borrow the injected backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consume the service, returning the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Issue a charge for `merchant_id`.
    ///
    /// The payload is encoded before anything is written, so an invalid
    /// merchant or amount never leaves a half-recorded charge behind.
    ///
    /// # Errors
    ///
    /// - [`PixkitError::NotFound`] if the backend has no such merchant.
    /// - Any encoder error for an invalid merchant configuration.
    /// - [`PixkitError::Backend`] if the backend call fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(amount = %amount)))]
    pub async fn create_charge(&self, merchant_id: &str, amount: Amount) -> Result<Charge> {
        let merchant = self
            .backend
            .fetch_merchant(merchant_id)
            .await?
            .ok_or_else(|| PixkitError::not_found("merchant", merchant_id))?;
        merchant.validate()?;

        let payload = merchant.to_payload().with_amount(amount).encode()?;

        let charge = Charge {
            id: uuid::Uuid::new_v4().to_string(),
            merchant_id: merchant_id.to_string(),
            amount,
            payload,
            status: ChargeStatus::Pending,
            created_at: chrono::Utc::now().timestamp(),
        };
        self.backend.record_charge(&charge).await?;

        #[cfg(feature = "tracing")]
        tracing::info!(charge_id = %charge.id, "charge issued");

        Ok(charge)
    }

    /// Confirm payment of a charge. Confirming a paid charge is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PixkitError::NotFound`] for an unknown charge.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn confirm_payment(&self, charge_id: &str) -> Result<Charge> {
        let mut charge = self
            .backend
            .fetch_charge(charge_id)
            .await?
            .ok_or_else(|| PixkitError::not_found("charge", charge_id))?;

        if charge.status == ChargeStatus::Paid {
            return Ok(charge);
        }

        self.backend.mark_paid(charge_id).await?;
        charge.status = ChargeStatus::Paid;

        #[cfg(feature = "tracing")]
        tracing::info!(charge_id = %charge.id, "charge paid");

        Ok(charge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode_payload;
    use crate::test_utils::InMemoryBackend;

    fn service() -> ChargeService<InMemoryBackend> {
        let backend = InMemoryBackend::new();
        backend.insert_merchant(
            "loja-1",
            MerchantConfig::new("11987654321", "Joao Silva", "Goiania"),
        );
        ChargeService::new(backend)
    }

    #[tokio::test]
    async fn test_create_charge() {
        let service = service();
        let charge = service
            .create_charge("loja-1", Amount::from_f64(150.5).unwrap())
            .await
            .unwrap();

        assert_eq!(charge.status, ChargeStatus::Pending);
        assert!(charge.payload.contains("5406150.50"));
        assert_eq!(decode_payload(&charge.payload).unwrap().key, "+5511987654321");

        let stored = service.backend().fetch_charge(&charge.id).await.unwrap();
        assert_eq!(stored, Some(charge));
    }

    #[tokio::test]
    async fn test_unknown_merchant() {
        let err = service()
            .create_charge("nope", Amount::zero())
            .await
            .unwrap_err();
        assert_eq!(err, PixkitError::not_found("merchant", "nope"));
    }

    #[tokio::test]
    async fn test_invalid_merchant_records_nothing() {
        let backend = InMemoryBackend::new();
        backend.insert_merchant("blank", MerchantConfig::new("11987654321", "", "Goiania"));
        let service = ChargeService::new(backend);

        let err = service
            .create_charge("blank", Amount::zero())
            .await
            .unwrap_err();
        assert_eq!(err, PixkitError::MissingField("name"));
        assert_eq!(service.backend().charge_count(), 0);
    }

    #[tokio::test]
    async fn test_confirm_payment_is_idempotent() {
        let service = service();
        let charge = service
            .create_charge("loja-1", Amount::from_f64(10.0).unwrap())
            .await
            .unwrap();

        let paid = service.confirm_payment(&charge.id).await.unwrap();
        assert_eq!(paid.status, ChargeStatus::Paid);

        let again = service.confirm_payment(&charge.id).await.unwrap();
        assert_eq!(again.status, ChargeStatus::Paid);
        assert_eq!(again.payload, charge.payload);
    }

    #[tokio::test]
    async fn test_confirm_unknown_charge() {
        let err = service().confirm_payment("missing").await.unwrap_err();
        assert_eq!(err, PixkitError::not_found("charge", "missing"));
    }

    #[tokio::test]
    async fn test_backend_failure_is_retryable() {
        let service = service();
        service.backend().set_offline(true);

        let err = service
            .create_charge("loja-1", Amount::zero())
            .await
            .unwrap_err();
        assert!(err.is_retryable());
    }
}
