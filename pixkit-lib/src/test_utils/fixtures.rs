//! Test fixtures.

use crate::config::MerchantConfig;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// One key of each kind the encoder recognises.
    pub const PHONE_KEY: &'static str = "11987654321";
    pub const EMAIL_KEY: &'static str = "vendas@example.com";
    pub const CNPJ_KEY: &'static str = "12345678000195";
    pub const RANDOM_KEY: &'static str = "123e4567-e89b-12d3-a456-426614174000";

    /// Payload for key `11987654321`, "Joao Silva", "Goiania", 150.50.
    pub const REFERENCE_PAYLOAD: &'static str = "00020126360014br.gov.bcb.pix0114+5511987654321\
         5204000053039865406150.505802BR5910Joao Silva6007Goiania62070503***630402DE";

    /// Sample amounts in BRL.
    pub const SAMPLE_AMOUNTS: &'static [&'static str] = &["0.01", "1.00", "150.50", "9999.99"];

    /// Merchant matching [`REFERENCE_PAYLOAD`](Self::REFERENCE_PAYLOAD).
    pub fn merchant() -> MerchantConfig {
        MerchantConfig::new(Self::PHONE_KEY, "Joao Silva", "Goiania")
    }

    /// Merchant whose name and city need normalization.
    pub fn accented_merchant() -> MerchantConfig {
        MerchantConfig::new(Self::EMAIL_KEY, "Conceição Açaí", "São Luís")
    }
}
