//! Checkout Example
//!
//! Issues a PIX charge for an order through an injected backend, prints the
//! payload a QR renderer would display, then records the payment.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example checkout --features test-utils
//! ```

use pixkit_lib::charge::ChargeService;
use pixkit_lib::test_utils::InMemoryBackend;
use pixkit_lib::{decode_payload, Amount, MerchantConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> pixkit_lib::Result<()> {
    let backend = InMemoryBackend::new();
    backend.insert_merchant(
        "loja-centro",
        MerchantConfig::new("(62) 99876-5432", "Distribuidora Goiânia", "Goiânia")
            .with_default_txid("LOJACENTRO"),
    );

    let service = ChargeService::new(backend);

    let order_total = Amount::from_str_checked("349.90")?;
    let charge = service.create_charge("loja-centro", order_total).await?;

    println!("Charge {} ({:?})", charge.id, charge.status);
    println!("Payload: {}", charge.payload);

    let decoded = decode_payload(&charge.payload)?;
    println!(
        "Pays {} in {} via key {}",
        decoded.merchant_name, decoded.merchant_city, decoded.key
    );

    let paid = service.confirm_payment(&charge.id).await?;
    println!("Charge {} is now {:?}", paid.id, paid.status);

    Ok(())
}
