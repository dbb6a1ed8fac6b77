//! Decode command - parse a payload and verify its checksum

use anyhow::Result;

use crate::ui;

#[tracing::instrument(skip(payload))]
pub fn run(payload: &str, json: bool, verbose: bool) -> Result<()> {
    let decoded = pixkit_lib::decode_payload(payload.trim())?;

    if json {
        ui::json(&serde_json::to_value(&decoded)?);
        return Ok(());
    }

    ui::header("Decoded PIX Payload");
    ui::key_value("Key", &decoded.key);
    ui::key_value("Key type", pixkit_lib::classify_key(&decoded.key).as_str());
    ui::key_value("Merchant", &decoded.merchant_name);
    ui::key_value("City", &decoded.merchant_city);
    match &decoded.amount {
        Some(amount) => ui::key_value("Amount", &format!("R$ {}", amount)),
        None => ui::key_value("Amount", "open (payer chooses)"),
    }
    ui::key_value("Txid", decoded.txid.as_deref().unwrap_or("***"));
    if let Some(description) = &decoded.description {
        ui::key_value("Description", description);
    }
    if verbose {
        ui::key_value("Currency", &decoded.currency);
        ui::key_value("Country", &decoded.country);
        if let Some(category) = &decoded.category_code {
            ui::key_value("Category", category);
        }
    }
    ui::key_value("CRC", &decoded.crc);
    ui::success("Checksum valid");

    Ok(())
}
