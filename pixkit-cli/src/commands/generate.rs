//! Generate command - build a static PIX payload

use anyhow::{Context, Result};
use pixkit_lib::{Amount, PixKeyKind};
use serde::Serialize;
use std::path::Path;

use crate::config::{self, MerchantOverrides};
use crate::ui;

/// Arguments collected from the command line.
#[derive(Debug, Default, Clone)]
pub struct GenerateArgs {
    pub merchant: MerchantOverrides,
    pub amount: Option<String>,
    pub txid: Option<String>,
    pub description: Option<String>,
    pub json: bool,
    pub no_qr: bool,
}

/// A generated payload with the values that went into it.
#[derive(Debug, Clone, Serialize)]
pub struct Generated {
    pub payload: String,
    pub key: String,
    pub key_kind: PixKeyKind,
    pub merchant_name: String,
    pub merchant_city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    pub txid: String,
}

/// Parse an amount typed by a user.
///
/// Accepts `150.50`, `150,50`, `1.234,56` and `1,234.56`. When both `.` and
/// `,` appear, the last one is the decimal mark and the other groups
/// thousands. A lone separator used more than once is rejected as ambiguous.
pub fn parse_amount(raw: &str) -> Result<Amount> {
    let trimmed = raw.trim();
    let decimal_mark = match (trimmed.rfind('.'), trimmed.rfind(',')) {
        (Some(dot), Some(comma)) => Some(if dot > comma { '.' } else { ',' }),
        (Some(_), None) => Some('.'),
        (None, Some(_)) => Some(','),
        (None, None) => None,
    };

    let normalized = match decimal_mark {
        Some(mark) => {
            let grouping = if mark == '.' { ',' } else { '.' };
            if trimmed.matches(mark).count() > 1 {
                anyhow::bail!("invalid amount '{}': more than one decimal separator", raw);
            }
            trimmed.replace(grouping, "").replace(mark, ".")
        }
        None => trimmed.to_string(),
    };
    Amount::from_str_checked(&normalized).with_context(|| format!("invalid amount '{}'", raw))
}

/// Build the payload from the config file plus flags.
pub fn build(config_path: &Path, args: &GenerateArgs) -> Result<Generated> {
    let file = config::load(config_path)?;
    let merchant = config::merge(file, args.merchant.clone())?;
    merchant.validate()?;

    let mut payload = merchant.to_payload();
    let amount = match &args.amount {
        Some(raw) => {
            let amount = parse_amount(raw)?;
            payload = payload.with_amount(amount);
            Some(amount.to_field_value()?)
        }
        None => None,
    };
    if let Some(txid) = &args.txid {
        payload = payload.with_txid(txid.clone());
    }
    if let Some(description) = &args.description {
        payload = payload.with_description(description.clone());
    }

    let encoded = payload.encode()?;
    tracing::debug!(len = encoded.len(), "payload generated");

    Ok(Generated {
        key: pixkit_lib::format_key(payload.key().trim()),
        key_kind: pixkit_lib::classify_key(payload.key().trim()),
        merchant_name: pixkit_lib::normalize::normalize_name(&merchant.name),
        merchant_city: pixkit_lib::normalize::normalize_city(&merchant.city),
        amount,
        txid: payload.txid().to_string(),
        payload: encoded,
    })
}

#[tracing::instrument(skip(config_path, args))]
pub fn run(config_path: &Path, args: GenerateArgs, verbose: bool) -> Result<()> {
    let generated = build(config_path, &args)?;

    if args.json {
        ui::json(&serde_json::to_value(&generated)?);
        return Ok(());
    }

    ui::header("PIX Payload");
    ui::key_value("Key", &generated.key);
    if verbose {
        ui::key_value("Key type", generated.key_kind.as_str());
    }
    ui::key_value("Merchant", &generated.merchant_name);
    ui::key_value("City", &generated.merchant_city);
    match &generated.amount {
        Some(amount) => ui::key_value("Amount", &format!("R$ {}", amount)),
        None => ui::key_value("Amount", "open (payer chooses)"),
    }
    ui::key_value("Txid", &generated.txid);
    if generated.key_kind == PixKeyKind::Unknown {
        ui::warning("Key format not recognized; it is encoded as given");
    }

    ui::separator();
    println!("{}", generated.payload);
    ui::separator();

    if !args.no_qr {
        ui::qr_code(&generated.payload)?;
    }
    ui::success("Payload ready");

    Ok(())
}
