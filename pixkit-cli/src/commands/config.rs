//! Config command - write and show the merchant config file

use anyhow::Result;
use pixkit_lib::MerchantConfig;
use std::path::Path;

use crate::{config, ui};

pub fn init(
    path: &Path,
    key: String,
    name: String,
    city: String,
    txid: Option<String>,
    force: bool,
    _verbose: bool,
) -> Result<()> {
    if path.exists() && !force {
        let overwrite = ui::confirm(
            &format!("{} already exists. Overwrite?", path.display()),
            false,
        )?;
        if !overwrite {
            ui::info("Keeping existing config");
            return Ok(());
        }
    }

    let mut merchant = MerchantConfig::new(key, name, city);
    if let Some(txid) = txid {
        merchant = merchant.with_default_txid(txid);
    }
    // Reject a txid the encoder would refuse later.
    merchant.to_payload().encode()?;

    config::save(path, &merchant)?;
    tracing::info!(path = %path.display(), "merchant config written");
    ui::success(&format!("Config written to {}", path.display()));
    Ok(())
}

pub fn show(path: &Path, _verbose: bool) -> Result<()> {
    match config::load(path)? {
        Some(merchant) => {
            ui::header("Merchant Config");
            ui::key_value("File", &path.display().to_string());
            ui::key_value("Key", &merchant.key);
            ui::key_value("Name", &merchant.name);
            ui::key_value("City", &merchant.city);
            if let Some(txid) = &merchant.default_txid {
                ui::key_value("Default txid", txid);
            }
        }
        None => {
            ui::error(&format!("No config at {}", path.display()));
            ui::info("Run 'pixkit config init --key <KEY> --name <NAME> --city <CITY>'");
        }
    }
    Ok(())
}
