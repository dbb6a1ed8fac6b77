//! Key command - classify and format a PIX key

use anyhow::Result;
use pixkit_lib::PixKeyKind;

use crate::ui;

pub fn run(raw: &str, _verbose: bool) -> Result<()> {
    let kind = pixkit_lib::classify_key(raw);
    let formatted = pixkit_lib::format_key(raw.trim());

    ui::header("PIX Key");
    ui::key_value("Input", raw);
    ui::key_value("Type", kind.as_str());
    ui::key_value("Encoded as", &formatted);

    match kind {
        PixKeyKind::Phone if formatted != raw.trim() => {
            ui::info("11-digit numbers are treated as mobile phones; a CPF key would be encoded the same way");
        }
        PixKeyKind::Unknown => ui::warning("Key format not recognized; it is encoded as given"),
        _ => {}
    }

    Ok(())
}
