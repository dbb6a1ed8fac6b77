//! Checksum command - CRC16/CCITT-FALSE of arbitrary text

use anyhow::Result;

use crate::ui;

pub fn run(text: &str, verbose: bool) -> Result<()> {
    let crc = pixkit_lib::crc::crc16_hex(text);
    if verbose {
        ui::key_value("Input bytes", &text.len().to_string());
    }
    println!("{}", crc);
    Ok(())
}
