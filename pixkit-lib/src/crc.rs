//! CRC-16/CCITT-FALSE checksum closing every BR Code payload.
//!
//! Polynomial 0x1021, initial value 0xFFFF, no reflection, no final XOR.
//! The catalogue names this variant `CRC_16_IBM_3740`.

use crc::{Crc, CRC_16_IBM_3740};

const CCITT_FALSE: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// Tag and length that precede the checksum digits.
pub const CRC_FIELD_PREFIX: &str = "6304";

/// Compute the raw CRC-16/CCITT-FALSE value of `data`.
pub fn crc16(data: &[u8]) -> u16 {
    CCITT_FALSE.checksum(data)
}

/// Compute the checksum of `payload` as four uppercase hex digits.
///
/// `payload` must already end with [`CRC_FIELD_PREFIX`]; the checksum covers
/// every character before the digits themselves.
///
/// # Example
///
/// ```
/// use pixkit_lib::crc::crc16_hex;
///
/// assert_eq!(crc16_hex("123456789"), "29B1");
/// ```
pub fn crc16_hex(payload: &str) -> String {
    format!("{:04X}", crc16(payload.as_bytes()))
}
