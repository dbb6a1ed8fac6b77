//! Text normalization for merchant name and city.
//!
//! Receiving bank apps render these fields as plain ASCII, so accented
//! letters are decomposed (NFD) and their combining marks dropped. Letters
//! with no decomposition (`ß`, `Ø`, `Ł`, ...) are transliterated, and any
//! other non-ASCII character is removed, so field lengths and the CRC are
//! the same whether counted in characters or bytes.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum merchant name length (tag 59).
pub const MAX_NAME_LEN: usize = 25;

/// Maximum merchant city length (tag 60).
pub const MAX_CITY_LEN: usize = 15;

/// Reduce text to ASCII, trim, and truncate to at most `max_len` characters.
///
/// The result is trimmed again after truncation, so `"Rio de Janeiro"` cut at
/// 7 gives `"Rio de"` rather than `"Rio de "`. Generators that keep the
/// trailing space emit different bytes, and therefore a different CRC, for
/// the same input.
///
/// # Example
///
/// ```
/// use pixkit_lib::normalize::normalize_text;
///
/// assert_eq!(normalize_text("  São Paulo ", 15), "Sao Paulo");
/// ```
pub fn normalize_text(text: &str, max_len: usize) -> String {
    let mut stripped = String::with_capacity(text.len());
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii() {
            stripped.push(c);
        } else if let Some(ascii) = transliterate(c) {
            stripped.push_str(ascii);
        }
    }
    let truncated: String = stripped.trim().chars().take(max_len).collect();
    truncated.trim_end().to_string()
}

fn transliterate(c: char) -> Option<&'static str> {
    let ascii = match c {
        'ß' => "ss",
        'Ø' => "O",
        'ø' => "o",
        'Ł' => "L",
        'ł' => "l",
        'Đ' | 'Ð' => "D",
        'đ' | 'ð' => "d",
        'Æ' => "AE",
        'æ' => "ae",
        'Œ' => "OE",
        'œ' => "oe",
        'Þ' => "Th",
        'þ' => "th",
        'ı' => "i",
        '\u{00A0}' => " ",
        _ => return None,
    };
    Some(ascii)
}

/// Normalize a merchant name to the tag 59 limit.
pub fn normalize_name(name: &str) -> String {
    normalize_text(name, MAX_NAME_LEN)
}

/// Normalize a merchant city to the tag 60 limit.
pub fn normalize_city(city: &str) -> String {
    normalize_text(city, MAX_CITY_LEN)
}
