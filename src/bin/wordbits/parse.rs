//! Command-line value parsers.

use wordbits::Width;

/// Parse an unsigned operand: decimal, `0x` hex, `0b` binary or `0o` octal,
/// with optional `_` separators (case insensitive prefixes).
pub fn parse_value(s: &str) -> Result<u64, String> {
    let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else {
        (lower.as_str(), 10)
    };

    if digits.is_empty() {
        return Err(format!("Invalid value: '{}'", s));
    }

    u64::from_str_radix(digits, radix)
        .map_err(|e| format!("Invalid value '{}': {}", s, e))
}

/// Parse a width: 8, 16, 32, 64 or `native`.
pub fn parse_width(s: &str) -> Result<Width, String> {
    s.parse::<Width>().map_err(|e| e.to_string())
}
