//! Free-text budget entry.
//!
//! The amount field accepts whatever the user types or pastes. Anything that
//! is not an ASCII digit is dropped, so `"1 500 MAD"` reads as `1500` and
//! `"1e9"` reads as `19`.

/// Keep only the ASCII digits of `text`, in order.
pub fn digits_only(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse the digits of `text` as a base-10 amount.
///
/// Returns `None` when no digit is present. Amounts wider than `u64`
/// saturate at `u64::MAX`; callers clamp into their range anyway.
pub fn parse_amount(text: &str) -> Option<u64> {
    let mut seen = false;
    let mut amount: u64 = 0;
    for digit in text.bytes().filter(u8::is_ascii_digit) {
        seen = true;
        amount = amount
            .saturating_mul(10)
            .saturating_add(u64::from(digit - b'0'));
    }
    seen.then_some(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("1e9"), "19");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(" 2,500 MAD "), "2500");
        // Non-ASCII digits are not accepted
        assert_eq!(digits_only("٣٤"), "");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("1e9"), Some(19));
        assert_eq!(parse_amount("000750"), Some(750));
        assert_eq!(parse_amount("-300"), Some(300));
    }

    #[test]
    fn test_parse_amount_saturates() {
        let huge = "9".repeat(40);
        assert_eq!(parse_amount(&huge), Some(u64::MAX));
    }
}
