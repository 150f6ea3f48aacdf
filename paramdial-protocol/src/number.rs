//! Permissive integer parsing
//!
//! Hosts written against the first firmware rely on the forgiving
//! conversion of its serial library: junk parses as 0 and trailing garbage
//! is ignored. That behavior is kept here.

/// Parse a decimal integer the permissive way
///
/// - leading whitespace is skipped
/// - an optional `+` or `-` sign is accepted
/// - digits are consumed up to the first non-digit
/// - no digits at all yields 0
/// - values beyond the `i32` range saturate
pub fn parse_int(text: &str) -> i32 {
    let bytes = text.trim_start().as_bytes();

    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i64 = 0;
    for &byte in digits.iter().take_while(|b| b.is_ascii_digit()) {
        value = value * 10 + i64::from(byte - b'0');
        // Past the i32 range already; further digits cannot bring it back
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
