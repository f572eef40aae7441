//! Integer parsing for option values, with `strtol`-style semantics.
//!
//! Values are read as the longest numeric prefix of the input; trailing
//! non-numeric characters are tolerated on purpose, so `-d 10abc` means a
//! ten second delay. An input without any numeric prefix, or one whose
//! value does not fit a signed 32-bit integer, is a parse error.

use crate::error::OptionsError;

/// Parse a required decimal integer.
pub fn parse_number(input: &str) -> Result<i32, OptionsError> {
    strtol(input, 10)
}

/// Parse a required integer with base auto-detection: `0x` prefix means
/// hexadecimal, a leading `0` means octal, anything else decimal. Used
/// for window ids, which are conventionally written in hex.
pub fn parse_number_auto(input: &str) -> Result<i32, OptionsError> {
    strtol(input, 0)
}

/// Negative values become 0; everything else passes through.
pub fn non_negative(n: i32) -> i32 {
    if n < 0 { 0 } else { n }
}

fn strtol(input: &str, base: u32) -> Result<i32, OptionsError> {
    let rest = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match rest.strip_prefix('-') {
        Some(tail) => (true, tail),
        None => (false, rest.strip_prefix('+').unwrap_or(rest)),
    };
    let (radix, rest) = if base == 0 {
        detect_radix(rest)
    } else {
        (base, rest)
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return Err(OptionsError::NotANumber(input.to_string()));
    }

    // Digit runs too long for i64 surface as an out-of-range failure,
    // same as values that fit i64 but not i32.
    let magnitude = i64::from_str_radix(digits, radix)
        .map_err(|_| OptionsError::OutOfRange(input.to_string()))?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| OptionsError::OutOfRange(input.to_string()))
}

/// The `0x`/`0X` prefix only selects hex when a hex digit follows;
/// a lone `0x` parses as zero with `x` left as trailing junk.
fn detect_radix(rest: &str) -> (u32, &str) {
    let bytes = rest.as_bytes();
    if bytes.len() > 2
        && bytes[0] == b'0'
        && matches!(bytes[1], b'x' | b'X')
        && bytes[2].is_ascii_hexdigit()
    {
        (16, &rest[2..])
    } else if rest.starts_with('0') {
        (8, rest)
    } else {
        (10, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_number("0"), Ok(0));
        assert_eq!(parse_number("42"), Ok(42));
        assert_eq!(parse_number("-17"), Ok(-17));
        assert_eq!(parse_number("+9"), Ok(9));
    }

    #[test]
    fn parses_the_full_i32_range() {
        assert_eq!(parse_number("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_number("-2147483648"), Ok(i32::MIN));
    }

    #[test]
    fn rejects_values_beyond_i32() {
        assert_eq!(
            parse_number("2147483648"),
            Err(OptionsError::OutOfRange("2147483648".into()))
        );
        assert_eq!(
            parse_number("-2147483649"),
            Err(OptionsError::OutOfRange("-2147483649".into()))
        );
        assert!(matches!(
            parse_number("999999999999999999999"),
            Err(OptionsError::OutOfRange(_))
        ));
    }

    #[test]
    fn tolerates_trailing_junk() {
        assert_eq!(parse_number("10abc"), Ok(10));
        assert_eq!(parse_number("7 days"), Ok(7));
        assert_eq!(parse_number("3.5"), Ok(3));
    }

    #[test]
    fn rejects_inputs_without_digits() {
        for input in ["", "abc", " ", "+", "-", "--4"] {
            assert_eq!(
                parse_number(input),
                Err(OptionsError::NotANumber(input.to_string())),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn skips_leading_whitespace() {
        assert_eq!(parse_number("  42"), Ok(42));
        assert_eq!(parse_number("\t-7"), Ok(-7));
    }

    #[test]
    fn auto_base_detects_hex_and_octal() {
        assert_eq!(parse_number_auto("0x1f"), Ok(31));
        assert_eq!(parse_number_auto("0X10"), Ok(16));
        assert_eq!(parse_number_auto("017"), Ok(15));
        assert_eq!(parse_number_auto("-0x10"), Ok(-16));
        assert_eq!(parse_number_auto("99"), Ok(99));
        assert_eq!(parse_number_auto("0"), Ok(0));
    }

    #[test]
    fn auto_base_needs_a_digit_after_0x() {
        assert_eq!(parse_number_auto("0x"), Ok(0));
        assert_eq!(parse_number_auto("0xzz"), Ok(0));
    }

    #[test]
    fn decimal_base_reads_hex_prefix_as_junk() {
        assert_eq!(parse_number("0x1f"), Ok(0));
    }

    #[test]
    fn non_negative_floors_at_zero() {
        assert_eq!(non_negative(-5), 0);
        assert_eq!(non_negative(0), 0);
        assert_eq!(non_negative(7), 7);
    }
}
