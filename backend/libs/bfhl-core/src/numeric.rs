//! Numeric coercion for input tokens.
//!
//! A token counts as a number when the general-purpose coercion below yields a
//! value. The accepted forms are those of ECMAScript's `Number(string)`:
//! surrounding whitespace is ignored, decimals, signs and exponents are
//! accepted, `Infinity` is a number, and unsigned `0x`/`0o`/`0b` literals are
//! read in their radix. Unlike `Number("")`, an empty or all-whitespace token
//! is not numeric.

/// Coerce `token` to a number, or `None` when it does not parse.
///
/// Magnitudes beyond `f64` range coerce to an infinity and still count as
/// numbers; there is no bounds check.
///
/// ```
/// use bfhl_core::coerce_number;
///
/// assert_eq!(coerce_number("  42 "), Some(42.0));
/// assert_eq!(coerce_number("1e3"), Some(1000.0));
/// assert_eq!(coerce_number("0x1F"), Some(31.0));
/// assert_eq!(coerce_number("NaN"), None);
/// assert_eq!(coerce_number(""), None);
/// ```
pub fn coerce_number(token: &str) -> Option<f64> {
    let trimmed = token.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return None;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return Some(value);
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().ok()
    } else {
        None
    }
}

/// Whether `token` coerces to a number.
pub fn is_numeric(token: &str) -> bool {
    coerce_number(token).is_some()
}

/// ECMAScript `WhiteSpace` and `LineTerminator` code points.
///
/// Unicode `White_Space` covers all of them except U+FEFF, and adds U+0085
/// which ECMAScript does not trim.
fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    s[2..].chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// `[+-]? ( digits ( "." digits? )? | "." digits ) ( [eE] [+-]? digits )?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
