//! String conversion of report numbers.
//!
//! Report consumers compare values byte for byte, so `f64` values are
//! rendered in the JVM `Double.toString` and `%.Ng` styles rather than with
//! Rust's `Display`.

/// Shortest round-trip digits of `|value|` and the decimal exponent of the
/// first digit, so that `value = 0.d1d2d3... * 10^(exponent + 1)`.
fn shortest_digits(value: f64) -> (String, i32) {
    let rendered = format!("{:e}", value.abs());
    let (mantissa, exponent) = rendered.split_once('e').unwrap_or((rendered.as_str(), "0"));
    let digits = mantissa.replace('.', "");
    (digits, exponent.parse().unwrap_or(0))
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() {
        Some("NaN".to_string())
    } else if value.is_infinite() {
        Some(if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
    } else {
        None
    }
}

/// Full-precision decimal string: plain notation for `1e-3 <= |x| < 1e7`,
/// computerized scientific notation (`1.5E7`) otherwise. There is always at
/// least one digit after the point.
pub fn decimal_string(value: f64) -> String {
    if let Some(special) = non_finite(value) {
        return special;
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let (digits, exponent) = shortest_digits(value);
    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }

    if (-3..7).contains(&exponent) {
        if exponent >= 0 {
            let int_len = exponent as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.push_str(&"0".repeat(int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        } else {
            out.push_str("0.");
            out.push_str(&"0".repeat((-exponent - 1) as usize));
            out.push_str(&digits);
        }
    } else {
        out.push_str(&digits[..1]);
        out.push('.');
        if digits.len() > 1 {
            out.push_str(&digits[1..]);
        } else {
            out.push('0');
        }
        out.push('E');
        out.push_str(&exponent.to_string());
    }
    out
}

/// Rounds the shortest digits half-up to `precision` significant digits.
/// Returns exactly `precision` digits and the possibly bumped exponent.
fn round_half_up(digits: &str, exponent: i32, precision: usize) -> (Vec<u8>, i32) {
    let bytes = digits.as_bytes();
    let mut kept: Vec<u8> = bytes.iter().take(precision).map(|b| b - b'0').collect();
    let mut exponent = exponent;

    if bytes.len() > precision && bytes[precision] >= b'5' {
        let mut index = precision;
        loop {
            if index == 0 {
                kept.insert(0, 1);
                kept.truncate(precision);
                exponent += 1;
                break;
            }
            index -= 1;
            if kept[index] == 9 {
                kept[index] = 0;
            } else {
                kept[index] += 1;
                break;
            }
        }
    }

    kept.resize(precision, 0);
    (kept, exponent)
}

fn push_digits(out: &mut String, digits: &[u8]) {
    out.extend(digits.iter().map(|digit| char::from(b'0' + digit)));
}

/// General (`%g`) rendering with `precision` significant digits. Fixed
/// notation is used when the rounded exponent lies in `[-4, precision)`,
/// scientific (`6.667e+01`) otherwise. Trailing zeros are kept.
pub fn general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if let Some(special) = non_finite(value) {
        return special;
    }

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }

    if value == 0.0 {
        out.push('0');
        if precision > 1 {
            out.push('.');
            out.push_str(&"0".repeat(precision - 1));
        }
        return out;
    }

    let (digits, exponent) = shortest_digits(value);
    let (rounded, exponent) = round_half_up(&digits, exponent, precision);

    if exponent < -4 || exponent >= precision as i32 {
        push_digits(&mut out, &rounded[..1]);
        if precision > 1 {
            out.push('.');
            push_digits(&mut out, &rounded[1..]);
        }
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exponent.abs()));
    } else if exponent >= 0 {
        let int_len = exponent as usize + 1;
        push_digits(&mut out, &rounded[..int_len]);
        if int_len < precision {
            out.push('.');
            push_digits(&mut out, &rounded[int_len..]);
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-exponent - 1) as usize));
        push_digits(&mut out, &rounded);
    }
    out
}
