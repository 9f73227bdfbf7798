use super::Error;
use num_bigint::BigInt;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

type Result<T> = std::result::Result<T, Error>;

static HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b0x[.0-9A-F_]+\b").unwrap());
static BIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b0b[.01_]+\b").unwrap());
static SI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(^|[^\w.])([0-9]*\.?[0-9]+)(ee|mm|uu|nn|pp|ff|aa|zz|yy|k|m|g|t|p|z|y)\b")
        .unwrap()
});

/// Rewrites hex and binary literals (fractional digits allowed) and
/// SI-suffixed numbers into plain decimal text.
pub fn normalize(s: &str) -> Result<String> {
    let s = radix_literals(s, &HEX, 16)?;
    let s = radix_literals(&s, &BIN, 2)?;
    Ok(si_suffixes(&s))
}

fn radix_literals(s: &str, re: &Regex, radix: u32) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for m in re.find_iter(s) {
        out.push_str(&s[last..m.start()]);
        out.push_str(&radix_to_decimal(m.as_str(), radix)?);
        last = m.end();
    }
    out.push_str(&s[last..]);
    Ok(out)
}

/// `0xA.8` is `168 / 16` is `10.5`. Division by a power of two always
/// terminates in base ten, so the result is exact.
fn radix_to_decimal(token: &str, radix: u32) -> Result<String> {
    let body: String = token[2..].chars().filter(|c| *c != '_').collect();
    let mut parts = body.split('.');
    let int_digits = parts.next().unwrap_or("");
    let frac_digits = parts.next().unwrap_or("");
    if parts.next().is_some() || int_digits.len() + frac_digits.len() == 0 {
        return Err(error!(MalformedLiteral; token));
    }
    let digits = format!("{}{}", int_digits, frac_digits);
    let mantissa = match BigInt::parse_bytes(digits.as_bytes(), radix) {
        Some(m) => m,
        None => return Err(error!(MalformedLiteral; token)),
    };
    let bits_per_digit = if radix == 16 { 4 } else { 1 };
    let scale = frac_digits.len() * bits_per_digit;
    let scaled = mantissa * BigInt::from(5).pow(scale as u32);
    Ok(place_point(&scaled.to_string(), scale))
}

fn place_point(digits: &str, scale: usize) -> String {
    if scale == 0 {
        return digits.to_string();
    }
    let padded = format!("{:0>width$}", digits, width = scale + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - scale);
    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    }
}

fn si_exponent(suffix: &str) -> i32 {
    match suffix.to_ascii_lowercase().as_str() {
        "k" => 3,
        "m" => 6,
        "g" => 9,
        "t" => 12,
        "p" => 15,
        "ee" => 18,
        "z" => 21,
        "y" => 24,
        "mm" => -3,
        "uu" => -6,
        "nn" => -9,
        "pp" => -12,
        "ff" => -15,
        "aa" => -18,
        "zz" => -21,
        "yy" => -24,
        _ => 0,
    }
}

fn si_suffixes(s: &str) -> String {
    SI.replace_all(s, |caps: &Captures| {
        format!("{}{}e{}", &caps[1], &caps[2], si_exponent(&caps[3]))
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_point() {
        assert_eq!(place_point("105", 1), "10.5");
        assert_eq!(place_point("5", 3), "0.005");
        assert_eq!(place_point("1500", 2), "15");
    }

    #[test]
    fn test_si_exponent() {
        assert_eq!(si_exponent("K"), 3);
        assert_eq!(si_exponent("Yy"), -24);
    }
}
