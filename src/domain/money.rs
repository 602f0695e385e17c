use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision
/// issues. 12.50 units = 1250 cents.
pub type Cents = i64;

/// Format cents as a two-decimal amount string.
/// Example: 1250 -> "12.50", -75 -> "-0.75"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal amount string into cents.
/// Accepts "12", "12.5", "12.50" and a leading minus sign. Anything with
/// more than two decimal places is truncated to cents.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.is_empty() || input == "-" {
        return Err(ParseCentsError::Empty);
    }

    let (negative, digits) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, decimal_str) = match digits.split_once('.') {
        Some((u, d)) => (u, d),
        None => (digits, ""),
    };

    // The sign was stripped above; both parts must be plain ASCII digits.
    // This also rejects a second '.' and any multi-byte character, so the
    // two-digit slice below is always on a char boundary.
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }
    if units_str.is_empty() && decimal_str.is_empty() {
        // "." or "-."
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?
    };

    let decimal: i64 = match decimal_str.len() {
        0 => 0,
        1 => {
            10 * decimal_str
                .parse::<i64>()
                .map_err(|_| ParseCentsError::InvalidFormat)?
        }
        _ => decimal_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(decimal))
        .ok_or(ParseCentsError::InvalidFormat)?;
    Ok(if negative { -cents } else { cents })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::Empty => write!(f, "empty amount"),
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
