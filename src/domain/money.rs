use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// For EUR/USD/INR, 1 unit = 100 cents, so 50.00 = 5000 cents.
pub type Cents = i64;

/// Format cents as a plain decimal string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Format cents with a currency symbol and thousands separators.
/// Example: (123450, "₹") -> "₹1,234.50", (-1200, "$") -> "-$12.00"
pub fn format_grouped(cents: Cents, symbol: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    let units = (abs_cents / 100).to_string();
    let remainder = abs_cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}{}.{:02}", sign, symbol, grouped, remainder)
}

/// Largest accepted amount magnitude: ten trillion units.
/// Keeps every ledger total well inside `Cents`.
pub const MAX_AMOUNT_CENTS: Cents = 1_000_000_000_000_000;

/// Parse a decimal string into cents.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100" -> 10000, "-3" -> -300, "1.5e2" -> 15000
///
/// Digits past the second decimal place round half away from zero.
/// Magnitudes above [`MAX_AMOUNT_CENTS`] are out of range.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, body) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    let (mantissa, exponent) = match body.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (body, None),
    };

    let (units_str, decimal_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit())
        || !decimal_str.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseCentsError::InvalidFormat);
    }

    let cents = match exponent {
        None => digits_to_cents(units_str, decimal_str)?,
        Some(exponent) => {
            let shift = parse_exponent(exponent)?;
            scaled_to_cents(units_str, decimal_str, shift)?
        }
    };

    if cents > MAX_AMOUNT_CENTS {
        return Err(ParseCentsError::OutOfRange);
    }

    Ok(if negative { -cents } else { cents })
}

fn parse_exponent(input: &str) -> Result<i64, ParseCentsError> {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCentsError::InvalidFormat);
    }
    input.parse().map_err(|_| ParseCentsError::OutOfRange)
}

/// Moves the decimal point `shift` places right (left when negative)
/// before converting.
fn scaled_to_cents(
    units_str: &str,
    decimal_str: &str,
    shift: i64,
) -> Result<Cents, ParseCentsError> {
    let digits = format!("{}{}", units_str, decimal_str);
    let point = (units_str.len() as i64).saturating_add(shift);

    // Three or more places left of the first digit: rounds to zero.
    if point < -2 {
        return Ok(0);
    }
    // Far larger than any admissible amount unless every digit is zero.
    if point > 40 {
        return if digits.bytes().all(|b| b == b'0') {
            Ok(0)
        } else {
            Err(ParseCentsError::OutOfRange)
        };
    }

    if point < 0 {
        let fraction = format!("{}{}", "0".repeat(point.unsigned_abs() as usize), digits);
        digits_to_cents("", &fraction)
    } else {
        let point = point as usize;
        if point >= digits.len() {
            let units = format!("{}{}", digits, "0".repeat(point - digits.len()));
            digits_to_cents(&units, "")
        } else {
            let (units, fraction) = digits.split_at(point);
            digits_to_cents(units, fraction)
        }
    }
}

fn digits_to_cents(units_str: &str, decimal_str: &str) -> Result<Cents, ParseCentsError> {
    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::OutOfRange)?
    };

    let mut fraction = decimal_str.bytes().map(|b| i64::from(b - b'0'));
    let tens = fraction.next().unwrap_or(0);
    let ones = fraction.next().unwrap_or(0);
    let round_up = fraction.next().is_some_and(|d| d >= 5);

    units
        .checked_mul(100)
        .and_then(|c| c.checked_add(tens * 10 + ones + i64::from(round_up)))
        .ok_or(ParseCentsError::OutOfRange)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    OutOfRange,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid money format"),
            ParseCentsError::OutOfRange => write!(f, "amount out of range"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
