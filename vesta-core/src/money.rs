use crate::{ClientError, ClientResult};

/// Price handling for gateway charges.
///
/// The storefront service sends prices as decimal strings with at most two
/// fractional digits; the payment gateway wants integer minor units. All
/// arithmetic happens in minor units so a charge amount is exact once frozen.

const MINOR_PER_MAJOR: i64 = 100;

/// Parse a decimal price string ("499", "499.5", "499.00") into minor units.
pub fn parse_minor_units(price: &str) -> ClientResult<i64> {
    let trimmed = price.trim();
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return Err(ClientError::malformed(format!("invalid price: {price:?}")));
    }

    let (major, frac) = match trimmed.split_once('.') {
        Some((major, frac)) => (major, frac),
        None => (trimmed, ""),
    };
    if frac.len() > 2 {
        return Err(ClientError::malformed(format!(
            "price has more than two fractional digits: {price:?}"
        )));
    }

    let major: i64 = major
        .parse()
        .map_err(|_| ClientError::malformed(format!("invalid price: {price:?}")))?;
    let frac: i64 = if frac.is_empty() {
        0
    } else {
        let parsed: i64 = frac
            .parse()
            .map_err(|_| ClientError::malformed(format!("invalid price: {price:?}")))?;
        if frac.len() == 1 {
            parsed * 10
        } else {
            parsed
        }
    };

    major
        .checked_mul(MINOR_PER_MAJOR)
        .and_then(|m| m.checked_add(frac))
        .ok_or_else(|| ClientError::malformed(format!("price out of range: {price:?}")))
}

/// Charge amount for a selection: unit price times quantity, in minor units.
pub fn charge_minor_units(unit_price: &str, quantity: u32) -> ClientResult<i64> {
    let unit = parse_minor_units(unit_price)?;
    unit.checked_mul(i64::from(quantity))
        .ok_or_else(|| ClientError::malformed(format!("charge out of range: {unit_price:?} x {quantity}")))
}

/// Render minor units back as a two-decimal major-unit string for display.
pub fn format_major(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.abs();
    format!("{}{}.{:02}", sign, abs / MINOR_PER_MAJOR, abs % MINOR_PER_MAJOR)
}
