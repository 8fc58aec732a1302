use crate::model::PricePair;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a poster price line. The poster always prints a student and a
/// staff amount ("€4,50 / €3,80", first token students, second staff);
/// anything that does not split into exactly two amounts is malformed and
/// the caller skips the item.
pub fn parse_poster_price(raw: &str) -> Option<PricePair> {
    match parse_amounts(raw)?.as_slice() {
        [students, staff] => Some(PricePair {
            students: *students,
            staff: Some(*staff),
        }),
        _ => None,
    }
}

/// Parse a feed price. Single-price items legitimately omit the staff
/// amount.
pub fn parse_feed_price(raw: &str) -> Option<PricePair> {
    match parse_amounts(raw)?.as_slice() {
        [students] => Some(PricePair {
            students: *students,
            staff: None,
        }),
        [students, staff] => Some(PricePair {
            students: *students,
            staff: Some(*staff),
        }),
        _ => None,
    }
}

fn parse_amounts(raw: &str) -> Option<Vec<Decimal>> {
    let tokens: Vec<&str> = raw
        .split(['/', '-'])
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.is_empty() {
        return None;
    }
    tokens.into_iter().map(parse_amount).collect()
}

/// "€4,50" -> 4.50. The euro sign and whitespace are noise; the decimal
/// comma follows the poster's locale.
fn parse_amount(token: &str) -> Option<Decimal> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned.replace(',', ".")).ok()
}
