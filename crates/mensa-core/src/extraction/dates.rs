use crate::error::MensaError;
use chrono::NaiveDate;

/// Parse the natural-language validity range printed in the poster header,
/// e.g. "12 - 16 oktober 2020" or "28 september - 2 oktober 2020".
///
/// The range is split on the first `-`/en-dash; each half is parsed as a
/// date, with the left half borrowing month and year from the right half
/// when it only carries a day number. Dutch and English month names are
/// accepted.
pub fn parse_range(text: &str) -> Result<(NaiveDate, NaiveDate), MensaError> {
    let text = text.trim();
    let (left, right) = split_on_dash(text)
        .ok_or_else(|| MensaError::DateRange(format!("no range separator in '{text}'")))?;

    let until = parse_date(right, None)?;
    let from = parse_date(left, Some(until))?;

    if from > until {
        return Err(MensaError::DateRange(format!(
            "range '{text}' runs backwards ({from} > {until})"
        )));
    }

    Ok((from, until))
}

fn split_on_dash(text: &str) -> Option<(&str, &str)> {
    let idx = text.find(['-', '–', '—'])?;
    let sep_len = text[idx..].chars().next().map(char::len_utf8)?;
    Some((&text[..idx], &text[idx + sep_len..]))
}

/// Parse one half of the range. With `borrow` set, a missing month or year
/// is taken from the already-parsed right half.
fn parse_date(half: &str, borrow: Option<NaiveDate>) -> Result<NaiveDate, MensaError> {
    use chrono::Datelike;

    let mut day: Option<u32> = None;
    let mut month: Option<u32> = None;
    let mut year: Option<i32> = None;

    for word in half.split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            continue;
        }
        if let Ok(n) = word.parse::<u32>() {
            if n >= 1000 {
                year.get_or_insert(n as i32);
            } else if (1..=31).contains(&n) {
                day.get_or_insert(n);
            }
        } else if let Some(m) = month_number(word) {
            month.get_or_insert(m);
        }
    }

    let day =
        day.ok_or_else(|| MensaError::DateRange(format!("no day number in '{}'", half.trim())))?;
    let month = month
        .or(borrow.map(|d| d.month()))
        .ok_or_else(|| MensaError::DateRange(format!("no month in '{}'", half.trim())))?;
    let year = year
        .or(borrow.map(|d| d.year()))
        .ok_or_else(|| MensaError::DateRange(format!("no year in '{}'", half.trim())))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        MensaError::DateRange(format!("{year}-{month}-{day} is not a calendar date"))
    })
}

fn month_number(word: &str) -> Option<u32> {
    let m = match word.to_lowercase().as_str() {
        "januari" | "january" | "jan" => 1,
        "februari" | "february" | "feb" => 2,
        "maart" | "march" | "mar" => 3,
        "april" | "apr" => 4,
        "mei" | "may" => 5,
        "juni" | "june" | "jun" => 6,
        "juli" | "july" | "jul" => 7,
        "augustus" | "august" | "aug" => 8,
        "september" | "sept" | "sep" => 9,
        "oktober" | "october" | "okt" | "oct" => 10,
        "november" | "nov" => 11,
        "december" | "dec" => 12,
        _ => return None,
    };
    Some(m)
}
