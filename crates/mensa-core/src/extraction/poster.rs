use crate::error::MensaError;
use crate::extraction::{dates, PosterPage, Rect};
use crate::geometry::{FracBox, DATE_HEADER, POSTER_FRAMES};
use crate::model::{ParseResult, RawCategory};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything read from one poster: the validity window from the header and
/// the raw name/price pairs, in frame-table order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosterExtraction {
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub results: Vec<ParseResult>,
}

/// Extract the poster's validity window and every (name, price) pair the
/// frame table addresses.
///
/// An unparsable header is fatal: without a validity window none of the
/// extracted text can be dated. A missing name or price for a category is
/// not; the pair is emitted with the field empty and normalization decides
/// what to do with it.
pub fn extract_poster(page: &dyn PosterPage) -> Result<PosterExtraction, MensaError> {
    let header_text = page.text_in(&to_page_rect(&DATE_HEADER, page));
    let (valid_from, valid_until) = dates::parse_range(&header_text)?;

    let mut results = Vec::new();
    for frame in POSTER_FRAMES.iter() {
        let mut pairs: Vec<(RawCategory, String, String)> = Vec::new();

        for item in &frame.items {
            let absolute = frame.bounds.compose(&item.area);
            let text = page.text_in(&to_page_rect(&absolute, page));
            let text = text.trim().to_string();

            let idx = pairs
                .iter()
                .position(|(c, _, _)| *c == item.category)
                .unwrap_or_else(|| {
                    pairs.push((item.category, String::new(), String::new()));
                    pairs.len() - 1
                });
            if item.is_price {
                pairs[idx].2 = text;
            } else {
                pairs[idx].1 = text;
            }
        }

        for (category, name, price) in pairs {
            results.push(ParseResult {
                day: frame.day,
                category,
                name,
                price,
            });
        }
    }

    Ok(PosterExtraction {
        valid_from,
        valid_until,
        results,
    })
}

/// Scale a top-left-origin fractional box to absolute page coordinates,
/// flipping the y axis into the bottom-left origin text queries use.
fn to_page_rect(frac: &FracBox, page: &dyn PosterPage) -> Rect {
    let (w, h) = (page.width(), page.height());
    Rect {
        x_min: frac.x * w,
        x_max: (frac.x + frac.w) * w,
        y_min: h - (frac.y + frac.h) * h,
        y_max: h - frac.y * h,
    }
}
