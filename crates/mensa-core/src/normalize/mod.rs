pub mod price;

use crate::classify::ClassifiedItem;
use crate::model::{FoodType, Locale, MenuItemDraft, ParseResult, RawCategory};
use crate::report::{IngestWarning, WarningKind};
use price::{parse_feed_price, parse_poster_price};
use serde::Serialize;

/// Poster vocabulary -> stored vocabulary.
///
/// Pasta has no counterpart: the poster campuses sell their pasta through
/// the weekly strip without a price of its own, and an unmapped category
/// surfaces as a warning instead of vanishing.
fn stored_category(raw: RawCategory) -> Option<FoodType> {
    match raw {
        RawCategory::Soup => Some(FoodType::Soup),
        RawCategory::Meat => Some(FoodType::Meat),
        RawCategory::Vegan => Some(FoodType::Vegan),
        RawCategory::Grill => Some(FoodType::Grill),
        RawCategory::Pasta => None,
    }
}

/// Drafts for one day plus the skip-and-continue warnings produced while
/// building them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NormalizedDay {
    pub drafts: Vec<MenuItemDraft>,
    pub warnings: Vec<IngestWarning>,
}

impl NormalizedDay {
    fn warn(&mut self, kind: WarningKind, message: String) {
        self.warnings.push(IngestWarning::new(kind, message));
    }
}

/// Turn raw poster pairs into stored-item drafts, in extraction order.
///
/// A pair with an empty name or price means "not sold this week" and is
/// dropped silently. A malformed price or an unmapped category drops that
/// single item with a warning; one bad line never aborts the day.
pub fn normalize_poster_day(results: &[ParseResult]) -> NormalizedDay {
    let mut day = NormalizedDay::default();

    for result in results {
        if result.name.is_empty() || result.price.is_empty() {
            continue;
        }

        let Some(food_type) = stored_category(result.category) else {
            day.warn(
                WarningKind::UnsupportedCategory,
                format!(
                    "no stored category for poster {} item '{}'",
                    result.category, result.name
                ),
            );
            continue;
        };

        let Some(pair) = parse_poster_price(&result.price) else {
            day.warn(
                WarningKind::MalformedPrice,
                format!(
                    "price '{}' for '{}' does not split into a student/staff pair",
                    result.price, result.name
                ),
            );
            continue;
        };

        day.drafts.push(MenuItemDraft {
            food_type,
            name: result.name.clone(),
            lang: Locale::Nl,
            price: pair,
        });
    }

    day
}

/// Turn classified feed items into stored-item drafts, in feed order.
///
/// Categories are already in the stored vocabulary; the name becomes the
/// combined Dutch sentence and the price is the lead course's.
pub fn normalize_feed_day(items: &[ClassifiedItem]) -> NormalizedDay {
    let mut day = NormalizedDay::default();

    for item in items {
        let Some(lead) = item.lead_course() else {
            day.warn(
                WarningKind::EmptyMenuItem,
                format!(
                    "feed item with sort order {} has no enabled courses",
                    item.sort_order
                ),
            );
            continue;
        };

        let name = item.display_name();
        let Some(pair) = parse_feed_price(&lead.price) else {
            day.warn(
                WarningKind::MalformedPrice,
                format!("price '{}' for '{}' could not be parsed", lead.price, name),
            );
            continue;
        };

        day.drafts.push(MenuItemDraft {
            food_type: item.food_type,
            name,
            lang: Locale::Nl,
            price: pair,
        });
    }

    day
}
