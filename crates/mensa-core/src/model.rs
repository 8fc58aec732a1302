use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot of the weekly poster a menu block belongs to.
///
/// `Weekly` marks the cross-week strip (grill and pasta are sold the whole
/// week, not on a single day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdaySlot {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Weekly,
}

impl WeekdaySlot {
    /// Offset in days from the first validity day of the poster week.
    /// `Weekly` has no single day and returns `None`.
    pub fn day_offset(&self) -> Option<i64> {
        match self {
            WeekdaySlot::Monday => Some(0),
            WeekdaySlot::Tuesday => Some(1),
            WeekdaySlot::Wednesday => Some(2),
            WeekdaySlot::Thursday => Some(3),
            WeekdaySlot::Friday => Some(4),
            WeekdaySlot::Weekly => None,
        }
    }

    /// Whether this slot contributes to the menu `offset` days into the week.
    pub fn applies_to_offset(&self, offset: i64) -> bool {
        match self.day_offset() {
            Some(d) => d == offset,
            None => (0..5).contains(&offset),
        }
    }
}

impl fmt::Display for WeekdaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WeekdaySlot::Monday => "Monday",
            WeekdaySlot::Tuesday => "Tuesday",
            WeekdaySlot::Wednesday => "Wednesday",
            WeekdaySlot::Thursday => "Thursday",
            WeekdaySlot::Friday => "Friday",
            WeekdaySlot::Weekly => "Weekly",
        };
        write!(f, "{s}")
    }
}

/// Coarse category vocabulary of the poster layout.
///
/// The poster cannot visually distinguish the finer `FoodType` variants, so
/// the frame table only speaks this vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawCategory {
    Soup,
    Meat,
    Vegan,
    Grill,
    Pasta,
}

impl fmt::Display for RawCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RawCategory::Soup => "soup",
            RawCategory::Meat => "meat",
            RawCategory::Vegan => "vegan",
            RawCategory::Grill => "grill",
            RawCategory::Pasta => "pasta",
        };
        write!(f, "{s}")
    }
}

/// The single category vocabulary that gets persisted, whatever the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodType {
    Soup,
    Meat,
    Vegan,
    Grill,
    Sub,
    Salad,
    PastaMeat,
    PastaVegan,
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FoodType::Soup => "soup",
            FoodType::Meat => "meat",
            FoodType::Vegan => "vegan",
            FoodType::Grill => "grill",
            FoodType::Sub => "sub",
            FoodType::Salad => "salad",
            FoodType::PastaMeat => "pasta (meat)",
            FoodType::PastaVegan => "pasta (vegan)",
        };
        write!(f, "{s}")
    }
}

/// Languages the source feed populates. The feed never carries more than
/// these two, so `LocalizedName` is a closed two-slot struct rather than an
/// open string-keyed map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Nl,
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Nl => write!(f, "nl"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Display names of a course. Dutch is the origin language and always
/// present; English is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedName {
    pub nl: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

impl LocalizedName {
    pub fn new(nl: impl Into<String>) -> Self {
        LocalizedName {
            nl: nl.into(),
            en: None,
        }
    }

    pub fn get(&self, locale: Locale) -> Option<&str> {
        match locale {
            Locale::Nl => Some(self.nl.as_str()),
            Locale::En => self.en.as_deref(),
        }
    }
}

/// One extracted (name, price) pair for one category and day of the poster.
///
/// Either field may be empty, meaning the category is not sold this week;
/// normalization drops such pairs instead of inventing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    pub day: WeekdaySlot,
    pub category: RawCategory,
    pub name: String,
    pub price: String,
}

/// Student/staff price pair. The staff price may be legitimately absent for
/// single-price items from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePair {
    pub students: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<Decimal>,
}

impl fmt::Display for PricePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.staff {
            Some(staff) => write!(f, "€{} / €{}", self.students, staff),
            None => write!(f, "€{}", self.students),
        }
    }
}

/// Draft of one menu item for a specific (campus, date), ready for the
/// reconciler. Drafts keep the source's emission order; no sorting happens
/// at this stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub food_type: FoodType,
    pub name: String,
    pub lang: Locale,
    pub price: PricePair,
}
