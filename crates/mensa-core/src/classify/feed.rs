use crate::classify::course::{ClassifiedItem, Course};
use crate::classify::logos::{CourseLogo, LogoSet};
use crate::classify::rules::resolve_food_type;
use crate::error::MensaError;
use crate::model::LocalizedName;
use serde::Deserialize;

/// Substrings of main-course names that mark a whole item as pasta.
/// Lower-case, tested against the lower-cased Dutch name.
const PASTA_SHAPES: &[&str] = &[
    "spaghetti",
    "tagliatelle",
    "penne",
    "macaroni",
    "fusilli",
    "tortellini",
    "ravioli",
    "lasagne",
    "farfalle",
    "rigatoni",
    "cannelloni",
];

/// Response of the catering API for one (campus, date) request.
///
/// The schema is upstream-defined and not under our control; unknown fields
/// are ignored, everything we do not strictly need is defaulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub restaurant_id: u32,
    #[serde(default)]
    pub menu_items: Vec<FeedMenuItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMenuItem {
    pub enabled: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub menu_item_contents: Vec<FeedContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedContent {
    pub course: FeedCourse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCourse {
    pub enabled: bool,
    /// Dutch display name, the feed's origin language.
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    #[serde(default)]
    pub maincourse: bool,
    #[serde(default)]
    pub show_first: bool,
    #[serde(default)]
    pub sort_order: i32,
    /// Raw price string, e.g. "€4,50 / €5,60" or "€4,50".
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub course_logos: Vec<FeedCourseLogo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedCourseLogo {
    pub course_logo_id: u32,
}

pub fn parse_feed(json: &str) -> Result<FeedResponse, MensaError> {
    Ok(serde_json::from_str(json)?)
}

/// Classify one feed response into menu items with resolved categories.
///
/// The declared restaurant id must match the requested one; a mismatch
/// means the request was routed to the wrong campus and nothing in the
/// payload can be trusted. Disabled entries and courses are skipped; logo
/// ids accumulate across an entry's remaining courses and resolve its
/// category once.
pub fn classify_feed(
    feed: &FeedResponse,
    expected_restaurant: u32,
) -> Result<Vec<ClassifiedItem>, MensaError> {
    if feed.restaurant_id != expected_restaurant {
        return Err(MensaError::RestaurantMismatch {
            declared: feed.restaurant_id,
            expected: expected_restaurant,
        });
    }

    let mut items = Vec::new();
    for entry in &feed.menu_items {
        if !entry.enabled {
            continue;
        }

        let mut logos = LogoSet::default();
        let mut has_pasta = false;
        let mut courses = Vec::new();

        for content in &entry.menu_item_contents {
            let course = &content.course;
            if !course.enabled {
                continue;
            }

            if !has_pasta && course.maincourse && is_pasta_name(&course.name) {
                has_pasta = true;
            }
            for logo in &course.course_logos {
                logos.insert(CourseLogo::from_upstream(logo.course_logo_id)?);
            }

            courses.push(Course {
                name: LocalizedName {
                    nl: course.name.clone(),
                    en: course.name_en.clone(),
                },
                sort_order: course.sort_order,
                show_first: course.show_first,
                main_course: course.maincourse,
                price: course.price.clone(),
            });
        }

        items.push(ClassifiedItem {
            sort_order: entry.sort_order,
            food_type: resolve_food_type(&logos, has_pasta),
            courses,
        });
    }

    Ok(items)
}

fn is_pasta_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    PASTA_SHAPES.iter().any(|shape| lower.contains(shape))
}
