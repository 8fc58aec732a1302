use crate::model::{FoodType, LocalizedName};
use std::cmp::Ordering;

/// One enabled course of a feed item, with the flags that drive display
/// order. The price is kept as the raw feed string; normalization parses it
/// together with the poster prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: LocalizedName,
    pub sort_order: i32,
    pub show_first: bool,
    pub main_course: bool,
    pub price: String,
}

/// One enabled feed item with its category resolved from the course logos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedItem {
    pub sort_order: i32,
    pub food_type: FoodType,
    pub courses: Vec<Course>,
}

impl ClassifiedItem {
    /// The course whose name leads the combined sentence and whose price the
    /// stored item carries.
    pub fn lead_course(&self) -> Option<&Course> {
        self.courses.iter().min_by(|a, b| display_order(a, b))
    }

    pub fn display_name(&self) -> String {
        combined_name(&self.courses)
    }
}

/// Display order of courses within one item: main courses before side
/// courses, `show_first` breaking ties within a tier, feed sort order last.
pub fn display_order(a: &Course, b: &Course) -> Ordering {
    b.main_course
        .cmp(&a.main_course)
        .then(b.show_first.cmp(&a.show_first))
        .then(a.sort_order.cmp(&b.sort_order))
}

/// Combine an item's courses into the single Dutch sentence shown to users:
/// the leading course, "met", then the remaining courses comma-joined with
/// "en" before the last. A single course is just its own name.
pub fn combined_name(courses: &[Course]) -> String {
    let mut ordered: Vec<&Course> = courses.iter().collect();
    ordered.sort_by(|a, b| display_order(a, b));

    match ordered.split_first() {
        None => String::new(),
        Some((head, [])) => head.name.nl.clone(),
        Some((head, tail)) => format!("{} met {}", head.name.nl, join_tail(tail)),
    }
}

fn join_tail(courses: &[&Course]) -> String {
    match courses {
        [] => String::new(),
        [only] => only.name.nl.clone(),
        _ => {
            let (last, rest) = courses.split_last().expect("two or more courses");
            let joined = rest
                .iter()
                .map(|c| c.name.nl.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} en {}", joined, last.name.nl)
        }
    }
}
