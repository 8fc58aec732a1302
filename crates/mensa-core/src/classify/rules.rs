use crate::classify::logos::{CourseLogo, LogoSet};
use crate::model::FoodType;

/// One step of the category resolution chain.
///
/// Rules are evaluated in order and the first whose predicate matches
/// decides the category, so the precedence stays auditable rule by rule.
/// The resolver receives the item's pasta flag; only the fallthrough rules
/// use it.
pub struct CategoryRule {
    pub label: &'static str,
    matches: fn(&LogoSet) -> bool,
    resolve: fn(bool) -> FoodType,
}

/// Precedence chain for resolving a feed item's category from the logos
/// accumulated across its courses. A grill item carrying the vegetarian
/// logo is meat-free and outranks the plain grill rule.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        label: "meat-free grill",
        matches: |l| l.contains(CourseLogo::Grill) && l.contains(CourseLogo::Vegetarian),
        resolve: |_| FoodType::Vegan,
    },
    CategoryRule {
        label: "grill",
        matches: |l| l.contains(CourseLogo::Grill),
        resolve: |_| FoodType::Grill,
    },
    CategoryRule {
        label: "soup",
        matches: |l| l.contains(CourseLogo::Soup),
        resolve: |_| FoodType::Soup,
    },
    CategoryRule {
        label: "snack",
        matches: |l| l.contains(CourseLogo::Snack),
        resolve: |_| FoodType::Sub,
    },
    CategoryRule {
        label: "salad bar",
        matches: |l| l.contains(CourseLogo::Salad),
        resolve: |_| FoodType::Salad,
    },
    CategoryRule {
        label: "vegetarian",
        matches: |l| l.contains(CourseLogo::Vegetarian),
        resolve: |has_pasta| {
            if has_pasta {
                FoodType::PastaVegan
            } else {
                FoodType::Vegan
            }
        },
    },
    CategoryRule {
        label: "default meat",
        matches: |_| true,
        resolve: |has_pasta| {
            if has_pasta {
                FoodType::PastaMeat
            } else {
                FoodType::Meat
            }
        },
    },
];

/// Resolve the stored category for one feed item. Pure: the same logo set
/// and pasta flag always yield the same category.
pub fn resolve_food_type(logos: &LogoSet, has_pasta: bool) -> FoodType {
    let rule = CATEGORY_RULES
        .iter()
        .find(|r| (r.matches)(logos))
        .expect("the last rule matches every logo set");
    (rule.resolve)(has_pasta)
}
