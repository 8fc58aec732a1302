pub mod memory;

use crate::model::{FoodType, Locale, MenuItemDraft};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reference to a stored original-language text and the translations
/// derived from it. Identical (text, language) pairs share one reference so
/// existing translations survive re-ingestion of an unchanged menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslatableId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(pub u64);

/// Persistence collaborator of the pipeline.
///
/// One menu exists per (campus, date); uniqueness on the pair is the
/// store's invariant, not re-derived here. Every call is assumed
/// transactional on its own. The pipeline accesses the store from a single
/// sequential batch, so no locking discipline is layered on top.
pub trait MenuStore {
    fn find_menu(&self, campus: &str, date: NaiveDate) -> Option<MenuId>;

    /// Delete a menu and, cascading, its items.
    fn delete_menu(&mut self, menu: MenuId);

    fn create_menu(&mut self, campus: &str, date: NaiveDate) -> MenuId;

    fn add_item(
        &mut self,
        menu: MenuId,
        food_type: FoodType,
        text: TranslatableId,
        price_students: Decimal,
        price_staff: Option<Decimal>,
    );

    /// Reuse the reference for an identical (text, language) pair when one
    /// exists, otherwise register a new one.
    fn get_or_create_translatable(&mut self, text: &str, lang: Locale) -> TranslatableId;
}

/// Make the stored menu for (campus, date) equal to the drafts.
///
/// Full replace, never a merge: an existing menu for the pair is deleted,
/// items and all, before the new one is inserted. Returns whether a
/// previous menu was replaced.
pub fn replace_day(
    store: &mut dyn MenuStore,
    campus: &str,
    date: NaiveDate,
    drafts: &[MenuItemDraft],
) -> bool {
    let existing = store.find_menu(campus, date);
    if let Some(menu) = existing {
        store.delete_menu(menu);
    }

    let menu = store.create_menu(campus, date);
    for draft in drafts {
        let text = store.get_or_create_translatable(&draft.name, draft.lang);
        store.add_item(
            menu,
            draft.food_type,
            text,
            draft.price.students,
            draft.price.staff,
        );
    }

    existing.is_some()
}
