use super::{MenuId, MenuStore, TranslatableId};
use crate::error::MensaError;
use crate::model::{FoodType, Locale};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// In-memory implementation of the persistence collaborator.
///
/// The whole state serializes as one snapshot, which is how the CLI keeps a
/// store between runs: load the file, ingest, save it back. Tests use it
/// bare.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    next_id: u64,
    pub menus: Vec<StoredMenu>,
    pub translatables: Vec<Translatable>,
}

/// A committed menu: the ordered item set for one (campus, date).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMenu {
    pub id: MenuId,
    pub campus: String,
    pub date: NaiveDate,
    pub items: Vec<StoredMenuItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMenuItem {
    pub food_type: FoodType,
    pub text: TranslatableId,
    pub price_students: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_staff: Option<Decimal>,
}

/// Original-language text registered for translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translatable {
    pub id: TranslatableId,
    pub text: String,
    pub lang: Locale,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    pub fn load(path: &Path) -> Result<Self, MensaError> {
        let bytes = std::fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), MensaError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn menu(&self, campus: &str, date: NaiveDate) -> Option<&StoredMenu> {
        self.menus
            .iter()
            .find(|m| m.campus == campus && m.date == date)
    }

    pub fn translatable(&self, id: TranslatableId) -> Option<&Translatable> {
        self.translatables.iter().find(|t| t.id == id)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MenuStore for MemoryStore {
    fn find_menu(&self, campus: &str, date: NaiveDate) -> Option<MenuId> {
        self.menu(campus, date).map(|m| m.id)
    }

    fn delete_menu(&mut self, menu: MenuId) {
        // Items live inside the menu record, so removing it cascades.
        self.menus.retain(|m| m.id != menu);
    }

    fn create_menu(&mut self, campus: &str, date: NaiveDate) -> MenuId {
        let id = MenuId(self.next_id());
        self.menus.push(StoredMenu {
            id,
            campus: campus.to_string(),
            date,
            items: Vec::new(),
        });
        id
    }

    fn add_item(
        &mut self,
        menu: MenuId,
        food_type: FoodType,
        text: TranslatableId,
        price_students: Decimal,
        price_staff: Option<Decimal>,
    ) {
        if let Some(stored) = self.menus.iter_mut().find(|m| m.id == menu) {
            stored.items.push(StoredMenuItem {
                food_type,
                text,
                price_students,
                price_staff,
            });
        }
    }

    fn get_or_create_translatable(&mut self, text: &str, lang: Locale) -> TranslatableId {
        if let Some(existing) = self
            .translatables
            .iter()
            .find(|t| t.text == text && t.lang == lang)
        {
            return existing.id;
        }
        let id = TranslatableId(self.next_id());
        self.translatables.push(Translatable {
            id,
            text: text.to_string(),
            lang,
        });
        id
    }
}
