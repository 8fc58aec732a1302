//! End-to-end tests for the ingestion pipeline.
//!
//! A scripted PosterPage stands in for the pdftotext backend and a
//! MemoryStore for the real persistence layer, so these run without
//! poppler-utils or a database.

use chrono::NaiveDate;
use mensa_core::error::MensaError;
use mensa_core::extraction::{PosterPage, Rect};
use mensa_core::geometry::{FracBox, DATE_HEADER, POSTER_FRAMES};
use mensa_core::model::{FoodType, RawCategory, WeekdaySlot};
use mensa_core::store::memory::MemoryStore;
use mensa_core::{
    extract_feed_menu, ingest_poster, normalize_and_store, run_ingestion, DayItems, DayJob,
};
use rust_decimal_macros::dec;

/// Poster stub: text lines placed at the centers of the template's boxes.
struct ScriptedPoster {
    width: f32,
    height: f32,
    lines: Vec<(Rect, String)>,
}

impl ScriptedPoster {
    fn with_header(header: &str) -> Self {
        let mut poster = ScriptedPoster {
            width: 842.0,
            height: 595.0,
            lines: Vec::new(),
        };
        poster.place_box(&DATE_HEADER, header);
        poster
    }

    fn place_box(&mut self, frac: &FracBox, text: &str) {
        let cx = (frac.x + frac.w / 2.0) * self.width;
        let cy = self.height - (frac.y + frac.h / 2.0) * self.height;
        self.lines.push((
            Rect {
                x_min: cx - 1.0,
                x_max: cx + 1.0,
                y_min: cy - 1.0,
                y_max: cy + 1.0,
            },
            text.to_string(),
        ));
    }

    fn dish(&mut self, day: WeekdaySlot, category: RawCategory, name: &str, price: &str) {
        let frame = POSTER_FRAMES.iter().find(|f| f.day == day).unwrap();
        for (is_price, text) in [(false, name), (true, price)] {
            let item = frame
                .items
                .iter()
                .find(|i| i.category == category && i.is_price == is_price)
                .unwrap();
            self.place_box(&frame.bounds.compose(&item.area), text);
        }
    }
}

impl PosterPage for ScriptedPoster {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn text_in(&self, rect: &Rect) -> String {
        self.lines
            .iter()
            .filter(|(bbox, _)| bbox.intersects(rect))
            .map(|(_, text)| text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 10, d).unwrap()
}

fn week_poster() -> ScriptedPoster {
    let mut poster = ScriptedPoster::with_header("12 - 16 oktober 2020");
    poster.dish(WeekdaySlot::Monday, RawCategory::Soup, "Tomatensoep", "€0,70 / €0,90");
    poster.dish(WeekdaySlot::Monday, RawCategory::Meat, "Stoofvlees", "€4,50 / €5,60");
    poster.dish(WeekdaySlot::Monday, RawCategory::Vegan, "Groentecurry", "€4,20 / €5,20");
    poster.dish(WeekdaySlot::Tuesday, RawCategory::Soup, "Pompoensoep", "€0,70 / €0,90");
    poster.dish(WeekdaySlot::Weekly, RawCategory::Grill, "Spare ribs", "€5,50 / €6,90");
    poster
}

// ---------------------------------------------------------------------------
// Test 1: Poster week committed day by day, weekly strip on every day
// ---------------------------------------------------------------------------
#[test]
fn poster_week_ingested_day_by_day() {
    let mut store = MemoryStore::new();
    let reports = ingest_poster(&mut store, "etterbeek", &week_poster()).unwrap();

    assert_eq!(reports.len(), 5);
    assert_eq!(reports[0].date, date(12));
    assert_eq!(reports[4].date, date(16));

    // Monday: soup, meat, vegan plus the weekly grill.
    let monday = store.menu("etterbeek", date(12)).unwrap();
    assert_eq!(monday.items.len(), 4);
    assert_eq!(monday.items[0].food_type, FoodType::Soup);
    assert_eq!(monday.items[0].price_students, dec!(0.70));
    assert_eq!(monday.items[0].price_staff, Some(dec!(0.90)));

    // Tuesday: its own soup plus the grill.
    assert_eq!(store.menu("etterbeek", date(13)).unwrap().items.len(), 2);

    // Wednesday through Friday: only the grill.
    for d in [14, 15, 16] {
        let menu = store.menu("etterbeek", date(d)).unwrap();
        assert_eq!(menu.items.len(), 1);
        assert_eq!(menu.items[0].food_type, FoodType::Grill);
    }
}

// ---------------------------------------------------------------------------
// Test 2: The weekly grill shares one translatable across all five days
// ---------------------------------------------------------------------------
#[test]
fn weekly_item_text_registered_once() {
    let mut store = MemoryStore::new();
    ingest_poster(&mut store, "etterbeek", &week_poster()).unwrap();

    let grill_texts: Vec<_> = store
        .translatables
        .iter()
        .filter(|t| t.text == "Spare ribs")
        .collect();
    assert_eq!(grill_texts.len(), 1);
}

// ---------------------------------------------------------------------------
// Test 3: Re-ingesting an unchanged poster is idempotent
// ---------------------------------------------------------------------------
#[test]
fn reingesting_unchanged_poster_is_idempotent() {
    let mut store = MemoryStore::new();
    ingest_poster(&mut store, "etterbeek", &week_poster()).unwrap();
    let translatables_before = store.translatables.len();
    let monday_before: Vec<_> = store
        .menu("etterbeek", date(12))
        .unwrap()
        .items
        .iter()
        .map(|i| (i.food_type, i.text, i.price_students, i.price_staff))
        .collect();

    let reports = ingest_poster(&mut store, "etterbeek", &week_poster()).unwrap();
    assert!(reports.iter().all(|r| r.replaced_existing));

    let monday_after: Vec<_> = store
        .menu("etterbeek", date(12))
        .unwrap()
        .items
        .iter()
        .map(|i| (i.food_type, i.text, i.price_students, i.price_staff))
        .collect();

    assert_eq!(monday_before, monday_after);
    assert_eq!(store.translatables.len(), translatables_before);
}

// ---------------------------------------------------------------------------
// Test 4: A new poster fully replaces a day's items
// ---------------------------------------------------------------------------
#[test]
fn new_poster_fully_replaces_stored_day() {
    let mut store = MemoryStore::new();
    ingest_poster(&mut store, "etterbeek", &week_poster()).unwrap();
    assert_eq!(store.menu("etterbeek", date(12)).unwrap().items.len(), 4);

    let mut revised = ScriptedPoster::with_header("12 - 16 oktober 2020");
    revised.dish(WeekdaySlot::Monday, RawCategory::Soup, "Preisoep", "€0,70 / €0,90");
    ingest_poster(&mut store, "etterbeek", &revised).unwrap();

    let monday = store.menu("etterbeek", date(12)).unwrap();
    assert_eq!(monday.items.len(), 1);
    let text = store.translatable(monday.items[0].text).unwrap();
    assert_eq!(text.text, "Preisoep");
}

// ---------------------------------------------------------------------------
// Test 5: One malformed price skips that line, not the day
// ---------------------------------------------------------------------------
#[test]
fn malformed_price_skips_line_but_commits_day() {
    let mut poster = ScriptedPoster::with_header("12 - 16 oktober 2020");
    poster.dish(WeekdaySlot::Monday, RawCategory::Soup, "Tomatensoep", "€0,70");
    poster.dish(WeekdaySlot::Monday, RawCategory::Meat, "Stoofvlees", "€4,50 / €5,60");

    let mut store = MemoryStore::new();
    let reports = ingest_poster(&mut store, "etterbeek", &poster).unwrap();

    let monday = store.menu("etterbeek", date(12)).unwrap();
    assert_eq!(monday.items.len(), 1);
    assert_eq!(monday.items[0].food_type, FoodType::Meat);
    assert!(!reports[0].warnings.is_empty());
}

// ---------------------------------------------------------------------------
// Test 6: An unreadable header leaves the store untouched
// ---------------------------------------------------------------------------
#[test]
fn unparsable_header_touches_nothing() {
    let mut store = MemoryStore::new();
    ingest_poster(&mut store, "etterbeek", &week_poster()).unwrap();
    let menus_before = store.menus.len();

    let mut torn = ScriptedPoster::with_header("gesloten wegens verbouwing");
    torn.dish(WeekdaySlot::Monday, RawCategory::Soup, "Preisoep", "€0,70 / €0,90");

    let result = ingest_poster(&mut store, "etterbeek", &torn);
    assert!(matches!(result, Err(MensaError::DateRange(_))));
    assert_eq!(store.menus.len(), menus_before);

    let monday = store.menu("etterbeek", date(12)).unwrap();
    let text = store.translatable(monday.items[0].text).unwrap();
    assert_eq!(text.text, "Tomatensoep");
}

// ---------------------------------------------------------------------------
// Test 7: Feed day end to end, with course combination and single prices
// ---------------------------------------------------------------------------
const FEED_JSON: &str = r#"{
    "restaurantId": 7,
    "menuItems": [
        {
            "enabled": true,
            "sortOrder": 1,
            "menuItemContents": [
                {
                    "course": {
                        "enabled": true,
                        "name": "Stoofvlees",
                        "maincourse": true,
                        "price": "€4,50 / €5,60",
                        "courseLogos": []
                    }
                },
                {
                    "course": {
                        "enabled": true,
                        "name": "Frietjes",
                        "showFirst": true,
                        "courseLogos": []
                    }
                }
            ]
        },
        {
            "enabled": true,
            "sortOrder": 2,
            "menuItemContents": [
                {
                    "course": {
                        "enabled": true,
                        "name": "Spaghetti bolognaise",
                        "maincourse": true,
                        "price": "€4,10",
                        "courseLogos": []
                    }
                }
            ]
        },
        {
            "enabled": true,
            "sortOrder": 3,
            "menuItemContents": [
                {
                    "course": {
                        "enabled": true,
                        "name": "Dagsoep",
                        "maincourse": false,
                        "price": "€0,70 / €0,90",
                        "courseLogos": [{"courseLogoId": 9}]
                    }
                }
            ]
        }
    ]
}"#;

#[test]
fn feed_day_end_to_end() {
    let mut store = MemoryStore::new();
    let items = extract_feed_menu(FEED_JSON, 7).unwrap();
    let report = normalize_and_store(&mut store, "jette", date(12), &DayItems::Feed(items));

    assert_eq!(report.stored_items, 3);
    assert!(report.warnings.is_empty());

    let menu = store.menu("jette", date(12)).unwrap();
    assert_eq!(menu.items.len(), 3);

    let stew = store.translatable(menu.items[0].text).unwrap();
    assert_eq!(stew.text, "Stoofvlees met Frietjes");
    assert_eq!(menu.items[0].food_type, FoodType::Meat);
    assert_eq!(menu.items[0].price_students, dec!(4.50));
    assert_eq!(menu.items[0].price_staff, Some(dec!(5.60)));

    assert_eq!(menu.items[1].food_type, FoodType::PastaMeat);
    assert_eq!(menu.items[1].price_staff, None);

    assert_eq!(menu.items[2].food_type, FoodType::Soup);
}

// ---------------------------------------------------------------------------
// Test 8: A mismatched restaurant id fails before anything is written
// ---------------------------------------------------------------------------
#[test]
fn restaurant_mismatch_is_fatal_for_the_day() {
    let result = extract_feed_menu(FEED_JSON, 3);
    assert!(matches!(
        result,
        Err(MensaError::RestaurantMismatch {
            declared: 7,
            expected: 3
        })
    ));
}

// ---------------------------------------------------------------------------
// Test 9: A failing campus does not disturb the rest of the run
// ---------------------------------------------------------------------------
#[test]
fn run_isolates_failures_per_campus_day() {
    let mut store = MemoryStore::new();

    let jobs = vec![
        DayJob {
            campus: "jette".into(),
            date: date(12),
            acquire: Box::new(|| Ok(DayItems::Feed(extract_feed_menu(FEED_JSON, 7)?))),
        },
        DayJob {
            campus: "etterbeek".into(),
            date: date(12),
            acquire: Box::new(|| Err(MensaError::Extraction("fetch failed".into()))),
        },
        DayJob {
            campus: "koekelberg".into(),
            date: date(12),
            acquire: Box::new(|| Ok(DayItems::Feed(extract_feed_menu(FEED_JSON, 7)?))),
        },
    ];

    let report = run_ingestion(&mut store, jobs);
    assert_eq!(report.days.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].campus, "etterbeek");

    // The campus before and after the failure both committed.
    assert!(store.menu("jette", date(12)).is_some());
    assert!(store.menu("etterbeek", date(12)).is_none());
    assert!(store.menu("koekelberg", date(12)).is_some());
}
