pub mod classify;
pub mod error;
pub mod extraction;
pub mod geometry;
pub mod ingest;
pub mod model;
pub mod normalize;
pub mod report;
pub mod store;

use classify::ClassifiedItem;
use error::MensaError;
use extraction::poster::PosterExtraction;
use extraction::PosterPage;

pub use ingest::{ingest_poster, normalize_and_store, run_ingestion, DayItems, DayJob};

/// Main poster entry point: read the validity window and every raw
/// (name, price) pair the fixed frame table addresses on a rendered page.
pub fn extract_poster_menu(page: &dyn PosterPage) -> Result<PosterExtraction, MensaError> {
    extraction::poster::extract_poster(page)
}

/// Main feed entry point: parse one (campus, date) response body and
/// classify its enabled entries.
///
/// `expected_restaurant` is the upstream id of the campus the response was
/// requested for; a mismatch is a routing bug and fails the whole call.
pub fn extract_feed_menu(
    json: &str,
    expected_restaurant: u32,
) -> Result<Vec<ClassifiedItem>, MensaError> {
    let feed = classify::parse_feed(json)?;
    classify::classify_feed(&feed, expected_restaurant)
}
