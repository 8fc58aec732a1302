use chrono::NaiveDate;
use mensa_core::error::MensaError;
use mensa_core::extraction::pdftotext::PdftotextPoster;
use mensa_core::report::DayReport;
use mensa_core::store::memory::MemoryStore;
use mensa_core::DayItems;
use std::path::PathBuf;

use crate::output;

pub fn run(
    campus: String,
    store_path: PathBuf,
    poster: Option<PathBuf>,
    feed: Option<PathBuf>,
    date: Option<NaiveDate>,
    restaurant: Option<u32>,
    output_format: &str,
) -> Result<(), MensaError> {
    let mut store = if store_path.exists() {
        MemoryStore::load(&store_path)?
    } else {
        MemoryStore::new()
    };

    let reports: Vec<DayReport> = match (poster, feed) {
        (Some(pdf_file), None) => {
            let pdf_bytes = std::fs::read(&pdf_file)?;
            let page = PdftotextPoster::new().load_page(&pdf_bytes)?;
            mensa_core::ingest_poster(&mut store, &campus, &page)?
        }
        (None, Some(json_file)) => {
            let (Some(date), Some(restaurant)) = (date, restaurant) else {
                return Err(MensaError::Feed(
                    "--feed needs --date and --restaurant".into(),
                ));
            };
            let json = std::fs::read_to_string(&json_file)?;
            let items = mensa_core::extract_feed_menu(&json, restaurant)?;
            vec![mensa_core::normalize_and_store(
                &mut store,
                &campus,
                date,
                &DayItems::Feed(items),
            )]
        }
        _ => {
            return Err(MensaError::Feed(
                "exactly one of --poster or --feed must be given".into(),
            ))
        }
    };

    store.save(&store_path)?;

    match output_format {
        "json" => output::json::print(&reports)?,
        _ => output::table::print_day_reports(&reports),
    }

    Ok(())
}
