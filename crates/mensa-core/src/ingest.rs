use crate::classify::ClassifiedItem;
use crate::error::MensaError;
use crate::extraction::poster::{extract_poster, PosterExtraction};
use crate::extraction::PosterPage;
use crate::model::ParseResult;
use crate::normalize::{normalize_feed_day, normalize_poster_day, NormalizedDay};
use crate::report::{DayFailure, DayReport, RunReport};
use crate::store::{replace_day, MenuStore};
use chrono::{Days, NaiveDate};

/// One day's worth of acquired-but-raw menu data, whichever path produced
/// it.
#[derive(Debug, Clone)]
pub enum DayItems {
    Poster(Vec<ParseResult>),
    Feed(Vec<ClassifiedItem>),
}

/// Normalize one day's raw items and commit them, replacing whatever menu
/// was stored for the (campus, date) pair.
pub fn normalize_and_store(
    store: &mut dyn MenuStore,
    campus: &str,
    date: NaiveDate,
    items: &DayItems,
) -> DayReport {
    let day: NormalizedDay = match items {
        DayItems::Poster(results) => normalize_poster_day(results),
        DayItems::Feed(items) => normalize_feed_day(items),
    };

    let replaced = replace_day(store, campus, date, &day.drafts);

    DayReport {
        campus: campus.to_string(),
        date,
        stored_items: day.drafts.len(),
        replaced_existing: replaced,
        warnings: day.warnings,
    }
}

/// Extract a poster and commit each weekday of its validity window.
///
/// Extraction failure happens before anything is written, so a bad poster
/// leaves every stored day untouched.
pub fn ingest_poster(
    store: &mut dyn MenuStore,
    campus: &str,
    page: &dyn PosterPage,
) -> Result<Vec<DayReport>, MensaError> {
    let extraction = extract_poster(page)?;
    Ok(store_poster_week(store, campus, &extraction))
}

/// Commit an already-extracted poster week day by day. Each date receives
/// its own weekday's results plus the cross-week strip.
pub fn store_poster_week(
    store: &mut dyn MenuStore,
    campus: &str,
    extraction: &PosterExtraction,
) -> Vec<DayReport> {
    let mut reports = Vec::with_capacity(5);

    for offset in 0..5u64 {
        let Some(date) = extraction.valid_from.checked_add_days(Days::new(offset)) else {
            break;
        };
        if date > extraction.valid_until {
            // Short weeks (holidays) end before Friday.
            break;
        }

        let day_results: Vec<ParseResult> = extraction
            .results
            .iter()
            .filter(|r| r.day.applies_to_offset(offset as i64))
            .cloned()
            .collect();

        reports.push(normalize_and_store(
            store,
            campus,
            date,
            &DayItems::Poster(day_results),
        ));
    }

    reports
}

/// A unit of work for a batch run: produce the raw items for one
/// (campus, date). The closure runs the acquisition path (fetch plus
/// extract or classify) and may fail.
pub struct DayJob<'a> {
    pub campus: String,
    pub date: NaiveDate,
    pub acquire: Box<dyn FnOnce() -> Result<DayItems, MensaError> + 'a>,
}

/// Run a sequential multi-campus, multi-day ingestion.
///
/// A failing job is recorded and its stored menu left untouched; days
/// committed earlier in the same run stay committed. There is exactly one
/// writer, by construction: jobs run one after another.
pub fn run_ingestion(store: &mut dyn MenuStore, jobs: Vec<DayJob<'_>>) -> RunReport {
    let mut report = RunReport::default();

    for job in jobs {
        match (job.acquire)() {
            Ok(items) => {
                report
                    .days
                    .push(normalize_and_store(store, &job.campus, job.date, &items));
            }
            Err(e) => report.failures.push(DayFailure {
                campus: job.campus,
                date: job.date,
                error: e.to_string(),
            }),
        }
    }

    report
}
