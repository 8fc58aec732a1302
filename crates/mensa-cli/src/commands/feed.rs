use mensa_core::normalize::normalize_feed_day;
use std::path::PathBuf;

use crate::output;

pub fn run(
    json_file: PathBuf,
    restaurant: u32,
    output_format: &str,
) -> Result<(), mensa_core::error::MensaError> {
    let json = std::fs::read_to_string(&json_file)?;
    let items = mensa_core::extract_feed_menu(&json, restaurant)?;
    let day = normalize_feed_day(&items);

    match output_format {
        "json" => output::json::print(&day)?,
        _ => output::table::print_normalized(&day),
    }

    Ok(())
}
