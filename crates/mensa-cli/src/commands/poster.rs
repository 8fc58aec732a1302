use mensa_core::extraction::pdftotext::PdftotextPoster;
use std::path::PathBuf;

use crate::output;

pub fn run(pdf_file: PathBuf, output_format: &str) -> Result<(), mensa_core::error::MensaError> {
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let page = PdftotextPoster::new().load_page(&pdf_bytes)?;
    let extraction = mensa_core::extract_poster_menu(&page)?;

    match output_format {
        "json" => output::json::print(&extraction)?,
        _ => output::table::print_extraction(&extraction),
    }

    Ok(())
}
