use mensa_core::extraction::poster::PosterExtraction;
use mensa_core::model::MenuItemDraft;
use mensa_core::normalize::NormalizedDay;
use mensa_core::report::DayReport;

pub fn print_extraction(extraction: &PosterExtraction) {
    println!(
        "Valid {} to {}\n",
        extraction.valid_from, extraction.valid_until
    );

    let max_name = extraction
        .results
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(10)
        .max(4);

    for result in &extraction.results {
        let name = if result.name.is_empty() { "-" } else { &result.name };
        let price = if result.price.is_empty() {
            "-"
        } else {
            &result.price
        };
        println!(
            "  {:<9}  {:<7}  {:<width$}  {}",
            result.day.to_string(),
            result.category.to_string(),
            name,
            price,
            width = max_name
        );
    }
}

pub fn print_normalized(day: &NormalizedDay) {
    print_drafts(&day.drafts);
    print_warnings(day.warnings.iter().map(|w| w.message.as_str()));
}

pub fn print_drafts(drafts: &[MenuItemDraft]) {
    if drafts.is_empty() {
        println!("No menu items.");
        return;
    }

    let max_name = drafts.iter().map(|d| d.name.len()).max().unwrap_or(10);
    for draft in drafts {
        println!(
            "  {:<14}  {:<width$}  {}",
            draft.food_type.to_string(),
            draft.name,
            draft.price,
            width = max_name
        );
    }
}

pub fn print_day_reports(reports: &[DayReport]) {
    for report in reports {
        let replaced = if report.replaced_existing {
            " (replaced previous menu)"
        } else {
            ""
        };
        println!(
            "{} {}: stored {} item(s){}",
            report.campus, report.date, report.stored_items, replaced
        );
        print_warnings(report.warnings.iter().map(|w| w.message.as_str()));
    }
}

fn print_warnings<'a>(warnings: impl Iterator<Item = &'a str>) {
    for warning in warnings {
        eprintln!("  warning: {warning}");
    }
}
