mod commands;
mod output;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mensa",
    version,
    about = "Menu ingestion tool for campus restaurant posters and feeds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the validity window and raw name/price pairs from a poster PDF
    Poster {
        /// Path to the poster PDF
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Classify and normalize a saved feed response (JSON)
    Feed {
        /// Path to the feed JSON file
        json_file: PathBuf,

        /// Upstream restaurant id the response was requested for
        #[arg(short, long)]
        restaurant: u32,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Ingest a poster week or a feed day into a JSON store file
    Ingest {
        /// Campus slug the menus belong to
        #[arg(short, long)]
        campus: String,

        /// JSON store file (created when missing)
        #[arg(short, long)]
        store: PathBuf,

        /// Poster PDF covering a whole week
        #[arg(long)]
        poster: Option<PathBuf>,

        /// Feed JSON for a single day (needs --date and --restaurant)
        #[arg(long)]
        feed: Option<PathBuf>,

        /// Menu date for --feed, e.g. 2020-10-12
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Upstream restaurant id for --feed
        #[arg(long)]
        restaurant: Option<u32>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Poster { pdf_file, output } => commands::poster::run(pdf_file, &output),
        Commands::Feed {
            json_file,
            restaurant,
            output,
        } => commands::feed::run(json_file, restaurant, &output),
        Commands::Ingest {
            campus,
            store,
            poster,
            feed,
            date,
            restaurant,
            output,
        } => commands::ingest::run(campus, store, poster, feed, date, restaurant, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
