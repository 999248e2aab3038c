use clap::{Parser, Subcommand};
use log::{error, info, warn};
use std::io::{self, BufRead};
use std::path::PathBuf;
use stock_search::{
    clean_ticker, load_embedded_stock_record_list, validate_ticker, Error,
    StockRecordList, StockRecordListPreprocessor, TickerSearchRanker, DEFAULT_MAX_RESULTS,
};

#[derive(Parser)]
#[command(name = "stock-search-cli")]
#[command(about = "Search, clean, and maintain a ticker / company name list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank tickers and company names matching a query
    Search {
        /// Query text; reads one query per line from stdin when omitted
        query: Option<String>,

        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,

        /// CSV file with `ticker,company_name` columns (defaults to the bundled list)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
    /// Clean and validate a user-typed ticker
    Clean { input: String },
    /// Merge a seed CSV into a stock data CSV
    Merge {
        #[arg(short, long)]
        data: PathBuf,

        #[arg(short, long)]
        seeds: PathBuf,

        /// Report what would change without rewriting the data file
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            max_results,
            data,
        } => run_search(query, max_results, data),
        Commands::Clean { input } => {
            run_clean(&input);
            Ok(())
        }
        Commands::Merge {
            data,
            seeds,
            dry_run,
        } => run_merge(data, seeds, dry_run),
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn load_stock_records(data: Option<PathBuf>) -> Result<StockRecordList, Error> {
    match data {
        Some(path) => StockRecordListPreprocessor::read_stock_record_list_from_path(path),
        None => load_embedded_stock_record_list(),
    }
}

fn run_search(
    query: Option<String>,
    max_results: usize,
    data: Option<PathBuf>,
) -> Result<(), Error> {
    let stock_records = load_stock_records(data)?;
    info!("Loaded {} stock records", stock_records.len());

    let ranker = TickerSearchRanker::new(&stock_records);

    match query {
        Some(query) => print_matches(&ranker, query.trim(), max_results),
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }

                println!("Results for '{}':", query);
                print_matches(&ranker, query, max_results);
                println!();
            }
        }
    }

    Ok(())
}

fn print_matches(ranker: &TickerSearchRanker, query: &str, max_results: usize) {
    let matches = ranker.search(query, max_results);

    if matches.is_empty() {
        println!("No matches found");
        return;
    }

    for result in matches {
        println!("{} ({})", result.display(), result.match_kind);
    }
}

fn run_clean(input: &str) {
    let cleaned = clean_ticker(input);

    println!("Cleaned: '{}'", cleaned);
    println!("Valid: {}", validate_ticker(&cleaned));
}

fn run_merge(data: PathBuf, seeds: PathBuf, dry_run: bool) -> Result<(), Error> {
    let additions = StockRecordListPreprocessor::read_stock_record_list_from_path(&seeds)?;

    let report =
        StockRecordListPreprocessor::merge_stock_records_into_path(&data, &additions, dry_run)?;

    for stock_record in &report.added {
        info!("Added: {}", stock_record);
    }
    for ticker in &report.already_present {
        warn!("Already exists: {}", ticker);
    }

    println!(
        "Added {} new stock(s); {} already present",
        report.added.len(),
        report.already_present.len()
    );

    Ok(())
}
