use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use stock_search::{
    load_embedded_stock_record_list, merge_stock_records, search_stocks, MatchKind, StockRecord,
    StockRecordListPreprocessor,
};
use test_utils::constants::{TEST_SEED_FILE_PATH, TEST_STOCK_DATA_FILE_PATH};
use test_utils::load_stock_records_from_file;

fn temp_csv_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stock_search_{}_{}.csv", name, std::process::id()))
}

#[cfg(test)]
mod embedded_list_tests {
    use super::*;

    #[test]
    fn test_embedded_list_is_normalized() {
        let records =
            load_embedded_stock_record_list().expect("Failed to decode embedded stock list");

        assert!(!records.is_empty());

        let mut seen = HashSet::new();
        for record in &records {
            assert_eq!(record.ticker, record.ticker.to_uppercase());
            assert!(seen.insert(record.ticker.clone()), "{}", record.ticker);
        }
    }

    #[test]
    fn test_embedded_list_is_searchable() {
        let records =
            load_embedded_stock_record_list().expect("Failed to decode embedded stock list");

        let results = search_stocks("apple", &records, 8);
        assert_eq!(results[0].ticker, "AAPL");
        assert_eq!(results[0].match_kind, MatchKind::CompanyExactWord);

        let results = search_stocks("BRK", &records, 8);
        let tickers: Vec<&str> = results.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["BRK.A", "BRK.B"]);
    }
}

#[cfg(test)]
mod preprocessor_tests {
    use super::*;

    #[test]
    fn test_path_loader_drops_duplicates() {
        let raw = load_stock_records_from_file(&*TEST_STOCK_DATA_FILE_PATH)
            .expect("Failed to load stock records from CSV");
        let loaded =
            StockRecordListPreprocessor::read_stock_record_list_from_path(&*TEST_STOCK_DATA_FILE_PATH)
                .expect("Failed to load stock records");

        // The fixture repeats AAPL once
        assert_eq!(loaded.len(), raw.len() - 1);
        assert_eq!(
            loaded.iter().find(|r| r.ticker == "AAPL").map(|r| r.company_name.as_str()),
            Some("Apple Inc")
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = StockRecordListPreprocessor::read_stock_record_list_from_path(
            temp_csv_path("does_not_exist"),
        );

        assert!(matches!(result, Err(stock_search::Error::IoError(_))));
    }

    #[test]
    fn test_write_then_read_file() {
        let path = temp_csv_path("write_then_read");
        let records = vec![
            StockRecord::new("T", "AT&T Inc"),
            StockRecord::new("TMUS", "T-Mobile US Inc"),
        ];

        StockRecordListPreprocessor::write_stock_record_list_to_path(&path, &records)
            .expect("Failed to write stock records");
        let reread = StockRecordListPreprocessor::read_stock_record_list_from_path(&path)
            .expect("Failed to read stock records");
        fs::remove_file(&path).ok();

        assert_eq!(reread, records);
    }
}

#[cfg(test)]
mod merge_tests {
    use super::*;

    #[test]
    fn test_merge_seed_file() {
        let existing =
            StockRecordListPreprocessor::read_stock_record_list_from_path(&*TEST_STOCK_DATA_FILE_PATH)
                .expect("Failed to load stock records");
        let seeds = StockRecordListPreprocessor::read_stock_record_list_from_path(&*TEST_SEED_FILE_PATH)
            .expect("Failed to load seed records");

        let (merged, report) = merge_stock_records(&existing, &seeds);

        let added: Vec<&str> = report.added.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(added, vec!["UEC", "DNN", "NXE"]);
        assert_eq!(report.already_present, vec!["CCJ", "AAPL"]);
        assert_eq!(merged.len(), existing.len() + 3);

        let merged_tickers: Vec<&str> = merged.iter().map(|r| r.ticker.as_str()).collect();
        let mut sorted = merged_tickers.clone();
        sorted.sort();
        assert_eq!(merged_tickers, sorted);

        // Newly merged companies become searchable
        let results = search_stocks("URANIUM", &merged, 8);
        assert!(results.iter().any(|r| r.ticker == "UEC"));
    }
}

#[cfg(test)]
mod merge_into_path_tests {
    use super::*;

    fn copy_fixture(name: &str) -> PathBuf {
        let path = temp_csv_path(name);
        fs::copy(&*TEST_STOCK_DATA_FILE_PATH, &path).expect("Failed to copy fixture");
        path
    }

    #[test]
    fn test_rewrite_keeps_every_existing_row() {
        let path = copy_fixture("merge_keeps_rows");
        let before = load_stock_records_from_file(&path).expect("Failed to load fixture copy");
        let seeds = StockRecordListPreprocessor::read_stock_record_list_from_path(&*TEST_SEED_FILE_PATH)
            .expect("Failed to load seed records");

        let report = StockRecordListPreprocessor::merge_stock_records_into_path(&path, &seeds, false)
            .expect("Failed to merge into file");
        let after = load_stock_records_from_file(&path).expect("Failed to reload merged file");
        fs::remove_file(&path).ok();

        let added: Vec<&str> = report.added.iter().map(|r| r.ticker.as_str()).collect();
        assert_eq!(added, vec!["UEC", "DNN", "NXE"]);
        assert_eq!(report.already_present, vec!["CCJ", "AAPL"]);

        // Both AAPL rows of the fixture survive the rewrite
        assert_eq!(after.len(), before.len() + 3);
        for record in &before {
            assert!(after.contains(record), "lost row: {}", record);
        }
        assert_eq!(after.iter().filter(|r| r.ticker == "AAPL").count(), 2);

        let tickers: Vec<&str> = after.iter().map(|r| r.ticker.as_str()).collect();
        let mut sorted = tickers.clone();
        sorted.sort();
        assert_eq!(tickers, sorted);
    }

    #[test]
    fn test_dry_run_leaves_file_untouched() {
        let path = copy_fixture("merge_dry_run");
        let original = fs::read(&path).expect("Failed to read fixture copy");
        let seeds = StockRecordListPreprocessor::read_stock_record_list_from_path(&*TEST_SEED_FILE_PATH)
            .expect("Failed to load seed records");

        let report = StockRecordListPreprocessor::merge_stock_records_into_path(&path, &seeds, true)
            .expect("Failed to merge into file");
        let unchanged = fs::read(&path).expect("Failed to reread fixture copy");
        fs::remove_file(&path).ok();

        assert_eq!(report.added.len(), 3);
        assert_eq!(unchanged, original);
    }
}
