use crate::constants::{COMPANY_NAME_CSV_HEADER, TICKER_CSV_HEADER};
use crate::models::{MergeReport, StockRecord};
use crate::types::StockRecordList;
use crate::utils::{dedup_stock_records, merge_stock_records};
use crate::Error;
use csv::{ReaderBuilder, StringRecord, Writer, WriterBuilder};
use flate2::read::GzDecoder;
use log::{debug, info, warn};
use std::fs::{self, File};
use std::io::{Cursor, Read, Write};
use std::path::Path;

pub struct StockRecordListPreprocessor {}

impl StockRecordListPreprocessor {
    pub fn read_stock_record_list_from_string(csv: &str) -> Result<StockRecordList, Error> {
        // Use a cursor to simulate a file reader from the string
        Self::read_stock_record_list_from_reader(Cursor::new(csv))
    }

    pub fn read_stock_record_list_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<StockRecordList, Error> {
        let path = path.as_ref();
        debug!("Reading stock record list from {}", path.display());

        let file = File::open(path)?;
        Self::read_stock_record_list_from_reader(file)
    }

    /// Parses a `ticker,company_name` CSV.
    ///
    /// Columns are located by header name, so extra columns and column order
    /// do not matter. Tickers are trimmed and uppercased; rows with an empty
    /// ticker or too few fields are skipped. Duplicate tickers keep their
    /// first occurrence.
    pub fn read_stock_record_list_from_reader<R: Read>(
        reader: R,
    ) -> Result<StockRecordList, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let ticker_index = Self::header_position(&headers, TICKER_CSV_HEADER)?;
        let company_name_index = Self::header_position(&headers, COMPANY_NAME_CSV_HEADER)?;

        let mut stock_records = StockRecordList::new();

        for (row_index, record) in reader.records().enumerate() {
            let record =
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

            let (Some(ticker), Some(company_name)) =
                (record.get(ticker_index), record.get(company_name_index))
            else {
                warn!("Skipping short row {}: {:?}", row_index + 1, record);
                continue;
            };

            let ticker = ticker.trim();
            if ticker.is_empty() {
                warn!("Skipping row {} with empty ticker", row_index + 1);
                continue;
            }

            stock_records.push(StockRecord::new(ticker, company_name.trim()));
        }

        let total_rows = stock_records.len();
        let stock_records = dedup_stock_records(&stock_records);

        if stock_records.len() != total_rows {
            debug!(
                "Dropped {} duplicate ticker row(s)",
                total_rows - stock_records.len()
            );
        }

        Ok(stock_records)
    }

    /// Decompress and parse a Gzip-compressed stock record list
    pub fn extract_stock_record_list_from_bytes(
        read_bytes: &[u8],
    ) -> Result<StockRecordList, Error> {
        let mut decoder = GzDecoder::new(read_bytes);
        let mut decompressed_data = String::new();
        decoder.read_to_string(&mut decompressed_data)?;

        Self::read_stock_record_list_from_string(&decompressed_data)
    }

    pub fn write_stock_record_list<W: Write>(
        writer: W,
        stock_records: &[StockRecord],
    ) -> Result<(), Error> {
        let mut writer = Writer::from_writer(writer);

        writer.write_record([TICKER_CSV_HEADER, COMPANY_NAME_CSV_HEADER])?;
        for stock_record in stock_records {
            writer.write_record([&stock_record.ticker, &stock_record.company_name])?;
        }
        writer.flush()?;

        Ok(())
    }

    pub fn write_stock_record_list_to_path<P: AsRef<Path>>(
        path: P,
        stock_records: &[StockRecord],
    ) -> Result<(), Error> {
        let path = path.as_ref();
        debug!(
            "Writing {} stock record(s) to {}",
            stock_records.len(),
            path.display()
        );

        let file = File::create(path)?;
        Self::write_stock_record_list(file, stock_records)
    }

    /// Merges `additions` into the stock data CSV at `path`.
    ///
    /// Unlike the readers above, every existing row is kept as-is: duplicate
    /// tickers, empty tickers, short rows and extra columns all survive the
    /// rewrite. New rows fill only the `ticker` and `company_name` columns.
    /// Rows are sorted by uppercase ticker before writing. With `dry_run` the
    /// file is left untouched and only the report is produced.
    pub fn merge_stock_records_into_path<P: AsRef<Path>>(
        path: P,
        additions: &[StockRecord],
        dry_run: bool,
    ) -> Result<MergeReport, Error> {
        let path = path.as_ref();
        let csv = fs::read_to_string(path)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(Cursor::new(csv.as_str()));

        let headers = reader
            .headers()
            .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
            .clone();

        let ticker_index = Self::header_position(&headers, TICKER_CSV_HEADER)?;
        let company_name_index = Self::header_position(&headers, COMPANY_NAME_CSV_HEADER)?;

        let mut rows: Vec<StringRecord> = Vec::new();
        for record in reader.records() {
            rows.push(
                record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?,
            );
        }

        let existing: StockRecordList = rows
            .iter()
            .map(|row| {
                StockRecord::new(
                    row.get(ticker_index).unwrap_or("").trim(),
                    row.get(company_name_index).unwrap_or("").trim(),
                )
            })
            .collect();

        let (_, report) = merge_stock_records(&existing, additions);

        for stock_record in &report.added {
            let mut fields = vec![""; headers.len()];
            fields[ticker_index] = stock_record.ticker.as_str();
            fields[company_name_index] = stock_record.company_name.as_str();
            rows.push(StringRecord::from(fields));
        }

        rows.sort_by_key(|row| row.get(ticker_index).unwrap_or("").trim().to_uppercase());

        if dry_run {
            info!("Dry run; {} left unchanged", path.display());
            return Ok(report);
        }

        debug!("Writing {} row(s) to {}", rows.len(), path.display());

        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_writer(File::create(path)?);
        writer.write_record(&headers)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(report)
    }

    fn header_position(headers: &StringRecord, name: &str) -> Result<usize, Error> {
        headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
    }
}
