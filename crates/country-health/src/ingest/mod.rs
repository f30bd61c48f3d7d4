//! Boundary between raw table-service rows and typed records.
//!
//! Rows arrive either as a JSON array of objects (the shape the hosted table
//! API returns) or as a headered CSV export. Both are normalised into the same
//! row map before conversion, so CSV cells are treated exactly like JSON text
//! values and parsed lazily.

mod convert;

use crate::records::{IndicatorRecord, PopulationRecord};
use crate::scoring::Domain;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

pub use convert::Row;

pub const DEFAULT_MAX_RECORDS: usize = 10_000;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON records: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV records: {0}")]
    Csv(#[from] csv::Error),
    #[error("expected a JSON array of row objects")]
    NotAnArray,
    #[error("row {index} is not a JSON object")]
    RowNotObject { index: usize },
    #[error("{count} rows exceeds the limit of {limit}")]
    TooManyRecords { count: usize, limit: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Json,
    Csv,
}

/// Reads record files and row payloads, enforcing a row limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordReader {
    max_records: usize,
}

impl Default for RecordReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECORDS)
    }
}

impl RecordReader {
    pub const fn new(max_records: usize) -> Self {
        Self { max_records }
    }

    pub fn indicators_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        format: RecordFormat,
        domain: Domain,
    ) -> Result<Vec<IndicatorRecord>, IngestError> {
        let file = File::open(path)?;
        self.indicators(BufReader::new(file), format, domain)
    }

    pub fn population_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        format: RecordFormat,
    ) -> Result<Vec<PopulationRecord>, IngestError> {
        let file = File::open(path)?;
        self.population(BufReader::new(file), format)
    }

    pub fn indicators<R: Read>(
        &self,
        reader: R,
        format: RecordFormat,
        domain: Domain,
    ) -> Result<Vec<IndicatorRecord>, IngestError> {
        let rows = self.read_rows(reader, format)?;
        self.indicators_from_rows(&rows, domain)
    }

    pub fn population<R: Read>(
        &self,
        reader: R,
        format: RecordFormat,
    ) -> Result<Vec<PopulationRecord>, IngestError> {
        let rows = self.read_rows(reader, format)?;
        self.population_from_rows(&rows)
    }

    pub fn indicators_from_rows(
        &self,
        rows: &[Row],
        domain: Domain,
    ) -> Result<Vec<IndicatorRecord>, IngestError> {
        self.check_limit(rows.len())?;
        let records: Vec<IndicatorRecord> = rows
            .iter()
            .filter_map(|row| convert::indicator_record(row, domain))
            .collect();

        if records.len() < rows.len() {
            warn!(
                domain = domain.label(),
                year_field = domain.year_field(),
                skipped = rows.len() - records.len(),
                "skipped indicator rows without a usable year"
            );
        }

        Ok(records)
    }

    pub fn population_from_rows(&self, rows: &[Row]) -> Result<Vec<PopulationRecord>, IngestError> {
        self.check_limit(rows.len())?;
        let records: Vec<PopulationRecord> =
            rows.iter().filter_map(convert::population_record).collect();

        if records.len() < rows.len() {
            warn!(
                skipped = rows.len() - records.len(),
                "skipped population rows missing an age bucket or population counts"
            );
        }

        Ok(records)
    }

    fn read_rows<R: Read>(&self, reader: R, format: RecordFormat) -> Result<Vec<Row>, IngestError> {
        match format {
            RecordFormat::Json => json_rows(reader),
            RecordFormat::Csv => csv_rows(reader),
        }
    }

    fn check_limit(&self, count: usize) -> Result<(), IngestError> {
        if count > self.max_records {
            return Err(IngestError::TooManyRecords {
                count,
                limit: self.max_records,
            });
        }

        Ok(())
    }
}

fn json_rows<R: Read>(reader: R) -> Result<Vec<Row>, IngestError> {
    let Value::Array(items) = serde_json::from_reader::<_, Value>(reader)? else {
        return Err(IngestError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(row) => Ok(row),
            _ => Err(IngestError::RowNotObject { index }),
        })
        .collect()
}

fn csv_rows<R: Read>(reader: R) -> Result<Vec<Row>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for record in csv_reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| {
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::String(cell.to_string())
                };
                (header.to_string(), value)
            })
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_json_array_of_rows() {
        let json = r#"[
            {"year": 2021, "GDP Growth (% Annual)": 1.5},
            {"year": 2022, "GDP Growth (% Annual)": null, "Unemployment Rate (%)": "7.2"}
        ]"#;

        let records = RecordReader::default()
            .indicators(Cursor::new(json), RecordFormat::Json, Domain::Economic)
            .expect("json parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].number("Unemployment Rate (%)"), Some(7.2));
        assert!(records[1].get("GDP Growth (% Annual)").is_none());
    }

    #[test]
    fn reads_csv_with_blank_cells() {
        let csv = "Time,LEx,TFR,CBR,CDR\n2022,78.1,,11.0,9.0\n2023, 78.4 ,1.6,10.5,9.2\n";

        let records = RecordReader::default()
            .indicators(Cursor::new(csv), RecordFormat::Csv, Domain::Demographic)
            .expect("csv parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2022);
        assert!(records[0].get("TFR").is_none());
        assert_eq!(records[1].number("LEx"), Some(78.4));
    }

    #[test]
    fn reads_population_csv() {
        let csv = "Location,Time,AgeGrp,PopMale,PopFemale\nChile,2026,0-4,500,480\nChile,2026,100+,1,2\n";

        let records = RecordReader::default()
            .population(Cursor::new(csv), RecordFormat::Csv)
            .expect("population parses");

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].age_group, "100+");
        assert_eq!(records[0].total(), 980.0);
    }

    #[test]
    fn rejects_non_array_json() {
        let err = RecordReader::default()
            .indicators(Cursor::new(r#"{"year": 2020}"#), RecordFormat::Json, Domain::Economic)
            .expect_err("object is not an array");

        assert!(matches!(err, IngestError::NotAnArray));
    }

    #[test]
    fn rejects_non_object_rows() {
        let err = RecordReader::default()
            .indicators(Cursor::new("[{\"year\": 2020}, 5]"), RecordFormat::Json, Domain::Economic)
            .expect_err("number is not a row");

        assert!(matches!(err, IngestError::RowNotObject { index: 1 }));
    }

    #[test]
    fn enforces_row_limit() {
        let json = r#"[{"year": 2020}, {"year": 2021}, {"year": 2022}]"#;

        let err = RecordReader::new(2)
            .indicators(Cursor::new(json), RecordFormat::Json, Domain::Economic)
            .expect_err("three rows exceed limit");

        assert!(matches!(
            err,
            IngestError::TooManyRecords { count: 3, limit: 2 }
        ));
    }

    #[test]
    fn rows_without_year_are_skipped() {
        let json = r#"[{"year": 2020, "Inflation (CPI %)": 2.0}, {"Inflation (CPI %)": 4.0}]"#;

        let records = RecordReader::default()
            .indicators(Cursor::new(json), RecordFormat::Json, Domain::Economic)
            .expect("json parses");

        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_files_surface_io_errors() {
        let err = RecordReader::default()
            .population_from_path("does/not/exist.csv", RecordFormat::Csv)
            .expect_err("file is missing");

        assert!(matches!(err, IngestError::Io(_)));
    }
}
