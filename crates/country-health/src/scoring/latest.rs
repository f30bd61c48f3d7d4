use crate::records::IndicatorRecord;
use serde::Serialize;
use tracing::debug;

/// A resolved value together with the year it was observed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    pub year: i32,
    pub value: f64,
}

/// Most recent finite value stored under `key`, skipping years where it is null
/// or unparseable.
pub fn latest_value(records: &[IndicatorRecord], key: &str) -> Option<Observation> {
    latest_by(records, |record| record.number(key))
}

/// Most recent record for which `extract` yields a finite value.
///
/// Records are visited newest first. When two records share a year the one
/// supplied first wins, because the ordering is a stable sort.
pub fn latest_by<F>(records: &[IndicatorRecord], mut extract: F) -> Option<Observation>
where
    F: FnMut(&IndicatorRecord) -> Option<f64>,
{
    newest_first(records).into_iter().find_map(|record| {
        extract(record)
            .filter(|value| value.is_finite())
            .map(|value| Observation {
                year: record.year,
                value,
            })
    })
}

/// Most recent record where `key` resolves to a finite number.
pub fn latest_record<'a>(records: &'a [IndicatorRecord], key: &str) -> Option<&'a IndicatorRecord> {
    newest_first(records)
        .into_iter()
        .find(|record| record.number(key).is_some())
}

fn newest_first(records: &[IndicatorRecord]) -> Vec<&IndicatorRecord> {
    let mut ordered: Vec<&IndicatorRecord> = records.iter().collect();
    ordered.sort_by(|a, b| b.year.cmp(&a.year));

    if let Some(pair) = ordered.windows(2).find(|pair| pair[0].year == pair[1].year) {
        debug!(
            year = pair[0].year,
            "duplicate observation year; earliest supplied record takes precedence"
        );
    }

    ordered
}
