use country_health::ingest::{RecordFormat, RecordReader};
use metrics_exporter_prometheus::PrometheusHandle;
use mime_guess::mime;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) records: RecordReader,
}

/// CSV when the path guesses to `text/csv`, JSON otherwise.
pub(crate) fn detect_format(path: &Path) -> RecordFormat {
    let is_csv = mime_guess::from_path(path)
        .iter()
        .any(|guess| guess.subtype() == mime::CSV);

    if is_csv {
        RecordFormat::Csv
    } else {
        RecordFormat::Json
    }
}
