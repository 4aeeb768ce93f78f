use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use butterfly_catalog::ingestion::{
    load, CatalogFormat, CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadOptions, LoadSeverity, LoadStats,
    TracingObserver,
};
use butterfly_catalog::LoadError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<LoadSeverity>>,
    failed_formats: Mutex<Vec<Option<CatalogFormat>>>,
    alerts: Mutex<Vec<LoadSeverity>>,
}

impl LoadObserver for RecordingObserver {
    fn on_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats.records);
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, _error: &LoadError) {
        self.failures.lock().unwrap().push(severity);
        self.failed_formats.lock().unwrap().push(ctx.format);
    }

    fn on_alert(&self, _ctx: &LoadContext, severity: LoadSeverity, _error: &LoadError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn opts(obs: Arc<RecordingObserver>, threshold: LoadSeverity) -> LoadOptions {
    LoadOptions {
        observer: Some(obs),
        alert_at_or_above: threshold,
        ..Default::default()
    }
}

#[test]
fn observer_receives_success_with_record_count() {
    let obs = Arc::new(RecordingObserver::default());
    load("tests/fixtures/butterflies.json", &opts(obs.clone(), LoadSeverity::Critical)).unwrap();

    assert_eq!(*obs.successes.lock().unwrap(), vec![4]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_receives_failure_and_alert_on_critical_io_error() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load("tests/fixtures/does_not_exist.json", &opts(obs.clone(), LoadSeverity::Critical)).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Critical]);
    assert_eq!(*obs.alerts.lock().unwrap(), vec![LoadSeverity::Critical]);
}

#[test]
fn observer_receives_failure_without_alert_for_parse_error() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load("tests/fixtures/truncated.json", &opts(obs.clone(), LoadSeverity::Critical)).unwrap_err();

    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn unknown_extension_is_reported_as_a_failure() {
    let obs = Arc::new(RecordingObserver::default());
    let err = load("tests/fixtures/butterflies.xml", &opts(obs.clone(), LoadSeverity::Critical)).unwrap_err();

    assert!(matches!(err, LoadError::Format { .. }));
    assert_eq!(*obs.failures.lock().unwrap(), vec![LoadSeverity::Error]);
    assert_eq!(*obs.failed_formats.lock().unwrap(), vec![None]);
    assert!(obs.alerts.lock().unwrap().is_empty());
    assert!(obs.successes.lock().unwrap().is_empty());
}

#[test]
fn forced_format_is_reported_on_failure() {
    let obs = Arc::new(RecordingObserver::default());
    let options = LoadOptions {
        format: Some(CatalogFormat::Json),
        ..opts(obs.clone(), LoadSeverity::Critical)
    };
    let _ = load("tests/fixtures/missing_column.csv", &options).unwrap_err();

    assert_eq!(*obs.failed_formats.lock().unwrap(), vec![Some(CatalogFormat::Json)]);
}

#[test]
fn lower_threshold_alerts_on_parse_error() {
    let obs = Arc::new(RecordingObserver::default());
    let _ = load("tests/fixtures/missing_column.csv", &opts(obs.clone(), LoadSeverity::Error)).unwrap_err();

    assert_eq!(*obs.alerts.lock().unwrap(), vec![LoadSeverity::Error]);
}

#[test]
fn composite_fans_out_and_file_observer_appends() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let log = std::env::temp_dir().join(format!("butterfly-catalog-observer-{nanos}.log"));

    let recording = Arc::new(RecordingObserver::default());
    let as_observer: Arc<dyn LoadObserver> = recording.clone();
    let composite = CompositeObserver::new(vec![as_observer]).with(Arc::new(FileObserver::new(&log)));
    let options = LoadOptions {
        observer: Some(Arc::new(composite)),
        ..Default::default()
    };

    load("tests/fixtures/butterflies.json", &options).unwrap();
    let _ = load("tests/fixtures/does_not_exist.json", &options).unwrap_err();
    let _ = load("tests/fixtures/butterflies.xml", &options).unwrap_err();

    let text = std::fs::read_to_string(&log).unwrap();
    let _ = std::fs::remove_file(&log);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(*recording.successes.lock().unwrap(), vec![4]);
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("[json] loaded 4 records from tests/fixtures/butterflies.json"));
    assert!(lines[1].contains("[json] Critical: could not load tests/fixtures/does_not_exist.json"));
    assert!(lines[2].contains("[json] ALERT Critical: could not load tests/fixtures/does_not_exist.json"));
    assert!(lines[3].contains("[?] Error: could not load tests/fixtures/butterflies.xml"));
    assert!(lines[3].contains("extension 'xml'"));
}

#[test]
fn tracing_observer_can_be_configured() {
    let options = LoadOptions {
        observer: Some(Arc::new(TracingObserver)),
        alert_at_or_above: LoadSeverity::Error,
        ..Default::default()
    };
    assert_eq!(load("tests/fixtures/butterflies.json", &options).unwrap().len(), 4);
    assert!(load("tests/fixtures/truncated.json", &options).is_err());
}
