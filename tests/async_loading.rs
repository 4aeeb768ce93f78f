#![cfg(feature = "async")]

use std::sync::{Arc, Mutex};

use butterfly_catalog::ingestion::{load_async, CatalogFormat, LoadContext, LoadObserver, LoadOptions, LoadSeverity};
use butterfly_catalog::{Catalog, LoadError};

#[tokio::test]
async fn async_load_reads_json_fixture() {
    let c = load_async("tests/fixtures/butterflies.json", &LoadOptions::default())
        .await
        .unwrap();
    assert_eq!(c.len(), 4);
}

#[tokio::test]
async fn async_load_reads_csv_on_blocking_pool() {
    let opts = LoadOptions {
        format: Some(CatalogFormat::Csv),
        ..Default::default()
    };
    let c = load_async("tests/fixtures/butterflies.csv", &opts).await.unwrap();
    assert_eq!(c.len(), 3);
}

#[tokio::test]
async fn async_failure_is_returned_to_the_session() {
    let result = load_async("tests/fixtures/does_not_exist.json", &LoadOptions::default()).await;
    assert!(matches!(result, Err(LoadError::Io(_))));

    let mut catalog = Catalog::default();
    assert!(catalog.finish_load(result).is_err());
    assert!(!catalog.is_loaded());
}

#[derive(Default)]
struct FailureLog(Mutex<Vec<(Option<CatalogFormat>, LoadSeverity)>>);

impl LoadObserver for FailureLog {
    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, _error: &LoadError) {
        self.0.lock().unwrap().push((ctx.format, severity));
    }
}

#[tokio::test]
async fn async_unknown_extension_reaches_the_observer() {
    let log = Arc::new(FailureLog::default());
    let opts = LoadOptions {
        observer: Some(log.clone()),
        ..Default::default()
    };
    let result = load_async("tests/fixtures/butterflies.xml", &opts).await;

    assert!(matches!(result, Err(LoadError::Format { .. })));
    assert_eq!(*log.0.lock().unwrap(), vec![(None, LoadSeverity::Error)]);
}
