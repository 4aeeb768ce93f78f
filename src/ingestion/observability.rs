use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LoadError;

use super::unified::CatalogFormat;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (the load failed).
    Error,
    /// Critical error (I/O or other infrastructure failures).
    Critical,
}

impl LoadSeverity {
    /// Severity of a failed load.
    pub fn for_error(e: &LoadError) -> Self {
        match e {
            LoadError::Io(_) | LoadError::Join { .. } => LoadSeverity::Critical,
            LoadError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
                _ => LoadSeverity::Error,
            },
            LoadError::Json(err) if err.is_io() => LoadSeverity::Critical,
            LoadError::Json(_) | LoadError::Format { .. } => LoadSeverity::Error,
        }
    }
}

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The source path.
    pub path: PathBuf,
    /// Format used to read it; `None` when it could not be inferred from the path.
    pub format: Option<CatalogFormat>,
}

impl LoadContext {
    /// Short format tag for log lines (`json`, `csv`, or `?`).
    pub fn format_tag(&self) -> &'static str {
        self.format.map_or("?", CatalogFormat::extension)
    }
}

/// Stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded records.
    pub records: usize,
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when loading succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans out callbacks to a list of observers, in registration order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }

    /// Add another observer after the existing ones.
    pub fn with(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    fn each(&self, f: impl Fn(&dyn LoadObserver)) {
        self.observers.iter().for_each(|o| f(o.as_ref()));
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.each(|o| o.on_success(ctx, stats));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Forwards load events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        tracing::info!(
            format = ctx.format_tag(),
            path = %ctx.path.display(),
            records = stats.records,
            "catalog loaded"
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        tracing::error!(
            ?severity,
            format = ctx.format_tag(),
            path = %ctx.path.display(),
            %error,
            "catalog load failed"
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        tracing::error!(
            alert = true,
            ?severity,
            format = ctx.format_tag(),
            path = %ctx.path.display(),
            %error,
            "catalog load failed"
        );
    }
}

/// Appends one line per load outcome to a local catalog log.
///
/// Line layout: `<unix secs> [<format>] <outcome> <path>`, e.g.
///
/// ```text
/// 1700000000 [json] loaded 4 records from model/data.json
/// 1700000001 [?] Error: could not load model/data.xml: format error: ...
/// 1700000001 [?] ALERT Error: could not load model/data.xml: format error: ...
/// ```
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn log(&self, ctx: &LoadContext, outcome: fmt::Arguments<'_>) {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{ts} [{}] {outcome}", ctx.format_tag());
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.log(
            ctx,
            format_args!("loaded {} records from {}", stats.records, ctx.path.display()),
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.log(
            ctx,
            format_args!("{severity:?}: could not load {}: {error}", ctx.path.display()),
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        self.log(
            ctx,
            format_args!("ALERT {severity:?}: could not load {}: {error}", ctx.path.display()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::LoadSeverity;
    use crate::error::LoadError;

    #[test]
    fn io_failures_are_critical() {
        let e = LoadError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(LoadSeverity::for_error(&e), LoadSeverity::Critical);
    }

    #[test]
    fn parse_failures_are_errors() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(LoadSeverity::for_error(&LoadError::Json(json)), LoadSeverity::Error);
        let fmt = LoadError::Format {
            message: "bad".to_string(),
        };
        assert_eq!(LoadSeverity::for_error(&fmt), LoadSeverity::Error);
    }

    #[test]
    fn severities_are_ordered() {
        assert!(LoadSeverity::Info < LoadSeverity::Warning);
        assert!(LoadSeverity::Warning < LoadSeverity::Error);
        assert!(LoadSeverity::Error < LoadSeverity::Critical);
    }
}
