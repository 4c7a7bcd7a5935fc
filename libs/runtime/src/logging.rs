use crate::config::{LoggingConfig, Section};
use std::{
    collections::HashMap,
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{
    filter::{FilterFn, Targets},
    fmt,
};

use file_rotate::{
    compression::Compression,
    suffix::{AppendCount, FileLimit},
    ContentLimit, FileRotate,
};

const DEFAULT_MAX_SIZE_MB: u64 = 100;
const DEFAULT_MAX_BACKUPS: usize = 3;

// -------- level helpers --------

fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

/// Returns true if target == crate_name or target starts with "crate_name::"
fn matches_crate_prefix(target: &str, crate_name: &str) -> bool {
    target == crate_name
        || (target.starts_with(crate_name) && target[crate_name.len()..].starts_with("::"))
}

type CatchAllFilter = FilterFn<Box<dyn Fn(&tracing::Metadata<'_>) -> bool + Send + Sync + 'static>>;

/// Filter for the "default" section: everything not claimed by an explicit subsystem.
fn catch_all_filter(claimed: &[String], max_level: Level) -> CatchAllFilter {
    let claimed = claimed.to_vec();
    FilterFn::new(Box::new(move |meta: &tracing::Metadata<'_>| {
        let target = meta.target();
        if claimed.iter().any(|c| matches_crate_prefix(target, c)) {
            return false;
        }
        meta.level() <= &max_level
    }))
}

// -------- rotating file writers --------

#[derive(Clone)]
struct RotWriter(Arc<Mutex<FileRotate<AppendCount>>>);

impl Write for RotWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.0.lock() {
            Ok(mut f) => f.write(buf),
            // A poisoned writer drops the record rather than the process.
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.0.lock() {
            Ok(mut f) => f.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Writer that may be absent (drops writes).
struct MaybeWriter(Option<RotWriter>);

impl Write for MaybeWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.0 {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.0 {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

/// Routes log records to per-subsystem files by target prefix,
/// falling back to the default file.
#[derive(Clone, Default)]
struct FileRouter {
    default: Option<RotWriter>,
    by_prefix: HashMap<String, RotWriter>,
}

impl FileRouter {
    fn resolve_for(&self, target: &str) -> Option<RotWriter> {
        self.by_prefix
            .iter()
            .find(|(prefix, _)| matches_crate_prefix(target, prefix))
            .map(|(_, w)| w.clone())
            .or_else(|| self.default.clone())
    }

    fn is_empty(&self) -> bool {
        self.default.is_none() && self.by_prefix.is_empty()
    }
}

impl<'a> fmt::MakeWriter<'a> for FileRouter {
    type Writer = MaybeWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MaybeWriter(self.default.clone())
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        MaybeWriter(self.resolve_for(meta.target()))
    }
}

/// Resolve a log file path against `base_dir` (home_dir).
/// Absolute paths are kept as-is; relative paths are joined with `base_dir`.
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

/// Create a size-rotated writer, ensuring the parent directory exists.
fn create_rotating_writer_at_path(
    log_path: &Path,
    max_bytes: usize,
    max_files: usize,
) -> std::io::Result<RotWriter> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let rot = FileRotate::new(
        log_path,
        AppendCount::new(max_files),
        ContentLimit::BytesSurpassed(max_bytes),
        Compression::None,
        #[cfg(unix)]
        None,
    );

    Ok(RotWriter(Arc::new(Mutex::new(rot))))
}

fn writer_for_section(name: &str, section: &Section, base_dir: &Path) -> Option<RotWriter> {
    if section.file.trim().is_empty() {
        return None;
    }

    let max_bytes = section.max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB) * 1024 * 1024;
    let max_files = section.max_backups.unwrap_or(DEFAULT_MAX_BACKUPS).max(1);
    let log_path = resolve_log_path(&section.file, base_dir);

    match create_rotating_writer_at_path(&log_path, max_bytes as usize, max_files) {
        Ok(writer) => Some(writer),
        Err(e) => {
            eprintln!(
                "Failed to init log file for '{}': {} ({})",
                name,
                log_path.to_string_lossy(),
                e
            );
            None
        }
    }
}

// -------- layer planning --------

/// Everything derived from `LoggingConfig` before any subscriber is installed.
struct LayerPlan {
    console_targets: Targets,
    file_targets: Targets,
    subsystems: Vec<String>,
    default_console: Option<Level>,
    default_file: Option<Level>,
    files: FileRouter,
}

fn plan_layers(cfg: &LoggingConfig, base_dir: &Path) -> LayerPlan {
    let mut console_targets = Targets::new().with_default(LevelFilter::OFF);
    let mut file_targets = Targets::new().with_default(LevelFilter::OFF);
    let mut files = FileRouter::default();
    let mut subsystems = Vec::new();

    for (name, section) in cfg.iter().filter(|(k, _)| k.as_str() != "default") {
        subsystems.push(name.clone());

        if let Some(level) = parse_tracing_level(&section.console_level) {
            console_targets = console_targets.with_target(name.clone(), LevelFilter::from_level(level));
        }

        if let Some(writer) = writer_for_section(name, section, base_dir) {
            files.by_prefix.insert(name.clone(), writer);
            if let Some(level) = parse_tracing_level(&section.file_level) {
                file_targets = file_targets.with_target(name.clone(), LevelFilter::from_level(level));
            }
        }
    }

    let default_section = cfg.get("default");
    let default_console = default_section.and_then(|s| parse_tracing_level(&s.console_level));
    if let Some(section) = default_section {
        files.default = writer_for_section("default", section, base_dir);
    }
    let default_file = default_section
        .filter(|_| files.default.is_some())
        .and_then(|s| parse_tracing_level(&s.file_level));

    LayerPlan {
        console_targets,
        file_targets,
        subsystems,
        default_console,
        default_file,
        files,
    }
}

// -------- public init --------

/// Initialize logging from a configuration.
/// - `cfg`: LoggingConfig containing the logging sections
/// - `base_dir`: base directory used to resolve relative log file paths (usually server.home_dir)
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    // Bridge `log` → `tracing` before installing the subscriber
    let _ = tracing_log::LogTracer::init();

    if cfg.is_empty() {
        init_default_logging();
        return;
    }

    install(plan_layers(cfg, base_dir));
}

fn init_default_logging() {
    let _ = fmt()
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .try_init();
}

fn install(plan: LayerPlan) {
    use tracing_subscriber::{layer::SubscriberExt, prelude::*, Layer, Registry};

    let ansi = atty::is(atty::Stream::Stdout);

    let console_explicit = fmt::layer()
        .with_ansi(ansi)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_filter(plan.console_targets);

    let console_default = plan.default_console.map(|level| {
        fmt::layer()
            .with_ansi(ansi)
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_filter(catch_all_filter(&plan.subsystems, level))
    });

    let (file_explicit, file_default) = if plan.files.is_empty() {
        (None, None)
    } else {
        let explicit = fmt::layer()
            .json()
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_writer(plan.files.clone())
            .with_filter(plan.file_targets);

        let default = plan.default_file.map(|level| {
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_writer(plan.files.clone())
                .with_filter(catch_all_filter(&plan.subsystems, level))
        });

        (Some(explicit), default)
    };

    // Option<Layer> is itself a Layer, so absent pieces are no-ops.
    let _ = Registry::default()
        .with(console_explicit)
        .with(console_default)
        .with(file_explicit)
        .with(file_default)
        .try_init();
}

// =================== tests ===================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_logging_config;
    use tempfile::tempdir;

    fn section(console: &str, file: &str, file_level: &str) -> Section {
        Section {
            console_level: console.into(),
            file: file.into(),
            file_level: file_level.into(),
            max_backups: Some(2),
            max_size_mb: Some(1),
        }
    }

    #[test]
    fn test_logging_level_parsing() {
        assert_eq!(parse_tracing_level("trace"), Some(Level::TRACE));
        assert_eq!(parse_tracing_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_tracing_level("Info"), Some(Level::INFO));
        assert_eq!(parse_tracing_level("warn"), Some(Level::WARN));
        assert_eq!(parse_tracing_level("ERROR"), Some(Level::ERROR));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        assert_eq!(parse_tracing_level("invalid"), Some(Level::INFO)); // defaults to INFO
    }

    #[test]
    fn test_crate_prefix_matching() {
        assert!(matches_crate_prefix("leads", "leads"));
        assert!(matches_crate_prefix("leads::domain::service", "leads"));
        assert!(!matches_crate_prefix("leads_extra", "leads"));
        assert!(!matches_crate_prefix("admin", "leads"));
    }

    #[test]
    fn test_plan_routes_subsystem_files_under_home_dir() {
        let tmp = tempdir().unwrap();
        let mut cfg = default_logging_config();
        cfg.insert("leads".into(), section("debug", "logs/leads.log", "info"));

        let plan = plan_layers(&cfg, tmp.path());

        assert_eq!(plan.subsystems, vec!["leads".to_string()]);
        assert_eq!(plan.default_console, Some(Level::INFO));
        assert_eq!(plan.default_file, Some(Level::DEBUG));
        assert!(plan.files.default.is_some());
        assert!(plan.files.by_prefix.contains_key("leads"));
        assert!(tmp.path().join("logs").is_dir());
    }

    #[test]
    fn test_empty_file_disables_file_output() {
        let tmp = tempdir().unwrap();
        let mut cfg = LoggingConfig::new();
        cfg.insert("default".into(), section("info", "", "debug"));

        let plan = plan_layers(&cfg, tmp.path());

        assert!(plan.files.is_empty());
        assert_eq!(plan.default_file, None);
        assert_eq!(plan.default_console, Some(Level::INFO));
    }

    #[test]
    fn test_router_prefers_subsystem_file() {
        let tmp = tempdir().unwrap();
        let mut cfg = default_logging_config();
        cfg.insert("admin".into(), section("info", "logs/admin.log", "debug"));
        let plan = plan_layers(&cfg, tmp.path());

        let admin = plan.files.resolve_for("admin::api::web").unwrap();
        let routed = plan.files.by_prefix.get("admin").unwrap();
        assert!(Arc::ptr_eq(&admin.0, &routed.0));

        let other = plan.files.resolve_for("sqlx::query").unwrap();
        assert!(Arc::ptr_eq(&other.0, &plan.files.default.as_ref().unwrap().0));
    }

    #[test]
    fn test_file_paths_resolved_against_home_dir() {
        let tmp = tempdir().unwrap();
        let resolved = resolve_log_path("logs/test.log", tmp.path());
        assert!(resolved.starts_with(tmp.path()));
        assert!(resolved.ends_with("logs/test.log"));

        let abs = tmp.path().join("abs.log");
        assert_eq!(resolve_log_path(&abs.to_string_lossy(), Path::new("/x")), abs);
    }

    #[test]
    fn test_create_rotating_writer_at_path_creates_parent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("nested/dir/app.log");

        let mut writer = create_rotating_writer_at_path(&p, 128 * 1024, 2).unwrap();
        writer.write_all(b"hello\n").unwrap();
        writer.flush().unwrap();

        assert!(p.parent().unwrap().exists(), "parent dir must be created");
        assert!(p.exists());
    }
}
