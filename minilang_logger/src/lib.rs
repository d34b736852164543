use chrono::{DateTime, Local};
use colored::*;
use fern::Dispatch;
use log::{Level, LevelFilter, Record};
use std::fmt::Arguments;
use std::path::{Path, PathBuf};

const LOG_FILE_STEM: &str = "minilang";
const LOG_FILE_STAMP: &str = "%Y%m%d-%H%M%S";
const LINE_STAMP: &str = "%H:%M:%S%.3f";

/// Where log records go and how verbose each destination is.
#[derive(Debug, Clone)]
pub struct LoggerSettings {
    pub console_level: LevelFilter,
    /// Directory for the log file. No file is written when unset.
    pub log_dir: Option<PathBuf>,
    pub file_level: LevelFilter,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        LoggerSettings {
            console_level: LevelFilter::Warn,
            log_dir: None,
            file_level: LevelFilter::Debug,
        }
    }
}

fn level_tag(level: Level) -> ColoredString {
    let tag = format!("{:<5}", level);
    match level {
        Level::Error => tag.red().bold(),
        Level::Warn => tag.yellow().bold(),
        Level::Info => tag.green(),
        Level::Debug => tag.blue(),
        Level::Trace => tag.dimmed(),
    }
}

/// One log file per process start, named after the moment it was opened.
fn log_file_path(dir: &Path, opened_at: DateTime<Local>) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let name = format!("{}-{}.log", LOG_FILE_STEM, opened_at.format(LOG_FILE_STAMP));
    Ok(dir.join(name))
}

fn file_line(stamp: &str, record: &Record, message: &Arguments) -> String {
    format!(
        "{} {:<5} {} ({}:{}) {}",
        stamp,
        record.level(),
        record.target(),
        record.file().unwrap_or("?"),
        record.line().unwrap_or(0),
        message
    )
}

fn console_dispatch(level: LevelFilter) -> Dispatch {
    Dispatch::new()
        .format(|out, message, record| {
            let stamp = Local::now().format(LINE_STAMP);
            out.finish(format_args!(
                "{} {} {} {}",
                stamp.to_string().dimmed(),
                level_tag(record.level()),
                record.target().cyan(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
}

fn file_dispatch(path: &Path, level: LevelFilter) -> Result<Dispatch, fern::InitError> {
    Ok(Dispatch::new()
        .format(|out, message, record| {
            let stamp = Local::now().format(LINE_STAMP).to_string();
            out.finish(format_args!("{}", file_line(&stamp, record, message)))
        })
        .level(level)
        .chain(fern::log_file(path)?))
}

/// Installs the global logger.
///
/// Console records go to stderr so that whatever a program prints on stdout
/// stays machine readable.
pub fn init(settings: &LoggerSettings) -> Result<Option<PathBuf>, fern::InitError> {
    let mut root = Dispatch::new()
        .level(LevelFilter::Trace)
        .chain(console_dispatch(settings.console_level));

    let file = match &settings.log_dir {
        Some(dir) => {
            let path = log_file_path(dir, Local::now())?;
            root = root.chain(file_dispatch(&path, settings.file_level)?);
            Some(path)
        },
        None => None,
    };

    root.apply()?;

    log::debug!(
        "Logger ready: console {}, file {}",
        settings.console_level,
        file.as_ref().map_or("off".to_string(), |p| format!("{} at {}", settings.file_level, p.display()))
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("minilang_logger_{}_{}", name, std::process::id()))
    }

    #[test]
    fn log_file_is_named_after_the_opening_time() {
        let dir = scratch_dir("name");
        let opened_at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap();

        let path = log_file_path(&dir, opened_at).unwrap();
        assert_eq!(path, dir.join("minilang-20240309-070502.log"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn log_file_path_creates_nested_directories() {
        let dir = scratch_dir("nested");
        let _ = std::fs::remove_dir_all(&dir);
        let nested = dir.join("a").join("b");

        log_file_path(&nested, Local::now()).unwrap();
        assert!(nested.is_dir());
        // a second call on an existing directory is fine
        log_file_path(&nested, Local::now()).unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_lines_carry_level_target_and_location() {
        let record = Record::builder()
            .level(Level::Info)
            .target("minilang::commands::run")
            .file(Some("src/commands/run.rs"))
            .line(Some(19))
            .args(format_args!("ignored"))
            .build();

        let line = file_line("12:00:00.000", &record, &format_args!("Running {}", "demo.ml"));
        assert_eq!(
            line,
            "12:00:00.000 INFO  minilang::commands::run (src/commands/run.rs:19) Running demo.ml"
        );
    }

    #[test]
    fn default_settings_keep_the_console_quiet_and_skip_the_file() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.console_level, LevelFilter::Warn);
        assert!(settings.log_dir.is_none());
    }
}
