//! Logging setup: `env_logger` writing to a file in the user's data directory,
//! or to stderr when that file cannot be opened.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use log::LevelFilter;

const LOG_FILE: &str = "devpoint-assistant.log";

fn log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devpoint-assistant")
        .join(LOG_FILE)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

pub fn init() {
    let mut builder = env_logger::Builder::new();

    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        builder.filter_level(LevelFilter::Info);
        // Dependencies are too chatty at info
        for noisy in ["eframe", "egui", "egui_winit", "wgpu", "reqwest", "hyper"] {
            builder.filter_module(noisy, LevelFilter::Warn);
        }
    }

    // [HH:MM:SS LEVEL] module - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = log_path();
    let file_error = match open_log_file(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            None
        }
        Err(e) => {
            builder.target(env_logger::Target::Stderr);
            Some(e)
        }
    };

    // A second init (tests, re-entry) keeps the first logger
    if builder.try_init().is_err() {
        return;
    }

    match file_error {
        None => log::info!("Logging initialized ✓ ({})", path.display()),
        Some(e) => log::warn!("Cannot open {}: {}, logging to stderr", path.display(), e),
    }
}
