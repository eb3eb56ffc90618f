//! Logging init for applications embedding the crate: file, or stderr.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "info,discord_cdn=debug";

/// Per-event log destination. A failed handle clone degrades to stderr
/// for that event instead of dropping it.
enum LogSink {
    File(fs::File),
    Stderr(io::Stderr),
}

impl LogSink {
    fn inner(&mut self) -> &mut dyn Write {
        match self {
            LogSink::File(f) => f,
            LogSink::Stderr(s) => s,
        }
    }
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner().flush()
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber appending to `log_file_path`, creating parent
/// directories as needed. Errors if the file can't be opened or a subscriber
/// is already set.
pub fn init_logging(log_file_path: &Path) -> Result<()> {
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log dir: {}", parent.display()))?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
        .with_context(|| format!("failed to open log file: {}", log_file_path.display()))?;

    struct AppendWriter(fs::File);

    impl<'a> MakeWriter<'a> for AppendWriter {
        type Writer = LogSink;

        fn make_writer(&'a self) -> Self::Writer {
            match self.0.try_clone() {
                Ok(f) => LogSink::File(f),
                Err(_) => LogSink::Stderr(io::stderr()),
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(AppendWriter(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {}", e))?;

    tracing::info!(path = %log_file_path.display(), "discord-cdn logging initialized");

    Ok(())
}

/// Stderr-only variant. Use when `init_logging` fails.
pub fn init_logging_stderr() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logging already initialized: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Only one test may install the global subscriber per test binary.
    #[test]
    fn file_logging_writes_events_and_blocks_second_init() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("cdn.log");
        init_logging(&path).unwrap();

        tracing::debug!(target: "discord_cdn::http", "CDN GET test-marker");
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("discord-cdn logging initialized"));
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(contents.contains("test-marker"));
        }

        assert!(init_logging_stderr().is_err());
        assert!(init_logging(&path).is_err());
    }

    #[test]
    fn stderr_sink_accepts_writes() {
        let mut sink = LogSink::Stderr(io::stderr());
        sink.write_all(b"").unwrap();
        sink.flush().unwrap();
    }
}
