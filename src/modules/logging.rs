use env_logger::{Builder, WriteStyle};
use log::{debug, error, info, LevelFilter};

/// Sink for the human-readable trace and error messages emitted by the
/// cryptographer. Messages never contain key material, passwords, salts,
/// plaintext, or ciphertext; the cryptographer is correct with a sink
/// that drops everything.
pub trait LogSink: Send + Sync {
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}

/// Sink that forwards messages to the `log` crate macros
pub struct StandardLogSink;

impl LogSink for StandardLogSink {
    fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Sink that discards every message
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Initialize the logging system with console output
pub fn initialize_logging() -> Result<(), Box<dyn std::error::Error>> {
    // Configure the logging system
    Builder::new()
        // Set default log level
        .filter_level(LevelFilter::Info)
        // Enable timestamps
        .format_timestamp_secs()
        // Enable module path in logs
        .format_module_path(true)
        // Set colored output for console
        .write_style(WriteStyle::Auto)
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}
