use simple_logger::SimpleLogger;

use crate::remover_config::LogLevel;

/// Installs the global logger at `level`, letting `RUST_LOG` override it
///
/// Output goes to stderr; stdout is reserved for the failure report.
pub fn init_logging(level: LogLevel) {
    if let Err(e) = SimpleLogger::new()
        .with_level(level.into())
        .env()
        .init()
    {
        eprintln!("Failed to initialise logging: {}", e);
    }
}
