use super::commands::Cli;
use bwstat_node::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, EnvFilter};

const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn init_logging(cli: &Cli, config: &LoggingConfig) {
    let level = if cli.quiet {
        "warn".to_string()
    } else {
        match cli.verbose {
            0 => config.level.to_string(),
            1 => "info,bwstat_node=debug".to_string(),
            2 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let log_file = cli.log_file.as_ref().or(config.file.as_ref());
    if let Some(log_file) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .expect("Failed to open log file");
        let file_layer = fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false);
        subscriber.with(file_layer).init();
    } else {
        // Logs go to stderr so polling output can own stdout.
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(cli.verbose >= 2);
        subscriber.with(stderr_layer).init();
    }
}

pub fn show_version() {
    println!("bwstat v{}", BUILD_VERSION);
    println!("target: {} {}", std::env::consts::OS, std::env::consts::ARCH);
}

const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB"];

/// Decimal SI rendering, "5.0 MB" style. Counts below 1 kB print as whole
/// bytes.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
