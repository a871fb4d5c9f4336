use anyhow::Result;
use movie_catalog_config::LoggingConfig;
use std::io::{self, IsTerminal};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the global subscriber.
///
/// `verbose` and `quiet` come from the command line and override the
/// configured level; otherwise `RUST_LOG` wins over `config.level`. Output
/// goes to `log_file` when given, stderr otherwise.
pub fn init_logging(config: &LoggingConfig, log_file: Option<&Path>, verbose: u8, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose > 0 {
        EnvFilter::new(filter_for_verbosity(verbose))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
    };

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| config.json || !io::stdout().is_terminal());

    let registry = Registry::default().with(filter);

    if let Some(log_path) = log_file {
        let (log_dir, log_prefix) = rolling_parts(log_path)?;
        std::fs::create_dir_all(log_dir)?;

        // movie-catalog.log rolls into movie-catalog.2026-01-17 and so on
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix);

        if json {
            let layer = fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(file_appender);
            registry.with(layer).try_init()?;
        } else {
            let layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(file_appender);
            registry.with(layer).try_init()?;
        }
    } else if json {
        let layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);
        registry.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);
        registry.with(layer).try_init()?;
    }

    Ok(())
}

fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        // Connection pool chatter drowns out request logs at debug
        1 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn",
        _ => "trace",
    }
}

/// Split a log file path into its directory and the rotation prefix (file name without extension)
fn rolling_parts(log_path: &Path) -> Result<(&Path, &str)> {
    let log_dir = log_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Log file path has no parent directory"))?;
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename: {}", log_path.display()))?;

    let prefix = file_name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(file_name);
    Ok((log_dir, prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_rolling_parts() {
        let path = PathBuf::from("/var/log/movie-catalog/movie-catalog.log");
        let (dir, prefix) = rolling_parts(&path).unwrap();
        assert_eq!(dir, Path::new("/var/log/movie-catalog"));
        assert_eq!(prefix, "movie-catalog");

        let bare = PathBuf::from("logs/catalog");
        assert_eq!(rolling_parts(&bare).unwrap().1, "catalog");
    }

    #[test]
    fn test_filter_for_verbosity() {
        assert_eq!(filter_for_verbosity(0), "info");
        assert!(filter_for_verbosity(1).starts_with("debug"));
        assert_eq!(filter_for_verbosity(3), "trace");
    }
}
