//! Logging initialization for the `rental-statement` binary
//!
//! Filter priority: `-v/-q` flags, then `RUST_LOG`, then the configured
//! default. Logs go to stderr; stdout carries only the rendered statement.

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// # Arguments
///
/// * `verbosity` - The `-v/-q` flags from clap; when present they win
/// * `default_filter` - Used when no flag was given and `RUST_LOG` is unset
///
/// # Example
///
/// ```no_run
/// use clap::Parser;
/// use clap_verbosity_flag::{Verbosity, WarnLevel};
/// use rental_statement::logging;
///
/// #[derive(Parser)]
/// struct Args {
///     #[command(flatten)]
///     verbosity: Verbosity<WarnLevel>,
/// }
///
/// let args = Args::parse();
/// logging::init_logging(&args.verbosity, "rental_statement=info").unwrap();
/// ```
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let filter = if verbosity.is_present() {
        match verbosity.log_level() {
            Some(log_level) => EnvFilter::try_new(log_level.to_string().to_lowercase())?,
            None => EnvFilter::new("off"),
        }
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact(),
        )
        .try_init()?;

    Ok(())
}
