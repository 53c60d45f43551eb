//! AY Docs server library
//!
//! Static file server for the compiled client-side site, plus the `check`
//! command that validates configuration and page section lists.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, check)
//! - [`server`] - Router serving compiled assets and the HTML shell
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use server::cmd;
//!
//! let report = cmd::check::validate(Path::new("aydocs.toml"));
//! assert!(!report.has_errors());
//! ```

pub mod cmd;
pub mod server;

pub use aydocs_core::Config;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
