//! VulRule CLI Library
//!
//! Command implementations for the VulRule documentation generator. The
//! binary entry point parses arguments and dispatches here.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use vulrule::cmd::build::{self, BuildOptions};
//!
//! // Generate the English documentation tree
//! build::run(Path::new("vulrule.toml"), &BuildOptions::default()).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use vulrule_core::{Config, Dataset, Locale};
pub use vulrule_generator::{BuildStats, Builder};

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
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
