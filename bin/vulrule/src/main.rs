//! VulRule CLI
//!
//! Generates the Markdown documentation tree of a security rule dataset.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use vulrule::{Locale, cmd::build::BuildOptions};

/// Command-line interface for VulRule.
#[derive(Parser)]
#[command(
    name = "vulrule",
    version,
    about = "Generate documentation for a security rule dataset"
)]
struct Cli {
    /// Path to configuration file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "vulrule.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by build and check.
#[derive(clap::Args, Debug)]
struct DatasetArgs {
    /// Path to the rule dataset (JSON)
    #[arg(long)]
    data_path: Option<PathBuf>,

    /// Documentation language (en, zh)
    #[arg(short, long)]
    language: Option<Locale>,

    /// Documentation site root
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Treat page collisions as errors
    #[arg(long)]
    strict: bool,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Generate the documentation tree and homepage statistics
    Build {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Project URL shown on the introduction page
        #[arg(long, alias = "github_url")]
        github_url: Option<String>,
        /// Contact address shown on the introduction page
        #[arg(long)]
        email: Option<String>,
    },
    /// Validate configuration and the rule dataset without writing files
    Check {
        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

impl DatasetArgs {
    fn into_options(self) -> BuildOptions {
        BuildOptions {
            data_path: self.data_path,
            locale: self.language,
            site_root: self.site_root,
            strict: self.strict,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    vulrule::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            dataset,
            github_url,
            email,
        } => {
            let options = BuildOptions {
                project_url: github_url,
                email,
                ..dataset.into_options()
            };
            vulrule::cmd::build::run(&cli.config, &options)?;
        }
        Commands::Check { dataset } => {
            vulrule::cmd::check::run(&cli.config, &dataset.into_options())?;
        }
    }

    Ok(())
}
