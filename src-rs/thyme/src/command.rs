use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Thyme browser test CLI
#[derive(Parser)]
#[command(name = "thyme")]
#[command(version, about = "Resolve and validate Thyme browser tests", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,

    /// Print the output in debug format
    #[arg(long, global = true)]
    pub print_debug: bool,

    /// Disable colors in the output
    #[arg(long, global = true)]
    pub no_colors: bool,

    /// Log more; repeat for more detail (overrides `THYME_LOG`)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a test and print the result
    Resolve {
        /// Path to the test document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        loading: LoadingArgs,
    },
    /// Resolve every test of a test suite and print the result
    ResolveSuite {
        /// Path to the test suite document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        loading: LoadingArgs,
    },
    /// Check that a test resolves and can be run
    Validate {
        /// Path to the test document
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Args)]
pub struct LoadingArgs {
    /// Skip validation of the resolved tests
    #[arg(long)]
    pub skip_validation: bool,

    /// Keep only the first browser of a test naming several
    #[arg(long)]
    pub single_browser: bool,
}
