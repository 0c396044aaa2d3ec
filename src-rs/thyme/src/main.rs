//! Command line front end for resolving and validating Thyme tests

use std::{fs, process::ExitCode};

use clap::Parser;
use thyme_loader::{LoadError, LoaderConfig, TestLoader, TestSuiteLoader};
use thyme_shared::error::ThymeError;
use tracing::debug;

use crate::command::{CliCommand, Commands, LoadingArgs};

mod command;
mod logging;
mod print_error;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    logging::init(cli.verbose);

    if cli.no_colors {
        anstream::ColorChoice::Never.write_global();
    }

    let result = match &cli.command {
        Commands::Resolve { file, loading } => TestLoader::new(loader_config(loading))
            .load(file)
            .map(|tests| print_test::print_tests(&tests, cli.print_debug)),
        Commands::ResolveSuite { file, loading } => TestSuiteLoader::new(loader_config(loading))
            .load(file)
            .map(|suite| print_test::print_suite(&suite, cli.print_debug)),
        Commands::Validate { file } => TestLoader::new(LoaderConfig::default())
            .load(file)
            .map(|tests| print_test::print_valid(&tests)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error::print(&convert_error(&error), cli.print_debug);
            ExitCode::FAILURE
        }
    }
}

const fn loader_config(loading: &LoadingArgs) -> LoaderConfig {
    LoaderConfig {
        expand_browsers: !loading.single_browser,
        validate: !loading.skip_validation,
    }
}

/// Attaches the source of the failing document when it can still be read.
fn convert_error(error: &LoadError) -> ThymeError {
    let path = error.path();
    let source = fs::read_to_string(path)
        .inspect_err(|read_error| {
            debug!(path = %path.display(), error = %read_error, "source not available for error");
        })
        .ok();

    ThymeError::from_error_with_optional_source(error, path.clone(), source.as_deref())
}
