//! Pipeline entry: argument validation and file/directory dispatch.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::CommandFactory;
use thiserror::Error;

use crate::asset::{process_dir, process_file};
use crate::config::ToolConfig;
use crate::log;
use crate::utils::path::normalize_path;

use super::Cli;

/// Pre-flight failures, each carrying one bit of the exit status so
/// several failed checks compose into a single summed code.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("source {0} does not exist")]
    MissingSource(PathBuf),

    #[error("parent directory of target {0} does not exist")]
    MissingTargetParent(PathBuf),

    #[error("source {0} is a directory, target {1} is not")]
    TargetNotDirectory(PathBuf, PathBuf),
}

impl ValidationError {
    /// Exit-status bit for this check.
    pub const fn code(&self) -> i32 {
        match self {
            Self::MissingSource(_) => 2,
            Self::MissingTargetParent(_) => 4,
            Self::TargetNotDirectory(_, _) => 8,
        }
    }
}

/// Validate source and target, dispatch to the single-file processor or
/// the directory walker.
///
/// Exits the process directly on usage errors (status 1) and validation
/// failures (summed bitmask status); no I/O has happened at that point.
pub fn run(cli: &Cli, config: &ToolConfig) -> Result<()> {
    if !cli.auto && (cli.source.is_none() || cli.target.is_none()) {
        log!("error"; "you need to specify either --auto or both --source and --target");
        Cli::command().print_help().ok();
        process::exit(1);
    }

    let source = normalize_path(cli.source.as_deref().unwrap_or(&config.source_dir));
    let target = normalize_path(cli.target.as_deref().unwrap_or(&config.target_dir));

    let failures = validate(&source, &target);
    if !failures.is_empty() {
        let mut status = 0;
        for failure in &failures {
            log!("error"; "{failure}");
            status |= failure.code();
        }
        log!("error"; "aborting");
        process::exit(status);
    }

    if source.is_file() {
        log!("run"; "source {} is a file, processing one file only", source.display());
        process_file(&source, &target, cli.store_minified(), config)
    } else {
        log!("run"; "source {} is a directory, searching for asset files", source.display());
        process_dir(&source, &target, !cli.flat, cli.store_minified(), config)
    }
}

/// Run every pre-flight check and collect the failures.
fn validate(source: &Path, target: &Path) -> Vec<ValidationError> {
    let mut failures = Vec::new();
    if !source.exists() {
        failures.push(ValidationError::MissingSource(source.to_path_buf()));
    }
    if !target.parent().is_some_and(Path::is_dir) {
        failures.push(ValidationError::MissingTargetParent(target.to_path_buf()));
    }
    if source.is_dir() && !target.is_dir() {
        failures.push(ValidationError::TargetNotDirectory(
            source.to_path_buf(),
            target.to_path_buf(),
        ));
    }
    failures
}
