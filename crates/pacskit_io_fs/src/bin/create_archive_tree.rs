//! Pre-create the document archive calendar tree under the current directory.
//!
//! Flip `DRY_RUN` to `false` to create directories instead of listing them.

use std::process::ExitCode;

use pacskit_io_fs::{
    EnumArchiveTreeMode, ReportArchiveTree, SpecArchiveTreeOptions, create_archive_tree,
};

const DRY_RUN: bool = true;

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();

    let options = SpecArchiveTreeOptions {
        mode: if DRY_RUN {
            EnumArchiveTreeMode::DryRun
        } else {
            EnumArchiveTreeMode::Apply
        },
        ..SpecArchiveTreeOptions::default()
    };

    match create_archive_tree(".", &options) {
        Ok(report) => {
            for c_line in derive_listing(&report, options.mode) {
                println!("{c_line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Paths to echo: listed in dry-run, silent when applying.
fn derive_listing(report: &ReportArchiveTree, mode: EnumArchiveTreeMode) -> Vec<String> {
    match mode {
        EnumArchiveTreeMode::DryRun => report
            .paths
            .iter()
            .map(|path| path.display().to_string())
            .collect(),
        EnumArchiveTreeMode::Apply => Vec::new(),
    }
}
