//! Archive tree planning and creation.

use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Component, Path, PathBuf};

use crate::conf::{RANGE_DAYS, RANGE_MONTHS};
use crate::report::{ReportArchiveTree, ReportArchiveTreeBuilder};
use crate::spec::{ArchiveTreeError, EnumArchiveTreeMode, SpecArchiveTreeOptions};

/// Enumerate every `<table>/<year>/<MM>/<DD>` level under `dir_root`.
///
/// Order is depth-first: table, then each year followed by its months, each
/// month followed by its days. Every table contributes
/// `1 + n_years * (1 + 12 + 12 * 31)` paths.
pub fn plan_archive_tree_paths(
    dir_root: &Path,
    tables: &[String],
    years: Range<i32>,
) -> Vec<PathBuf> {
    let mut l_paths = Vec::new();
    for c_table in tables {
        l_paths.push(dir_root.join(c_table));
        l_paths.extend(plan_table_paths(dir_root, c_table, years.clone()));
    }
    l_paths
}

fn plan_table_paths(dir_root: &Path, table: &str, years: Range<i32>) -> Vec<PathBuf> {
    let path_table = dir_root.join(table);
    let mut l_paths = Vec::new();
    for n_year in years {
        let path_year = path_table.join(n_year.to_string());
        l_paths.push(path_year.clone());
        for n_month in RANGE_MONTHS {
            let path_month = path_year.join(format!("{n_month:02}"));
            l_paths.push(path_month.clone());
            for n_day in RANGE_DAYS {
                l_paths.push(path_month.join(format!("{n_day:02}")));
            }
        }
    }
    l_paths
}

/// Ensure the calendar tree exists under `dir_root`.
///
/// Only the table level is existence-checked before being reported: an
/// existing table directory is neither reported nor recreated. Year, month and
/// day levels are always reported. In [`EnumArchiveTreeMode::Apply`], a
/// directory that already exists counts as existing rather than failing, so
/// re-running after a partial run completes the tree.
///
/// Returns [`ArchiveTreeError`] on invalid options or the first directory that
/// cannot be created.
pub fn create_archive_tree<P>(
    dir_root: P,
    options: &SpecArchiveTreeOptions,
) -> Result<ReportArchiveTree, ArchiveTreeError>
where
    P: AsRef<Path>,
{
    validate_archive_tree_options(options)?;

    let path_dir_root = dir_root.as_ref();
    let mut builder_report = ReportArchiveTreeBuilder::default();

    for c_table in &options.tables {
        let path_table = path_dir_root.join(c_table);
        if path_table.exists() {
            if !path_table.is_dir() {
                return Err(ArchiveTreeError::NotADirectory(path_table));
            }
            tracing::debug!(path = %path_table.display(), "table directory already present");
        } else {
            visit_path(&path_table, options.mode, &mut builder_report)?;
        }

        for path_sub in plan_table_paths(path_dir_root, c_table, options.years.clone()) {
            visit_path(&path_sub, options.mode, &mut builder_report)?;
        }
    }

    let report = builder_report.build();
    tracing::info!(mode = ?options.mode, "{report}");
    Ok(report)
}

fn visit_path(
    path_dir: &Path,
    mode: EnumArchiveTreeMode,
    builder_report: &mut ReportArchiveTreeBuilder,
) -> Result<(), ArchiveTreeError> {
    tracing::debug!(path = %path_dir.display(), "archive path");
    builder_report.add_planned(path_dir.to_path_buf());

    match mode {
        EnumArchiveTreeMode::DryRun => Ok(()),
        EnumArchiveTreeMode::Apply => ensure_directory(path_dir, builder_report),
    }
}

fn ensure_directory(
    path_dir: &Path,
    builder_report: &mut ReportArchiveTreeBuilder,
) -> Result<(), ArchiveTreeError> {
    match fs::create_dir(path_dir) {
        Ok(()) => {
            builder_report.add_created();
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            if !path_dir.is_dir() {
                return Err(ArchiveTreeError::NotADirectory(path_dir.to_path_buf()));
            }
            builder_report.add_existing();
            Ok(())
        }
        Err(e) => Err(ArchiveTreeError::CreateDirFailed {
            path: path_dir.to_path_buf(),
            source: e,
        }),
    }
}

fn validate_archive_tree_options(options: &SpecArchiveTreeOptions) -> Result<(), ArchiveTreeError> {
    if options.tables.is_empty() {
        return Err(ArchiveTreeError::InvalidOptions(
            "Arg `tables` must contain at least one name.".to_string(),
        ));
    }
    for c_table in &options.tables {
        let mut iter_components = Path::new(c_table).components();
        let if_single_normal = matches!(iter_components.next(), Some(Component::Normal(_)))
            && iter_components.next().is_none();
        if !if_single_normal {
            return Err(ArchiveTreeError::InvalidOptions(format!(
                "Table name must be a single path component: {c_table:?}"
            )));
        }
    }
    if options.years.is_empty() {
        return Err(ArchiveTreeError::InvalidOptions(format!(
            "Arg `years` must not be empty: {:?}",
            options.years
        )));
    }
    Ok(())
}
