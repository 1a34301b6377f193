//! Archive tree report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Aggregate counters and reported paths for one `create_archive_tree` run.
#[derive(Debug, Default, Clone)]
pub struct ReportArchiveTree {
    /// Reported paths in creation order.
    pub paths: Vec<PathBuf>,
    /// Number of planned (reported) directories.
    pub cnt_planned: u64,
    /// Number of directories created in apply mode.
    pub cnt_created: u64,
    /// Number of directories that already existed in apply mode.
    pub cnt_existing: u64,
}

impl ReportArchiveTree {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_planned".to_string(), self.cnt_planned);
        dict_counts.insert("cnt_created".to_string(), self.cnt_created);
        dict_counts.insert("cnt_existing".to_string(), self.cnt_existing);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} planned={} created={} existing={}",
            self.cnt_planned, self.cnt_created, self.cnt_existing
        )
    }
}

impl fmt::Display for ReportArchiveTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[TREE]"))
    }
}

/// Mutable accumulator for archive tree statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportArchiveTreeBuilder {
    paths: Vec<PathBuf>,
    cnt_created: u64,
    cnt_existing: u64,
}

impl ReportArchiveTreeBuilder {
    /// Record one reported path.
    pub fn add_planned(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    /// Increment created count by one.
    pub fn add_created(&mut self) {
        self.cnt_created += 1;
    }

    /// Increment existing count by one.
    pub fn add_existing(&mut self) {
        self.cnt_existing += 1;
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportArchiveTree {
        ReportArchiveTree {
            cnt_planned: self.paths.len() as u64,
            paths: self.paths,
            cnt_created: self.cnt_created,
            cnt_existing: self.cnt_existing,
        }
    }
}
