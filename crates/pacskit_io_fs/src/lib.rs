//! `pacskit_io_fs` v1:
//! Calendar-partitioned archive directory generator.
//!
//! - `tree`   : path planning and directory creation
//! - `spec`   : enums/options/errors
//! - `report` : run-time report model
//! - `conf`   : fixed calendar ranges

pub mod conf;
pub mod report;
pub mod spec;
pub mod tree;

pub use conf::{RANGE_DAYS, RANGE_MONTHS};
pub use report::{ReportArchiveTree, ReportArchiveTreeBuilder};
pub use spec::{ArchiveTreeError, EnumArchiveTreeMode, SpecArchiveTreeOptions};
pub use tree::{create_archive_tree, plan_archive_tree_paths};
