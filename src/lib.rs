//! Benchmark result comparison for the speed-tool CI gate.
//! Loads a baseline and a current result file, lines their benchmarks up and
//! reports those whose average per-call latency regressed by 15% or more.

pub mod align;
pub mod compare;
pub mod config;
pub mod errors;
pub mod ignore_list;
pub mod latency;
pub mod loader;
pub mod report;
pub mod table;

pub use crate::align::{AlignedPair, align_rows};
pub use crate::compare::{Comparison, compare_files, compare_tables, significant_regressions};
pub use crate::config::{CommandLineConfig, CompareConfig, REGRESSION_THRESHOLD};
pub use crate::errors::CompareError;
pub use crate::ignore_list::{IGNORED_BENCHMARKS, IgnoreList};
pub use crate::loader::{InputFormat, load_table};
pub use crate::report::{report_path, write_report};
pub use crate::table::{BenchmarkRow, ResultTable};
