use std::path::PathBuf;

use crate::{
    errors::CompareError, ignore_list::IgnoreList, loader::InputFormat,
    report::report_path,
};

/// Fractional slowdown in average latency at which a benchmark counts as
/// regressed.
pub const REGRESSION_THRESHOLD: f64 = 0.15;

#[derive(Clone, Debug, PartialEq)]
pub struct CompareConfig {
    pub threshold: f64,
    pub ignore: IgnoreList,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            threshold: REGRESSION_THRESHOLD,
            ignore: IgnoreList::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub baseline: PathBuf,
    pub current: PathBuf,
    pub output: PathBuf,
}

impl CommandLineConfig {
    /// Parses `args` including the program name in position 0.
    pub fn from_args(args: &[&str]) -> Result<Self, CompareError> {
        let [_, baseline, current, output] = args else {
            return Err(CompareError::usage(Self::usage()));
        };
        let baseline = PathBuf::from(*baseline);
        let current = PathBuf::from(*current);
        InputFormat::from_path(&baseline)?;
        InputFormat::from_path(&current)?;
        Ok(Self {
            baseline,
            current,
            output: report_path(*output),
        })
    }

    pub fn usage() -> &'static str {
        "Usage: compare_results [file1] [file2] [output filename]"
    }
}
