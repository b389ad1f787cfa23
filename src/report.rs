use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{errors::CompareError, table::ResultTable};

/// Appends `.csv` to `name` unless it already ends with it.
pub fn report_path(name: &str) -> PathBuf {
    if name.ends_with(".csv") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.csv"))
    }
}

/// The title line naming both inputs, padded to the width of the four
/// columns each side of the report starts with.
pub fn title_line(baseline: &Path, current: &Path) -> String {
    format!("{},,,,{},,,,", baseline.display(), current.display())
}

/// Writes the title line followed by `table` as csv with a header row.
/// The file is closed when the writer drops, on success and failure alike.
pub fn write_report(
    path: &Path,
    baseline: &Path,
    current: &Path,
    table: &ResultTable,
) -> Result<(), CompareError> {
    let mut file = File::create(path).map_err(|e| CompareError::io(path, e))?;
    writeln!(file, "{}", title_line(baseline, current)).map_err(|e| CompareError::io(path, e))?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(table.columns())
        .map_err(|e| CompareError::csv(path, e))?;
    for row in table.rows() {
        writer
            .write_record(row)
            .map_err(|e| CompareError::csv(path, e))?;
    }
    writer.flush().map_err(|e| CompareError::io(path, e))?;
    info!(path = %path.display(), rows = table.len(), "wrote regression report");
    Ok(())
}
