use std::collections::HashSet;

use tracing::debug;

use crate::table::ResultTable;

#[derive(Clone, Debug, PartialEq)]
pub struct AlignedPair {
    pub first: ResultTable,
    pub second: ResultTable,
}

/// Restricts both tables to benchmarks present in each, keyed on the first
/// column. The larger table is filtered first; the second pass only matters
/// when the smaller one carries keys the larger lacks.
pub fn align_rows(mut first: ResultTable, mut second: ResultTable) -> AlignedPair {
    let (before_first, before_second) = (first.len(), second.len());
    if first.len() > second.len() {
        retain_shared(&mut first, &second);
        retain_shared(&mut second, &first);
    } else {
        retain_shared(&mut second, &first);
        retain_shared(&mut first, &second);
    }
    debug!(
        before_first,
        before_second,
        after_first = first.len(),
        after_second = second.len(),
        "aligned result tables"
    );
    AlignedPair { first, second }
}

fn retain_shared(table: &mut ResultTable, other: &ResultTable) {
    let keys: HashSet<String> = other.keys().into_iter().map(str::to_string).collect();
    table.retain_keys(&keys);
}
