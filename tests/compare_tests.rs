use bench_compare::{
    CompareConfig, IgnoreList, ResultTable, align_rows,
    compare::{PERCENTAGE_DIFFERENCE, find_regressions},
    compare_tables, significant_regressions,
};

fn table(rows: &[(&str, &str, &str)]) -> ResultTable {
    ResultTable::new(
        vec![
            "description".into(),
            "numCalls".into(),
            "microseconds".into(),
        ],
        rows.iter()
            .map(|(d, c, m)| vec![d.to_string(), c.to_string(), m.to_string()])
            .collect(),
    )
    .expect("table")
}

fn percentage(table: &ResultTable, row: usize) -> f64 {
    table
        .cell(row, PERCENTAGE_DIFFERENCE)
        .expect("percentage column")
        .parse()
        .expect("numeric percentage")
}

#[test]
fn test_twenty_percent_regression_is_reported() {
    let baseline = table(&[("opA", "100", "10000")]);
    let current = table(&[("opA", "100", "12000")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(result.significant);
    assert_eq!(result.regressions.len(), 1);
    assert_eq!(result.regressions.cell(0, "description.1"), Some("opA"));
    assert!((percentage(&result.regressions, 0) - 20.0).abs() < 1e-9);
}

#[test]
fn test_exact_threshold_is_inclusive() {
    let baseline = table(&[("opA", "100", "10000")]);
    let current = table(&[("opA", "100", "11500")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert_eq!(result.regressions.len(), 1);
    assert!(result.significant);
}

#[test]
fn test_just_below_threshold_is_excluded() {
    let baseline = table(&[("opA", "100", "10000")]);
    let current = table(&[("opA", "100", "11499")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(result.is_empty());
    assert!(!result.significant);
}

#[test]
fn test_improvements_are_not_regressions() {
    let baseline = table(&[("opA", "100", "10000"), ("opB", "10", "1000")]);
    let current = table(&[("opA", "100", "5000"), ("opB", "10", "1000")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_average_uses_call_counts() {
    // Same total time over half the calls doubles the per-call latency.
    let baseline = table(&[("opA", "200", "10000")]);
    let current = table(&[("opA", "100", "10000")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!((percentage(&result.regressions, 0) - 100.0).abs() < 1e-9);
}

#[test]
fn test_disjoint_tables_produce_empty_result() {
    let baseline = table(&[("opA", "100", "100"), ("opB", "100", "100")]);
    let current = table(&[("opC", "100", "900")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(result.is_empty());
    assert!(!result.significant);
}

#[test]
fn test_disjoint_tables_of_equal_size_produce_empty_result() {
    let baseline = table(&[("opA", "100", "100")]);
    let current = table(&[("opC", "100", "900")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_align_filters_larger_table() {
    let baseline = table(&[("opA", "1", "1"), ("opB", "1", "1"), ("opC", "1", "1")]);
    let current = table(&[("opA", "1", "1"), ("opC", "1", "1")]);
    let aligned = align_rows(baseline, current);
    assert_eq!(aligned.first.len(), 2);
    assert_eq!(aligned.first.key(0), Some("opA"));
    assert_eq!(aligned.first.key(1), Some("opC"));
    assert_eq!(aligned.second.len(), 2);
}

#[test]
fn test_extra_rows_in_current_run_are_ignored() {
    let baseline = table(&[("opA", "100", "10000")]);
    let current = table(&[("opA", "100", "10000"), ("opNew", "1", "999999")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_zero_call_counts_do_not_panic() {
    let baseline = table(&[("opA", "0", "0"), ("opB", "100", "100")]);
    let current = table(&[("opA", "0", "0"), ("opB", "100", "200")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert_eq!(result.regressions.len(), 1);
    assert_eq!(result.regressions.cell(0, "description.1"), Some("opB"));
}

#[test]
fn test_report_columns_are_suffixed() {
    let baseline = table(&[("opA", "100", "10000")]);
    let current = table(&[("opA", "100", "12000")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert_eq!(
        result.regressions.columns(),
        [
            "description.1",
            "numCalls.1",
            "microseconds.1",
            "description.2",
            "numCalls.2",
            "microseconds.2",
            "Percentage Difference",
        ]
    );
}

#[test]
fn test_ignored_regressions_are_not_significant_but_still_reported() {
    let name = "TrustToken-Exp1-Batch1 issue";
    let baseline = table(&[(name, "10", "100"), ("opA", "10", "100")]);
    let current = table(&[(name, "10", "500"), ("opA", "10", "100")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(!result.significant);
    assert_eq!(result.regressions.len(), 1);
    assert_eq!(result.regressions.cell(0, "description.1"), Some(name));
}

#[test]
fn test_one_unignored_regression_is_significant() {
    let ignored = "TrustToken-Exp2PMB-Batch10 redeem";
    let baseline = table(&[(ignored, "10", "100"), ("opA", "10", "100")]);
    let current = table(&[(ignored, "10", "500"), ("opA", "10", "200")]);
    let result = compare_tables(baseline, current, &CompareConfig::default()).unwrap();
    assert!(result.significant);
    assert_eq!(result.regressions.len(), 2);
}

#[test]
fn test_custom_config_threshold_and_ignore_list() {
    let config = CompareConfig {
        threshold: 0.5,
        ignore: IgnoreList::new(["opB"]),
    };
    let baseline = table(&[("opA", "10", "100"), ("opB", "10", "100")]);
    let current = table(&[("opA", "10", "140"), ("opB", "10", "300")]);
    let result = compare_tables(baseline, current, &config).unwrap();
    assert_eq!(result.regressions.len(), 1);
    assert!(!result.significant);
}

#[test]
fn test_significance_of_empty_set_is_false() {
    let empty = table(&[]).with_suffix(".1");
    assert!(!significant_regressions(&empty, &IgnoreList::default()).unwrap());
}

#[test]
fn test_find_regressions_requires_count_columns() {
    let first = ResultTable::new(
        vec!["description.1".into(), "microseconds.1".into()],
        vec![vec!["opA".into(), "1".into()]],
    )
    .unwrap();
    let second = first.clone();
    assert!(find_regressions(&first, &second, 0.15).is_err());
}
