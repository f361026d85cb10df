// Property tests: duplicate_rows against a brute-force pairwise oracle.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test -p dupcheck-engine --release

use dupcheck_engine::{CellValue, Table};
use proptest::prelude::*;

const COLUMNS: [&str; 3] = ["a", "b", "c"];

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    // Small domains so collisions are common
    prop_oneof![
        Just(CellValue::Empty),
        (0u8..3).prop_map(|n| CellValue::Number(n as f64)),
        (0u8..2).prop_map(|n| CellValue::Date(45000.0 + n as f64)),
        "[xy]".prop_map(CellValue::Text),
        any::<bool>().prop_map(CellValue::Bool),
    ]
}

fn table_strategy() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec(cell_strategy(), 3), 0..12).prop_map(|rows| {
        let mut table = Table::new(COLUMNS.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row).unwrap();
        }
        table
    })
}

fn subset_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop::sample::subsequence(COLUMNS.to_vec(), 0..=3)
}

/// Row i qualifies iff some other row j agrees on every column in the subset.
fn oracle(table: &Table, subset: &[&str]) -> Vec<Vec<CellValue>> {
    let idx: Vec<usize> = subset.iter().map(|c| table.column_index(c).unwrap()).collect();
    let rows = table.rows();
    rows.iter()
        .enumerate()
        .filter(|(i, r)| {
            rows.iter()
                .enumerate()
                .any(|(j, o)| *i != j && idx.iter().all(|&k| r[k].key() == o[k].key()))
        })
        .map(|(_, r)| r.clone())
        .collect()
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn duplicate_rows_matches_pairwise_oracle(table in table_strategy(), subset in subset_strategy()) {
        let found = table.duplicate_rows(&subset).unwrap();
        let expected = oracle(&table, &subset);
        prop_assert_eq!(found.rows(), expected.as_slice());
    }

    #[test]
    fn duplicate_rows_is_deterministic(table in table_strategy(), subset in subset_strategy()) {
        let first = table.duplicate_rows(&subset).unwrap();
        let second = table.duplicate_rows(&subset).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn unknown_column_is_always_rejected(table in table_strategy(), subset in subset_strategy()) {
        let mut subset = subset;
        subset.push("missing");
        prop_assert!(table.duplicate_rows(&subset).is_err());
    }
}
