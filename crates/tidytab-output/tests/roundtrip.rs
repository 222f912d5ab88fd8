//! Round-trip tests: serialized tables parse back to equal tables.

use proptest::prelude::*;
use tidytab_ingest::parse;
use tidytab_model::{Row, Table};
use tidytab_output::serialize;

fn table(header: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(header.iter().map(|h| (*h).to_string()).collect());
    for values in rows {
        table.push_row(Row::new(values.iter().map(|v| (*v).to_string()).collect()));
    }
    table
}

fn roundtrip(input: &Table) -> Table {
    let text = serialize(input).expect("serialize");
    parse(&text).expect("parse serialized output")
}

#[test]
fn plain_table_round_trips() {
    let input = table(&["name", "age"], &[&["alice", "30"], &["bob", "41"]]);
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn quoted_content_round_trips() {
    let input = table(
        &["a", "b"],
        &[
            &["x,y", "he said \"hi\""],
            &["line\nbreak", "plain"],
            &[" leading and trailing ", ""],
        ],
    );
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn duplicate_rows_survive_round_trip() {
    let input = table(&["a"], &[&["same"], &["same"], &["same"]]);
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn empty_table_round_trips_to_empty_table() {
    assert_eq!(roundtrip(&Table::empty()), Table::empty());
}

proptest! {
    #[test]
    fn arbitrary_tables_round_trip(
        header_len in 2usize..=4,
        raw_rows in proptest::collection::vec(
            proptest::collection::vec("[a-zA-Z0-9 ,\"']{0,8}", 4),
            1..=8,
        ),
    ) {
        let header: Vec<String> = (0..header_len).map(|i| format!("c{i}")).collect();
        let mut input = Table::new(header);
        for raw in raw_rows {
            input.push_row(Row::new(raw.into_iter().take(header_len).collect()));
        }
        let output = roundtrip(&input);
        assert_eq!(output, input);
    }
}
