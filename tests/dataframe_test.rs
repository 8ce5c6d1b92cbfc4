use gapplot::dataframe::{merge_at_year, KEY_COLUMN};
use gapplot::io::read_csv_from_reader;
use gapplot::{DataFrame, Diagnostic, ErrorKind, Value};

fn table(text: &str) -> DataFrame {
    read_csv_from_reader(text.as_bytes()).unwrap()
}

#[test]
fn test_set_index_and_loc() {
    let life = table("country,1990,2000\nGermany,75.3,78.1\nChad,47.1,48.4\n");

    let indexed = life.set_index(KEY_COLUMN).unwrap();
    assert_eq!(life.column_count(), 3);
    assert_eq!(indexed.column_names(), &["1990", "2000"]);

    let row = indexed.loc("Chad").unwrap();
    assert_eq!(row.name().map(String::as_str), Some("Chad"));
    assert_eq!(row.get("2000"), Some(&Value::Float(48.4)));

    let err = indexed.loc("Atlantis").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
}

#[test]
fn test_merge_at_year_keeps_shared_countries() {
    let gdp = table("country,1990,2000\nGermany,30k,35k\nChad,900,1.1k\n");
    let life = table("country,1990\nGermany,75.3\nPeru,68.2\n");
    let mut sink: Vec<Diagnostic> = Vec::new();

    let merged = merge_at_year(Some(&gdp), Some(&life), 1990, &mut sink).unwrap();
    assert!(sink.is_empty());
    assert_eq!(merged.column_names(), &["country", "1990_x", "1990_y"]);
    assert_eq!(merged.row_count(), 1);

    let row = merged.row(0).unwrap();
    assert_eq!(row.get("country"), Some(&Value::Str("Germany".to_string())));
    assert_eq!(row.get("1990_x"), Some(&Value::Str("30k".to_string())));
    assert_eq!(row.get("1990_y"), Some(&Value::Float(75.3)));
}

#[test]
fn test_merge_at_missing_year() {
    let gdp = table("country,1990\nGermany,30k\n");
    let life = table("country,2000\nGermany,78.1\n");
    let mut sink: Vec<Diagnostic> = Vec::new();

    assert!(merge_at_year(Some(&gdp), Some(&life), 1990, &mut sink).is_none());
    assert_eq!(sink.len(), 1);
    assert_eq!(sink[0].operation, "merge_at_year");
    assert_eq!(sink[0].kind, ErrorKind::KeyNotFound);
    assert!(sink[0].message.contains("1990"));
}

#[test]
fn test_merge_with_absent_table() {
    let life = table("country,1990\nGermany,75.3\n");
    let mut sink: Vec<Diagnostic> = Vec::new();

    assert!(merge_at_year(None, Some(&life), 1990, &mut sink).is_none());
    assert!(merge_at_year(Some(&life), None, 1990, &mut sink).is_none());
    assert_eq!(sink.len(), 2);
    assert!(sink.iter().all(|d| d.kind == ErrorKind::ContractViolation));
}

#[test]
fn test_duplicate_and_blank_headers() {
    let df = table("country,,1990,1990\nPeru,x,1,2\n");
    assert_eq!(df.column_names(), &["country", "Unnamed: 1", "1990", "1990.1"]);
}
