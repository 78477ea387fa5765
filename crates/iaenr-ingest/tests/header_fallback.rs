use std::fs;

use iaenr_ingest::{FALLBACK_HEADER_ROW, HeaderRow, read_raw_table};
use tempfile::TempDir;

#[test]
fn unrecognised_layout_uses_fifth_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("district_2015.csv");
    fs::write(
        &path,
        "Certified Enrollment\n\
         Fall 2014\n\
         Iowa Department of Education\n\
         Bureau of Information and Analysis\n\
         LEA,LEA NAME,ENROLLED\n\
         9,Adair-Casey,300\n",
    )
    .unwrap();

    let table = read_raw_table(&path, HeaderRow::Detect).unwrap();
    assert_eq!(FALLBACK_HEADER_ROW, 4);
    assert_eq!(table.headers, vec!["LEA", "LEA NAME", "ENROLLED"]);
    assert_eq!(table.height(), 1);
    assert_eq!(table.cell(0, 1), Some("Adair-Casey"));
}

#[test]
fn header_below_probe_window_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("district_2015.csv");
    let mut contents = "note\n".repeat(12);
    contents.push_str("DISTRICT_CODE,TOTAL_PK12\n9,300\n");
    fs::write(&path, contents).unwrap();

    let table = read_raw_table(&path, HeaderRow::Detect).unwrap();
    assert_eq!(table.headers, vec!["note"]);
}
