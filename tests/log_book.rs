#![warn(clippy::pedantic)]

use pretty_assertions::assert_eq;
use rollcentre::{
    compare_rows, JsonSheet, LogBook, LogRecord, RearGeometryInput, RowIndex, Sheet, StoreError,
    SuspensionSetup, LOG_HEADERS,
};

fn record(chassis: &str, track: &str, frame_height: f64) -> LogRecord {
    let setup = SuspensionSetup {
        rear: RearGeometryInput {
            upper_link_frame_height: frame_height,
            ..RearGeometryInput::default()
        },
        ..SuspensionSetup::default()
    };
    LogRecord::capture(chassis, "2024-06-14", track, "baseline", setup)
}

#[test]
fn records_survive_a_round_trip_through_the_file() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let mut book = LogBook::new(JsonSheet::table(dir.path(), "roll_centres"));

    let saved = record("Car 7", "Eldora", 18.0);
    let index = book.save(&saved).expect("append succeeds");
    assert_eq!(index, RowIndex(0));

    let reopened = LogBook::new(JsonSheet::table(dir.path(), "roll_centres"));
    let entries = reopened.entries().expect("read succeeds");
    assert_eq!(entries, vec![(RowIndex(0), saved)]);
}

#[test]
fn stored_rows_carry_the_log_headers() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let mut sheet = JsonSheet::table(dir.path(), "roll_centres");
    let mut book = LogBook::new(sheet.clone());
    book.save(&record("Car 7", "Eldora", 18.0)).expect("append succeeds");

    let rows = sheet.read_all().expect("read succeeds");
    let row = rows.first().expect("one row");
    for header in LOG_HEADERS {
        assert!(row.get(header).is_some(), "missing {header}");
    }
    assert_eq!(row.get("rear_rc_height"), Some("19"));

    sheet.delete(RowIndex(0)).expect("row exists");
    assert!(sheet.read_all().expect("read succeeds").is_empty());
}

#[test]
fn deleting_one_entry_keeps_the_rest_in_order() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let mut book = LogBook::new(JsonSheet::table(dir.path(), "roll_centres"));
    for (chassis, track) in [
        ("Car 7", "Eldora"),
        ("Car 12", "Knoxville"),
        ("Car 7", "Williams Grove"),
    ] {
        book.save(&record(chassis, track, 18.0)).expect("append succeeds");
    }

    book.delete(RowIndex(1)).expect("row exists");
    let tracks: Vec<String> = book
        .entries()
        .expect("read succeeds")
        .into_iter()
        .map(|(_, record)| record.track)
        .collect();
    assert_eq!(tracks, vec!["Eldora".to_owned(), "Williams Grove".to_owned()]);

    let error = book.delete(RowIndex(5)).expect_err("no such row");
    assert!(matches!(error, StoreError::UnknownRow(RowIndex(5))));
}

#[test]
fn chassis_filter_keeps_original_row_indices() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let mut book = LogBook::new(JsonSheet::table(dir.path(), "roll_centres"));
    book.save(&record("Car 12", "Knoxville", 18.0)).expect("append succeeds");
    book.save(&record("Car 7", "Eldora", 18.0)).expect("append succeeds");

    let entries = book.entries_for_chassis("Car 7").expect("read succeeds");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, RowIndex(1));
}

#[test]
fn saved_rows_compare_field_by_field() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let mut book = LogBook::new(JsonSheet::table(dir.path(), "roll_centres"));
    let first = book.save(&record("Car 7", "Eldora", 18.0)).expect("append succeeds");
    let second = book.save(&record("Car 7", "Eldora", 19.0)).expect("append succeeds");

    let diffs = compare_rows(
        &book.row(first).expect("row exists"),
        &book.row(second).expect("row exists"),
    );
    let rear = diffs
        .iter()
        .find(|diff| diff.field == "rear_rc_height")
        .expect("tracked field");
    assert_eq!(rear.before, "19");
    assert_eq!(rear.after, "20.5");
    assert_eq!(rear.delta, Some(1.5));
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().expect("temporary directory");
    let sheet = JsonSheet::table(dir.path(), "roll_centres");
    std::fs::write(sheet.path(), "{ not json").expect("write succeeds");
    assert!(matches!(sheet.read_all(), Err(StoreError::Json(_))));
}
