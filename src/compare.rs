//! Field-by-field comparison of two saved calculations.

use serde::Serialize;

use crate::record::{LogRecord, LOG_HEADERS, TEXT_FIELDS};
use crate::store::Row;

/// One compared field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldDiff {
    /// Field name.
    pub field: &'static str,
    /// Raw text in the first record.
    pub before: String,
    /// Raw text in the second record.
    pub after: String,
    /// `after − before`, absent when either side is not numeric.
    pub delta: Option<f64>,
}

impl FieldDiff {
    /// Whether the field holds the same number on both sides.
    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.delta == Some(0.0)
    }
}

/// Compare every numeric log field of two stored rows.
///
/// # Examples
/// ```
/// use rollcentre::{compare_rows, Row};
///
/// let a: Row = [("front_rc_height", "1.5")].into_iter().collect();
/// let b: Row = [("front_rc_height", "2.0")].into_iter().collect();
/// let diffs = compare_rows(&a, &b);
/// let front = diffs.iter().find(|d| d.field == "front_rc_height").expect("tracked");
/// assert_eq!(front.delta, Some(0.5));
/// ```
#[must_use]
pub fn compare_rows(a: &Row, b: &Row) -> Vec<FieldDiff> {
    LOG_HEADERS
        .iter()
        .copied()
        .filter(|field| !TEXT_FIELDS.contains(field))
        .map(|field| FieldDiff {
            field,
            before: a.get(field).unwrap_or_default().to_owned(),
            after: b.get(field).unwrap_or_default().to_owned(),
            delta: a
                .number(field)
                .zip(b.number(field))
                .map(|(before, after)| after - before),
        })
        .collect()
}

/// Compare two records through their stored form.
///
/// # Examples
/// ```
/// use rollcentre::{changed_fields, compare_records, LogRecord, SuspensionSetup};
///
/// let before = SuspensionSetup::default();
/// let mut after = before;
/// after.rear.upper_link_frame_height += 2.0;
///
/// let diffs = compare_records(
///     &LogRecord::capture("Car 7", "", "", "", before),
///     &LogRecord::capture("Car 7", "", "", "", after),
/// );
/// let changed = changed_fields(&diffs);
/// assert_eq!(changed[0].field, "r_upper_link_frame_height");
/// assert_eq!(changed[0].delta, Some(2.0));
/// ```
#[must_use]
pub fn compare_records(a: &LogRecord, b: &LogRecord) -> Vec<FieldDiff> {
    compare_rows(&a.to_row(), &b.to_row())
}

/// Only the fields whose values differ or cannot be compared.
#[must_use]
pub fn changed_fields(diffs: &[FieldDiff]) -> Vec<&FieldDiff> {
    diffs.iter().filter(|diff| !diff.is_unchanged()).collect()
}
