//! Combined front/rear calculation and the flattened log row it is saved as.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{GeometryError, StoreError};
use crate::front::{solve_front, FrontGeometryInput, FrontSolution};
use crate::rear::{solve_rear, RearGeometryInput, RearGeometryResult};
use crate::store::{Row, RowIndex, Sheet};

/// Field names of a saved row, in column order.
pub const LOG_HEADERS: [&str; 23] = [
    "chassis",
    "date",
    "track",
    "notes",
    "f_lca_length",
    "f_uca_length",
    "f_lca_inner_height",
    "f_lca_outer_height",
    "f_uca_inner_height",
    "f_uca_outer_height",
    "f_spindle_height",
    "r_trailing_arm_length",
    "r_trailing_arm_frame_height",
    "r_trailing_arm_axle_height",
    "r_upper_link_length",
    "r_upper_link_frame_height",
    "r_upper_link_axle_height",
    "r_upper_link_frame_offset",
    "r_upper_link_axle_offset",
    "r_rear_track_half",
    "front_rc_height",
    "rear_rc_height",
    "rc_height_diff",
];

/// Leading text fields of a saved row; the rest are numeric.
pub const TEXT_FIELDS: [&str; 4] = ["chassis", "date", "track", "notes"];

/// Front and rear geometry entered together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspensionSetup {
    /// Front double A-arm geometry.
    pub front: FrontGeometryInput,
    /// Rear trailing-arm and upper-link geometry.
    pub rear: RearGeometryInput,
}

/// Solved front and rear geometry for a [`SuspensionSetup`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetupSolution {
    /// Front axle solution.
    pub front: FrontSolution,
    /// Rear axle solution.
    pub rear: RearGeometryResult,
}

impl SetupSolution {
    /// Rear minus front roll centre height.
    #[must_use]
    pub fn rc_height_diff(&self) -> f64 {
        self.rear.roll_centre_height - self.front.roll_centre_height()
    }
}

impl SuspensionSetup {
    /// Solve both axles.
    ///
    /// # Errors
    ///
    /// Returns the [`GeometryError`] from whichever axle failed first.
    pub fn solve(&self) -> Result<SetupSolution, GeometryError> {
        Ok(SetupSolution {
            front: solve_front(&self.front)?,
            rear: solve_rear(&self.rear)?,
        })
    }

    /// Roll centre heights rounded for storage, with failures read as ground.
    #[must_use]
    pub fn summary(&self) -> RollCentreSummary {
        let front = height_or_ground(solve_front(&self.front).map(|s| s.roll_centre_height()));
        let rear = height_or_ground(solve_rear(&self.rear).map(|r| r.roll_centre_height));
        RollCentreSummary::new(front, rear)
    }
}

/// Collapse a solver outcome to a height, reading failures as ground level.
///
/// This matches how saved logs have always recorded unsolvable geometry.
#[must_use]
pub fn height_or_ground(result: Result<f64, GeometryError>) -> f64 {
    match result {
        Ok(height) => height,
        Err(error) => {
            warn!(%error, "geometry could not be solved; recording ground height");
            0.0
        }
    }
}

/// Round to the three decimals saved logs carry.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Front and rear roll centre heights as saved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RollCentreSummary {
    /// Front roll centre height.
    pub front_rc_height: f64,
    /// Rear roll centre height.
    pub rear_rc_height: f64,
    /// Rear minus front.
    pub rc_height_diff: f64,
}

impl RollCentreSummary {
    /// Round both heights and their difference to three decimals.
    #[must_use]
    pub fn new(front: f64, rear: f64) -> Self {
        let front_rc_height = round3(front);
        let rear_rc_height = round3(rear);
        Self {
            front_rc_height,
            rear_rc_height,
            rc_height_diff: round3(rear_rc_height - front_rc_height),
        }
    }

    /// Which end of the car has the higher roll centre.
    #[must_use]
    pub fn balance_label(&self) -> &'static str {
        if self.rc_height_diff > 0.0 {
            "Rear higher"
        } else if self.rc_height_diff < 0.0 {
            "Front higher"
        } else {
            "Equal"
        }
    }
}

/// One saved calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Chassis identifier.
    pub chassis: String,
    /// Date label.
    pub date: String,
    /// Track or event name.
    pub track: String,
    /// Free-text notes.
    pub notes: String,
    /// Geometry that was entered.
    pub setup: SuspensionSetup,
    /// Heights that were calculated.
    pub summary: RollCentreSummary,
}

impl LogRecord {
    /// Solve `setup` and capture it with its labels.
    #[must_use]
    pub fn capture(
        chassis: impl Into<String>,
        date: impl Into<String>,
        track: impl Into<String>,
        notes: impl Into<String>,
        setup: SuspensionSetup,
    ) -> Self {
        Self {
            chassis: chassis.into(),
            date: date.into(),
            track: track.into(),
            notes: notes.into(),
            summary: setup.summary(),
            setup,
        }
    }

    /// Numeric fields in [`LOG_HEADERS`] order, after the text fields.
    #[must_use]
    pub fn numeric_fields(&self) -> [(&'static str, f64); 19] {
        let front = &self.setup.front;
        let rear = &self.setup.rear;
        [
            ("f_lca_length", front.lca_length),
            ("f_uca_length", front.uca_length),
            ("f_lca_inner_height", front.lca_inner_height),
            ("f_lca_outer_height", front.lca_outer_height),
            ("f_uca_inner_height", front.uca_inner_height),
            ("f_uca_outer_height", front.uca_outer_height),
            ("f_spindle_height", front.half_track),
            ("r_trailing_arm_length", rear.trailing_arm_length),
            ("r_trailing_arm_frame_height", rear.trailing_arm_frame_height),
            ("r_trailing_arm_axle_height", rear.trailing_arm_axle_height),
            ("r_upper_link_length", rear.upper_link_length),
            ("r_upper_link_frame_height", rear.upper_link_frame_height),
            ("r_upper_link_axle_height", rear.upper_link_axle_height),
            ("r_upper_link_frame_offset", rear.upper_link_frame_offset),
            ("r_upper_link_axle_offset", rear.upper_link_axle_offset),
            ("r_rear_track_half", rear.rear_track_half),
            ("front_rc_height", self.summary.front_rc_height),
            ("rear_rc_height", self.summary.rear_rc_height),
            ("rc_height_diff", self.summary.rc_height_diff),
        ]
    }

    /// Flatten into a stored row.
    #[must_use]
    pub fn to_row(&self) -> Row {
        let mut row: Row = [
            ("chassis", self.chassis.as_str()),
            ("date", self.date.as_str()),
            ("track", self.track.as_str()),
            ("notes", self.notes.as_str()),
        ]
        .into_iter()
        .collect();
        for (field, value) in self.numeric_fields() {
            row.insert(field, value.to_string());
        }
        row
    }

    /// Rebuild from a stored row. Missing text reads as empty and missing or
    /// non-numeric numbers read as zero.
    #[must_use]
    pub fn from_row(row: &Row) -> Self {
        let text = |field: &str| row.get(field).unwrap_or_default().to_owned();
        let number = |field: &str| row.number(field).unwrap_or(0.0);
        Self {
            chassis: text("chassis"),
            date: text("date"),
            track: text("track"),
            notes: text("notes"),
            setup: SuspensionSetup {
                front: FrontGeometryInput {
                    lca_length: number("f_lca_length"),
                    uca_length: number("f_uca_length"),
                    lca_inner_height: number("f_lca_inner_height"),
                    lca_outer_height: number("f_lca_outer_height"),
                    uca_inner_height: number("f_uca_inner_height"),
                    uca_outer_height: number("f_uca_outer_height"),
                    half_track: number("f_spindle_height"),
                    wheel_travel: 0.0,
                    body_roll_deg: 0.0,
                },
                rear: RearGeometryInput {
                    trailing_arm_length: number("r_trailing_arm_length"),
                    trailing_arm_frame_height: number("r_trailing_arm_frame_height"),
                    trailing_arm_axle_height: number("r_trailing_arm_axle_height"),
                    upper_link_length: number("r_upper_link_length"),
                    upper_link_frame_height: number("r_upper_link_frame_height"),
                    upper_link_axle_height: number("r_upper_link_axle_height"),
                    upper_link_frame_offset: number("r_upper_link_frame_offset"),
                    upper_link_axle_offset: number("r_upper_link_axle_offset"),
                    rear_track_half: number("r_rear_track_half"),
                },
            },
            summary: RollCentreSummary {
                front_rc_height: number("front_rc_height"),
                rear_rc_height: number("rear_rc_height"),
                rc_height_diff: number("rc_height_diff"),
            },
        }
    }
}

/// Saved calculations kept in a [`Sheet`].
///
/// Records are only ever appended or deleted; saving again adds a new row.
#[derive(Debug)]
pub struct LogBook<S: Sheet> {
    /// Backing table.
    sheet: S,
}

impl<S: Sheet> LogBook<S> {
    /// Wrap a sheet.
    pub fn new(sheet: S) -> Self {
        Self { sheet }
    }

    /// Append a record and return where it landed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the sheet cannot be written.
    pub fn save(&mut self, record: &LogRecord) -> Result<RowIndex, StoreError> {
        self.sheet.append(record.to_row())
    }

    /// Every saved record with its row index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the sheet cannot be read.
    pub fn entries(&self) -> Result<Vec<(RowIndex, LogRecord)>, StoreError> {
        Ok(self
            .sheet
            .read_all()?
            .iter()
            .enumerate()
            .map(|(index, row)| (RowIndex(index), LogRecord::from_row(row)))
            .collect())
    }

    /// Saved records for one chassis, keeping their row indices.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the sheet cannot be read.
    pub fn entries_for_chassis(
        &self,
        chassis: &str,
    ) -> Result<Vec<(RowIndex, LogRecord)>, StoreError> {
        let mut entries = self.entries()?;
        entries.retain(|(_, record)| record.chassis == chassis);
        Ok(entries)
    }

    /// Raw row at `index`, for comparisons that need the stored text.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownRow`] when no row is stored at `index`.
    pub fn row(&self, index: RowIndex) -> Result<Row, StoreError> {
        self.sheet
            .read_all()?
            .into_iter()
            .nth(index.0)
            .ok_or(StoreError::UnknownRow(index))
    }

    /// Delete the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownRow`] when no row is stored at `index`.
    pub fn delete(&mut self, index: RowIndex) -> Result<(), StoreError> {
        self.sheet.delete(index)
    }

    /// The wrapped sheet.
    pub fn into_inner(self) -> S {
        self.sheet
    }
}
