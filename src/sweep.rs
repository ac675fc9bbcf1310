//! Travel and roll sweeps built from repeated front solves.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::GeometryError;
use crate::front::{
    camber_at_travel, solve_front, solve_front_side, FrontGeometryInput, FrontSolution,
};

/// Evenly spaced values over `[-range, +range]`.
///
/// The middle sample of an odd count is exactly zero. A single sample is the
/// static position and zero samples yield an empty list.
///
/// # Examples
/// ```
/// use rollcentre::sample_travels;
///
/// assert_eq!(sample_travels(2.0, 5), vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
/// ```
#[must_use]
pub fn sample_travels(range: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let range = range.abs();
            let last = (samples - 1) as f64;
            (0..samples)
                .map(|i| range * (2.0 * i as f64 - last) / last)
                .collect()
        }
    }
}

/// Smallest and largest value in a series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesRange {
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl SeriesRange {
    /// Span of the series.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }

    /// Range of `values`, or `None` when empty.
    fn of(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        values.into_iter().fold(None, |range, value| {
            Some(match range {
                None => SeriesRange {
                    min: value,
                    max: value,
                },
                Some(SeriesRange { min, max }) => SeriesRange {
                    min: min.min(value),
                    max: max.max(value),
                },
            })
        })
    }
}

/// One row of a camber gain table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CamberGainRow {
    /// Wheel travel.
    pub travel: f64,
    /// Absolute camber at this travel, in degrees.
    pub camber_deg: f64,
    /// Camber relative to zero travel, in degrees.
    pub camber_change_deg: f64,
}

/// Camber through the travel range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CamberGainTable {
    /// Rows ordered by increasing travel.
    pub rows: Vec<CamberGainRow>,
}

impl CamberGainTable {
    /// Camber change per unit travel between the first and last rows.
    #[must_use]
    pub fn average_gain(&self) -> Option<f64> {
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        let travel = last.travel - first.travel;
        if travel == 0.0 {
            return None;
        }
        Some((last.camber_change_deg - first.camber_change_deg) / travel)
    }
}

/// Tabulate camber change over `[-range, +range]` in `samples` steps.
///
/// # Errors
///
/// Returns [`GeometryError`] when the static geometry is invalid. Rows come
/// from the arm angles alone, so every sample is reported even where the
/// roll centre is undefined.
///
/// # Examples
/// ```
/// use rollcentre::{camber_gain_table, FrontGeometryInput};
///
/// let table = camber_gain_table(&FrontGeometryInput::default(), 2.0, 5).expect("valid geometry");
/// assert_eq!(table.rows.len(), 5);
/// assert_eq!(table.rows[2].camber_change_deg, 0.0);
/// ```
pub fn camber_gain_table(
    input: &FrontGeometryInput,
    range: f64,
    samples: usize,
) -> Result<CamberGainTable, GeometryError> {
    input.validate()?;
    let rows = sample_travels(range, samples)
        .into_iter()
        .map(|travel| -> Result<CamberGainRow, GeometryError> {
            let reading = camber_at_travel(input, travel)?;
            Ok(CamberGainRow {
                travel,
                camber_deg: reading.camber_deg,
                camber_change_deg: reading.camber_change_deg,
            })
        })
        .collect::<Result<_, _>>()?;
    Ok(CamberGainTable { rows })
}

/// One sample of a travel sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Wheel travel.
    pub travel: f64,
    /// Roll centre height at this travel.
    pub roll_centre_height: f64,
    /// Swing arm length, absent where the arms are parallel.
    pub fvsa_length: Option<f64>,
    /// Camber relative to zero travel, in degrees.
    pub camber_change_deg: f64,
}

/// Front geometry sampled through wheel travel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    /// Samples ordered by increasing travel.
    pub points: Vec<SweepPoint>,
}

impl SweepSeries {
    /// Range of roll centre heights.
    #[must_use]
    pub fn roll_centre_range(&self) -> Option<SeriesRange> {
        SeriesRange::of(self.points.iter().map(|p| p.roll_centre_height))
    }

    /// Range of swing arm lengths over the samples that have one.
    #[must_use]
    pub fn fvsa_range(&self) -> Option<SeriesRange> {
        SeriesRange::of(self.points.iter().filter_map(|p| p.fvsa_length))
    }

    /// Range of camber change.
    #[must_use]
    pub fn camber_change_range(&self) -> Option<SeriesRange> {
        SeriesRange::of(self.points.iter().map(|p| p.camber_change_deg))
    }

    /// The sample closest to static ride height.
    #[must_use]
    pub fn nearest_to_static(&self) -> Option<&SweepPoint> {
        self.points
            .iter()
            .min_by(|a, b| a.travel.abs().total_cmp(&b.travel.abs()))
    }
}

/// Sweep roll centre, swing arm and camber change over `[-range, +range]`.
///
/// # Errors
///
/// Returns [`GeometryError`] when the static geometry is invalid. A travel
/// where the instant centre lands directly above the contact patch is kept
/// with the roll centre at ground and no swing arm length. Other travel
/// positions that cannot be solved are left out of the series.
///
/// # Examples
/// ```
/// use rollcentre::{travel_sweep, FrontGeometryInput};
///
/// let sweep = travel_sweep(&FrontGeometryInput::default(), 3.0, 13).expect("valid geometry");
/// assert_eq!(sweep.points.len(), 13);
/// assert_eq!(sweep.nearest_to_static().map(|p| p.camber_change_deg), Some(0.0));
/// ```
pub fn travel_sweep(
    input: &FrontGeometryInput,
    range: f64,
    samples: usize,
) -> Result<SweepSeries, GeometryError> {
    input.validate()?;
    let points = sample_travels(range, samples)
        .into_iter()
        .filter_map(|travel| match solve_front_side(input, travel) {
            Ok(side) => Some(SweepPoint {
                travel,
                roll_centre_height: side.roll_centre_height,
                fvsa_length: side.fvsa_length,
                camber_change_deg: side.camber_change_deg,
            }),
            Err(GeometryError::VerticalContactLine) => {
                warn!(travel, "contact line is vertical; roll centre placed at ground");
                camber_at_travel(input, travel)
                    .ok()
                    .map(|reading| SweepPoint {
                        travel,
                        roll_centre_height: 0.0,
                        fvsa_length: None,
                        camber_change_deg: reading.camber_change_deg,
                    })
            }
            Err(error) => {
                warn!(travel, %error, "skipping sweep sample");
                None
            }
        })
        .collect();
    Ok(SweepSeries { points })
}

/// One sample of a roll sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RollSweepPoint {
    /// Body roll in degrees.
    pub roll_deg: f64,
    /// Roll centre height computed from the left side.
    pub left_roll_centre_height: f64,
    /// Roll centre height computed from the right side.
    pub right_roll_centre_height: f64,
    /// Mean of both sides.
    pub roll_centre_height: f64,
}

/// Front roll centre sampled through body roll.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RollSweep {
    /// Samples ordered by increasing roll.
    pub points: Vec<RollSweepPoint>,
}

impl RollSweep {
    /// Range of the mean roll centre height.
    #[must_use]
    pub fn roll_centre_range(&self) -> Option<SeriesRange> {
        SeriesRange::of(self.points.iter().map(|p| p.roll_centre_height))
    }
}

/// Sweep body roll over `[-max_roll_deg, +max_roll_deg]` at the input's wheel travel.
///
/// # Errors
///
/// Returns [`GeometryError`] when the static geometry is invalid. Roll angles
/// that cannot be solved are left out of the series.
pub fn roll_sweep(
    input: &FrontGeometryInput,
    max_roll_deg: f64,
    samples: usize,
) -> Result<RollSweep, GeometryError> {
    input.validate()?;
    let points = sample_travels(max_roll_deg, samples)
        .into_iter()
        .filter_map(|roll_deg| {
            let rolled = FrontGeometryInput {
                body_roll_deg: roll_deg,
                ..*input
            };
            match solve_front(&rolled) {
                Ok(solution) => {
                    let (left, right) = match &solution {
                        FrontSolution::Static(side) => (side, side),
                        FrontSolution::Rolled { left, right, .. } => (left, right),
                    };
                    Some(RollSweepPoint {
                        roll_deg,
                        left_roll_centre_height: left.roll_centre_height,
                        right_roll_centre_height: right.roll_centre_height,
                        roll_centre_height: solution.roll_centre_height(),
                    })
                }
                Err(error) => {
                    warn!(roll_deg, %error, "skipping roll sweep sample");
                    None
                }
            }
        })
        .collect();
    Ok(RollSweep { points })
}
