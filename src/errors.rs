//! Error types produced while solving suspension geometry or storing log rows.

use thiserror::Error;

use crate::store::RowIndex;

/// Identifies one of the two front control arms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arm {
    /// Lower control arm.
    Lower,
    /// Upper control arm.
    Upper,
}

impl std::fmt::Display for Arm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arm::Lower => f.write_str("lower control arm"),
            Arm::Upper => f.write_str("upper control arm"),
        }
    }
}

/// Error returned when a geometry input cannot produce a meaningful result.
///
/// Degenerate but valid geometry, such as parallel control arms, is not an
/// error. Those cases produce a result with the instant centre marked as
/// parallel. The variants here describe inputs where the numbers themselves
/// are meaningless, so callers can tell "roll centre at ground by convention"
/// apart from "garbage in".
///
/// # Examples
///
/// ```
/// use rollcentre::{solve_front_side, Arm, FrontGeometryInput, GeometryError};
///
/// let input = FrontGeometryInput {
///     lca_length: 0.0,
///     ..FrontGeometryInput::default()
/// };
/// let error = solve_front_side(&input, 0.0).expect_err("zero length arm is rejected");
/// assert_eq!(
///     error,
///     GeometryError::NonPositiveArmLength { arm: Arm::Lower, length: 0.0 }
/// );
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Returned when a control arm length is zero or negative.
    #[error("{arm} length must be positive (received {length})")]
    NonPositiveArmLength {
        /// Which arm was rejected.
        arm: Arm,
        /// Rejected length.
        length: f64,
    },
    /// Returned when the half-track is zero or negative.
    #[error("half-track must be positive (received {0})")]
    NonPositiveHalfTrack(f64),
    /// Returned when the contact patch sits at or inside the inner pivots.
    #[error("half-track {half_track} does not extend past the inner pivots at {inner_offset}")]
    ZeroArmSpan {
        /// Supplied half-track.
        half_track: f64,
        /// Lateral offset of the inner pivots from the centreline.
        inner_offset: f64,
    },
    /// Returned when an input field is NaN or infinite.
    #[error("input `{field}` is not a finite number")]
    NonFiniteInput {
        /// Name of the offending field.
        field: &'static str,
    },
    /// Returned when the arithmetic produced NaN or infinity.
    #[error("{quantity} evaluated to a non-finite value")]
    NonFiniteResult {
        /// Name of the quantity that failed.
        quantity: &'static str,
    },
    /// Returned when the instant centre sits directly above the contact patch,
    /// so the force line never reaches the centreline.
    #[error("instant centre is vertically above the contact patch")]
    VerticalContactLine,
}

/// Error returned by a [`Sheet`](crate::Sheet) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Returned when a row index does not address an existing data row.
    #[error("row {0} does not exist in this sheet")]
    UnknownRow(RowIndex),
    /// Returned when the backing file cannot be read or written.
    #[error("sheet file could not be accessed: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when the backing file does not contain valid rows.
    #[error("sheet file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error returned while loading a [`CalculatorConfig`](crate::CalculatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when the configuration file cannot be read.
    #[error("configuration file could not be read: {0}")]
    Io(#[from] std::io::Error),
    /// Returned when the configuration file is not valid TOML.
    #[error("configuration file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    /// Returned when a setting is outside its permitted range.
    #[error("invalid setting: {0}")]
    Invalid(String),
}
