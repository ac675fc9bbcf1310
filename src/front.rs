//! Double A-arm front suspension solved with the instant centre method.
//!
//! Each side is reduced to two straight lines in the front view, one per
//! control arm, running from the inner (frame) pivot to the outer (spindle)
//! pivot. The intersection of those lines is the instant centre. The line
//! from the tyre contact patch through the instant centre crosses the car
//! centreline at the roll centre.
//!
//! Wheel travel is applied by shifting the outer pivots vertically: the lower
//! pivot follows the wheel one-for-one while the upper pivot moves by
//! [`UPPER_TRAVEL_FACTOR`] of the travel. That factor approximates the shorter
//! upper arm's smaller excursion. It is not a four-bar solve; a rigorous
//! engine would rotate each arm about its inner pivot instead.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{Arm, GeometryError};
use crate::geometry::{intersect_shared_abscissa, line_angle, point, y_on_line_at, Line, Point};

/// Lateral offset of both inner pivots from the centreline (frame-rail half-width).
pub const INNER_PIVOT_OFFSET: f64 = 4.0;

/// Fraction of wheel travel applied to the upper outer pivot.
pub const UPPER_TRAVEL_FACTOR: f64 = 0.85;

/// Slope difference below which the control arms are treated as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1.0e-9;

/// Static front geometry for one corner, mirrored for the other side.
///
/// Heights are measured from the ground and all lengths share one unit
/// (inches in the shop). `wheel_travel` is positive in bump and negative in
/// droop; `body_roll_deg` is positive when the left side compresses.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontGeometryInput {
    /// Lower control arm length.
    pub lca_length: f64,
    /// Upper control arm length.
    pub uca_length: f64,
    /// Lower arm frame pivot height.
    pub lca_inner_height: f64,
    /// Lower arm spindle pivot height.
    pub lca_outer_height: f64,
    /// Upper arm frame pivot height.
    pub uca_inner_height: f64,
    /// Upper arm spindle pivot height.
    pub uca_outer_height: f64,
    /// Distance from the centreline to the contact patch centre.
    pub half_track: f64,
    /// Signed wheel travel from static ride height.
    pub wheel_travel: f64,
    /// Signed body roll angle in degrees.
    pub body_roll_deg: f64,
}

impl Default for FrontGeometryInput {
    fn default() -> Self {
        Self {
            lca_length: 12.0,
            uca_length: 10.0,
            lca_inner_height: 6.0,
            lca_outer_height: 5.5,
            uca_inner_height: 14.0,
            uca_outer_height: 13.0,
            half_track: 30.0,
            wheel_travel: 0.0,
            body_roll_deg: 0.0,
        }
    }
}

impl FrontGeometryInput {
    /// Copy of this geometry evaluated at a different wheel travel, with no roll.
    #[must_use]
    pub fn at_travel(&self, wheel_travel: f64) -> Self {
        Self {
            wheel_travel,
            body_roll_deg: 0.0,
            ..*self
        }
    }

    /// Check the invariants the solver relies on.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when a field is non-finite, an arm length or
    /// the half-track is not positive, or the contact patch does not sit
    /// outboard of the inner pivots.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let fields = [
            ("lca_length", self.lca_length),
            ("uca_length", self.uca_length),
            ("lca_inner_height", self.lca_inner_height),
            ("lca_outer_height", self.lca_outer_height),
            ("uca_inner_height", self.uca_inner_height),
            ("uca_outer_height", self.uca_outer_height),
            ("half_track", self.half_track),
            ("wheel_travel", self.wheel_travel),
            ("body_roll_deg", self.body_roll_deg),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(GeometryError::NonFiniteInput { field });
        }
        if self.lca_length <= 0.0 {
            return Err(GeometryError::NonPositiveArmLength {
                arm: Arm::Lower,
                length: self.lca_length,
            });
        }
        if self.uca_length <= 0.0 {
            return Err(GeometryError::NonPositiveArmLength {
                arm: Arm::Upper,
                length: self.uca_length,
            });
        }
        if self.half_track <= 0.0 {
            return Err(GeometryError::NonPositiveHalfTrack(self.half_track));
        }
        if self.half_track - INNER_PIVOT_OFFSET <= 0.0 {
            return Err(GeometryError::ZeroArmSpan {
                half_track: self.half_track,
                inner_offset: INNER_PIVOT_OFFSET,
            });
        }
        Ok(())
    }

    /// Tyre contact patch centre in the front view.
    #[must_use]
    pub fn contact_patch(&self) -> Point {
        point(self.half_track, 0.0)
    }
}

/// Where the two control-arm lines meet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum InstantCentre {
    /// The arms intersect at a finite point.
    Finite(Point),
    /// The arms are parallel; the instant centre is at infinity.
    Parallel,
}

impl InstantCentre {
    /// The intersection point, if one exists.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            InstantCentre::Finite(point) => Some(*point),
            InstantCentre::Parallel => None,
        }
    }
}

/// Front-view geometry of one side at one wheel travel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontGeometryResult {
    /// Travel the side was evaluated at, including any roll bias.
    pub wheel_travel: f64,
    /// Instant centre of the corner.
    pub instant_centre: InstantCentre,
    /// Height where the contact-patch line crosses the centreline.
    ///
    /// Zero (ground) by convention when the arms are parallel.
    pub roll_centre_height: f64,
    /// Front view swing arm length, absent when the arms are parallel.
    pub fvsa_length: Option<f64>,
    /// Upper arm angle minus lower arm angle, in degrees.
    pub camber_deg: f64,
    /// Camber relative to the same geometry at zero travel, in degrees.
    pub camber_change_deg: f64,
}

/// Outer pivot points and arm lines for one side at a travel.
#[derive(Clone, Copy, Debug)]
struct ArmLines {
    /// Lower arm frame pivot.
    lower_inner: Point,
    /// Lower arm spindle pivot after travel.
    lower_outer: Point,
    /// Upper arm frame pivot.
    upper_inner: Point,
    /// Upper arm spindle pivot after travel.
    upper_outer: Point,
}

impl ArmLines {
    /// Place both arms for `travel`, moving the upper outer pivot by the reduced factor.
    fn at_travel(input: &FrontGeometryInput, travel: f64) -> Self {
        Self {
            lower_inner: point(INNER_PIVOT_OFFSET, input.lca_inner_height),
            lower_outer: point(input.half_track, input.lca_outer_height + travel),
            upper_inner: point(INNER_PIVOT_OFFSET, input.uca_inner_height),
            upper_outer: point(
                input.half_track,
                input.uca_outer_height + travel * UPPER_TRAVEL_FACTOR,
            ),
        }
    }

    /// Line along an arm, anchored at its inner pivot.
    fn line(inner: Point, outer: Point) -> Line {
        Line::new(inner, (outer.y - inner.y) / (outer.x - inner.x))
    }

    /// Upper minus lower arm angle in degrees.
    fn camber_deg(&self) -> f64 {
        let upper = line_angle(self.upper_inner, self.upper_outer);
        let lower = line_angle(self.lower_inner, self.lower_outer);
        (upper - lower).to_degrees()
    }

    /// Camber at these arm positions and its change from zero travel.
    fn camber_reading(&self, input: &FrontGeometryInput) -> Result<CamberReading, GeometryError> {
        let camber_deg = self.camber_deg();
        if !camber_deg.is_finite() {
            return Err(GeometryError::NonFiniteResult { quantity: "camber" });
        }
        Ok(CamberReading {
            camber_deg,
            camber_change_deg: camber_deg - ArmLines::at_travel(input, 0.0).camber_deg(),
        })
    }
}

/// Camber of one side at one wheel travel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CamberReading {
    /// Upper arm angle minus lower arm angle, in degrees.
    pub camber_deg: f64,
    /// Camber relative to the same geometry at zero travel, in degrees.
    pub camber_change_deg: f64,
}

/// Camber at an explicit wheel travel from the arm angles alone.
///
/// Camber does not depend on the instant centre, so this succeeds wherever
/// [`solve_front_side`] would fail only because of where the instant centre
/// lands.
///
/// # Errors
///
/// Returns [`GeometryError`] when the input fails [`FrontGeometryInput::validate`]
/// or `travel` is not finite.
///
/// # Examples
/// ```
/// use rollcentre::{camber_at_travel, solve_front_side, FrontGeometryInput};
///
/// let input = FrontGeometryInput::default();
/// let reading = camber_at_travel(&input, 1.5).expect("valid geometry");
/// let side = solve_front_side(&input, 1.5).expect("valid geometry");
/// assert_eq!(reading.camber_change_deg, side.camber_change_deg);
/// ```
pub fn camber_at_travel(
    input: &FrontGeometryInput,
    travel: f64,
) -> Result<CamberReading, GeometryError> {
    input.validate()?;
    if !travel.is_finite() {
        return Err(GeometryError::NonFiniteInput {
            field: "wheel_travel",
        });
    }
    ArmLines::at_travel(input, travel).camber_reading(input)
}

/// Solve one side of the front suspension at an explicit wheel travel.
///
/// `input.wheel_travel` and `input.body_roll_deg` are ignored; use
/// [`solve_front`] to apply those.
///
/// # Errors
///
/// Returns [`GeometryError`] when the input fails [`FrontGeometryInput::validate`],
/// when the instant centre sits directly above the contact patch, or when the
/// arithmetic produces a non-finite value.
///
/// # Examples
/// ```
/// use rollcentre::{solve_front_side, FrontGeometryInput};
///
/// let result = solve_front_side(&FrontGeometryInput::default(), 0.0).expect("valid geometry");
/// assert!(result.instant_centre.point().is_some());
/// assert_eq!(result.camber_change_deg, 0.0);
/// ```
pub fn solve_front_side(
    input: &FrontGeometryInput,
    travel: f64,
) -> Result<FrontGeometryResult, GeometryError> {
    input.validate()?;
    if !travel.is_finite() {
        return Err(GeometryError::NonFiniteInput {
            field: "wheel_travel",
        });
    }

    let arms = ArmLines::at_travel(input, travel);
    let CamberReading {
        camber_deg,
        camber_change_deg,
    } = arms.camber_reading(input)?;

    let lower = ArmLines::line(arms.lower_inner, arms.lower_outer);
    let upper = ArmLines::line(arms.upper_inner, arms.upper_outer);
    let Some(ic) = intersect_shared_abscissa(&lower, &upper, PARALLEL_TOLERANCE) else {
        warn!(travel, "control arms are parallel; roll centre placed at ground");
        return Ok(FrontGeometryResult {
            wheel_travel: travel,
            instant_centre: InstantCentre::Parallel,
            roll_centre_height: 0.0,
            fvsa_length: None,
            camber_deg,
            camber_change_deg,
        });
    };
    if !ic.is_finite() {
        return Err(GeometryError::NonFiniteResult {
            quantity: "instant centre",
        });
    }

    let patch = input.contact_patch();
    if (ic.x - patch.x).abs() < PARALLEL_TOLERANCE {
        return Err(GeometryError::VerticalContactLine);
    }
    let roll_centre_height =
        y_on_line_at(patch, ic, 0.0).ok_or(GeometryError::VerticalContactLine)?;
    if !roll_centre_height.is_finite() {
        return Err(GeometryError::NonFiniteResult {
            quantity: "roll centre height",
        });
    }
    let fvsa_length = patch.distance_to(ic);

    debug!(
        travel,
        ic_x = ic.x,
        ic_y = ic.y,
        roll_centre_height,
        fvsa_length,
        "solved front side"
    );
    Ok(FrontGeometryResult {
        wheel_travel: travel,
        instant_centre: InstantCentre::Finite(ic),
        roll_centre_height,
        fvsa_length: Some(fvsa_length),
        camber_deg,
        camber_change_deg,
    })
}

/// Extra travel a side sees while the body rolls by `roll_deg`.
///
/// The left side gains this amount and the right side loses it.
///
/// # Examples
/// ```
/// use rollcentre::roll_travel_bias;
///
/// assert!((roll_travel_bias(30.0, 30.0) - 15.0).abs() < 1.0e-12);
/// assert_eq!(roll_travel_bias(30.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn roll_travel_bias(half_track: f64, roll_deg: f64) -> f64 {
    half_track * roll_deg.to_radians().sin()
}

/// Front geometry for the whole axle, with or without body roll.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FrontSolution {
    /// No roll: both sides are identical.
    Static(FrontGeometryResult),
    /// Body roll: each side solved at its own biased travel.
    Rolled {
        /// Roll angle the sides were solved for, in degrees.
        roll_deg: f64,
        /// Compressed side for positive roll.
        left: FrontGeometryResult,
        /// Extended side for positive roll.
        right: FrontGeometryResult,
    },
}

impl FrontSolution {
    /// Roll centre height used for the axle: the mean of both sides when rolled.
    #[must_use]
    pub fn roll_centre_height(&self) -> f64 {
        match self {
            FrontSolution::Static(side) => side.roll_centre_height,
            FrontSolution::Rolled { left, right, .. } => {
                (left.roll_centre_height + right.roll_centre_height) / 2.0
            }
        }
    }

    /// The side reported first: the only side when static, the left when rolled.
    #[must_use]
    pub fn primary(&self) -> &FrontGeometryResult {
        match self {
            FrontSolution::Static(side) => side,
            FrontSolution::Rolled { left, .. } => left,
        }
    }
}

/// Solve the front axle at the input's wheel travel and body roll.
///
/// # Errors
///
/// Returns the first [`GeometryError`] raised by either side.
///
/// # Examples
/// ```
/// use rollcentre::{solve_front, FrontGeometryInput, FrontSolution};
///
/// let rolled = FrontGeometryInput { body_roll_deg: 2.0, ..FrontGeometryInput::default() };
/// match solve_front(&rolled).expect("valid geometry") {
///     FrontSolution::Rolled { left, right, .. } => {
///         assert!(left.wheel_travel > right.wheel_travel);
///     }
///     FrontSolution::Static(_) => unreachable!("roll was requested"),
/// }
/// ```
pub fn solve_front(input: &FrontGeometryInput) -> Result<FrontSolution, GeometryError> {
    if input.body_roll_deg == 0.0 {
        return solve_front_side(input, input.wheel_travel).map(FrontSolution::Static);
    }
    input.validate()?;
    let bias = roll_travel_bias(input.half_track, input.body_roll_deg);
    let left = solve_front_side(input, input.wheel_travel + bias)?;
    let right = solve_front_side(input, input.wheel_travel - bias)?;
    Ok(FrontSolution::Rolled {
        roll_deg: input.body_roll_deg,
        left,
        right,
    })
}
