//! Trailing-arm rear suspension solved by projecting the upper link.
//!
//! Only the upper link sets the rear roll centre in this model. Its line
//! through the frame-side and axle-side mounts is extended to the centreline
//! and the height there is the roll centre. The trailing arms are recorded
//! with the rest of the setup but do not enter the calculation.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::GeometryError;
use crate::geometry::{point, Line};

/// Lateral mount separation below which the upper link is treated as vertical.
pub const DEGENERATE_LINK_OFFSET: f64 = 0.001;

/// Rear suspension measurements.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RearGeometryInput {
    /// Trailing arm length (recorded only).
    pub trailing_arm_length: f64,
    /// Trailing arm frame mount height (recorded only).
    pub trailing_arm_frame_height: f64,
    /// Trailing arm axle mount height (recorded only).
    pub trailing_arm_axle_height: f64,
    /// Upper link length (recorded only).
    pub upper_link_length: f64,
    /// Upper link frame mount height.
    pub upper_link_frame_height: f64,
    /// Upper link axle mount height.
    pub upper_link_axle_height: f64,
    /// Lateral distance of the frame mount from the centreline.
    pub upper_link_frame_offset: f64,
    /// Lateral distance of the axle mount from the centreline.
    pub upper_link_axle_offset: f64,
    /// Distance from the centreline to the rear contact patch (recorded only).
    pub rear_track_half: f64,
}

impl Default for RearGeometryInput {
    fn default() -> Self {
        Self {
            trailing_arm_length: 24.0,
            trailing_arm_frame_height: 12.0,
            trailing_arm_axle_height: 10.0,
            upper_link_length: 14.0,
            upper_link_frame_height: 18.0,
            upper_link_axle_height: 16.0,
            upper_link_frame_offset: 2.0,
            upper_link_axle_offset: 6.0,
            rear_track_half: 30.0,
        }
    }
}

/// Rear roll centre result.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RearGeometryResult {
    /// Height of the upper link line at the centreline.
    pub roll_centre_height: f64,
    /// Set when the mounts share a lateral offset and the mean height was used.
    pub degenerate_link: bool,
}

/// Project the upper link onto the centreline.
///
/// When the two mounts are within [`DEGENERATE_LINK_OFFSET`] of each other
/// laterally, the link has no usable slope and the mean of the two mount
/// heights is reported instead.
///
/// # Errors
///
/// Returns [`GeometryError::NonFiniteInput`] when an upper link field is NaN
/// or infinite.
///
/// # Examples
/// ```
/// use rollcentre::{solve_rear, RearGeometryInput};
///
/// let input = RearGeometryInput {
///     upper_link_frame_height: 18.0,
///     upper_link_axle_height: 16.0,
///     upper_link_frame_offset: 2.0,
///     upper_link_axle_offset: 6.0,
///     ..RearGeometryInput::default()
/// };
/// let result = solve_rear(&input).expect("finite input");
/// assert_eq!(result.roll_centre_height, 19.0);
/// ```
pub fn solve_rear(input: &RearGeometryInput) -> Result<RearGeometryResult, GeometryError> {
    let fields = [
        ("upper_link_frame_height", input.upper_link_frame_height),
        ("upper_link_axle_height", input.upper_link_axle_height),
        ("upper_link_frame_offset", input.upper_link_frame_offset),
        ("upper_link_axle_offset", input.upper_link_axle_offset),
    ];
    if let Some(&(field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
        return Err(GeometryError::NonFiniteInput { field });
    }

    let dx = input.upper_link_axle_offset - input.upper_link_frame_offset;
    if dx.abs() < DEGENERATE_LINK_OFFSET {
        warn!(dx, "upper link is vertical; using mean mount height");
        return Ok(RearGeometryResult {
            roll_centre_height: (input.upper_link_frame_height + input.upper_link_axle_height)
                / 2.0,
            degenerate_link: true,
        });
    }

    let slope = (input.upper_link_axle_height - input.upper_link_frame_height) / dx;
    let link = Line::new(
        point(input.upper_link_frame_offset, input.upper_link_frame_height),
        slope,
    );
    let roll_centre_height = link.y_at(0.0);
    debug!(slope, roll_centre_height, "solved rear upper link");
    Ok(RearGeometryResult {
        roll_centre_height,
        degenerate_link: false,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn link(
        frame_height: f64,
        axle_height: f64,
        frame_offset: f64,
        axle_offset: f64,
    ) -> RearGeometryInput {
        RearGeometryInput {
            upper_link_frame_height: frame_height,
            upper_link_axle_height: axle_height,
            upper_link_frame_offset: frame_offset,
            upper_link_axle_offset: axle_offset,
            ..RearGeometryInput::default()
        }
    }

    #[test]
    fn projects_link_to_centreline() {
        let result = solve_rear(&link(18.0, 16.0, 2.0, 6.0)).expect("finite input");
        assert_relative_eq!(result.roll_centre_height, 19.0);
        assert!(!result.degenerate_link);
    }

    #[test]
    fn vertical_link_uses_mean_height() {
        let result = solve_rear(&link(18.0, 15.0, 3.0, 3.0005)).expect("finite input");
        assert_eq!(result.roll_centre_height, (18.0 + 15.0) / 2.0);
        assert!(result.degenerate_link);
    }

    #[test]
    fn trailing_arm_does_not_change_roll_centre() {
        let base = link(18.0, 16.0, 2.0, 6.0);
        let moved = RearGeometryInput {
            trailing_arm_length: 40.0,
            trailing_arm_frame_height: 3.0,
            trailing_arm_axle_height: 20.0,
            ..base
        };
        assert_eq!(solve_rear(&base), solve_rear(&moved));
    }

    #[test]
    fn non_finite_offset_is_rejected() {
        let result = solve_rear(&link(18.0, 16.0, f64::INFINITY, 6.0));
        assert_eq!(
            result,
            Err(GeometryError::NonFiniteInput {
                field: "upper_link_frame_offset"
            })
        );
    }
}
