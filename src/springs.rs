//! Spring rate, wheel rate and ride frequency conversions.
//!
//! Each corner is treated as a single mass on a spring. In inch-pound-second
//! units the sprung mass is `corner_weight / g` with `g = 386.4 in/s²`, and
//! the natural frequency is `(1/2π)·√(wheel_rate / mass)`. The motion ratio is
//! wheel travel over spring travel, so `wheel_rate = spring_rate · ratio²`.
//!
//! Non-positive weights, rates, frequencies or ratios return zero.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Gravitational acceleration in inches per second squared.
pub const GRAVITY_IN_PER_S2: f64 = 386.4;

/// Sprung mass of a corner in lbf·s²/in.
fn corner_mass(corner_weight: f64) -> f64 {
    corner_weight / GRAVITY_IN_PER_S2
}

/// Wheel rate (lbf/in) for a spring rate (lbf/in) through a motion ratio.
///
/// # Examples
/// ```
/// use rollcentre::wheel_rate_from_spring_rate;
///
/// assert_eq!(wheel_rate_from_spring_rate(400.0, 0.5), 100.0);
/// assert_eq!(wheel_rate_from_spring_rate(400.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn wheel_rate_from_spring_rate(spring_rate: f64, motion_ratio: f64) -> f64 {
    if spring_rate <= 0.0 || motion_ratio <= 0.0 {
        return 0.0;
    }
    spring_rate * motion_ratio.powi(2)
}

/// Spring rate (lbf/in) needed to give a wheel rate (lbf/in) through a motion ratio.
///
/// # Examples
/// ```
/// use rollcentre::spring_rate_from_wheel_rate;
///
/// assert_eq!(spring_rate_from_wheel_rate(100.0, 0.5), 400.0);
/// assert_eq!(spring_rate_from_wheel_rate(-100.0, 0.5), 0.0);
/// ```
#[must_use]
pub fn spring_rate_from_wheel_rate(wheel_rate: f64, motion_ratio: f64) -> f64 {
    if wheel_rate <= 0.0 || motion_ratio <= 0.0 {
        return 0.0;
    }
    wheel_rate / motion_ratio.powi(2)
}

/// Wheel rate (lbf/in) that gives `target_frequency` (Hz) for a corner weight (lbf).
///
/// # Examples
/// ```
/// use rollcentre::wheel_rate_from_frequency;
///
/// assert!((wheel_rate_from_frequency(400.0, 1.8) - 132.4).abs() < 0.1);
/// assert_eq!(wheel_rate_from_frequency(400.0, 0.0), 0.0);
/// ```
#[must_use]
pub fn wheel_rate_from_frequency(corner_weight: f64, target_frequency: f64) -> f64 {
    if corner_weight <= 0.0 || target_frequency <= 0.0 {
        return 0.0;
    }
    (2.0 * PI * target_frequency).powi(2) * corner_mass(corner_weight)
}

/// Spring rate (lbf/in) that gives `target_frequency` (Hz) for a corner weight
/// (lbf) and motion ratio.
///
/// # Examples
/// ```
/// use rollcentre::spring_rate_from_frequency;
///
/// let rate = spring_rate_from_frequency(400.0, 1.8, 1.0);
/// assert!((rate - 132.4).abs() < 0.1);
/// ```
#[must_use]
pub fn spring_rate_from_frequency(
    corner_weight: f64,
    target_frequency: f64,
    motion_ratio: f64,
) -> f64 {
    spring_rate_from_wheel_rate(
        wheel_rate_from_frequency(corner_weight, target_frequency),
        motion_ratio,
    )
}

/// Ride frequency (Hz) of a corner from its spring rate (lbf/in), corner
/// weight (lbf) and motion ratio.
///
/// # Examples
/// ```
/// use rollcentre::{frequency_from_spring_rate, spring_rate_from_frequency};
///
/// let rate = spring_rate_from_frequency(400.0, 1.8, 0.8);
/// assert!((frequency_from_spring_rate(rate, 400.0, 0.8) - 1.8).abs() < 1.0e-12);
/// assert_eq!(frequency_from_spring_rate(rate, 0.0, 0.8), 0.0);
/// ```
#[must_use]
pub fn frequency_from_spring_rate(
    spring_rate: f64,
    corner_weight: f64,
    motion_ratio: f64,
) -> f64 {
    if corner_weight <= 0.0 {
        return 0.0;
    }
    let wheel_rate = wheel_rate_from_spring_rate(spring_rate, motion_ratio);
    (wheel_rate / corner_mass(corner_weight)).sqrt() / (2.0 * PI)
}

/// Which quantity a [`SpringRateModel`] starts from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringTarget {
    /// Target ride frequency in Hz.
    Frequency(f64),
    /// Installed spring rate in lbf/in.
    SpringRate(f64),
}

/// One corner's sprung mass, motion ratio and either a target frequency or a
/// known spring rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringRateModel {
    /// Corner weight in lbf.
    pub corner_weight: f64,
    /// Wheel travel over spring travel.
    pub motion_ratio: f64,
    /// Known quantity.
    pub target: SpringTarget,
}

impl Default for SpringRateModel {
    fn default() -> Self {
        Self {
            corner_weight: 400.0,
            motion_ratio: 1.0,
            target: SpringTarget::Frequency(1.8),
        }
    }
}

/// Spring rate, wheel rate and ride frequency for one corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RideRates {
    /// Spring rate in lbf/in.
    pub spring_rate: f64,
    /// Wheel rate in lbf/in.
    pub wheel_rate: f64,
    /// Ride frequency in Hz.
    pub frequency: f64,
}

impl SpringRateModel {
    /// Fill in the two quantities not given by the target.
    ///
    /// # Examples
    /// ```
    /// use rollcentre::{SpringRateModel, SpringTarget};
    ///
    /// let model = SpringRateModel {
    ///     corner_weight: 400.0,
    ///     motion_ratio: 0.5,
    ///     target: SpringTarget::SpringRate(400.0),
    /// };
    /// assert_eq!(model.solve().wheel_rate, 100.0);
    /// ```
    #[must_use]
    pub fn solve(&self) -> RideRates {
        match self.target {
            SpringTarget::Frequency(frequency) => {
                let spring_rate =
                    spring_rate_from_frequency(self.corner_weight, frequency, self.motion_ratio);
                RideRates {
                    spring_rate,
                    wheel_rate: wheel_rate_from_spring_rate(spring_rate, self.motion_ratio),
                    frequency: if spring_rate > 0.0 { frequency } else { 0.0 },
                }
            }
            SpringTarget::SpringRate(spring_rate) => RideRates {
                spring_rate: spring_rate.max(0.0),
                wheel_rate: wheel_rate_from_spring_rate(spring_rate, self.motion_ratio),
                frequency: frequency_from_spring_rate(
                    spring_rate,
                    self.corner_weight,
                    self.motion_ratio,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn frequency_target_matches_hand_calculation() {
        let mass = 400.0 / 386.4;
        let expected = (2.0 * PI * 1.8).powi(2) * mass;
        assert_relative_eq!(spring_rate_from_frequency(400.0, 1.8, 1.0), expected);
        assert_relative_eq!(expected, 132.4, epsilon = 0.1);
    }

    #[test]
    fn softer_motion_ratio_needs_stiffer_spring() {
        let direct = spring_rate_from_frequency(400.0, 1.8, 1.0);
        let halved = spring_rate_from_frequency(400.0, 1.8, 0.5);
        assert_relative_eq!(halved, direct * 4.0, epsilon = 1.0e-9);
    }

    #[test]
    fn non_positive_inputs_return_zero() {
        assert_eq!(spring_rate_from_frequency(0.0, 1.8, 1.0), 0.0);
        assert_eq!(spring_rate_from_frequency(400.0, -1.0, 1.0), 0.0);
        assert_eq!(spring_rate_from_frequency(400.0, 1.8, 0.0), 0.0);
        assert_eq!(frequency_from_spring_rate(0.0, 400.0, 1.0), 0.0);
        assert_eq!(frequency_from_spring_rate(150.0, -5.0, 1.0), 0.0);
        assert_eq!(wheel_rate_from_spring_rate(-150.0, 1.0), 0.0);
    }

    #[test]
    fn model_solves_from_either_end() {
        let from_frequency = SpringRateModel::default().solve();
        let from_rate = SpringRateModel {
            target: SpringTarget::SpringRate(from_frequency.spring_rate),
            ..SpringRateModel::default()
        }
        .solve();
        assert_relative_eq!(from_rate.frequency, 1.8, epsilon = 1.0e-12);
        assert_relative_eq!(from_rate.wheel_rate, from_frequency.wheel_rate);
    }

    #[test]
    fn negative_spring_rate_reports_all_zero() {
        let rates = SpringRateModel {
            target: SpringTarget::SpringRate(-150.0),
            ..SpringRateModel::default()
        }
        .solve();
        assert_eq!(
            rates,
            RideRates {
                spring_rate: 0.0,
                wheel_rate: 0.0,
                frequency: 0.0,
            }
        );
    }
}
