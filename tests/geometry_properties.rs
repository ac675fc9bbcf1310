#![warn(clippy::pedantic)]

use approx::assert_relative_eq;
use rollcentre::{
    frequency_from_spring_rate, solve_front, solve_front_side, solve_rear,
    spring_rate_from_frequency, travel_sweep, FrontGeometryInput, InstantCentre,
    RearGeometryInput, UPPER_TRAVEL_FACTOR,
};

fn reference_front() -> FrontGeometryInput {
    FrontGeometryInput {
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

fn upper_link(
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
fn parallel_arms_never_produce_a_finite_instant_centre() {
    for drop in [0.0, 0.5, -1.25, 3.0] {
        let input = FrontGeometryInput {
            lca_length: 11.0,
            uca_length: 11.0,
            lca_inner_height: 6.0,
            lca_outer_height: 6.0 - drop,
            uca_inner_height: 14.0,
            uca_outer_height: 14.0 - drop,
            ..reference_front()
        };
        let result = solve_front_side(&input, 0.0).expect("parallel arms are valid geometry");
        assert_eq!(result.instant_centre, InstantCentre::Parallel);
        assert_eq!(result.roll_centre_height, 0.0);
        assert!(result.fvsa_length.is_none());
    }
}

#[test]
fn reference_front_geometry_has_a_finite_roll_centre() {
    let result = solve_front_side(&reference_front(), 0.0).expect("valid geometry");
    let ic = result.instant_centre.point().expect("slopes differ");

    // Reference closed form, written out longhand.
    let lower_slope = (5.5 - 6.0) / (30.0 - 4.0);
    let upper_slope = (13.0 - 14.0) / (30.0 - 4.0);
    let ic_x = 4.0 + (14.0 - 6.0) / (lower_slope - upper_slope);
    let ic_y = 6.0 + lower_slope * (ic_x - 4.0);
    let rc = ic_y * (0.0 - 30.0) / (ic_x - 30.0);

    assert_relative_eq!(ic.x, ic_x, epsilon = 1.0e-9);
    assert_relative_eq!(ic.y, ic_y, epsilon = 1.0e-9);
    assert_relative_eq!(result.roll_centre_height, rc, epsilon = 1.0e-12);
    assert_relative_eq!(
        result.fvsa_length.expect("finite"),
        ((ic_x - 30.0).powi(2) + ic_y.powi(2)).sqrt(),
        epsilon = 1.0e-9
    );
}

#[test]
fn camber_change_is_zero_at_static_for_any_geometry() {
    for (lca_outer, uca_outer, half_track) in [
        (5.5, 13.0, 30.0),
        (7.0, 12.0, 28.0),
        (4.0, 15.5, 33.0),
    ] {
        let input = FrontGeometryInput {
            lca_outer_height: lca_outer,
            uca_outer_height: uca_outer,
            half_track,
            ..reference_front()
        };
        let result = solve_front_side(&input, 0.0).expect("valid geometry");
        assert_eq!(result.camber_change_deg, 0.0);
    }
}

#[test]
fn camber_change_follows_arm_angles_through_travel() {
    let input = reference_front();
    let travel = 1.5;
    let result = solve_front_side(&input, travel).expect("valid geometry");
    let span = 30.0 - 4.0;
    let camber = |t: f64| {
        let upper = (13.0 + t * UPPER_TRAVEL_FACTOR - 14.0_f64).atan2(span);
        let lower = (5.5 + t - 6.0_f64).atan2(span);
        (upper - lower).to_degrees()
    };
    assert_relative_eq!(result.camber_deg, camber(travel), epsilon = 1.0e-12);
    assert_relative_eq!(
        result.camber_change_deg,
        camber(travel) - camber(0.0),
        epsilon = 1.0e-12
    );
}

#[test]
fn rear_projection_matches_worked_example() {
    let result = solve_rear(&upper_link(18.0, 16.0, 2.0, 6.0)).expect("finite input");
    assert_relative_eq!(result.roll_centre_height, 19.0, epsilon = 1.0e-12);
}

#[test]
fn rear_projection_is_pinned_when_frame_mount_is_on_centreline() {
    for axle_offset in [0.5, 1.0, 2.0, 4.0, 8.0] {
        let result = solve_rear(&upper_link(10.0, 16.0, 0.0, axle_offset)).expect("finite input");
        assert_relative_eq!(result.roll_centre_height, 10.0, epsilon = 1.0e-12);
    }
}

#[test]
fn rear_projection_moves_strictly_with_axle_offset() {
    // Height at the centreline is 10 - 2 * 6 / (axle_offset - 2).
    let heights: Vec<f64> = [3.0, 4.0, 6.0, 10.0]
        .into_iter()
        .map(|axle_offset| {
            solve_rear(&upper_link(10.0, 16.0, 2.0, axle_offset))
                .expect("finite input")
                .roll_centre_height
        })
        .collect();
    assert!(heights.windows(2).all(|pair| pair[1] > pair[0]));
    assert_relative_eq!(heights[0], -2.0, epsilon = 1.0e-12);
    assert_relative_eq!(heights[3], 8.5, epsilon = 1.0e-12);
}

#[test]
fn degenerate_upper_link_uses_exact_mean() {
    for (frame_offset, axle_offset) in [(3.0, 3.0), (3.0, 3.000_9), (5.0, 4.999_5)] {
        let result =
            solve_rear(&upper_link(17.3, 12.1, frame_offset, axle_offset)).expect("finite input");
        assert_eq!(result.roll_centre_height, (17.3 + 12.1) / 2.0);
        assert!(result.degenerate_link);
    }
}

#[test]
fn spring_rate_and_frequency_round_trip() {
    for weight in [150.0, 400.0, 875.5] {
        for frequency in [0.9, 1.8, 3.25] {
            for ratio in [0.4, 0.75, 1.0, 1.3] {
                let rate = spring_rate_from_frequency(weight, frequency, ratio);
                let back = frequency_from_spring_rate(rate, weight, ratio);
                assert_relative_eq!(back, frequency, epsilon = 1.0e-9);
            }
        }
    }
}

#[test]
fn spring_rate_for_worked_example() {
    let rate = spring_rate_from_frequency(400.0, 1.8, 1.0);
    assert!((rate - 132.4).abs() < 0.1, "rate was {rate}");
}

#[test]
fn sweep_is_zero_at_static_and_continuous() {
    let input = reference_front();
    let sweep = travel_sweep(&input, 2.0, 41).expect("valid geometry");

    let nearest = sweep.nearest_to_static().expect("samples");
    assert_eq!(nearest.travel, 0.0);
    assert_eq!(nearest.camber_change_deg, 0.0);

    // A finer sweep over the same range bounds the largest single-step jump.
    let fine = travel_sweep(&input, 2.0, 401).expect("valid geometry");
    let fine_step = fine
        .points
        .windows(2)
        .map(|pair| (pair[1].roll_centre_height - pair[0].roll_centre_height).abs())
        .fold(0.0, f64::max);
    for pair in sweep.points.windows(2) {
        let jump = (pair[1].roll_centre_height - pair[0].roll_centre_height).abs();
        assert!(jump <= fine_step * 10.0 + 1.0e-9, "jump {jump} at {}", pair[0].travel);
    }
}

#[test]
fn rolled_axle_reports_mean_of_sides() {
    let input = FrontGeometryInput {
        body_roll_deg: -2.5,
        ..reference_front()
    };
    let solution = solve_front(&input).expect("valid geometry");
    let bias = 30.0 * (-2.5_f64).to_radians().sin();
    let left = solve_front_side(&input, bias).expect("valid geometry");
    let right = solve_front_side(&input, -bias).expect("valid geometry");
    assert_relative_eq!(
        solution.roll_centre_height(),
        (left.roll_centre_height + right.roll_centre_height) / 2.0
    );
}
