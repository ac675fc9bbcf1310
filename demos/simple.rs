use rollcentre::{
    solve_front, solve_rear, FrontGeometryInput, RearGeometryInput, RollCentreSummary,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Front double A-arm measured off the car
    let front = FrontGeometryInput {
        lca_length: 12.0,
        uca_length: 10.0,
        lca_inner_height: 6.0,
        lca_outer_height: 5.5,
        uca_inner_height: 14.0,
        uca_outer_height: 13.0,
        half_track: 30.0,
        ..FrontGeometryInput::default()
    };

    // Rear upper link mounts
    let rear = RearGeometryInput {
        upper_link_frame_height: 18.0,
        upper_link_axle_height: 16.0,
        upper_link_frame_offset: 2.0,
        upper_link_axle_offset: 6.0,
        ..RearGeometryInput::default()
    };

    let front_solution = solve_front(&front)?;
    let rear_solution = solve_rear(&rear)?;
    let summary = RollCentreSummary::new(
        front_solution.roll_centre_height(),
        rear_solution.roll_centre_height,
    );

    match front_solution.primary().fvsa_length {
        Some(fvsa) => println!("Front FVSA: {fvsa:.2} in"),
        None => println!("Front arms are parallel."),
    }
    println!(
        "Front RC {:.3} in, rear RC {:.3} in ({})",
        summary.front_rc_height,
        summary.rear_rc_height,
        summary.balance_label()
    );

    Ok(())
}
