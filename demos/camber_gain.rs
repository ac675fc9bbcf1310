use rollcentre::{camber_gain_table, roll_sweep, FrontGeometryInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let front = FrontGeometryInput::default();

    let table = camber_gain_table(&front, 3.0, 13)?;
    println!("{:>8} {:>10} {:>10}", "travel", "camber", "change");
    for row in &table.rows {
        println!(
            "{:>8.2} {:>10.3} {:>10.3}",
            row.travel, row.camber_deg, row.camber_change_deg
        );
    }
    if let Some(gain) = table.average_gain() {
        println!("Average gain: {gain:+.3} deg/in");
    }

    let roll = roll_sweep(&front, 4.0, 9)?;
    for point in &roll.points {
        println!(
            "roll {:+.1} deg: left {:.3}, right {:.3}, mean {:.3}",
            point.roll_deg,
            point.left_roll_centre_height,
            point.right_roll_centre_height,
            point.roll_centre_height
        );
    }

    Ok(())
}
