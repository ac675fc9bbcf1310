use crate::analysis::AnalysisSummary;
use rollcentre::{FrontGeometryResult, FrontSolution, InstantCentre};
use std::fmt::Write;

/// Describe one front side in a single line.
fn describe_side(label: &str, side: &FrontGeometryResult) -> String {
    let centre = match side.instant_centre {
        InstantCentre::Finite(ic) => format!("IC ({:.2}, {:.2})", ic.x, ic.y),
        InstantCentre::Parallel => "IC at infinity (parallel arms)".to_owned(),
    };
    let fvsa = side
        .fvsa_length
        .map_or_else(|| "n/a".to_owned(), |length| format!("{length:.2} in"));
    format!(
        "{label}: travel {:+.3} in, {centre}, RC {:.3} in, FVSA {fvsa}, camber {:+.3} deg",
        side.wheel_travel, side.roll_centre_height, side.camber_deg
    )
}

/// Render a text report of the analysis.
#[must_use]
pub fn render_summary(summary: &AnalysisSummary) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Roll centre analysis (front half-track = {:.2} in)",
        summary.setup.front.half_track
    )
    .expect("writing to string cannot fail");

    match &summary.solution.front {
        FrontSolution::Static(side) => {
            writeln!(&mut output, "{}", describe_side("Front", side))
                .expect("writing to string cannot fail");
        }
        FrontSolution::Rolled {
            roll_deg,
            left,
            right,
        } => {
            writeln!(&mut output, "Body roll {roll_deg:+.2} deg")
                .expect("writing to string cannot fail");
            writeln!(&mut output, "{}", describe_side("Left", left))
                .expect("writing to string cannot fail");
            writeln!(&mut output, "{}", describe_side("Right", right))
                .expect("writing to string cannot fail");
        }
    }

    let rc = &summary.summary;
    writeln!(
        &mut output,
        "Front RC {:.3} in | Rear RC {:.3} in | Diff {:+.3} in ({})",
        rc.front_rc_height,
        rc.rear_rc_height,
        rc.rc_height_diff,
        rc.balance_label()
    )
    .expect("writing to string cannot fail");
    if summary.solution.rear.degenerate_link {
        output.push_str("Rear upper link is vertical; mean mount height used\n");
    }

    writeln!(
        &mut output,
        "Springs: spring rate {:.1} lbf/in, wheel rate {:.1} lbf/in, ride frequency {:.2} Hz",
        summary.rates.spring_rate, summary.rates.wheel_rate, summary.rates.frequency
    )
    .expect("writing to string cannot fail");

    if let Some(gain) = summary.camber.average_gain() {
        writeln!(&mut output, "Average camber gain: {gain:+.3} deg/in")
            .expect("writing to string cannot fail");
    }
    if let Some(range) = summary.sweep.roll_centre_range() {
        writeln!(
            &mut output,
            "RC through travel: {:.3} to {:.3} in",
            range.min, range.max
        )
        .expect("writing to string cannot fail");
    }
    if let Some(range) = summary.sweep.fvsa_range() {
        writeln!(
            &mut output,
            "FVSA through travel: {:.2} to {:.2} in",
            range.min, range.max
        )
        .expect("writing to string cannot fail");
    }
    if let Some(range) = summary.sweep.camber_change_range() {
        writeln!(
            &mut output,
            "Camber change through travel: {:+.3} to {:+.3} deg",
            range.min, range.max
        )
        .expect("writing to string cannot fail");
    }
    if let Some(range) = summary.roll.roll_centre_range() {
        writeln!(
            &mut output,
            "RC through roll: {:.3} to {:.3} in",
            range.min, range.max
        )
        .expect("writing to string cannot fail");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_analysis;
    use rollcentre::CalculatorConfig;

    #[test]
    fn formats_human_readable_report() {
        let summary = run_analysis(&CalculatorConfig::default()).expect("default geometry solves");
        let report = render_summary(&summary);
        assert!(report.contains("Roll centre analysis"));
        assert!(report.contains("Rear RC 19.000 in"));
        assert!(report.contains("Rear higher"));
        assert!(report.contains("IC (420.00, -2.00)"));
    }

    #[test]
    fn parallel_arms_are_called_out() {
        let mut config = CalculatorConfig::default();
        config.defaults.front.uca_outer_height = 13.5;
        let summary = run_analysis(&config).expect("parallel arms still solve");
        let report = render_summary(&summary);
        assert!(report.contains("IC at infinity"));
        assert!(report.contains("Front RC 0.000 in"));
    }
}
