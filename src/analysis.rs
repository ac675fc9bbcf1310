use rollcentre::{
    CalculatorConfig, CamberGainTable, GeometryError, RideRates, RollCentreSummary, RollSweep,
    Session, SetupSolution, SuspensionSetup, SweepSeries,
};

/// Everything the report shows for one setup.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    /// Geometry that was analysed.
    pub setup: SuspensionSetup,
    /// Full front and rear solution.
    pub solution: SetupSolution,
    /// Heights as they would be saved.
    pub summary: RollCentreSummary,
    /// Corner spring model results.
    pub rates: RideRates,
    /// Camber through travel.
    pub camber: CamberGainTable,
    /// Roll centre, swing arm and camber through travel.
    pub sweep: SweepSeries,
    /// Roll centre through body roll.
    pub roll: RollSweep,
}

/// Solve the configured default setup and run every analysis on it.
///
/// The front geometry passes through a [`Session`] the same way an entered
/// setup would before the camber and sweep views read it.
pub fn run_analysis(config: &CalculatorConfig) -> Result<AnalysisSummary, GeometryError> {
    let setup = config.defaults;
    let solution = setup.solve()?;

    let mut session = Session::new(config);
    session.record_front(setup.front);

    Ok(AnalysisSummary {
        setup,
        solution,
        summary: setup.summary(),
        rates: config.springs.solve(),
        camber: session.camber_gain()?,
        sweep: session.travel_sweep()?,
        roll: session.roll_sweep()?,
    })
}
