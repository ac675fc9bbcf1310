//! Geometry carried between the calculator and the analysis views.

use crate::config::{CalculatorConfig, RollSettings, SweepSettings};
use crate::errors::GeometryError;
use crate::front::FrontGeometryInput;
use crate::sweep::{
    camber_gain_table, roll_sweep, travel_sweep, CamberGainTable, RollSweep, SweepSeries,
};

/// The front geometry most recently entered, plus the sampling to analyse it with.
///
/// Views that chart camber gain or sweeps read the geometry from here instead
/// of asking for it again. Until something is entered they see the configured
/// defaults.
///
/// # Examples
/// ```
/// use rollcentre::{CalculatorConfig, FrontGeometryInput, Session};
///
/// let mut session = Session::new(&CalculatorConfig::default());
/// assert!(!session.has_entered_front());
///
/// let entered = FrontGeometryInput { half_track: 32.0, ..FrontGeometryInput::default() };
/// session.record_front(entered);
/// assert_eq!(session.front().half_track, 32.0);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    /// Geometry used before anything is entered.
    defaults: FrontGeometryInput,
    /// Geometry most recently entered.
    last_front: Option<FrontGeometryInput>,
    /// Travel sampling.
    sweep: SweepSettings,
    /// Roll sampling.
    roll: RollSettings,
}

impl Session {
    /// Start a session from configuration.
    #[must_use]
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            defaults: config.defaults.front,
            last_front: None,
            sweep: config.sweep,
            roll: config.roll,
        }
    }

    /// Remember geometry entered in the calculator.
    pub fn record_front(&mut self, input: FrontGeometryInput) {
        self.last_front = Some(input);
    }

    /// Forget entered geometry and fall back to the defaults.
    pub fn clear(&mut self) {
        self.last_front = None;
    }

    /// Whether geometry has been entered this session.
    #[must_use]
    pub fn has_entered_front(&self) -> bool {
        self.last_front.is_some()
    }

    /// Geometry the analysis views should use.
    #[must_use]
    pub fn front(&self) -> FrontGeometryInput {
        self.last_front.unwrap_or(self.defaults)
    }

    /// Camber gain table for the current geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the current geometry is invalid.
    pub fn camber_gain(&self) -> Result<CamberGainTable, GeometryError> {
        camber_gain_table(&self.front(), self.sweep.travel_range, self.sweep.samples)
    }

    /// Travel sweep for the current geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the current geometry is invalid.
    pub fn travel_sweep(&self) -> Result<SweepSeries, GeometryError> {
        travel_sweep(&self.front(), self.sweep.travel_range, self.sweep.samples)
    }

    /// Roll sweep for the current geometry.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] when the current geometry is invalid.
    pub fn roll_sweep(&self) -> Result<RollSweep, GeometryError> {
        roll_sweep(&self.front(), self.roll.max_roll_deg, self.roll.samples)
    }
}
