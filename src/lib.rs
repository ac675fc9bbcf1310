#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

mod compare;
mod config;
mod errors;
mod front;
mod geometry;
mod rear;
mod record;
mod session;
mod springs;
mod store;
mod sweep;

pub use compare::{changed_fields, compare_records, compare_rows, FieldDiff};
pub use config::{CalculatorConfig, RollSettings, SweepSettings};
pub use errors::{Arm, ConfigError, GeometryError, StoreError};
pub use front::{
    camber_at_travel, roll_travel_bias, solve_front, solve_front_side, CamberReading,
    FrontGeometryInput, FrontGeometryResult, FrontSolution, InstantCentre, INNER_PIVOT_OFFSET,
    PARALLEL_TOLERANCE, UPPER_TRAVEL_FACTOR,
};
pub use geometry::{intersect_shared_abscissa, line_angle, point, y_on_line_at, Line, Point};
pub use rear::{solve_rear, RearGeometryInput, RearGeometryResult, DEGENERATE_LINK_OFFSET};
pub use record::{
    height_or_ground, LogBook, LogRecord, RollCentreSummary, SetupSolution, SuspensionSetup,
    LOG_HEADERS, TEXT_FIELDS,
};
pub use session::Session;
pub use springs::{
    frequency_from_spring_rate, spring_rate_from_frequency, spring_rate_from_wheel_rate,
    wheel_rate_from_frequency, wheel_rate_from_spring_rate, RideRates, SpringRateModel,
    SpringTarget, GRAVITY_IN_PER_S2,
};
pub use store::{JsonSheet, MemorySheet, Row, RowIndex, Sheet};
pub use sweep::{
    camber_gain_table, roll_sweep, sample_travels, travel_sweep, CamberGainRow, CamberGainTable,
    RollSweep, RollSweepPoint, SeriesRange, SweepPoint, SweepSeries,
};

/// Today's date as saved in the log, `YYYY-MM-DD` in local time.
#[must_use]
pub fn today_label() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
