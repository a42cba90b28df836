use uom::si::{f64::Time, time::second};

use super::{ParameterTable, ThresholdSchedule};

/// Table used throughout the tests: wet, dry, char and ash rows.
pub(crate) fn scenario_table() -> ParameterTable {
    ParameterTable::from_raw([
        [95.0, 600.0, 0.3, 2500.0],
        [300.0, 450.0, 0.2, 1800.0],
        [800.0, 200.0, 0.4, 1200.0],
        [f64::NAN, 100.0, 0.5, 1000.0],
    ])
}

/// Schedule with `dt = [60, 300, 600]` s over [`scenario_table`].
pub(crate) fn scenario_schedule() -> ThresholdSchedule {
    ThresholdSchedule::from_raw(&[60.0, 300.0, 600.0], Some(&scenario_table()))
        .expect("scenario thresholds must be valid")
}

/// Scenario schedule releasing `q` W/m³ at full charring.
pub(crate) fn burning_schedule(q: f64) -> ThresholdSchedule {
    ThresholdSchedule::from_raw(&[60.0, 300.0, 600.0, q], Some(&scenario_table()))
        .expect("scenario thresholds must be valid")
}

pub(crate) fn seconds(value: f64) -> Time {
    Time::new::<second>(value)
}
