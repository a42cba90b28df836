//! Simulation-time handles.
//!
//! Materials with a thermal history need to know the current analysis time,
//! which is owned by the solver domain rather than by the material itself.
//! The [`SimulationClock`] trait is the narrow view of that domain a material
//! holds on to.
//!
//! A [`ManualClock`] is provided for hosts (and tests) that drive time
//! explicitly. Share one between several materials with [`Rc`]:
//!
//! ```
//! use std::rc::Rc;
//!
//! use twine_timber::support::clock::{ManualClock, SimulationClock};
//! use uom::si::{f64::Time, time::second};
//!
//! let clock = Rc::new(ManualClock::default());
//! let view = Rc::clone(&clock);
//!
//! clock.set(Time::new::<second>(30.0));
//! assert_eq!(view.current_time(), Time::new::<second>(30.0));
//! ```

use std::{cell::Cell, rc::Rc, sync::Arc};

use uom::{ConstZero, si::f64::Time};

/// A read-only view of the owning domain's simulation time.
pub trait SimulationClock {
    /// Returns the current simulation time.
    ///
    /// Implementations should be monotonic and non-negative over an analysis.
    fn current_time(&self) -> Time;
}

impl<T: SimulationClock + ?Sized> SimulationClock for &T {
    fn current_time(&self) -> Time {
        (**self).current_time()
    }
}

impl<T: SimulationClock + ?Sized> SimulationClock for Rc<T> {
    fn current_time(&self) -> Time {
        (**self).current_time()
    }
}

impl<T: SimulationClock + ?Sized> SimulationClock for Arc<T> {
    fn current_time(&self) -> Time {
        (**self).current_time()
    }
}

/// A clock whose time is set explicitly by its owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualClock {
    time: Cell<Time>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Time::ZERO)
    }
}

impl ManualClock {
    /// Creates a clock starting at `time`.
    #[must_use]
    pub fn new(time: Time) -> Self {
        Self {
            time: Cell::new(time),
        }
    }

    /// Sets the current time.
    pub fn set(&self, time: Time) {
        self.time.set(time);
    }

    /// Moves the current time forward by `dt`.
    pub fn advance(&self, dt: Time) {
        self.time.set(self.time.get() + dt);
    }
}

impl SimulationClock for ManualClock {
    fn current_time(&self) -> Time {
        self.time.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{minute, second};

    #[test]
    fn manual_clock_moves_forward() {
        let clock = ManualClock::default();
        assert_eq!(clock.current_time(), Time::ZERO);

        clock.advance(Time::new::<second>(10.0));
        clock.advance(Time::new::<minute>(1.0));
        assert_relative_eq!(clock.current_time().get::<second>(), 70.0);
    }

    #[test]
    fn shared_handles_see_the_same_time() {
        let clock = Rc::new(ManualClock::new(Time::new::<second>(5.0)));
        let by_rc = Rc::clone(&clock);
        let by_ref = &*clock;

        clock.set(Time::new::<second>(42.0));

        assert_relative_eq!(by_rc.current_time().get::<second>(), 42.0);
        assert_relative_eq!(by_ref.current_time().get::<second>(), 42.0);
    }
}
