//! Supporting utilities used by models.
//!
//! - [`clock`]: Simulation-time handles supplied by the owning domain.
//! - [`constraint`]: Type-level numeric constraints.
//! - [`units`]: Extensions to [`uom`].

pub mod clock;
pub mod constraint;
pub mod units;
