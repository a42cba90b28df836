//! Thermal material models.
//!
//! This module contains heat-transfer material models whose properties depend
//! on temperature and on their thermal history.

pub mod timber;
