//! # Twine Timber
//!
//! Timber thermal-degradation material models for heat-transfer analysis in
//! structural-fire simulations built on [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Material models, including the timber phase model and its
//!   [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! only moves to [`support`] once it is useful outside that model.

pub mod models;
pub mod support;
