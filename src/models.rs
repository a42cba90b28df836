//! Public Twine models.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (e.g., `thermal`).
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** re-exported as part of the public API;
//! the types a host needs are re-exported from the model module itself.
//!
//! A model may be exposed through more than one adapter. The timber model has a
//! stateful material facade for element-level solvers and a thin
//! [`twine_core::Model`] adapter for pure, snapshot-style evaluation.

pub mod thermal;
