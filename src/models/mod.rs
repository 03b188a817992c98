//! Linear model representation.
//!
//! Kept separate from `fit` so that scoring a reloaded model does not pull in
//! any fitting code.

pub mod model;

pub use model::*;
