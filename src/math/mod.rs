//! Mathematical utilities: dense linear solves.

pub mod linsys;

pub use linsys::*;
