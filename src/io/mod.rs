//! Input/output helpers.
//!
//! - numeric CSV ingest (`ingest`)
//! - model file read/write (`model_file`)
//! - prediction export (`export`)

pub mod export;
pub mod ingest;
pub mod model_file;

pub use export::*;
pub use ingest::*;
pub use model_file::*;
