//! Adapters around [`pvrec_core::AssociationEngine`]: input-line parsing,
//! directory traversal for the `-F`/`-D` CLI modes, TOML parameter
//! overrides, and tracklet file writing.

pub mod batches;
pub mod error;
pub mod input;
pub mod output;
pub mod params_file;

pub use error::{Error, Result};
