//! Streaming association engine for the PV (position-variable-source)
//! tracklet recognizer.
//!
//! The engine (see [`AssociationEngine`]) ingests one camera batch's worth
//! of time-ordered [`Detection`]s and emits [`Object`]s: tracklets that
//! survived the per-frame kinematic association described in the crate's
//! design document. Everything outside this crate — line parsing, time
//! conversion, file I/O, the CLI — is an adapter; this crate only knows
//! about in-memory records and MJD timestamps.

mod candidate;
mod detection;
mod engine;
mod error;
mod frame;
mod motion;
mod object;
mod params;

pub use detection::Detection;
pub use engine::AssociationEngine;
pub use error::{Error, Result};
pub use object::Object;
pub use params::Params;
