//! Candidate motion models.
//!
//! A candidate has no motion model with fewer than 2 confirmed points (the
//! per-axis step gate alone admits extensions, §4.1 step 2); [`linear`]
//! applies once it has exactly 2, and [`accelerated`] once it has 3 or
//! more. Each module mirrors the teacher's one-file-per-model-order
//! layout, but here the model's parameters (vx, vy, ax, ay) live on
//! [`crate::candidate::Candidate`] itself rather than in a separate state
//! struct, since there is exactly one instance per candidate and no
//! covariance to carry along.

pub mod accelerated;
pub mod linear;
