use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_npt_min() -> usize {
    5
}

fn default_dt_max() -> f64 {
    60.0 / 86_400.0
}

fn default_step_min() -> f64 {
    1.0
}

fn default_step_max() -> f64 {
    100.0
}

fn default_dxy_max() -> f64 {
    5.0
}

/// Tuning knobs for the association engine.
///
/// A [`Params`] is set with [`crate::AssociationEngine::set_params`] and takes
/// effect starting with the next [`crate::AssociationEngine::begin_batch`] —
/// it never changes behavior mid-batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Minimum confirmed points for a candidate to be promoted to an object.
    #[serde(default = "default_npt_min")]
    pub npt_min: usize,
    /// Maximum MJD gap (days) between a candidate's last update and the
    /// current frame before the candidate is retired.
    #[serde(default = "default_dt_max")]
    pub dt_max: f64,
    /// Minimum admissible per-axis pixel displacement between consecutive
    /// confirmed points.
    #[serde(default = "default_step_min")]
    pub step_min: f64,
    /// Maximum admissible per-axis pixel displacement between consecutive
    /// confirmed points.
    #[serde(default = "default_step_max")]
    pub step_max: f64,
    /// Maximum per-axis deviation (pixels) between predicted and observed
    /// position when a candidate already has a motion model.
    #[serde(default = "default_dxy_max")]
    pub dxy_max: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            npt_min: default_npt_min(),
            dt_max: default_dt_max(),
            step_min: default_step_min(),
            step_max: default_step_max(),
            dxy_max: default_dxy_max(),
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        if self.npt_min < 1 {
            return Err(Error::InvalidNptMin(self.npt_min));
        }
        if self.dt_max < 0.0 {
            return Err(Error::InvalidDtMax(self.dt_max));
        }
        if self.dxy_max < 0.0 {
            return Err(Error::InvalidDxyMax(self.dxy_max));
        }
        if self.step_min > self.step_max {
            return Err(Error::InvalidStepWindow {
                step_min: self.step_min,
                step_max: self.step_max,
            });
        }
        Ok(())
    }
}
