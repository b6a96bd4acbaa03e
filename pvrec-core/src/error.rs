/// Errors the core can raise.
///
/// Per the engine's failure semantics, none of these ever abort an
/// in-progress batch — they are raised only from [`crate::Params::validate`].
/// Callers are expected to call `validate()` themselves before handing
/// parameters to [`crate::AssociationEngine::set_params`]; the engine does
/// not validate on their behalf.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("step_min ({step_min}) must be <= step_max ({step_max})")]
    InvalidStepWindow { step_min: f64, step_max: f64 },
    #[error("npt_min must be >= 1, got {0}")]
    InvalidNptMin(usize),
    #[error("dt_max must be >= 0, got {0}")]
    InvalidDtMax(f64),
    #[error("dxy_max must be >= 0, got {0}")]
    InvalidDxyMax(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
