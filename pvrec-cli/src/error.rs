/// Maps directly to the negative exit codes from the CLI's documented
/// contract (§6): -1 through -6, plus the additive -7 for a `--params` file
/// that fails to parse or fails [`pvrec_core::Params::validate`].
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("usage: pvrec [-F|-D] <input-path> <output-dir>")]
    BadArgumentCount,
    #[error("undefined parameter: {0}")]
    UnknownFlag(String),
    #[error("too many directories given")]
    ExtraPositional,
    #[error("-F target is not a regular file: {0}")]
    NotAFile(String),
    #[error("-D target is not a directory: {0}")]
    NotADirectory(String),
    #[error("failed to create output directory: {0}")]
    CannotCreateOutputDir(String),
    #[error("invalid --params file: {0}")]
    InvalidParams(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::BadArgumentCount => -1,
            CliError::UnknownFlag(_) => -2,
            CliError::ExtraPositional => -3,
            CliError::NotAFile(_) => -4,
            CliError::NotADirectory(_) => -5,
            CliError::CannotCreateOutputDir(_) => -6,
            CliError::InvalidParams(_) => -7,
        }
    }
}
