/// Errors the I/O adapters can raise.
///
/// Malformed input *lines* are deliberately not a variant here: per the
/// core's error-handling design, a bad line is skipped and counted, never
/// propagated as a hard failure (see [`crate::input::ParsedInput`]).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("{source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("{source}")]
    TomlDe {
        #[from]
        source: toml::de::Error,
    },
    #[error("{source}")]
    InvalidParams {
        #[from]
        source: pvrec_core::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
