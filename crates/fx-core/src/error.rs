use thiserror::Error;

/// Failures surfaced by the core. None of these are fatal to the page; callers
/// log them and degrade.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("no stylesheet host available for animation `{0}`")]
    StyleUnavailable(String),
    #[error("failed to install animation `{name}`: {reason}")]
    Install { name: String, reason: String },
}

pub type FxResult<T> = Result<T, FxError>;
