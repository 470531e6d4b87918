use thiserror::Error;

/// Fatal gate failure. Everything else resolves to a verdict.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("invalid JSON input: {0}")]
    InputParse(#[from] serde_json::Error),
}
