/// Crate-wide result alias.
pub type StillreelResult<T> = Result<T, StillreelError>;

/// Every failure either tool can report. All of them are fatal to the run.
#[derive(thiserror::Error, Debug)]
pub enum StillreelError {
    #[error("no frames found: nothing matched '{0}'")]
    NoFramesFound(String),

    #[error("discovery error: {0}")]
    Discovery(String),

    #[error("index extraction error: {0}")]
    IndexExtraction(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("precondition failed: at least 2 images are required, got {got}")]
    TooFewImages { got: usize },

    #[error("precondition failed: got {labels} labels for {images} images")]
    LabelCountMismatch { images: usize, labels: usize },

    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("font error: {0}")]
    Font(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StillreelError {
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }

    pub fn index_extraction(msg: impl Into<String>) -> Self {
        Self::IndexExtraction(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition(msg.into())
    }

    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
