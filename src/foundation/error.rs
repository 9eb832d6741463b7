use std::io::ErrorKind;

/// Convenience result type used across gifplay.
pub type GifResult<T> = Result<T, GifError>;

/// Top-level error taxonomy used by loading, compositing and playback APIs.
///
/// Every error is terminal for the load attempt that produced it. Once a
/// [`Player`](crate::Player) exists, playback operations cannot fail.
#[derive(thiserror::Error, Debug)]
pub enum GifError {
    /// The animation source could not be opened or read.
    #[error("source unavailable: {context}")]
    SourceUnavailable {
        /// What was being read (usually a path).
        context: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The external decoder rejected the source bytes.
    #[error("decode failed: {0}")]
    DecodeFailed(#[source] gif::DecodingError),

    /// Structural precondition violated (zero frames, empty canvas, mismatched tables).
    #[error("invalid animation: {0}")]
    InvalidAnimation(String),

    /// Load options could not be parsed or validated.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or renderer sinks.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Discriminant of [`GifError`], for callers that branch on the failure kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GifErrorKind {
    /// See [`GifError::SourceUnavailable`].
    SourceUnavailable,
    /// See [`GifError::DecodeFailed`].
    DecodeFailed,
    /// See [`GifError::InvalidAnimation`].
    InvalidAnimation,
    /// See [`GifError::Config`].
    Config,
    /// See [`GifError::Other`].
    Other,
}

impl GifError {
    /// Build a [`GifError::SourceUnavailable`] value.
    pub fn source_unavailable(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            context: context.into(),
            source,
        }
    }

    /// Build a [`GifError::InvalidAnimation`] value.
    pub fn invalid_animation(msg: impl Into<String>) -> Self {
        Self::InvalidAnimation(msg.into())
    }

    /// Build a [`GifError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Which kind of failure this is.
    pub fn kind(&self) -> GifErrorKind {
        match self {
            Self::SourceUnavailable { .. } => GifErrorKind::SourceUnavailable,
            Self::DecodeFailed(_) => GifErrorKind::DecodeFailed,
            Self::InvalidAnimation(_) => GifErrorKind::InvalidAnimation,
            Self::Config(_) => GifErrorKind::Config,
            Self::Other(_) => GifErrorKind::Other,
        }
    }
}

impl From<gif::DecodingError> for GifError {
    fn from(err: gif::DecodingError) -> Self {
        match err {
            // A stream that ends early is malformed, not unreadable.
            gif::DecodingError::Io(source) if source.kind() != ErrorKind::UnexpectedEof => {
                Self::source_unavailable("read gif stream", source)
            }
            other => Self::DecodeFailed(other),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
