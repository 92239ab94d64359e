/// Convenience result type used across Lectern.
pub type LecternResult<T> = Result<T, LecternError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum LecternError {
    /// The hosting environment is unusable: mount target missing, surface
    /// creation refused, painter unavailable. Fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid deck data caught when the deck is frozen at `init`.
    #[error("deck validation error: {0}")]
    Validation(String),

    /// An error raised inside a slide's authored hook. Never caught by the
    /// engine: a broken visualization must surface loudly, not mid-lesson.
    #[error("content error in `{hook}` hook of slide {slide}: {source}")]
    Content {
        /// Index of the slide whose hook failed.
        slide: usize,
        /// Hook name (`setup`, `draw`, `resize`, `enter`).
        hook: &'static str,
        /// The author's underlying error.
        #[source]
        source: anyhow::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LecternError {
    /// Build a [`LecternError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LecternError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LecternError::Content`] value.
    pub fn content(slide: usize, hook: &'static str, source: anyhow::Error) -> Self {
        Self::Content { slide, hook, source }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
