//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Coarse failure category reported to callers alongside the message.
///
/// Transport layers map these onto their own status codes; the core never
/// needs more detail than this to decide how a failure surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed encoded input or an argument outside the operation's domain
    InvalidArgument,
    /// No modular inverse exists for the operands
    Arithmetic,
    /// A computed value violates the scheme (identity shared secret, bad plaintext)
    InvalidState,
    /// The random source failed
    RandomGeneration,
    /// Anything else
    Other,
}

impl ErrorKind {
    /// Stable lowercase name, suitable for logs and wire responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid_argument",
            Self::Arithmetic => "arithmetic_error",
            Self::InvalidState => "invalid_state",
            Self::RandomGeneration => "random_generation_error",
            Self::Other => "other",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Malformed input (bad hex, wrong delimiter count, missing fields,
    /// negative scalar, point off the curve)
    #[error("Invalid argument: {context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// No modular inverse exists
    #[error("Arithmetic error: {context}: {message}")]
    Arithmetic {
        context: &'static str,
        message: String,
    },

    /// Degenerate shared secret or undecodable plaintext
    #[error("Invalid state: {context}: {message}")]
    InvalidState {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::InvalidArgument`].
    pub fn invalid_argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidState`].
    pub fn invalid_state(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidState {
            context,
            message: message.into(),
        }
    }

    /// Failure category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Arithmetic { .. } => ErrorKind::Arithmetic,
            Self::InvalidState { .. } => ErrorKind::InvalidState,
            Self::RandomGenerationError { .. } => ErrorKind::RandomGeneration,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Context string recorded when the error was raised
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidArgument { context, .. }
            | Self::Arithmetic { context, .. }
            | Self::InvalidState { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    /// Replace the context of an existing error, keeping its message
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidArgument { message, .. } => Self::InvalidArgument { context, message },
            Self::Arithmetic { message, .. } => Self::Arithmetic { context, message },
            Self::InvalidState { message, .. } => Self::InvalidState { context, message },
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error, keeping its context
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidArgument { context, .. } => Self::InvalidArgument { context, message },
            Self::Arithmetic { context, .. } => Self::Arithmetic { context, message },
            Self::InvalidState { context, .. } => Self::InvalidState { context, message },
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}
