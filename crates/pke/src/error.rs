//! Error handling for PKE operations.

use std::borrow::Cow;
use std::fmt;

use kcrypt_algorithms::error::Error as PrimitiveError;
use kcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug)]
pub enum Error {
    /// Failure reported by the curve engine or another primitive
    Primitive(PrimitiveError),
    /// Error already expressed in the public taxonomy
    Api(CoreError),
    /// A key string or key value that cannot be used
    InvalidKeyFormat(Cow<'static, str>),
    /// An envelope that cannot be parsed or holds invalid fields
    InvalidCiphertextFormat(Cow<'static, str>),
    /// ECDH produced the point at infinity
    DegenerateSharedSecret(&'static str),
    /// The recovered plaintext is unusable
    DecryptionFailed(&'static str),
    /// Envelope could not be written out
    SerializationError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::InvalidKeyFormat(reason) => write!(f, "Invalid PKE key: {}", reason),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid PKE ciphertext format: {}", reason)
            }
            Error::DegenerateSharedSecret(reason) => {
                write!(f, "Degenerate ECDH shared secret: {}", reason)
            }
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
            Error::SerializationError(reason) => {
                write!(f, "PKE internal serialization error: {}", reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::InvalidKeyFormat(reason) => CoreError::InvalidArgument {
                context: "ECIES key",
                message: reason.into_owned(),
            },
            Error::InvalidCiphertextFormat(reason) => CoreError::InvalidArgument {
                context: "ECIES envelope",
                message: reason.into_owned(),
            },
            Error::DegenerateSharedSecret(reason) => CoreError::InvalidState {
                context: "ECIES shared secret",
                message: reason.to_string(),
            },
            Error::DecryptionFailed(reason) => CoreError::InvalidState {
                context: "ECIES Decryption",
                message: reason.to_string(),
            },
            Error::SerializationError(reason) => CoreError::Other {
                context: "ECIES envelope",
                message: reason,
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
