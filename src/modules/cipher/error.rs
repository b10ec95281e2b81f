use std::error::Error;
use std::fmt;

/// The high-level operation that was in progress when a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoOp {
    DeriveKeyAndIv,
    EncryptText,
    EncryptBytes,
    DecryptText,
    DecryptBytes,
}

impl fmt::Display for CryptoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CryptoOp::DeriveKeyAndIv => "derive a cryptographic key and IV",
            CryptoOp::EncryptText => "encrypt a string with AES",
            CryptoOp::EncryptBytes => "encrypt a byte buffer with AES",
            CryptoOp::DecryptText => "decrypt a string with AES",
            CryptoOp::DecryptBytes => "decrypt a byte buffer with AES",
        };
        write!(f, "{}", name)
    }
}

/// Custom error type for cryptographic operations
#[derive(Debug)]
pub enum CryptoError {
    /// A caller-supplied argument violated a precondition. Detected
    /// before any cryptographic work starts and never wraps a cause.
    InvalidArgument(String),
    /// The cryptographic computation itself failed. Wraps the
    /// originating error and names the operation that was in progress.
    OperationFailed {
        operation: CryptoOp,
        source: Box<dyn Error + Send + Sync>,
    },
}

impl CryptoError {
    pub(crate) fn failed<E>(operation: CryptoOp, source: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        CryptoError::OperationFailed {
            operation,
            source: source.into(),
        }
    }
}

// Implementation of Display trait for CryptoError
impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            CryptoError::OperationFailed { operation, source } => {
                write!(f, "Failed to {}: {}", operation, source)
            }
        }
    }
}

impl Error for CryptoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CryptoError::InvalidArgument(_) => None,
            CryptoError::OperationFailed { source, .. } => Some(source.as_ref()),
        }
    }
}
