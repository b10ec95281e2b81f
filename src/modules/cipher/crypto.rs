use base64::{engine::general_purpose::STANDARD as base64, Engine as _};
use block_modes::BlockMode;

use super::error::{CryptoError, CryptoOp};
use super::keys;
use crate::modules::cancel::CancelToken;
use crate::modules::logging::{LogSink, StandardLogSink};
use crate::{Aes256Cbc, Iv, Key, IV_SIZE, KEY_SIZE};

/// Capability set for password-based symmetric cryptography: derive a
/// key/IV pair once, then encrypt or decrypt any number of strings or
/// byte buffers with it.
///
/// Every operation is a pure function of its arguments, so a single
/// key/IV pair may be used concurrently from any number of threads.
/// The optional `cancel` token is advisory: it is checked before the
/// cipher transform starts, never in the middle of one.
pub trait Cryptographer {
    /// Derive a 32-byte AES-256 key and a 16-byte IV from a non-empty
    /// password and salt using PBKDF2 with 10,000 iterations.
    fn derive_key_and_iv(
        &self,
        password: &str,
        salt: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<(Key, Iv), CryptoError>;

    /// Encrypt a non-empty UTF-8 string, returning base64-encoded ciphertext.
    fn encrypt_text(
        &self,
        key: &[u8],
        iv: &[u8],
        plaintext: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<String, CryptoError>;

    /// Encrypt a byte buffer (empty input is allowed), returning raw ciphertext.
    fn encrypt_bytes(
        &self,
        key: &[u8],
        iv: &[u8],
        plaintext: &[u8],
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<u8>, CryptoError>;

    /// Decrypt a non-empty base64-encoded string, returning the UTF-8 plaintext.
    fn decrypt_text(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<String, CryptoError>;

    /// Decrypt raw ciphertext bytes, returning the plaintext bytes.
    fn decrypt_bytes(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<u8>, CryptoError>;
}

/// AES-256-CBC implementation of the `Cryptographer` trait, with PKCS#7
/// padding. Trace and error messages go to an injected `LogSink`; the
/// implementation is correct with a sink that drops every message.
pub struct AesCryptographer {
    sink: Box<dyn LogSink>,
}

impl AesCryptographer {
    /// Create a cryptographer that logs through the `log` crate macros
    pub fn new() -> Self {
        Self {
            sink: Box::new(StandardLogSink),
        }
    }

    /// Create a cryptographer with a custom log sink
    pub fn with_sink(sink: Box<dyn LogSink>) -> Self {
        Self { sink }
    }

    fn build_cipher(
        &self,
        key: &[u8],
        iv: &[u8],
        operation: CryptoOp,
    ) -> Result<Aes256Cbc, CryptoError> {
        Aes256Cbc::new_from_slices(key, iv).map_err(|e| {
            self.sink.error("failed to initialize the AES-256-CBC cipher");
            CryptoError::failed(operation, e)
        })
    }
}

impl Default for AesCryptographer {
    fn default() -> Self {
        Self::new()
    }
}

/// Function to validate the key and IV lengths before any cipher work
fn check_key_and_iv(key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
    if key.len() != KEY_SIZE {
        return Err(CryptoError::InvalidArgument(format!(
            "key must be {} bytes for AES-256, got {}",
            KEY_SIZE,
            key.len()
        )));
    }
    if iv.len() != IV_SIZE {
        return Err(CryptoError::InvalidArgument(format!(
            "IV must be {} bytes, got {}",
            IV_SIZE,
            iv.len()
        )));
    }
    Ok(())
}

/// Function to honor an advisory cancellation signal before a transform
fn check_cancel(cancel: Option<&CancelToken>, operation: CryptoOp) -> Result<(), CryptoError> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(CryptoError::failed(
            operation,
            "operation cancelled by the caller",
        )),
        _ => Ok(()),
    }
}

impl Cryptographer for AesCryptographer {
    fn derive_key_and_iv(
        &self,
        password: &str,
        salt: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<(Key, Iv), CryptoError> {
        if password.is_empty() {
            return Err(CryptoError::InvalidArgument(
                "password must not be empty".to_string(),
            ));
        }
        if salt.is_empty() {
            return Err(CryptoError::InvalidArgument(
                "salt must not be empty".to_string(),
            ));
        }
        check_cancel(cancel, CryptoOp::DeriveKeyAndIv)?;

        self.sink
            .debug("deriving an AES-256 key and IV with PBKDF2");
        Ok(keys::derive_key_and_iv(password, salt))
    }

    fn encrypt_text(
        &self,
        key: &[u8],
        iv: &[u8],
        plaintext: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<String, CryptoError> {
        check_key_and_iv(key, iv)?;
        if plaintext.is_empty() {
            return Err(CryptoError::InvalidArgument(
                "plaintext must not be empty".to_string(),
            ));
        }
        check_cancel(cancel, CryptoOp::EncryptText)?;

        self.sink.debug("encrypting a string with AES-256-CBC");
        let cipher = self.build_cipher(key, iv, CryptoOp::EncryptText)?;
        let encrypted = cipher.encrypt_vec(plaintext.as_bytes());

        Ok(base64.encode(encrypted))
    }

    fn encrypt_bytes(
        &self,
        key: &[u8],
        iv: &[u8],
        plaintext: &[u8],
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<u8>, CryptoError> {
        check_key_and_iv(key, iv)?;
        check_cancel(cancel, CryptoOp::EncryptBytes)?;

        self.sink.debug("encrypting a byte buffer with AES-256-CBC");
        let cipher = self.build_cipher(key, iv, CryptoOp::EncryptBytes)?;

        Ok(cipher.encrypt_vec(plaintext))
    }

    fn decrypt_text(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &str,
        cancel: Option<&CancelToken>,
    ) -> Result<String, CryptoError> {
        check_key_and_iv(key, iv)?;
        if ciphertext.is_empty() {
            return Err(CryptoError::InvalidArgument(
                "ciphertext must not be empty".to_string(),
            ));
        }
        check_cancel(cancel, CryptoOp::DecryptText)?;

        self.sink
            .debug("decrypting a base64 string with AES-256-CBC");
        let encrypted = base64.decode(ciphertext).map_err(|e| {
            self.sink.error("ciphertext is not valid base64");
            CryptoError::failed(CryptoOp::DecryptText, e)
        })?;

        let cipher = self.build_cipher(key, iv, CryptoOp::DecryptText)?;
        let decrypted = cipher.decrypt_vec(&encrypted).map_err(|e| {
            self.sink.error("AES decryption of a string failed");
            CryptoError::failed(CryptoOp::DecryptText, e)
        })?;

        String::from_utf8(decrypted).map_err(|e| {
            self.sink.error("decrypted data is not valid UTF-8");
            CryptoError::failed(CryptoOp::DecryptText, e)
        })
    }

    fn decrypt_bytes(
        &self,
        key: &[u8],
        iv: &[u8],
        ciphertext: &[u8],
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<u8>, CryptoError> {
        check_key_and_iv(key, iv)?;
        check_cancel(cancel, CryptoOp::DecryptBytes)?;

        self.sink.debug("decrypting a byte buffer with AES-256-CBC");
        let cipher = self.build_cipher(key, iv, CryptoOp::DecryptBytes)?;

        cipher.decrypt_vec(ciphertext).map_err(|e| {
            self.sink.error("AES decryption of a byte buffer failed");
            CryptoError::failed(CryptoOp::DecryptBytes, e)
        })
    }
}
