mod crypto;
mod error;
mod keys;

pub use crypto::{AesCryptographer, Cryptographer};
pub use error::{CryptoError, CryptoOp};
