// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{cancel, cipher, logging};

// Re-export commonly used types
pub use modules::cancel::CancelToken;
pub use modules::cipher::{AesCryptographer, CryptoError, CryptoOp, Cryptographer};
pub use modules::logging::{initialize_logging, LogSink, NoopLogSink, StandardLogSink};

// Constants
pub const KEY_SIZE: usize = 32;
pub const IV_SIZE: usize = 16;
pub const PBKDF2_ROUNDS: u32 = 10_000;

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
pub type Aes256Cbc = block_modes::Cbc<aes::Aes256, block_modes::block_padding::Pkcs7>;
pub type Key = [u8; KEY_SIZE];
pub type Iv = [u8; IV_SIZE];
