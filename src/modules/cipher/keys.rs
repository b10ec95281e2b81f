use pbkdf2::pbkdf2;
use zeroize::Zeroizing;

use crate::{HmacSha256, Iv, Key, IV_SIZE, KEY_SIZE, PBKDF2_ROUNDS};

/// Function to derive an AES-256 key and IV from a password and salt using PBKDF2
///
/// Both values come from a single derived stream: the key takes the first
/// 32 bytes and the IV takes the next 16, so a (key, IV) pair only ever
/// makes sense together.
pub(crate) fn derive_key_and_iv(password: &str, salt: &str) -> (Key, Iv) {
    // Scratch buffer holding raw key material, wiped on drop
    let mut derived = Zeroizing::new([0u8; KEY_SIZE + IV_SIZE]);

    pbkdf2::<HmacSha256>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut derived[..],
    );

    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&derived[..KEY_SIZE]);

    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(&derived[KEY_SIZE..]);

    (key, iv)
}
