//! Nachrichten-Verschluesselung (AES-256-GCM)
//!
//! ## Format
//! ```text
//! [iv(12)] [ciphertext + auth_tag(16)]
//! ```
//! Der IV wird fuer jeden Aufruf frisch aus dem OS-Zufallsgenerator gezogen.
//! Wiederverwendung von (Schluessel, IV) bricht Vertraulichkeit und Integritaet.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce as AesNonce,
};

use crate::error::{CryptoError, CryptoResult};
use crate::types::{EncryptedPayload, Iv, SymmetricKey, IV_LEN};

/// Verschluesselt einen Text (UTF-8) mit dem symmetrischen Schluessel
pub fn encrypt(key: &SymmetricKey, plaintext: &str) -> CryptoResult<EncryptedPayload> {
    let iv = Iv::random();
    let ciphertext = encrypt_aes256gcm(plaintext.as_bytes(), key, iv.as_bytes())?;

    tracing::debug!(
        klartext = plaintext.len(),
        ciphertext = ciphertext.len(),
        "Nachricht verschluesselt"
    );

    Ok(EncryptedPayload { iv, ciphertext })
}

fn encrypt_aes256gcm(
    plaintext: &[u8],
    key: &SymmetricKey,
    iv_bytes: &[u8; IV_LEN],
) -> CryptoResult<Vec<u8>> {
    // SymmetricKey garantiert 32 Bytes
    let key = Key::<Aes256Gcm>::from_slice(key.as_bytes());
    let cipher = Aes256Gcm::new(key);
    let nonce = AesNonce::from_slice(iv_bytes);

    cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
