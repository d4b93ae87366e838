//! Nachrichten-Entschluesselung (AES-256-GCM)
//!
//! Eine fehlgeschlagene Tag-Pruefung ist ein harter Fehler. Manipulierter
//! Ciphertext, falscher Schluessel und falscher IV sind nicht unterscheidbar
//! und duerfen nicht mit denselben Eingaben wiederholt werden.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce as AesNonce,
};

use crate::error::{CryptoError, CryptoResult};
use crate::types::{EncryptedPayload, SymmetricKey, IV_LEN};

/// Entschluesselt einen Payload und dekodiert das Ergebnis als UTF-8
pub fn decrypt(key: &SymmetricKey, payload: &EncryptedPayload) -> CryptoResult<String> {
    let plaintext = decrypt_aes256gcm(&payload.ciphertext, key, payload.iv.as_bytes())?;

    String::from_utf8(plaintext)
        .map_err(|_| CryptoError::UngueltigeDaten("Klartext ist kein gueltiges UTF-8".into()))
}

/// Entschluesselt rohe Bytes (`[iv(12)] [ciphertext + tag]`)
///
/// Nuetzlich wenn Bytes direkt vom Transport kommen.
pub fn decrypt_bytes(key: &SymmetricKey, data: &[u8]) -> CryptoResult<String> {
    let payload = EncryptedPayload::from_bytes(data)?;
    decrypt(key, &payload)
}

fn decrypt_aes256gcm(
    ciphertext: &[u8],
    key: &SymmetricKey,
    iv_bytes: &[u8; IV_LEN],
) -> CryptoResult<Vec<u8>> {
    // SymmetricKey garantiert 32 Bytes
    let key = Key::<Aes256Gcm>::from_slice(key.as_bytes());
    let cipher = Aes256Gcm::new(key);
    let nonce = AesNonce::from_slice(iv_bytes);

    cipher.decrypt(nonce, ciphertext).map_err(|_| {
        tracing::warn!(
            ciphertext = ciphertext.len(),
            "AES-GCM Tag-Pruefung fehlgeschlagen"
        );
        CryptoError::Authentifizierung
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
