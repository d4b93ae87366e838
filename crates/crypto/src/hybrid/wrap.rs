//! RSA-OAEP Wrap/Unwrap kurzer Nutzlasten
//!
//! Maximale Nutzlast: `modulus_bytes - 2 * hash_bytes - 2`, also 190 Bytes
//! bei 2048 Bit und SHA-256. Das Ergebnis ist immer `modulus_bytes` lang.

use rand::rngs::OsRng;
use rsa::Oaep;
use sha2::Sha256;

use crate::error::{CryptoError, CryptoResult};
use crate::types::{PrivateKey, PublicKey, WrappedKey, OAEP_HASH_LEN};

/// Maximale Nutzlast in Bytes fuer diesen Schluessel
pub fn max_wrap_payload(public_key: &PublicKey) -> usize {
    public_key.size().saturating_sub(2 * OAEP_HASH_LEN + 2)
}

/// Verschluesselt eine kurze Nutzlast (z.B. einen AES-Schluessel) mit RSA-OAEP
pub fn wrap(public_key: &PublicKey, payload: &[u8]) -> CryptoResult<WrappedKey> {
    let maximal = max_wrap_payload(public_key);
    if payload.len() > maximal {
        return Err(CryptoError::NutzlastZuLang {
            maximal,
            erhalten: payload.len(),
        });
    }

    let wrapped = public_key
        .0
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), payload)
        .map_err(|e| CryptoError::Verschluesselung(e.to_string()))?;

    tracing::debug!(
        nutzlast = payload.len(),
        ergebnis = wrapped.len(),
        "Nutzlast mit RSA-OAEP eingewickelt"
    );

    Ok(WrappedKey(wrapped))
}

/// Entschluesselt eine mit [`wrap`] erzeugte Nutzlast
///
/// Falscher Schluessel und beschaedigte Daten ergeben denselben Fehler.
pub fn unwrap(private_key: &PrivateKey, wrapped: &WrappedKey) -> CryptoResult<Vec<u8>> {
    private_key
        .0
        .decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), wrapped.as_bytes())
        .map_err(|_| CryptoError::Entpacken)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
