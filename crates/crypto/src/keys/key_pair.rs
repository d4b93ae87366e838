//! RSA-OAEP Schluessel-Paar erzeugen

use rand::rngs::OsRng;
use rsa::{BigUint, RsaPrivateKey};

use crate::error::{CryptoError, CryptoResult};
use crate::types::{KeyPair, PrivateKey, RSA_MODULUS_BITS, RSA_PUBLIC_EXPONENT};

/// Generiert ein neues RSA-OAEP Schluessel-Paar
///
/// Schlaegt nur fehl, wenn die Primzahlsuche selbst scheitert.
pub fn generate_key_pair() -> CryptoResult<KeyPair> {
    let exponent = BigUint::from(RSA_PUBLIC_EXPONENT);
    let private = RsaPrivateKey::new_with_exp(&mut OsRng, RSA_MODULUS_BITS, &exponent)
        .map_err(|e| CryptoError::SchluesselGenerierung(e.to_string()))?;

    let private_key = PrivateKey(private);
    let public_key = private_key.public_key();

    tracing::debug!(bits = RSA_MODULUS_BITS, "RSA-Schluessel-Paar erzeugt");

    Ok(KeyPair {
        public_key,
        private_key,
    })
}

/// Wie [`generate_key_pair`], aber auf einem Blocking-Worker von tokio
///
/// Die Primzahlsuche blockiert den aufrufenden Thread fuer mehrere
/// hundert Millisekunden und gehoert nicht auf einen Runtime-Thread.
pub async fn generate_key_pair_async() -> CryptoResult<KeyPair> {
    tokio::task::spawn_blocking(generate_key_pair)
        .await
        .map_err(|e| CryptoError::Hintergrund(e.to_string()))?
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
