//! Versiegelte Nachricht (Wrap + Encrypt in einem Schritt)
//!
//! Pro Nachricht wird ein frischer AES-Schluessel erzeugt, mit dem Text
//! verschluesselt und anschliessend mit dem oeffentlichen RSA-Schluessel
//! des Empfaengers eingewickelt.
//!
//! ## JSON-Form fuer den Transport
//! ```text
//! { "wrapped_key": "<base64>", "iv": "<base64>", "ciphertext": "<base64>" }
//! ```

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, CryptoResult};
use crate::hybrid::{decrypt, encrypt, generate_symmetric_key, unwrap, wrap};
use crate::types::{
    EncryptedPayload, Iv, PrivateKey, PublicKey, SecretBytes, SymmetricKey, WrappedKey,
};

/// Eine fuer genau einen Empfaenger versiegelte Nachricht
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SealedMessageWire", try_from = "SealedMessageWire")]
pub struct SealedMessage {
    /// AES-Schluessel, mit RSA-OAEP eingewickelt
    pub wrapped_key: WrappedKey,
    /// Mit dem AES-Schluessel verschluesselter Text
    pub payload: EncryptedPayload,
}

/// Base64-Darstellung fuer JSON-Envelopes
#[derive(Serialize, Deserialize)]
struct SealedMessageWire {
    wrapped_key: String,
    iv: String,
    ciphertext: String,
}

impl From<SealedMessage> for SealedMessageWire {
    fn from(msg: SealedMessage) -> Self {
        Self {
            wrapped_key: BASE64.encode(msg.wrapped_key.as_bytes()),
            iv: BASE64.encode(msg.payload.iv.as_bytes()),
            ciphertext: BASE64.encode(&msg.payload.ciphertext),
        }
    }
}

impl TryFrom<SealedMessageWire> for SealedMessage {
    type Error = CryptoError;

    fn try_from(wire: SealedMessageWire) -> Result<Self, Self::Error> {
        let wrapped_key = WrappedKey(BASE64.decode(wire.wrapped_key)?);
        let iv = Iv::from_slice(&BASE64.decode(wire.iv)?)?;
        let ciphertext = BASE64.decode(wire.ciphertext)?;
        Ok(Self {
            wrapped_key,
            payload: EncryptedPayload { iv, ciphertext },
        })
    }
}

impl SealedMessage {
    /// Serialisiert als JSON-Envelope
    pub fn to_json(&self) -> CryptoResult<String> {
        serde_json::to_string(self).map_err(|e| CryptoError::UngueltigeDaten(e.to_string()))
    }

    /// Liest einen JSON-Envelope
    pub fn from_json(json: &str) -> CryptoResult<Self> {
        serde_json::from_str(json).map_err(|e| CryptoError::UngueltigeDaten(e.to_string()))
    }
}

/// Versiegelt einen Text fuer den Inhaber von `recipient`
pub fn seal(recipient: &PublicKey, plaintext: &str) -> CryptoResult<SealedMessage> {
    let key = generate_symmetric_key();
    let payload = encrypt(&key, plaintext)?;
    let wrapped_key = wrap(recipient, key.to_bytes().as_bytes())?;

    Ok(SealedMessage {
        wrapped_key,
        payload,
    })
}

/// Oeffnet eine mit [`seal`] versiegelte Nachricht
pub fn open(private_key: &PrivateKey, sealed: &SealedMessage) -> CryptoResult<String> {
    let key = {
        let key_bytes = SecretBytes::new(unwrap(private_key, &sealed.wrapped_key)?);
        SymmetricKey::from_bytes(key_bytes.as_bytes())?
    };

    decrypt(&key, &sealed.payload)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
