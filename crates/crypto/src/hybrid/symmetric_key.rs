//! Symmetrische AES-256-GCM Schluessel

use rand::rngs::OsRng;
use rand::RngCore;

use crate::types::{SecretBytes, SymmetricKey, SYMMETRIC_KEY_LEN};

/// Erzeugt einen neuen zufaelligen AES-256-GCM Schluessel
pub fn generate_symmetric_key() -> SymmetricKey {
    let mut key_bytes = vec![0u8; SYMMETRIC_KEY_LEN];
    OsRng.fill_bytes(&mut key_bytes);

    SymmetricKey {
        key_bytes: SecretBytes::new(key_bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schluessel_hat_256_bit() {
        let key = generate_symmetric_key();
        assert_eq!(key.as_bytes().len(), 32);
    }

    #[test]
    fn schluessel_sind_verschieden() {
        let a = generate_symmetric_key();
        let b = generate_symmetric_key();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn rohe_bytes_roundtrip() {
        let key = generate_symmetric_key();
        let restored = SymmetricKey::from_bytes(key.to_bytes().as_bytes()).unwrap();
        assert_eq!(restored.as_bytes(), key.as_bytes());
    }
}
