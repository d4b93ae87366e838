//! Gemeinsame Typen fuer das Kryptografie-Subsystem

use rand::rngs::OsRng;
use rand::RngCore;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::error::{CryptoError, CryptoResult};

/// Modulus-Laenge der RSA-Schluessel in Bit
pub const RSA_MODULUS_BITS: usize = 2048;
/// Oeffentlicher Exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;
/// Ausgabelaenge von SHA-256 (OAEP-Hash)
pub const OAEP_HASH_LEN: usize = 32;
/// AES-256 Schluessel-Laenge
pub const SYMMETRIC_KEY_LEN: usize = 32;
/// AES-GCM IV-Laenge
pub const IV_LEN: usize = 12;
/// AES-GCM Auth-Tag-Laenge (am Ciphertext angehaengt)
pub const TAG_LEN: usize = 16;

/// Ein RSA-OAEP Schluessel-Paar (2048 Bit, e = 65537, SHA-256)
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// Oeffentlicher Schluessel (nur Verschluesseln)
    pub public_key: PublicKey,
    /// Privater Schluessel (nur Entschluesseln)
    pub private_key: PrivateKey,
}

/// Oeffentlicher RSA-OAEP Schluessel
///
/// Erlaubt ausschliesslich das Verschluesseln (Wrap).
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(pub(crate) RsaPublicKey);

impl PublicKey {
    /// Modulus-Laenge in Bytes (Laenge jedes Wrap-Ergebnisses)
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Modulus-Laenge in Bit
    pub fn modulus_bits(&self) -> usize {
        self.size() * 8
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PublicKey {{ bits: {} }}", self.modulus_bits())
    }
}

/// Privater RSA-OAEP Schluessel
///
/// Erlaubt ausschliesslich das Entschluesseln (Unwrap). Keine Signaturen.
#[derive(Clone)]
pub struct PrivateKey(pub(crate) RsaPrivateKey);

impl PrivateKey {
    /// Leitet den passenden oeffentlichen Schluessel ab
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED] {} bits)", self.0.size() * 8)
    }
}

/// Schluessel im einzeiligen PEM-aehnlichen Text-Format
///
/// ```text
/// -----BEGIN PUBLIC KEY-----
/// <base64, eine Zeile>
/// -----END PUBLIC KEY-----
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PemText(String);

impl PemText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for PemText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PemText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sicherer Schluessel-Container (wird beim Drop genullt)
#[derive(Clone)]
pub struct SecretBytes(Zeroizing<Vec<u8>>);

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretBytes([REDACTED] {} bytes)", self.0.len())
    }
}

impl SecretBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Symmetrischer AES-256-GCM Schluessel
#[derive(Debug, Clone)]
pub struct SymmetricKey {
    pub(crate) key_bytes: SecretBytes,
}

impl SymmetricKey {
    /// Erstellt einen Schluessel aus rohen Bytes (genau 32 Bytes)
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != SYMMETRIC_KEY_LEN {
            return Err(CryptoError::UngueltigeSchluesselLaenge {
                erwartet: SYMMETRIC_KEY_LEN,
                erhalten: bytes.len(),
            });
        }
        Ok(Self {
            key_bytes: SecretBytes::new(bytes.to_vec()),
        })
    }

    /// Rohe Schluessel-Bytes (z.B. zum Einwickeln mit RSA-OAEP)
    pub fn to_bytes(&self) -> SecretBytes {
        self.key_bytes.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.key_bytes.as_bytes()
    }
}

/// Initialisierungsvektor fuer AES-GCM (96 Bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iv {
    pub bytes: [u8; IV_LEN],
}

impl Iv {
    /// Erzeugt einen frischen Zufalls-IV
    pub fn random() -> Self {
        let mut bytes = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Liest einen IV aus einem Slice (genau 12 Bytes)
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let bytes: [u8; IV_LEN] = bytes.try_into().map_err(|_| {
            CryptoError::UngueltigeDaten(format!(
                "IV muss {} Bytes lang sein, erhalten {}",
                IV_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8; IV_LEN] {
        &self.bytes
    }
}

/// Verschluesselter Payload (IV + Ciphertext mit angehaengtem Auth-Tag)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    /// 12 Bytes IV, pro Verschluesselung frisch
    pub iv: Iv,
    /// Verschluesselter Inhalt inkl. 16 Bytes Auth-Tag (angehaengt)
    pub ciphertext: Vec<u8>,
}

impl EncryptedPayload {
    /// Serialisiert zu Bytes: [iv(12)] + [ciphertext + tag]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(IV_LEN + self.ciphertext.len());
        out.extend_from_slice(&self.iv.bytes);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Deserialisiert aus Bytes
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() < IV_LEN + TAG_LEN {
            return Err(CryptoError::UngueltigeDaten(format!(
                "Payload zu kurz: mindestens {} Bytes, erhalten {}",
                IV_LEN + TAG_LEN,
                bytes.len()
            )));
        }
        let iv = Iv::from_slice(&bytes[..IV_LEN])?;
        let ciphertext = bytes[IV_LEN..].to_vec();
        Ok(Self { iv, ciphertext })
    }
}

/// Mit RSA-OAEP eingewickelte Bytes (Laenge = Modulus-Laenge)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedKey(pub Vec<u8>);

impl WrappedKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for WrappedKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_bytes_debug_ist_geschwaerzt() {
        let secret = SecretBytes::new(vec![0x42; 32]);
        let debug = format!("{:?}", secret);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("42"));
    }

    #[test]
    fn secret_bytes_zeroize_leert_den_puffer() {
        let mut secret = SecretBytes::new(vec![0xAB; 32]);
        assert_eq!(secret.len(), 32);

        // Dasselbe passiert im Drop von `Zeroizing`
        zeroize::Zeroize::zeroize(&mut *secret.0);
        assert!(secret.is_empty());
        assert!(secret.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn symmetric_key_falsche_laenge() {
        let result = SymmetricKey::from_bytes(&[0u8; 16]);
        assert!(matches!(
            result,
            Err(CryptoError::UngueltigeSchluesselLaenge { erwartet: 32, erhalten: 16 })
        ));
    }

    #[test]
    fn iv_zufaellig() {
        assert_ne!(Iv::random(), Iv::random());
    }

    #[test]
    fn payload_serialisierung() {
        let payload = EncryptedPayload {
            iv: Iv { bytes: [7u8; IV_LEN] },
            ciphertext: vec![1u8; 40],
        };
        let bytes = payload.to_bytes();
        assert_eq!(&bytes[..IV_LEN], &[7u8; IV_LEN]);

        let restored = EncryptedPayload::from_bytes(&bytes).unwrap();
        assert_eq!(restored, payload);
    }

    #[test]
    fn payload_zu_kurz() {
        let result = EncryptedPayload::from_bytes(&[0u8; IV_LEN + TAG_LEN - 1]);
        assert!(matches!(result, Err(CryptoError::UngueltigeDaten(_))));
    }
}
