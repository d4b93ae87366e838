//! Einzeiliges PEM-aehnliches Text-Format
//!
//! ## Format
//! ```text
//! -----BEGIN PUBLIC KEY-----
//! <Base64 der SPKI-Bytes, eine Zeile, kein Umbruch nach 64 Zeichen>
//! -----END PUBLIC KEY-----
//! ```
//! Private Schluessel analog mit `PRIVATE KEY` und PKCS#8-Bytes.
//!
//! Das Format ist nur mit der eigenen Import-Routine kompatibel. Beim Import
//! werden erste und letzte Zeile entfernt und alle uebrigen Zeilen
//! aneinandergehaengt.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use stillpost_core::KeyRole;

use crate::error::{CryptoError, CryptoResult};
use crate::types::{PemText, PrivateKey, PublicKey, SecretBytes};

/// Exportierbarer RSA-Schluessel
///
/// Die Rolle (Header/Footer) ergibt sich aus dem Typ, ein oeffentlicher
/// Schluessel kann nicht als `PRIVATE KEY` exportiert werden.
pub trait ExportKey {
    const ROLE: KeyRole;

    /// Rohe Schluessel-Bytes (SPKI bzw. PKCS#8 DER)
    fn to_der(&self) -> CryptoResult<SecretBytes>;
}

impl ExportKey for PublicKey {
    const ROLE: KeyRole = KeyRole::Public;

    fn to_der(&self) -> CryptoResult<SecretBytes> {
        let doc = self
            .0
            .to_public_key_der()
            .map_err(|e| CryptoError::UngueltigerSchluessel(e.to_string()))?;
        Ok(SecretBytes::new(doc.as_bytes().to_vec()))
    }
}

impl ExportKey for PrivateKey {
    const ROLE: KeyRole = KeyRole::Private;

    fn to_der(&self) -> CryptoResult<SecretBytes> {
        let doc = self
            .0
            .to_pkcs8_der()
            .map_err(|e| CryptoError::UngueltigerSchluessel(e.to_string()))?;
        Ok(SecretBytes::new(doc.as_bytes().to_vec()))
    }
}

/// Exportiert einen Schluessel in das einzeilige Text-Format
pub fn export_to_text<K: ExportKey>(key: &K) -> CryptoResult<PemText> {
    let der = key.to_der()?;
    Ok(encode_text(K::ROLE, der.as_bytes()))
}

/// Verpackt rohe Schluessel-Bytes mit Header und Footer der Rolle
pub fn encode_text(role: KeyRole, der: &[u8]) -> PemText {
    let body = BASE64.encode(der);
    PemText::new(format!("{}\n{}\n{}", role.header(), body, role.footer()))
}

/// Entfernt Header/Footer und dekodiert den Base64-Koerper
///
/// Fehlen die Markierungen der erwarteten Rolle oder ist der Koerper kein
/// gueltiges Base64, ergibt das `SchluesselFormat`.
pub fn decode_text(role: KeyRole, text: &str) -> CryptoResult<SecretBytes> {
    let lines: Vec<&str> = text
        .trim()
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    if lines.len() < 3 {
        return Err(CryptoError::SchluesselFormat(format!(
            "mindestens 3 Zeilen erwartet, erhalten {}",
            lines.len()
        )));
    }

    let header = role.header();
    let footer = role.footer();
    if lines[0].trim() != header {
        return Err(CryptoError::SchluesselFormat(format!(
            "Kopfzeile '{header}' fehlt ({role}-Schluessel erwartet)"
        )));
    }
    if lines[lines.len() - 1].trim() != footer {
        return Err(CryptoError::SchluesselFormat(format!(
            "Fusszeile '{footer}' fehlt ({role}-Schluessel erwartet)"
        )));
    }

    let body: String = lines[1..lines.len() - 1]
        .iter()
        .map(|line| line.trim())
        .collect();

    let der = BASE64
        .decode(body.as_bytes())
        .map(SecretBytes::new)
        .map_err(|e| CryptoError::SchluesselFormat(format!("Base64 ungueltig: {e}")))?;

    tracing::debug!(rolle = %role, bytes = der.len(), "Schluessel-Text dekodiert");
    Ok(der)
}

/// Importiert einen oeffentlichen Schluessel (SPKI), nur zum Verschluesseln
pub fn import_public_key(text: impl AsRef<str>) -> CryptoResult<PublicKey> {
    let der = decode_text(KeyRole::Public, text.as_ref())?;
    let key = RsaPublicKey::from_public_key_der(der.as_bytes())
        .map_err(|e| CryptoError::UngueltigerSchluessel(e.to_string()))?;
    Ok(PublicKey(key))
}

/// Importiert einen privaten Schluessel (PKCS#8), nur zum Entschluesseln
pub fn import_private_key(text: impl AsRef<str>) -> CryptoResult<PrivateKey> {
    let der = decode_text(KeyRole::Private, text.as_ref())?;
    let key = RsaPrivateKey::from_pkcs8_der(der.as_bytes())
        .map_err(|e| CryptoError::UngueltigerSchluessel(e.to_string()))?;
    Ok(PrivateKey(key))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
