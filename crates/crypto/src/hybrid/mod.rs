//! Hybride Verschluesselung (Hybrid Cipher)
//!
//! Nachrichten werden symmetrisch mit AES-256-GCM verschluesselt. Der
//! symmetrische Schluessel kann mit dem oeffentlichen RSA-OAEP Schluessel
//! des Empfaengers eingewickelt werden, sodass kein vorab geteiltes
//! Geheimnis noetig ist.
//!
//! ## Ablauf
//! 1. `generate_symmetric_key` - 256 Bit AES-GCM
//! 2. `encrypt` - frischer 12-Byte-IV pro Aufruf, Tag am Ciphertext angehaengt
//! 3. `wrap` - rohe Schluessel-Bytes mit RSA-OAEP (max. 190 Bytes bei 2048 Bit)
//! 4. Empfaenger: `unwrap`, dann `decrypt`
//!
//! `seal` / `open` fassen die Schritte fuer eine einzelne Nachricht zusammen.

pub mod decrypt;
pub mod encrypt;
pub mod envelope;
pub mod symmetric_key;
pub mod wrap;

pub use decrypt::{decrypt, decrypt_bytes};
pub use encrypt::encrypt;
pub use envelope::{open, seal, SealedMessage};
pub use symmetric_key::generate_symmetric_key;
pub use wrap::{max_wrap_payload, unwrap, wrap};
