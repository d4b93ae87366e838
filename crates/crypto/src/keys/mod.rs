//! RSA-OAEP Schluesselverwaltung (Key Manager)
//!
//! Jeder Client erzeugt ein Schluessel-Paar. Der oeffentliche Schluessel
//! wird im Text-Format ueber einen externen Verzeichnisdienst verteilt,
//! der private Schluessel verbleibt beim Client.
//!
//! ## Ablauf
//! 1. `generate_key_pair` - 2048 Bit, e = 65537, OAEP mit SHA-256
//! 2. `export_to_text` - SPKI (oeffentlich) bzw. PKCS#8 (privat), Base64 einzeilig
//! 3. `import_public_key` / `import_private_key` - exakte Umkehrung

pub mod key_pair;
pub mod pem;

pub use key_pair::{generate_key_pair, generate_key_pair_async};
pub use pem::{
    decode_text, encode_text, export_to_text, import_private_key, import_public_key, ExportKey,
};
