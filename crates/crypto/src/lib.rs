//! # stillpost-crypto
//!
//! Ende-zu-Ende Verschluesselung fuer Stillpost ohne vorab geteiltes Geheimnis.
//!
//! ## Module
//! - `keys` - RSA-OAEP Schluessel-Paare und einzeiliges Text-Format
//! - `hybrid` - AES-256-GCM Nachrichten, RSA-OAEP Wrap/Unwrap, versiegelte Nachrichten
//! - `types` - Gemeinsame Typen (KeyPair, SymmetricKey, EncryptedPayload, etc.)
//! - `error` - Fehlertypen

pub mod error;
pub mod hybrid;
pub mod keys;
pub mod types;

#[cfg(test)]
mod test_support;

// Bequeme Re-Exports
pub use error::{CryptoError, CryptoResult};
pub use types::{
    EncryptedPayload, Iv, KeyPair, PemText, PrivateKey, PublicKey, SecretBytes, SymmetricKey,
    WrappedKey,
};

pub use keys::{
    export_to_text, generate_key_pair, generate_key_pair_async, import_private_key,
    import_public_key, ExportKey,
};

pub use hybrid::{
    decrypt, decrypt_bytes, encrypt, generate_symmetric_key, max_wrap_payload, open, seal,
    unwrap, wrap, SealedMessage,
};
