//! stillpost-core – Gemeinsame Fehlerklassen und Typen
//!
//! Dieses Crate stellt die Bausteine bereit, die von den Krypto- und
//! Steganografie-Crates gemeinsam genutzt werden.

pub mod error;
pub mod types;

// Re-Exporte fuer bequemen Zugriff
pub use error::{FehlerArt, Fehlerklasse};
pub use types::KeyRole;
