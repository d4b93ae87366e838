//! Gemeinsame Test-Fixtures
//!
//! 2048-Bit-Schluessel werden pro Testlauf nur einmal erzeugt.

use std::sync::OnceLock;

use crate::keys::generate_key_pair;
use crate::types::KeyPair;

static KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();
static OTHER_KEY_PAIR: OnceLock<KeyPair> = OnceLock::new();

pub(crate) fn key_pair() -> &'static KeyPair {
    KEY_PAIR.get_or_init(|| generate_key_pair().unwrap())
}

/// Ein zweites, unabhaengiges Paar fuer Kreuz-Tests
pub(crate) fn other_key_pair() -> &'static KeyPair {
    OTHER_KEY_PAIR.get_or_init(|| generate_key_pair().unwrap())
}
