//! Fehlertypen fuer das Kryptografie-Subsystem

use stillpost_core::{FehlerArt, Fehlerklasse};
use thiserror::Error;

/// Fehler im Kryptografie-Subsystem
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Ungueltiges Schluessel-Format: {0}")]
    SchluesselFormat(String),

    #[error("Schluessel-Generierung fehlgeschlagen: {0}")]
    SchluesselGenerierung(String),

    #[error("Ungueltiger Schluessel: {0}")]
    UngueltigerSchluessel(String),

    #[error("Nutzlast zu lang fuer RSA-OAEP: maximal {maximal} Bytes, erhalten {erhalten}")]
    NutzlastZuLang { maximal: usize, erhalten: usize },

    #[error("Verschluesselung fehlgeschlagen: {0}")]
    Verschluesselung(String),

    /// Absichtlich ohne Details: falscher Schluessel und beschaedigte Daten
    /// sind fuer den Aufrufer nicht unterscheidbar.
    #[error("RSA-OAEP Entschluesselung fehlgeschlagen")]
    Entpacken,

    #[error("Authentifizierung fehlgeschlagen: Tag-Pruefung negativ")]
    Authentifizierung,

    #[error("Ungueltige Schluessel-Laenge: erwartet {erwartet}, erhalten {erhalten}")]
    UngueltigeSchluesselLaenge { erwartet: usize, erhalten: usize },

    #[error("Ungueltige Daten: {0}")]
    UngueltigeDaten(String),

    #[error("Base64-Dekodierung fehlgeschlagen: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Hintergrund-Task fehlgeschlagen: {0}")]
    Hintergrund(String),
}

impl Fehlerklasse for CryptoError {
    fn art(&self) -> FehlerArt {
        match self {
            Self::SchluesselFormat(_) => FehlerArt::SchluesselFormat,
            Self::Authentifizierung => FehlerArt::Authentifizierung,
            Self::Hintergrund(_) => FehlerArt::Intern,
            Self::SchluesselGenerierung(_)
            | Self::UngueltigerSchluessel(_)
            | Self::NutzlastZuLang { .. }
            | Self::Verschluesselung(_)
            | Self::Entpacken
            | Self::UngueltigeSchluesselLaenge { .. }
            | Self::UngueltigeDaten(_)
            | Self::Base64(_) => FehlerArt::KryptoOperation,
        }
    }
}

pub type CryptoResult<T> = Result<T, CryptoError>;
