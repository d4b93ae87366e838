//! stillpost - Bibliotheks-Root
//!
//! Deklariert die Module des Kommandozeilen-Werkzeugs und stellt sie fuer
//! Integrationstests bereit.

pub mod args;
pub mod befehle;
pub mod config;

use stillpost_core::{FehlerArt, Fehlerklasse};
use stillpost_crypto::CryptoError;
use stillpost_stego::StegoError;

/// Sucht in der Fehlerkette nach einem Stillpost-Fehler und liefert seine Art
pub fn fehlerart(fehler: &anyhow::Error) -> Option<FehlerArt> {
    fehler.chain().find_map(|ursache| {
        if let Some(e) = ursache.downcast_ref::<CryptoError>() {
            Some(e.art())
        } else {
            ursache.downcast_ref::<StegoError>().map(Fehlerklasse::art)
        }
    })
}

/// Prozess-Exit-Code je Fehlerart
///
/// 1 ist fuer Fehler ausserhalb der Bibliotheken (Konfiguration, Dateien).
pub fn exit_code(art: Option<FehlerArt>) -> u8 {
    match art {
        None => 1,
        Some(FehlerArt::SchluesselFormat) => 2,
        Some(FehlerArt::KryptoOperation) => 3,
        Some(FehlerArt::Authentifizierung) => 4,
        Some(FehlerArt::Kapazitaet) => 5,
        Some(FehlerArt::BeschaedigterTraeger) => 6,
        Some(FehlerArt::Bildformat) => 7,
        Some(FehlerArt::Intern) => 70,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn fehlerart_durch_kontext_hindurch() {
        let result: Result<(), CryptoError> = Err(CryptoError::Authentifizierung);
        let err = result.context("Umschlag oeffnen").unwrap_err();
        assert_eq!(fehlerart(&err), Some(FehlerArt::Authentifizierung));
    }

    #[test]
    fn stego_fehler_wird_erkannt() {
        let err = anyhow::Error::from(StegoError::BeschaedigterTraeger("leer".into()));
        assert_eq!(fehlerart(&err), Some(FehlerArt::BeschaedigterTraeger));
    }

    #[test]
    fn fremde_fehler_haben_keine_art() {
        let err = anyhow::anyhow!("Datei fehlt");
        assert_eq!(fehlerart(&err), None);
        assert_eq!(exit_code(None), 1);
    }

    #[test]
    fn exit_codes_sind_eindeutig() {
        let arten = [
            FehlerArt::SchluesselFormat,
            FehlerArt::KryptoOperation,
            FehlerArt::Authentifizierung,
            FehlerArt::Kapazitaet,
            FehlerArt::BeschaedigterTraeger,
            FehlerArt::Bildformat,
            FehlerArt::Intern,
        ];
        let mut codes: Vec<u8> = arten.iter().map(|a| exit_code(Some(*a))).collect();
        codes.push(exit_code(None));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), arten.len() + 1);
    }
}
