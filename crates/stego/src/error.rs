//! Fehlertypen fuer die Steganografie

use stillpost_core::{FehlerArt, Fehlerklasse};
use thiserror::Error;

/// Fehler beim Einbetten oder Auslesen
#[derive(Debug, Error)]
pub enum StegoError {
    /// Traeger bleibt in diesem Fall unveraendert
    #[error("Nachricht zu gross fuer das Bild: benoetigt {benoetigt} Bit, verfuegbar {verfuegbar} Bit")]
    Kapazitaet { benoetigt: usize, verfuegbar: usize },

    #[error("Beschaedigter Traeger: {0}")]
    BeschaedigterTraeger(String),

    #[error("Bild nicht dekodierbar: {0}")]
    BildDekodierung(String),

    #[error("PNG-Kodierung fehlgeschlagen: {0}")]
    BildKodierung(String),

    #[error("Pixelpuffer passt nicht zu {breite}x{hoehe}: erwartet {erwartet} Bytes, erhalten {erhalten}")]
    UngueltigerPuffer {
        breite: u32,
        hoehe: u32,
        erwartet: usize,
        erhalten: usize,
    },

    #[error("Hintergrund-Task fehlgeschlagen: {0}")]
    Hintergrund(String),
}

impl Fehlerklasse for StegoError {
    fn art(&self) -> FehlerArt {
        match self {
            Self::Kapazitaet { .. } => FehlerArt::Kapazitaet,
            Self::BeschaedigterTraeger(_) => FehlerArt::BeschaedigterTraeger,
            Self::BildDekodierung(_) | Self::BildKodierung(_) | Self::UngueltigerPuffer { .. } => {
                FehlerArt::Bildformat
            }
            Self::Hintergrund(_) => FehlerArt::Intern,
        }
    }
}

pub type StegoResult<T> = Result<T, StegoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kapazitaet_anzeige() {
        let e = StegoError::Kapazitaet {
            benoetigt: 32,
            verfuegbar: 3,
        };
        assert!(e.to_string().contains("benoetigt 32 Bit"));
        assert_eq!(e.art(), FehlerArt::Kapazitaet);
    }

    #[test]
    fn nichts_ist_sicherheitsrelevant() {
        assert!(!StegoError::BeschaedigterTraeger("x".into()).ist_sicherheitsrelevant());
        assert!(!StegoError::BildDekodierung("x".into()).ist_sicherheitsrelevant());
    }
}
