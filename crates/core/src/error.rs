//! Fehlerklassen fuer Stillpost
//!
//! Jedes Crate definiert eigene Fehler-Enums. Damit Aufrufer die Fehler
//! unterscheiden koennen ohne Meldungstexte zu vergleichen, ordnet jeder
//! Fehler sich ueber [`Fehlerklasse`] genau einer [`FehlerArt`] zu.

/// Die Fehlerarten aller Stillpost-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FehlerArt {
    /// Schluessel-Text ohne Header/Footer oder mit ungueltigem Base64
    SchluesselFormat,
    /// Die Krypto-Primitive lehnt ab (Schluesselstruktur, Nutzlast zu lang, Erzeugung)
    KryptoOperation,
    /// AES-GCM Tag-Pruefung fehlgeschlagen
    Authentifizierung,
    /// Nachricht passt nicht in das Traegerbild
    Kapazitaet,
    /// Kein Sentinel im Traegerbild gefunden oder Pufferueberlauf
    BeschaedigterTraeger,
    /// Traegerbytes nicht dekodierbar oder PNG-Kodierung fehlgeschlagen
    Bildformat,
    /// Hintergrund-Worker abgebrochen
    Intern,
}

impl std::fmt::Display for FehlerArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FehlerArt::SchluesselFormat => "schluessel_format",
            FehlerArt::KryptoOperation => "krypto_operation",
            FehlerArt::Authentifizierung => "authentifizierung",
            FehlerArt::Kapazitaet => "kapazitaet",
            FehlerArt::BeschaedigterTraeger => "beschaedigter_traeger",
            FehlerArt::Bildformat => "bildformat",
            FehlerArt::Intern => "intern",
        };
        f.write_str(name)
    }
}

/// Ordnet einen Fehler seiner [`FehlerArt`] zu
pub trait Fehlerklasse {
    /// Gibt die Fehlerart zurueck
    fn art(&self) -> FehlerArt;

    /// Gibt true zurueck wenn der Fehler als Sicherheitsereignis zu behandeln ist.
    ///
    /// Betrifft nur fehlgeschlagene Tag-Pruefungen. Der Aufrufer darf dieselben
    /// Eingaben nicht erneut versuchen.
    fn ist_sicherheitsrelevant(&self) -> bool {
        self.art() == FehlerArt::Authentifizierung
    }
}
