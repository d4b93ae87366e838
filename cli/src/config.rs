//! Stillpost-Konfiguration
//!
//! Wird beim Start aus einer TOML-Datei geladen. Alle Felder haben
//! sinnvolle Standardwerte, sodass das Werkzeug ohne Konfigurationsdatei
//! lauffaehig ist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Standard-Pfad der Konfigurationsdatei
pub const STANDARD_CONFIG_PFAD: &str = "stillpost.toml";

/// Vollstaendige Konfiguration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StillpostConfig {
    /// Logging-Einstellungen
    pub logging: LoggingEinstellungen,
    /// Ablage der Schluessel-Dateien
    pub schluessel: SchluesselEinstellungen,
    /// Steganografie-Einstellungen
    pub steganografie: SteganografieEinstellungen,
}

/// Logging-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingEinstellungen {
    /// Log-Level oder Filter-Direktive, z.B. "info" oder "stillpost_crypto=debug"
    pub level: String,
    /// Format: "text" oder "json"
    pub format: String,
}

impl Default for LoggingEinstellungen {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: "text".into(),
        }
    }
}

/// Ablage der Schluessel-Dateien im einzeiligen PEM-Format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchluesselEinstellungen {
    /// Verzeichnis fuer eigene Schluessel
    pub verzeichnis: PathBuf,
    /// Dateiname des oeffentlichen Schluessels
    pub oeffentlich: String,
    /// Dateiname des privaten Schluessels
    pub privat: String,
}

impl Default for SchluesselEinstellungen {
    fn default() -> Self {
        Self {
            verzeichnis: PathBuf::from("."),
            oeffentlich: "stillpost.pub".into(),
            privat: "stillpost.key".into(),
        }
    }
}

/// Steganografie-Einstellungen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SteganografieEinstellungen {
    /// Zielverzeichnis fuer erzeugte PNGs, wenn `--ausgabe` fehlt
    pub ausgabe_verzeichnis: PathBuf,
    /// Einbetten und Auslesen auf einem Blocking-Worker ausfuehren
    pub offload: bool,
}

impl Default for SteganografieEinstellungen {
    fn default() -> Self {
        Self {
            ausgabe_verzeichnis: PathBuf::from("."),
            offload: true,
        }
    }
}

/// Herkunft der geladenen Konfiguration
///
/// Das Logging steht beim Laden noch nicht, der Aufrufer meldet den
/// Rueckfall auf Standardwerte deshalb selbst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigQuelle {
    Datei,
    Standardwerte,
}

impl StillpostConfig {
    /// Laedt die Konfiguration aus einer TOML-Datei.
    /// Gibt die Standardkonfiguration zurueck wenn die Datei nicht existiert.
    pub fn laden(pfad: impl AsRef<Path>) -> anyhow::Result<(Self, ConfigQuelle)> {
        let pfad = pfad.as_ref();
        match std::fs::read_to_string(pfad) {
            Ok(inhalt) => {
                let config: Self = toml::from_str(&inhalt).map_err(|e| {
                    anyhow::anyhow!("Konfigurationsfehler in '{}': {e}", pfad.display())
                })?;
                Ok((config, ConfigQuelle::Datei))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), ConfigQuelle::Standardwerte))
            }
            Err(e) => Err(anyhow::anyhow!(
                "Konfigurationsdatei '{}' nicht lesbar: {e}",
                pfad.display()
            )),
        }
    }

    /// Prueft Werte, die serde nicht pruefen kann
    pub fn validieren(&self) -> anyhow::Result<()> {
        // Direktiven wie "stillpost_crypto=debug" prueft erst der EnvFilter
        let level = self.logging.level.trim();
        let einfach = !level.contains(['=', ',']);
        if einfach && !stillpost_observability::log_level_gueltig(level) {
            anyhow::bail!(
                "Ungueltiger Log-Level '{}' (erlaubt: trace, debug, info, warn, error, off)",
                self.logging.level
            );
        }
        if !stillpost_observability::log_format_gueltig(&self.logging.format) {
            anyhow::bail!(
                "Ungueltiges Log-Format '{}' (erlaubt: text, json)",
                self.logging.format
            );
        }
        if self.schluessel.oeffentlich == self.schluessel.privat {
            anyhow::bail!(
                "Oeffentlicher und privater Schluessel duerfen nicht dieselbe Datei sein ('{}')",
                self.schluessel.privat
            );
        }
        Ok(())
    }

    /// Vollstaendiger Pfad des eigenen privaten Schluessels
    pub fn privater_schluessel_pfad(&self) -> PathBuf {
        self.schluessel.verzeichnis.join(&self.schluessel.privat)
    }

    /// Standard-Ausgabepfad fuer ein Traegerbild: `<stem>.stillpost.png`
    pub fn stego_ausgabe_pfad(&self, traeger: &Path) -> PathBuf {
        let stem = traeger
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("traeger");
        self.steganografie
            .ausgabe_verzeichnis
            .join(format!("{stem}.stillpost.png"))
    }
}
