//! Structured Logging Setup via tracing-subscriber
//!
//! Konfigurierbar per Umgebungsvariable, die Vorrang vor der Konfiguration hat:
//! - `SP_LOG_LEVEL`: Filter-Direktive (trace/debug/info/warn/error oder
//!   `stillpost_crypto=debug,info`), Standard aus der Konfiguration
//! - `SP_LOG_FORMAT`: Format (text/json)
//!
//! Logs gehen nach stderr, damit stdout fuer Schluessel und Nachrichten frei
//! bleibt.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Umgebungsvariable fuer den Log-Level
pub const ENV_LOG_LEVEL: &str = "SP_LOG_LEVEL";
/// Umgebungsvariable fuer das Log-Format
pub const ENV_LOG_FORMAT: &str = "SP_LOG_FORMAT";

/// Ausgabeformat der Log-Zeilen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingFehler;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(LoggingFehler::UnbekanntesFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoggingFehler {
    #[error("Unbekanntes Log-Format '{0}' (erlaubt: text, json)")]
    UnbekanntesFormat(String),

    #[error("Ungueltiger Log-Filter '{0}'")]
    UngueltigerFilter(String),

    #[error("Logging bereits initialisiert: {0}")]
    BereitsInitialisiert(String),
}

/// Initialisiert das Logging-System.
///
/// `SP_LOG_LEVEL` und `SP_LOG_FORMAT` ueberschreiben `level` und `format`.
/// Ein unbekanntes Format oder ein ungueltiger Filter ist ein Fehler, kein
/// stiller Rueckfall.
pub fn logging_initialisieren(level: &str, format: &str) -> Result<(), LoggingFehler> {
    let level = log_level_aus_env().unwrap_or_else(|| level.to_string());
    let format: LogFormat = log_format_aus_env()
        .unwrap_or_else(|| format.to_string())
        .parse()?;

    let filter =
        EnvFilter::try_new(&level).map_err(|_| LoggingFehler::UngueltigerFilter(level.clone()))?;

    let result = match format {
        LogFormat::Json => fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogFormat::Text => fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| LoggingFehler::BereitsInitialisiert(e.to_string()))
}

/// Log-Level aus `SP_LOG_LEVEL`, `None` wenn nicht gesetzt oder leer
pub fn log_level_aus_env() -> Option<String> {
    nicht_leer(std::env::var(ENV_LOG_LEVEL).ok())
}

/// Log-Format aus `SP_LOG_FORMAT`, `None` wenn nicht gesetzt oder leer
pub fn log_format_aus_env() -> Option<String> {
    nicht_leer(std::env::var(ENV_LOG_FORMAT).ok())
}

fn nicht_leer(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validiert einen einfachen Log-Level (ohne Modul-Direktiven).
pub fn log_level_gueltig(level: &str) -> bool {
    matches!(level, "trace" | "debug" | "info" | "warn" | "error" | "off")
}

/// Validiert ein Log-Format.
pub fn log_format_gueltig(format: &str) -> bool {
    format.parse::<LogFormat>().is_ok()
}
