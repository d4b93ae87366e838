//! # stillpost-observability
//!
//! Structured Logging fuer die Stillpost-Werkzeuge via tracing-subscriber.
//! Text fuer die Konsole, JSON fuer Log-Sammler.

pub mod logging;

pub use logging::{
    log_format_aus_env, log_format_gueltig, log_level_aus_env, log_level_gueltig,
    logging_initialisieren, LogFormat, LoggingFehler,
};
