//! Kommandozeilen-Argumente (clap derive)

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::STANDARD_CONFIG_PFAD;

/// Stillpost - verschluesselte Nachrichten, versteckt in Bildern
///
/// Schluessel: RSA-OAEP 2048 Bit (SHA-256), Nachrichten: AES-256-GCM.
/// Steganografie: niederwertigste Bits von R, G, B, Ausgabe immer PNG.
#[derive(Debug, Parser)]
#[command(name = "stillpost", version, about, long_about = None)]
pub struct Cli {
    /// Pfad der Konfigurationsdatei
    #[arg(long, global = true, env = "STILLPOST_CONFIG", default_value = STANDARD_CONFIG_PFAD)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub befehl: Befehl,
}

#[derive(Debug, Subcommand)]
pub enum Befehl {
    /// Erzeugt ein neues RSA-Schluessel-Paar
    Keygen {
        /// Zielverzeichnis (Standard: [schluessel].verzeichnis)
        #[arg(short, long)]
        verzeichnis: Option<PathBuf>,

        /// Vorhandene Schluessel-Dateien ueberschreiben
        #[arg(long)]
        ueberschreiben: bool,
    },

    /// Verschluesselt eine Nachricht fuer einen Empfaenger (JSON auf stdout)
    Seal {
        /// Oeffentlicher Schluessel des Empfaengers
        #[arg(short, long)]
        empfaenger: PathBuf,

        /// Nachricht (ohne Angabe: stdin)
        #[arg(short, long)]
        nachricht: Option<String>,
    },

    /// Entschluesselt einen versiegelten Umschlag
    Open {
        /// Eigener privater Schluessel (Standard aus der Konfiguration)
        #[arg(short, long)]
        schluessel: Option<PathBuf>,

        /// Datei mit dem JSON-Umschlag (ohne Angabe: stdin)
        #[arg(short, long)]
        eingabe: Option<PathBuf>,
    },

    /// Versteckt eine Nachricht in einem Bild
    Hide {
        /// Traegerbild (PNG, BMP, JPEG, GIF)
        #[arg(short, long)]
        traeger: PathBuf,

        /// Nachricht (ohne Angabe: stdin)
        #[arg(short, long)]
        nachricht: Option<String>,

        /// Ziel-PNG (Standard: <ausgabe_verzeichnis>/<name>.stillpost.png)
        #[arg(short, long)]
        ausgabe: Option<PathBuf>,
    },

    /// Liest eine versteckte Nachricht aus einem Bild
    Reveal {
        /// Bild mit versteckter Nachricht
        #[arg(short, long)]
        bild: PathBuf,
    },

    /// Zeigt, wie viel Text ein Bild aufnehmen kann
    Capacity {
        /// Traegerbild
        #[arg(short, long)]
        bild: PathBuf,
    },
}
