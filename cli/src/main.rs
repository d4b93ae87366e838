//! Stillpost - Einstiegspunkt
//!
//! Laedt die Konfiguration, initialisiert das Logging und fuehrt den
//! Unterbefehl aus. Ergebnisse gehen nach stdout, Logs nach stderr.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use stillpost::args::{Befehl, Cli};
use stillpost::befehle;
use stillpost::config::{ConfigQuelle, StillpostConfig};
use stillpost_core::FehlerArt;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match ausfuehren(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let art = stillpost::fehlerart(&e);
            if let Some(art) = art {
                tracing::debug!(art = %art, "Befehl fehlgeschlagen");
            }
            if art == Some(FehlerArt::Authentifizierung) {
                tracing::warn!("Authentifizierung fehlgeschlagen, Nachricht wurde veraendert oder der Schluessel passt nicht");
            }
            eprintln!("Fehler: {e:#}");
            ExitCode::from(stillpost::exit_code(art))
        }
    }
}

async fn ausfuehren(cli: Cli) -> Result<()> {
    // Konfiguration laden (Standardwerte falls Datei fehlt)
    let (config, quelle) = StillpostConfig::laden(&cli.config)?;
    config.validieren()?;

    stillpost_observability::logging_initialisieren(&config.logging.level, &config.logging.format)?;

    if quelle == ConfigQuelle::Standardwerte {
        tracing::warn!(
            pfad = %cli.config.display(),
            "Konfigurationsdatei nicht gefunden, verwende Standardwerte"
        );
    }

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "Stillpost gestartet"
    );

    match cli.befehl {
        Befehl::Keygen {
            verzeichnis,
            ueberschreiben,
        } => {
            let dateien = befehle::keygen(&config, verzeichnis.as_deref(), ueberschreiben).await?;
            println!("{}", dateien.oeffentlich.display());
            println!("{}", dateien.privat.display());
        }
        Befehl::Seal {
            empfaenger,
            nachricht,
        } => {
            let nachricht = text_oder_stdin(nachricht).await?;
            println!("{}", befehle::seal_nachricht(&empfaenger, &nachricht).await?);
        }
        Befehl::Open {
            schluessel,
            eingabe,
        } => {
            let schluessel = schluessel.unwrap_or_else(|| config.privater_schluessel_pfad());
            let umschlag = match eingabe {
                Some(pfad) => tokio::fs::read_to_string(&pfad)
                    .await
                    .with_context(|| format!("'{}' nicht lesbar", pfad.display()))?,
                None => stdin_lesen().await?,
            };
            println!("{}", befehle::open_nachricht(&schluessel, &umschlag).await?);
        }
        Befehl::Hide {
            traeger,
            nachricht,
            ausgabe,
        } => {
            let nachricht = text_oder_stdin(nachricht).await?;
            let ziel = befehle::hide(&config, &traeger, &nachricht, ausgabe.as_deref()).await?;
            println!("{}", ziel.display());
        }
        Befehl::Reveal { bild } => {
            let nachricht = befehle::reveal(&config, &bild).await?;
            println!("{nachricht}");
        }
        Befehl::Capacity { bild } => {
            println!("{}", befehle::capacity(&bild).await?);
        }
    }

    Ok(())
}

async fn text_oder_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut text = stdin_lesen().await?;
            // Abschliessenden Zeilenumbruch von `echo` nicht mit verstecken
            if text.ends_with('\n') {
                text.pop();
                if text.ends_with('\r') {
                    text.pop();
                }
            }
            Ok(text)
        }
    }
}

async fn stdin_lesen() -> Result<String> {
    let mut text = String::new();
    tokio::io::stdin()
        .read_to_string(&mut text)
        .await
        .context("stdin nicht lesbar")?;
    Ok(text)
}
