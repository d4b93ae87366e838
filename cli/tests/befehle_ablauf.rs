//! Ablauf ueber die Befehle: Schluessel erzeugen, versiegeln, oeffnen, verstecken

use std::path::Path;

use stillpost::befehle;
use stillpost::config::StillpostConfig;
use stillpost_core::FehlerArt;
use stillpost_crypto::SealedMessage;
use stillpost_stego::CarrierImage;

fn config_in(dir: &Path) -> StillpostConfig {
    let mut config = StillpostConfig::default();
    config.schluessel.verzeichnis = dir.to_path_buf();
    config.steganografie.ausgabe_verzeichnis = dir.to_path_buf();
    config
}

#[tokio::test]
async fn versiegeln_oeffnen_und_verstecken() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let dateien = befehle::keygen(&config, None, false).await.unwrap();
    let pub_text = std::fs::read_to_string(&dateien.oeffentlich).unwrap();
    assert!(pub_text.starts_with("-----BEGIN PUBLIC KEY-----\n"));
    assert_eq!(pub_text.lines().count(), 3);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let rechte = std::fs::metadata(&dateien.privat).unwrap().permissions().mode();
        assert_eq!(rechte & 0o777, 0o600);
    }

    let umschlag = befehle::seal_nachricht(&dateien.oeffentlich, "Treffpunkt: Bruecke")
        .await
        .unwrap();

    // Der JSON-Umschlag passt in ein 64x64-Bild
    let pixels = vec![0x40; 64 * 64 * 4];
    let png = CarrierImage::from_rgba(64, 64, pixels)
        .unwrap()
        .encode_png()
        .unwrap();
    let traeger = dir.path().join("bild.png");
    std::fs::write(&traeger, png).unwrap();

    let ziel = befehle::hide(&config, &traeger, &umschlag, None).await.unwrap();
    let versteckt = befehle::reveal(&config, &ziel).await.unwrap();
    let umschlag_aus_bild = versteckt.try_to_string().unwrap();
    assert_eq!(umschlag_aus_bild, umschlag);

    let klartext = befehle::open_nachricht(&dateien.privat, &umschlag_aus_bild)
        .await
        .unwrap();
    assert_eq!(klartext, "Treffpunkt: Bruecke");
}

#[tokio::test]
async fn keygen_ueberschreibt_nicht_ungefragt() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let oeffentlich = dir.path().join(&config.schluessel.oeffentlich);
    std::fs::write(&oeffentlich, "alt").unwrap();

    let err = befehle::keygen(&config, None, false).await.unwrap_err();
    assert!(err.to_string().contains("existiert bereits"));
    assert_eq!(
        std::fs::read_to_string(&oeffentlich).unwrap(),
        "alt"
    );
}

#[tokio::test]
async fn manipulierter_umschlag_ist_sicherheitsrelevant() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let dateien = befehle::keygen(&config, None, false).await.unwrap();

    let json = befehle::seal_nachricht(&dateien.oeffentlich, "unveraendert")
        .await
        .unwrap();
    let mut sealed = SealedMessage::from_json(&json).unwrap();
    sealed.payload.ciphertext[0] ^= 0x01;
    let manipuliert = sealed.to_json().unwrap();

    let err = befehle::open_nachricht(&dateien.privat, &manipuliert)
        .await
        .unwrap_err();
    let art = stillpost::fehlerart(&err);
    assert_eq!(art, Some(FehlerArt::Authentifizierung));
    assert_eq!(stillpost::exit_code(art), 4);
}

#[tokio::test]
async fn oeffentlicher_schluessel_kann_nicht_oeffnen() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let dateien = befehle::keygen(&config, None, false).await.unwrap();

    let json = befehle::seal_nachricht(&dateien.oeffentlich, "x").await.unwrap();
    let err = befehle::open_nachricht(&dateien.oeffentlich, &json)
        .await
        .unwrap_err();
    assert_eq!(stillpost::fehlerart(&err), Some(FehlerArt::SchluesselFormat));
}
