//! Stego-Operationen auf einem Blocking-Worker von tokio
//!
//! Dekodieren, Bit-Schleife und PNG-Kodierung sind rein CPU-gebunden.
//! Ein fehlgeschlagener Worker (Panic, Abbruch) ergibt `Hintergrund`.

use crate::bitstream::HiddenMessage;
use crate::codec::{hide_in_image, reveal_from_image};
use crate::error::{StegoError, StegoResult};

/// Wie [`hide_in_image`], aber ohne den Runtime-Thread zu blockieren
pub async fn hide_in_image_async(image_bytes: Vec<u8>, message: String) -> StegoResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || hide_in_image(&image_bytes, &message))
        .await
        .map_err(|e| StegoError::Hintergrund(e.to_string()))?
}

/// Wie [`reveal_from_image`], aber ohne den Runtime-Thread zu blockieren
pub async fn reveal_from_image_async(image_bytes: Vec<u8>) -> StegoResult<HiddenMessage> {
    tokio::task::spawn_blocking(move || reveal_from_image(&image_bytes))
        .await
        .map_err(|e| StegoError::Hintergrund(e.to_string()))?
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::CarrierImage;
    use stillpost_core::{FehlerArt, Fehlerklasse};

    fn blank_png(width: u32, height: u32) -> Vec<u8> {
        let pixels = vec![0x80; width as usize * height as usize * 4];
        CarrierImage::from_rgba(width, height, pixels)
            .unwrap()
            .encode_png()
            .unwrap()
    }

    #[tokio::test]
    async fn async_roundtrip() {
        let png = hide_in_image_async(blank_png(16, 16), "im Hintergrund".to_string())
            .await
            .unwrap();
        let message = reveal_from_image_async(png).await.unwrap();
        assert_eq!(message, "im Hintergrund");
    }

    #[tokio::test]
    async fn fehler_werden_durchgereicht() {
        let result = hide_in_image_async(blank_png(1, 1), "zu lang".to_string()).await;
        let err = result.unwrap_err();
        assert_eq!(err.art(), FehlerArt::Kapazitaet);

        let err = reveal_from_image_async(b"kein Bild".to_vec())
            .await
            .unwrap_err();
        assert_eq!(err.art(), FehlerArt::Bildformat);
    }
}
