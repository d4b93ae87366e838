//! Traegerbild als RGBA-Pixelpuffer
//!
//! Eingabe: jedes Bild, das `image` zu RGBA dekodieren kann.
//! Ausgabe: immer PNG. Verlustbehaftete Formate wuerden die versteckten
//! Bits zerstoeren.

use std::io::Cursor;

use image::{ColorType, ImageFormat};

use crate::bitstream::BITS_PER_UNIT;
use crate::error::{StegoError, StegoResult};

/// Bytes pro Pixel (R, G, B, A)
pub const BYTES_PER_PIXEL: usize = 4;
/// Nutzbare Kanaele pro Pixel, Alpha ist ausgenommen
pub const USABLE_CHANNELS: usize = 3;

/// Dekodierter RGBA-Pixelpuffer
///
/// Invariante: `pixels.len() == width * height * 4`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CarrierImage {
    /// Erstellt einen Traeger aus einem rohen RGBA-Puffer
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> StegoResult<Self> {
        let erwartet = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));

        match erwartet {
            Some(erwartet) if erwartet == pixels.len() => Ok(Self {
                width,
                height,
                pixels,
            }),
            _ => Err(StegoError::UngueltigerPuffer {
                breite: width,
                hoehe: height,
                erwartet: erwartet.unwrap_or(usize::MAX),
                erhalten: pixels.len(),
            }),
        }
    }

    /// Dekodiert ein beliebiges Bild (PNG, BMP, JPEG, GIF) zu RGBA
    pub fn decode(bytes: &[u8]) -> StegoResult<Self> {
        let rgba = image::load_from_memory(bytes)
            .map_err(|e| StegoError::BildDekodierung(e.to_string()))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        tracing::debug!(breite = width, hoehe = height, "Traegerbild dekodiert");

        Self::from_rgba(width, height, rgba.into_raw())
    }

    /// Kodiert den Pixelpuffer verlustfrei als PNG
    pub fn encode_png(&self) -> StegoResult<Vec<u8>> {
        let mut bytes = Vec::new();
        image::write_buffer_with_format(
            &mut Cursor::new(&mut bytes),
            &self.pixels,
            self.width,
            self.height,
            ColorType::Rgba8,
            ImageFormat::Png,
        )
        .map_err(|e| StegoError::BildKodierung(e.to_string()))?;
        Ok(bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / BYTES_PER_PIXEL
    }

    /// Kapazitaet in Bit: 3 nutzbare Kanaele pro Pixel
    pub fn capacity_bits(&self) -> usize {
        self.pixel_count() * USABLE_CHANNELS
    }

    /// Maximale Nachrichtenlaenge in Code-Units (ohne Sentinel)
    pub fn max_message_units(&self) -> usize {
        (self.capacity_bits() / BITS_PER_UNIT).saturating_sub(1)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
