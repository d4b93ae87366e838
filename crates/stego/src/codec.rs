//! LSB-Einbettung und -Auslesen
//!
//! Bit `i` des Bitstroms landet in Pixel `i / 3`, Kanal `i % 3`
//! (0 = R, 1 = G, 2 = B), also auf Byte-Offset `pixel * 4 + kanal`.
//! Nur das niederwertigste Bit wird ersetzt, die oberen 7 Bits und der
//! Alpha-Kanal bleiben unveraendert.

use crate::bitstream::{encode_bits, UnitDecoder, SENTINEL};
use crate::carrier::{CarrierImage, BYTES_PER_PIXEL, USABLE_CHANNELS};
use crate::error::{StegoError, StegoResult};
use crate::HiddenMessage;

/// Byte-Offset fuer Bit `bit_index` im RGBA-Puffer
fn byte_offset(bit_index: usize) -> usize {
    let pixel = bit_index / USABLE_CHANNELS;
    let channel = bit_index % USABLE_CHANNELS;
    pixel * BYTES_PER_PIXEL + channel
}

/// Bettet eine Nachricht in den Traeger ein
///
/// Die Kapazitaet wird vor der ersten Aenderung geprueft. Bei
/// `Kapazitaet` ist der Traeger unveraendert.
pub fn embed(carrier: &mut CarrierImage, message: &HiddenMessage) -> StegoResult<()> {
    let benoetigt = message.required_bits();
    let verfuegbar = carrier.capacity_bits();

    if benoetigt > verfuegbar {
        tracing::warn!(benoetigt, verfuegbar, "Nachricht passt nicht in das Traegerbild");
        return Err(StegoError::Kapazitaet {
            benoetigt,
            verfuegbar,
        });
    }

    if message.contains_sentinel() {
        tracing::debug!("Nachricht enthaelt eine Null-Unit und wird beim Auslesen gekuerzt");
    }

    let pixels = carrier.pixels_mut();
    for (bit_index, bit) in encode_bits(message.units()).enumerate() {
        let offset = byte_offset(bit_index);
        let byte = pixels.get_mut(offset).ok_or_else(|| {
            StegoError::BeschaedigterTraeger(format!(
                "Byte-Offset {offset} ausserhalb des Puffers beim Einbetten"
            ))
        })?;
        *byte = (*byte & 0xFE) | bit;
    }

    tracing::debug!(
        units = message.len(),
        bits = benoetigt,
        kapazitaet = verfuegbar,
        "Nachricht eingebettet"
    );

    Ok(())
}

/// Liest die versteckte Nachricht bis zum Sentinel aus
///
/// Endet der Puffer vor einer Null-Unit, ergibt das `BeschaedigterTraeger`
/// (keine Nachricht oder Bild neu komprimiert).
pub fn extract(carrier: &CarrierImage) -> StegoResult<HiddenMessage> {
    let pixels = carrier.as_raw();
    let mut decoder = UnitDecoder::new();
    let mut units = Vec::new();

    for bit_index in 0..carrier.capacity_bits() {
        let offset = byte_offset(bit_index);
        let byte = pixels.get(offset).ok_or_else(|| {
            StegoError::BeschaedigterTraeger(format!(
                "Byte-Offset {offset} ausserhalb des Puffers beim Auslesen"
            ))
        })?;

        if let Some(unit) = decoder.push(byte & 1) {
            if unit == SENTINEL {
                tracing::debug!(units = units.len(), "Nachricht ausgelesen");
                return Ok(HiddenMessage::from_units(units));
            }
            units.push(unit);
        }
    }

    Err(StegoError::BeschaedigterTraeger(format!(
        "kein Sentinel in {} Bit gefunden",
        carrier.capacity_bits()
    )))
}

/// Dekodiert ein Bild, bettet `message` ein und liefert PNG-Bytes
///
/// Die Eingabebytes werden nicht veraendert.
pub fn hide_in_image(image_bytes: &[u8], message: &str) -> StegoResult<Vec<u8>> {
    let mut carrier = CarrierImage::decode(image_bytes)?;
    embed(&mut carrier, &HiddenMessage::from(message))?;
    carrier.encode_png()
}

/// Dekodiert ein Bild und liest die versteckte Nachricht aus
pub fn reveal_from_image(image_bytes: &[u8]) -> StegoResult<HiddenMessage> {
    let carrier = CarrierImage::decode(image_bytes)?;
    extract(&carrier)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
