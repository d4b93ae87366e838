//! Ende-zu-Ende: Bild-Bytes rein, PNG-Bytes raus, Nachricht zurueck

use std::io::Cursor;

use image::{ImageBuffer, ImageFormat, Rgb, Rgba};
use stillpost_core::{FehlerArt, Fehlerklasse};
use stillpost_stego::{
    hide_in_image, reveal_from_image, CarrierImage, HiddenMessage, StegoError,
};

fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn nachricht_ueberlebt_png() {
    let carrier = gradient_png(40, 30);
    let message = "Treffpunkt 23:00, Nordbruecke. Kennwort: Stillpost 🔐";

    let png = hide_in_image(&carrier, message).unwrap();
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));

    let revealed = reveal_from_image(&png).unwrap();
    assert_eq!(revealed, message);
    assert_eq!(revealed.try_to_string().unwrap(), message);
}

#[test]
fn eingabe_bleibt_unveraendert() {
    let carrier = gradient_png(10, 10);
    let copy = carrier.clone();
    let _ = hide_in_image(&carrier, "x").unwrap();
    assert_eq!(carrier, copy);
}

#[test]
fn bmp_traeger_ergibt_png() {
    let img = ImageBuffer::from_fn(12, 12, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 99]));
    let mut bmp = Vec::new();
    img.write_to(&mut Cursor::new(&mut bmp), ImageFormat::Bmp)
        .unwrap();

    let png = hide_in_image(&bmp, "aus BMP").unwrap();
    assert_eq!(
        image::guess_format(&png).unwrap(),
        ImageFormat::Png
    );
    assert_eq!(reveal_from_image(&png).unwrap(), "aus BMP");
}

#[test]
fn pixel_abweichung_hoechstens_ein_bit() {
    let carrier = gradient_png(20, 20);
    let png = hide_in_image(&carrier, "Abweichung").unwrap();

    let vorher = CarrierImage::decode(&carrier).unwrap();
    let nachher = CarrierImage::decode(&png).unwrap();
    for (a, b) in vorher.as_raw().iter().zip(nachher.as_raw()) {
        assert!(a.abs_diff(*b) <= 1);
    }
}

#[test]
fn kapazitaet_ueberschritten() {
    let carrier = gradient_png(4, 4);
    let err = hide_in_image(&carrier, "abc").unwrap_err();
    assert!(matches!(err, StegoError::Kapazitaet { .. }));
    assert_eq!(err.art(), FehlerArt::Kapazitaet);
}

#[test]
fn max_message_units_passt_genau() {
    let carrier = CarrierImage::decode(&gradient_png(9, 9)).unwrap();
    let max = carrier.max_message_units();
    let text: String = "m".repeat(max);

    let png = hide_in_image(&gradient_png(9, 9), &text).unwrap();
    assert_eq!(reveal_from_image(&png).unwrap(), text.as_str());

    let zu_lang: String = "m".repeat(max + 1);
    assert!(hide_in_image(&gradient_png(9, 9), &zu_lang).is_err());
}

#[test]
fn unberuehrtes_bild_hat_keine_nachricht_oder_eine_leere() {
    // Weisses Bild: alle LSBs 1, kein Sentinel
    let img = ImageBuffer::from_pixel(8, 8, Rgba([255u8, 255, 255, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    let err = reveal_from_image(&bytes).unwrap_err();
    assert_eq!(err.art(), FehlerArt::BeschaedigterTraeger);

    // Schwarzes Bild: erste 16 Bits sind 0, also leere Nachricht
    let img = ImageBuffer::from_pixel(8, 8, Rgba([0u8, 0, 0, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    assert_eq!(reveal_from_image(&bytes).unwrap(), HiddenMessage::default());
}
