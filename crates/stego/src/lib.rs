//! # stillpost-stego
//!
//! Versteckt Text in den niederwertigsten Bits der Farbkanaele eines Bildes.
//!
//! ## Module
//! - `bitstream` - UTF-16 Code-Units, 16 Bit MSB-zuerst, Null-Sentinel am Ende
//! - `carrier` - RGBA-Pixelpuffer, Dekodierung beliebiger Bilder, PNG-Ausgabe
//! - `codec` - Einbetten und Auslesen (nur R, G, B, Alpha bleibt unberuehrt)
//! - `offload` - Dieselben Operationen auf einem Blocking-Worker von tokio
//! - `error` - Fehlertypen
//!
//! # Beispiel
//!
//! ```no_run
//! use stillpost_stego::{hide_in_image, reveal_from_image};
//!
//! let traeger = std::fs::read("urlaub.png").unwrap();
//! let png = hide_in_image(&traeger, "Treffpunkt: Bruecke").unwrap();
//! assert_eq!(reveal_from_image(&png).unwrap(), "Treffpunkt: Bruecke");
//! ```

pub mod bitstream;
pub mod carrier;
pub mod codec;
pub mod error;
pub mod offload;

// Bequeme Re-Exporte
pub use bitstream::{required_bits, HiddenMessage};
pub use carrier::CarrierImage;
pub use codec::{embed, extract, hide_in_image, reveal_from_image};
pub use error::{StegoError, StegoResult};
pub use offload::{hide_in_image_async, reveal_from_image_async};
