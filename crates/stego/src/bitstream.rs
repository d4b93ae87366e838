//! Bitstrom der versteckten Nachricht
//!
//! ## Format
//! ```text
//! [unit_0 (16 Bit)] [unit_1 (16 Bit)] ... [0x0000 (Sentinel)]
//! ```
//! Jede UTF-16 Code-Unit wird mit dem hoechstwertigen Bit zuerst geschrieben.
//! Es gibt kein Laengenfeld, die erste Null-Unit beendet die Nachricht.
//! Eine Nachricht mit einer Null-Unit wird deshalb beim Auslesen an dieser
//! Stelle abgeschnitten.

/// Ende-Markierung des Bitstroms
pub const SENTINEL: u16 = 0;
/// Bits pro Code-Unit
pub const BITS_PER_UNIT: usize = 16;

/// Anzahl Bits fuer `unit_count` Code-Units plus Sentinel
pub fn required_bits(unit_count: usize) -> usize {
    unit_count.saturating_add(1).saturating_mul(BITS_PER_UNIT)
}

/// Serialisiert Code-Units plus Sentinel zu einzelnen Bits (0 oder 1)
pub fn encode_bits(units: &[u16]) -> impl Iterator<Item = u8> + '_ {
    units
        .iter()
        .copied()
        .chain(std::iter::once(SENTINEL))
        .flat_map(|unit| {
            (0..BITS_PER_UNIT)
                .rev()
                .map(move |shift| ((unit >> shift) & 1) as u8)
        })
}

/// Sammelt jeweils 16 Bits zu einer Code-Unit
#[derive(Debug, Default)]
pub struct UnitDecoder {
    acc: u16,
    filled: usize,
}

impl UnitDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt ein Bit auf. Gibt nach jedem 16. Bit die fertige Unit zurueck.
    pub fn push(&mut self, bit: u8) -> Option<u16> {
        self.acc = (self.acc << 1) | u16::from(bit & 1);
        self.filled += 1;

        if self.filled == BITS_PER_UNIT {
            let unit = self.acc;
            self.acc = 0;
            self.filled = 0;
            Some(unit)
        } else {
            None
        }
    }
}

/// Eine versteckte Nachricht als rohe UTF-16 Code-Units
///
/// Einbetten und Auslesen sind Unit-fuer-Unit symmetrisch, auch fuer
/// einzelne Surrogat-Haelften. Erst die Umwandlung in `String` interpretiert
/// Surrogat-Paare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HiddenMessage {
    units: Vec<u16>,
}

impl HiddenMessage {
    pub fn from_units(units: Vec<u16>) -> Self {
        Self { units }
    }

    pub fn units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Laenge in Code-Units (nicht in Zeichen)
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Bits inklusive Sentinel
    pub fn required_bits(&self) -> usize {
        required_bits(self.units.len())
    }

    /// True wenn die Nachricht eine Null-Unit enthaelt und beim Auslesen
    /// an dieser Stelle enden wird
    pub fn contains_sentinel(&self) -> bool {
        self.units.contains(&SENTINEL)
    }

    /// Ersetzt ungueltige Surrogate durch U+FFFD
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    pub fn try_to_string(&self) -> Result<String, std::string::FromUtf16Error> {
        String::from_utf16(&self.units)
    }
}

impl From<&str> for HiddenMessage {
    fn from(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }
}

impl From<String> for HiddenMessage {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

impl PartialEq<str> for HiddenMessage {
    fn eq(&self, other: &str) -> bool {
        self.units.iter().copied().eq(other.encode_utf16())
    }
}

impl PartialEq<&str> for HiddenMessage {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl std::fmt::Display for HiddenMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
