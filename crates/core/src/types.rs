//! Gemeinsame Typen fuer Stillpost

/// Rolle eines RSA-Schluessels im Text-Format
///
/// Bestimmt Header/Footer (`PUBLIC KEY` / `PRIVATE KEY`) und das
/// Byte-Format (SPKI / PKCS#8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyRole {
    /// Oeffentlicher Schluessel, nur zum Verschluesseln
    Public,
    /// Privater Schluessel, nur zum Entschluesseln
    Private,
}

impl KeyRole {
    /// Label zwischen `-----BEGIN ` und `-----`
    pub fn label(&self) -> &'static str {
        match self {
            KeyRole::Public => "PUBLIC KEY",
            KeyRole::Private => "PRIVATE KEY",
        }
    }

    /// Kopfzeile des Text-Formats
    pub fn header(&self) -> String {
        format!("-----BEGIN {}-----", self.label())
    }

    /// Fusszeile des Text-Formats
    pub fn footer(&self) -> String {
        format!("-----END {}-----", self.label())
    }
}

impl std::fmt::Display for KeyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyRole::Public => write!(f, "public"),
            KeyRole::Private => write!(f, "private"),
        }
    }
}
