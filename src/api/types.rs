use hanrom_core::romanize::{CharClass, CharExplanation};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HanError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

/// Table indices of a syllable block.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct HanSyllable {
    pub onset: u8,
    pub nucleus: u8,
    pub coda: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct HanExplanation {
    pub source: String,
    pub codepoint: u32,
    pub char_class: HanCharClass,
    pub output: String,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum HanCharClass {
    Component,
    Syllable { syllable: HanSyllable },
    Other,
}

impl From<CharClass> for HanCharClass {
    fn from(class: CharClass) -> Self {
        match class {
            CharClass::Component => HanCharClass::Component,
            // Indices are below 28 by construction
            CharClass::Syllable(s) => HanCharClass::Syllable {
                syllable: HanSyllable {
                    onset: s.onset() as u8,
                    nucleus: s.nucleus() as u8,
                    coda: s.coda() as u8,
                },
            },
            CharClass::Other => HanCharClass::Other,
        }
    }
}

impl From<CharExplanation> for HanExplanation {
    fn from(e: CharExplanation) -> Self {
        HanExplanation {
            source: e.source.to_string(),
            codepoint: e.codepoint,
            char_class: e.class.into(),
            output: e.output,
        }
    }
}
