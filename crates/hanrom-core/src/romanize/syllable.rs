use serde::Serialize;

use super::table::{component, CODAS, NUCLEI, ONSETS};
use crate::unicode::{is_hangul_syllable, NUCLEUS_STRIDE, ONSET_STRIDE, SYLLABLE_BASE};

/// Table indices of one precomposed syllable.
///
/// Only built through `Syllable::new`, `decompose` or `compose`, so every
/// index is inside its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Syllable {
    onset: usize,
    nucleus: usize,
    coda: usize,
}

impl Syllable {
    /// `None` when any index is past the end of its table.
    pub fn new(onset: usize, nucleus: usize, coda: usize) -> Option<Self> {
        if onset >= ONSETS.len() || nucleus >= NUCLEI.len() || coda >= CODAS.len() {
            return None;
        }
        Some(Self {
            onset,
            nucleus,
            coda,
        })
    }

    pub fn onset(&self) -> usize {
        self.onset
    }

    pub fn nucleus(&self) -> usize {
        self.nucleus
    }

    pub fn coda(&self) -> usize {
        self.coda
    }

    /// Onset, nucleus and coda transcriptions concatenated.
    pub fn romanize(&self) -> String {
        let (onset, nucleus, coda) = self.parts();
        let mut s = String::with_capacity(onset.len() + nucleus.len() + coda.len());
        s.push_str(onset);
        s.push_str(nucleus);
        s.push_str(coda);
        s
    }

    pub fn parts(&self) -> (&'static str, &'static str, &'static str) {
        (
            ONSETS[self.onset],
            NUCLEI[self.nucleus],
            CODAS[self.coda],
        )
    }

    pub fn to_char(self) -> char {
        let code = SYLLABLE_BASE
            + self.onset as u32 * ONSET_STRIDE
            + self.nucleus as u32 * NUCLEUS_STRIDE
            + self.coda as u32;
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Split a precomposed syllable into table indices.
///
/// Returns `None` for anything outside U+AC00..U+D7A3.
pub fn decompose(c: char) -> Option<Syllable> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - SYLLABLE_BASE;
    let onset = offset / ONSET_STRIDE;
    let nucleus = (offset - ONSET_STRIDE * onset) / NUCLEUS_STRIDE;
    let coda = (offset - ONSET_STRIDE * onset) - NUCLEUS_STRIDE * nucleus;

    let syllable = Syllable::new(onset as usize, nucleus as usize, coda as usize);
    assert!(
        syllable.is_some(),
        "romanization tables do not cover {c:?} (onset={onset}, nucleus={nucleus}, coda={coda})"
    );
    syllable
}

/// Build a precomposed syllable from table indices.
pub fn compose(onset: usize, nucleus: usize, coda: usize) -> Option<char> {
    Syllable::new(onset, nucleus, coda).map(Syllable::to_char)
}

/// Which of the three transcription paths a character takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CharClass {
    /// Standalone compatibility jamo, read from the component table.
    Component,
    /// Precomposed syllable block.
    Syllable(Syllable),
    /// Not Korean; copied to the output unchanged.
    Other,
}

pub fn classify(c: char) -> CharClass {
    if component(c).is_some() {
        CharClass::Component
    } else if let Some(syllable) = decompose(c) {
        CharClass::Syllable(syllable)
    } else {
        CharClass::Other
    }
}
