use serde::Serialize;

use super::syllable::{classify, CharClass};
use super::transcribe::transcribe_char;

/// How one input character was transcribed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharExplanation {
    pub source: char,
    pub codepoint: u32,
    pub class: CharClass,
    /// Onset, nucleus and coda strings; only set for syllables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<[&'static str; 3]>,
    pub output: String,
}

/// Per-character breakdown of `transcribe(text, "")`.
pub fn explain(text: &str) -> Vec<CharExplanation> {
    text.chars()
        .map(|c| {
            let class = classify(c);
            let parts = match class {
                CharClass::Syllable(s) => {
                    let (onset, nucleus, coda) = s.parts();
                    Some([onset, nucleus, coda])
                }
                _ => None,
            };
            CharExplanation {
                source: c,
                codepoint: c as u32,
                class,
                parts,
                output: transcribe_char(c).into_owned(),
            }
        })
        .collect()
}
