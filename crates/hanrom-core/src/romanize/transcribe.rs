use std::borrow::Cow;

use serde::Deserialize;
use tracing::{debug, debug_span};

use super::syllable::decompose;
use super::table::component;
use crate::settings::Settings;

/// Aspiration mark used in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Apostrophe {
    /// U+2019 RIGHT SINGLE QUOTATION MARK, as in the published table.
    #[default]
    Typographic,
    /// U+0027 APOSTROPHE, for ASCII-only consumers.
    Ascii,
}

impl Apostrophe {
    pub const TYPOGRAPHIC: char = '\u{2019}';

    fn apply<'a>(self, s: Cow<'a, str>) -> Cow<'a, str> {
        match self {
            Apostrophe::Ascii if s.contains(Self::TYPOGRAPHIC) => {
                Cow::Owned(s.replace(Self::TYPOGRAPHIC, "'"))
            }
            _ => s,
        }
    }
}

/// Transcription of a single character.
///
/// Components borrow from the static table; syllables are built fresh and
/// anything else is copied through.
pub fn transcribe_char(c: char) -> Cow<'static, str> {
    if let Some(s) = component(c) {
        Cow::Borrowed(s)
    } else if let Some(syllable) = decompose(c) {
        Cow::Owned(syllable.romanize())
    } else {
        Cow::Owned(c.to_string())
    }
}

/// Transcribe `text` into McCune–Reischauer romanization, inserting
/// `boundary` between the outputs of consecutive characters.
///
/// Characters that are neither Hangul syllables nor compatibility jamo pass
/// through unchanged. The boundary is never leading or trailing.
pub fn transcribe(text: &str, boundary: &str) -> String {
    transcribe_inner(text, boundary, Apostrophe::Typographic)
}

fn transcribe_inner(text: &str, boundary: &str, apostrophe: Apostrophe) -> String {
    let _span = debug_span!("transcribe", len = text.len()).entered();

    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();
    let mut count = 0usize;
    while let Some(c) = chars.next() {
        if let Some(s) = component(c) {
            out.push_str(&apostrophe.apply(Cow::Borrowed(s)));
        } else if let Some(syllable) = decompose(c) {
            let (onset, nucleus, coda) = syllable.parts();
            out.push_str(&apostrophe.apply(Cow::Borrowed(onset)));
            out.push_str(nucleus);
            out.push_str(&apostrophe.apply(Cow::Borrowed(coda)));
        } else {
            out.push(c);
        }
        count += 1;
        if chars.peek().is_some() {
            out.push_str(boundary);
        }
    }

    debug!(chars = count, out_len = out.len());
    out
}

/// A transcription configuration: boundary string and apostrophe style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcriber {
    boundary: String,
    apostrophe: Apostrophe,
}

impl Transcriber {
    pub fn new(boundary: impl Into<String>, apostrophe: Apostrophe) -> Self {
        Self {
            boundary: boundary.into(),
            apostrophe,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.output.boundary.clone(), settings.output.apostrophe)
    }

    pub fn with_boundary(mut self, boundary: impl Into<String>) -> Self {
        self.boundary = boundary.into();
        self
    }

    pub fn with_apostrophe(mut self, apostrophe: Apostrophe) -> Self {
        self.apostrophe = apostrophe;
        self
    }

    pub fn transcribe(&self, text: &str) -> String {
        transcribe_inner(text, &self.boundary, self.apostrophe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_word() {
        assert_eq!(transcribe("한글", ""), "hankŭl");
    }

    #[test]
    fn test_boundary() {
        assert_eq!(transcribe("한글", "-"), "han-kŭl");
    }

    #[test]
    fn test_empty() {
        assert_eq!(transcribe("", ""), "");
        assert_eq!(transcribe("", "-"), "");
    }

    #[test]
    fn test_pass_through_with_boundary() {
        assert_eq!(transcribe("abc", "."), "a.b.c");
    }

    #[test]
    fn test_transcribe_char() {
        assert_eq!(transcribe_char('ㅏ'), "a");
        assert!(matches!(transcribe_char('ㅏ'), Cow::Borrowed(_)));
        assert_eq!(transcribe_char('차'), "ch’a");
        assert_eq!(transcribe_char('Z'), "Z");
    }

    #[test]
    fn test_transcriber_default_matches_transcribe() {
        let t = Transcriber::default();
        for text in ["한글", "감사합니다", "Hello 한국", "ㅋㅋㅋ", ""] {
            assert_eq!(t.transcribe(text), transcribe(text, ""));
        }
    }

    #[test]
    fn test_transcriber_ascii_apostrophe() {
        let t = Transcriber::default().with_apostrophe(Apostrophe::Ascii);
        assert_eq!(t.transcribe("차"), "ch'a");
        assert_eq!(t.transcribe("ㅋ"), "k'");
        assert_eq!(t.transcribe("닭"), "talg");
        assert_eq!(t.transcribe("핥"), "halt'");
        assert_eq!(t.transcribe("ㅌ"), "t'");
    }

    #[test]
    fn test_transcriber_ascii_leaves_input_apostrophes() {
        // Only table output is rewritten; input text is copied verbatim
        let t = Transcriber::default().with_apostrophe(Apostrophe::Ascii);
        assert_eq!(t.transcribe("it’s 차"), "it’s ch'a");
    }

    #[test]
    fn test_transcriber_boundary() {
        let t = Transcriber::new(" ", Apostrophe::Typographic);
        assert_eq!(t.transcribe("서울"), "sŏ ul");
    }
}
