//! Hangul-to-Latin transcription (McCune–Reischauer).
//!
//! Precomposed syllables (U+AC00..U+D7A3) are split arithmetically into
//! onset, nucleus and coda indices and read from positional tables;
//! standalone compatibility jamo (ㄱ..ㅣ) come from a keyed table. Everything
//! else is copied through.

mod explain;
mod syllable;
mod table;
mod transcribe;

pub use explain::{explain, CharExplanation};
pub use syllable::{classify, compose, decompose, CharClass, Syllable};
pub use table::{component, CODAS, COMPONENTS, NUCLEI, ONSETS};
pub use transcribe::{transcribe, transcribe_char, Apostrophe, Transcriber};
