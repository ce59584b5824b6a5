//! McCune–Reischauer tables.
//!
//! The positional tables follow Unicode's canonical jamo order, so position
//! `i` is exactly the index produced by syllable decomposition. Aspiration is
//! marked with U+2019 (’) as in the published romanization table.

use crate::unicode::SYLLABLE_COUNT;

/// Initial consonants (초성). ㅇ is silent in onset position.
pub const ONSETS: [&str; 19] = [
    "k", "kk", "n", "t", "tt", "l", "m", "p", "pp", "s", "ss", "", "ch", "tch", "ch’", "k’", "t’",
    "p’", "h",
];

/// Vowels and diphthongs (중성).
pub const NUCLEI: [&str; 21] = [
    "a", "ae", "ya", "yae", "ŏ", "e", "yŏ", "ye", "o", "wa", "wae", "oe", "yo", "u", "wŏ", "we",
    "wi", "yu", "ŭ", "ŭi", "i",
];

/// Final consonants and clusters (종성). Index 0 is "no coda".
pub const CODAS: [&str; 28] = [
    "", "k", "kk", "ks", "n", "nj", "nh", "t", "l", "lg", "lm", "lb", "ls", "lt’", "lp’", "lh",
    "m", "p", "ps", "s", "ss", "ng", "ch", "ch’", "k’", "t’", "p’", "h",
];

const _: () = assert!(
    ONSETS.len() * NUCLEI.len() * CODAS.len() == SYLLABLE_COUNT as usize,
    "positional tables must cover the whole syllable block"
);

/// Standalone compatibility jamo (U+3131..U+3163), sorted by codepoint.
///
/// Consonants carry their coda-style transcription, so clusters such as ㄳ
/// read the same as in final position; ㅇ is silent.
pub static COMPONENTS: [(char, &str); 51] = [
    ('ㄱ', "k"),
    ('ㄲ', "kk"),
    ('ㄳ', "ks"),
    ('ㄴ', "n"),
    ('ㄵ', "nj"),
    ('ㄶ', "nh"),
    ('ㄷ', "t"),
    ('ㄸ', "tt"),
    ('ㄹ', "l"),
    ('ㄺ', "lg"),
    ('ㄻ', "lm"),
    ('ㄼ', "lb"),
    ('ㄽ', "ls"),
    ('ㄾ', "lt’"),
    ('ㄿ', "lp’"),
    ('ㅀ', "lh"),
    ('ㅁ', "m"),
    ('ㅂ', "p"),
    ('ㅃ', "pp"),
    ('ㅄ', "ps"),
    ('ㅅ', "s"),
    ('ㅆ', "ss"),
    ('ㅇ', ""),
    ('ㅈ', "ch"),
    ('ㅉ', "tch"),
    ('ㅊ', "ch’"),
    ('ㅋ', "k’"),
    ('ㅌ', "t’"),
    ('ㅍ', "p’"),
    ('ㅎ', "h"),
    ('ㅏ', "a"),
    ('ㅐ', "ae"),
    ('ㅑ', "ya"),
    ('ㅒ', "yae"),
    ('ㅓ', "ŏ"),
    ('ㅔ', "e"),
    ('ㅕ', "yŏ"),
    ('ㅖ', "ye"),
    ('ㅗ', "o"),
    ('ㅘ', "wa"),
    ('ㅙ', "wae"),
    ('ㅚ', "oe"),
    ('ㅛ', "yo"),
    ('ㅜ', "u"),
    ('ㅝ', "wŏ"),
    ('ㅞ', "we"),
    ('ㅟ', "wi"),
    ('ㅠ', "yu"),
    ('ㅡ', "ŭ"),
    ('ㅢ', "ŭi"),
    ('ㅣ', "i"),
];

/// Look up a standalone jamo. `None` for anything outside the table,
/// including precomposed syllables.
pub fn component(c: char) -> Option<&'static str> {
    COMPONENTS
        .binary_search_by_key(&c, |&(k, _)| k)
        .ok()
        .map(|i| COMPONENTS[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::{is_compat_jamo, is_hangul_syllable};

    #[test]
    fn test_components_sorted_and_contiguous() {
        for pair in COMPONENTS.windows(2) {
            assert_eq!(
                pair[0].0 as u32 + 1,
                pair[1].0 as u32,
                "gap after {:?}",
                pair[0].0
            );
        }
        assert_eq!(COMPONENTS[0].0 as u32, 12593);
        assert_eq!(COMPONENTS[50].0 as u32, 12643);
    }

    #[test]
    fn test_components_disjoint_from_syllables() {
        for &(c, _) in &COMPONENTS {
            assert!(is_compat_jamo(c));
            assert!(!is_hangul_syllable(c));
        }
    }

    #[test]
    fn test_component_vowels_match_nuclei() {
        let vowels: Vec<&str> = COMPONENTS[30..].iter().map(|&(_, v)| v).collect();
        assert_eq!(vowels, NUCLEI);
    }

    #[test]
    fn test_component_lookup() {
        assert_eq!(component('ㅏ'), Some("a"));
        assert_eq!(component('ㄱ'), Some("k"));
        assert_eq!(component('ㅊ'), Some("ch’"));
        assert_eq!(component('ㅇ'), Some(""));
        assert_eq!(component('ㅢ'), Some("ŭi"));
        assert_eq!(component('가'), None);
        assert_eq!(component('a'), None);
        assert_eq!(component('\u{3164}'), None);
    }

    #[test]
    fn test_aspiration_mark_is_typographic() {
        let all = ONSETS
            .iter()
            .chain(NUCLEI.iter())
            .chain(CODAS.iter())
            .chain(COMPONENTS.iter().map(|(_, v)| v));
        for s in all {
            assert!(!s.contains('\''), "straight apostrophe in {s:?}");
        }
        assert_eq!(ONSETS[14], "ch\u{2019}");
    }

    #[test]
    fn test_empty_slots() {
        assert_eq!(ONSETS[11], "");
        assert_eq!(CODAS[0], "");
        assert!(NUCLEI.iter().all(|n| !n.is_empty()));
    }
}
