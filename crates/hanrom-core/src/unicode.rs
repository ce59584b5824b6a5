//! Character-level Unicode classification for Korean text.

/// First precomposed Hangul syllable (가, U+AC00).
pub const SYLLABLE_BASE: u32 = 0xAC00;

/// Last precomposed Hangul syllable (힣, U+D7A3).
pub const SYLLABLE_LAST: u32 = 0xD7A3;

/// Number of precomposed syllables in the block.
pub const SYLLABLE_COUNT: u32 = SYLLABLE_LAST - SYLLABLE_BASE + 1;

/// Syllables sharing one onset (21 nuclei × 28 codas).
pub const ONSET_STRIDE: u32 = 588;

/// Syllables sharing one onset and nucleus (28 codas, including "none").
pub const NUCLEUS_STRIDE: u32 = 28;

/// Check the precomposed Hangul Syllables block (U+AC00..U+D7A3).
/// Every codepoint in this range is assigned and decomposable.
pub fn is_hangul_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Check the modern letters of the Hangul Compatibility Jamo block
/// (ㄱ U+3131..ㅣ U+3163). The archaic letters after U+3163 are not covered.
pub fn is_compat_jamo(c: char) -> bool {
    ('\u{3131}'..='\u{3163}').contains(&c)
}

pub fn is_hangul(c: char) -> bool {
    is_hangul_syllable(c) || is_compat_jamo(c)
}

/// Check if a string has at least one Hangul syllable or compatibility jamo.
pub fn contains_hangul(s: &str) -> bool {
    s.chars().any(is_hangul)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size() {
        assert_eq!(SYLLABLE_COUNT, 11172);
        assert_eq!(ONSET_STRIDE, 21 * NUCLEUS_STRIDE);
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(is_hangul_syllable('한'));
        assert!(!is_hangul_syllable('ㄱ'));
        assert!(!is_hangul_syllable('\u{D7A4}'));
        assert!(!is_hangul_syllable('\u{ABFF}'));

        assert!(is_compat_jamo('ㄱ'));
        assert!(is_compat_jamo('ㅎ'));
        assert!(is_compat_jamo('ㅏ'));
        assert!(is_compat_jamo('ㅣ'));
        assert!(!is_compat_jamo('\u{3130}'));
        assert!(!is_compat_jamo('\u{3164}'));
        assert!(!is_compat_jamo('가'));

        assert!(is_hangul('ㅎ'));
        assert!(is_hangul('글'));
        assert!(!is_hangul('a'));
        assert!(!is_hangul('あ'));
    }

    #[test]
    fn test_conjoining_jamo_not_hangul() {
        // NFD jamo (U+1100 block) are not handled here
        assert!(!is_hangul('\u{1100}'));
        assert!(!is_hangul('\u{1161}'));
        assert!(!is_hangul('\u{11A8}'));
    }

    #[test]
    fn test_contains_hangul() {
        assert!(contains_hangul("Hello 한국"));
        assert!(contains_hangul("ㅋㅋ"));
        assert!(!contains_hangul("Hello"));
        assert!(!contains_hangul(""));
    }
}
