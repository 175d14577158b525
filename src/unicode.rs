//! Script classification for Japanese text.
//!
//! Every predicate works on a decoded Unicode scalar value. The `_str`
//! variants accept a one-character fragment (as produced by
//! [`crate::chars::split_into_chars`]) and look at its first scalar only.

use crate::chars::Fragment;
use phf::{Set, phf_set};
use std::borrow::Cow;

/// Distance between a hiragana letter and its katakana counterpart.
const KANA_OFFSET: u32 = 0x60;

// Spacing and sentence punctuation that may sit inside an otherwise all-kana run.
static KANA_SEPARATORS: Set<char> = phf_set! {
    ' ',        // space
    '\u{3000}', // ideographic space
    '\u{3001}', // 、
    '\u{3002}', // 。
    '\u{FF01}', // ！
    '\u{FF1F}', // ？
    '\u{300C}', // 「
    '\u{300D}', // 」
};

// CJK Unified Ideographs + Extension A.
#[inline(always)]
pub const fn is_kanji(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF | // Unified
        0x3400..=0x4DBF   // Ext A
    )
}

// Hiragana block.
#[inline(always)]
pub const fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F)
}

// Katakana block (no phonetic extensions).
#[inline(always)]
pub const fn is_katakana(c: char) -> bool {
    matches!(c as u32, 0x30A0..=0x30FF)
}

#[inline(always)]
pub const fn is_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c)
}

#[inline]
pub fn is_kanji_str(ch: &str) -> bool {
    ch.chars().next().is_some_and(is_kanji)
}

#[inline]
pub fn is_hiragana_str(ch: &str) -> bool {
    ch.chars().next().is_some_and(is_hiragana)
}

#[inline]
pub fn is_katakana_str(ch: &str) -> bool {
    ch.chars().next().is_some_and(is_katakana)
}

#[inline]
pub fn is_kana_str(ch: &str) -> bool {
    ch.chars().next().is_some_and(is_kana)
}

/// `true` when `text` needs no reading at all: only kana, spaces and the
/// common Japanese sentence punctuation. The empty string qualifies.
pub fn is_all_kana(text: &str) -> bool {
    text.chars()
        .all(|c| is_kana(c) || KANA_SEPARATORS.contains(&c))
}

#[inline]
pub fn has_kanji(text: &str) -> bool {
    text.chars().any(is_kanji)
}

// The two blocks are laid out in parallel, so every codepoint of one maps onto
// the other by a fixed offset. Marks such as ー shift along with the letters.
#[inline(always)]
pub fn katakana_char_to_hiragana(c: char) -> char {
    if is_katakana(c) {
        char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

#[inline(always)]
pub fn hiragana_char_to_katakana(c: char) -> char {
    if is_hiragana(c) {
        char::from_u32(c as u32 + KANA_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Converts katakana to hiragana. Zero-copy when nothing needs converting.
pub fn katakana_to_hiragana(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_katakana) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(katakana_char_to_hiragana).collect())
}

/// Converts hiragana to katakana. Zero-copy when nothing needs converting.
pub fn hiragana_to_katakana(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_hiragana) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().map(hiragana_char_to_katakana).collect())
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum CharClass {
    Other, // Latin, digits, punctuation, undecodable bytes
    Kanji,
    Hiragana,
    Katakana,
}

impl CharClass {
    #[inline(always)]
    pub const fn is_kana(self) -> bool {
        matches!(self, CharClass::Hiragana | CharClass::Katakana)
    }
}

#[inline(always)]
pub fn classify(c: char) -> CharClass {
    if is_kanji(c) {
        CharClass::Kanji
    } else if is_hiragana(c) {
        CharClass::Hiragana
    } else if is_katakana(c) {
        CharClass::Katakana
    } else {
        CharClass::Other
    }
}

#[inline]
pub fn classify_fragment(fragment: Fragment<'_>) -> CharClass {
    fragment.char().map_or(CharClass::Other, classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_boundaries() {
        assert!(is_kanji('\u{4E00}'));
        assert!(is_kanji('\u{9FFF}'));
        assert!(is_kanji('\u{3400}'));
        assert!(!is_kanji('\u{F900}')); // compatibility ideographs are out of range
        assert!(!is_kanji('々'));

        assert!(is_hiragana('\u{3040}'));
        assert!(is_hiragana('\u{309F}'));
        assert!(!is_hiragana('\u{30A0}'));

        assert!(is_katakana('\u{30A0}'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('\u{31F0}'));
    }

    #[test]
    fn fragment_predicates_look_at_first_scalar() {
        assert!(is_kanji_str("食"));
        assert!(is_hiragana_str("た"));
        assert!(is_katakana_str("タ"));
        assert!(is_kana_str("タ"));
        assert!(!is_kana_str("食"));
        assert!(!is_kanji_str(""));
        assert!(!is_kana_str("a"));
    }

    #[test]
    fn all_kana_allows_sentence_punctuation() {
        assert!(is_all_kana("たべる"));
        assert!(is_all_kana("「ねえ、きいて！」"));
        assert!(is_all_kana("カタカナ　と ひらがな。"));
        assert!(is_all_kana(""));
        assert!(!is_all_kana("食べる"));
        assert!(!is_all_kana("abc"));
        assert!(!is_all_kana("なに?")); // ASCII question mark is not allowed
    }

    #[test]
    fn has_kanji_scans_whole_text() {
        assert!(has_kanji("お茶"));
        assert!(has_kanji("abc字"));
        assert!(!has_kanji("おちゃ"));
        assert!(!has_kanji(""));
    }

    #[test]
    fn kana_conversion() {
        assert_eq!(katakana_to_hiragana("タベル"), "たべる");
        assert_eq!(hiragana_to_katakana("たべる"), "タベル");
        assert_eq!(katakana_to_hiragana("ヽヾ"), "ゝゞ");
        assert_eq!(katakana_to_hiragana("食べるabc"), "食べるabc");
    }

    #[test]
    fn whole_block_shifts_including_marks() {
        // ー (U+30FC) lands on ゜ (U+309C), ・ (U+30FB) on ゛ (U+309B)
        assert_eq!(katakana_to_hiragana("\u{30FC}"), "\u{309C}");
        assert_eq!(katakana_to_hiragana("コーヒー"), "こ\u{309C}ひ\u{309C}");
        assert_eq!(katakana_to_hiragana("ヴァイオリン・ケース"), "ゔぁいおりん\u{309B}け\u{309C}す");
        assert_eq!(katakana_to_hiragana("\u{30A0}\u{30FF}"), "\u{3040}\u{309F}");
        assert_eq!(hiragana_to_katakana("\u{3040}\u{309F}"), "\u{30A0}\u{30FF}");
    }

    #[test]
    fn conversion_is_zero_copy_without_kana_of_source_script() {
        let input = "たべる";
        assert!(matches!(katakana_to_hiragana(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        let input = "タベル";
        assert!(matches!(hiragana_to_katakana(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn classification() {
        assert_eq!(classify('漢'), CharClass::Kanji);
        assert_eq!(classify('か'), CharClass::Hiragana);
        assert_eq!(classify('カ'), CharClass::Katakana);
        assert_eq!(classify('A'), CharClass::Other);
        assert_eq!(classify('。'), CharClass::Other);
        assert!(CharClass::Katakana.is_kana());
        assert!(!CharClass::Kanji.is_kana());
    }

    #[test]
    fn invalid_fragments_are_other() {
        assert_eq!(classify_fragment(Fragment::Invalid(0xFF)), CharClass::Other);
        assert_eq!(classify_fragment(Fragment::Char("字")), CharClass::Kanji);
    }
}
