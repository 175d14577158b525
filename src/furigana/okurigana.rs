use crate::{
    chars::{count_chars, leading_run, substring, suffix_of_len, trailing_run},
    unicode::is_kana,
};

/// Lengths, in characters, of the kana runs at each edge of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KanjiBoundaries {
    pub before: usize,
    pub after: usize,
}

/// Measures the leading and trailing kana runs of `word` independently. For
/// an all-kana word both runs cover the whole word.
#[inline]
pub fn find_kanji_boundaries(word: &str) -> KanjiBoundaries {
    KanjiBoundaries {
        before: leading_run(word, is_kana),
        after: trailing_run(word, is_kana),
    }
}

/// Builds the coarse expression `prefix core[reading core]suffix`, where
/// `prefix`/`suffix` are the edge kana of `word` and the reading is cut at
/// the same character counts from each end.
///
/// `reading` must already be hiragana. When the reading is shorter than the
/// trailing kana run, the reading core runs to the end of the reading.
pub fn strip_okurigana(word: &str, reading: &str) -> String {
    let KanjiBoundaries { before, after } = find_kanji_boundaries(word);
    let word_len = count_chars(word);
    let reading_len = count_chars(reading);

    let prefix = substring(word, 0, before);
    let core = substring(word, before, word_len.saturating_sub(after));
    let suffix = if after == 0 {
        ""
    } else {
        suffix_of_len(word, after)
    };
    let reading_end = reading_len.checked_sub(after).unwrap_or(reading_len);
    let reading_core = substring(reading, before, reading_end);

    format!("{prefix} {core}[{reading_core}]{suffix}")
}
