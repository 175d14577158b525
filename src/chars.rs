//! Character-indexed views over UTF-8 text.
//!
//! Readings and surfaces are addressed by *character* position throughout the
//! crate: a kanji is three bytes, the ASCII punctuation next to it is one.
//! Every positional helper here clamps instead of panicking.

use smallvec::SmallVec;
use std::borrow::Cow;

/// Inline capacity covers any realistic word or reading.
pub type CharBuf<'a> = SmallVec<[&'a str; 16]>;

/// Splits `text` into one-character slices, in order.
#[inline]
pub fn split_into_chars(text: &str) -> CharBuf<'_> {
    text.char_indices()
        .map(|(i, c)| &text[i..i + c.len_utf8()])
        .collect()
}

#[inline]
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}

// Byte offset of character `index`, or `text.len()` past the end.
#[inline]
fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset)
}

/// Characters `start..end` of `text`. `end` is clamped to the length; an
/// empty or inverted range yields `""`.
pub fn substring(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_offset(text, start);
    if from == text.len() {
        return "";
    }
    let to = from + byte_offset(&text[from..], end - start);
    &text[from..to]
}

/// The last `n` characters of `text` (all of it when `n` exceeds the length).
pub fn suffix_of_len(text: &str, n: usize) -> &str {
    let count = count_chars(text);
    if n >= count {
        return text;
    }
    substring(text, count - n, count)
}

/// Number of leading characters shared by `a` and `b`.
#[inline]
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}

#[inline]
pub fn leading_run(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.chars().take_while(|&c| pred(c)).count()
}

#[inline]
pub fn trailing_run(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.chars().rev().take_while(|&c| pred(c)).count()
}

/// One unit of possibly-malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// A decoded character, as its UTF-8 slice.
    Char(&'a str),
    /// A byte that is not part of any valid UTF-8 sequence.
    Invalid(u8),
}

impl Fragment<'_> {
    #[inline]
    pub fn char(self) -> Option<char> {
        match self {
            Fragment::Char(s) => s.chars().next(),
            Fragment::Invalid(_) => None,
        }
    }

    #[inline]
    pub fn byte_len(self) -> usize {
        match self {
            Fragment::Char(s) => s.len(),
            Fragment::Invalid(_) => 1,
        }
    }
}

/// Splits raw bytes into characters, turning every undecodable byte into its
/// own [`Fragment::Invalid`] instead of failing.
pub fn split_bytes(bytes: &[u8]) -> SmallVec<[Fragment<'_>; 16]> {
    let mut out = SmallVec::new();
    for chunk in bytes.utf8_chunks() {
        let valid = chunk.valid();
        out.extend(
            valid
                .char_indices()
                .map(|(i, c)| Fragment::Char(&valid[i..i + c.len_utf8()])),
        );
        out.extend(chunk.invalid().iter().copied().map(Fragment::Invalid));
    }
    out
}

/// Decodes `bytes`, replacing each undecodable byte with U+FFFD. Also
/// returns how many bytes were replaced. Borrowed when the input is valid.
pub fn decode_lossy(bytes: &[u8]) -> (Cow<'_, str>, usize) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return (Cow::Borrowed(text), 0);
    }
    let mut out = String::with_capacity(bytes.len() + 8);
    let mut invalid = 0;
    for fragment in split_bytes(bytes) {
        match fragment {
            Fragment::Char(s) => out.push_str(s),
            Fragment::Invalid(_) => {
                invalid += 1;
                out.push(char::REPLACEMENT_CHARACTER);
            }
        }
    }
    (Cow::Owned(out), invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mixed_width_text() {
        let chars = split_into_chars("食べるA!");
        assert_eq!(chars.as_slice(), &["食", "べ", "る", "A", "!"]);
        assert!(split_into_chars("").is_empty());
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(count_chars("わすれもの"), 5);
        assert_eq!("わすれもの".len(), 15);
        assert_eq!(count_chars(""), 0);
    }

    #[test]
    fn substring_clamps() {
        assert_eq!(substring("忘れ物", 0, 1), "忘");
        assert_eq!(substring("忘れ物", 1, 3), "れ物");
        assert_eq!(substring("忘れ物", 1, 99), "れ物");
        assert_eq!(substring("忘れ物", 3, 5), "");
        assert_eq!(substring("忘れ物", 2, 1), "");
        assert_eq!(substring("", 0, 1), "");
    }

    #[test]
    fn suffix_of_len_handles_overflow() {
        assert_eq!(suffix_of_len("食べる", 2), "べる");
        assert_eq!(suffix_of_len("食べる", 0), "");
        assert_eq!(suffix_of_len("食べる", 5), "食べる");
    }

    #[test]
    fn runs_and_prefixes() {
        assert_eq!(common_prefix_len("れ物", "れもの"), 1);
        assert_eq!(common_prefix_len("abc", "abd"), 2);
        assert_eq!(common_prefix_len("", "abc"), 0);
        assert_eq!(leading_run("おお茶", |c| c == 'お'), 2);
        assert_eq!(trailing_run("食べる", |c| c != '食'), 2);
        assert_eq!(trailing_run("", |_| true), 0);
    }

    #[test]
    fn split_bytes_isolates_invalid_bytes() {
        let mut bytes = "字".as_bytes().to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice("a".as_bytes());
        bytes.extend_from_slice(&[0xE3, 0x81]); // truncated sequence
        let frags = split_bytes(&bytes);
        assert_eq!(
            frags.as_slice(),
            &[
                Fragment::Char("字"),
                Fragment::Invalid(0xFF),
                Fragment::Char("a"),
                Fragment::Invalid(0xE3),
                Fragment::Invalid(0x81),
            ]
        );
        let total: usize = frags.iter().map(|f| f.byte_len()).sum();
        assert_eq!(total, bytes.len());
    }

    #[test]
    fn decode_lossy_replaces_each_bad_byte() {
        let input = "字a";
        let (text, invalid) = decode_lossy(input.as_bytes());
        assert!(matches!(text, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
        assert_eq!(invalid, 0);

        let (text, invalid) = decode_lossy(&[0xE5, 0xAD, 0x97, 0xFF, b'a', 0xE3, 0x81]);
        assert_eq!(text, "字\u{FFFD}a\u{FFFD}\u{FFFD}");
        assert_eq!(invalid, 3);
    }
}
