//! Splitting one coarse `word[reading]` unit into per-morpheme units.
//!
//! Kana that appear inside a compound's surface also appear, in order, in its
//! reading. Each such shared run is an anchor: everything before it is one
//! unit, the run itself is plain text after that unit, and the remainder is
//! split again.

use crate::chars::{common_prefix_len, split_into_chars, substring};
use memchr::memchr;
use std::borrow::Cow;
use tracing::trace;

/// A parsed `word[reading]tail` unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dismembered<'a> {
    pub word: &'a str,
    pub reading: &'a str,
    /// Plain kana rendered right after the bracket.
    pub tail: &'a str,
}

impl<'a> Dismembered<'a> {
    /// Parses `expr` around its first `[` and first `]`. `None` when there is
    /// no bracket, nothing in front of it, or the brackets are out of order.
    pub fn parse(expr: &'a str) -> Option<Self> {
        let bytes = expr.as_bytes();
        let open = memchr(b'[', bytes)?;
        if open == 0 {
            return None;
        }
        let close = memchr(b']', bytes)?;
        if close < open {
            return None;
        }
        Some(Self {
            word: &expr[..open],
            reading: &expr[open + 1..close],
            tail: &expr[close + 1..],
        })
    }

    pub fn assemble(&self) -> String {
        let mut out =
            String::with_capacity(self.word.len() + self.reading.len() + self.tail.len() + 2);
        out.push_str(self.word);
        out.push('[');
        out.push_str(self.reading);
        out.push(']');
        out.push_str(self.tail);
        out
    }
}

/// One cut: a finished head and a remainder still to be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundSplit<'a> {
    pub first: Dismembered<'a>,
    pub second: Dismembered<'a>,
}

impl<'a> CompoundSplit<'a> {
    /// Finds the first anchor in `expr`, scanning word positions then reading
    /// positions in ascending order. Both scans start at the shared prefix
    /// length (at least 1, so the head is never empty), and an anchor may not
    /// sit further into the word than into the reading.
    pub fn find(expr: &Dismembered<'a>) -> Option<Self> {
        let word_chars = split_into_chars(expr.word);
        let reading_chars = split_into_chars(expr.reading);
        let start = common_prefix_len(expr.word, expr.reading).max(1);

        for word_idx in start..word_chars.len() {
            for reading_idx in start.max(word_idx)..reading_chars.len() {
                if word_chars[word_idx] != reading_chars[reading_idx] {
                    continue;
                }
                let run = word_chars[word_idx..]
                    .iter()
                    .zip(&reading_chars[reading_idx..])
                    .take_while(|(w, r)| w == r)
                    .count();

                trace!(
                    word = expr.word,
                    reading = expr.reading,
                    word_idx,
                    reading_idx,
                    run,
                    "compound anchor"
                );

                return Some(Self {
                    first: Dismembered {
                        word: substring(expr.word, 0, word_idx),
                        reading: substring(expr.reading, 0, reading_idx),
                        tail: substring(expr.reading, reading_idx, reading_idx + run),
                    },
                    second: Dismembered {
                        word: substring(expr.word, word_idx + run, word_chars.len()),
                        reading: substring(expr.reading, reading_idx + run, reading_chars.len()),
                        tail: expr.tail,
                    },
                });
            }
        }
        None
    }
}

fn break_chunk(chunk: &str) -> Cow<'_, str> {
    let Some(split) = Dismembered::parse(chunk).and_then(|d| CompoundSplit::find(&d)) else {
        return Cow::Borrowed(chunk);
    };
    let rest = split.second.assemble();
    let mut out = split.first.assemble();
    out.push(' ');
    out.push_str(&break_chunk(&rest));
    Cow::Owned(out)
}

/// Splits every bracketed chunk of `expr` at its shared-kana anchors.
///
/// Chunks are separated by spaces and handled independently; runs of inner
/// spaces collapse to one, while leading and trailing spaces are kept as they
/// are. Borrowed when nothing was split.
pub fn break_compound_furigana(expr: &str) -> Cow<'_, str> {
    let body = expr.trim_matches(' ');
    if body.is_empty() {
        return Cow::Borrowed(expr);
    }
    let leading = expr.len() - expr.trim_start_matches(' ').len();
    let trailing = expr.len() - expr.trim_end_matches(' ').len();

    let mut changed = body.contains("  ");
    let mut parts: Vec<Cow<'_, str>> = Vec::new();
    for chunk in body.split(' ').filter(|c| !c.is_empty()) {
        let broken = break_chunk(chunk);
        changed |= matches!(broken, Cow::Owned(_));
        parts.push(broken);
    }
    if !changed {
        return Cow::Borrowed(expr);
    }

    let mut out = String::with_capacity(expr.len() + parts.len() * 2);
    out.extend(std::iter::repeat_n(' ', leading));
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(part);
    }
    out.extend(std::iter::repeat_n(' ', trailing));
    Cow::Owned(out)
}
