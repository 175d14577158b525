//! Per-token furigana formatting.
//!
//! A token's `(surface, reading)` pair goes through two passes:
//!
//! 1. [`okurigana`] strips the kana already spelled out at either edge of the
//!    surface and brackets what is left:
//!    `食べる` + `たべる` → ` 食[た]べる`.
//! 2. [`compound`] looks for kana that the remaining core and its reading
//!    share, and cuts the bracket there:
//!    ` 忘れ物[わすれもの]` → ` 忘[わす]れ 物[もの]`.
//!
//! The leading space in front of every bracketed core is Anki's ruby
//! separator. Only the outermost one is removed, by the sentence generator.

pub mod compound;
pub mod okurigana;

pub use compound::{CompoundSplit, Dismembered, break_compound_furigana};
pub use okurigana::{KanjiBoundaries, find_kanji_boundaries};

use crate::{
    context::{AnnotationMode, Context},
    unicode::{has_kanji, katakana_to_hiragana},
};
use std::borrow::Cow;

/// Formats one token as furigana markup.
///
/// - no kanji in `word` → `word`, untouched (borrowed);
/// - unknown reading → `" " + word`, kanji left unannotated;
/// - otherwise the reading is converted to hiragana and the word is bracketed
///   according to `ctx.mode`.
pub fn format_furigana<'a>(word: &'a str, reading: &str, ctx: &Context) -> Cow<'a, str> {
    if !has_kanji(word) {
        return Cow::Borrowed(word);
    }
    if ctx.is_unknown_reading(reading) {
        return Cow::Owned(format!(" {word}"));
    }

    let reading = katakana_to_hiragana(reading);
    match ctx.mode {
        AnnotationMode::Compound => {
            let expr = okurigana::strip_okurigana(word, &reading);
            Cow::Owned(break_compound_furigana(&expr).into_owned())
        }
        AnnotationMode::WholeWord => Cow::Owned(format!(" {word}[{reading}]")),
    }
}
