//! Helpers shared by the crate's test suites.

pub mod round_trip;

use crate::{Lexicon, Token, Tokenizer};
use std::fmt;

/// A small everyday-Japanese word list.
pub fn sample_lexicon() -> Lexicon {
    Lexicon::new()
        .with_word("私", "ワタシ", "名詞")
        .with_word("は", "ハ", "助詞")
        .with_word("を", "ヲ", "助詞")
        .with_word("に", "ニ", "助詞")
        .with_word("の", "ノ", "助詞")
        .with_word("忘れ物", "ワスレモノ", "名詞")
        .with_word("した", "シタ", "動詞")
        .with_inflected("食べる", "タベル", "動詞", "食べる")
        .with_inflected("食べた", "タベタ", "動詞", "食べる")
        .with_word("お茶", "オチャ", "名詞")
        .with_word("飲み", "ノミ", "動詞")
        .with_word("ます", "マス", "助動詞")
        .with_word("日本", "ニホン", "名詞")
        .with_word("東京", "トウキョウ", "名詞")
        .with_word("待ち合わせ場所", "マチアワセバショ", "名詞")
        .with_word("駅", "エキ", "名詞")
        .with_word("です", "デス", "助動詞")
        .with_word("コーヒー", "コーヒー", "名詞")
        .with_word("。", "。", "記号")
        .with_word("謎", "*", "名詞")
}

#[derive(Debug)]
pub struct Unavailable;

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tokenizer unavailable")
    }
}

impl std::error::Error for Unavailable {}

/// Always fails; for error propagation tests.
pub struct BrokenTokenizer;

impl Tokenizer for BrokenTokenizer {
    type Error = Unavailable;

    fn tokenize(&self, _text: &str) -> Result<Vec<Token>, Self::Error> {
        Err(Unavailable)
    }
}

/// Returns a fixed token list whatever the input.
pub struct FixedTokenizer(pub Vec<Token>);

impl Tokenizer for FixedTokenizer {
    type Error = std::convert::Infallible;

    fn tokenize(&self, _text: &str) -> Result<Vec<Token>, Self::Error> {
        Ok(self.0.clone())
    }
}
