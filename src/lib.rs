//! Furigana annotation for tokenized Japanese text.
//!
//! Output uses Anki's ruby markup: `忘[わす]れ 物[もの]`, a space in front of
//! every bracketed kanji run.
//!
//! ```
//! use furiganize::{Generator, Lexicon};
//!
//! let lexicon = Lexicon::new()
//!     .with_word("私", "ワタシ", "名詞")
//!     .with_word("忘れ物", "ワスレモノ", "名詞")
//!     .with_word("を", "ヲ", "助詞")
//!     .with_word("した", "シタ", "動詞");
//! let generator = Generator::new(lexicon);
//! assert_eq!(
//!     generator.generate_for_sentence("私は忘れ物をした").unwrap(),
//!     "私[わたし]は 忘[わす]れ 物[もの]をした"
//! );
//! ```

pub mod chars;
pub mod context;
pub mod furigana;
pub mod generator;
pub mod token;
pub mod tokenizer;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{AnnotationMode, Context};
pub use furigana::{break_compound_furigana, format_furigana};
pub use generator::{FuriganaGenerator, Generator, GeneratorBuilder};
pub use token::{Token, Tokenizer};
pub use tokenizer::{Lexicon, MecabError, MecabProcess};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
