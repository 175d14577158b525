//! Bundled [`Tokenizer`](crate::token::Tokenizer) implementations.
//!
//! * [`Lexicon`] – in-process longest-match segmentation over a word list.
//! * [`MecabProcess`] – runs the `mecab` executable and parses its output.

pub mod lexicon;
pub mod mecab;

pub use lexicon::{Lexicon, LexiconEntry};
pub use mecab::{MecabError, MecabNode, MecabProcess};
