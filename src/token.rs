//! Morphological tokens and the tokenizer seam.

use std::sync::Arc;

/// One morpheme as reported by a tokenizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Token {
    /// The text exactly as it appears in the input.
    pub surface: String,
    /// Pronunciation, usually katakana. Empty (or the tokenizer's sentinel)
    /// when unknown.
    pub reading: String,
    /// Coarse part of speech. Carried along, never interpreted here.
    pub category: String,
    /// Dictionary form, when the tokenizer knows it.
    pub lemma: Option<String>,
}

impl Token {
    pub fn new(
        surface: impl Into<String>,
        reading: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            surface: surface.into(),
            reading: reading.into(),
            category: category.into(),
            lemma: None,
        }
    }

    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    /// The dictionary form, falling back to the surface.
    #[inline]
    pub fn lemma_or_surface(&self) -> &str {
        self.lemma.as_deref().unwrap_or(&self.surface)
    }
}

/// Anything that segments text into an ordered token sequence.
///
/// Errors are the tokenizer's own; callers receive them unchanged.
pub trait Tokenizer: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    type Error = T::Error;

    #[inline]
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    type Error = T::Error;

    #[inline]
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).tokenize(text)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for Arc<T> {
    type Error = T::Error;

    #[inline]
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        (**self).tokenize(text)
    }
}
