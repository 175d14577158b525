use crate::{
    context::{AnnotationMode, Context},
    furigana::format_furigana,
    token::{Token, Tokenizer},
    unicode::has_kanji,
};
use tracing::debug;

/// Sentence- and word-level furigana generation.
///
/// The outer orchestrator only needs these two calls; [`Generator`] is the
/// implementation shipped with the crate.
pub trait FuriganaGenerator {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Annotates a whole sentence: `私は忘れ物をした` → `私[わたし]は 忘[わす]れ 物[もの]をした`.
    fn generate(&self, text: &str) -> Result<String, Self::Error>;

    /// Annotates a single word: `食べる` → ` 食[た]べる`.
    fn generate_for_word(&self, word: &str) -> Result<String, Self::Error>;
}

/// Tokenizes text and renders each token as Anki furigana markup.
///
/// Stateless apart from its configuration: a `Generator` can be shared
/// across threads whenever its tokenizer can.
pub struct Generator<T> {
    ctx: Context,
    tokenizer: T,
}

impl<T: Tokenizer> Generator<T> {
    pub fn new(tokenizer: T) -> Self {
        Self {
            ctx: Context::default(),
            tokenizer,
        }
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    #[inline]
    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    /// Tokenizes `text` and annotates every token. Tokenizer errors are
    /// returned as-is.
    pub fn generate_for_sentence(&self, text: &str) -> Result<String, T::Error> {
        if text.is_empty() {
            return Ok(String::new());
        }
        debug!("furigana generation for text: '{text}'");
        let tokens = self.tokenizer.tokenize(text)?;
        Ok(self.annotate_tokens(&tokens))
    }

    /// Annotates the first token of `word` only; `word` itself when the
    /// tokenizer finds nothing. The result keeps its leading separator.
    pub fn generate_for_word(&self, word: &str) -> Result<String, T::Error> {
        if word.is_empty() {
            return Ok(String::new());
        }
        let tokens = self.tokenizer.tokenize(word)?;
        let Some(first) = tokens.first() else {
            return Ok(word.to_owned());
        };
        if tokens.len() > 1 {
            debug!(
                word,
                tokens = tokens.len(),
                "word split into several tokens, annotating the first"
            );
        }
        Ok(format_furigana(&first.surface, &first.reading, &self.ctx).into_owned())
    }

    /// Concatenates the markup of already tokenized text and drops the
    /// separator at each end of the result.
    pub fn annotate_tokens(&self, tokens: &[Token]) -> String {
        debug!(tokens = tokens.len(), "annotating tokens");
        let mut out = String::with_capacity(tokens.iter().map(|t| t.surface.len() * 3).sum());
        for token in tokens {
            let kanji = has_kanji(&token.surface);
            debug!(
                "token: surface='{}', reading='{}', has_kanji={kanji}",
                token.surface, token.reading
            );
            if kanji {
                let formatted = format_furigana(&token.surface, &token.reading, &self.ctx);
                debug!("  formatted as: '{formatted}'");
                out.push_str(&formatted);
            } else {
                out.push_str(&token.surface);
            }
        }
        debug!("before trimming: '{out}'");
        let trimmed = trim_separators(out);
        debug!("after trimming: '{trimmed}'");
        trimmed
    }

    /// First token's dictionary form, if any.
    pub fn dictionary_form(&self, word: &str) -> Result<Option<String>, T::Error> {
        Ok(self
            .tokenizer
            .tokenize(word)?
            .into_iter()
            .next()
            .map(|t| t.lemma_or_surface().to_owned()))
    }

    /// First token's reading, if it has a usable one.
    pub fn reading(&self, word: &str) -> Result<Option<String>, T::Error> {
        Ok(self
            .tokenizer
            .tokenize(word)?
            .into_iter()
            .next()
            .map(|t| t.reading)
            .filter(|r| !self.ctx.is_unknown_reading(r)))
    }
}

impl Generator<()> {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }
}

impl<T: Tokenizer> FuriganaGenerator for Generator<T> {
    type Error = T::Error;

    #[inline]
    fn generate(&self, text: &str) -> Result<String, Self::Error> {
        self.generate_for_sentence(text)
    }

    #[inline]
    fn generate_for_word(&self, word: &str) -> Result<String, Self::Error> {
        Generator::<T>::generate_for_word(self, word)
    }
}

// Removes at most one space from each end.
fn trim_separators(mut out: String) -> String {
    if out.ends_with(' ') {
        out.pop();
    }
    if out.starts_with(' ') {
        out.remove(0);
    }
    out
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GeneratorBuilder {
    ctx: Context,
}

impl GeneratorBuilder {
    pub fn context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    pub fn unknown_reading(mut self, sentinel: &'static str) -> Self {
        self.ctx.unknown_reading = sentinel;
        self
    }

    pub fn mode(mut self, mode: AnnotationMode) -> Self {
        self.ctx.mode = mode;
        self
    }

    pub fn build<T: Tokenizer>(self, tokenizer: T) -> Generator<T> {
        Generator {
            ctx: self.ctx,
            tokenizer,
        }
    }
}
