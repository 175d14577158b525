// src/context.rs
// Engine configuration. Tiny, Copy, and made of 'static data so it can be
// handed to every formatting call by value.

/// How a kanji-bearing token is turned into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnnotationMode {
    /// Strip okurigana, then split compounds on shared kana:
    /// `忘れ物` + `ワスレモノ` → `忘[わす]れ 物[もの]`.
    #[default]
    Compound,
    /// One bracket over the whole surface: `忘れ物[わすれもの]`.
    WholeWord,
}

/// Runtime context passed to every formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Reading value a tokenizer uses for "unknown".
    pub unknown_reading: &'static str,
    pub mode: AnnotationMode,
}

/// MeCab's placeholder for an empty feature.
pub const DEFAULT_UNKNOWN_READING: &str = "*";

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self {
            unknown_reading: DEFAULT_UNKNOWN_READING,
            mode: AnnotationMode::default(),
        }
    }
}

impl Context {
    #[inline(always)]
    pub fn new(mode: AnnotationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// `true` when `reading` carries no usable pronunciation.
    #[inline]
    pub fn is_unknown_reading(&self, reading: &str) -> bool {
        reading.is_empty() || reading == self.unknown_reading
    }
}
