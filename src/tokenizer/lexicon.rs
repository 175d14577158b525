use crate::{
    token::{Token, Tokenizer},
    unicode::{CharClass, classify, hiragana_to_katakana},
};
use std::{
    collections::{HashMap, hash_map::Entry},
    convert::Infallible,
};

/// Category given to text no entry covers.
pub const UNKNOWN_CATEGORY: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub reading: String,
    pub category: String,
    pub lemma: Option<String>,
}

/// Greedy longest-match tokenizer over a fixed word list.
///
/// At every position the longest known surface wins. Characters no entry
/// covers are grouped into runs of one [`CharClass`]; kana runs read as
/// themselves (in katakana), anything else gets an empty reading.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
    longest: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces `surface`.
    pub fn insert(
        &mut self,
        surface: impl Into<String>,
        reading: impl Into<String>,
        category: impl Into<String>,
    ) -> &mut LexiconEntry {
        let surface = surface.into();
        self.longest = self.longest.max(surface.chars().count());
        let entry = LexiconEntry {
            reading: reading.into(),
            category: category.into(),
            lemma: None,
        };
        match self.entries.entry(surface) {
            Entry::Occupied(mut slot) => {
                slot.insert(entry);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(entry),
        }
    }

    pub fn with_word(
        mut self,
        surface: impl Into<String>,
        reading: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        self.insert(surface, reading, category);
        self
    }

    pub fn with_inflected(
        mut self,
        surface: impl Into<String>,
        reading: impl Into<String>,
        category: impl Into<String>,
        lemma: impl Into<String>,
    ) -> Self {
        self.insert(surface, reading, category).lemma = Some(lemma.into());
        self
    }

    #[inline]
    pub fn get(&self, surface: &str) -> Option<&LexiconEntry> {
        self.entries.get(surface)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Segments `text`. Never fails.
    pub fn segment(&self, text: &str) -> Vec<Token> {
        // char start offsets plus the end of the text
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let n = offsets.len() - 1;

        let mut tokens = Vec::new();
        let mut pending: Option<(usize, usize, CharClass)> = None;
        let mut i = 0;

        'outer: while i < n {
            for len in (1..=self.longest.min(n - i)).rev() {
                let candidate = &text[offsets[i]..offsets[i + len]];
                if let Some(entry) = self.entries.get(candidate) {
                    flush_unknown(text, pending.take(), &mut tokens);
                    let mut token = Token::new(candidate, &entry.reading, &entry.category);
                    token.lemma = entry.lemma.clone();
                    tokens.push(token);
                    i += len;
                    continue 'outer;
                }
            }

            let (start, end) = (offsets[i], offsets[i + 1]);
            let class = text[start..end].chars().next().map_or(CharClass::Other, classify);
            pending = match pending {
                Some((s, _, c)) if c == class => Some((s, end, c)),
                other => {
                    flush_unknown(text, other, &mut tokens);
                    Some((start, end, class))
                }
            };
            i += 1;
        }
        flush_unknown(text, pending, &mut tokens);
        tokens
    }
}

fn flush_unknown(text: &str, run: Option<(usize, usize, CharClass)>, tokens: &mut Vec<Token>) {
    let Some((start, end, class)) = run else {
        return;
    };
    let surface = &text[start..end];
    let reading = if class.is_kana() {
        hiragana_to_katakana(surface).into_owned()
    } else {
        String::new()
    };
    tokens.push(Token::new(surface, reading, UNKNOWN_CATEGORY));
}

impl<S, R, C> FromIterator<(S, R, C)> for Lexicon
where
    S: Into<String>,
    R: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, R, C)>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        for (surface, reading, category) in iter {
            lexicon.insert(surface, reading, category);
        }
        lexicon
    }
}

impl Tokenizer for Lexicon {
    type Error = Infallible;

    #[inline]
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, Self::Error> {
        Ok(self.segment(text))
    }
}
