//! The POS tagging collaborator.
//!
//! The pipeline never tokenizes or tags on its own. Raw text goes through a
//! [`PosTagger`]; any backend (a statistical tagger, a service, a lookup
//! table) can be plugged in. Closures work too:
//!
//! ```
//! use layered_coref::{PosTag, PosTagger, TaggingError, Token};
//!
//! let tagger = |text: &str| -> Result<Vec<Token>, TaggingError> {
//!     Ok(text.split_whitespace().map(|w| Token::new(w, PosTag::X)).collect())
//! };
//! assert_eq!(tagger.pos_tag("a b").unwrap().len(), 2);
//! ```

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::TaggingError;
use crate::pos::{word_form, PosTag, Token};

/// Tokenizes text and assigns universal POS tags.
pub trait PosTagger {
    fn pos_tag(&self, text: &str) -> Result<Vec<Token>, TaggingError>;
}

impl<F> PosTagger for F
where
    F: Fn(&str) -> Result<Vec<Token>, TaggingError>,
{
    fn pos_tag(&self, text: &str) -> Result<Vec<Token>, TaggingError> {
        self(text)
    }
}

/// Lookup-table tagger over Unicode word boundaries.
///
/// Punctuation and numbers are recognized by their characters; every other
/// word is looked up (lowercased) in the table and falls back to a fixed tag.
/// Meant for tests, demos and closed-domain input where the vocabulary is
/// known up front.
#[derive(Debug, Clone)]
pub struct DictionaryTagger {
    entries: HashMap<String, PosTag>,
    fallback: PosTag,
}

impl DictionaryTagger {
    pub fn new(fallback: PosTag) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn with_entry(mut self, word: &str, pos: PosTag) -> Self {
        self.entries.insert(word_form(word), pos);
        self
    }

    pub fn with_entries<'w>(mut self, entries: impl IntoIterator<Item = (&'w str, PosTag)>) -> Self {
        for (word, pos) in entries {
            self.entries.insert(word_form(word), pos);
        }
        self
    }

    pub fn tag_word(&self, word: &str) -> PosTag {
        if let Some(pos) = self.entries.get(&word_form(word)) {
            *pos
        } else if word.chars().all(|c| !c.is_alphanumeric()) {
            PosTag::Punct
        } else if word.chars().all(char::is_numeric) {
            PosTag::Num
        } else {
            self.fallback
        }
    }
}

impl Default for DictionaryTagger {
    fn default() -> Self {
        Self::new(PosTag::X)
    }
}

impl PosTagger for DictionaryTagger {
    fn pos_tag(&self, text: &str) -> Result<Vec<Token>, TaggingError> {
        Ok(text
            .split_word_bounds()
            .filter(|word| !word.trim().is_empty())
            .map(|word| Token::new(word, self.tag_word(word)))
            .collect())
    }
}
