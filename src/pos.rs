//! Coarse part-of-speech input.
//!
//! Tokens arrive already tagged with the universal POS tagset. Nothing in
//! this crate infers these tags; they come from a [`PosTagger`](crate::PosTagger)
//! or from the caller.

use std::fmt;
use std::str::FromStr;

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Num,
    Cconj,
    Sconj,
    Part,
    Punct,
    Intj,
    Sym,
    /// Anything else, including tags this crate does not recognize.
    X,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Propn => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Aux => "AUX",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::Num => "NUM",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Part => "PART",
            PosTag::Punct => "PUNCT",
            PosTag::Intj => "INTJ",
            PosTag::Sym => "SYM",
            PosTag::X => "X",
        }
    }

    /// Parse a tag name, mapping anything unknown to [`PosTag::X`].
    pub fn parse_lossy(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::Propn,
            "VERB" => PosTag::Verb,
            "AUX" => PosTag::Aux,
            "ADJ" => PosTag::Adj,
            "ADV" => PosTag::Adv,
            "PRON" => PosTag::Pron,
            "DET" => PosTag::Det,
            "ADP" => PosTag::Adp,
            "NUM" => PosTag::Num,
            "CCONJ" | "CONJ" => PosTag::Cconj,
            "SCONJ" => PosTag::Sconj,
            "PART" | "PRT" => PosTag::Part,
            "PUNCT" | "." => PosTag::Punct,
            "INTJ" => PosTag::Intj,
            "SYM" => PosTag::Sym,
            _ => PosTag::X,
        }
    }

    /// NOUN or PROPN.
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }

    /// Modifiers that may open a noun span: ADJ, DET, NUM.
    pub fn is_helper(&self) -> bool {
        matches!(self, PosTag::Adj | PosTag::Det | PosTag::Num)
    }

    /// Helpers plus ADP; a span may not end on one of these.
    pub fn is_span_helper(&self) -> bool {
        self.is_helper() || *self == PosTag::Adp
    }

    /// Tags a span may greedily extend over.
    pub fn is_span_tail(&self) -> bool {
        self.is_noun() || self.is_span_helper()
    }
}

impl FromStr for PosTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PosTag::parse_lossy(s))
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A surface token and its coarse POS tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: PosTag,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }

    pub fn word_form(&self) -> String {
        word_form(&self.text)
    }

    pub fn noun_form(&self) -> String {
        noun_form(&self.text)
    }
}

/// Lowercased and trimmed; used for pronoun and joiner lookups.
pub fn word_form(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Lowercased with trailing "s" and whitespace stripped; used for noun
/// lookups so "lights" and "light" share one lexicon entry.
pub fn noun_form(text: &str) -> String {
    text.to_lowercase()
        .trim_end_matches(|c: char| c == 's' || c.is_whitespace())
        .to_string()
}

impl<S: Into<String>> From<(S, PosTag)> for Token {
    fn from((text, pos): (S, PosTag)) -> Self {
        Token::new(text, pos)
    }
}

impl<S: Into<String>> From<(S, &str)> for Token {
    fn from((text, pos): (S, &str)) -> Self {
        Token::new(text, PosTag::parse_lossy(pos))
    }
}
