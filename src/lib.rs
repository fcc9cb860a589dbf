#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Heuristic coreference tagging for layered-nlp.
//!
//! Given a POS-tagged sentence, this crate labels noun-phrase mentions and
//! the pronouns that may refer to them with IOB tags, then rewrites the
//! sentence with each pronoun replaced by its antecedent.
//!
//! ## Passes
//!
//! Each pass is a [`TagPass`] over a [`TaggedLine`] and only sees the labels
//! the previous ones left behind:
//!
//! 1. [`EntityTagger`] tags every noun phrase with a speculative category
//! 2. [`PronounTagger`] labels the pronouns
//! 3. [`Disambiguator`] settles neutral mentions from the pronouns after them
//! 4. [`MismatchFilter`] drops mentions nothing agrees with
//! 5. [`SequenceNormalizer`] repairs the IOB sequence
//!
//! [`CorefResolver`] then links pronouns to the most recent mention of the
//! same family.
//!
//! ## Usage
//!
//! ```
//! use layered_coref::CorefParser;
//!
//! let parser = CorefParser::new("en");
//! let tokens = vec![
//!     ("Here", "ADV"),
//!     ("is", "AUX"),
//!     ("the", "DET"),
//!     ("book", "NOUN"),
//!     ("now", "ADV"),
//!     ("take", "VERB"),
//!     ("it", "PRON"),
//! ];
//! assert_eq!(
//!     parser.replace_corefs(tokens),
//!     "Here is the book now take the book"
//! );
//! ```
//!
//! Word lists live in per-language [`Lexicon`] bundles (`en` and `pt` are
//! built in). Raw text needs a [`PosTagger`]; [`DictionaryTagger`] is a
//! small lookup-table one.

mod disambiguator;
mod display;
mod entity_tagger;
mod error;
mod label;
mod lexicon;
mod line;
mod mismatch_filter;
mod normalizer;
mod parser;
mod pos;
mod pronoun_tagger;
mod resolver;
mod tagger;

pub use disambiguator::Disambiguator;
pub use display::TaggedLineDisplay;
pub use entity_tagger::EntityTagger;
pub use error::{CorefError, CorefResult, LexiconError, TaggingError};
pub use label::{Category, Family, Label, LabelParseError, Position, TaggedToken};
pub use lexicon::{Lexicon, WordClass};
pub use line::{CorefEvidence, SpanRef, TagPass, TaggedLine};
pub use mismatch_filter::MismatchFilter;
pub use normalizer::SequenceNormalizer;
pub use parser::{CorefParser, ParserConfig};
pub use pos::{noun_form, word_form, PosTag, Token};
pub use pronoun_tagger::PronounTagger;
pub use resolver::{CorefLink, CorefResolver};
pub use tagger::{DictionaryTagger, PosTagger};
