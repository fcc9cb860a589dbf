//! The public entry point: tag a sentence, then rewrite it.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::disambiguator::Disambiguator;
use crate::entity_tagger::EntityTagger;
use crate::error::{CorefResult, LexiconError, TaggingError};
use crate::lexicon::Lexicon;
use crate::line::TaggedLine;
use crate::mismatch_filter::MismatchFilter;
use crate::normalizer::SequenceNormalizer;
use crate::pos::Token;
use crate::pronoun_tagger::PronounTagger;
use crate::resolver::{CorefLink, CorefResolver};
use crate::tagger::PosTagger;

/// Builds a [`CorefParser`] from a language code and an optional lexicon
/// file overriding the built-in bundle.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Language code, e.g. `en` or `pt-BR`
    pub lang: String,
    /// RON lexicon bundle to use instead of the built-in one
    pub lexicon_path: Option<PathBuf>,
}

impl ParserConfig {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            lexicon_path: None,
        }
    }

    pub fn with_lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }

    pub fn build(&self) -> Result<CorefParser, LexiconError> {
        let parser = CorefParser::new(&self.lang);
        match &self.lexicon_path {
            Some(path) => Ok(parser.with_lexicon(Lexicon::load(path)?)),
            None => Ok(parser),
        }
    }

    /// Build a parser with `tagger` attached and rewrite raw `text` with it.
    pub fn replace_corefs_in_text(
        &self,
        tagger: impl PosTagger + Send + Sync + 'static,
        text: &str,
    ) -> CorefResult<String> {
        let parser = self.build()?.with_tagger(tagger);
        Ok(parser.replace_corefs_in_text(text)?)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new("en")
    }
}

/// Runs the tagging passes over a sentence and resolves its pronouns.
///
/// ```
/// use layered_coref::CorefParser;
///
/// let parser = CorefParser::new("en");
/// let tags = parser.iob_tag(vec![
///     ("The", "DET"),
///     ("girl", "NOUN"),
///     ("said", "VERB"),
///     ("she", "PRON"),
///     ("would", "AUX"),
///     ("go", "VERB"),
/// ]);
/// assert_eq!(tags[0].2, "B-ENTITY-FEMALE");
/// assert_eq!(tags[3].2, "B-COREF-FEMALE");
/// ```
pub struct CorefParser {
    lang: String,
    lexicon: Arc<Lexicon>,
    tagger: Option<Box<dyn PosTagger + Send + Sync>>,
}

impl CorefParser {
    /// A parser over the built-in bundle for `lang`. Unknown languages get an
    /// empty lexicon and label everything `O`.
    pub fn new(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            lexicon: Lexicon::for_language(lang),
            tagger: None,
        }
    }

    pub fn with_lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.lexicon = lexicon.into();
        self
    }

    /// Attach the collaborator used by the raw-text entry points.
    pub fn with_tagger(mut self, tagger: impl PosTagger + Send + Sync + 'static) -> Self {
        self.tagger = Some(Box::new(tagger));
        self
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Run all five tagging passes in order.
    pub fn tag_line<T: Into<Token>>(&self, tokens: impl IntoIterator<Item = T>) -> TaggedLine {
        let lexicon = &*self.lexicon;
        let line = TaggedLine::new(tokens)
            .run(&EntityTagger::new(lexicon))
            .run(&PronounTagger::new(lexicon))
            .run(&Disambiguator::new(lexicon))
            .run(&MismatchFilter)
            .run(&SequenceNormalizer);

        tracing::debug!(
            lang = %self.lang,
            tokens = line.len(),
            mentions = line.mention_spans().len(),
            corefs = line.corefs().count(),
            "tagged sentence"
        );
        line
    }

    /// `(text, POS, label)` triples for pre-tagged tokens.
    pub fn iob_tag<T: Into<Token>>(
        &self,
        tokens: impl IntoIterator<Item = T>,
    ) -> Vec<(String, String, String)> {
        self.tag_line(tokens).to_triples()
    }

    /// Tokenize and POS tag `text` with the attached collaborator.
    pub fn pos_tag(&self, text: &str) -> Result<Vec<Token>, TaggingError> {
        match &self.tagger {
            Some(tagger) => tagger.pos_tag(text),
            None => Err(TaggingError::Unavailable(format!(
                "no POS tagger configured for {:?}",
                self.lang
            ))),
        }
    }

    pub fn iob_tag_text(&self, text: &str) -> Result<Vec<(String, String, String)>, TaggingError> {
        Ok(self.iob_tag(self.pos_tag(text)?))
    }

    /// Like [`iob_tag_text`](Self::iob_tag_text), for input that has not been
    /// decoded yet.
    pub fn iob_tag_bytes(&self, bytes: &[u8]) -> Result<Vec<(String, String, String)>, TaggingError> {
        self.iob_tag_text(std::str::from_utf8(bytes)?)
    }

    /// Pronoun-to-antecedent links for pre-tagged tokens.
    pub fn links<T: Into<Token>>(&self, tokens: impl IntoIterator<Item = T>) -> Vec<CorefLink> {
        CorefResolver.links(&self.tag_line(tokens))
    }

    /// The sentence with each resolvable pronoun replaced by its antecedent.
    pub fn replace_corefs<T: Into<Token>>(&self, tokens: impl IntoIterator<Item = T>) -> String {
        CorefResolver.rewrite(&self.tag_line(tokens))
    }

    pub fn replace_corefs_in_text(&self, text: &str) -> Result<String, TaggingError> {
        Ok(self.replace_corefs(self.pos_tag(text)?))
    }
}

impl Default for CorefParser {
    fn default() -> Self {
        Self::new("en")
    }
}

impl fmt::Debug for CorefParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorefParser")
            .field("lang", &self.lang)
            .field("has_tagger", &self.tagger.is_some())
            .finish_non_exhaustive()
    }
}
