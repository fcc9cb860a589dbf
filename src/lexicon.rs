//! Per-language word classes.
//!
//! A [`Lexicon`] is plain data: every word class is a set of lowercase word
//! forms. Bundles are written in RON (see `lexicons/*.ron`) and the built-in
//! ones are parsed once and shared behind an [`Arc`].

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

const ENGLISH_RON: &str = include_str!("../lexicons/en.ron");
const PORTUGUESE_RON: &str = include_str!("../lexicons/pt.ron");

static ENGLISH: Lazy<Arc<Lexicon>> = Lazy::new(|| builtin("en", ENGLISH_RON));
static PORTUGUESE: Lazy<Arc<Lexicon>> = Lazy::new(|| builtin("pt", PORTUGUESE_RON));

fn builtin(lang: &str, source: &str) -> Arc<Lexicon> {
    match Lexicon::from_ron_str(source) {
        Ok(lexicon) => Arc::new(lexicon),
        Err(err) => {
            tracing::error!(lang, %err, "built-in lexicon failed to parse");
            Arc::new(Lexicon::default())
        }
    }
}

/// The named word classes a lexicon provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    /// Coordinating words that join two nouns into one plural referent ("and").
    Joiners,
    /// Words that pull themselves into the following noun's span ("my", "the").
    SpanExtenders,
    MaleNouns,
    FemaleNouns,
    InanimateNouns,
    /// Nouns that may take a gendered pronoun ("friend", "person").
    HumanNouns,
    MaleCorefs,
    FemaleCorefs,
    NeutralCorefs,
    InanimateCorefs,
    /// Suffixes marking a plural noun.
    PluralEndings,
    PluralMaleCorefs,
    PluralFemaleCorefs,
}

/// Immutable word lists for one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub joiners: HashSet<String>,
    pub span_extenders: HashSet<String>,
    pub male_nouns: HashSet<String>,
    pub female_nouns: HashSet<String>,
    pub inanimate_nouns: HashSet<String>,
    pub human_nouns: HashSet<String>,
    pub male_corefs: HashSet<String>,
    pub female_corefs: HashSet<String>,
    pub neutral_corefs: HashSet<String>,
    pub inanimate_corefs: HashSet<String>,
    pub plural_endings: HashSet<String>,
    pub plural_male_corefs: HashSet<String>,
    pub plural_female_corefs: HashSet<String>,
}

impl Lexicon {
    /// The built-in bundle for a language code ("en", "pt", "en-US", ...).
    ///
    /// Unknown languages get an empty lexicon: the pipeline still runs and
    /// labels everything `O`.
    pub fn for_language(lang: &str) -> Arc<Lexicon> {
        let primary = lang
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Arc::clone(&ENGLISH),
            "pt" => Arc::clone(&PORTUGUESE),
            _ => {
                tracing::debug!(lang, "no lexicon bundle for language, using an empty one");
                Arc::new(Lexicon::default())
            }
        }
    }

    /// Parse a RON bundle. Word forms are lowercased on load.
    pub fn from_ron_str(source: &str) -> Result<Lexicon, LexiconError> {
        let lexicon: Lexicon = ron::from_str(source)?;
        Ok(lexicon.lowercased())
    }

    /// Read and parse a RON bundle from disk.
    pub fn load(path: &Path) -> Result<Lexicon, LexiconError> {
        let source = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    pub fn words(&self, class: WordClass) -> &HashSet<String> {
        match class {
            WordClass::Joiners => &self.joiners,
            WordClass::SpanExtenders => &self.span_extenders,
            WordClass::MaleNouns => &self.male_nouns,
            WordClass::FemaleNouns => &self.female_nouns,
            WordClass::InanimateNouns => &self.inanimate_nouns,
            WordClass::HumanNouns => &self.human_nouns,
            WordClass::MaleCorefs => &self.male_corefs,
            WordClass::FemaleCorefs => &self.female_corefs,
            WordClass::NeutralCorefs => &self.neutral_corefs,
            WordClass::InanimateCorefs => &self.inanimate_corefs,
            WordClass::PluralEndings => &self.plural_endings,
            WordClass::PluralMaleCorefs => &self.plural_male_corefs,
            WordClass::PluralFemaleCorefs => &self.plural_female_corefs,
        }
    }

    /// Whether an already-normalized word form belongs to `class`.
    pub fn contains(&self, class: WordClass, form: &str) -> bool {
        self.words(class).contains(form)
    }

    pub fn is_joiner(&self, text: &str) -> bool {
        self.joiners.contains(&text.trim().to_lowercase())
    }

    /// Whether `text` ends with one of the plural endings.
    pub fn is_plural(&self, text: &str) -> bool {
        self.plural_endings
            .iter()
            .any(|ending| !ending.is_empty() && text.ends_with(ending.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.joiners,
            &self.span_extenders,
            &self.male_nouns,
            &self.female_nouns,
            &self.inanimate_nouns,
            &self.human_nouns,
            &self.male_corefs,
            &self.female_corefs,
            &self.neutral_corefs,
            &self.inanimate_corefs,
            &self.plural_endings,
            &self.plural_male_corefs,
            &self.plural_female_corefs,
        ]
        .iter()
        .all(|set| set.is_empty())
    }

    fn lowercased(self) -> Self {
        fn lower(set: HashSet<String>) -> HashSet<String> {
            set.into_iter().map(|w| w.trim().to_lowercase()).collect()
        }
        Lexicon {
            joiners: lower(self.joiners),
            span_extenders: lower(self.span_extenders),
            male_nouns: lower(self.male_nouns),
            female_nouns: lower(self.female_nouns),
            inanimate_nouns: lower(self.inanimate_nouns),
            human_nouns: lower(self.human_nouns),
            male_corefs: lower(self.male_corefs),
            female_corefs: lower(self.female_corefs),
            neutral_corefs: lower(self.neutral_corefs),
            inanimate_corefs: lower(self.inanimate_corefs),
            plural_endings: lower(self.plural_endings),
            plural_male_corefs: lower(self.plural_male_corefs),
            plural_female_corefs: lower(self.plural_female_corefs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn builtin_bundles_parse() {
        let en = Lexicon::from_ron_str(ENGLISH_RON).unwrap();
        assert!(en.contains(WordClass::FemaleNouns, "girl"));
        assert!(en.contains(WordClass::InanimateCorefs, "them"));
        assert!(en.contains(WordClass::NeutralCorefs, "them"));

        let pt = Lexicon::from_ron_str(PORTUGUESE_RON).unwrap();
        assert!(pt.contains(WordClass::Joiners, "e"));
        assert!(pt.contains(WordClass::PluralFemaleCorefs, "elas"));
        assert!(pt.inanimate_corefs.is_empty());
    }

    #[test]
    fn language_codes_select_bundles() {
        assert!(Lexicon::for_language("en").contains(WordClass::MaleCorefs, "he"));
        assert!(Lexicon::for_language("en-US").contains(WordClass::MaleCorefs, "he"));
        assert!(Lexicon::for_language("PT_br").contains(WordClass::MaleCorefs, "ele"));
        assert!(Lexicon::for_language("xx").is_empty());
    }

    #[test]
    fn builtin_bundles_are_shared() {
        let a = Lexicon::for_language("en");
        let b = Lexicon::for_language("en");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn load_lowercases_word_forms() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"(
                joiners: ["And"],
                male_corefs: ["He", " HIM "],
                plural_endings: ["s"],
            )"#
        )
        .unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert!(lexicon.is_joiner("AND"));
        assert!(lexicon.contains(WordClass::MaleCorefs, "him"));
        assert!(lexicon.is_plural("dogs"));
        assert!(lexicon.female_corefs.is_empty());
    }

    #[test]
    fn load_reports_missing_files_and_bad_syntax() {
        let missing = Lexicon::load(Path::new("/nonexistent/lexicon.ron"));
        assert!(matches!(missing, Err(LexiconError::Io { .. })));

        let bad = Lexicon::from_ron_str("(joiners: [\"and\"");
        assert!(matches!(bad, Err(LexiconError::Parse(_))));
    }
}
