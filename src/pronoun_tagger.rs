//! Second pass: coreference pronouns.

use crate::label::{Category, Label};
use crate::lexicon::{Lexicon, WordClass};
use crate::line::{TagPass, TaggedLine};
use crate::pos::word_form;

/// Labels pronouns with the category of entity they can refer to.
///
/// Word lists are consulted in a fixed order (inanimate, female, male,
/// neutral), so "them" in both the inanimate and the neutral list is
/// inanimate.
#[derive(Debug, Clone, Copy)]
pub struct PronounTagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> PronounTagger<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Category for a pronoun word form, if it is one.
    ///
    /// Neutral pronouns ("they") become plural once the line already holds
    /// a plural mention.
    pub fn classify(&self, form: &str, has_plural_mention: bool) -> Option<Category> {
        let lexicon = self.lexicon;
        if lexicon.contains(WordClass::InanimateCorefs, form) {
            Some(Category::Inanimate)
        } else if lexicon.contains(WordClass::FemaleCorefs, form) {
            Some(Category::Female)
        } else if lexicon.contains(WordClass::MaleCorefs, form) {
            Some(Category::Male)
        } else if lexicon.contains(WordClass::NeutralCorefs, form) {
            if has_plural_mention {
                Some(Category::Plural)
            } else {
                Some(Category::Neutral)
            }
        } else if lexicon.contains(WordClass::PluralMaleCorefs, form) {
            Some(Category::PluralMale)
        } else if lexicon.contains(WordClass::PluralFemaleCorefs, form) {
            Some(Category::PluralFemale)
        } else {
            None
        }
    }
}

impl TagPass for PronounTagger<'_> {
    fn run_pass(&self, line: &mut TaggedLine) {
        let has_plural_mention = line
            .tokens()
            .iter()
            .any(|t| t.label == Label::begin(Category::Plural));

        for idx in 0..line.len() {
            let form = word_form(line.text(idx));
            if let Some(category) = self.classify(&form, has_plural_mention) {
                if let Some(replaced) = line.label(idx).entity() {
                    tracing::trace!(idx, %replaced, "pronoun replaces entity label");
                }
                line.set_label(idx, Label::Coref(category));
            }
        }
        line.record_pronouns();
    }
}
