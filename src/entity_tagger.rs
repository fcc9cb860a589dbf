//! First pass: speculative entity mentions.
//!
//! ```text
//! The     girl    said  she  would  take  the     trash   out
//! B-FEMALE I-FEMALE                        B-NEUTRAL I-NEUTRAL
//! ```
//!
//! Every noun gets a category here, even when nothing will ever refer back
//! to it; later passes throw away what the pronouns do not support.

use crate::label::{Category, Label};
use crate::lexicon::{Lexicon, WordClass};
use crate::line::{TagPass, TaggedLine};
use crate::pos::{noun_form, word_form, PosTag};

/// Tags noun phrases with a speculative [`Category`].
#[derive(Debug, Clone, Copy)]
pub struct EntityTagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> EntityTagger<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Category of a noun from the word lists alone.
    pub fn classify(&self, text: &str) -> Category {
        let form = noun_form(text);
        if self.lexicon.contains(WordClass::FemaleNouns, &form) {
            Category::Female
        } else if self.lexicon.contains(WordClass::MaleNouns, &form) {
            Category::Male
        } else if self.lexicon.contains(WordClass::InanimateNouns, &form) {
            Category::Inanimate
        } else if self.lexicon.is_plural(&text.to_lowercase()) {
            Category::Plural
        } else {
            Category::Neutral
        }
    }

    fn tag_at(&self, line: &mut TaggedLine, idx: usize) {
        let prev = idx.checked_sub(1);
        let prev_label = prev.map_or(Label::Outside, |p| line.label(p));
        let prev_is_noun = prev.map_or(false, |p| line.pos_matches(p, PosTag::is_noun));
        let prev_is_joiner = prev.map_or(false, |p| self.lexicon.is_joiner(line.text(p)));
        let next_is_noun = line.pos_matches(idx + 1, PosTag::is_noun);

        // "bottle of wine", "the king of Spain"
        if line.pos(idx) == Some(PosTag::Adp) && prev_label.entity().is_some() && next_is_noun {
            let label = prev_label.continued();
            line.set_label(idx, label);
            line.set_label(idx + 1, label);
            tracing::trace!(idx, %label, "extended mention over adposition");
            return;
        }

        // "cats and dogs" is one plural referent
        if self.lexicon.is_joiner(line.text(idx)) && prev_is_noun && next_is_noun {
            if let Some(p) = prev {
                line.set_label(p, Label::begin(Category::Plural));
                line.set_label(idx, Label::inside(Category::Plural));
                line.set_label(idx + 1, Label::inside(Category::Plural));
                tracing::trace!(idx, "joined nouns into plural mention");
            }
            return;
        }

        if line.pos_matches(idx, PosTag::is_noun) && !prev_is_joiner {
            self.tag_noun(line, idx);
        }
    }

    fn tag_noun(&self, line: &mut TaggedLine, idx: usize) {
        let pos = line.pos(idx);
        let prev = idx.checked_sub(1);

        // multi-word names: "George von Doomson"
        if let Some(p) = prev {
            if line.pos(p) == pos {
                let label = line.label(p).continued();
                line.set_label(idx, label);
                return;
            }
        }

        let first = match prev {
            Some(p) => {
                !(line.pos_matches(p, PosTag::is_helper)
                    || self
                        .lexicon
                        .contains(WordClass::SpanExtenders, &word_form(line.text(p))))
            }
            None => true,
        };

        let category = self.classify(line.text(idx));
        match prev {
            Some(p) if !first => {
                let wide = matches!(category, Category::Inanimate | Category::Neutral)
                    && p.checked_sub(1)
                        .map_or(false, |pp| line.pos_matches(pp, PosTag::is_helper));
                if wide {
                    line.set_label(p - 1, Label::begin(category));
                    line.set_label(p, Label::inside(category));
                } else {
                    line.set_label(p, Label::begin(category));
                }
                line.set_label(idx, Label::inside(category));
            }
            _ => line.set_label(idx, Label::begin(category)),
        }
        tracing::trace!(idx, %category, first, "tagged noun mention");

        if line.pos_matches(idx + 1, PosTag::is_span_tail)
            && line.pos_matches(idx + 2, PosTag::is_span_tail)
        {
            line.set_label(idx + 1, Label::inside(category));
            line.set_label(idx + 2, Label::inside(category));
        }
    }
}

impl TagPass for EntityTagger<'_> {
    fn run_pass(&self, line: &mut TaggedLine) {
        // the last token has no right context, so it never starts a span
        for idx in 0..line.len().saturating_sub(1) {
            self.tag_at(line, idx);
        }
    }
}
