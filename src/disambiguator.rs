//! Third pass: settle neutral mentions from the pronouns that follow them.
//!
//! A neutral noun followed only by "it" becomes inanimate; a human noun or a
//! name followed only by "he" becomes male, only by "she" female. Mentions
//! with no pronoun anywhere after them cannot be referred to and are dropped.

use crate::label::{Category, Label};
use crate::lexicon::{Lexicon, WordClass};
use crate::line::{CorefEvidence, TagPass, TaggedLine};
use crate::pos::{noun_form, PosTag};

/// Reclassifies neutral mentions toward the pronoun evidence after them.
#[derive(Debug, Clone, Copy)]
pub struct Disambiguator<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Disambiguator<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Mentions with no pronoun at a later index.
    fn unreachable_mentions(line: &TaggedLine) -> Vec<bool> {
        let last_coref = line.pronouns().last().map(|(idx, _)| *idx);
        let mut unreachable = vec![false; line.len()];
        for (idx, _) in line.mentions() {
            unreachable[idx] = last_coref.map_or(true, |last| last <= idx);
        }
        unreachable
    }

    fn is_human(&self, line: &TaggedLine, idx: usize) -> bool {
        line.pos(idx) == Some(PosTag::Propn)
            || self
                .lexicon
                .contains(WordClass::HumanNouns, &noun_form(line.text(idx)))
    }

    fn target(&self, line: &TaggedLine, idx: usize, evidence: &CorefEvidence) -> Option<Category> {
        let human = self.is_human(line, idx);
        if !evidence.has(Category::Neutral) && evidence.has(Category::Inanimate) && !human {
            Some(Category::Inanimate)
        } else if human && evidence.has(Category::Male) && !evidence.has(Category::Female) {
            Some(Category::Male)
        } else if human && evidence.has(Category::Female) && !evidence.has(Category::Male) {
            Some(Category::Female)
        } else {
            // both genders, or no usable evidence: the mismatch filter decides
            None
        }
    }

    fn reclassify(&self, line: &mut TaggedLine, idx: usize, target: Category) {
        let current = line.label(idx);
        let prev = idx.checked_sub(1);
        let prev_label = prev.map_or(Label::Outside, |p| line.label(p));

        let extends = prev.is_some()
            && (current.is_inside_entity() || prev_label == current || prev_label.is_entity(target));

        match prev {
            Some(p) if extends => {
                match target {
                    Category::Inanimate => {
                        let wide = p
                            .checked_sub(1)
                            .map_or(false, |pp| line.pos_matches(pp, PosTag::is_helper));
                        if wide {
                            line.set_label(p - 1, Label::begin(target));
                            line.set_label(p, Label::inside(target));
                        } else {
                            line.set_label(p, Label::begin(target));
                        }
                    }
                    Category::Male => {
                        if !prev_label.is_entity(target) {
                            line.set_label(p, Label::begin(target));
                        }
                    }
                    _ => line.set_label(p, Label::begin(target)),
                }
                line.set_label(idx, Label::inside(target));
            }
            _ => line.set_label(idx, Label::begin(target)),
        }
        tracing::trace!(idx, from = %current, to = %line.label(idx), "reclassified neutral mention");

        // a modifier in front keeps the mention at least two tokens long
        if let (Some(p), Some(pp)) = (prev, idx.checked_sub(2)) {
            if line.pos_matches(p, PosTag::is_span_helper)
                && line.pos_matches(pp, |pos| pos.is_helper() || pos.is_noun())
            {
                line.set_label(p, Label::inside(target));
                line.set_label(idx, Label::inside(target));
            }
        }
    }
}

impl TagPass for Disambiguator<'_> {
    fn run_pass(&self, line: &mut TaggedLine) {
        let unreachable = Self::unreachable_mentions(line);

        for idx in 0..line.len() {
            if unreachable[idx]
                || !line.label(idx).is_entity(Category::Neutral)
                || !line.pos_matches(idx, PosTag::is_noun)
            {
                continue;
            }
            let evidence = line.later_corefs(idx);
            if let Some(target) = self.target(line, idx, &evidence) {
                self.reclassify(line, idx, target);
            }
        }

        for (idx, unreachable) in unreachable.into_iter().enumerate() {
            if unreachable {
                tracing::trace!(idx, "dropping mention with no later pronoun");
                line.clear_entity(idx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_tagger::EntityTagger;
    use crate::pronoun_tagger::PronounTagger;
    use crate::label::Label::Outside;

    fn disambiguate(tokens: &[(&str, &str)]) -> Vec<Label> {
        let lexicon = Lexicon::for_language("en");
        TaggedLine::new(tokens.iter().copied())
            .run(&EntityTagger::new(&lexicon))
            .run(&PronounTagger::new(&lexicon))
            .run(&Disambiguator::new(&lexicon))
            .labels()
    }

    #[test]
    fn it_makes_a_neutral_noun_inanimate() {
        assert_eq!(
            disambiguate(&[
                ("Here", "ADV"),
                ("is", "AUX"),
                ("the", "DET"),
                ("book", "NOUN"),
                ("now", "ADV"),
                ("take", "VERB"),
                ("it", "PRON"),
            ]),
            vec![
                Outside,
                Outside,
                Label::begin(Category::Inanimate),
                Label::inside(Category::Inanimate),
                Outside,
                Outside,
                Label::Coref(Category::Inanimate),
            ]
        );
    }

    #[test]
    fn three_token_span_is_kept_inside() {
        assert_eq!(
            disambiguate(&[
                ("Here", "ADV"),
                ("is", "AUX"),
                ("the", "DET"),
                ("awesome", "ADJ"),
                ("machine", "NOUN"),
                ("now", "ADV"),
                ("take", "VERB"),
                ("it", "PRON"),
            ]),
            vec![
                Outside,
                Outside,
                Label::begin(Category::Inanimate),
                Label::inside(Category::Inanimate),
                Label::inside(Category::Inanimate),
                Outside,
                Outside,
                Label::Coref(Category::Inanimate),
            ]
        );
    }

    #[test]
    fn names_take_the_gender_of_later_pronouns() {
        let labels = disambiguate(&[
            ("Members", "NOUN"),
            ("voted", "VERB"),
            ("for", "ADP"),
            ("John", "PROPN"),
            ("because", "SCONJ"),
            ("they", "PRON"),
            ("see", "VERB"),
            ("him", "PRON"),
            ("as", "ADP"),
            ("a", "DET"),
            ("good", "ADJ"),
            ("leader", "NOUN"),
        ]);
        assert_eq!(labels[0], Label::begin(Category::Plural));
        assert_eq!(labels[3], Label::begin(Category::Male));
        assert_eq!(labels[5], Label::Coref(Category::Plural));
        assert_eq!(labels[7], Label::Coref(Category::Male));
    }

    #[test]
    fn human_nouns_are_never_made_inanimate() {
        let labels = disambiguate(&[
            ("My", "PRON"),
            ("friend", "NOUN"),
            ("lost", "VERB"),
            ("it", "PRON"),
        ]);
        assert_eq!(
            labels,
            vec![
                Label::begin(Category::Neutral),
                Label::inside(Category::Neutral),
                Outside,
                Label::Coref(Category::Inanimate),
            ]
        );
    }

    #[test]
    fn conflicting_genders_leave_the_mention_neutral() {
        let labels = disambiguate(&[
            ("Sam", "PROPN"),
            ("told", "VERB"),
            ("him", "PRON"),
            ("about", "ADP"),
            ("her", "PRON"),
        ]);
        assert_eq!(labels[0], Label::begin(Category::Neutral));
    }

    #[test]
    fn female_evidence_extends_over_the_determiner() {
        let labels = disambiguate(&[
            ("The", "DET"),
            ("person", "NOUN"),
            ("said", "VERB"),
            ("she", "PRON"),
            ("left", "VERB"),
        ]);
        assert_eq!(
            labels,
            vec![
                Label::begin(Category::Female),
                Label::inside(Category::Female),
                Outside,
                Label::Coref(Category::Female),
                Outside,
            ]
        );
    }

    #[test]
    fn male_evidence_claims_a_neutral_modifier() {
        let labels = disambiguate(&[
            ("My", "PRON"),
            ("friend", "NOUN"),
            ("said", "VERB"),
            ("he", "PRON"),
            ("left", "VERB"),
        ]);
        assert_eq!(
            labels,
            vec![
                Label::begin(Category::Male),
                Label::inside(Category::Male),
                Outside,
                Label::Coref(Category::Male),
                Outside,
            ]
        );
    }

    #[test]
    fn widening_over_a_pronoun_keeps_it_as_evidence() {
        let lexicon = Lexicon::for_language("en");
        let line = TaggedLine::new(vec![
            ("The", "DET"),
            ("girl", "NOUN"),
            ("took", "VERB"),
            ("her", "DET"),
            ("old", "ADJ"),
            ("book", "NOUN"),
            ("and", "CCONJ"),
            ("read", "VERB"),
            ("it", "PRON"),
        ])
        .run(&EntityTagger::new(&lexicon))
        .run(&PronounTagger::new(&lexicon))
        .run(&Disambiguator::new(&lexicon));

        assert_eq!(line.label(3), Label::begin(Category::Inanimate));
        assert_eq!(
            line.pronouns(),
            &[(3, Category::Female), (8, Category::Inanimate)][..]
        );
        assert!(line.later_corefs(1).has(Category::Female));
    }

    #[test]
    fn mentions_after_the_last_pronoun_are_dropped() {
        let labels = disambiguate(&[
            ("She", "PRON"),
            ("took", "VERB"),
            ("the", "DET"),
            ("trash", "NOUN"),
            ("out", "ADP"),
        ]);
        assert_eq!(
            labels,
            vec![Label::Coref(Category::Female), Outside, Outside, Outside, Outside]
        );
    }
}
