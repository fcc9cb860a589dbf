//! Fifth pass: make the entity spans legal IOB.
//!
//! Earlier passes rewrite labels locally and can leave two Begins in a row,
//! an Inside whose span start was removed, or a span that ends on "the".

use crate::label::{Label, Position};
use crate::line::{TagPass, TaggedLine};
use crate::pos::PosTag;

/// Repairs entity spans; pronoun labels are never touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceNormalizer;

impl SequenceNormalizer {
    pub fn new() -> Self {
        Self
    }

    fn repair_chains(line: &mut TaggedLine) {
        let last = line.len().saturating_sub(1);
        for idx in 0..line.len() {
            let (position, category) = match line.label(idx) {
                Label::Entity(position, category) => (position, category),
                _ => continue,
            };
            let continues = idx > 0 && line.label(idx - 1).is_entity(category);
            match position {
                Position::Begin if continues => line.set_label(idx, Label::inside(category)),
                Position::Inside if !continues => {
                    if idx == last {
                        line.set_label(idx, Label::Outside);
                    } else {
                        line.set_label(idx, Label::begin(category));
                    }
                }
                _ => {}
            }
        }
    }

    /// Right to left, so trimming "the" also exposes an "of" before it.
    fn trim_dangling_helpers(line: &mut TaggedLine) {
        for idx in (0..line.len()).rev() {
            if line.label(idx).entity().is_some()
                && line.pos_matches(idx, PosTag::is_span_helper)
                && line.label(idx + 1).is_outside()
            {
                tracing::trace!(idx, "trimming dangling modifier");
                line.set_label(idx, Label::Outside);
            }
        }
    }
}

impl TagPass for SequenceNormalizer {
    fn run_pass(&self, line: &mut TaggedLine) {
        Self::repair_chains(line);
        Self::trim_dangling_helpers(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Category;
    use crate::label::Label::Outside;

    fn normalize(tokens: &[(&str, &str, Label)]) -> Vec<Label> {
        let mut line = TaggedLine::new(tokens.iter().map(|(text, pos, _)| (*text, *pos)));
        for (idx, (_, _, label)) in tokens.iter().enumerate() {
            line.set_label(idx, *label);
        }
        line.run(&SequenceNormalizer).labels()
    }

    #[test]
    fn duplicate_begin_joins_the_previous_span() {
        assert_eq!(
            normalize(&[
                ("king", "NOUN", Label::begin(Category::Neutral)),
                ("of", "ADP", Label::inside(Category::Neutral)),
                ("Spain", "PROPN", Label::begin(Category::Neutral)),
                ("spoke", "VERB", Outside),
            ]),
            vec![
                Label::begin(Category::Neutral),
                Label::inside(Category::Neutral),
                Label::inside(Category::Neutral),
                Outside,
            ]
        );
    }

    #[test]
    fn dangling_modifiers_are_trimmed() {
        assert_eq!(
            normalize(&[
                ("Leaders", "NOUN", Label::begin(Category::Plural)),
                ("around", "ADP", Label::inside(Category::Plural)),
                ("the", "DET", Label::inside(Category::Plural)),
                ("world", "NOUN", Outside),
            ]),
            vec![Label::begin(Category::Plural), Outside, Outside, Outside]
        );
    }

    #[test]
    fn orphan_inside_starts_its_own_span() {
        assert_eq!(
            normalize(&[
                ("a", "DET", Outside),
                ("puppy", "NOUN", Label::inside(Category::Inanimate)),
                ("sleeps", "VERB", Outside),
                ("now", "ADV", Label::inside(Category::Male)),
            ]),
            vec![Outside, Label::begin(Category::Inanimate), Outside, Outside]
        );
    }

    #[test]
    fn pronouns_are_left_alone() {
        assert_eq!(
            normalize(&[
                ("her", "DET", Label::Coref(Category::Female)),
                ("dog", "NOUN", Label::inside(Category::Inanimate)),
                ("barks", "VERB", Outside),
            ]),
            vec![
                Label::Coref(Category::Female),
                Label::begin(Category::Inanimate),
                Outside,
            ]
        );
    }
}
