//! Fourth pass: drop mentions no later pronoun agrees with.

use crate::label::Category;
use crate::line::{CorefEvidence, TagPass, TaggedLine};

/// Removes gendered and plural mentions without a matching later pronoun,
/// and neutral mentions when only other categories of pronoun follow.
#[derive(Debug, Clone, Copy, Default)]
pub struct MismatchFilter;

impl MismatchFilter {
    pub fn new() -> Self {
        Self
    }

    /// Whether a mention of `category` has nothing to agree with in `evidence`.
    pub fn is_mismatched(category: Category, evidence: &CorefEvidence) -> bool {
        match category {
            Category::Plural => !evidence.has_plural(),
            Category::Male => !evidence.has(Category::Male),
            Category::Female => !evidence.has(Category::Female),
            Category::Neutral => {
                !evidence.has(Category::Neutral)
                    && (evidence.has(Category::Inanimate)
                        || evidence.has(Category::Male)
                        || evidence.has(Category::Female)
                        || evidence.has_plural())
            }
            Category::Inanimate | Category::PluralMale | Category::PluralFemale => false,
        }
    }
}

impl TagPass for MismatchFilter {
    fn run_pass(&self, line: &mut TaggedLine) {
        let mismatched: Vec<usize> = line
            .mentions()
            .filter(|(idx, category)| Self::is_mismatched(*category, &line.later_corefs(*idx)))
            .map(|(idx, _)| idx)
            .collect();

        for idx in mismatched {
            tracing::trace!(idx, "dropping mention without an agreeing pronoun");
            line.clear_entity(idx);
        }
    }
}
