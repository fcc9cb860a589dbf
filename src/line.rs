//! The token sequence every pass reads and rewrites.

use std::collections::BTreeSet;

use crate::label::{Category, Label, Position, TaggedToken};
use crate::pos::{PosTag, Token};

/// A pass over a [`TaggedLine`].
///
/// Passes run strictly in order and only communicate through the labels
/// they leave on the line.
pub trait TagPass {
    fn run_pass(&self, line: &mut TaggedLine);
}

/// A reference to a token range within a [`TaggedLine`].
///
/// Both indices are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanRef {
    /// Inclusive start token index
    pub start_idx: usize,
    /// Inclusive end token index
    pub end_idx: usize,
}

impl SpanRef {
    pub fn new(start_idx: usize, end_idx: usize) -> Self {
        Self { start_idx, end_idx }
    }

    pub fn single(idx: usize) -> Self {
        Self::new(idx, idx)
    }
}

/// Categories of the pronouns found after some position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorefEvidence {
    categories: BTreeSet<Category>,
}

impl CorefEvidence {
    pub fn has(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// Plural, including the gendered plural forms.
    pub fn has_plural(&self) -> bool {
        self.has(Category::Plural) || self.has(Category::PluralMale) || self.has(Category::PluralFemale)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }
}

/// One sentence of tagged tokens. Each token carries exactly one [`Label`].
///
/// Besides the labels, the line keeps the pronouns as they were first
/// recorded. Later passes may relabel a pronoun token while widening a
/// mention, but the recorded pronouns stay the evidence every mention is
/// judged against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedLine {
    tokens: Vec<TaggedToken>,
    pronouns: Vec<(usize, Category)>,
}

impl TaggedLine {
    /// Start a line with every token labeled `O`.
    pub fn new<T: Into<Token>>(tokens: impl IntoIterator<Item = T>) -> Self {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| TaggedToken::new(token.into()))
                .collect(),
            pronouns: Vec::new(),
        }
    }

    /// Run a pass, consuming and returning the line so passes chain.
    pub fn run(mut self, pass: &impl TagPass) -> Self {
        pass.run_pass(&mut self);
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<TaggedToken> {
        self.tokens
    }

    pub fn get(&self, idx: usize) -> Option<&TaggedToken> {
        self.tokens.get(idx)
    }

    pub fn text(&self, idx: usize) -> &str {
        self.tokens.get(idx).map_or("", |t| t.text.as_str())
    }

    /// POS of the token at `idx`, `None` past either end.
    pub fn pos(&self, idx: usize) -> Option<PosTag> {
        self.tokens.get(idx).map(|t| t.pos)
    }

    /// Whether the token at `idx` exists and its POS satisfies `pred`.
    pub fn pos_matches(&self, idx: usize, pred: impl Fn(&PosTag) -> bool) -> bool {
        self.pos(idx).map_or(false, |pos| pred(&pos))
    }

    /// Label at `idx`; positions past the end read as `O`.
    pub fn label(&self, idx: usize) -> Label {
        self.tokens.get(idx).map_or(Label::Outside, |t| t.label)
    }

    pub fn labels(&self) -> Vec<Label> {
        self.tokens.iter().map(|t| t.label).collect()
    }

    /// Overwrite the label at `idx`. Out-of-range writes are ignored.
    pub fn set_label(&mut self, idx: usize, label: Label) {
        if let Some(token) = self.tokens.get_mut(idx) {
            token.label = label;
        }
    }

    /// Remove an entity mention, leaving pronoun labels untouched.
    pub fn clear_entity(&mut self, idx: usize) {
        if self.label(idx).entity().is_some() {
            self.set_label(idx, Label::Outside);
        }
    }

    /// Entity-labeled positions and their categories, in index order.
    pub fn mentions(&self) -> impl Iterator<Item = (usize, Category)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter_map(|(idx, t)| t.label.entity().map(|c| (idx, c)))
    }

    /// Pronoun-labeled positions and their categories, in index order.
    pub fn corefs(&self) -> impl Iterator<Item = (usize, Category)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter_map(|(idx, t)| t.label.coref().map(|c| (idx, c)))
    }

    /// Record the current pronoun labels as the line's pronouns. Replaces
    /// anything recorded before.
    pub fn record_pronouns(&mut self) {
        self.pronouns = self.corefs().collect();
    }

    /// Pronouns as last recorded, in index order.
    pub fn pronouns(&self) -> &[(usize, Category)] {
        &self.pronouns
    }

    /// Recorded pronoun categories at indices strictly greater than `idx`.
    pub fn later_corefs(&self, idx: usize) -> CorefEvidence {
        CorefEvidence {
            categories: self
                .pronouns
                .iter()
                .filter(|(coref_idx, _)| *coref_idx > idx)
                .map(|(_, category)| *category)
                .collect(),
        }
    }

    /// Contiguous entity spans: a Begin followed by Inside tokens of the same
    /// category. An Inside that does not continue a span opens its own.
    pub fn mention_spans(&self) -> Vec<(SpanRef, Category)> {
        let mut spans: Vec<(SpanRef, Category)> = Vec::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if let Label::Entity(position, category) = token.label {
                let continues = position == Position::Inside
                    && spans
                        .last()
                        .map_or(false, |(span, c)| *c == category && span.end_idx + 1 == idx);
                if continues {
                    if let Some((span, _)) = spans.last_mut() {
                        span.end_idx = idx;
                    }
                } else {
                    spans.push((SpanRef::single(idx), category));
                }
            }
        }
        spans
    }

    /// `(text, POS, label)` triples.
    pub fn to_triples(&self) -> Vec<(String, String, String)> {
        self.tokens.iter().map(TaggedToken::to_triple).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(labels: &[Label]) -> TaggedLine {
        let mut line = TaggedLine::new(labels.iter().map(|_| ("w", PosTag::Noun)));
        for (idx, label) in labels.iter().enumerate() {
            line.set_label(idx, *label);
        }
        line.record_pronouns();
        line
    }

    #[test]
    fn later_corefs_are_strictly_after() {
        let line = line(&[
            Label::Coref(Category::Male),
            Label::begin(Category::Neutral),
            Label::Coref(Category::Female),
        ]);
        let evidence = line.later_corefs(1);
        assert!(evidence.has(Category::Female));
        assert!(!evidence.has(Category::Male));
        assert!(line.later_corefs(2).is_empty());
    }

    #[test]
    fn recorded_pronouns_outlive_relabeling() {
        let mut line = line(&[
            Label::begin(Category::Female),
            Label::Coref(Category::Female),
            Label::Coref(Category::Inanimate),
        ]);
        line.set_label(1, Label::begin(Category::Inanimate));

        assert_eq!(line.corefs().count(), 1);
        assert_eq!(
            line.pronouns(),
            &[(1, Category::Female), (2, Category::Inanimate)][..]
        );
        assert!(line.later_corefs(0).has(Category::Female));
    }

    #[test]
    fn clear_entity_keeps_pronouns() {
        let mut line = line(&[Label::begin(Category::Male), Label::Coref(Category::Male)]);
        line.clear_entity(0);
        line.clear_entity(1);
        assert_eq!(line.labels(), vec![Label::Outside, Label::Coref(Category::Male)]);
    }

    #[test]
    fn mention_spans_split_on_category_changes() {
        let line = line(&[
            Label::begin(Category::Plural),
            Label::inside(Category::Plural),
            Label::inside(Category::Neutral),
            Label::Outside,
            Label::begin(Category::Male),
        ]);
        assert_eq!(
            line.mention_spans(),
            vec![
                (SpanRef::new(0, 1), Category::Plural),
                (SpanRef::new(2, 2), Category::Neutral),
                (SpanRef::new(4, 4), Category::Male),
            ]
        );
    }

    #[test]
    fn labels_past_the_end_read_as_outside() {
        let line = line(&[Label::begin(Category::Male)]);
        assert_eq!(line.label(5), Label::Outside);
        assert_eq!(line.pos(5), None);
        assert_eq!(line.text(5), "");
    }
}
