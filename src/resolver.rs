//! Final step: substitute pronouns with their antecedent text.
//!
//! ```text
//! My neighbours just adopted a puppy . They care for it like a baby
//! B  I          O    O       B I     O B-COREF ...
//!
//! => "My neighbours just adopted a puppy. My neighbours care for a puppy like a baby"
//! ```

use crate::label::{Category, Family, Label, Position};
use crate::line::{SpanRef, TaggedLine};

/// Surface repairs applied to the space-joined rewrite.
const COSMETIC_REPAIRS: &[(&str, &str)] = &[(" . ", ". "), (" , ", ", "), (" 's", "'s"), (" !", "!")];

/// A pronoun and the mention it was resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorefLink {
    /// Index of the pronoun token
    pub pronoun_idx: usize,
    pub category: Category,
    /// Span of the antecedent, `None` when no mention of the family precedes
    /// the pronoun
    pub antecedent: Option<SpanRef>,
    /// Text the pronoun is replaced with (its own text when unresolved)
    pub replacement: String,
}

impl CorefLink {
    pub fn is_resolved(&self) -> bool {
        self.antecedent.is_some()
    }
}

#[derive(Debug, Clone)]
struct RecentMention {
    text: String,
    span: SpanRef,
}

/// Links each pronoun to the most recent mention of its family.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorefResolver;

impl CorefResolver {
    pub fn new() -> Self {
        Self
    }

    /// Walk the line once, resolving every pronoun.
    pub fn links(&self, line: &TaggedLine) -> Vec<CorefLink> {
        let mut recent: [Option<RecentMention>; 5] = Default::default();
        let mut links = Vec::new();

        for (idx, token) in line.tokens().iter().enumerate() {
            match token.label {
                Label::Entity(Position::Begin, category) => {
                    recent[category.family().index()] = Some(RecentMention {
                        text: token.text.clone(),
                        span: SpanRef::single(idx),
                    });
                }
                Label::Entity(Position::Inside, category) => {
                    let mention = recent[category.family().index()].get_or_insert_with(|| {
                        RecentMention {
                            text: String::new(),
                            span: SpanRef::single(idx),
                        }
                    });
                    if !mention.text.is_empty() {
                        mention.text.push(' ');
                    }
                    mention.text.push_str(&token.text);
                    mention.span.end_idx = idx;
                }
                Label::Coref(category) => {
                    let link = match &recent[category.family().index()] {
                        Some(mention) if !mention.text.is_empty() => CorefLink {
                            pronoun_idx: idx,
                            category,
                            antecedent: Some(mention.span),
                            replacement: mention.text.clone(),
                        },
                        _ => CorefLink {
                            pronoun_idx: idx,
                            category,
                            antecedent: None,
                            replacement: token.text.clone(),
                        },
                    };
                    links.push(link);
                }
                Label::Outside => {}
            }
        }
        links
    }

    /// The sentence with every resolvable pronoun replaced by its antecedent.
    ///
    /// Spacing is rebuilt from tokens, so the result only approximates the
    /// original punctuation and spacing.
    pub fn rewrite(&self, line: &TaggedLine) -> String {
        let links = self.links(line);
        let mut words: Vec<&str> = line.tokens().iter().map(|t| t.text.as_str()).collect();
        for link in &links {
            words[link.pronoun_idx] = link.replacement.as_str();
        }

        let mut sentence = words.join(" ");
        for (from, to) in COSMETIC_REPAIRS {
            sentence = sentence.replace(from, to);
        }
        sentence
    }

    /// Most recent mention text per family after the whole line, for
    /// callers that want the accumulator state.
    pub fn latest_mentions(&self, line: &TaggedLine) -> Vec<(Family, String)> {
        let mut latest: Vec<(Family, String)> = Vec::new();
        for (span, category) in line.mention_spans() {
            let text = (span.start_idx..=span.end_idx)
                .map(|idx| line.text(idx))
                .collect::<Vec<_>>()
                .join(" ");
            let family = category.family();
            match latest.iter_mut().find(|(f, _)| *f == family) {
                Some(entry) => entry.1 = text,
                None => latest.push((family, text)),
            }
        }
        latest
    }
}
