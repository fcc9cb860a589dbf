use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::line::{SpanRef, TaggedLine};
use crate::resolver::CorefResolver;

/// Convert a zero-based index to a base-26 label: A, B, ..., Z, AA, AB, ...
fn index_to_base26_label(mut n: usize) -> String {
    let mut result = String::new();
    loop {
        let remainder = n % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

struct IncludedSpan {
    span: SpanRef,
    value: String,
    antecedent: Option<SpanRef>,
    show_links: bool,
}

/// Renders a [`TaggedLine`] with its mentions and pronouns drawn under the
/// tokens.
///
/// ```text
/// The  girl  said  she  would  take  the  trash  out
/// ╰───────╯[A] ENTITY-FEMALE
///                  ╰─╯COREF-FEMALE
///                    └─antecedent─>[A]
/// ```
pub struct TaggedLineDisplay<'a> {
    line: &'a TaggedLine,
    include_spans: Vec<IncludedSpan>,
}

impl<'a> std::fmt::Display for TaggedLineDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in self.line.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.text);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        let span_labels = self.build_span_labels();

        for included in self.include_spans.iter() {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[included.span.start_idx];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[included.span.end_idx];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            if let Some(label) = span_labels.get(&included.span) {
                write!(f, "{} ", label)?;
            }

            f.write_str(&included.value)?;

            if let (true, Some(target)) = (included.show_links, included.antecedent) {
                f.write_char('\n')?;
                for _ in 0..start_char_idx + 2 {
                    f.write_char(' ')?;
                }
                let target_str = match span_labels.get(&target) {
                    Some(label) => label.clone(),
                    None => format!("[{}..{}]", target.start_idx, target.end_idx),
                };
                write!(f, "└─antecedent─>{}", target_str)?;
            }
        }

        Ok(())
    }
}

impl<'a> TaggedLineDisplay<'a> {
    pub fn new(line: &'a TaggedLine) -> Self {
        TaggedLineDisplay {
            line,
            include_spans: Vec::new(),
        }
    }

    /// Labels for included spans that some rendered arrow points at.
    fn build_span_labels(&self) -> HashMap<SpanRef, String> {
        let included: HashSet<SpanRef> = self.include_spans.iter().map(|s| s.span).collect();

        let mut targets: Vec<SpanRef> = self
            .include_spans
            .iter()
            .filter(|s| s.show_links)
            .filter_map(|s| s.antecedent)
            .filter(|target| included.contains(target))
            .collect();
        targets.sort();
        targets.dedup();

        targets
            .into_iter()
            .enumerate()
            .map(|(i, span)| (span, format!("[{}]", index_to_base26_label(i))))
            .collect()
    }

    /// One `ENTITY-<CATEGORY>` row per entity span.
    pub fn include_mentions(&mut self) {
        for (span, category) in self.line.mention_spans() {
            self.include_spans.push(IncludedSpan {
                span,
                value: format!("ENTITY-{}", category),
                antecedent: None,
                show_links: false,
            });
        }
    }

    /// One `COREF-<CATEGORY>` row per pronoun.
    pub fn include_corefs(&mut self) {
        for (idx, category) in self.line.corefs() {
            self.include_spans.push(IncludedSpan {
                span: SpanRef::single(idx),
                value: format!("COREF-{}", category),
                antecedent: None,
                show_links: false,
            });
        }
    }

    /// Pronoun rows with an arrow to the mention each one resolves to.
    pub fn include_links(&mut self) {
        for link in CorefResolver.links(self.line) {
            self.include_spans.push(IncludedSpan {
                span: SpanRef::single(link.pronoun_idx),
                value: format!("COREF-{}", link.category),
                antecedent: link.antecedent,
                show_links: true,
            });
        }
    }

    pub fn with_mentions(mut self) -> Self {
        self.include_mentions();
        self
    }

    pub fn with_corefs(mut self) -> Self {
        self.include_corefs();
        self
    }

    pub fn with_links(mut self) -> Self {
        self.include_links();
        self
    }
}
