//! IOB labels for entity mentions and coreference pronouns.
//!
//! ```text
//! The     girl    said  she
//! B-ENTITY-FEMALE I-ENTITY-FEMALE  O  B-COREF-FEMALE
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::pos::{PosTag, Token};

/// Gender/number/animacy category shared by entities and pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Male,
    Female,
    Plural,
    PluralMale,
    PluralFemale,
    Neutral,
    Inanimate,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Male,
        Category::Female,
        Category::Plural,
        Category::PluralMale,
        Category::PluralFemale,
        Category::Neutral,
        Category::Inanimate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Male => "MALE",
            Category::Female => "FEMALE",
            Category::Plural => "PLURAL",
            Category::PluralMale => "PLURAL-MALE",
            Category::PluralFemale => "PLURAL-FEMALE",
            Category::Neutral => "NEUTRAL",
            Category::Inanimate => "INANIMATE",
        }
    }

    /// Resolver accumulator this category feeds.
    pub fn family(&self) -> Family {
        match self {
            Category::Male => Family::Male,
            Category::Female => Family::Female,
            Category::Plural | Category::PluralMale | Category::PluralFemale => Family::Plural,
            Category::Neutral => Family::Neutral,
            Category::Inanimate => Family::Inanimate,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Antecedent families tracked while substituting pronouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Female,
    Male,
    Neutral,
    Inanimate,
    Plural,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::Female,
        Family::Male,
        Family::Neutral,
        Family::Inanimate,
        Family::Plural,
    ];

    pub(crate) fn index(&self) -> usize {
        match self {
            Family::Female => 0,
            Family::Male => 1,
            Family::Neutral => 2,
            Family::Inanimate => 3,
            Family::Plural => 4,
        }
    }
}

/// Span position of an entity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Begin,
    Inside,
}

/// The single label carried by each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Outside,
    Entity(Position, Category),
    /// Pronouns are always single-token, so they only ever Begin.
    Coref(Category),
}

impl Label {
    pub fn begin(category: Category) -> Self {
        Label::Entity(Position::Begin, category)
    }

    pub fn inside(category: Category) -> Self {
        Label::Entity(Position::Inside, category)
    }

    pub fn is_outside(&self) -> bool {
        *self == Label::Outside
    }

    /// Category of an entity label, `None` for pronouns and `O`.
    pub fn entity(&self) -> Option<Category> {
        match self {
            Label::Entity(_, category) => Some(*category),
            _ => None,
        }
    }

    /// Category of a coreference label.
    pub fn coref(&self) -> Option<Category> {
        match self {
            Label::Coref(category) => Some(*category),
            _ => None,
        }
    }

    pub fn is_entity(&self, category: Category) -> bool {
        self.entity() == Some(category)
    }

    pub fn is_begin_entity(&self) -> bool {
        matches!(self, Label::Entity(Position::Begin, _))
    }

    pub fn is_inside_entity(&self) -> bool {
        matches!(self, Label::Entity(Position::Inside, _))
    }

    /// The label a token continuing this one's span would carry:
    /// Inside of the same entity category, `O` otherwise.
    pub fn continued(&self) -> Label {
        match self {
            Label::Entity(_, category) => Label::inside(*category),
            _ => Label::Outside,
        }
    }
}

impl Default for Label {
    fn default() -> Self {
        Label::Outside
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Outside => f.write_str("O"),
            Label::Entity(Position::Begin, category) => write!(f, "B-ENTITY-{}", category),
            Label::Entity(Position::Inside, category) => write!(f, "I-ENTITY-{}", category),
            Label::Coref(category) => write!(f, "B-COREF-{}", category),
        }
    }
}

/// A label string that is not part of the label alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown label: {0:?}")]
pub struct LabelParseError(pub String);

impl FromStr for Label {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "O" {
            return Ok(Label::Outside);
        }
        let err = || LabelParseError(s.to_string());
        let (position, rest) = if let Some(rest) = s.strip_prefix("B-") {
            (Position::Begin, rest)
        } else if let Some(rest) = s.strip_prefix("I-") {
            (Position::Inside, rest)
        } else {
            return Err(err());
        };
        let (is_coref, name) = if let Some(name) = rest.strip_prefix("ENTITY-") {
            (false, name)
        } else if let Some(name) = rest.strip_prefix("COREF-") {
            (true, name)
        } else {
            return Err(err());
        };
        let category = Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == name)
            .ok_or_else(err)?;
        match (is_coref, position) {
            (false, position) => Ok(Label::Entity(position, category)),
            (true, Position::Begin) => Ok(Label::Coref(category)),
            (true, Position::Inside) => Err(err()),
        }
    }
}

/// A token with its current label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PosTag,
    pub label: Label,
}

impl TaggedToken {
    pub fn new(token: Token) -> Self {
        Self {
            text: token.text,
            pos: token.pos,
            label: Label::Outside,
        }
    }

    pub fn token(&self) -> Token {
        Token::new(self.text.clone(), self.pos)
    }

    /// `(text, POS, label)` as plain strings.
    pub fn to_triple(&self) -> (String, String, String) {
        (
            self.text.clone(),
            self.pos.to_string(),
            self.label.to_string(),
        )
    }
}
