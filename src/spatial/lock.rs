//! Edge locks: a shape symbol paired with a male or female polarity
//!
//! Shapes are indices into a [`ShapeVocabulary`], so a puzzle can use any
//! finite set of symbols. Two locks interlock only when their shapes match
//! and their polarities differ.

use crate::io::configuration::STANDARD_SHAPES;
use crate::io::error::{Result, invalid_parameter};
use std::collections::HashSet;
use std::fmt;

/// A shape symbol, resolved against a [`ShapeVocabulary`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Shape(u16);

impl Shape {
    /// `heart` in the standard vocabulary
    pub const HEART: Self = Self(0);
    /// `spade` in the standard vocabulary
    pub const SPADE: Self = Self(1);
    /// `club` in the standard vocabulary
    pub const CLUB: Self = Self(2);
    /// `diamond` in the standard vocabulary
    pub const DIAMOND: Self = Self(3);

    /// Create a shape from its vocabulary index
    pub const fn from_index(index: u16) -> Self {
        Self(index)
    }

    /// Position of this shape in its vocabulary
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered, duplicate-free set of shape names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeVocabulary {
    names: Vec<String>,
}

impl Default for ShapeVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShapeVocabulary {
    /// The four suits used by the built-in puzzle: heart, spade, club, diamond
    pub fn standard() -> Self {
        Self {
            names: STANDARD_SHAPES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Build a vocabulary from shape names
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, contains a blank or duplicate
    /// name, or has more names than a [`Shape`] can index
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .collect();

        if names.is_empty() {
            return Err(invalid_parameter(
                "shapes",
                &"",
                &"at least one shape is required",
            ));
        }
        if names.len() > usize::from(u16::MAX) {
            return Err(invalid_parameter(
                "shapes",
                &names.len(),
                &"too many shapes",
            ));
        }

        let mut seen: HashSet<String> = HashSet::with_capacity(names.len());
        let duplicate_or_blank = names
            .iter()
            .find(|name| name.is_empty() || !seen.insert((*name).clone()));
        if let Some(bad) = duplicate_or_blank {
            let reason = if bad.is_empty() {
                "shape names must not be blank"
            } else {
                "shape names must be unique"
            };
            return Err(invalid_parameter("shapes", &names.join(","), &reason));
        }

        Ok(Self { names })
    }

    /// Resolve a shape token, ignoring surrounding whitespace
    pub fn parse(&self, token: &str) -> Option<Shape> {
        let token = token.trim();
        self.names
            .iter()
            .position(|name| name == token)
            .and_then(|index| u16::try_from(index).ok())
            .map(Shape)
    }

    /// Name of a shape, if it belongs to this vocabulary
    pub fn name(&self, shape: Shape) -> Option<&str> {
        self.names.get(shape.index()).map(String::as_str)
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the vocabulary has no shapes (never true for a constructed one)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All shapes in vocabulary order
    pub fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        (0..self.names.len()).filter_map(|i| u16::try_from(i).ok().map(Shape))
    }
}

/// Male or female side of an interlock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Protruding lock
    Male,
    /// Receiving lock
    Female,
}

impl Polarity {
    /// The complementary polarity
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Single-letter tag used in rendered output
    pub const fn tag(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// One tile edge: a shape and a polarity, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lock {
    shape: Shape,
    polarity: Polarity,
}

impl Lock {
    /// Create a lock
    pub const fn new(shape: Shape, polarity: Polarity) -> Self {
        Self { shape, polarity }
    }

    /// Create a male lock
    pub const fn male(shape: Shape) -> Self {
        Self::new(shape, Polarity::Male)
    }

    /// Create a female lock
    pub const fn female(shape: Shape) -> Self {
        Self::new(shape, Polarity::Female)
    }

    /// Shape of this lock
    pub const fn shape(self) -> Shape {
        self.shape
    }

    /// Polarity of this lock
    pub const fn polarity(self) -> Polarity {
        self.polarity
    }

    /// Whether this lock interlocks with another
    pub const fn is_compatible_with(self, other: Self) -> bool {
        compatible(self, other)
    }
}

/// Two locks interlock iff their polarities differ and their shapes match
pub const fn compatible(a: Lock, b: Lock) -> bool {
    let opposed = matches!(
        (a.polarity, b.polarity),
        (Polarity::Male, Polarity::Female) | (Polarity::Female, Polarity::Male)
    );
    opposed && a.shape.0 == b.shape.0
}
