//! Assertions checked against the browser.

use std::fmt;

use crate::{identifier::Identifier, value::Value};

/// The comparison made by an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `exists`
    Exists,
    /// `not-exists`
    NotExists,
    /// `is`
    Is,
    /// `is-not`
    IsNot,
    /// `includes`
    Includes,
    /// `excludes`
    Excludes,
    /// `matches`
    Matches,
}

impl Comparison {
    /// All comparisons, in the order they are documented.
    pub const ALL: [Self; 7] = [
        Self::Exists,
        Self::NotExists,
        Self::Is,
        Self::IsNot,
        Self::Includes,
        Self::Excludes,
        Self::Matches,
    ];

    /// Returns the keyword for this comparison.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::NotExists => "not-exists",
            Self::Is => "is",
            Self::IsNot => "is-not",
            Self::Includes => "includes",
            Self::Excludes => "excludes",
            Self::Matches => "matches",
        }
    }

    /// Returns the comparison introduced by the given keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|comparison| comparison.keyword() == keyword)
    }

    /// Returns whether this comparison needs an expected value.
    #[must_use]
    pub const fn requires_value(self) -> bool {
        !matches!(self, Self::Exists | Self::NotExists)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A single statement in the `assertions` list of a step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assertion {
    source: String,
    identifier: Identifier,
    comparison: Comparison,
    value: Option<Value>,
}

impl Assertion {
    /// Creates a new assertion.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        identifier: Identifier,
        comparison: Comparison,
        value: Option<Value>,
    ) -> Self {
        Self {
            source: source.into(),
            identifier,
            comparison,
            value,
        }
    }

    /// Returns the statement this assertion was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the subject of the assertion.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Returns the comparison made.
    #[must_use]
    pub const fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Returns the expected value, if the comparison has one.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Returns a copy of this assertion with a different subject.
    #[must_use]
    pub fn with_identifier(self, identifier: Identifier) -> Self {
        Self { identifier, ..self }
    }

    /// Returns a copy of this assertion with a different expected value.
    #[must_use]
    pub fn with_value(self, value: Value) -> Self {
        Self {
            value: Some(value),
            ..self
        }
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.identifier, self.comparison)?;

        match &self.value {
            Some(value) => write!(f, " {value}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        for comparison in Comparison::ALL {
            assert_eq!(Comparison::from_keyword(comparison.keyword()), Some(comparison));
        }

        assert_eq!(Comparison::from_keyword("equals"), None);
    }

    #[test]
    fn existence_checks_take_no_value() {
        assert!(!Comparison::Exists.requires_value());
        assert!(!Comparison::NotExists.requires_value());
        assert!(Comparison::Matches.requires_value());
    }
}
