//! Step definition patterns: literal text and argumented regex matching.

use regex::Regex;

use super::error::RegistrationError;

/// How a step definition matches candidate step text.
///
/// Literal definitions match by exact text. Pattern definitions match the
/// whole text against a regular expression and capture argument values, so
/// the diff engine can resolve argumented step occurrences back to one
/// definition.
#[derive(Debug, Clone)]
pub enum StepPattern {
    /// Matches a step by exact text.
    Literal(String),
    /// Matches a step against a compiled regular expression.
    Pattern(Regex),
}

impl StepPattern {
    /// Builds a literal pattern.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compiles a regex pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidPattern`] when `source` is not a
    /// valid regular expression.
    pub fn pattern(source: &str) -> Result<Self, RegistrationError> {
        Regex::new(source)
            .map(Self::Pattern)
            .map_err(|error| RegistrationError::InvalidPattern {
                pattern: source.to_owned(),
                message: error.to_string(),
            })
    }

    /// Source text the definition was registered under.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Pattern(regex) => regex.as_str(),
        }
    }

    /// Whether this is an argumented (regex) pattern.
    #[must_use]
    pub const fn is_pattern(&self) -> bool {
        matches!(self, Self::Pattern(_))
    }

    /// Matches `candidate` against the whole pattern.
    ///
    /// Pattern definitions yield the captured argument values; literal
    /// definitions yield an empty capture list. Partial regex matches are
    /// rejected: the pattern must cover the entire step text.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> Option<StepMatch> {
        match self {
            Self::Literal(text) => (text == candidate).then(StepMatch::default),
            Self::Pattern(regex) => {
                let captures = regex.captures(candidate)?;
                let whole = captures.get(0)?;
                if whole.as_str() != candidate {
                    return None;
                }
                let arguments = captures
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|group| group.as_str().to_owned())
                    .collect();
                Some(StepMatch { arguments })
            }
        }
    }
}

/// Result of matching candidate step text against a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepMatch {
    /// Captured argument values in capture-group order; empty for literal
    /// matches.
    pub arguments: Vec<String>,
}
