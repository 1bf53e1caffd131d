//! Registered step definitions and resolution with argumented fallback.

use std::collections::HashMap;

use crate::catalog::StepKind;
use crate::naming::to_identifier;

use super::error::RegistrationError;
use super::pattern::{StepMatch, StepPattern};

/// One registered step definition.
#[derive(Debug, Clone)]
pub struct StepDef {
    pattern: StepPattern,
    kind: StepKind,
    handler: String,
}

impl StepDef {
    /// The pattern the definition was registered under.
    #[must_use]
    pub const fn pattern(&self) -> &StepPattern {
        &self.pattern
    }

    /// The step type the definition was registered for.
    ///
    /// Resolution deliberately ignores this: the handler namespace is
    /// shared across step types, as in the host frameworks this tool
    /// mirrors.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Name of the handler the definition points at.
    #[must_use]
    pub fn handler(&self) -> &str {
        &self.handler
    }
}

/// A single step registration request.
///
/// A registration either introduces a new handler, aliases an existing one,
/// or names neither — in which case the handler name is derived from the
/// pattern text. Naming both is a usage error rejected at registration
/// time.
#[derive(Debug, Clone)]
pub struct StepRegistration {
    /// Step type the registration applies to.
    pub kind: StepKind,
    /// Literal or regex pattern the step text must match.
    pub pattern: StepPattern,
    /// Handler name introduced by this registration.
    pub handler: Option<String>,
    /// Existing handler this registration aliases.
    pub alias_of: Option<String>,
}

impl StepRegistration {
    /// Starts a registration for a literal step text.
    pub fn literal(kind: StepKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            pattern: StepPattern::literal(text),
            handler: None,
            alias_of: None,
        }
    }

    /// Starts a registration for a regex pattern.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::InvalidPattern`] when the pattern does
    /// not compile.
    pub fn pattern(kind: StepKind, source: &str) -> Result<Self, RegistrationError> {
        Ok(Self {
            kind,
            pattern: StepPattern::pattern(source)?,
            handler: None,
            alias_of: None,
        })
    }

    /// Names the handler this registration introduces.
    #[must_use]
    pub fn with_handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// Marks this registration as an alias of an existing handler.
    #[must_use]
    pub fn aliasing(mut self, handler: impl Into<String>) -> Self {
        self.alias_of = Some(handler.into());
        self
    }
}

/// A definition resolved for a candidate step text.
#[derive(Debug, Clone)]
pub struct ResolvedStep<'a> {
    /// The definition that matched.
    pub definition: &'a StepDef,
    /// Argument values stripped from the step text by an argumented match;
    /// empty for exact matches.
    pub arguments: Vec<String>,
}

/// The handler namespace: every registered step definition, resolvable by
/// exact source text with a single-level argumented fallback.
#[derive(Debug, Clone, Default)]
pub struct StepIndex {
    defs: Vec<StepDef>,
    by_source: HashMap<String, usize>,
}

impl StepIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a step definition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::ConflictingBinding`] when the
    /// registration names both a new handler and an alias target. The error
    /// is raised here, synchronously, never deferred to resolution.
    pub fn register(&mut self, registration: StepRegistration) -> Result<(), RegistrationError> {
        let StepRegistration {
            kind,
            pattern,
            handler,
            alias_of,
        } = registration;
        let handler_name = match (handler, alias_of) {
            (Some(new_handler), Some(alias)) => {
                return Err(RegistrationError::ConflictingBinding {
                    step: pattern.source().to_owned(),
                    handler: new_handler,
                    alias,
                });
            }
            (Some(new_handler), None) => new_handler,
            (None, Some(alias)) => alias,
            (None, None) => to_identifier(pattern.source()),
        };
        let slot = self.defs.len();
        self.by_source.insert(pattern.source().to_owned(), slot);
        self.defs.push(StepDef {
            pattern,
            kind,
            handler: handler_name,
        });
        Ok(())
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Whether the index holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Exact lookup of `name` against registered source texts.
    #[must_use]
    pub fn find_exact(&self, name: &str) -> Option<&StepDef> {
        self.by_source.get(name).and_then(|slot| self.defs.get(*slot))
    }

    /// Argumented fallback: the first pattern definition matching the whole
    /// of `name`, with its captured arguments.
    #[must_use]
    pub fn find_argumented(&self, name: &str) -> Option<ResolvedStep<'_>> {
        self.defs
            .iter()
            .filter(|def| def.pattern.is_pattern())
            .find_map(|def| {
                def.pattern.matches(name).map(|StepMatch { arguments }| ResolvedStep {
                    definition: def,
                    arguments,
                })
            })
    }

    /// Resolves a step text: exact lookup first, then one argumented
    /// fallback. A miss means the step is still undefined; resolution never
    /// fails with an error.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<ResolvedStep<'_>> {
        self.find_exact(name)
            .map(|definition| ResolvedStep {
                definition,
                arguments: Vec::new(),
            })
            .or_else(|| self.find_argumented(name))
    }
}
