//! Ordered placeholder substitution
//!
//! Templates are plain text with `<%= name %>` tokens. Rendering is a fixed
//! list of rules applied left to right, each rule seeing the output of the
//! previous one. Nothing in a template is ever evaluated.

use std::borrow::Cow;

/// Extension point for plugin code, cleared when unused
pub const CODE_FOR_PLUGIN: &str = "<%= codeForPlugin %>";
/// Route tree body
pub const ROUTE_COMPONENTS: &str = "<%= routeComponents %>";
/// Library name, replaced everywhere
pub const LIBRARY_NAME: &str = "<%= libraryName %>";

/// How many occurrences of a token a rule replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionScope {
    First,
    All,
}

/// A single substitution rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution<'a> {
    pub token: &'static str,
    pub value: Cow<'a, str>,
    pub scope: SubstitutionScope,
}

impl<'a> Substitution<'a> {
    pub fn first(token: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            token,
            value: value.into(),
            scope: SubstitutionScope::First,
        }
    }

    pub fn all(token: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            token,
            value: value.into(),
            scope: SubstitutionScope::All,
        }
    }

    fn apply(&self, text: &str) -> String {
        match self.scope {
            SubstitutionScope::First => text.replacen(self.token, &self.value, 1),
            SubstitutionScope::All => text.replace(self.token, &self.value),
        }
    }
}

/// Apply `rules` in order over `template`
pub fn apply_substitutions(template: &str, rules: &[Substitution<'_>]) -> String {
    rules
        .iter()
        .fold(template.to_string(), |text, rule| rule.apply(&text))
}
