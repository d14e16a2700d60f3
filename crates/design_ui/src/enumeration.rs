//! Enumeration tables and allow-list checks behind the component contracts.
//!
//! An [`Enumeration`] declares the legal canonical tokens for one enumerated
//! prop; a [`PropAllowList`] declares the prop names one component family
//! accepts from callers. Both are `const`-constructed, live for the process
//! lifetime, and are never mutated, so no synchronization is needed.

use leptos::logging;

use crate::error::ConfigError;
use crate::props::Props;

#[derive(Debug, Clone, Copy)]
/// Immutable mapping from symbolic key to canonical token.
///
/// Canonical tokens double as CSS class names at the style boundary, so
/// renaming a token is a breaking change. Tokens within one table are
/// unique; the tests cover that invariant for every table in this crate.
pub struct Enumeration {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}

impl Enumeration {
    /// Declares a table.
    pub const fn new(
        name: &'static str,
        entries: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { name, entries }
    }

    /// Table name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Symbolic keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Canonical tokens in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }

    /// Canonical token for a symbolic key.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    /// Whether `value` is a canonical member of the table.
    pub fn is_member(&self, value: &str) -> bool {
        self.values().any(|member| member == value)
    }

    /// Fails when `value` is not a canonical member.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IllegalValue`] naming the prop and the
    /// offending value.
    pub fn assert_member(&self, prop: &'static str, value: &str) -> Result<(), ConfigError> {
        if self.is_member(value) {
            Ok(())
        } else {
            Err(ConfigError::IllegalValue {
                prop,
                value: value.to_string(),
            })
        }
    }

    /// Optional-field form of [`Enumeration::assert_member`]; `None` passes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IllegalValue`] when a value is present and is
    /// not a member.
    pub fn assert_member_opt(
        &self,
        prop: &'static str,
        value: Option<&str>,
    ) -> Result<(), ConfigError> {
        match value {
            Some(value) => self.assert_member(prop, value),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
/// The prop names one component family accepts from callers.
///
/// Private configuration names (`size`, `style`, `subtype`, `typeface`,
/// `weight`) never appear in an allow list, which is what keeps fixed
/// variant configuration out of callers' reach.
pub struct PropAllowList {
    name: &'static str,
    keys: &'static [&'static str],
}

impl PropAllowList {
    /// Declares an allow list.
    pub const fn new(name: &'static str, keys: &'static [&'static str]) -> Self {
        Self { name, keys }
    }

    /// List name used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Allowed prop names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.keys.iter().copied()
    }

    /// Whether `key` is an allowed prop name.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|allowed| *allowed == key)
    }

    /// Fails on the first bag key outside the allow list, in bag order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ForeignProp`] naming the first offending key.
    pub fn assert_no_foreign_keys(&self, props: &Props) -> Result<(), ConfigError> {
        match props.keys().find(|key| !self.contains(key)) {
            Some(key) => Err(ConfigError::ForeignProp {
                prop: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Lax form of [`PropAllowList::assert_no_foreign_keys`]: logs a warning
    /// for the first offending key instead of failing. Only the radio family
    /// uses this, to tolerate pass-through form-library props.
    pub fn warn_foreign_keys(&self, props: &Props) {
        if let Some(key) = props.keys().find(|key| !self.contains(key)) {
            logging::warn!("unexpected prop '{key}' (not in {})", self.name);
        }
    }

    /// Fails when a required pass-through attribute is absent from the bag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingProp`] naming the attribute.
    pub fn assert_contains(&self, props: &Props, key: &'static str) -> Result<(), ConfigError> {
        if props.contains_key(key) {
            Ok(())
        } else {
            Err(ConfigError::MissingProp { prop: key })
        }
    }
}
