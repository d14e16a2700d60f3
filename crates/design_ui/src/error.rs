//! Configuration errors raised by prop validation.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Violations of the design-approved component contracts.
///
/// Every violation this crate can detect falls under one of these variants:
/// a value outside an enumeration, a required prop that was never supplied,
/// or a prop key outside a component's public props set. They signal a
/// programming error in how a component was invoked, not a recoverable
/// runtime condition, so nothing in this crate catches or retries them.
pub enum ConfigError {
    /// A value outside the enumeration was supplied for an enumerated prop.
    #[error("invalid value '{value}' for prop '{prop}'")]
    IllegalValue {
        /// Name of the enumerated prop.
        prop: &'static str,
        /// The offending value.
        value: String,
    },
    /// A required prop was not supplied.
    #[error("prop '{prop}' is required")]
    MissingProp {
        /// Name of the missing prop.
        prop: &'static str,
    },
    /// A prop outside the component's public props set was supplied.
    #[error("illegal prop '{prop}'")]
    ForeignProp {
        /// Name of the offending prop.
        prop: String,
    },
}
