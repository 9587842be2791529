//! Error taxonomy for the calculator service
//!
//! `DomainError` covers mathematical precondition failures inside the
//! operation library, `CallError` wraps everything that can go wrong while
//! resolving and invoking a single tool call.

use thiserror::Error;

/// A validation failure specific to an operation's mathematical
/// preconditions, checked before the underlying numeric primitive runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(String),
    #[error("parameter '{0}' must be a number")]
    ExpectedNumber(String),
    #[error("parameter '{0}' must be an integer")]
    ExpectedInteger(String),
    #[error("parameter '{0}' must be a boolean")]
    ExpectedBoolean(String),
    #[error("parameter '{0}' must be an array of numbers")]
    ExpectedNumberArray(String),
    #[error("parameter '{0}' must be a string")]
    ExpectedString(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Modulo by zero")]
    ModuloByZero,
    #[error("Cannot square root a negative number")]
    NegativeSqrt,
    #[error("Cannot take 0th root")]
    ZerothRoot,
    #[error("Logarithm of non-positive number is not defined")]
    NonPositiveLog,
    #[error("Invalid logarithm parameters")]
    InvalidLogBase,
    #[error("{0} domain error (-1 <= x <= 1)")]
    InverseTrigDomain(&'static str),
    #[error("acosh domain error (x >= 1)")]
    AcoshDomain,
    #[error("atanh domain error (-1 < x < 1)")]
    AtanhDomain,
    #[error("Factorial of a negative number is not defined")]
    NegativeFactorial,
    #[error("Invalid permutation parameters")]
    InvalidPermutation,
    #[error("Invalid combination parameters")]
    InvalidCombination,
    #[error("{0} requires at least {1} numbers")]
    NotEnoughSamples(&'static str, usize),
    #[error("No unique mode found")]
    NoUniqueMode,
    #[error("Result is too large to represent")]
    Overflow,
}

/// Failure to complete a tool invocation, reported to callers as a tool
/// execution error. The process keeps serving other requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallError {
    #[error("Tool name is required")]
    MissingToolName,
    #[error("Tool '{0}' not found")]
    UnknownTool(String),
    #[error("{0}")]
    Invalid(DomainError),
}

impl From<DomainError> for CallError {
    fn from(err: DomainError) -> Self {
        Self::Invalid(err)
    }
}

/// Catalog construction failure. Registration happens once at startup and
/// aborts the process on conflict.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("operation '{0}' is already registered")]
    DuplicateName(String),
}
