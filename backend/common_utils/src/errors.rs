//! Errors and error specific types shared across crates

/// Custom Result
/// A custom datatype that wraps the error variant <E> into a report, allowing
/// error_stack::Report<E> specific extendability
pub type CustomResult<T, E> = error_stack::Result<T, E>;

/// Parsing Errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsingError {
    /// Failed to parse an amount expressed in the lowest denomination
    #[error("Failed to parse amount in minor units")]
    MinorUnitParsingError,
    /// Failed to encode a form body
    #[error("Failed to encode form body")]
    FormEncodingFailure,
}
