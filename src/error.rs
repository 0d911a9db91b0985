use thiserror::Error;

/// Error raised when the operation algebra is applied to incompatible
/// inputs.
///
/// All length arithmetic in this crate counts Unicode scalar values;
/// every variant below names the relationship that was violated so that
/// higher layers can diagnose protocol bugs. Failures never leave a
/// partially mutated value behind.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    /// An operation was applied to a string whose length differs from
    /// the operation's base length.
    #[error("base length must equal string length (operation base is {expected}, string is {actual})")]
    BaseLengthMismatch {
        /// The operation's base length.
        expected: usize,
        /// The character count of the string it was applied to.
        actual: usize,
    },

    /// A retain reached past the end of the string being operated on.
    #[error("cannot retain past the end of the string")]
    RetainPastEnd,

    /// The operation ended before consuming the whole string.
    #[error("operation does not cover the whole string")]
    IncompleteApplication,

    /// `compose` was given a second operation whose base length differs
    /// from the first operation's target length.
    #[error("compose requires consecutive operations (target length {target} != base length {base})")]
    ComposeBaseMismatch {
        /// Target length of the first operation.
        target: usize,
        /// Base length of the second operation.
        base: usize,
    },

    /// `transform` was given operations with different base lengths.
    #[error("transform requires operations with a common base (left {left} != right {right})")]
    TransformBaseMismatch {
        /// Base length of the left operation.
        left: usize,
        /// Base length of the right operation.
        right: usize,
    },

    /// The first op stream ran out before the second while combining.
    #[error("first operation is too short")]
    FirstTooShort,

    /// The second op stream ran out before the first while combining.
    #[error("first operation is too long")]
    FirstTooLong,

    /// A wire element could not be classified as retain, insert or
    /// delete. Carries the rendered form of the offending element.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
}
