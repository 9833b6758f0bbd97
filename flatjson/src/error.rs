//! Parse error taxonomy.

use crate::config::JsonSize;
use core::fmt;

/// Kind of parse failure.
///
/// Exactly one is reported per failed parse, together with the byte index
/// of the offending input (see [`ParseError`]).
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]` to allow adding new variants
/// in future versions without breaking existing match expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The descriptor array is exhausted.
    NotEnoughMemory,
    /// The input exceeds the configured maximum size.
    JsonTooBig,
    /// Empty input, or the root value is not an object or an array.
    NotAJsonString,
    /// The input ends while a structural context is still open.
    UnexpectedEndOfJsonString,
    /// A structural character inappropriate for the current state.
    UnexpectedChar,
    /// Trailing comma before `}` in an object.
    ExpectedMemberName,
    /// Missing `:` between a member name and its value.
    MissingValueSeparator,
    /// Malformed literal or number.
    InvalidValue,
    /// Unknown escape letter in a string.
    InvalidEscapedChar,
    /// A string is not terminated by a closing quote.
    MissingEndOfString,
    /// Container depth would exceed the maximum nesting level.
    MaxNestingLevel,
    /// Non-whitespace content after the completed root value.
    TrailingChars,
}

impl ParseErrorKind {
    /// Stable snake_case name of the error kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotEnoughMemory => "not_enough_memory",
            Self::JsonTooBig => "json_too_big",
            Self::NotAJsonString => "not_a_json_string",
            Self::UnexpectedEndOfJsonString => "unexpected_end_of_json_string",
            Self::UnexpectedChar => "unexpected_char",
            Self::ExpectedMemberName => "expected_member_name",
            Self::MissingValueSeparator => "missing_value_separator",
            Self::InvalidValue => "invalid_value",
            Self::InvalidEscapedChar => "invalid_escaped_char",
            Self::MissingEndOfString => "missing_end_of_string",
            Self::MaxNestingLevel => "max_nesting_level",
            Self::TrailingChars => "trailing_chars",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse failure, pinpointing the offending byte of the input.
///
/// # Example
///
/// ```
/// use flatjson::{parse, JsonDescriptor, ParseErrorKind};
///
/// let mut descriptors = [JsonDescriptor::default(); 4];
/// let err = parse(br#"{ "x": Nul }"#, &mut descriptors).unwrap_err();
/// assert_eq!(err.kind, ParseErrorKind::InvalidValue);
/// assert_eq!(err.index, 7); // the `N`
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParseError {
    /// Byte index of the fault in the input.
    pub index: JsonSize,
    /// What went wrong.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn at(index: usize, kind: ParseErrorKind) -> Self {
        Self {
            index: index as JsonSize,
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.index)
    }
}

impl core::error::Error for ParseError {}
