//! Error handling for document validation.
//!
//! Every rule procedure and scanning routine returns [`VetResult`], so the
//! first failure unwinds the whole validation via `?`. The boolean entry
//! points in [`crate::parser`] are the single recovery boundary: they convert
//! any of these errors into an invalid verdict.

use crate::token::TokenKind;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type VetResult<T> = Result<T, SyntaxError>;

/// A validation failure.
///
/// The payloads exist for diagnostics (CLI debug logging, test assertions);
/// the boolean API discards them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A character that cannot begin any token.
    #[error("unexpected character {found:?}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },

    /// Input ended inside a string.
    #[error("unterminated string")]
    UnterminatedString,

    /// A backslash escape that is not part of the JSON escape set.
    #[error("invalid escape character {found:?}")]
    InvalidEscape {
        /// The character following the backslash.
        found: char,
    },

    /// A malformed `\uXXXX` escape, including unpaired surrogates.
    #[error("invalid unicode escape")]
    InvalidUnicodeEscape,

    /// An unescaped control character inside a string.
    #[error("unescaped control character {found:#04x} in string")]
    ControlCharacter {
        /// The raw byte value.
        found: u8,
    },

    /// A `t`/`f`/`n` run that is not exactly `true`, `false`, or `null`.
    #[error("malformed literal")]
    MalformedLiteral,

    /// A number that does not follow the JSON number grammar.
    #[error("malformed number")]
    MalformedNumber,

    /// The grammar required one token kind but another was found.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind at the cursor.
        found: TokenKind,
    },

    /// A position where a value must begin, but no value-starting kind found.
    #[error("expected a value, found {found}")]
    ExpectedValue {
        /// The kind at the cursor.
        found: TokenKind,
    },

    /// The document rule completed but tokens remain.
    #[error("trailing content after document: {found}")]
    TrailingContent {
        /// The first leftover token kind.
        found: TokenKind,
    },

    /// Input exceeds the configured size limit.
    #[error("input of {size} bytes exceeds limit of {limit}")]
    InputTooLarge {
        /// Actual input size in bytes.
        size: u64,
        /// The configured limit.
        limit: u64,
    },

    /// Object/array nesting exceeds the configured depth limit.
    #[error("nesting exceeds depth limit of {limit}")]
    NestingTooDeep {
        /// The configured limit.
        limit: u64,
    },
}
