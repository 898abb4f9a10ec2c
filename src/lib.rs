//! jsonvet - syntactic validator for JSON object documents.
//!
//! Checks whether a text is a well-formed JSON object, reporting a boolean
//! verdict. No value tree is ever built: tokens are produced, checked against
//! the grammar, and discarded.
//!
//! # Architecture
//!
//! Validation is a two-stage pipeline, consumed leaf-first:
//!
//! - [`lexer`] - single-pass tokenizer producing the full token sequence
//! - [`parser`] - recursive-descent, lookahead-1 grammar checker over it
//! - [`token`] - the closed token-kind set shared by both stages
//! - [`limits`] - size and nesting bounds for untrusted input
//! - [`error`] - failure taxonomy threaded through every stage
//!
//! The document rule is deliberately `object`, not `value`: bare arrays and
//! scalars at the top level are rejected.
//!
//! # Example
//!
//! ```
//! use jsonvet::validate;
//!
//! assert!(validate(r#"{"name": "demo", "tags": [1, 2.5e-1, null]}"#));
//! assert!(!validate(r#"{"dangling": 1,}"#));
//! assert!(!validate("[1, 2]")); // object documents only
//! ```

// Library code must avoid unwrap/expect/panic; failures propagate as
// SyntaxError. Tests are checked separately with `cargo test`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod error;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod token;

// Re-export commonly used types
pub use error::{SyntaxError, VetResult};
pub use lexer::Lexer;
pub use limits::Limits;
pub use parser::{check, check_with_limits, validate, validate_with_limits, Parser};
pub use token::{Token, TokenKind};
