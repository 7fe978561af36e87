//! strictjson-core: JSON lexer and parser with extra semantic rules.
//!
//! Raw text is lexed into [`Token`]s, which the [`Parser`] turns into a
//! [`Node`] tree while checking rules the JSON grammar does not require:
//! number formatting, key validity, and element-kind homogeneity in arrays.
//! Violations are collected as [`Diagnostic`]s rather than stopping the
//! parse.
//!
//! # Public API
//!
//! - [`parse_str()`] -- lex and parse raw text
//! - [`parse_tokens()`] -- parse a pre-built token sequence
//! - [`lex()`] / [`tokenize()`] / [`Lexer`] -- lexing on its own
//! - [`Parsed`] -- tree, diagnostics, and fault of one parse
//! - Tree types: [`Node`], [`Pair`], [`NodeKind`]

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;

// ── Convenience re-exports: key types ────────────────────────────────

pub use ast::{Node, NodeKind, Pair};
pub use error::{Diagnostic, DiagnosticKind, LexError, LexErrorKind, ParseFault};
pub use lexer::{Lexed, Lexer};
pub use parser::{Parsed, Parser, DEFAULT_MAX_DEPTH};
pub use token::{Token, TokenKind};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use lexer::{lex, tokenize};
pub use parser::{parse_str, parse_tokens};
