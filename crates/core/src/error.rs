use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::TokenKind;

// ──────────────────────────────────────────────
// Collected diagnostics
// ──────────────────────────────────────────────

/// What a collected diagnostic is about.
///
/// The first group are the semantic rules, each carrying a rule number
/// (see [`DiagnosticKind::rule`]). The rest are structural errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Number lexeme starts or ends with `.`.
    MalformedNumber,
    /// Object key missing or blank.
    EmptyKey,
    /// Number lexeme with a spurious leading zero or an explicit `+`.
    NumberPrefix,
    /// Object key is `true`, `false` or `null`.
    ReservedKey,
    /// Object key already seen in the same object.
    DuplicateKey,
    /// Array elements of different kinds.
    MixedArray,
    /// Array never closed. Reported under the mixed-array rule.
    UnclosedArray,
    /// String value is `true`, `false` or `null`.
    ReservedString,
    /// A token that cannot start a value.
    InvalidToken,
    /// Neither `,` nor `}` after an object member.
    MissingSeparator,
    /// A specific token was required and another one was found.
    UnexpectedToken,
    /// The token stream ended where a token was required.
    UnexpectedEnd,
    /// Tokens left over after the root value.
    TrailingToken,
    /// Objects and arrays nested past the parser's depth limit.
    NestingTooDeep,
}

impl DiagnosticKind {
    /// Semantic rule number, or `None` for structural errors.
    pub fn rule(self) -> Option<u8> {
        match self {
            DiagnosticKind::MalformedNumber => Some(1),
            DiagnosticKind::EmptyKey => Some(2),
            DiagnosticKind::NumberPrefix => Some(3),
            DiagnosticKind::ReservedKey => Some(4),
            DiagnosticKind::DuplicateKey => Some(5),
            // TODO: unclosed arrays share rule 6 with mixed arrays; give them
            // their own rule number once the report format can change.
            DiagnosticKind::MixedArray | DiagnosticKind::UnclosedArray => Some(6),
            DiagnosticKind::ReservedString => Some(7),
            DiagnosticKind::InvalidToken
            | DiagnosticKind::MissingSeparator
            | DiagnosticKind::UnexpectedToken
            | DiagnosticKind::UnexpectedEnd
            | DiagnosticKind::TrailingToken
            | DiagnosticKind::NestingTooDeep => None,
        }
    }

    /// Rule title used as the message of a semantic finding. Structural
    /// kinds build their own messages and have none.
    pub fn title(self) -> Option<&'static str> {
        let title = match self {
            DiagnosticKind::MalformedNumber | DiagnosticKind::NumberPrefix => "Invalid Numbers",
            DiagnosticKind::EmptyKey => "Empty Key",
            DiagnosticKind::ReservedKey => "Reserved Words as Dictionary Key",
            DiagnosticKind::DuplicateKey => "No Duplicate Keys in Dictionary",
            DiagnosticKind::MixedArray | DiagnosticKind::UnclosedArray => {
                "Consistent Types for List Elements"
            }
            DiagnosticKind::ReservedString => "Reserved Words as Strings",
            _ => return None,
        };
        Some(title)
    }
}

/// A collected error: what kind, the offending text, and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub text: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, text: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            kind,
            text: text.into(),
            message: message.into(),
        }
    }

    /// A semantic rule finding with the rule's title as message.
    pub fn rule(kind: DiagnosticKind, text: impl Into<String>) -> Self {
        Diagnostic::new(kind, text, kind.title().unwrap_or_default())
    }

    /// Serialize to JSON with every field present.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "kind":    self.kind,
            "message": self.message,
            "rule":    self.kind.rule(),
            "text":    self.text,
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind.rule() {
            Some(rule) => write!(f, "Error Type {} at {}: {}.", rule, self.text, self.message),
            None => write!(f, "Error: {}.", self.message),
        }
    }
}

// ──────────────────────────────────────────────
// Fatal faults
// ──────────────────────────────────────────────

/// An unrecoverable condition at a call site. The enclosing construct is
/// abandoned and the fault propagates to [`crate::parser::Parser::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFault {
    #[error("expected {expected} but found {found}")]
    Mismatch {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: String },
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

// ──────────────────────────────────────────────
// Lexical errors
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexErrorKind {
    UnterminatedString,
    InvalidKeyword,
    InvalidNumber,
    InvalidCharacter,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexErrorKind::UnterminatedString => "String is unterminated",
            LexErrorKind::InvalidKeyword => "Invalid keyword",
            LexErrorKind::InvalidNumber => "Invalid number",
            LexErrorKind::InvalidCharacter => "Invalid character",
        })
    }
}

/// A lexical malformation. The lexer records it and emits no token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: '{lexeme}' at position {position}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub lexeme: String,
    /// Character offset where the malformed lexeme starts.
    pub position: usize,
}
