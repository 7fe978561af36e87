//! Token model shared by the lexer and the parser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    True,
    False,
    Null,
    String,
    Number,
}

impl TokenKind {
    pub const ALL: [TokenKind; 11] = [
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Null,
        TokenKind::String,
        TokenKind::Number,
    ];

    /// Upper-case name used in diagnostics and token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
        }
    }

    /// Kind of a single punctuation character, if it is one.
    pub fn punctuation(c: char) -> Option<TokenKind> {
        match c {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ':' => Some(TokenKind::Colon),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Kind of a keyword literal, if `word` is one.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        match word {
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "null" => Some(TokenKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind '{0}'")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_owned()))
    }
}

/// A token: its kind and the raw lexeme it was scanned from.
///
/// STRING tokens hold the contents between the quotes, without escape
/// processing. NUMBER tokens hold the lexeme exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// A punctuation or keyword token whose text is implied by its kind.
    pub fn bare(kind: TokenKind) -> Self {
        let text = match kind {
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::String | TokenKind::Number => "",
        };
        Token::new(kind, text)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Token::new(TokenKind::String, text)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Number, text)
    }
}

/// Renders the token dump line format, `<KIND: text>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}: {}>", self.kind, self.text)
    }
}
