//! Recursive-descent parser over a token stream.
//!
//! Semantic rules run inline while the tree is built. Rule violations and
//! most structural problems are collected as diagnostics and parsing
//! continues at the nearest safe point. Only a missing required token or
//! an exhausted stream mid-construct is fatal, surfacing as `root: None`.

use crate::ast::Node;
use crate::error::{Diagnostic, DiagnosticKind, LexError, ParseFault};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

mod containers;
pub mod rules;

/// Deepest object/array nesting a parser accepts unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 100;

// ──────────────────────────────────────────────
// Parse result
// ──────────────────────────────────────────────

/// Everything one parse produced. The tree is only trustworthy when
/// `diagnostics` is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub root: Option<Node>,
    pub diagnostics: Vec<Diagnostic>,
    /// The fault that abandoned the parse, if any.
    pub fault: Option<ParseFault>,
    /// Lexical errors, when the parse ran over raw text.
    pub lex_errors: Vec<LexError>,
}

impl Parsed {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty() && self.root.is_some()
    }

    /// Number of diagnostics of the given kind.
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    pub fn into_result(self) -> Result<Node, Vec<Diagnostic>> {
        match self.root {
            Some(root) if self.diagnostics.is_empty() => Ok(root),
            _ => Err(self.diagnostics),
        }
    }
}

/// Parse a pre-built token sequence.
pub fn parse_tokens<T>(tokens: T) -> Parsed
where
    T: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse()
}

/// Lex and parse raw text, pulling tokens from the lexer on demand.
pub fn parse_str(src: &str) -> Parsed {
    let mut lexer = Lexer::new(src);
    let mut parsed = Parser::new(lexer.by_ref()).parse();
    parsed.lex_errors = lexer.into_errors();
    parsed
}

// ──────────────────────────────────────────────
// Parser
// ──────────────────────────────────────────────

pub struct Parser<I: Iterator<Item = Token>> {
    tokens: I,
    current: Option<Token>,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
    max_depth: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        let mut tokens = tokens.into_iter();
        let current = tokens.next();
        Parser {
            tokens,
            current,
            diagnostics: Vec::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Change the nesting limit. Going deeper abandons the parse.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse one root value. Consumes the parser; the diagnostics are
    /// handed back with the tree.
    pub fn parse(mut self) -> Parsed {
        log::debug!("parse: start");
        let (root, fault) = match self.value() {
            Ok(root) => {
                if let Some(kind) = self.peek_kind() {
                    self.push(Diagnostic::new(
                        DiagnosticKind::TrailingToken,
                        kind.name(),
                        format!("Unexpected token {}", kind),
                    ));
                }
                (root, None)
            }
            Err(fault) => {
                log::debug!("parse: abandoned: {}", fault);
                (None, Some(fault))
            }
        };
        log::debug!("parse: done, {} diagnostic(s)", self.diagnostics.len());
        Parsed {
            root,
            diagnostics: self.diagnostics,
            fault,
            lex_errors: Vec::new(),
        }
    }

    // -- Token cursor -------------------------------------------

    fn peek_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Move to the next token, returning the one left behind.
    fn advance(&mut self) -> Option<Token> {
        let next = self.tokens.next();
        std::mem::replace(&mut self.current, next)
    }

    /// Consume the current token and keep only its text.
    fn take_text(&mut self) -> String {
        self.advance().map(|t| t.text).unwrap_or_default()
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("diagnostic: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// Kind of the current token, which must exist.
    fn expect_current(&mut self, expected: &str) -> Result<TokenKind, ParseFault> {
        if let Some(kind) = self.peek_kind() {
            return Ok(kind);
        }
        self.push(Diagnostic::new(
            DiagnosticKind::UnexpectedEnd,
            "",
            format!("Unexpected end of input, expected {}", expected),
        ));
        Err(ParseFault::UnexpectedEnd {
            expected: expected.to_owned(),
        })
    }

    /// Consume a token of the given kind.
    fn eat(&mut self, expected: TokenKind) -> Result<(), ParseFault> {
        let found = self.expect_current(expected.name())?;
        if found == expected {
            self.advance();
            return Ok(());
        }
        self.push(Diagnostic::new(
            DiagnosticKind::UnexpectedToken,
            found.name(),
            format!("Expected {} but instead got {}", expected, found),
        ));
        Err(ParseFault::Mismatch { expected, found })
    }

    /// Step into an object or array, failing past the nesting limit.
    fn descend(&mut self) -> Result<(), ParseFault> {
        if self.depth >= self.max_depth {
            self.push(Diagnostic::new(
                DiagnosticKind::NestingTooDeep,
                "",
                format!("Maximum nesting depth of {} exceeded", self.max_depth),
            ));
            return Err(ParseFault::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    // -- Values -------------------------------------------------

    fn value(&mut self) -> Result<Option<Node>, ParseFault> {
        match self.expect_current("a value")? {
            TokenKind::String => {
                let text = self.take_text();
                match rules::string_finding(&text) {
                    Some(finding) => {
                        self.push(finding);
                        Ok(None)
                    }
                    None => Ok(Some(Node::String(text))),
                }
            }
            TokenKind::Number => {
                let text = self.take_text();
                for finding in rules::number_findings(&text) {
                    self.push(finding);
                }
                Ok(Some(Node::Number(text)))
            }
            TokenKind::True => {
                self.advance();
                Ok(Some(Node::Bool(true)))
            }
            TokenKind::False => {
                self.advance();
                Ok(Some(Node::Bool(false)))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Some(Node::Null))
            }
            TokenKind::LBracket => {
                self.descend()?;
                let array = self.array();
                self.depth -= 1;
                array.map(Some)
            }
            TokenKind::LBrace => {
                self.descend()?;
                let object = self.object();
                self.depth -= 1;
                object
            }
            other => {
                self.push(Diagnostic::new(
                    DiagnosticKind::InvalidToken,
                    other.name(),
                    format!("Invalid token {}", other),
                ));
                Ok(None)
            }
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
