use std::collections::HashSet;

use super::{rules, Parser};
use crate::ast::{Node, NodeKind, Pair};
use crate::error::{Diagnostic, DiagnosticKind, ParseFault};
use crate::token::{Token, TokenKind};

impl<I: Iterator<Item = Token>> Parser<I> {
    // -- Objects ------------------------------------------------

    /// `{ pair (, pair)* }`. A member boundary that is neither `,` nor `}`
    /// abandons the object: no node, and the offending token stays put.
    pub(super) fn object(&mut self) -> Result<Option<Node>, ParseFault> {
        self.eat(TokenKind::LBrace)?;
        let mut keys = HashSet::new();
        let mut members = Vec::new();

        while let Some(kind) = self.peek_kind() {
            if kind == TokenKind::RBrace {
                break;
            }
            members.push(self.pair(&mut keys)?);

            match self.peek_kind() {
                Some(TokenKind::Comma) => {
                    self.advance();
                }
                Some(TokenKind::RBrace) | None => {}
                Some(other) => {
                    self.push(Diagnostic::new(
                        DiagnosticKind::MissingSeparator,
                        other.name(),
                        format!("Expected 'COMMA' or 'RBRACE' but found {}", other),
                    ));
                    return Ok(None);
                }
            }
        }

        self.eat(TokenKind::RBrace)?;
        Ok(Some(Node::Object(members)))
    }

    /// `STRING : value`, with the key rules applied. A rejected key skips
    /// the rest of the member and yields no pair.
    fn pair(&mut self, keys: &mut HashSet<String>) -> Result<Option<Pair>, ParseFault> {
        if self.expect_current("an object key")? != TokenKind::String {
            let text = self.take_text();
            self.push(Diagnostic::rule(DiagnosticKind::EmptyKey, text));
            self.skip_member_rest();
            return Ok(None);
        }

        let raw = self.take_text();
        let key = raw.trim();
        if let Some(finding) = rules::key_finding(&raw, key, keys) {
            self.push(finding);
            self.skip_member_rest();
            return Ok(None);
        }
        let key = key.to_owned();
        keys.insert(key.clone());

        self.eat(TokenKind::Colon)?;
        let value = self.value()?;
        Ok(Some(Pair::new(key, value)))
    }

    /// Best-effort resync after a rejected key: drop a following `:` and
    /// then one more token unless it already ends the member.
    fn skip_member_rest(&mut self) {
        if self.at(TokenKind::Colon) {
            self.advance();
        }
        if matches!(
            self.peek_kind(),
            Some(kind) if kind != TokenKind::Comma && kind != TokenKind::RBrace
        ) {
            self.advance();
        }
    }

    // -- Arrays -------------------------------------------------

    /// `[ value (, value)* ]`. All elements share the first element's kind;
    /// the first one that does not is reported and everything after it, up
    /// to the array's own `]`, is dropped. An array cut off by end of input
    /// is still returned, with an `UnclosedArray` diagnostic.
    pub(super) fn array(&mut self) -> Result<Node, ParseFault> {
        self.eat(TokenKind::LBracket)?;
        let mut items = Vec::new();
        let mut element_kind: Option<NodeKind> = None;

        while let Some(kind) = self.peek_kind() {
            if kind == TokenKind::RBracket {
                break;
            }

            if let Some(node) = self.value()? {
                let expected = *element_kind.get_or_insert(node.kind());
                if node.kind() != expected {
                    let text = node
                        .leaf_text()
                        .unwrap_or_else(|| node.kind().label().to_owned());
                    self.push(Diagnostic::rule(DiagnosticKind::MixedArray, text));
                    self.discard_to_array_end();
                    break;
                }
                items.push(node);
            }

            match self.peek_kind() {
                Some(TokenKind::Comma) => {
                    self.advance();
                }
                Some(TokenKind::RBracket) | None => {}
                Some(_) => {
                    let text = self
                        .current
                        .as_ref()
                        .map(|t| t.text.clone())
                        .unwrap_or_default();
                    self.push(Diagnostic::rule(DiagnosticKind::MixedArray, text));
                    self.discard_to_array_end();
                    break;
                }
            }
        }

        if self.at(TokenKind::RBracket) {
            self.advance();
        } else {
            self.push(Diagnostic::rule(DiagnosticKind::UnclosedArray, "end of input"));
        }
        Ok(Node::Array(items))
    }

    /// Drop tokens up to, not including, the `]` that closes the current
    /// array. Nested brackets are skipped whole.
    fn discard_to_array_end(&mut self) {
        let mut depth = 0usize;
        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::LBracket => depth += 1,
                TokenKind::RBracket if depth == 0 => break,
                TokenKind::RBracket => depth -= 1,
                _ => {}
            }
            self.advance();
        }
    }
}
