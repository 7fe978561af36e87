//! Semantic rules checked while the tree is built.
//!
//! Each check is a pure function from the text under inspection to the
//! findings it produces; the parser appends them and carries on.

use std::collections::HashSet;

use crate::error::{Diagnostic, DiagnosticKind};

/// Words that may be neither an object key nor a string value.
pub const RESERVED_WORDS: [&str; 3] = ["true", "false", "null"];

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Rules 1 and 3 for a number lexeme. Every violated condition is its own
/// finding.
pub fn number_findings(text: &str) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    if text.starts_with('.') || text.ends_with('.') {
        findings.push(Diagnostic::rule(DiagnosticKind::MalformedNumber, text));
    }
    if text.starts_with('0') && text.len() > 1 && !text.starts_with("0.") {
        findings.push(Diagnostic::rule(DiagnosticKind::NumberPrefix, text));
    }
    if text.starts_with('+') {
        findings.push(Diagnostic::rule(DiagnosticKind::NumberPrefix, text));
    }
    findings
}

/// Rules 2, 4 and 5 for an object key. `raw` is the lexeme, `key` its
/// trimmed form, `seen` the keys already taken in the enclosing object.
pub fn key_finding(raw: &str, key: &str, seen: &HashSet<String>) -> Option<Diagnostic> {
    if key.is_empty() {
        Some(Diagnostic::rule(DiagnosticKind::EmptyKey, raw))
    } else if is_reserved(key) {
        Some(Diagnostic::rule(DiagnosticKind::ReservedKey, key))
    } else if seen.contains(key) {
        Some(Diagnostic::rule(DiagnosticKind::DuplicateKey, key))
    } else {
        None
    }
}

/// Rule 7 for a string value.
pub fn string_finding(value: &str) -> Option<Diagnostic> {
    is_reserved(value).then(|| Diagnostic::rule(DiagnosticKind::ReservedString, value))
}
