//! Syntax tree produced by the parser.
//!
//! Leaves carry their literal payload; containers own their children.
//! A `None` child marks a construct that a rule violation kept out of the
//! tree; the matching diagnostic is always in the parse result.

use std::fmt;

// ──────────────────────────────────────────────
// Node kinds
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    String,
    Number,
    Bool,
    Null,
    Object,
    Array,
    Pair,
}

impl NodeKind {
    pub fn label(self) -> &'static str {
        match self {
            NodeKind::String => "STRING",
            NodeKind::Number => "NUMBER",
            NodeKind::Bool => "BOOL",
            NodeKind::Null => "NULL",
            NodeKind::Object => "OBJECT",
            NodeKind::Array => "ARRAY",
            NodeKind::Pair => "PAIR",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ──────────────────────────────────────────────
// Nodes
// ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    String(String),
    /// Number lexeme, kept as written.
    Number(String),
    Bool(bool),
    Null,
    Object(Vec<Option<Pair>>),
    Array(Vec<Node>),
}

/// An object member: one key and one value slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair {
    pub key: String,
    pub value: Option<Node>,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: Option<Node>) -> Self {
        Pair {
            key: key.into(),
            value,
        }
    }

    pub fn kind(&self) -> NodeKind {
        NodeKind::Pair
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::String(_) => NodeKind::String,
            Node::Number(_) => NodeKind::Number,
            Node::Bool(_) => NodeKind::Bool,
            Node::Null => NodeKind::Null,
            Node::Object(_) => NodeKind::Object,
            Node::Array(_) => NodeKind::Array,
        }
    }

    /// Payload of a leaf as text; `None` for containers.
    pub fn leaf_text(&self) -> Option<String> {
        match self {
            Node::String(s) | Node::Number(s) => Some(s.clone()),
            Node::Bool(b) => Some(b.to_string()),
            Node::Null => Some("null".to_owned()),
            Node::Object(_) | Node::Array(_) => None,
        }
    }

    /// Members of an object node.
    pub fn pairs(&self) -> Option<&[Option<Pair>]> {
        match self {
            Node::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Elements of an array node.
    pub fn elements(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Value of the first well-formed member named `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.pairs()?
            .iter()
            .flatten()
            .find(|p| p.key == key)
            .and_then(|p| p.value.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_text_per_kind() {
        assert_eq!(Node::String("x".into()).leaf_text().as_deref(), Some("x"));
        assert_eq!(Node::Number("1.5".into()).leaf_text().as_deref(), Some("1.5"));
        assert_eq!(Node::Bool(false).leaf_text().as_deref(), Some("false"));
        assert_eq!(Node::Null.leaf_text().as_deref(), Some("null"));
        assert_eq!(Node::Array(vec![]).leaf_text(), None);
    }

    #[test]
    fn get_skips_null_markers() {
        let obj = Node::Object(vec![
            None,
            Some(Pair::new("a", Some(Node::Null))),
        ]);
        assert_eq!(obj.get("a"), Some(&Node::Null));
        assert_eq!(obj.get("b"), None);
        assert_eq!(obj.kind().label(), "OBJECT");
    }
}
