//! Text renderings of a parse result: the indented tree walk and the
//! error list.

use std::io::{self, Write};

use strictjson_core::{Diagnostic, Node, NodeKind, Pair};

pub(crate) fn write_tree(w: &mut dyn Write, root: &Node, indent: usize) -> io::Result<()> {
    writeln!(w, "Abstract Syntax Tree:")?;
    write_node(w, Some(root), 0, indent)
}

pub(crate) fn tree_to_string(root: &Node, indent: usize) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_tree(&mut buf, root, indent);
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_node(
    w: &mut dyn Write,
    node: Option<&Node>,
    depth: usize,
    indent: usize,
) -> io::Result<()> {
    let pad = " ".repeat(depth * indent);
    match node {
        None => writeln!(w, "{}Leaf: NONE -> null", pad),
        Some(Node::Object(pairs)) => {
            writeln!(w, "{}Node: {}", pad, NodeKind::Object)?;
            for pair in pairs {
                write_pair(w, pair.as_ref(), depth + 1, indent)?;
            }
            Ok(())
        }
        Some(Node::Array(items)) => {
            writeln!(w, "{}Node: {}", pad, NodeKind::Array)?;
            for item in items {
                write_node(w, Some(item), depth + 1, indent)?;
            }
            Ok(())
        }
        Some(leaf) => writeln!(
            w,
            "{}Leaf: {} -> {}",
            pad,
            leaf.kind(),
            leaf.leaf_text().unwrap_or_default()
        ),
    }
}

fn write_pair(
    w: &mut dyn Write,
    pair: Option<&Pair>,
    depth: usize,
    indent: usize,
) -> io::Result<()> {
    let Some(pair) = pair else {
        return write_node(w, None, depth, indent);
    };
    let pad = " ".repeat(depth * indent);
    writeln!(w, "{}Node: {}", pad, pair.kind())?;
    writeln!(w, "{}Leaf: KEY -> {}", " ".repeat((depth + 1) * indent), pair.key)?;
    write_node(w, pair.value.as_ref(), depth + 1, indent)
}

pub(crate) fn write_errors(w: &mut dyn Write, diagnostics: &[Diagnostic]) -> io::Result<()> {
    writeln!(w, "Semantic errors:")?;
    for d in diagnostics {
        writeln!(w, "-{}", d)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictjson_core::parse_str;

    fn render(src: &str, indent: usize) -> String {
        let root = parse_str(src).root.expect("root");
        tree_to_string(&root, indent)
    }

    #[test]
    fn object_tree_layout() {
        let out = render(r#"{"a": [1, 2], "b": null}"#, 2);
        let expected = "\
Abstract Syntax Tree:
Node: OBJECT
  Node: PAIR
    Leaf: KEY -> a
    Node: ARRAY
      Leaf: NUMBER -> 1
      Leaf: NUMBER -> 2
  Node: PAIR
    Leaf: KEY -> b
    Leaf: NULL -> null
";
        assert_eq!(out, expected);
    }

    #[test]
    fn indent_width_is_configurable() {
        let out = render("[true]", 4);
        assert_eq!(out, "Abstract Syntax Tree:\nNode: ARRAY\n    Leaf: BOOL -> true\n");
    }

    #[test]
    fn null_markers_render_as_none() {
        let out = render(r#"{"": 1, "k": "false"}"#, 1);
        assert!(out.contains(" Leaf: NONE -> null\n"), "{out}");
        assert!(out.contains("  Leaf: KEY -> k\n  Leaf: NONE -> null\n"), "{out}");
    }

    #[test]
    fn error_list_layout() {
        let parsed = parse_str(r#"{"a": 1, "a": 2}"#);
        let mut buf = Vec::new();
        write_errors(&mut buf, &parsed.diagnostics).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Semantic errors:\n-Error Type 5 at a: No Duplicate Keys in Dictionary.\n"
        );
    }
}
