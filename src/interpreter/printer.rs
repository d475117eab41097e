use std::fmt;

use crate::ast::Node;

/// Spaces of indentation per nesting level.
pub const INDENT: usize = 4;

/// An indented diagram of an expression tree.
///
/// Groups print as a `[` line, one line per child at the next indentation
/// level, and a closing `]` line. Numbers and operators print their value on
/// a line of their own. Every line, including the last, ends in a newline.
pub struct Diagram<'a>(pub &'a Node);

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self.0, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let pad = depth * INDENT;

    match node {
        Node::Number(value) => writeln!(f, "{:pad$}{value}", ""),
        Node::Op(op) => writeln!(f, "{:pad$}{op}", ""),
        Node::Group(children) => {
            writeln!(f, "{:pad$}[", "")?;
            for child in children {
                write_node(f, child, depth + 1)?;
            }
            writeln!(f, "{:pad$}]", "")
        },
    }
}

/// Renders a tree as an indented diagram.
///
/// # Example
/// ```
/// use calctree::{ast::Node, interpreter::printer::render};
///
/// assert_eq!(render(&Node::Group(vec![Node::Number(5)])), "[\n    5\n]\n");
/// assert_eq!(render(&Node::Number(5)), "5\n");
/// ```
#[must_use]
pub fn render(node: &Node) -> String {
    Diagram(node).to_string()
}
