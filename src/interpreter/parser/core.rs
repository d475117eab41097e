use tracing::debug;

use crate::{
    ast::Node,
    error::{CompilationError, CompileResult},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::grouping::group_by_priority,
    },
};

/// Builds the expression tree from a token stream.
///
/// Every `(` suspends the group being filled and starts a new one; every `)`
/// finishes the innermost group and appends it to its parent. A finished
/// bracket group holding a single element is replaced by that element. The
/// outermost group always goes through precedence grouping and is returned as
/// a [`Node::Group`], whatever its length.
///
/// # Errors
/// - `UnmatchedClosingBracket` for a `)` with no open bracket.
/// - `UnclosedBracket` if the tokens run out while a bracket is still open.
/// - `MissingOperand` for an operator at the edge of its group.
///
/// # Example
/// ```
/// use calctree::{
///     ast::{Node, Operator},
///     interpreter::{lexer::tokenize, parser::core::build_tree},
/// };
///
/// let tree = build_tree(tokenize("(7)").unwrap()).unwrap();
/// assert_eq!(tree, Node::Group(vec![Node::Number(7)]));
/// ```
pub fn build_tree(tokens: Vec<Token>) -> CompileResult<Node> {
    // Each entry holds the suspended parent group and the position of the `(`
    // that suspended it.
    let mut stack: Vec<(Vec<Node>, usize)> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::BeginBracket => {
                stack.push((std::mem::take(&mut current), token.position()));
            },
            TokenKind::EndBracket => {
                let Some((mut parent, _)) = stack.pop() else {
                    return Err(CompilationError::UnmatchedClosingBracket { position:
                                                                               token.position() });
                };
                parent.push(close_group(std::mem::take(&mut current))?);
                current = parent;
            },
            TokenKind::Op(op) => current.push(op.into()),
            TokenKind::Number(value) => current.push(value.into()),
        }
    }

    if let Some((_, position)) = stack.last() {
        return Err(CompilationError::UnclosedBracket { position: *position });
    }

    group_by_priority(&mut current)?;
    debug!(top_level = current.len(), "built expression tree");

    Ok(Node::Group(current))
}

/// Finishes the elements collected between a pair of brackets.
fn close_group(mut elements: Vec<Node>) -> CompileResult<Node> {
    if elements.len() == 1
       && let Some(only) = elements.pop()
    {
        return Ok(only);
    }

    group_by_priority(&mut elements)?;
    Ok(Node::Group(elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Operator, interpreter::lexer::tokenize};

    fn tree(input: &str) -> CompileResult<Node> {
        build_tree(tokenize(input)?)
    }

    fn binary(left: Node, symbol: char, right: Node) -> Node {
        let op = Operator::from_symbol(symbol).map(Node::Op).unwrap();
        Node::Group(vec![left, op, right])
    }

    #[test]
    fn lone_number_is_wrapped_in_the_root_group() {
        assert_eq!(tree("5"), Ok(Node::Group(vec![Node::Number(5)])));
    }

    #[test]
    fn brackets_override_precedence() {
        let sum = binary(Node::Number(2), '+', Node::Number(3));
        let bracketed = Node::Group(vec![sum]);
        let expected = Node::Group(vec![binary(bracketed, '*', Node::Number(4))]);

        assert_eq!(tree("(2+3)*4"), Ok(expected));
    }

    #[test]
    fn bracketed_operation_keeps_its_grouping_wrapper() {
        let sum = binary(Node::Number(1), '+', Node::Number(2));
        assert_eq!(tree("(1+2)"), Ok(Node::Group(vec![Node::Group(vec![sum])])));
    }

    #[test]
    fn nested_single_elements_collapse() {
        assert_eq!(tree("((((9))))"), Ok(Node::Group(vec![Node::Number(9)])));
    }

    #[test]
    fn empty_brackets_become_an_empty_group() {
        assert_eq!(tree("()"), Ok(Node::Group(vec![Node::Group(vec![])])));
    }

    #[test]
    fn empty_input_builds_an_empty_root() {
        assert_eq!(tree(""), Ok(Node::Group(vec![])));
    }

    #[test]
    fn closing_bracket_without_opening_is_reported() {
        assert_eq!(tree(")("), Err(CompilationError::UnmatchedClosingBracket { position: 0 }));
        assert_eq!(tree("1 + 2)"), Err(CompilationError::UnmatchedClosingBracket { position: 5 }));
    }

    #[test]
    fn innermost_unclosed_bracket_is_reported() {
        assert_eq!(tree("("), Err(CompilationError::UnclosedBracket { position: 0 }));
        assert_eq!(tree("(1 + (2"), Err(CompilationError::UnclosedBracket { position: 5 }));
    }

    #[test]
    fn dangling_operator_inside_brackets_is_reported() {
        assert_eq!(tree("2 * (3 -)"), Err(CompilationError::MissingOperand { operator: '-' }));
    }
}
