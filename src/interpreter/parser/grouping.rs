use tracing::trace;

use crate::{
    ast::{Node, Operator},
    error::{CompilationError, CompileResult},
};

/// Groups a flat sequence of elements by operator precedence, in place.
///
/// Operator classes are processed in [`Operator::PRIORITY`] order. Within a
/// class the sequence is scanned left to right; each operator of the class
/// replaces the window `[previous, operator, next]` with one group wrapping
/// those three elements. The scan then resumes right after the new group,
/// which makes equal-priority operators associate to the left.
///
/// Sequences that do not reduce to 1 or 3 elements are left as they are; the
/// evaluator reports them.
///
/// # Errors
/// Returns `MissingOperand` if an operator is the first or last element of
/// the sequence at the time it is examined.
///
/// # Example
/// ```
/// use calctree::{
///     ast::{Node, Operator},
///     interpreter::parser::grouping::group_by_priority,
/// };
///
/// let mut elements = vec![Node::Number(8),
///                         Node::Op(Operator::Sub),
///                         Node::Number(3),
///                         Node::Op(Operator::Sub),
///                         Node::Number(2)];
/// group_by_priority(&mut elements).unwrap();
///
/// let first = Node::Group(vec![Node::Number(8), Node::Op(Operator::Sub), Node::Number(3)]);
/// assert_eq!(elements,
///            vec![Node::Group(vec![first, Node::Op(Operator::Sub), Node::Number(2)])]);
/// ```
pub fn group_by_priority(elements: &mut Vec<Node>) -> CompileResult<()> {
    for class in Operator::PRIORITY {
        let mut index = 0;

        while index < elements.len() {
            if let Node::Op(op) = elements[index]
               && class.contains(&op)
            {
                if index == 0 || index == elements.len() - 1 {
                    return Err(CompilationError::MissingOperand { operator: op.symbol() });
                }

                let start = index - 1;
                let window: Vec<Node> = elements.drain(start..=index + 1).collect();
                elements.insert(start, Node::Group(window));
                trace!(%op, at = start, remaining = elements.len(), "collapsed operation");

                index = start;
            }
            index += 1;
        }
    }

    Ok(())
}
