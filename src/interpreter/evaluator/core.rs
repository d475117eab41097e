use tracing::debug;

use crate::{
    ast::Node,
    error::{CompilationError, CompileResult},
    interpreter::{evaluator::binary::eval_binary_op, value::Value},
};

/// Evaluates an expression tree, consuming it.
///
/// A number evaluates to itself and a single-child group to its child. A
/// 3-child group evaluates its left and right operands first, then applies
/// the operator in the middle slot.
///
/// # Errors
/// - `InvalidArity` for a group with a child count other than 1 or 3.
/// - `UnexpectedToken` for an operator in an operand position, or an operand
///   in the operator slot.
/// - Any arithmetic error from [`eval_binary_op`].
///
/// # Example
/// ```
/// use calctree::{
///     ast::{Node, Operator},
///     interpreter::{evaluator::core::evaluate, value::Value},
/// };
///
/// let tree = Node::Group(vec![Node::Number(4), Node::Op(Operator::Mul), Node::Number(5)]);
/// assert_eq!(evaluate(tree).unwrap(), Value::Integer(20));
/// ```
pub fn evaluate(node: Node) -> CompileResult<Value> {
    match node {
        Node::Number(value) => Ok(Value::Integer(value)),
        op @ Node::Op(_) => Err(CompilationError::UnexpectedToken { token: op.describe() }),
        Node::Group(children) => eval_group(children),
    }
}

fn eval_group(mut children: Vec<Node>) -> CompileResult<Value> {
    let found = children.len();

    if found == 1
       && let Some(only) = children.pop()
    {
        return evaluate(only);
    }

    let [left, op, right] =
        <[Node; 3]>::try_from(children).map_err(|_| CompilationError::InvalidArity { found })?;

    let left = evaluate(left)?;
    let right = evaluate(right)?;

    match op {
        Node::Op(op) => {
            let value = eval_binary_op(op, left, right)?;
            debug!(%left, %op, %right, %value, "reduced operation");
            Ok(value)
        },
        other => Err(CompilationError::UnexpectedToken { token: other.describe() }),
    }
}
