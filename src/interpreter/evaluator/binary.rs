use crate::{
    ast::Operator,
    error::{CompilationError, CompileResult},
    interpreter::value::Value,
};

/// Applies an arithmetic operator to two reduced operands.
///
/// Addition, subtraction and multiplication of two integers are checked for
/// overflow and stay integral. Division always produces a real quotient. If
/// either operand is real, both are computed as reals.
///
/// # Errors
/// - `DivisionByZero` for a zero divisor, integer or real.
/// - `Overflow` if integer arithmetic overflows.
/// - `PrecisionLoss` if an integer operand cannot be converted to `f64`
///   exactly.
///
/// # Example
/// ```
/// use calctree::{
///     ast::Operator,
///     interpreter::{evaluator::binary::eval_binary_op, value::Value},
/// };
///
/// let sum = eval_binary_op(Operator::Add, Value::Integer(2), Value::Integer(3)).unwrap();
/// assert_eq!(sum, Value::Integer(5));
///
/// let quotient = eval_binary_op(Operator::Div, Value::Integer(7), Value::Integer(2)).unwrap();
/// assert_eq!(quotient, Value::Real(3.5));
/// ```
pub fn eval_binary_op(op: Operator, left: Value, right: Value) -> CompileResult<Value> {
    use Operator::{Add, Div, Mul, Sub};
    use Value::{Integer, Real};

    let overflow = || CompilationError::Overflow { operator: op.symbol() };

    match (left, right) {
        (Integer(a), Integer(b)) => match op {
            Add => a.checked_add(b).map(Integer).ok_or_else(overflow),
            Sub => a.checked_sub(b).map(Integer).ok_or_else(overflow),
            Mul => a.checked_mul(b).map(Integer).ok_or_else(overflow),
            Div => {
                if b == 0 {
                    return Err(CompilationError::DivisionByZero);
                }
                Ok(Real(left.as_real()? / right.as_real()?))
            },
        },
        _ => {
            let left = left.as_real()?;
            let right = right.as_real()?;

            Ok(Real(match op {
                        Add => left + right,
                        Sub => left - right,
                        Mul => left * right,
                        Div => {
                            if right == 0.0 {
                                return Err(CompilationError::DivisionByZero);
                            }
                            left / right
                        },
                    }))
        },
    }
}
