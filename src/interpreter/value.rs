use crate::{
    error::{CompilationError, CompileResult},
    util::num::i64_to_f64_exact,
};

/// The result of evaluating an expression.
///
/// Integer arithmetic stays integral; division, and anything combined with
/// the result of a division, is real.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// Converts the value to an `f64`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` for an integer that `f64` cannot hold exactly.
    ///
    /// # Example
    /// ```
    /// use calctree::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), Ok(10.0));
    /// assert!(Value::Integer(i64::MAX).as_real().is_err());
    /// ```
    pub fn as_real(self) -> CompileResult<f64> {
        match self {
            Self::Real(r) => Ok(r),
            Self::Integer(n) => {
                i64_to_f64_exact(n).ok_or(CompilationError::PrecisionLoss { value: n })
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Debug keeps the fractional part, so `2.0` does not read as an integer.
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_always_show_a_fraction() {
        assert_eq!(Value::Real(2.0).to_string(), "2.0");
        assert_eq!(Value::Real(0.5).to_string(), "0.5");
        assert_eq!(Value::Integer(-3).to_string(), "-3");
    }
}
