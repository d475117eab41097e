/// Core evaluation logic.
///
/// Reduces groups recursively, checking arity and the operator slot.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+ - * /` to two reduced values, with integer overflow and
/// division-by-zero checks.
pub mod binary;
