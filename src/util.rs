/// Numeric conversion helpers.
///
/// Conversions between integer and floating-point types that refuse to lose
/// information instead of rounding silently.
pub mod num;
