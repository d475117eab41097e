/// The evaluator module reduces expression trees to values.
///
/// The evaluator consumes a finished tree bottom-up, applying each operator
/// to its already reduced operands. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Reduces groups recursively, unwrapping single-child groups.
/// - Rejects groups of the wrong shape instead of repairing them.
/// - Reports arithmetic failures such as division by zero or overflow.
pub mod evaluator;
/// The lexer module tokenizes source text.
///
/// The lexer reads the raw input and produces brackets, operators and integer
/// literals, each tagged with the bytes it came from. This is the first stage
/// of the pipeline.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// Brackets are matched with an explicit stack and every finished run of
/// elements is grouped by operator precedence.
pub mod parser;
/// Indented diagrams of expression trees, for inspection.
pub mod printer;
/// The value module defines the numbers evaluation produces.
pub mod value;
