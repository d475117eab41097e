/// Tree building.
///
/// Walks the token stream, keeps a stack of the groups opened by brackets and
/// hands every finished group to precedence grouping.
pub mod core;

/// Precedence grouping.
///
/// Collapses a flat run of numbers, operators and sub-trees into nested
/// 3-element groups, strongest operators first and left to right within a
/// class.
pub mod grouping;
