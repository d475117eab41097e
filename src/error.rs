/// Compilation errors.
///
/// Defines every failure the pipeline can raise, from tokenizing through tree
/// building to evaluation. There is a single taxonomy: the first error stops
/// the pipeline and is handed back to the caller unchanged.
pub mod compilation_error;

pub use compilation_error::{CompilationError, CompileResult};
