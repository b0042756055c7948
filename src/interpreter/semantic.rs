/// The two-pass type checker.
///
/// Collects assignment types from literal shape first, then validates every
/// binary operation against the completed table.
pub mod analyzer;
/// The flat table of declared variables.
pub mod symbol_table;
/// Static types.
pub mod types;

pub use analyzer::{AnalysisFailure, analyze};
pub use symbol_table::SymbolTable;
pub use types::Type;
