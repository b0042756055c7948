/// Binary operator evaluation logic.
///
/// Handles integer and float arithmetic, overflow, and division by zero.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation entry points and the variable store.
pub mod core;

/// Unary operator evaluation logic.
pub mod unary;
