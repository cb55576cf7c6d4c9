//! Mathematical utilities shared by several puzzles

/// Modular exponentiation, inverses, remainder theorem and discrete logs
pub mod modular;
/// Sets of integers as merged inclusive ranges
pub mod ranges;
