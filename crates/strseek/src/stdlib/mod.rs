// Value-level entry points.
// Implements: index

pub mod string;

pub use string::string_index;
