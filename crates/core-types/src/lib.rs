pub mod numeric;
pub mod school;

// Re-export the core types to provide a clean public API.
pub use numeric::parse_int_or_zero;
pub use school::School;
