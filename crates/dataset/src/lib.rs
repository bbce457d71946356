//! # Dataset Crate
//!
//! Owns the read-only school collection served by the application.
//!
//! ## Public API
//!
//! - `load_schools`: reads the JSON file once at startup. Never fails; a
//!   missing or malformed file yields an empty collection.
//! - `try_load_schools`: the fallible operation underneath, for callers that
//!   want to report the reason.
//! - `Dataset`: the immutable context handed to every request. Holds the
//!   records plus the year and county facets computed at construction, and
//!   answers detail lookups and county-scoped district facets.
//! - `DatasetError`: the error type returned by `try_load_schools`.

// Declare the modules that constitute this crate.
pub mod catalog;
pub mod error;
pub mod facets;
pub mod loader;

// Re-export the key components to create a clean, public-facing API.
pub use catalog::Dataset;
pub use error::DatasetError;
pub use loader::{load_schools, try_load_schools};
