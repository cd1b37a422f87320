//! API actions organized by category.
//!
//! Each module adds typed methods to `YourlsClient` for a group of related
//! actions.

pub mod links;
pub mod stats;

pub use links::ShortenOptions;
