//! Digital Nomads Taiwan recruitment catalog.
//!
//! A fixed, ordered set of listing records and the pure filter engine that
//! derives the visible subset from the user's category selection and search
//! term. Rendering and translation lookups are handled by collaborators; this
//! crate owns only the data and the filtering semantics.

pub mod filter;
pub mod record;

pub use filter::{CategoryFilter, FilterState, compute_visible};
pub use record::{Catalog, Category, ListingRecord};
