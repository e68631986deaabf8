//! Invoice data model, code lists and builders.
//!
//! The types here mirror the Cross Industry Invoice structure used by
//! Factur-X: a document context, the exchanged document header and the
//! supply chain trade transaction with its agreement, delivery, settlement
//! and line items.

mod arithmetic;
mod builder;
pub mod codes;
mod error;
pub mod lookup;
mod profile;
mod types;

pub use arithmetic::*;
pub use builder::*;
pub use codes::*;
pub use error::*;
pub use profile::*;
pub use types::*;
