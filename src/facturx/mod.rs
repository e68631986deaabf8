//! Profile-conditional Factur-X / CII document assembly.
//!
//! [`assemble`] walks an [`InvoiceDocument`](crate::core::InvoiceDocument)
//! once and produces an ordered [`Element`] tree: the Cross Industry
//! Invoice restricted to what the requested [`Profile`](crate::core::Profile)
//! permits. Which field belongs to which profile is defined by the static
//! table in [`lattice`]. Leaf values go through [`codec`].
//!
//! With the `xml` feature, [`xml::to_xml_string`] renders the tree as text.
//!
//! # Example
//!
//! ```no_run
//! use facturx::core::*;
//! use facturx::facturx::assemble;
//!
//! let doc: InvoiceDocument = todo!(); // build via InvoiceBuilder
//! let tree = assemble(&doc, Profile::EN16931)?;
//! for path in tree.paths() {
//!     println!("{path}");
//! }
//! # Ok::<(), FacturXError>(())
//! ```

mod assemble;
pub mod codec;
mod element;
mod emit;
pub mod lattice;
#[cfg(feature = "xml")]
pub mod xml;

pub use assemble::assemble;
pub use codec::{encode_amount, encode_date, format_decimal};
pub use element::Element;
pub use lattice::{Field, FieldRule, is_allowed, is_required, minimum_profile_for};

/// CII namespace URIs.
pub mod cii_ns {
    pub const RSM: &str = "urn:un:unece:uncefact:data:standard:CrossIndustryInvoice:100";
    pub const RAM: &str =
        "urn:un:unece:uncefact:data:standard:ReusableAggregateBusinessInformationEntity:100";
    pub const QDT: &str = "urn:un:unece:uncefact:data:standard:QualifiedDataType:100";
    pub const UDT: &str = "urn:un:unece:uncefact:data:standard:UnqualifiedDataType:100";
}
