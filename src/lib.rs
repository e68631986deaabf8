//! # facturx
//!
//! Profile-conditional builder for Factur-X / ZUGFeRD Cross Industry Invoice
//! documents. One invoice model, four nested conformance profiles:
//! MINIMUM ⊂ BASIC WL ⊂ BASIC ⊂ EN 16931.
//!
//! Given an [`InvoiceDocument`](crate::core::InvoiceDocument) and a target
//! [`Profile`](crate::core::Profile), [`facturx::assemble`] checks that every
//! field mandatory at that profile is present, drops every field the profile
//! does not permit and returns the element tree in schema order with leaf
//! values in their wire form. Failures carry the schema path of the
//! offending field.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use facturx::core::*;
//! use facturx::facturx::assemble;
//! use rust_decimal_macros::dec;
//!
//! let doc = InvoiceBuilder::new(Profile::Basic, "FA-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
//!     .seller(PartyBuilder::new("Lapin SARL")
//!         .legal_organization("123456789", Some("0002"))
//!         .address(AddressBuilder::new("FR").street("1 rue de la Paix").postcode("75002").city("Paris").build())
//!         .vat_id("FR11123456789")
//!         .build())
//!     .buyer(PartyBuilder::new("Client SA").build())
//!     .add_line(LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(10))
//!         .tax(TaxCategory::StandardRate, dec!(20))
//!         .build())
//!     .add_tax(TradeTax::vat_breakdown(TaxCategory::StandardRate, dec!(20), dec!(100), dec!(20)))
//!     .totals(HeaderMonetarySummation {
//!         line_total: Some(dec!(100)),
//!         ..HeaderMonetarySummation::new(dec!(100), dec!(20), dec!(120))
//!     })
//!     .build();
//!
//! let tree = assemble(&doc, Profile::Basic).unwrap();
//! let line_total = tree.find(
//!     "rsm:SupplyChainTradeTransaction/ram:IncludedSupplyChainTradeLineItem/\
//!      ram:SpecifiedLineTradeSettlement/ram:SpecifiedTradeSettlementLineMonetarySummation/\
//!      ram:LineTotalAmount",
//! );
//! assert_eq!(line_total.and_then(|e| e.text()), Some("100.00"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice model, code lists, builders, arithmetic checks |
//! | `facturx` (default) | Profile lattice, value codec, element tree assembly |
//! | `xml` | Text rendering of the element tree via quick-xml |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "facturx")]
pub mod facturx;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(feature = "facturx")]
pub use crate::facturx::{Element, assemble};
