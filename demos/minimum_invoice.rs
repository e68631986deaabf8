//! Build one invoice, render it at MINIMUM and show the errors a caller
//! can run into.
//!
//! Run with: `cargo run --example minimum_invoice --features xml`
//! Set `RUST_LOG=facturx=trace` to see which fields the profile strips.

use chrono::NaiveDate;
use facturx::core::*;
use facturx::facturx::assemble;
use facturx::facturx::xml::to_xml_string;
use rust_decimal_macros::dec;

fn invoice(profile: Profile) -> InvoiceDocument {
    InvoiceBuilder::new(profile, "FA-2024-001", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .seller(
            PartyBuilder::new("Lapin SARL")
                .legal_organization("123456789", Some("0002"))
                .address(AddressBuilder::new("FR").postcode("75002").city("Paris").build())
                .vat_id("FR11123456789")
                .build(),
        )
        .buyer(PartyBuilder::new("Client SA").build())
        .buyer_order("PO-2024-17")
        .add_line(
            LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(10.0))
                .tax(TaxCategory::StandardRate, dec!(20))
                .build(),
        )
        .totals(HeaderMonetarySummation::new(dec!(100), dec!(20), dec!(120)))
        .build()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // ── 1. MINIMUM: legal organization, order reference and lines are dropped ──
    println!("=== MINIMUM ===");
    let doc = invoice(Profile::Minimum);
    match assemble(&doc, Profile::Minimum).and_then(|tree| to_xml_string(&tree)) {
        Ok(xml) => println!("{xml}"),
        Err(e) => println!("  Assembly failed: {e}"),
    }

    // ── 2. Declared guideline differs from the requested profile ──
    println!("\n=== Profile mismatch ===");
    if let Err(e) = assemble(&doc, Profile::Basic) {
        println!("  {e}");
    }

    // ── 3. No lines at all ──
    println!("\n=== Empty transaction ===");
    let mut empty = invoice(Profile::Minimum);
    empty.transaction.line_items.clear();
    if let Err(e) = assemble(&empty, Profile::Minimum) {
        println!("  {e}");
        if let Some(path) = e.path() {
            println!("  at {path}");
        }
    }
}
