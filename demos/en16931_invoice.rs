//! A fully populated EN 16931 invoice: allowances, a tax representative,
//! a supporting document and an arithmetic cross-check before rendering.
//!
//! Run with: `cargo run --example en16931_invoice --features xml`

use chrono::NaiveDate;
use facturx::core::*;
use facturx::facturx::assemble;
use facturx::facturx::xml::to_xml_string;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn invoice() -> InvoiceDocument {
    let mut discount = TradeAllowanceCharge::allowance(dec!(10));
    discount.reason_code = Some("95".into());
    discount.reason = Some("Remise fidélité".into());
    discount.category_tax = Some(TradeTax::vat(TaxCategory::StandardRate, dec!(20)));

    InvoiceBuilder::new(Profile::EN16931, "FA-2024-042", date(2024, 6, 30))
        .business_process("A1")
        .note_with_subject("Pénalités de retard: 3 fois le taux légal", NoteSubjectCode::Regulatory)
        .buyer_reference("SERVICE-ACHATS")
        .seller(
            PartyBuilder::new("Lapin SARL")
                .legal_organization("123456789", Some("0002"))
                .trading_name("Lapin Conseil")
                .contact(TradeContact {
                    person_name: Some("Marie Martin".into()),
                    email: Some("marie@lapin.fr".into()),
                    ..TradeContact::default()
                })
                .address(
                    AddressBuilder::new("FR")
                        .street("1 rue de la Paix")
                        .postcode("75002")
                        .city("Paris")
                        .build(),
                )
                .electronic_address("EM", "factures@lapin.fr")
                .vat_id("FR11123456789")
                .build(),
        )
        .buyer(
            PartyBuilder::new("Kunde GmbH")
                .address(AddressBuilder::new("DE").postcode("10115").city("Berlin").build())
                .vat_id("DE123456789")
                .build(),
        )
        .seller_tax_representative(
            PartyBuilder::new("Mandataire Fiscal SAS")
                .address(AddressBuilder::new("FR").city("Lille").build())
                .vat_id("FR33111222333")
                .build(),
        )
        .buyer_order("PO-88")
        .contract("CT-2024-3")
        .add_additional_document(ReferencedDocument {
            type_code: Some(DocumentTypeCode::RelatedDocument),
            name: Some("Feuille de temps".into()),
            attachment: Some(BinaryObject {
                content: "SGV1cmVzOiAxMgo=".into(),
                mime_code: "text/csv".into(),
                filename: "timesheet.csv".into(),
            }),
            ..ReferencedDocument::new("TS-06")
        })
        .delivery_date(date(2024, 6, 28))
        .billing_period(date(2024, 6, 1), date(2024, 6, 30))
        .sepa_credit_transfer("FR7630006000011234567890189")
        .due_date(date(2024, 7, 30))
        .add_line(
            LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(10.0))
                .tax(TaxCategory::StandardRate, dec!(20))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("2", "Licence annuelle", dec!(1), "C62", dec!(250))
                .seller_assigned_id("LIC-1Y")
                .tax(TaxCategory::StandardRate, dec!(20))
                .build(),
        )
        .add_allowance(discount)
        .add_tax(TradeTax::vat_breakdown(
            TaxCategory::StandardRate,
            dec!(20),
            dec!(340),
            dec!(68),
        ))
        .totals(HeaderMonetarySummation {
            line_total: Some(dec!(350)),
            allowance_total: Some(dec!(10)),
            ..HeaderMonetarySummation::new(dec!(340), dec!(68), dec!(408))
        })
        .build()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let doc = invoice();

    // ── 1. Optional arithmetic cross-check ──
    println!("=== Arithmetic ===");
    let errors = validate_arithmetic(&doc);
    if errors.is_empty() {
        println!("  totals are consistent");
    }
    for e in &errors {
        println!("  {e}");
    }

    // ── 2. Render ──
    println!("\n=== EN 16931 ===");
    match assemble(&doc, Profile::EN16931).and_then(|tree| to_xml_string(&tree)) {
        Ok(xml) => println!("{xml}"),
        Err(e) => println!("  Assembly failed: {e}"),
    }

    // ── 3. Seller legal organization is mandatory from BASIC WL ──
    println!("\n=== Missing legal organization ===");
    let mut incomplete = invoice();
    incomplete.transaction.agreement.seller.legal_organization = None;
    if let Err(e) = assemble(&incomplete, Profile::EN16931) {
        println!("  {e}");
    }
}
