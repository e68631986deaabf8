#![cfg(feature = "facturx")]

use chrono::NaiveDate;
use facturx::core::*;
use facturx::facturx::{Element, assemble};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const DOC: &str = "/rsm:CrossIndustryInvoice/rsm:ExchangedDocument";
const TX: &str = "/rsm:CrossIndustryInvoice/rsm:SupplyChainTradeTransaction";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn agreement_path() -> String {
    format!("{TX}/ram:ApplicableHeaderTradeAgreement")
}

fn settlement_path() -> String {
    format!("{TX}/ram:ApplicableHeaderTradeSettlement")
}

fn seller() -> TradeParty {
    PartyBuilder::new("Lapin SARL")
        .id("FR-SELL-01")
        .global_id("0088", "3010000000015")
        .description("SARL au capital de 10 000 EUR")
        .legal_organization("123456789", Some("0002"))
        .trading_name("Lapin")
        .contact(TradeContact {
            person_name: Some("Marie Martin".into()),
            telephone: Some("+33 1 23 45 67 89".into()),
            email: Some("marie@lapin.fr".into()),
            ..TradeContact::default()
        })
        .address(
            AddressBuilder::new("FR")
                .postcode("75002")
                .street("1 rue de la Paix")
                .city("Paris")
                .build(),
        )
        .electronic_address("EM", "factures@lapin.fr")
        .vat_id("FR11123456789")
        .build()
}

fn buyer() -> TradeParty {
    PartyBuilder::new("Client SA")
        .legal_organization("987654321", Some("0002"))
        .address(AddressBuilder::new("FR").postcode("69001").city("Lyon").build())
        .vat_id("FR22987654321")
        .build()
}

fn tax_representative() -> TradeParty {
    PartyBuilder::new("Mandataire Fiscal")
        .address(AddressBuilder::new("FR").city("Lille").build())
        .vat_id("FR33111222333")
        .build()
}

/// A document valid at every profile.
fn invoice(profile: Profile) -> InvoiceDocument {
    InvoiceBuilder::new(profile, "FA-2024-042", date(2024, 6, 15))
        .note("Pénalités de retard: trois fois le taux d'intérêt légal")
        .buyer_reference("SERVICE-ACHATS")
        .seller(seller())
        .buyer(buyer())
        .seller_tax_representative(tax_representative())
        .buyer_order("PO-77")
        .contract("CT-2024-01")
        .delivery_date(date(2024, 6, 10))
        .despatch_advice("BL-12")
        .sepa_credit_transfer("FR7630006000011234567890189")
        .add_tax(TradeTax::vat_breakdown(
            TaxCategory::StandardRate,
            dec!(20),
            dec!(150),
            dec!(30),
        ))
        .due_date(date(2024, 7, 15))
        .add_line(
            LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(10.0))
                .tax(TaxCategory::StandardRate, dec!(20))
                .build(),
        )
        .add_line(
            LineItemBuilder::new("2", "Déplacement", dec!(1), "C62", dec!(50))
                .tax(TaxCategory::StandardRate, dec!(20))
                .build(),
        )
        .totals(HeaderMonetarySummation {
            line_total: Some(dec!(150)),
            ..HeaderMonetarySummation::new(dec!(150), dec!(30), dec!(180))
        })
        .build()
}

fn has(tree: &Element, needle: &str) -> bool {
    tree.paths().iter().any(|p| p.contains(needle))
}

fn names(el: &Element) -> Vec<&str> {
    el.children().iter().map(|c| c.name()).collect()
}

fn text<'a>(tree: &'a Element, path: &str) -> Option<&'a str> {
    tree.find(path).and_then(|e| e.text())
}

// --- Profile stripping ---

#[test]
fn minimum_strips_higher_profile_fields() {
    let tree = assemble(&invoice(Profile::Minimum), Profile::Minimum).unwrap();

    assert!(!has(&tree, "ram:SpecifiedLegalOrganization"));
    assert!(!has(&tree, "ram:SellerTaxRepresentativeTradeParty"));
    assert!(!has(&tree, "ReferencedDocument"));
    assert!(!has(&tree, "ram:IncludedSupplyChainTradeLineItem"));
    assert!(!has(&tree, "ram:IncludedNote"));
    assert!(!has(&tree, "ram:SpecifiedTradeSettlementPaymentMeans"));
    assert!(!has(&tree, "ram:ApplicableTradeTax"));
    assert!(!has(&tree, "ram:LineTotalAmount"));

    let agreement = "rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeAgreement";
    assert_eq!(
        text(&tree, &format!("{agreement}/ram:SellerTradeParty/ram:Name")),
        Some("Lapin SARL")
    );
    assert_eq!(
        text(&tree, &format!("{agreement}/ram:BuyerReference")),
        Some("SERVICE-ACHATS")
    );
}

#[test]
fn minimum_with_only_the_essentials() {
    let doc = InvoiceBuilder::new(Profile::Minimum, "FA-1", date(2024, 1, 15))
        .seller(PartyBuilder::new("Lapin SARL").build())
        .buyer(PartyBuilder::new("Client SA").build())
        .add_line(LineItemBuilder::new("1", "Conseil", dec!(1), "C62", dec!(100)).build())
        .totals(HeaderMonetarySummation::new(dec!(100), dec!(20), dec!(120)))
        .build();

    let tree = assemble(&doc, Profile::Minimum).unwrap();
    let transaction = tree.find("rsm:SupplyChainTradeTransaction").unwrap();
    assert_eq!(
        names(transaction),
        vec![
            "ram:ApplicableHeaderTradeAgreement",
            "ram:ApplicableHeaderTradeDelivery",
            "ram:ApplicableHeaderTradeSettlement",
        ]
    );
    assert!(tree.find("rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeDelivery").unwrap().is_empty());
}

#[test]
fn basic_wl_has_references_but_no_lines() {
    let tree = assemble(&invoice(Profile::BasicWl), Profile::BasicWl).unwrap();
    assert!(has(&tree, "ram:SellerTradeParty/ram:SpecifiedLegalOrganization/ram:ID"));
    assert!(has(&tree, "ram:BuyerOrderReferencedDocument/ram:IssuerAssignedID"));
    assert!(has(&tree, "ram:DespatchAdviceReferencedDocument"));
    assert!(has(&tree, "ram:IncludedNote"));
    assert!(!has(&tree, "ram:IncludedSupplyChainTradeLineItem"));
    assert!(!has(&tree, "ram:SellerTaxRepresentativeTradeParty"));
    assert!(!has(&tree, "ram:DefinedTradeContact"));
    assert!(!has(&tree, "ram:TradingBusinessName"));
}

#[test]
fn basic_adds_line_items() {
    let tree = assemble(&invoice(Profile::Basic), Profile::Basic).unwrap();
    let transaction = tree.find("rsm:SupplyChainTradeTransaction").unwrap();
    assert_eq!(
        names(transaction),
        vec![
            "ram:IncludedSupplyChainTradeLineItem",
            "ram:IncludedSupplyChainTradeLineItem",
            "ram:ApplicableHeaderTradeAgreement",
            "ram:ApplicableHeaderTradeDelivery",
            "ram:ApplicableHeaderTradeSettlement",
        ]
    );
    assert!(!has(&tree, "ram:SellerTaxRepresentativeTradeParty"));
}

#[test]
fn en16931_keeps_everything_supplied() {
    let tree = assemble(&invoice(Profile::EN16931), Profile::EN16931).unwrap();
    for needle in [
        "ram:SellerTradeParty/ram:SpecifiedLegalOrganization/ram:TradingBusinessName",
        "ram:SellerTradeParty/ram:DefinedTradeContact/ram:EmailURIUniversalCommunication/ram:URIID",
        "ram:SellerTradeParty/ram:Description",
        "ram:SellerTaxRepresentativeTradeParty/ram:PostalTradeAddress/ram:CountryID",
        "ram:ContractReferencedDocument/ram:IssuerAssignedID",
        "ram:ActualDeliverySupplyChainEvent/ram:OccurrenceDateTime/udt:DateTimeString",
        "ram:SpecifiedTradePaymentTerms/ram:DueDateDateTime",
    ] {
        assert!(has(&tree, needle), "missing {needle}");
    }
}

#[test]
fn line_allowances_only_at_en16931() {
    let with_allowance = |profile| {
        let mut doc = invoice(profile);
        doc.transaction.line_items[0] =
            LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(10))
                .tax(TaxCategory::StandardRate, dec!(20))
                .add_allowance(TradeAllowanceCharge {
                    reason_code: Some("95".into()),
                    ..TradeAllowanceCharge::allowance(dec!(5))
                })
                .build();
        doc
    };

    let basic = assemble(&with_allowance(Profile::Basic), Profile::Basic).unwrap();
    assert!(!has(&basic, "ram:SpecifiedLineTradeSettlement/ram:SpecifiedTradeAllowanceCharge"));

    let full = assemble(&with_allowance(Profile::EN16931), Profile::EN16931).unwrap();
    assert!(has(
        &full,
        "ram:SpecifiedLineTradeSettlement/ram:SpecifiedTradeAllowanceCharge/ram:ReasonCode"
    ));
}

// --- Mandatory fields ---

#[test]
fn en16931_without_seller_legal_organization() {
    let mut doc = invoice(Profile::EN16931);
    doc.transaction.agreement.seller.legal_organization = None;

    let err = assemble(&doc, Profile::EN16931).unwrap_err();
    assert_eq!(
        err,
        FacturXError::MissingMandatoryField {
            path: format!(
                "{}/ram:SellerTradeParty/ram:SpecifiedLegalOrganization",
                agreement_path()
            ),
            profile: Profile::EN16931,
        }
    );

    doc.context.guideline = Profile::Minimum;
    assert!(assemble(&doc, Profile::Minimum).is_ok());
}

#[test]
fn first_failure_in_document_order_wins() {
    let mut doc = invoice(Profile::Basic);
    doc.document.id = "   ".into();
    doc.transaction.agreement.seller.name = None;

    let err = assemble(&doc, Profile::Basic).unwrap_err();
    assert_eq!(err.path(), Some(format!("{DOC}/ram:ID").as_str()));
}

#[test]
fn header_allowance_needs_category_tax() {
    let mut doc = invoice(Profile::BasicWl);
    doc.transaction
        .settlement
        .allowance_charges
        .push(TradeAllowanceCharge::allowance(dec!(10)));

    let err = assemble(&doc, Profile::BasicWl).unwrap_err();
    assert_eq!(
        err.path(),
        Some(
            format!(
                "{}/ram:SpecifiedTradeAllowanceCharge/ram:CategoryTradeTax",
                settlement_path()
            )
            .as_str()
        )
    );

    doc.transaction.settlement.allowance_charges[0].category_tax =
        Some(TradeTax::vat(TaxCategory::StandardRate, dec!(20)));
    let tree = assemble(&doc, Profile::BasicWl).unwrap();
    let allowance = tree
        .find("rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeSettlement/ram:SpecifiedTradeAllowanceCharge")
        .unwrap();
    assert_eq!(
        names(allowance),
        vec!["ram:ChargeIndicator", "ram:ActualAmount", "ram:CategoryTradeTax"]
    );
    assert_eq!(
        allowance.find("ram:ChargeIndicator/udt:Indicator").and_then(|e| e.text()),
        Some("false")
    );
}

#[test]
fn tax_total_in_accounting_currency_needs_currency_code() {
    let mut doc = invoice(Profile::EN16931);
    doc.transaction
        .settlement
        .monetary_summation
        .tax_total_in_tax_currency = Some(dec!(30));

    let err = assemble(&doc, Profile::EN16931).unwrap_err();
    assert_eq!(
        err.path(),
        Some(format!("{}/ram:TaxCurrencyCode", settlement_path()).as_str())
    );

    doc.transaction.settlement.tax_currency_code = Some("EUR".into());
    let tree = assemble(&doc, Profile::EN16931).unwrap();
    let sums = tree
        .find("rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeSettlement/ram:SpecifiedTradeSettlementHeaderMonetarySummation")
        .unwrap();
    assert_eq!(sums.children_named("ram:TaxTotalAmount").count(), 2);
}

// --- Line totals, guideline and empty transactions ---

#[test]
fn line_total_of_ten_times_ten() {
    let tree = assemble(&invoice(Profile::Basic), Profile::Basic).unwrap();
    let line = tree
        .find("rsm:SupplyChainTradeTransaction")
        .and_then(|t| t.children_named("ram:IncludedSupplyChainTradeLineItem").next())
        .unwrap();
    assert_eq!(
        text(
            line,
            "ram:SpecifiedLineTradeSettlement/ram:SpecifiedTradeSettlementLineMonetarySummation/ram:LineTotalAmount"
        ),
        Some("100.00")
    );
    assert_eq!(
        text(line, "ram:SpecifiedLineTradeAgreement/ram:NetPriceProductTradePrice/ram:ChargeAmount"),
        Some("10.00")
    );
    let quantity = line
        .find("ram:SpecifiedLineTradeDelivery/ram:BilledQuantity")
        .unwrap();
    assert_eq!(quantity.text(), Some("10.00"));
    assert_eq!(quantity.attribute("unitCode"), Some("HUR"));
}

#[test]
fn guideline_must_match_requested_profile() {
    let doc = invoice(Profile::Basic);
    let err = assemble(&doc, Profile::EN16931).unwrap_err();
    assert_eq!(
        err,
        FacturXError::ProfileMismatch {
            declared: Profile::Basic,
            requested: Profile::EN16931,
        }
    );
    assert_eq!(err.path(), None);
}

#[test]
fn no_line_items_at_any_profile() {
    for profile in [
        Profile::Minimum,
        Profile::BasicWl,
        Profile::Basic,
        Profile::EN16931,
    ] {
        let mut doc = invoice(profile);
        doc.transaction.line_items.clear();
        let err = assemble(&doc, profile).unwrap_err();
        assert_eq!(
            err,
            FacturXError::EmptyTransaction {
                path: format!("{TX}/ram:IncludedSupplyChainTradeLineItem"),
            },
            "{profile}"
        );
    }
}

// --- Wire forms ---

#[test]
fn context_and_header_leaves() {
    let tree = assemble(&invoice(Profile::EN16931), Profile::EN16931).unwrap();
    assert_eq!(
        text(
            &tree,
            "rsm:ExchangedDocumentContext/ram:GuidelineSpecifiedDocumentContextParameter/ram:ID"
        ),
        Some("urn:cen.eu:en16931:2017")
    );
    assert_eq!(text(&tree, "rsm:ExchangedDocument/ram:TypeCode"), Some("380"));

    let issued = tree
        .find("rsm:ExchangedDocument/ram:IssueDateTime/udt:DateTimeString")
        .unwrap();
    assert_eq!(issued.text(), Some("20240615"));
    assert_eq!(issued.attribute("format"), Some("102"));
}

#[test]
fn settlement_children_in_schema_order() {
    let mut doc = invoice(Profile::EN16931);
    // Set in reverse schema order; emission order must not follow it.
    doc.transaction.settlement.receivable_account = Some("6064".into());
    doc.transaction.settlement.billing_period = Some(SpecifiedPeriod {
        start: Some(date(2024, 6, 1)),
        end: Some(date(2024, 6, 30)),
    });
    doc.transaction.settlement.payment_reference = Some("FA-2024-042".into());

    let tree = assemble(&doc, Profile::EN16931).unwrap();
    let settlement = tree
        .find("rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeSettlement")
        .unwrap();
    assert_eq!(
        names(settlement),
        vec![
            "ram:PaymentReference",
            "ram:InvoiceCurrencyCode",
            "ram:SpecifiedTradeSettlementPaymentMeans",
            "ram:ApplicableTradeTax",
            "ram:BillingSpecifiedPeriod",
            "ram:SpecifiedTradePaymentTerms",
            "ram:SpecifiedTradeSettlementHeaderMonetarySummation",
            "ram:ReceivableSpecifiedTradeAccountingAccount",
        ]
    );

    let sums = settlement
        .child("ram:SpecifiedTradeSettlementHeaderMonetarySummation")
        .unwrap();
    assert_eq!(
        names(sums),
        vec![
            "ram:LineTotalAmount",
            "ram:TaxBasisTotalAmount",
            "ram:TaxTotalAmount",
            "ram:GrandTotalAmount",
            "ram:DuePayableAmount",
        ]
    );
    let tax_total = sums.child("ram:TaxTotalAmount").unwrap();
    assert_eq!(tax_total.text(), Some("30.00"));
    assert_eq!(tax_total.attribute("currencyID"), Some("EUR"));
    assert_eq!(
        sums.child("ram:GrandTotalAmount").and_then(|e| e.text()),
        Some("180.00")
    );
}

#[test]
fn header_tax_breakdown() {
    let tree = assemble(&invoice(Profile::Basic), Profile::Basic).unwrap();
    let tax = tree
        .find("rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeSettlement/ram:ApplicableTradeTax")
        .unwrap();
    assert_eq!(
        names(tax),
        vec![
            "ram:CalculatedAmount",
            "ram:TypeCode",
            "ram:BasisAmount",
            "ram:CategoryCode",
            "ram:RateApplicablePercent",
        ]
    );
    assert_eq!(tax.child("ram:CategoryCode").and_then(|e| e.text()), Some("S"));
    assert_eq!(
        tax.child("ram:RateApplicablePercent").and_then(|e| e.text()),
        Some("20.00")
    );
}

#[test]
fn party_identifiers_carry_schemes() {
    let tree = assemble(&invoice(Profile::EN16931), Profile::EN16931).unwrap();
    let seller = tree
        .find("rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeAgreement/ram:SellerTradeParty")
        .unwrap();
    assert_eq!(
        names(seller),
        vec![
            "ram:ID",
            "ram:GlobalID",
            "ram:Name",
            "ram:Description",
            "ram:SpecifiedLegalOrganization",
            "ram:DefinedTradeContact",
            "ram:PostalTradeAddress",
            "ram:URIUniversalCommunication",
            "ram:SpecifiedTaxRegistration",
        ]
    );
    assert_eq!(
        seller.child("ram:GlobalID").and_then(|e| e.attribute("schemeID")),
        Some("0088")
    );
    assert_eq!(
        seller
            .find("ram:SpecifiedLegalOrganization/ram:ID")
            .and_then(|e| e.attribute("schemeID")),
        Some("0002")
    );
    assert_eq!(
        seller
            .find("ram:SpecifiedTaxRegistration/ram:ID")
            .and_then(|e| e.attribute("schemeID")),
        Some("VA")
    );
    assert_eq!(
        seller
            .find("ram:URIUniversalCommunication/ram:URIID")
            .and_then(|e| e.attribute("schemeID")),
        Some("EM")
    );
}

// --- Codec failures surface with paths ---

#[test]
fn unknown_currency() {
    let mut doc = invoice(Profile::Minimum);
    doc.transaction.settlement.currency_code = Some("EURO".into());
    let err = assemble(&doc, Profile::Minimum).unwrap_err();
    assert_eq!(
        err,
        FacturXError::UnknownCode {
            list: CodeList::Currency,
            value: "EURO".into(),
            path: Some(format!("{}/ram:InvoiceCurrencyCode", settlement_path())),
        }
    );
}

#[test]
fn unknown_unit_on_line() {
    let mut doc = invoice(Profile::Basic);
    doc.transaction.line_items[1]
        .delivery
        .billed_quantity
        .as_mut()
        .unwrap()
        .unit_code = "PIECES".into();

    let err = assemble(&doc, Profile::Basic).unwrap_err();
    assert!(matches!(
        err,
        FacturXError::UnknownCode {
            list: CodeList::Unit,
            ..
        }
    ));
    assert_eq!(
        err.path(),
        Some(
            format!(
                "{TX}/ram:IncludedSupplyChainTradeLineItem[2]/ram:SpecifiedLineTradeDelivery/ram:BilledQuantity/@unitCode"
            )
            .as_str()
        )
    );

    // Lines are not emitted at BASIC WL, so their codes are never checked.
    doc.context.guideline = Profile::BasicWl;
    assert!(assemble(&doc, Profile::BasicWl).is_ok());
}

#[test]
fn amount_with_too_many_decimals() {
    let mut doc = invoice(Profile::Minimum);
    doc.transaction.settlement.monetary_summation.grand_total = Some(dec!(180.001));
    let err = assemble(&doc, Profile::Minimum).unwrap_err();
    assert!(matches!(err, FacturXError::Encoding { .. }));
    assert_eq!(
        err.path(),
        Some(
            format!(
                "{}/ram:SpecifiedTradeSettlementHeaderMonetarySummation/ram:GrandTotalAmount",
                settlement_path()
            )
            .as_str()
        )
    );
}

#[test]
fn amount_too_large_for_two_decimals() {
    let mut doc = invoice(Profile::Minimum);
    doc.transaction.settlement.monetary_summation.grand_total = Some(Decimal::MAX);
    let err = assemble(&doc, Profile::Minimum).unwrap_err();
    assert!(matches!(err, FacturXError::Encoding { .. }));
    assert_eq!(
        err.path(),
        Some(
            format!(
                "{}/ram:SpecifiedTradeSettlementHeaderMonetarySummation/ram:GrandTotalAmount",
                settlement_path()
            )
            .as_str()
        )
    );
}

#[test]
fn attachment_payload_must_not_be_empty() {
    let attached = |profile, content: &str| {
        InvoiceBuilder::new(profile, "FA-1", date(2024, 6, 15))
            .seller(seller())
            .buyer(buyer())
            .add_additional_document(ReferencedDocument {
                name: Some("Relevé d'heures".into()),
                attachment: Some(BinaryObject {
                    content: content.into(),
                    mime_code: "application/pdf".into(),
                    filename: "releve.pdf".into(),
                }),
                ..ReferencedDocument::new("ANX-1")
            })
            .add_tax(TradeTax::vat_breakdown(
                TaxCategory::StandardRate,
                dec!(20),
                dec!(100),
                dec!(20),
            ))
            .add_line(
                LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(10))
                    .tax(TaxCategory::StandardRate, dec!(20))
                    .build(),
            )
            .totals(HeaderMonetarySummation {
                line_total: Some(dec!(100)),
                ..HeaderMonetarySummation::new(dec!(100), dec!(20), dec!(120))
            })
            .build()
    };

    let err = assemble(&attached(Profile::EN16931, ""), Profile::EN16931).unwrap_err();
    assert_eq!(
        err,
        FacturXError::Encoding {
            path: format!(
                "{}/ram:AdditionalReferencedDocument/ram:AttachmentBinaryObject",
                agreement_path()
            ),
            reason: "empty attachment payload".into(),
        }
    );

    let tree = assemble(&attached(Profile::EN16931, "JVBERi0xLjQK"), Profile::EN16931).unwrap();
    let object = tree
        .find("rsm:SupplyChainTradeTransaction/ram:ApplicableHeaderTradeAgreement/ram:AdditionalReferencedDocument/ram:AttachmentBinaryObject")
        .unwrap();
    assert_eq!(object.text(), Some("JVBERi0xLjQK"));
    assert_eq!(object.attribute("mimeCode"), Some("application/pdf"));
    assert_eq!(object.attribute("filename"), Some("releve.pdf"));

    // Additional documents start at EN 16931: the broken payload is never looked at.
    assert!(assemble(&attached(Profile::Basic, ""), Profile::Basic).is_ok());
}
