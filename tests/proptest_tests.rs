//! Property-based tests for assembly.
//!
//! Run with: `cargo test --test proptest_tests`

#![cfg(feature = "facturx")]

use std::collections::BTreeSet;

use chrono::NaiveDate;
use facturx::core::*;
use facturx::facturx::{Element, assemble};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Optional header data a caller may or may not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extra {
    Note,
    BuyerReference,
    BuyerOrder,
    Contract,
    DeliveryDate,
    DueDate,
    BillingPeriod,
    PaymentReference,
    ReceivableAccount,
    SellerContact,
}

const EXTRAS: [Extra; 10] = [
    Extra::Note,
    Extra::BuyerReference,
    Extra::BuyerOrder,
    Extra::Contract,
    Extra::DeliveryDate,
    Extra::DueDate,
    Extra::BillingPeriod,
    Extra::PaymentReference,
    Extra::ReceivableAccount,
    Extra::SellerContact,
];

fn apply(builder: InvoiceBuilder, extra: Extra) -> InvoiceBuilder {
    match extra {
        Extra::Note => builder.note("Escompte pour paiement anticipé: néant"),
        Extra::BuyerReference => builder.buyer_reference("SERVICE-ACHATS"),
        Extra::BuyerOrder => builder.buyer_order("PO-2024-17"),
        Extra::Contract => builder.contract("CT-9"),
        Extra::DeliveryDate => builder.delivery_date(date(2024, 5, 31)),
        Extra::DueDate => builder.due_date(date(2024, 7, 1)),
        Extra::BillingPeriod => builder.billing_period(date(2024, 5, 1), date(2024, 5, 31)),
        Extra::PaymentReference => builder.payment_reference("FA-PROP"),
        Extra::ReceivableAccount => builder.receivable_account("6226"),
        Extra::SellerContact => builder,
    }
}

fn seller(contact: bool) -> TradeParty {
    let mut party = PartyBuilder::new("Lapin SARL")
        .legal_organization("123456789", Some("0002"))
        .address(AddressBuilder::new("FR").postcode("75002").city("Paris").build())
        .vat_id("FR11123456789");
    if contact {
        party = party.contact(TradeContact {
            person_name: Some("Marie Martin".into()),
            email: Some("marie@lapin.fr".into()),
            ..TradeContact::default()
        });
    }
    party.build()
}

#[derive(Debug, Clone)]
struct LineInput {
    quantity: Decimal,
    price: Decimal,
    unit: &'static str,
    category: TaxCategory,
    rate: Decimal,
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_profile() -> impl Strategy<Value = Profile> {
    prop_oneof![
        Just(Profile::Minimum),
        Just(Profile::BasicWl),
        Just(Profile::Basic),
        Just(Profile::EN16931),
    ]
}

/// A price between 0.01 and 9999.99.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..500).prop_map(Decimal::from)
}

fn arb_line() -> impl Strategy<Value = LineInput> {
    (
        arb_quantity(),
        arb_price(),
        prop::sample::select(vec!["C62", "HUR", "KGM", "H87"]),
        prop::sample::select(vec![
            (TaxCategory::StandardRate, dec!(20)),
            (TaxCategory::StandardRate, dec!(5.5)),
            (TaxCategory::ZeroRated, dec!(0)),
        ]),
    )
        .prop_map(|(quantity, price, unit, (category, rate))| LineInput {
            quantity,
            price,
            unit,
            category,
            rate,
        })
}

fn arb_extras() -> impl Strategy<Value = Vec<Extra>> {
    prop::sample::subsequence(EXTRAS.to_vec(), 0..=EXTRAS.len())
}

fn build(profile: Profile, lines: &[LineInput], extras: &[Extra]) -> InvoiceDocument {
    let contact = extras.contains(&Extra::SellerContact);
    let mut builder = InvoiceBuilder::new(profile, "FA-PROP", date(2024, 6, 1))
        .seller(seller(contact))
        .buyer(
            PartyBuilder::new("Client SA")
                .address(AddressBuilder::new("FR").city("Lyon").build())
                .build(),
        )
        .sepa_credit_transfer("FR7630006000011234567890189");

    let mut line_total = Decimal::ZERO;
    let mut tax_total = Decimal::ZERO;
    for (i, input) in lines.iter().enumerate() {
        let line = LineItemBuilder::new(
            (i + 1).to_string(),
            format!("Article {}", i + 1),
            input.quantity,
            input.unit,
            input.price,
        )
        .tax(input.category, input.rate)
        .build();
        let amount = line.settlement.line_total_amount.unwrap_or_default();
        line_total += amount;
        let tax = (amount * input.rate / dec!(100)).round_dp(2);
        tax_total += tax;
        builder = builder
            .add_tax(TradeTax::vat_breakdown(input.category, input.rate, amount, tax))
            .add_line(line);
    }

    for extra in extras {
        builder = apply(builder, *extra);
    }

    builder
        .totals(HeaderMonetarySummation {
            line_total: Some(line_total),
            ..HeaderMonetarySummation::new(line_total, tax_total, line_total + tax_total)
        })
        .build()
}

/// Element paths without sibling indices.
fn shape(tree: &Element) -> BTreeSet<String> {
    tree.paths()
        .into_iter()
        .map(|p| {
            p.split('/')
                .map(|seg| seg.split('[').next().unwrap_or(seg))
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

// ── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn assembly_is_deterministic(
        profile in arb_profile(),
        lines in prop::collection::vec(arb_line(), 1..6),
        extras in arb_extras(),
    ) {
        let doc = build(profile, &lines, &extras);
        let first = assemble(&doc, profile).unwrap();
        let second = assemble(&doc.clone(), profile).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn higher_profiles_only_add_elements(
        lines in prop::collection::vec(arb_line(), 1..6),
        extras in arb_extras(),
    ) {
        let profiles = [Profile::Minimum, Profile::BasicWl, Profile::Basic, Profile::EN16931];
        let shapes: Vec<BTreeSet<String>> = profiles
            .iter()
            .map(|p| shape(&assemble(&build(*p, &lines, &extras), *p).unwrap()))
            .collect();
        for pair in shapes.windows(2) {
            let missing: Vec<_> = pair[0].difference(&pair[1]).collect();
            prop_assert!(missing.is_empty(), "dropped at higher profile: {:?}", missing);
        }
    }

    #[test]
    fn output_order_ignores_input_order(
        profile in arb_profile(),
        lines in prop::collection::vec(arb_line(), 1..4),
        extras in arb_extras().prop_shuffle(),
    ) {
        let mut sorted = extras.clone();
        sorted.sort_by_key(|e| EXTRAS.iter().position(|x| x == e));
        let a = assemble(&build(profile, &lines, &extras), profile).unwrap();
        let b = assemble(&build(profile, &lines, &sorted), profile).unwrap();
        prop_assert_eq!(a.paths(), b.paths());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn line_amounts_have_two_decimals(
        lines in prop::collection::vec(arb_line(), 1..6),
    ) {
        let doc = build(Profile::Basic, &lines, &[]);
        let tree = assemble(&doc, Profile::Basic).unwrap();
        let transaction = tree.find("rsm:SupplyChainTradeTransaction").unwrap();
        for line in transaction.children_named("ram:IncludedSupplyChainTradeLineItem") {
            let total = line
                .find("ram:SpecifiedLineTradeSettlement/ram:SpecifiedTradeSettlementLineMonetarySummation/ram:LineTotalAmount")
                .and_then(|e| e.text())
                .unwrap();
            let decimals = total.split('.').nth(1).map(str::len);
            prop_assert_eq!(decimals, Some(2), "{}", total);
        }
    }

    #[test]
    fn lines_keep_caller_order(
        lines in prop::collection::vec(arb_line(), 1..8),
    ) {
        let doc = build(Profile::EN16931, &lines, &[]);
        let tree = assemble(&doc, Profile::EN16931).unwrap();
        let ids: Vec<String> = tree
            .find("rsm:SupplyChainTradeTransaction")
            .unwrap()
            .children_named("ram:IncludedSupplyChainTradeLineItem")
            .filter_map(|l| l.find("ram:AssociatedDocumentLineDocument/ram:LineID"))
            .filter_map(|e| e.text().map(str::to_string))
            .collect();
        let expected: Vec<String> = (1..=lines.len()).map(|i| i.to_string()).collect();
        prop_assert_eq!(ids, expected);
    }
}
