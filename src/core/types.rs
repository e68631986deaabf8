use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codes::*;
use super::profile::Profile;

/// Root aggregate handed to the assembler.
///
/// The three parts are plain fields, so a document can never lack one of
/// them. Optional leaves are `Option`, empty `Vec` or a blank string; the
/// assembler decides per profile whether their absence is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub context: ExchangedDocumentContext,
    pub document: ExchangedDocument,
    pub transaction: SupplyChainTradeTransaction,
}

/// `rsm:ExchangedDocumentContext`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangedDocumentContext {
    /// BT-23: Business process type.
    #[serde(default)]
    pub business_process: Option<String>,
    /// BT-24: Declared guideline. Must equal the profile requested of the assembler.
    pub guideline: Profile,
}

/// `rsm:ExchangedDocument`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExchangedDocument {
    /// BT-1: Invoice number.
    pub id: String,
    /// BT-3: Invoice type code (UNTDID 1001).
    pub type_code: Option<InvoiceTypeCode>,
    /// BT-2: Issue date.
    pub issue_date: Option<NaiveDate>,
    /// BG-1: Invoice notes, in caller order.
    pub notes: Vec<Note>,
}

/// BG-1: Free-text note with optional subject qualifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Note {
    /// BT-22: Note text.
    pub content: String,
    /// BT-21: Subject code (UNTDID 4451).
    pub subject_code: Option<NoteSubjectCode>,
}

/// Seller, buyer, tax representative, ship-to or payee.
///
/// One type serves every role; which children are emitted depends on the
/// role and the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeParty {
    /// BT-29 / BT-46 / BT-60 / BT-71: Party identifiers without scheme.
    pub ids: Vec<String>,
    /// Party identifiers with scheme (e.g. GLN "0088").
    pub global_ids: Vec<GlobalId>,
    /// BT-27 / BT-44 / BT-59 / BT-62 / BT-70: Name.
    pub name: Option<String>,
    /// BT-33: Additional legal information (seller only).
    pub description: Option<String>,
    /// BT-30 / BT-47 / BT-61: Legal registration.
    pub legal_organization: Option<LegalOrganization>,
    /// BG-6 / BG-9: Contact.
    pub contact: Option<TradeContact>,
    /// BG-5 / BG-8 / BG-12 / BG-15: Postal address.
    pub address: Option<TradeAddress>,
    /// BT-34 / BT-49: Electronic address.
    pub electronic_address: Option<ElectronicAddress>,
    /// BT-31 / BT-48 / BT-63: VAT identifier (schemeID "VA").
    pub vat_id: Option<String>,
    /// BT-32: Local tax number (schemeID "FC").
    pub tax_number: Option<String>,
}

/// An identifier qualified by its scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalId {
    /// ISO 6523 ICD scheme (e.g. "0088" for GLN).
    pub scheme_id: String,
    pub id: String,
}

/// `ram:SpecifiedLegalOrganization`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegalOrganization {
    /// Registration identifier (e.g. SIREN).
    pub id: String,
    /// ISO 6523 scheme of `id`, "0002" for SIREN.
    pub scheme_id: Option<String>,
    /// BT-28 / BT-45: Trading name.
    pub trading_business_name: Option<String>,
}

/// `ram:DefinedTradeContact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeContact {
    pub person_name: Option<String>,
    pub department_name: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
}

/// `ram:PostalTradeAddress`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeAddress {
    pub postcode: Option<String>,
    pub line_one: Option<String>,
    pub line_two: Option<String>,
    pub line_three: Option<String>,
    pub city: Option<String>,
    /// ISO 3166-1 alpha-2.
    pub country_code: String,
    pub subdivision: Option<String>,
}

/// Electronic address with scheme identifier (EAS).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicAddress {
    /// Scheme identifier (e.g. "EM" for email, "0225" for SIREN routing).
    pub scheme: String,
    pub value: String,
}

/// `rsm:SupplyChainTradeTransaction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyChainTradeTransaction {
    /// BG-25: Invoice lines, in caller order.
    pub line_items: Vec<LineItem>,
    pub agreement: HeaderTradeAgreement,
    pub delivery: HeaderTradeDelivery,
    pub settlement: HeaderTradeSettlement,
}

/// `ram:ApplicableHeaderTradeAgreement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTradeAgreement {
    /// BT-10: Buyer reference.
    pub buyer_reference: Option<String>,
    /// BG-4: Seller.
    pub seller: TradeParty,
    /// BG-7: Buyer.
    pub buyer: TradeParty,
    /// BG-11: Seller tax representative.
    pub seller_tax_representative: Option<TradeParty>,
    /// BT-13: Purchase order reference.
    pub buyer_order: Option<ReferencedDocument>,
    /// BT-12: Contract reference.
    pub contract: Option<ReferencedDocument>,
    /// BG-24 / BT-17 / BT-18: Additional supporting documents.
    pub additional_documents: Vec<ReferencedDocument>,
    /// BT-11: Project reference.
    pub procuring_project: Option<ProcuringProject>,
}

/// `ram:SpecifiedProcuringProject`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcuringProject {
    pub id: String,
    pub name: String,
}

/// `ram:ApplicableHeaderTradeDelivery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTradeDelivery {
    /// BG-13: Deliver-to party.
    pub ship_to: Option<TradeParty>,
    /// BT-72: Actual delivery date.
    pub actual_delivery_date: Option<NaiveDate>,
    /// BT-16: Despatch advice reference.
    pub despatch_advice: Option<ReferencedDocument>,
    /// BT-15: Receiving advice reference.
    pub receiving_advice: Option<ReferencedDocument>,
}

/// `ram:ApplicableHeaderTradeSettlement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderTradeSettlement {
    /// BT-90: Bank assigned creditor identifier.
    pub creditor_reference_id: Option<String>,
    /// BT-83: Remittance information.
    pub payment_reference: Option<String>,
    /// BT-6: VAT accounting currency.
    pub tax_currency_code: Option<String>,
    /// BT-5: Invoice currency (ISO 4217).
    pub currency_code: Option<String>,
    /// BG-10: Payee.
    pub payee: Option<TradeParty>,
    /// BG-16: Payment instructions.
    pub payment_means: Vec<PaymentMeans>,
    /// BG-23: VAT breakdown.
    pub taxes: Vec<TradeTax>,
    /// BG-14: Invoicing period.
    pub billing_period: Option<SpecifiedPeriod>,
    /// BG-20 / BG-21: Document level allowances and charges.
    pub allowance_charges: Vec<TradeAllowanceCharge>,
    /// BT-20 / BT-9 / BT-89: Payment terms.
    pub payment_terms: Option<PaymentTerms>,
    /// BG-22: Document totals.
    pub monetary_summation: HeaderMonetarySummation,
    /// BG-3: Preceding invoice reference.
    pub preceding_invoice: Option<ReferencedDocument>,
    /// BT-19: Buyer accounting reference.
    pub receivable_account: Option<String>,
}

/// `ram:SpecifiedTradeSettlementPaymentMeans`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMeans {
    /// BT-81: Payment means type code (UNTDID 4461).
    pub type_code: Option<PaymentMeansCode>,
    /// BT-82: Payment means text.
    pub information: Option<String>,
    /// BG-18: Payment card.
    pub card: Option<FinancialCard>,
    /// BT-91: Debited account (direct debit).
    pub payer_iban: Option<String>,
    /// BG-17: Credit transfer account.
    pub payee_account: Option<CreditorAccount>,
    /// BT-86: Payment service provider identifier.
    pub payee_bic: Option<String>,
}

/// `ram:ApplicableTradeSettlementFinancialCard`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialCard {
    /// BT-87: Primary account number (last digits only).
    pub id: String,
    /// BT-88: Card holder name.
    pub cardholder_name: Option<String>,
}

/// `ram:PayeePartyCreditorFinancialAccount`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditorAccount {
    /// BT-84: IBAN.
    pub iban: Option<String>,
    /// BT-85: Account name.
    pub account_name: Option<String>,
    /// BT-84: Non-IBAN account identifier.
    pub proprietary_id: Option<String>,
}

/// `ram:SpecifiedTradePaymentTerms`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentTerms {
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub direct_debit_mandate_id: Option<String>,
}

/// `ram:BillingSpecifiedPeriod`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecifiedPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// `ram:ApplicableTradeTax` (header breakdown, line tax or allowance tax).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeTax {
    /// BT-117: Tax amount for the category.
    pub calculated_amount: Option<Decimal>,
    /// Tax type, "VAT" for EN 16931.
    pub type_code: Option<TaxTypeCode>,
    /// BT-120: Exemption reason text.
    pub exemption_reason: Option<String>,
    /// BT-116: Taxable amount.
    pub basis_amount: Option<Decimal>,
    /// BT-118 / BT-151 / BT-95 / BT-102: Category code (UNTDID 5305).
    pub category_code: Option<TaxCategory>,
    /// BT-121: Exemption reason code (VATEX).
    pub exemption_reason_code: Option<String>,
    /// BT-7: Tax point date.
    pub tax_point_date: Option<NaiveDate>,
    /// BT-8: Tax point date code.
    pub due_date_type_code: Option<TimeReferenceCode>,
    /// BT-119 / BT-152: Rate in percent.
    pub rate_applicable_percent: Option<Decimal>,
}

impl TradeTax {
    /// VAT at the given category and rate, without amounts (line or allowance tax).
    pub fn vat(category: TaxCategory, rate: Decimal) -> Self {
        Self {
            type_code: Some(TaxTypeCode::ValueAddedTax),
            category_code: Some(category),
            rate_applicable_percent: Some(rate),
            ..Self::default()
        }
    }

    /// A VAT breakdown entry for the header settlement.
    pub fn vat_breakdown(
        category: TaxCategory,
        rate: Decimal,
        basis_amount: Decimal,
        calculated_amount: Decimal,
    ) -> Self {
        Self {
            calculated_amount: Some(calculated_amount),
            basis_amount: Some(basis_amount),
            ..Self::vat(category, rate)
        }
    }
}

/// `ram:SpecifiedTradeAllowanceCharge` / `ram:AppliedTradeAllowanceCharge`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeAllowanceCharge {
    /// True = charge, false = allowance.
    pub is_charge: bool,
    pub calculation_percent: Option<Decimal>,
    pub basis_amount: Option<Decimal>,
    pub actual_amount: Option<Decimal>,
    /// UNTDID 5189 for allowances, UNTDID 7161 for charges.
    pub reason_code: Option<String>,
    pub reason: Option<String>,
    /// Header level only.
    pub category_tax: Option<TradeTax>,
}

impl TradeAllowanceCharge {
    pub fn allowance(amount: Decimal) -> Self {
        Self {
            is_charge: false,
            actual_amount: Some(amount),
            ..Self::default()
        }
    }

    pub fn charge(amount: Decimal) -> Self {
        Self {
            is_charge: true,
            actual_amount: Some(amount),
            ..Self::default()
        }
    }
}

/// BG-22: `ram:SpecifiedTradeSettlementHeaderMonetarySummation`.
///
/// Totals are taken as given. See [`crate::core::validate_arithmetic`] for an
/// opt-in consistency check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderMonetarySummation {
    /// BT-106: Sum of line net amounts.
    pub line_total: Option<Decimal>,
    /// BT-108: Sum of charges.
    pub charge_total: Option<Decimal>,
    /// BT-107: Sum of allowances.
    pub allowance_total: Option<Decimal>,
    /// BT-109: Total without VAT.
    pub tax_basis_total: Option<Decimal>,
    /// BT-110: Total VAT in invoice currency.
    pub tax_total: Option<Decimal>,
    /// BT-111: Total VAT in accounting currency.
    pub tax_total_in_tax_currency: Option<Decimal>,
    /// BT-114: Rounding amount.
    pub rounding: Option<Decimal>,
    /// BT-112: Total with VAT.
    pub grand_total: Option<Decimal>,
    /// BT-113: Paid amount.
    pub total_prepaid: Option<Decimal>,
    /// BT-115: Amount due for payment.
    pub due_payable: Option<Decimal>,
}

impl HeaderMonetarySummation {
    /// The totals every profile needs.
    pub fn new(tax_basis_total: Decimal, tax_total: Decimal, grand_total: Decimal) -> Self {
        Self {
            tax_basis_total: Some(tax_basis_total),
            tax_total: Some(tax_total),
            grand_total: Some(grand_total),
            due_payable: Some(grand_total),
            ..Self::default()
        }
    }
}

/// `ram:*ReferencedDocument`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferencedDocument {
    pub issuer_assigned_id: Option<String>,
    /// BT-124: External document location.
    pub uri_id: Option<String>,
    /// BT-132: Referenced line.
    pub line_id: Option<String>,
    pub type_code: Option<DocumentTypeCode>,
    /// BT-123: Description.
    pub name: Option<String>,
    /// BT-125: Attached document.
    pub attachment: Option<BinaryObject>,
    /// BT-18: Identifier scheme of an invoiced object.
    pub reference_type_code: Option<String>,
    pub issue_date: Option<NaiveDate>,
}

impl ReferencedDocument {
    pub fn new(issuer_assigned_id: impl Into<String>) -> Self {
        Self {
            issuer_assigned_id: Some(issuer_assigned_id.into()),
            ..Self::default()
        }
    }
}

/// Base64 payload of an attached document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryObject {
    /// Base64 text, emitted as is.
    pub content: String,
    pub mime_code: String,
    pub filename: String,
}

/// BG-25: `ram:IncludedSupplyChainTradeLineItem`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// BT-126: Line identifier.
    pub line_id: String,
    /// BT-127: Line note.
    pub note: Option<String>,
    pub product: TradeProduct,
    pub agreement: LineTradeAgreement,
    pub delivery: LineTradeDelivery,
    pub settlement: LineTradeSettlement,
}

/// BG-31: `ram:SpecifiedTradeProduct`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradeProduct {
    /// BT-157: Standard identifier.
    pub global_id: Option<GlobalId>,
    /// BT-155
    pub seller_assigned_id: Option<String>,
    /// BT-156
    pub buyer_assigned_id: Option<String>,
    /// BT-153: Item name.
    pub name: Option<String>,
    /// BT-154
    pub description: Option<String>,
    /// BG-32: Item attributes.
    pub characteristics: Vec<ProductCharacteristic>,
    /// BT-158: Classification codes.
    pub classifications: Vec<ProductClassification>,
    /// BT-159: Country of origin.
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCharacteristic {
    pub description: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductClassification {
    pub class_code: String,
    /// UNTDID 7143 scheme (e.g. "STI").
    pub list_id: Option<String>,
    pub list_version_id: Option<String>,
}

/// `ram:SpecifiedLineTradeAgreement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineTradeAgreement {
    /// BT-132: Referenced purchase order line.
    pub buyer_order_line_id: Option<String>,
    /// BT-148: Gross price.
    pub gross_price: Option<TradePrice>,
    /// BT-146: Net price.
    pub net_price: Option<TradePrice>,
}

/// Unit price with optional basis quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TradePrice {
    pub charge_amount: Decimal,
    /// BT-149 / BT-150
    pub basis_quantity: Option<Quantity>,
    /// BT-147: Price discount (gross price only).
    pub applied_allowance: Option<TradeAllowanceCharge>,
}

impl TradePrice {
    pub fn new(charge_amount: Decimal) -> Self {
        Self {
            charge_amount,
            ..Self::default()
        }
    }
}

/// A quantity with its UN/ECE Rec 20 unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: Decimal,
    pub unit_code: String,
}

/// `ram:SpecifiedLineTradeDelivery`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineTradeDelivery {
    /// BT-129 / BT-130
    pub billed_quantity: Option<Quantity>,
}

/// `ram:SpecifiedLineTradeSettlement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineTradeSettlement {
    /// BG-30: Line VAT information.
    pub tax: Option<TradeTax>,
    /// BG-26: Line period.
    pub billing_period: Option<SpecifiedPeriod>,
    /// BG-27 / BG-28
    pub allowance_charges: Vec<TradeAllowanceCharge>,
    /// BT-131: Line net amount.
    pub line_total_amount: Option<Decimal>,
    /// BT-128: Invoiced object identifier.
    pub additional_document: Option<ReferencedDocument>,
    /// BT-133: Buyer accounting reference.
    pub accounting_account: Option<String>,
}
