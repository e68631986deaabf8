//! Profile lattice: the frozen table assigning every structural field the
//! profile from which it is permitted and, optionally, the profile from
//! which it is mandatory.
//!
//! Fields are variants of the closed [`Field`] enum, so the table is an
//! exhaustive `match` and every field is registered exactly once. A `None`
//! rule means the field does not exist in that position (for example a
//! description on a buyer) at any supported profile.
//!
//! Rules of nested fields are relative to their enclosing aggregate: a
//! child marked mandatory from MINIMUM is mandatory wherever its parent is
//! emitted.

use strum::{EnumIter, IntoEnumIterator};

use crate::core::Profile;

use Profile::{Basic, BasicWl, EN16931, Minimum};

/// A structural field of the CII document, identified by its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Context(ContextField),
    Document(DocumentField),
    Note(NoteField),
    Transaction(TransactionField),
    Agreement(AgreementField),
    Project(ProjectField),
    Party(PartyRole, PartyField),
    Contact(ContactField),
    Address(AddressField),
    Delivery(DeliveryField),
    Settlement(SettlementField),
    PaymentMeans(PaymentMeansField),
    PaymentTerms(PaymentTermsField),
    Period(PeriodField),
    Tax(TaxScope, TaxField),
    AllowanceCharge(ChargeScope, AllowanceChargeField),
    Summation(SummationField),
    Reference(ReferenceField),
    Line(LineField),
    Product(ProductField),
    Price(PriceKind, PriceField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ContextField {
    BusinessProcess,
    Guideline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DocumentField {
    Id,
    TypeCode,
    IssueDate,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum NoteField {
    Content,
    SubjectCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TransactionField {
    LineItems,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AgreementField {
    BuyerReference,
    Seller,
    Buyer,
    SellerTaxRepresentative,
    BuyerOrder,
    Contract,
    AdditionalDocuments,
    ProcuringProject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ProjectField {
    Id,
    Name,
}

/// The position a [`crate::core::TradeParty`] occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PartyRole {
    Seller,
    Buyer,
    SellerTaxRepresentative,
    ShipTo,
    Payee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PartyField {
    Ids,
    GlobalIds,
    Name,
    Description,
    LegalOrganization,
    LegalOrganizationId,
    TradingBusinessName,
    Contact,
    PostalAddress,
    ElectronicAddress,
    VatId,
    TaxNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ContactField {
    PersonName,
    DepartmentName,
    Telephone,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AddressField {
    Postcode,
    LineOne,
    LineTwo,
    LineThree,
    City,
    Country,
    Subdivision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DeliveryField {
    ShipTo,
    ActualDeliveryDate,
    DespatchAdvice,
    ReceivingAdvice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SettlementField {
    CreditorReferenceId,
    PaymentReference,
    TaxCurrencyCode,
    CurrencyCode,
    Payee,
    PaymentMeans,
    Taxes,
    BillingPeriod,
    AllowanceCharges,
    PaymentTerms,
    MonetarySummation,
    PrecedingInvoice,
    ReceivableAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PaymentMeansField {
    TypeCode,
    Information,
    Card,
    CardId,
    CardholderName,
    PayerAccount,
    PayeeAccount,
    PayeeIban,
    PayeeAccountName,
    PayeeProprietaryId,
    PayeeInstitution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PaymentTermsField {
    Description,
    DueDate,
    DirectDebitMandateId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PeriodField {
    Start,
    End,
}

/// Where an `ApplicableTradeTax` / `CategoryTradeTax` sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TaxScope {
    Header,
    Line,
    AllowanceCharge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum TaxField {
    CalculatedAmount,
    TypeCode,
    ExemptionReason,
    BasisAmount,
    CategoryCode,
    ExemptionReasonCode,
    TaxPointDate,
    DueDateTypeCode,
    RateApplicablePercent,
}

/// Where an allowance or charge sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ChargeScope {
    Header,
    Line,
    GrossPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AllowanceChargeField {
    ChargeIndicator,
    CalculationPercent,
    BasisAmount,
    ActualAmount,
    ReasonCode,
    Reason,
    CategoryTax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SummationField {
    LineTotal,
    ChargeTotal,
    AllowanceTotal,
    TaxBasisTotal,
    TaxTotal,
    TaxTotalInTaxCurrency,
    Rounding,
    GrandTotal,
    TotalPrepaid,
    DuePayable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ReferenceField {
    IssuerAssignedId,
    UriId,
    LineId,
    TypeCode,
    Name,
    Attachment,
    ReferenceTypeCode,
    IssueDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum LineField {
    LineId,
    Note,
    Product,
    BuyerOrderLine,
    GrossPrice,
    NetPrice,
    BilledQuantity,
    Tax,
    BillingPeriod,
    AllowanceCharges,
    LineTotal,
    AdditionalDocument,
    AccountingAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ProductField {
    GlobalId,
    SellerAssignedId,
    BuyerAssignedId,
    Name,
    Description,
    Characteristics,
    Classifications,
    OriginCountry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PriceKind {
    Gross,
    Net,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum PriceField {
    ChargeAmount,
    BasisQuantity,
    AppliedAllowance,
}

/// Profile bounds of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Lowest profile at which the field may be emitted.
    pub from: Profile,
    /// Lowest profile at which the field must be populated.
    pub required_from: Option<Profile>,
}

const fn allowed(from: Profile) -> Option<FieldRule> {
    Some(FieldRule {
        from,
        required_from: None,
    })
}

const fn required(from: Profile) -> Option<FieldRule> {
    Some(FieldRule {
        from,
        required_from: Some(from),
    })
}

const fn required_from(from: Profile, required: Profile) -> Option<FieldRule> {
    Some(FieldRule {
        from,
        required_from: Some(required),
    })
}

/// Look up the rule of `field`.
pub fn rule(field: Field) -> Option<FieldRule> {
    match field {
        Field::Context(f) => match f {
            ContextField::BusinessProcess => allowed(Minimum),
            ContextField::Guideline => required(Minimum),
        },
        Field::Document(f) => match f {
            DocumentField::Id | DocumentField::TypeCode | DocumentField::IssueDate => {
                required(Minimum)
            }
            DocumentField::Notes => allowed(BasicWl),
        },
        Field::Note(f) => match f {
            NoteField::Content => required(Minimum),
            NoteField::SubjectCode => allowed(Minimum),
        },
        // Line items are only emitted from BASIC. That at least one exists is
        // checked separately for every profile.
        Field::Transaction(TransactionField::LineItems) => allowed(Basic),
        Field::Agreement(f) => match f {
            AgreementField::BuyerReference => allowed(Minimum),
            AgreementField::Seller | AgreementField::Buyer => required(Minimum),
            AgreementField::BuyerOrder | AgreementField::Contract => allowed(BasicWl),
            AgreementField::SellerTaxRepresentative
            | AgreementField::AdditionalDocuments
            | AgreementField::ProcuringProject => allowed(EN16931),
        },
        Field::Project(_) => required(Minimum),
        Field::Party(role, f) => party_rule(role, f),
        Field::Contact(_) => allowed(Minimum),
        Field::Address(f) => match f {
            AddressField::Country => required(Minimum),
            _ => allowed(BasicWl),
        },
        Field::Delivery(f) => match f {
            DeliveryField::ShipTo
            | DeliveryField::ActualDeliveryDate
            | DeliveryField::DespatchAdvice => allowed(BasicWl),
            DeliveryField::ReceivingAdvice => allowed(EN16931),
        },
        Field::Settlement(f) => match f {
            SettlementField::CurrencyCode | SettlementField::MonetarySummation => {
                required(Minimum)
            }
            // BG-23: at least one VAT breakdown once the header carries taxes
            SettlementField::Taxes => required(BasicWl),
            SettlementField::CreditorReferenceId
            | SettlementField::PaymentReference
            | SettlementField::TaxCurrencyCode
            | SettlementField::Payee
            | SettlementField::PaymentMeans
            | SettlementField::BillingPeriod
            | SettlementField::AllowanceCharges
            | SettlementField::PaymentTerms
            | SettlementField::PrecedingInvoice
            | SettlementField::ReceivableAccount => allowed(BasicWl),
        },
        Field::PaymentMeans(f) => match f {
            PaymentMeansField::TypeCode => required(Minimum),
            PaymentMeansField::PayerAccount
            | PaymentMeansField::PayeeAccount
            | PaymentMeansField::PayeeIban
            | PaymentMeansField::PayeeProprietaryId => allowed(Minimum),
            PaymentMeansField::Information
            | PaymentMeansField::Card
            | PaymentMeansField::CardholderName
            | PaymentMeansField::PayeeAccountName
            | PaymentMeansField::PayeeInstitution => allowed(EN16931),
            PaymentMeansField::CardId => required(EN16931),
        },
        Field::PaymentTerms(_) | Field::Period(_) => allowed(Minimum),
        Field::Tax(scope, f) => tax_rule(scope, f),
        Field::AllowanceCharge(scope, f) => allowance_charge_rule(scope, f),
        Field::Summation(f) => match f {
            SummationField::TaxBasisTotal
            | SummationField::GrandTotal
            | SummationField::DuePayable => required(Minimum),
            SummationField::TaxTotal => allowed(Minimum),
            SummationField::LineTotal => required(BasicWl),
            SummationField::ChargeTotal
            | SummationField::AllowanceTotal
            | SummationField::TaxTotalInTaxCurrency
            | SummationField::TotalPrepaid => allowed(BasicWl),
            SummationField::Rounding => allowed(EN16931),
        },
        Field::Reference(f) => match f {
            ReferenceField::IssuerAssignedId => required(Minimum),
            ReferenceField::Attachment => allowed(EN16931),
            _ => allowed(Minimum),
        },
        Field::Line(f) => match f {
            LineField::LineId
            | LineField::Product
            | LineField::NetPrice
            | LineField::BilledQuantity
            | LineField::Tax
            | LineField::LineTotal => required(Basic),
            LineField::Note | LineField::GrossPrice | LineField::BillingPeriod => allowed(Basic),
            LineField::BuyerOrderLine
            | LineField::AllowanceCharges
            | LineField::AdditionalDocument
            | LineField::AccountingAccount => allowed(EN16931),
        },
        Field::Product(f) => match f {
            ProductField::Name => required(Basic),
            ProductField::GlobalId => allowed(Basic),
            _ => allowed(EN16931),
        },
        Field::Price(kind, f) => match (kind, f) {
            (_, PriceField::ChargeAmount) => required(Minimum),
            (_, PriceField::BasisQuantity) => allowed(Minimum),
            (PriceKind::Gross, PriceField::AppliedAllowance) => allowed(Minimum),
            (PriceKind::Net, PriceField::AppliedAllowance) => None,
        },
    }
}

fn party_rule(role: PartyRole, field: PartyField) -> Option<FieldRule> {
    use PartyField as F;
    use PartyRole as R;
    match (role, field) {
        (R::Seller | R::Buyer, F::Name) => required(Minimum),
        (R::Seller | R::Buyer, F::Ids | F::GlobalIds) => allowed(BasicWl),
        (R::Seller, F::Description) => allowed(EN16931),
        (R::Buyer, F::Description) => None,
        (R::Seller, F::LegalOrganization) => required(BasicWl),
        (R::Buyer, F::LegalOrganization) => allowed(BasicWl),
        (R::Seller | R::Buyer, F::LegalOrganizationId) => required(BasicWl),
        (R::Seller | R::Buyer, F::TradingBusinessName) => allowed(EN16931),
        (R::Seller | R::Buyer, F::Contact) => allowed(EN16931),
        (R::Seller, F::PostalAddress) => required_from(Minimum, BasicWl),
        (R::Buyer, F::PostalAddress) => required_from(BasicWl, EN16931),
        (R::Seller | R::Buyer, F::ElectronicAddress) => allowed(BasicWl),
        (R::Seller, F::VatId | F::TaxNumber) => allowed(Minimum),
        (R::Buyer, F::VatId) => allowed(BasicWl),
        (R::Buyer, F::TaxNumber) => None,

        (R::SellerTaxRepresentative, F::Name | F::PostalAddress | F::VatId) => required(EN16931),
        (R::SellerTaxRepresentative, _) => None,

        (R::ShipTo, F::Ids | F::GlobalIds | F::Name | F::PostalAddress) => allowed(BasicWl),
        (R::ShipTo, _) => None,

        (R::Payee, F::Name) => required(BasicWl),
        (R::Payee, F::Ids | F::GlobalIds | F::LegalOrganization) => allowed(BasicWl),
        (R::Payee, F::LegalOrganizationId) => required(BasicWl),
        (R::Payee, _) => None,
    }
}

fn tax_rule(scope: TaxScope, field: TaxField) -> Option<FieldRule> {
    use TaxField as F;
    match (scope, field) {
        (_, F::TypeCode | F::CategoryCode) => required(Minimum),
        (_, F::RateApplicablePercent) => allowed(Minimum),
        (TaxScope::Header, F::CalculatedAmount | F::BasisAmount) => required(Minimum),
        (TaxScope::Header, F::ExemptionReason | F::ExemptionReasonCode | F::DueDateTypeCode) => {
            allowed(Minimum)
        }
        (TaxScope::Header, F::TaxPointDate) => allowed(EN16931),
        (TaxScope::Line | TaxScope::AllowanceCharge, _) => None,
    }
}

fn allowance_charge_rule(scope: ChargeScope, field: AllowanceChargeField) -> Option<FieldRule> {
    use AllowanceChargeField as F;
    match (scope, field) {
        (_, F::ChargeIndicator | F::ActualAmount) => required(Minimum),
        (ChargeScope::Header, F::CategoryTax) => required(Minimum),
        (ChargeScope::Header | ChargeScope::Line, F::CalculationPercent | F::BasisAmount) => {
            allowed(Minimum)
        }
        (ChargeScope::Header | ChargeScope::Line, F::ReasonCode | F::Reason) => allowed(Minimum),
        (ChargeScope::Line, F::CategoryTax) => None,
        (ChargeScope::GrossPrice, _) => None,
    }
}

/// Lowest profile at which `field` may appear, `None` if it never does.
pub fn minimum_profile_for(field: Field) -> Option<Profile> {
    rule(field).map(|r| r.from)
}

/// Whether `field` may be emitted at `profile`.
pub fn is_allowed(field: Field, profile: Profile) -> bool {
    minimum_profile_for(field).is_some_and(|from| profile >= from)
}

/// Whether `field` must be populated at `profile`.
pub fn is_required(field: Field, profile: Profile) -> bool {
    rule(field)
        .and_then(|r| r.required_from)
        .is_some_and(|from| profile >= from)
}

impl Field {
    /// Every field of the lattice.
    pub fn all() -> Vec<Field> {
        let mut all = Vec::new();
        all.extend(ContextField::iter().map(Field::Context));
        all.extend(DocumentField::iter().map(Field::Document));
        all.extend(NoteField::iter().map(Field::Note));
        all.extend(TransactionField::iter().map(Field::Transaction));
        all.extend(AgreementField::iter().map(Field::Agreement));
        all.extend(ProjectField::iter().map(Field::Project));
        for role in PartyRole::iter() {
            all.extend(PartyField::iter().map(|f| Field::Party(role, f)));
        }
        all.extend(ContactField::iter().map(Field::Contact));
        all.extend(AddressField::iter().map(Field::Address));
        all.extend(DeliveryField::iter().map(Field::Delivery));
        all.extend(SettlementField::iter().map(Field::Settlement));
        all.extend(PaymentMeansField::iter().map(Field::PaymentMeans));
        all.extend(PaymentTermsField::iter().map(Field::PaymentTerms));
        all.extend(PeriodField::iter().map(Field::Period));
        for scope in TaxScope::iter() {
            all.extend(TaxField::iter().map(|f| Field::Tax(scope, f)));
        }
        for scope in ChargeScope::iter() {
            all.extend(AllowanceChargeField::iter().map(|f| Field::AllowanceCharge(scope, f)));
        }
        all.extend(SummationField::iter().map(Field::Summation));
        all.extend(ReferenceField::iter().map(Field::Reference));
        all.extend(LineField::iter().map(Field::Line));
        all.extend(ProductField::iter().map(Field::Product));
        for kind in PriceKind::iter() {
            all.extend(PriceField::iter().map(|f| Field::Price(kind, f)));
        }
        all
    }

    /// The CII element name of this field, relative to its parent.
    pub fn element(&self) -> &'static str {
        match self {
            Field::Context(f) => match f {
                ContextField::BusinessProcess => {
                    "ram:BusinessProcessSpecifiedDocumentContextParameter"
                }
                ContextField::Guideline => "ram:GuidelineSpecifiedDocumentContextParameter",
            },
            Field::Document(f) => match f {
                DocumentField::Id => "ram:ID",
                DocumentField::TypeCode => "ram:TypeCode",
                DocumentField::IssueDate => "ram:IssueDateTime",
                DocumentField::Notes => "ram:IncludedNote",
            },
            Field::Note(f) => match f {
                NoteField::Content => "ram:Content",
                NoteField::SubjectCode => "ram:SubjectCode",
            },
            Field::Transaction(TransactionField::LineItems) => {
                "ram:IncludedSupplyChainTradeLineItem"
            }
            Field::Agreement(f) => match f {
                AgreementField::BuyerReference => "ram:BuyerReference",
                AgreementField::Seller => "ram:SellerTradeParty",
                AgreementField::Buyer => "ram:BuyerTradeParty",
                AgreementField::SellerTaxRepresentative => "ram:SellerTaxRepresentativeTradeParty",
                AgreementField::BuyerOrder => "ram:BuyerOrderReferencedDocument",
                AgreementField::Contract => "ram:ContractReferencedDocument",
                AgreementField::AdditionalDocuments => "ram:AdditionalReferencedDocument",
                AgreementField::ProcuringProject => "ram:SpecifiedProcuringProject",
            },
            Field::Project(f) => match f {
                ProjectField::Id => "ram:ID",
                ProjectField::Name => "ram:Name",
            },
            Field::Party(_, f) => match f {
                PartyField::Ids | PartyField::LegalOrganizationId => "ram:ID",
                PartyField::GlobalIds => "ram:GlobalID",
                PartyField::Name => "ram:Name",
                PartyField::Description => "ram:Description",
                PartyField::LegalOrganization => "ram:SpecifiedLegalOrganization",
                PartyField::TradingBusinessName => "ram:TradingBusinessName",
                PartyField::Contact => "ram:DefinedTradeContact",
                PartyField::PostalAddress => "ram:PostalTradeAddress",
                PartyField::ElectronicAddress => "ram:URIUniversalCommunication",
                PartyField::VatId | PartyField::TaxNumber => "ram:SpecifiedTaxRegistration",
            },
            Field::Contact(f) => match f {
                ContactField::PersonName => "ram:PersonName",
                ContactField::DepartmentName => "ram:DepartmentName",
                ContactField::Telephone => "ram:TelephoneUniversalCommunication",
                ContactField::Email => "ram:EmailURIUniversalCommunication",
            },
            Field::Address(f) => match f {
                AddressField::Postcode => "ram:PostcodeCode",
                AddressField::LineOne => "ram:LineOne",
                AddressField::LineTwo => "ram:LineTwo",
                AddressField::LineThree => "ram:LineThree",
                AddressField::City => "ram:CityName",
                AddressField::Country => "ram:CountryID",
                AddressField::Subdivision => "ram:CountrySubDivisionName",
            },
            Field::Delivery(f) => match f {
                DeliveryField::ShipTo => "ram:ShipToTradeParty",
                DeliveryField::ActualDeliveryDate => "ram:ActualDeliverySupplyChainEvent",
                DeliveryField::DespatchAdvice => "ram:DespatchAdviceReferencedDocument",
                DeliveryField::ReceivingAdvice => "ram:ReceivingAdviceReferencedDocument",
            },
            Field::Settlement(f) => match f {
                SettlementField::CreditorReferenceId => "ram:CreditorReferenceID",
                SettlementField::PaymentReference => "ram:PaymentReference",
                SettlementField::TaxCurrencyCode => "ram:TaxCurrencyCode",
                SettlementField::CurrencyCode => "ram:InvoiceCurrencyCode",
                SettlementField::Payee => "ram:PayeeTradeParty",
                SettlementField::PaymentMeans => "ram:SpecifiedTradeSettlementPaymentMeans",
                SettlementField::Taxes => "ram:ApplicableTradeTax",
                SettlementField::BillingPeriod => "ram:BillingSpecifiedPeriod",
                SettlementField::AllowanceCharges => "ram:SpecifiedTradeAllowanceCharge",
                SettlementField::PaymentTerms => "ram:SpecifiedTradePaymentTerms",
                SettlementField::MonetarySummation => {
                    "ram:SpecifiedTradeSettlementHeaderMonetarySummation"
                }
                SettlementField::PrecedingInvoice => "ram:InvoiceReferencedDocument",
                SettlementField::ReceivableAccount => {
                    "ram:ReceivableSpecifiedTradeAccountingAccount"
                }
            },
            Field::PaymentMeans(f) => match f {
                PaymentMeansField::TypeCode => "ram:TypeCode",
                PaymentMeansField::Information => "ram:Information",
                PaymentMeansField::Card => "ram:ApplicableTradeSettlementFinancialCard",
                PaymentMeansField::CardId => "ram:ID",
                PaymentMeansField::CardholderName => "ram:CardholderName",
                PaymentMeansField::PayerAccount => "ram:PayerPartyDebtorFinancialAccount",
                PaymentMeansField::PayeeAccount => "ram:PayeePartyCreditorFinancialAccount",
                PaymentMeansField::PayeeIban => "ram:IBANID",
                PaymentMeansField::PayeeAccountName => "ram:AccountName",
                PaymentMeansField::PayeeProprietaryId => "ram:ProprietaryID",
                PaymentMeansField::PayeeInstitution => {
                    "ram:PayeeSpecifiedCreditorFinancialInstitution"
                }
            },
            Field::PaymentTerms(f) => match f {
                PaymentTermsField::Description => "ram:Description",
                PaymentTermsField::DueDate => "ram:DueDateDateTime",
                PaymentTermsField::DirectDebitMandateId => "ram:DirectDebitMandateID",
            },
            Field::Period(f) => match f {
                PeriodField::Start => "ram:StartDateTime",
                PeriodField::End => "ram:EndDateTime",
            },
            Field::Tax(_, f) => match f {
                TaxField::CalculatedAmount => "ram:CalculatedAmount",
                TaxField::TypeCode => "ram:TypeCode",
                TaxField::ExemptionReason => "ram:ExemptionReason",
                TaxField::BasisAmount => "ram:BasisAmount",
                TaxField::CategoryCode => "ram:CategoryCode",
                TaxField::ExemptionReasonCode => "ram:ExemptionReasonCode",
                TaxField::TaxPointDate => "ram:TaxPointDate",
                TaxField::DueDateTypeCode => "ram:DueDateTypeCode",
                TaxField::RateApplicablePercent => "ram:RateApplicablePercent",
            },
            Field::AllowanceCharge(_, f) => match f {
                AllowanceChargeField::ChargeIndicator => "ram:ChargeIndicator",
                AllowanceChargeField::CalculationPercent => "ram:CalculationPercent",
                AllowanceChargeField::BasisAmount => "ram:BasisAmount",
                AllowanceChargeField::ActualAmount => "ram:ActualAmount",
                AllowanceChargeField::ReasonCode => "ram:ReasonCode",
                AllowanceChargeField::Reason => "ram:Reason",
                AllowanceChargeField::CategoryTax => "ram:CategoryTradeTax",
            },
            Field::Summation(f) => match f {
                SummationField::LineTotal => "ram:LineTotalAmount",
                SummationField::ChargeTotal => "ram:ChargeTotalAmount",
                SummationField::AllowanceTotal => "ram:AllowanceTotalAmount",
                SummationField::TaxBasisTotal => "ram:TaxBasisTotalAmount",
                SummationField::TaxTotal | SummationField::TaxTotalInTaxCurrency => {
                    "ram:TaxTotalAmount"
                }
                SummationField::Rounding => "ram:RoundingAmount",
                SummationField::GrandTotal => "ram:GrandTotalAmount",
                SummationField::TotalPrepaid => "ram:TotalPrepaidAmount",
                SummationField::DuePayable => "ram:DuePayableAmount",
            },
            Field::Reference(f) => match f {
                ReferenceField::IssuerAssignedId => "ram:IssuerAssignedID",
                ReferenceField::UriId => "ram:URIID",
                ReferenceField::LineId => "ram:LineID",
                ReferenceField::TypeCode => "ram:TypeCode",
                ReferenceField::Name => "ram:Name",
                ReferenceField::Attachment => "ram:AttachmentBinaryObject",
                ReferenceField::ReferenceTypeCode => "ram:ReferenceTypeCode",
                ReferenceField::IssueDate => "ram:FormattedIssueDateTime",
            },
            Field::Line(f) => match f {
                LineField::LineId => "ram:LineID",
                LineField::Note => "ram:IncludedNote",
                LineField::Product => "ram:SpecifiedTradeProduct",
                LineField::BuyerOrderLine => "ram:BuyerOrderReferencedDocument",
                LineField::GrossPrice => "ram:GrossPriceProductTradePrice",
                LineField::NetPrice => "ram:NetPriceProductTradePrice",
                LineField::BilledQuantity => "ram:BilledQuantity",
                LineField::Tax => "ram:ApplicableTradeTax",
                LineField::BillingPeriod => "ram:BillingSpecifiedPeriod",
                LineField::AllowanceCharges => "ram:SpecifiedTradeAllowanceCharge",
                LineField::LineTotal => "ram:LineTotalAmount",
                LineField::AdditionalDocument => "ram:AdditionalReferencedDocument",
                LineField::AccountingAccount => "ram:ReceivableSpecifiedTradeAccountingAccount",
            },
            Field::Product(f) => match f {
                ProductField::GlobalId => "ram:GlobalID",
                ProductField::SellerAssignedId => "ram:SellerAssignedID",
                ProductField::BuyerAssignedId => "ram:BuyerAssignedID",
                ProductField::Name => "ram:Name",
                ProductField::Description => "ram:Description",
                ProductField::Characteristics => "ram:ApplicableProductCharacteristic",
                ProductField::Classifications => "ram:DesignatedProductClassification",
                ProductField::OriginCountry => "ram:OriginTradeCountry",
            },
            Field::Price(_, f) => match f {
                PriceField::ChargeAmount => "ram:ChargeAmount",
                PriceField::BasisQuantity => "ram:BasisQuantity",
                PriceField::AppliedAllowance => "ram:AppliedTradeAllowanceCharge",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_never_precedes_permitted() {
        for field in Field::all() {
            if let Some(FieldRule {
                from,
                required_from: Some(req),
            }) = rule(field)
            {
                assert!(req >= from, "{field:?} required at {req} before permitted at {from}");
            }
        }
    }

    #[test]
    fn all_lists_every_field_once() {
        let all = Field::all();
        let mut seen = std::collections::HashSet::new();
        for field in &all {
            assert!(seen.insert(*field), "{field:?} listed twice");
        }
        assert_eq!(seen.len(), all.len());
    }

    #[test]
    fn allowed_is_monotonic() {
        use strum::IntoEnumIterator;
        for field in Field::all() {
            let mut was_allowed = false;
            for profile in Profile::iter() {
                let now = is_allowed(field, profile);
                assert!(now || !was_allowed, "{field:?} disallowed again at {profile}");
                was_allowed = now;
            }
        }
    }

    #[test]
    fn seller_legal_organization() {
        let field = Field::Party(PartyRole::Seller, PartyField::LegalOrganization);
        assert_eq!(minimum_profile_for(field), Some(BasicWl));
        assert!(!is_allowed(field, Minimum));
        assert!(is_required(field, BasicWl));
        assert!(is_required(field, EN16931));
    }

    #[test]
    fn line_level_gates() {
        assert_eq!(
            minimum_profile_for(Field::Transaction(TransactionField::LineItems)),
            Some(Basic)
        );
        assert_eq!(
            minimum_profile_for(Field::Line(LineField::AllowanceCharges)),
            Some(EN16931)
        );
        assert!(!is_allowed(Field::Line(LineField::AllowanceCharges), Basic));
    }

    #[test]
    fn references_start_above_minimum() {
        for field in [
            Field::Agreement(AgreementField::BuyerOrder),
            Field::Agreement(AgreementField::Contract),
            Field::Delivery(DeliveryField::DespatchAdvice),
            Field::Settlement(SettlementField::PrecedingInvoice),
        ] {
            assert!(!is_allowed(field, Minimum), "{field:?}");
            assert!(is_allowed(field, BasicWl), "{field:?}");
        }
        let representative = Field::Agreement(AgreementField::SellerTaxRepresentative);
        assert!(!is_allowed(representative, Basic));
        assert!(is_allowed(representative, EN16931));
        assert!(!is_allowed(Field::Reference(ReferenceField::Attachment), Basic));
        assert!(is_allowed(Field::Reference(ReferenceField::Attachment), EN16931));
    }

    #[test]
    fn fields_absent_for_role() {
        assert_eq!(
            rule(Field::Party(PartyRole::Buyer, PartyField::Description)),
            None
        );
        assert!(!is_allowed(
            Field::Party(PartyRole::ShipTo, PartyField::VatId),
            EN16931
        ));
        assert!(!is_allowed(
            Field::Price(PriceKind::Net, PriceField::AppliedAllowance),
            EN16931
        ));
    }

    #[test]
    fn mandatory_at_minimum() {
        let expected = [
            Field::Document(DocumentField::Id),
            Field::Document(DocumentField::TypeCode),
            Field::Document(DocumentField::IssueDate),
            Field::Settlement(SettlementField::CurrencyCode),
            Field::Party(PartyRole::Seller, PartyField::Name),
            Field::Party(PartyRole::Buyer, PartyField::Name),
            Field::Summation(SummationField::TaxBasisTotal),
            Field::Summation(SummationField::GrandTotal),
            Field::Summation(SummationField::DuePayable),
        ];
        for field in expected {
            assert!(is_required(field, Minimum), "{field:?}");
        }
        assert!(!is_required(Field::Summation(SummationField::LineTotal), Minimum));
        assert!(is_required(Field::Summation(SummationField::LineTotal), BasicWl));
    }

    #[test]
    fn header_tax_breakdown_required_from_basic_wl() {
        let taxes = Field::Settlement(SettlementField::Taxes);
        assert!(!is_allowed(taxes, Minimum));
        for profile in [BasicWl, Basic, EN16931] {
            assert!(is_required(taxes, profile), "{profile}");
        }
        assert!(is_required(Field::Tax(TaxScope::Header, TaxField::BasisAmount), BasicWl));
        assert!(is_required(Field::Tax(TaxScope::Header, TaxField::CalculatedAmount), BasicWl));
    }
}
