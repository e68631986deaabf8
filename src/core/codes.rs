//! Closed code lists used by the invoice model.
//!
//! Each enum maps 1:1 onto an external code list. `code()` yields the wire
//! value, `from_code()` rejects anything outside the list with
//! [`FacturXError::UnknownCode`]. Serde goes through the same mapping, so a
//! bound document can never carry an unknown code.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

use super::error::FacturXError;

/// Names the code list an [`FacturXError::UnknownCode`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CodeList {
    #[strum(to_string = "guideline")]
    Guideline,
    #[strum(to_string = "invoice type")]
    InvoiceType,
    #[strum(to_string = "tax category")]
    TaxCategory,
    #[strum(to_string = "tax type")]
    TaxType,
    #[strum(to_string = "payment means")]
    PaymentMeans,
    #[strum(to_string = "document type")]
    DocumentType,
    #[strum(to_string = "note subject")]
    NoteSubject,
    #[strum(to_string = "time reference")]
    TimeReference,
    #[strum(to_string = "currency")]
    Currency,
    #[strum(to_string = "country")]
    Country,
    #[strum(to_string = "unit")]
    Unit,
    #[strum(to_string = "MIME")]
    MimeCode,
    #[strum(to_string = "allowance reason")]
    AllowanceReason,
    #[strum(to_string = "charge reason")]
    ChargeReason,
    #[strum(to_string = "VAT exemption reason")]
    VatExemption,
}

/// UNTDID 1001: Invoice type codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum InvoiceTypeCode {
    RequestForPayment = 71,
    DebitNoteGoodsServices = 80,
    MeteredServicesInvoice = 82,
    DebitNoteFinancialAdjustments = 84,
    TaxNotification = 102,
    FinalPaymentRequest = 218,
    PaymentRequestCompletedUnits = 219,
    SelfBilledCreditNote = 261,
    CommercialInvoiceWithPackingList = 331,
    /// 380: Commercial invoice.
    Invoice = 380,
    /// 381: Credit note.
    CreditNote = 381,
    CommissionNote = 382,
    DebitNote = 383,
    /// 384: Corrected invoice.
    Corrected = 384,
    /// 386: Prepayment invoice.
    Prepayment = 386,
    TaxInvoice = 388,
    /// 389: Self-billed invoice.
    SelfBilled = 389,
    Factored = 393,
    Consignment = 395,
    ForwarderDiscrepancyReport = 553,
    InsurerInvoice = 575,
    ForwarderInvoice = 623,
    FreightInvoice = 780,
    ClaimNotification = 817,
    ConsularInvoice = 870,
    PartialConstruction = 875,
    PartialFinalConstruction = 876,
    FinalConstruction = 877,
}

impl InvoiceTypeCode {
    /// UNTDID 1001 numeric code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Parse from UNTDID 1001 numeric code.
    pub fn from_code(code: u16) -> Result<Self, FacturXError> {
        Self::from_repr(code)
            .ok_or_else(|| FacturXError::unknown_code(CodeList::InvoiceType, code.to_string()))
    }
}

/// UNTDID 5305: Tax category codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TaxCategory {
    /// S: Standard rate.
    #[strum(serialize = "S")]
    StandardRate,
    /// Z: Zero rated goods.
    #[strum(serialize = "Z")]
    ZeroRated,
    /// E: Exempt from tax.
    #[strum(serialize = "E")]
    Exempt,
    /// AE: VAT reverse charge.
    #[strum(serialize = "AE")]
    ReverseCharge,
    /// K: Intra-community supply.
    #[strum(serialize = "K")]
    IntraCommunitySupply,
    /// G: Free export item, tax not charged.
    #[strum(serialize = "G")]
    Export,
    /// O: Services outside scope of tax.
    #[strum(serialize = "O")]
    NotSubjectToVat,
    /// L: Canary Islands general indirect tax.
    #[strum(serialize = "L")]
    CanaryIslands,
    /// M: Tax for production, services and importation in Ceuta and Melilla.
    #[strum(serialize = "M")]
    CeutaMelilla,
    /// B: Transferred (VAT), Italy only.
    #[strum(serialize = "B")]
    Transferred,
}

/// UNTDID 5153: Duty, tax or fee type codes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TaxTypeCode {
    #[strum(serialize = "AAA")]
    PetroleumTax,
    #[strum(serialize = "AAB")]
    ProvisionalCountervailingDutyCash,
    #[strum(serialize = "AAC")]
    ProvisionalCountervailingDutyBond,
    #[strum(serialize = "AAD")]
    TobaccoTax,
    #[strum(serialize = "AAE")]
    EnergyFee,
    #[strum(serialize = "AAF")]
    CoffeeTax,
    #[strum(serialize = "ADD")]
    AntiDumpingDuty,
    #[strum(serialize = "BOL")]
    StampTax,
    #[strum(serialize = "CAP")]
    AgriculturalLevy,
    #[strum(serialize = "CAR")]
    CarTax,
    #[strum(serialize = "COC")]
    PaperConsortiumTax,
    #[strum(serialize = "CST")]
    CommoditySpecificTax,
    #[strum(serialize = "CVD")]
    CountervailingDuty,
    #[strum(serialize = "ENV")]
    EnvironmentalTax,
    #[strum(serialize = "EXC")]
    ExciseDuty,
    #[strum(serialize = "EXP")]
    AgriculturalExportRebate,
    #[strum(serialize = "FET")]
    FederalExciseTax,
    #[strum(serialize = "FRE")]
    Free,
    #[strum(serialize = "GCN")]
    GeneralConstructionTax,
    #[strum(serialize = "GST")]
    GoodsAndServicesTax,
    #[strum(serialize = "ILL")]
    IlluminantsTax,
    #[strum(serialize = "IMP")]
    ImportTax,
    #[strum(serialize = "IND")]
    IndividualTax,
    #[strum(serialize = "LAC")]
    BusinessLicenseFee,
    #[strum(serialize = "LCN")]
    LocalConstructionTax,
    #[strum(serialize = "LDP")]
    LightDuesPayable,
    #[strum(serialize = "LOC")]
    LocalSalesTax,
    #[strum(serialize = "LST")]
    LustTax,
    #[strum(serialize = "MCA")]
    MonetaryCompensatoryAmount,
    #[strum(serialize = "MCD")]
    MiscellaneousCashDeposit,
    #[strum(serialize = "OTH")]
    OtherTaxes,
    #[strum(serialize = "PDB")]
    ProvisionalDutyBond,
    #[strum(serialize = "PDC")]
    ProvisionalDutyCash,
    #[strum(serialize = "PRF")]
    PreferenceDuty,
    #[strum(serialize = "SCN")]
    SpecialConstructionTax,
    #[strum(serialize = "SSS")]
    ShiftedSocialSecurities,
    #[strum(serialize = "STT")]
    StateSalesTax,
    #[strum(serialize = "SUP")]
    SuspendedDuty,
    #[strum(serialize = "SUR")]
    Surtax,
    #[strum(serialize = "SWT")]
    ShiftedWageTax,
    #[strum(serialize = "TAC")]
    AlcoholMarkTax,
    #[strum(serialize = "TOT")]
    Total,
    #[strum(serialize = "TOX")]
    TurnoverTax,
    #[strum(serialize = "TTA")]
    TonnageTaxes,
    #[strum(serialize = "VAD")]
    ValuationDeposit,
    /// VAT: the only type EN 16931 allows.
    #[strum(serialize = "VAT")]
    ValueAddedTax,
}

/// UNTDID 4461: Payment means codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum PaymentMeansCode {
    InstrumentNotDefined = 1,
    AchCredit = 2,
    AchDebit = 3,
    AchDemandDebitReversal = 4,
    AchDemandCreditReversal = 5,
    AchDemandCredit = 6,
    AchDemandDebit = 7,
    Hold = 8,
    NationalOrRegionalClearing = 9,
    /// 10: Cash.
    Cash = 10,
    AchSavingsCreditReversal = 11,
    AchSavingsDebitReversal = 12,
    AchSavingsCredit = 13,
    AchSavingsDebit = 14,
    BookentryCredit = 15,
    BookentryDebit = 16,
    AchDemandCcdCredit = 17,
    AchDemandCcdDebit = 18,
    AchDemandCtpCredit = 19,
    /// 20: Cheque.
    Cheque = 20,
    BankersDraft = 21,
    CertifiedBankersDraft = 22,
    BankCheque = 23,
    BillOfExchangeAwaitingAcceptance = 24,
    CertifiedCheque = 25,
    LocalCheque = 26,
    AchDemandCtpDebit = 27,
    AchDemandCtxCredit = 28,
    AchDemandCtxDebit = 29,
    /// 30: Credit transfer.
    CreditTransfer = 30,
    AchDemandCcdPlusCredit = 32,
    AchDemandCcdPlusDebit = 33,
    AchPpd = 34,
    AchSavingsCcdCredit = 35,
    AchSavingsCcdDebit = 36,
    AchSavingsCtpCredit = 37,
    AchSavingsCtpDebit = 38,
    AchSavingsCtxCredit = 39,
    AchSavingsCtxDebit = 40,
    AchSavingsCcdPlusCredit = 41,
    /// 42: Payment to bank account.
    PaymentToBankAccount = 42,
    AchSavingsCcdPlusDebit = 43,
    AcceptedBillOfExchange = 44,
    ReferencedHomeBankingCreditTransfer = 45,
    HomeBankingDebitTransfer = 47,
    /// 48: Bank card.
    BankCard = 48,
    /// 49: Direct debit.
    DirectDebit = 49,
    PaymentByPostgiro = 50,
    CfonbTelereglement = 51,
    UrgentCommercialPayment = 52,
    UrgentTreasuryPayment = 53,
    /// 54: Credit card.
    CreditCard = 54,
    /// 55: Debit card.
    DebitCard = 55,
    Bankgiro = 56,
    StandingAgreement = 57,
    /// 58: SEPA credit transfer.
    SepaCreditTransfer = 58,
    /// 59: SEPA direct debit.
    SepaDirectDebit = 59,
    PromissoryNote = 60,
    PromissoryNoteSignedByDebtor = 61,
    PromissoryNoteSignedByDebtorEndorsedByBank = 62,
    PromissoryNoteSignedByDebtorEndorsedByThirdParty = 63,
    PromissoryNoteSignedByBank = 64,
    PromissoryNoteSignedByBankEndorsedByAnotherBank = 65,
    PromissoryNoteSignedByThirdParty = 66,
    PromissoryNoteSignedByThirdPartyEndorsedByBank = 67,
    OnlinePaymentService = 68,
    BillDrawnByCreditorOnDebtor = 70,
    BillDrawnByCreditorOnBank = 74,
    BillDrawnByCreditorEndorsedByAnotherBank = 75,
    BillDrawnByCreditorOnBankEndorsedByThirdParty = 76,
    BillDrawnByCreditorOnThirdParty = 77,
    BillDrawnByCreditorOnThirdPartyEndorsedByBank = 78,
    NotTransferableBankersDraft = 91,
    NotTransferableLocalCheque = 92,
    ReferenceGiro = 93,
    UrgentGiro = 94,
    FreeFormatGiro = 95,
    RequestedMethodNotUsed = 96,
    ClearingBetweenPartners = 97,
    ElectronicallyRecordedMonetaryClaims = 98,
}

impl PaymentMeansCode {
    /// UNTDID 4461 numeric code.
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Parse from UNTDID 4461 numeric code.
    pub fn from_code(code: u16) -> Result<Self, FacturXError> {
        Self::from_repr(code)
            .ok_or_else(|| FacturXError::unknown_code(CodeList::PaymentMeans, code.to_string()))
    }
}

/// UNTDID 1001 subset used for referenced documents (BT-17, BT-18, BT-122).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum DocumentTypeCode {
    /// 50: Validated price tender (tender or lot reference).
    ValidatedPriceTender = 50,
    /// 130: Invoicing data sheet (invoiced object identifier).
    InvoicingDataSheet = 130,
    /// 916: Related document (supporting document).
    RelatedDocument = 916,
}

impl DocumentTypeCode {
    pub fn code(&self) -> u16 {
        *self as u16
    }

    pub fn from_code(code: u16) -> Result<Self, FacturXError> {
        Self::from_repr(code)
            .ok_or_else(|| FacturXError::unknown_code(CodeList::DocumentType, code.to_string()))
    }
}

/// UNTDID 2475: Value added tax point date codes (BT-8), as bound in CII.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
#[repr(u16)]
pub enum TimeReferenceCode {
    /// 5: Invoice document issue date time.
    InvoiceIssueDate = 5,
    /// 29: Delivery date/time, actual.
    ActualDeliveryDate = 29,
    /// 72: Paid to date.
    PaidToDate = 72,
}

impl TimeReferenceCode {
    pub fn code(&self) -> u16 {
        *self as u16
    }

    pub fn from_code(code: u16) -> Result<Self, FacturXError> {
        Self::from_repr(code)
            .ok_or_else(|| FacturXError::unknown_code(CodeList::TimeReference, code.to_string()))
    }
}

/// UNTDID 4451: Text subject qualifier for notes (BT-21).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum NoteSubjectCode {
    /// AAA: Goods item description.
    #[strum(serialize = "AAA")]
    GoodsDescription,
    /// AAB: Terms of payments.
    #[strum(serialize = "AAB")]
    PaymentTerms,
    /// AAC: Dangerous goods additional information.
    #[strum(serialize = "AAC")]
    DangerousGoods,
    /// AAI: General information.
    #[strum(serialize = "AAI")]
    GeneralInformation,
    /// AAJ: Additional conditions of sale/purchase.
    #[strum(serialize = "AAJ")]
    ConditionsOfSale,
    /// AAK: Price conditions.
    #[strum(serialize = "AAK")]
    PriceConditions,
    /// ABL: Government information.
    #[strum(serialize = "ABL")]
    GovernmentInformation,
    /// ABN: Accounting information.
    #[strum(serialize = "ABN")]
    AccountingInformation,
    /// ACB: Additional information.
    #[strum(serialize = "ACB")]
    AdditionalInformation,
    /// ADU: Note.
    #[strum(serialize = "ADU")]
    Note,
    /// CUS: Customs declaration information.
    #[strum(serialize = "CUS")]
    Customs,
    /// PMD: Payment detail/remittance information.
    #[strum(serialize = "PMD")]
    PaymentDetail,
    /// PMT: Payment information.
    #[strum(serialize = "PMT")]
    PaymentInformation,
    /// REG: Regulatory information.
    #[strum(serialize = "REG")]
    Regulatory,
    /// SUR: Supplier remarks.
    #[strum(serialize = "SUR")]
    SupplierRemarks,
    /// TXD: Tax declaration.
    #[strum(serialize = "TXD")]
    TaxDeclaration,
}

macro_rules! string_code_list {
    ($ty:ty, $list:expr) => {
        impl $ty {
            /// Code list value.
            pub fn code(&self) -> &'static str {
                (*self).into()
            }

            pub fn from_code(code: &str) -> Result<Self, FacturXError> {
                code.parse()
                    .map_err(|_| FacturXError::unknown_code($list, code))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FacturXError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_code(&value)
            }
        }
    };
}

macro_rules! numeric_code_list {
    ($ty:ty) => {
        impl TryFrom<u16> for $ty {
            type Error = FacturXError;

            fn try_from(value: u16) -> Result<Self, Self::Error> {
                Self::from_code(value)
            }
        }

        impl From<$ty> for u16 {
            fn from(code: $ty) -> Self {
                code.code()
            }
        }
    };
}

string_code_list!(TaxCategory, CodeList::TaxCategory);
string_code_list!(TaxTypeCode, CodeList::TaxType);
string_code_list!(NoteSubjectCode, CodeList::NoteSubject);

numeric_code_list!(InvoiceTypeCode);
numeric_code_list!(PaymentMeansCode);
numeric_code_list!(DocumentTypeCode);
numeric_code_list!(TimeReferenceCode);
