use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::codes::*;
use super::profile::Profile;
use super::types::*;

/// Builder for [`InvoiceDocument`].
///
/// Building never fails: profile-dependent completeness is checked when the
/// document is assembled, not here.
///
/// ```
/// use facturx::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let doc = InvoiceBuilder::new(Profile::Minimum, "FA-2024-001", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .seller(PartyBuilder::new("Lapin SARL").vat_id("FR11999999998").build())
///     .buyer(PartyBuilder::new("Client SA").build())
///     .add_line(LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(150.00))
///         .tax(TaxCategory::StandardRate, dec!(20))
///         .build())
///     .totals(HeaderMonetarySummation::new(dec!(1500.00), dec!(300.00), dec!(1800.00)))
///     .build();
/// assert_eq!(doc.context.guideline, Profile::Minimum);
/// ```
pub struct InvoiceBuilder {
    context: ExchangedDocumentContext,
    document: ExchangedDocument,
    transaction: SupplyChainTradeTransaction,
}

impl InvoiceBuilder {
    /// Start a commercial invoice (380) in EUR declaring `profile` as guideline.
    pub fn new(profile: Profile, id: impl Into<String>, issue_date: NaiveDate) -> Self {
        let mut transaction = SupplyChainTradeTransaction::default();
        transaction.settlement.currency_code = Some("EUR".to_string());
        Self {
            context: ExchangedDocumentContext {
                business_process: None,
                guideline: profile,
            },
            document: ExchangedDocument {
                id: id.into(),
                type_code: Some(InvoiceTypeCode::Invoice),
                issue_date: Some(issue_date),
                notes: Vec::new(),
            },
            transaction,
        }
    }

    pub fn business_process(mut self, process: impl Into<String>) -> Self {
        self.context.business_process = Some(process.into());
        self
    }

    pub fn type_code(mut self, code: InvoiceTypeCode) -> Self {
        self.document.type_code = Some(code);
        self
    }

    pub fn note(mut self, content: impl Into<String>) -> Self {
        self.document.notes.push(Note {
            content: content.into(),
            subject_code: None,
        });
        self
    }

    pub fn note_with_subject(mut self, content: impl Into<String>, subject: NoteSubjectCode) -> Self {
        self.document.notes.push(Note {
            content: content.into(),
            subject_code: Some(subject),
        });
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.transaction.settlement.currency_code = Some(code.into());
        self
    }

    pub fn tax_currency(mut self, code: impl Into<String>) -> Self {
        self.transaction.settlement.tax_currency_code = Some(code.into());
        self
    }

    // ── Agreement ──

    pub fn buyer_reference(mut self, reference: impl Into<String>) -> Self {
        self.transaction.agreement.buyer_reference = Some(reference.into());
        self
    }

    pub fn seller(mut self, party: TradeParty) -> Self {
        self.transaction.agreement.seller = party;
        self
    }

    pub fn buyer(mut self, party: TradeParty) -> Self {
        self.transaction.agreement.buyer = party;
        self
    }

    pub fn seller_tax_representative(mut self, party: TradeParty) -> Self {
        self.transaction.agreement.seller_tax_representative = Some(party);
        self
    }

    pub fn buyer_order(mut self, id: impl Into<String>) -> Self {
        self.transaction.agreement.buyer_order = Some(ReferencedDocument::new(id));
        self
    }

    pub fn contract(mut self, id: impl Into<String>) -> Self {
        self.transaction.agreement.contract = Some(ReferencedDocument::new(id));
        self
    }

    pub fn add_additional_document(mut self, document: ReferencedDocument) -> Self {
        self.transaction.agreement.additional_documents.push(document);
        self
    }

    pub fn procuring_project(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.transaction.agreement.procuring_project = Some(ProcuringProject {
            id: id.into(),
            name: name.into(),
        });
        self
    }

    // ── Delivery ──

    pub fn ship_to(mut self, party: TradeParty) -> Self {
        self.transaction.delivery.ship_to = Some(party);
        self
    }

    pub fn delivery_date(mut self, date: NaiveDate) -> Self {
        self.transaction.delivery.actual_delivery_date = Some(date);
        self
    }

    pub fn despatch_advice(mut self, id: impl Into<String>) -> Self {
        self.transaction.delivery.despatch_advice = Some(ReferencedDocument::new(id));
        self
    }

    pub fn receiving_advice(mut self, id: impl Into<String>) -> Self {
        self.transaction.delivery.receiving_advice = Some(ReferencedDocument::new(id));
        self
    }

    // ── Settlement ──

    pub fn creditor_reference_id(mut self, id: impl Into<String>) -> Self {
        self.transaction.settlement.creditor_reference_id = Some(id.into());
        self
    }

    pub fn payment_reference(mut self, reference: impl Into<String>) -> Self {
        self.transaction.settlement.payment_reference = Some(reference.into());
        self
    }

    pub fn payee(mut self, party: TradeParty) -> Self {
        self.transaction.settlement.payee = Some(party);
        self
    }

    pub fn add_payment_means(mut self, means: PaymentMeans) -> Self {
        self.transaction.settlement.payment_means.push(means);
        self
    }

    /// SEPA credit transfer (58) to `iban`.
    pub fn sepa_credit_transfer(self, iban: impl Into<String>) -> Self {
        self.add_payment_means(PaymentMeans {
            type_code: Some(PaymentMeansCode::SepaCreditTransfer),
            payee_account: Some(CreditorAccount {
                iban: Some(iban.into()),
                ..CreditorAccount::default()
            }),
            ..PaymentMeans::default()
        })
    }

    pub fn add_tax(mut self, tax: TradeTax) -> Self {
        self.transaction.settlement.taxes.push(tax);
        self
    }

    pub fn billing_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.transaction.settlement.billing_period = Some(SpecifiedPeriod {
            start: Some(start),
            end: Some(end),
        });
        self
    }

    pub fn add_allowance(mut self, allowance: TradeAllowanceCharge) -> Self {
        self.transaction
            .settlement
            .allowance_charges
            .push(TradeAllowanceCharge {
                is_charge: false,
                ..allowance
            });
        self
    }

    pub fn add_charge(mut self, charge: TradeAllowanceCharge) -> Self {
        self.transaction
            .settlement
            .allowance_charges
            .push(TradeAllowanceCharge {
                is_charge: true,
                ..charge
            });
        self
    }

    pub fn payment_terms(mut self, terms: PaymentTerms) -> Self {
        self.transaction.settlement.payment_terms = Some(terms);
        self
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.transaction
            .settlement
            .payment_terms
            .get_or_insert_with(PaymentTerms::default)
            .due_date = Some(date);
        self
    }

    pub fn totals(mut self, totals: HeaderMonetarySummation) -> Self {
        self.transaction.settlement.monetary_summation = totals;
        self
    }

    pub fn preceding_invoice(mut self, id: impl Into<String>, issue_date: Option<NaiveDate>) -> Self {
        self.transaction.settlement.preceding_invoice = Some(ReferencedDocument {
            issue_date,
            ..ReferencedDocument::new(id)
        });
        self
    }

    pub fn receivable_account(mut self, account: impl Into<String>) -> Self {
        self.transaction.settlement.receivable_account = Some(account.into());
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.transaction.line_items.push(line);
        self
    }

    pub fn build(self) -> InvoiceDocument {
        InvoiceDocument {
            context: self.context,
            document: self.document,
            transaction: self.transaction,
        }
    }
}

/// Builder for [`TradeParty`].
pub struct PartyBuilder {
    party: TradeParty,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            party: TradeParty {
                name: Some(name.into()),
                ..TradeParty::default()
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.party.ids.push(id.into());
        self
    }

    pub fn global_id(mut self, scheme_id: impl Into<String>, id: impl Into<String>) -> Self {
        self.party.global_ids.push(GlobalId {
            scheme_id: scheme_id.into(),
            id: id.into(),
        });
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.party.description = Some(description.into());
        self
    }

    /// Legal registration; `scheme_id` "0002" denotes a SIREN.
    pub fn legal_organization(mut self, id: impl Into<String>, scheme_id: Option<&str>) -> Self {
        let trading_business_name = self
            .party
            .legal_organization
            .take()
            .and_then(|org| org.trading_business_name);
        self.party.legal_organization = Some(LegalOrganization {
            id: id.into(),
            scheme_id: scheme_id.map(str::to_string),
            trading_business_name,
        });
        self
    }

    pub fn trading_name(mut self, name: impl Into<String>) -> Self {
        self.party
            .legal_organization
            .get_or_insert_with(LegalOrganization::default)
            .trading_business_name = Some(name.into());
        self
    }

    pub fn contact(mut self, contact: TradeContact) -> Self {
        self.party.contact = Some(contact);
        self
    }

    pub fn address(mut self, address: TradeAddress) -> Self {
        self.party.address = Some(address);
        self
    }

    pub fn electronic_address(mut self, scheme: impl Into<String>, value: impl Into<String>) -> Self {
        self.party.electronic_address = Some(ElectronicAddress {
            scheme: scheme.into(),
            value: value.into(),
        });
        self
    }

    pub fn vat_id(mut self, id: impl Into<String>) -> Self {
        self.party.vat_id = Some(id.into());
        self
    }

    pub fn tax_number(mut self, number: impl Into<String>) -> Self {
        self.party.tax_number = Some(number.into());
        self
    }

    pub fn build(self) -> TradeParty {
        self.party
    }
}

/// Builder for [`TradeAddress`].
pub struct AddressBuilder {
    address: TradeAddress,
}

impl AddressBuilder {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            address: TradeAddress {
                country_code: country_code.into(),
                ..TradeAddress::default()
            },
        }
    }

    pub fn postcode(mut self, postcode: impl Into<String>) -> Self {
        self.address.postcode = Some(postcode.into());
        self
    }

    pub fn street(mut self, line: impl Into<String>) -> Self {
        self.address.line_one = Some(line.into());
        self
    }

    pub fn additional(mut self, line: impl Into<String>) -> Self {
        self.address.line_two = Some(line.into());
        self
    }

    pub fn line_three(mut self, line: impl Into<String>) -> Self {
        self.address.line_three = Some(line.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.address.city = Some(city.into());
        self
    }

    pub fn subdivision(mut self, subdivision: impl Into<String>) -> Self {
        self.address.subdivision = Some(subdivision.into());
        self
    }

    pub fn build(self) -> TradeAddress {
        self.address
    }
}

/// Builder for [`LineItem`].
///
/// Unless overridden with [`LineItemBuilder::line_total`], the line net
/// amount is quantity × net price, rounded half-up to two decimals.
pub struct LineItemBuilder {
    line: LineItem,
    quantity: Decimal,
    net_price: Decimal,
    line_total: Option<Decimal>,
}

impl LineItemBuilder {
    pub fn new(
        line_id: impl Into<String>,
        name: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        net_price: Decimal,
    ) -> Self {
        let line = LineItem {
            line_id: line_id.into(),
            product: TradeProduct {
                name: Some(name.into()),
                ..TradeProduct::default()
            },
            agreement: LineTradeAgreement {
                net_price: Some(TradePrice::new(net_price)),
                ..LineTradeAgreement::default()
            },
            delivery: LineTradeDelivery {
                billed_quantity: Some(Quantity {
                    value: quantity,
                    unit_code: unit.into(),
                }),
            },
            ..LineItem::default()
        };
        Self {
            line,
            quantity,
            net_price,
            line_total: None,
        }
    }

    pub fn tax(mut self, category: TaxCategory, rate: Decimal) -> Self {
        self.line.settlement.tax = Some(TradeTax::vat(category, rate));
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.line.note = Some(note.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.line.product.description = Some(description.into());
        self
    }

    pub fn seller_assigned_id(mut self, id: impl Into<String>) -> Self {
        self.line.product.seller_assigned_id = Some(id.into());
        self
    }

    pub fn buyer_assigned_id(mut self, id: impl Into<String>) -> Self {
        self.line.product.buyer_assigned_id = Some(id.into());
        self
    }

    pub fn global_id(mut self, scheme_id: impl Into<String>, id: impl Into<String>) -> Self {
        self.line.product.global_id = Some(GlobalId {
            scheme_id: scheme_id.into(),
            id: id.into(),
        });
        self
    }

    pub fn characteristic(mut self, description: impl Into<String>, value: impl Into<String>) -> Self {
        self.line.product.characteristics.push(ProductCharacteristic {
            description: description.into(),
            value: value.into(),
        });
        self
    }

    pub fn classification(mut self, class_code: impl Into<String>, list_id: Option<&str>) -> Self {
        self.line.product.classifications.push(ProductClassification {
            class_code: class_code.into(),
            list_id: list_id.map(str::to_string),
            list_version_id: None,
        });
        self
    }

    pub fn origin_country(mut self, country: impl Into<String>) -> Self {
        self.line.product.origin_country = Some(country.into());
        self
    }

    pub fn buyer_order_line_id(mut self, id: impl Into<String>) -> Self {
        self.line.agreement.buyer_order_line_id = Some(id.into());
        self
    }

    pub fn gross_price(mut self, price: Decimal) -> Self {
        self.line.agreement.gross_price = Some(TradePrice::new(price));
        self
    }

    /// Net price applies per `quantity` units instead of per unit.
    pub fn price_basis(mut self, quantity: Decimal) -> Self {
        let unit_code = self
            .line
            .delivery
            .billed_quantity
            .as_ref()
            .map(|q| q.unit_code.clone())
            .unwrap_or_default();
        if let Some(price) = self.line.agreement.net_price.as_mut() {
            price.basis_quantity = Some(Quantity {
                value: quantity,
                unit_code,
            });
        }
        self
    }

    pub fn billing_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.line.settlement.billing_period = Some(SpecifiedPeriod {
            start: Some(start),
            end: Some(end),
        });
        self
    }

    pub fn add_allowance(mut self, allowance: TradeAllowanceCharge) -> Self {
        self.line.settlement.allowance_charges.push(TradeAllowanceCharge {
            is_charge: false,
            ..allowance
        });
        self
    }

    pub fn add_charge(mut self, charge: TradeAllowanceCharge) -> Self {
        self.line.settlement.allowance_charges.push(TradeAllowanceCharge {
            is_charge: true,
            ..charge
        });
        self
    }

    /// Set the line net amount explicitly.
    pub fn line_total(mut self, amount: Decimal) -> Self {
        self.line_total = Some(amount);
        self
    }

    pub fn additional_document(mut self, document: ReferencedDocument) -> Self {
        self.line.settlement.additional_document = Some(document);
        self
    }

    pub fn accounting_account(mut self, account: impl Into<String>) -> Self {
        self.line.settlement.accounting_account = Some(account.into());
        self
    }

    /// Build the line. Without an explicit [`line_total`](Self::line_total)
    /// the net amount is quantity × price, left unset when that overflows.
    pub fn build(self) -> LineItem {
        let mut line = self.line;
        let total = self.line_total.or_else(|| {
            let basis = line
                .agreement
                .net_price
                .as_ref()
                .and_then(|p| p.basis_quantity.as_ref())
                .map(|q| q.value);
            line_net_amount(
                self.quantity,
                self.net_price,
                basis,
                &line.settlement.allowance_charges,
            )
        });
        line.settlement.line_total_amount = total;
        line
    }
}

/// quantity × price / basis quantity, plus line charges minus line
/// allowances, rounded to two decimals. `None` on overflow.
pub(crate) fn line_net_amount(
    quantity: Decimal,
    price: Decimal,
    basis: Option<Decimal>,
    adjustments: &[TradeAllowanceCharge],
) -> Option<Decimal> {
    let basis = basis.filter(|v| !v.is_zero()).unwrap_or(Decimal::ONE);
    let net = quantity.checked_mul(price)?.checked_div(basis)?;
    let total = adjustments
        .iter()
        .filter_map(|ac| ac.actual_amount.map(|a| if ac.is_charge { a } else { -a }))
        .try_fold(net, |acc, a| acc.checked_add(a))?;
    Some(round_half_up(total, 2))
}

pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
