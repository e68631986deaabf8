use super::allowance::allowance_charge;
use super::party::trade_party;
use super::reference::referenced_document;
use super::tax::trade_tax;
use super::{EmitResult, Scope, id_wrapper, non_blank, present};
use crate::core::{
    CodeList, FacturXError, HeaderMonetarySummation, HeaderTradeSettlement, PaymentMeans,
    PaymentTerms, SpecifiedPeriod,
};
use crate::facturx::codec;
use crate::facturx::element::Element;
use crate::facturx::lattice::{
    ChargeScope, Field, PartyRole, PaymentMeansField, PaymentTermsField, PeriodField,
    SettlementField, SummationField, TaxScope,
};

pub(crate) const SETTLEMENT: &str = "ram:ApplicableHeaderTradeSettlement";

/// `ram:ApplicableHeaderTradeSettlement`. `scope` is the transaction scope.
pub(crate) fn header_settlement(
    settlement: &HeaderTradeSettlement,
    transaction: &Scope,
) -> EmitResult<Element> {
    let scope = transaction.enter(SETTLEMENT);
    let f = Field::Settlement;
    let mut el = Element::new(SETTLEMENT);

    el.push_opt(scope.text(
        f(SettlementField::CreditorReferenceId),
        present(&settlement.creditor_reference_id),
    )?);
    el.push_opt(scope.text(
        f(SettlementField::PaymentReference),
        present(&settlement.payment_reference),
    )?);

    let tax_currency = currency(
        &scope,
        f(SettlementField::TaxCurrencyCode),
        present(&settlement.tax_currency_code),
    )?;
    if let Some(code) = tax_currency {
        el.push(Element::with_text(f(SettlementField::TaxCurrencyCode).element(), code));
    }
    let invoice_currency = currency(
        &scope,
        f(SettlementField::CurrencyCode),
        present(&settlement.currency_code),
    )?;
    // Mandatory at every profile, so absence has already failed above.
    let invoice_currency = invoice_currency.unwrap_or_default();
    el.push(Element::with_text(
        f(SettlementField::CurrencyCode).element(),
        invoice_currency,
    ));

    let payee = f(SettlementField::Payee);
    if let Some(party) = scope.field(payee, settlement.payee.as_ref())? {
        el.push(trade_party(
            party,
            PartyRole::Payee,
            payee.element(),
            &scope.enter_field(payee),
        )?);
    }

    let means_field = f(SettlementField::PaymentMeans);
    let means = scope.list(means_field, &settlement.payment_means)?;
    for (i, m) in means.iter().enumerate() {
        el.push(payment_means(m, &scope.enter_item(means_field, i, means.len()))?);
    }

    let taxes_field = f(SettlementField::Taxes);
    let taxes = scope.list(taxes_field, &settlement.taxes)?;
    for (i, tax) in taxes.iter().enumerate() {
        let item = scope.enter_item(taxes_field, i, taxes.len());
        el.push(trade_tax(tax, TaxScope::Header, taxes_field.element(), &item)?);
    }

    let period = f(SettlementField::BillingPeriod);
    if let Some(p) = scope.field(period, settlement.billing_period.as_ref())? {
        el.push_opt(billing_period(p, &scope.enter_field(period))?);
    }

    let charges_field = f(SettlementField::AllowanceCharges);
    let charges = scope.list(charges_field, &settlement.allowance_charges)?;
    for (i, ac) in charges.iter().enumerate() {
        let item = scope.enter_item(charges_field, i, charges.len());
        el.push(allowance_charge(
            ac,
            ChargeScope::Header,
            charges_field.element(),
            &item,
        )?);
    }

    let terms = f(SettlementField::PaymentTerms);
    if let Some(t) = scope.field(terms, settlement.payment_terms.as_ref())? {
        el.push_opt(payment_terms(t, &scope.enter_field(terms))?);
    }

    let sums = f(SettlementField::MonetarySummation);
    if let Some(s) = scope.field(sums, Some(&settlement.monetary_summation))? {
        el.push(monetary_summation(
            s,
            invoice_currency,
            tax_currency,
            &scope,
            &scope.enter_field(sums),
        )?);
    }

    let preceding = f(SettlementField::PrecedingInvoice);
    if let Some(doc) = scope.field(preceding, settlement.preceding_invoice.as_ref())? {
        el.push(referenced_document(
            doc,
            preceding.element(),
            &scope.enter_field(preceding),
        )?);
    }

    let account = f(SettlementField::ReceivableAccount);
    if let Some(id) = scope.field(account, present(&settlement.receivable_account))? {
        el.push(id_wrapper(account.element(), id));
    }

    Ok(el)
}

fn currency<'a>(scope: &Scope, field: Field, code: Option<&'a str>) -> EmitResult<Option<&'a str>> {
    match scope.field(field, code)? {
        Some(code) => Ok(Some(codec::encode_code(
            CodeList::Currency,
            code,
            &scope.path_of(field),
        )?)),
        None => Ok(None),
    }
}

fn payment_means(means: &PaymentMeans, scope: &Scope) -> EmitResult<Element> {
    let f = Field::PaymentMeans;
    let mut el = Element::new("ram:SpecifiedTradeSettlementPaymentMeans");

    let type_code = means.type_code.map(|c| c.code().to_string());
    el.push_opt(scope.text(f(PaymentMeansField::TypeCode), type_code.as_deref())?);
    el.push_opt(scope.text(f(PaymentMeansField::Information), present(&means.information))?);

    let card = f(PaymentMeansField::Card);
    if let Some(c) = scope.field(card, means.card.as_ref())? {
        let card_scope = scope.enter_field(card);
        let mut card_el = Element::new(card.element());
        card_el.push_opt(card_scope.text(f(PaymentMeansField::CardId), non_blank(&c.id))?);
        card_el.push_opt(card_scope.text(
            f(PaymentMeansField::CardholderName),
            present(&c.cardholder_name),
        )?);
        el.push(card_el);
    }

    let payer = f(PaymentMeansField::PayerAccount);
    if let Some(iban) = scope.field(payer, present(&means.payer_iban))? {
        let mut account = Element::new(payer.element());
        account.push(Element::with_text("ram:IBANID", iban));
        el.push(account);
    }

    let payee = f(PaymentMeansField::PayeeAccount);
    if let Some(a) = scope.field(payee, means.payee_account.as_ref())? {
        let account_scope = scope.enter_field(payee);
        let mut account = Element::new(payee.element());
        account.push_opt(account_scope.text(f(PaymentMeansField::PayeeIban), present(&a.iban))?);
        account.push_opt(account_scope.text(
            f(PaymentMeansField::PayeeAccountName),
            present(&a.account_name),
        )?);
        account.push_opt(account_scope.text(
            f(PaymentMeansField::PayeeProprietaryId),
            present(&a.proprietary_id),
        )?);
        if !account.is_empty() {
            el.push(account);
        }
    }

    let institution = f(PaymentMeansField::PayeeInstitution);
    if let Some(bic) = scope.field(institution, present(&means.payee_bic))? {
        let mut bank = Element::new(institution.element());
        bank.push(Element::with_text("ram:BICID", bic));
        el.push(bank);
    }

    Ok(el)
}

/// `ram:BillingSpecifiedPeriod`, `None` when neither bound is set.
pub(crate) fn billing_period(period: &SpecifiedPeriod, scope: &Scope) -> EmitResult<Option<Element>> {
    let mut el = Element::new("ram:BillingSpecifiedPeriod");
    el.push_opt(scope.date_time(Field::Period(PeriodField::Start), period.start)?);
    el.push_opt(scope.date_time(Field::Period(PeriodField::End), period.end)?);
    Ok((!el.is_empty()).then_some(el))
}

fn payment_terms(terms: &PaymentTerms, scope: &Scope) -> EmitResult<Option<Element>> {
    let f = Field::PaymentTerms;
    let mut el = Element::new("ram:SpecifiedTradePaymentTerms");
    el.push_opt(scope.text(f(PaymentTermsField::Description), present(&terms.description))?);
    el.push_opt(scope.date_time(f(PaymentTermsField::DueDate), terms.due_date)?);
    el.push_opt(scope.text(
        f(PaymentTermsField::DirectDebitMandateId),
        present(&terms.direct_debit_mandate_id),
    )?);
    Ok((!el.is_empty()).then_some(el))
}

fn monetary_summation(
    sums: &HeaderMonetarySummation,
    invoice_currency: &str,
    tax_currency: Option<&str>,
    settlement: &Scope,
    scope: &Scope,
) -> EmitResult<Element> {
    let f = Field::Summation;
    let mut el = Element::new("ram:SpecifiedTradeSettlementHeaderMonetarySummation");

    el.push_opt(scope.amount(f(SummationField::LineTotal), sums.line_total)?);
    el.push_opt(scope.amount(f(SummationField::ChargeTotal), sums.charge_total)?);
    el.push_opt(scope.amount(f(SummationField::AllowanceTotal), sums.allowance_total)?);
    el.push_opt(scope.amount(f(SummationField::TaxBasisTotal), sums.tax_basis_total)?);

    // BT-110 carries the invoice currency, BT-111 the accounting currency.
    if let Some(total) = scope.amount(f(SummationField::TaxTotal), sums.tax_total)? {
        el.push(total.with_attr("currencyID", invoice_currency));
    }
    if let Some(total) = scope.amount(
        f(SummationField::TaxTotalInTaxCurrency),
        sums.tax_total_in_tax_currency,
    )? {
        let Some(code) = tax_currency else {
            return Err(FacturXError::MissingMandatoryField {
                path: settlement.path_of(Field::Settlement(SettlementField::TaxCurrencyCode)),
                profile: settlement.profile(),
            });
        };
        el.push(total.with_attr("currencyID", code));
    }

    el.push_opt(scope.amount(f(SummationField::Rounding), sums.rounding)?);
    el.push_opt(scope.amount(f(SummationField::GrandTotal), sums.grand_total)?);
    el.push_opt(scope.amount(f(SummationField::TotalPrepaid), sums.total_prepaid)?);
    el.push_opt(scope.amount(f(SummationField::DuePayable), sums.due_payable)?);
    Ok(el)
}
