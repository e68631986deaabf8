use super::allowance::allowance_charge;
use super::reference::referenced_document;
use super::settlement::billing_period;
use super::tax::trade_tax;
use super::{EmitResult, Scope, id_wrapper, non_blank, present};
use crate::core::{CodeList, LineItem, Quantity, TradePrice, TradeProduct};
use crate::facturx::codec;
use crate::facturx::element::Element;
use crate::facturx::lattice::{
    ChargeScope, Field, LineField, PriceField, PriceKind, ProductField, TaxScope,
};

const LINE_DOCUMENT: &str = "ram:AssociatedDocumentLineDocument";
const LINE_AGREEMENT: &str = "ram:SpecifiedLineTradeAgreement";
const LINE_DELIVERY: &str = "ram:SpecifiedLineTradeDelivery";
const LINE_SETTLEMENT: &str = "ram:SpecifiedLineTradeSettlement";
const LINE_SUMMATION: &str = "ram:SpecifiedTradeSettlementLineMonetarySummation";

/// `ram:IncludedSupplyChainTradeLineItem`. `scope` is the scope of the line
/// element itself, already indexed.
pub(crate) fn line_item(line: &LineItem, name: &'static str, scope: &Scope) -> EmitResult<Element> {
    let f = Field::Line;
    let mut el = Element::new(name);

    // BG-25 document part
    let doc_scope = scope.enter(LINE_DOCUMENT);
    let mut doc = Element::new(LINE_DOCUMENT);
    doc.push_opt(doc_scope.text(f(LineField::LineId), non_blank(&line.line_id))?);
    if let Some(note) = doc_scope.field(f(LineField::Note), present(&line.note))? {
        let mut note_el = Element::new(f(LineField::Note).element());
        note_el.push(Element::with_text("ram:Content", note));
        doc.push(note_el);
    }
    el.push(doc);

    let product = f(LineField::Product);
    if let Some(p) = scope.field(product, Some(&line.product))? {
        el.push(trade_product(p, &scope.enter_field(product))?);
    }

    // Agreement: order reference, gross price, net price
    let agreement_scope = scope.enter(LINE_AGREEMENT);
    let mut agreement = Element::new(LINE_AGREEMENT);
    let order_line = f(LineField::BuyerOrderLine);
    if let Some(id) = agreement_scope.field(
        order_line,
        present(&line.agreement.buyer_order_line_id),
    )? {
        let mut order = Element::new(order_line.element());
        order.push(Element::with_text("ram:LineID", id));
        agreement.push(order);
    }
    for (field, kind, price) in [
        (LineField::GrossPrice, PriceKind::Gross, line.agreement.gross_price.as_ref()),
        (LineField::NetPrice, PriceKind::Net, line.agreement.net_price.as_ref()),
    ] {
        if let Some(price) = agreement_scope.field(f(field), price)? {
            let name = f(field).element();
            agreement.push(trade_price(price, kind, name, &agreement_scope.enter(name))?);
        }
    }
    el.push(agreement);

    let delivery_scope = scope.enter(LINE_DELIVERY);
    let mut delivery = Element::new(LINE_DELIVERY);
    let billed = f(LineField::BilledQuantity);
    if let Some(q) = delivery_scope.field(billed, line.delivery.billed_quantity.as_ref())? {
        delivery.push(quantity(q, billed.element(), &delivery_scope.path_of(billed))?);
    }
    el.push(delivery);

    el.push(line_settlement(line, &scope.enter(LINE_SETTLEMENT))?);
    Ok(el)
}

fn line_settlement(line: &LineItem, scope: &Scope) -> EmitResult<Element> {
    let f = Field::Line;
    let settlement = &line.settlement;
    let mut el = Element::new(LINE_SETTLEMENT);

    let tax = f(LineField::Tax);
    if let Some(t) = scope.field(tax, settlement.tax.as_ref())? {
        el.push(trade_tax(t, TaxScope::Line, tax.element(), &scope.enter_field(tax))?);
    }

    let period = f(LineField::BillingPeriod);
    if let Some(p) = scope.field(period, settlement.billing_period.as_ref())? {
        el.push_opt(billing_period(p, &scope.enter_field(period))?);
    }

    let charges_field = f(LineField::AllowanceCharges);
    let charges = scope.list(charges_field, &settlement.allowance_charges)?;
    for (i, ac) in charges.iter().enumerate() {
        let item = scope.enter_item(charges_field, i, charges.len());
        el.push(allowance_charge(ac, ChargeScope::Line, charges_field.element(), &item)?);
    }

    let sum_scope = scope.enter(LINE_SUMMATION);
    let mut summation = Element::new(LINE_SUMMATION);
    summation.push_opt(sum_scope.amount(f(LineField::LineTotal), settlement.line_total_amount)?);
    if !summation.is_empty() {
        el.push(summation);
    }

    let additional = f(LineField::AdditionalDocument);
    if let Some(doc) = scope.field(additional, settlement.additional_document.as_ref())? {
        el.push(referenced_document(
            doc,
            additional.element(),
            &scope.enter_field(additional),
        )?);
    }

    let account = f(LineField::AccountingAccount);
    if let Some(id) = scope.field(account, present(&settlement.accounting_account))? {
        el.push(id_wrapper(account.element(), id));
    }
    Ok(el)
}

fn trade_product(product: &TradeProduct, scope: &Scope) -> EmitResult<Element> {
    let f = Field::Product;
    let mut el = Element::new("ram:SpecifiedTradeProduct");

    if let Some(gid) = scope.field(f(ProductField::GlobalId), product.global_id.as_ref())? {
        if let Some(id) = non_blank(&gid.id) {
            el.push(Element::with_text("ram:GlobalID", id).with_attr("schemeID", &gid.scheme_id));
        }
    }
    el.push_opt(scope.text(
        f(ProductField::SellerAssignedId),
        present(&product.seller_assigned_id),
    )?);
    el.push_opt(scope.text(
        f(ProductField::BuyerAssignedId),
        present(&product.buyer_assigned_id),
    )?);
    el.push_opt(scope.text(f(ProductField::Name), present(&product.name))?);
    el.push_opt(scope.text(f(ProductField::Description), present(&product.description))?);

    let characteristics = f(ProductField::Characteristics);
    for c in scope.list(characteristics, &product.characteristics)? {
        let mut item = Element::new(characteristics.element());
        item.push(Element::with_text("ram:Description", &c.description));
        item.push(Element::with_text("ram:Value", &c.value));
        el.push(item);
    }

    let classifications = f(ProductField::Classifications);
    for c in scope.list(classifications, &product.classifications)? {
        let Some(code) = non_blank(&c.class_code) else {
            continue;
        };
        let mut class_code = Element::with_text("ram:ClassCode", code);
        if let Some(list) = present(&c.list_id) {
            class_code = class_code.with_attr("listID", list);
        }
        if let Some(version) = present(&c.list_version_id) {
            class_code = class_code.with_attr("listVersionID", version);
        }
        let mut item = Element::new(classifications.element());
        item.push(class_code);
        el.push(item);
    }

    let origin = f(ProductField::OriginCountry);
    if let Some(country) = scope.field(origin, present(&product.origin_country))? {
        let path = format!("{}/ram:ID", scope.path_of(origin));
        let country = codec::encode_code(CodeList::Country, country, &path)?;
        el.push(id_wrapper(origin.element(), country));
    }

    Ok(el)
}

fn trade_price(
    price: &TradePrice,
    kind: PriceKind,
    name: &'static str,
    scope: &Scope,
) -> EmitResult<Element> {
    let f = |field| Field::Price(kind, field);
    let mut el = Element::new(name);

    let amount = f(PriceField::ChargeAmount);
    if let Some(value) = scope.field(amount, Some(&price.charge_amount))? {
        let text = codec::encode_price(*value, &scope.path_of(amount))?;
        el.push(Element::with_text(amount.element(), text));
    }

    let basis = f(PriceField::BasisQuantity);
    if let Some(q) = scope.field(basis, price.basis_quantity.as_ref())? {
        el.push(quantity(q, basis.element(), &scope.path_of(basis))?);
    }

    let applied = f(PriceField::AppliedAllowance);
    if let Some(ac) = scope.field(applied, price.applied_allowance.as_ref())? {
        el.push(allowance_charge(
            ac,
            ChargeScope::GrossPrice,
            applied.element(),
            &scope.enter_field(applied),
        )?);
    }
    Ok(el)
}

fn quantity(q: &Quantity, name: &'static str, path: &str) -> EmitResult<Element> {
    let value = codec::encode_quantity(q.value, path)?;
    let unit = codec::encode_code(CodeList::Unit, &q.unit_code, &format!("{path}/@unitCode"))?;
    Ok(Element::with_text(name, value).with_attr("unitCode", unit))
}
