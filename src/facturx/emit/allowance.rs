use super::tax::trade_tax;
use super::{EmitResult, Scope, present};
use crate::core::{CodeList, TradeAllowanceCharge};
use crate::facturx::codec;
use crate::facturx::element::Element;
use crate::facturx::lattice::{AllowanceChargeField, ChargeScope, Field, TaxScope};

/// Header, line or gross price allowance/charge.
pub(crate) fn allowance_charge(
    ac: &TradeAllowanceCharge,
    kind: ChargeScope,
    name: &'static str,
    scope: &Scope,
) -> EmitResult<Element> {
    let f = |field| Field::AllowanceCharge(kind, field);
    let mut el = Element::new(name);

    let indicator = f(AllowanceChargeField::ChargeIndicator);
    if scope.field(indicator, Some(&ac.is_charge))?.is_some() {
        let mut wrapper = Element::new(indicator.element());
        wrapper.push(Element::with_text(
            "udt:Indicator",
            codec::encode_indicator(ac.is_charge),
        ));
        el.push(wrapper);
    }

    let percent = f(AllowanceChargeField::CalculationPercent);
    if let Some(p) = scope.field(percent, ac.calculation_percent.as_ref())? {
        el.push(Element::with_text(percent.element(), codec::encode_percent(*p)));
    }

    // Gross price discounts are unit amounts and may carry price precision.
    if kind == ChargeScope::GrossPrice {
        let actual = f(AllowanceChargeField::ActualAmount);
        if let Some(amount) = scope.field(actual, ac.actual_amount.as_ref())? {
            let text = codec::encode_price(*amount, &scope.path_of(actual))?;
            el.push(Element::with_text(actual.element(), text));
        }
    } else {
        el.push_opt(scope.amount(f(AllowanceChargeField::BasisAmount), ac.basis_amount)?);
        el.push_opt(scope.amount(f(AllowanceChargeField::ActualAmount), ac.actual_amount)?);
    }

    let reason_code = f(AllowanceChargeField::ReasonCode);
    if let Some(code) = scope.field(reason_code, present(&ac.reason_code))? {
        let list = if ac.is_charge {
            CodeList::ChargeReason
        } else {
            CodeList::AllowanceReason
        };
        let code = codec::encode_code(list, code, &scope.path_of(reason_code))?;
        el.push(Element::with_text(reason_code.element(), code));
    }
    el.push_opt(scope.text(f(AllowanceChargeField::Reason), present(&ac.reason))?);

    let category = f(AllowanceChargeField::CategoryTax);
    if let Some(tax) = scope.field(category, ac.category_tax.as_ref())? {
        el.push(trade_tax(
            tax,
            TaxScope::AllowanceCharge,
            category.element(),
            &scope.enter_field(category),
        )?);
    }

    Ok(el)
}
