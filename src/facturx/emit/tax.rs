use super::{EmitResult, Scope, present};
use crate::core::{CodeList, TradeTax};
use crate::facturx::codec;
use crate::facturx::element::Element;
use crate::facturx::lattice::{Field, TaxField, TaxScope};

/// `ram:ApplicableTradeTax` or `ram:CategoryTradeTax`, depending on `name`.
pub(crate) fn trade_tax(
    tax: &TradeTax,
    kind: TaxScope,
    name: &'static str,
    scope: &Scope,
) -> EmitResult<Element> {
    let f = |field| Field::Tax(kind, field);
    let mut el = Element::new(name);

    el.push_opt(scope.amount(f(TaxField::CalculatedAmount), tax.calculated_amount)?);
    el.push_opt(scope.text(f(TaxField::TypeCode), tax.type_code.map(|c| c.code()))?);
    el.push_opt(scope.text(f(TaxField::ExemptionReason), present(&tax.exemption_reason))?);
    el.push_opt(scope.amount(f(TaxField::BasisAmount), tax.basis_amount)?);
    el.push_opt(scope.text(f(TaxField::CategoryCode), tax.category_code.map(|c| c.code()))?);

    let vatex = f(TaxField::ExemptionReasonCode);
    if let Some(code) = scope.field(vatex, present(&tax.exemption_reason_code))? {
        let code = codec::encode_code(CodeList::VatExemption, code, &scope.path_of(vatex))?;
        el.push(Element::with_text(vatex.element(), code));
    }

    let point = f(TaxField::TaxPointDate);
    if let Some(date) = scope.field(point, tax.tax_point_date.as_ref())? {
        el.push(scope.wrapped_date(point.element(), "udt:DateString", *date)?);
    }

    let due = tax.due_date_type_code.map(|c| c.code().to_string());
    el.push_opt(scope.text(f(TaxField::DueDateTypeCode), due.as_deref())?);

    let rate = f(TaxField::RateApplicablePercent);
    if let Some(percent) = scope.field(rate, tax.rate_applicable_percent.as_ref())? {
        el.push(Element::with_text(rate.element(), codec::encode_percent(*percent)));
    }

    Ok(el)
}
