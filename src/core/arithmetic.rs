use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::builder::{line_net_amount, round_half_up};
use super::error::ValidationError;
use super::types::*;

/// Check the cross-field arithmetic of a document (EN 16931 BR-CO rules).
///
/// Assembly never calls this: totals are serialized as given. Callers that
/// want a consistency check before handing the XML to a Schematron validator
/// run it explicitly. Checks whose inputs are absent are skipped; checks whose
/// expected value overflows report that instead of a mismatch.
pub fn validate_arithmetic(doc: &InvoiceDocument) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let settlement = &doc.transaction.settlement;
    let sums = &settlement.monetary_summation;
    let zero = Decimal::ZERO;

    for (i, line) in doc.transaction.line_items.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    // BR-CO-10: Sum of line net amounts
    if let Some(line_total) = sums.line_total {
        let field = "settlement.monetary_summation.line_total";
        match checked_sum(
            doc.transaction
                .line_items
                .iter()
                .filter_map(|l| l.settlement.line_total_amount),
        ) {
            Some(expected) if line_total != expected => errors.push(ValidationError::with_rule(
                field,
                format!("line total {line_total} does not match sum of line amounts {expected}"),
                "BR-CO-10",
            )),
            Some(_) => {}
            None => errors.push(overflow(field, "sum of line amounts", "BR-CO-10")),
        }
    }

    // BR-CO-11 / BR-CO-12: Sums of document level allowances and charges
    let amounts = |charge: bool| {
        checked_sum(
            settlement
                .allowance_charges
                .iter()
                .filter(|ac| ac.is_charge == charge)
                .filter_map(|ac| ac.actual_amount),
        )
    };
    for (total, charge, field, label, what, rule) in [
        (
            sums.allowance_total,
            false,
            "settlement.monetary_summation.allowance_total",
            "allowance total",
            "allowances",
            "BR-CO-11",
        ),
        (
            sums.charge_total,
            true,
            "settlement.monetary_summation.charge_total",
            "charge total",
            "charges",
            "BR-CO-12",
        ),
    ] {
        let Some(total) = total else { continue };
        match amounts(charge) {
            Some(expected) if total != expected => errors.push(ValidationError::with_rule(
                field,
                format!("{label} {total} does not match sum of {what} {expected}"),
                rule,
            )),
            Some(_) => {}
            None => errors.push(overflow(field, &format!("sum of {what}"), rule)),
        }
    }

    // BR-CO-13: tax basis = line total - allowances + charges
    if let (Some(basis), Some(line_total)) = (sums.tax_basis_total, sums.line_total) {
        let field = "settlement.monetary_summation.tax_basis_total";
        let expected = line_total
            .checked_sub(sums.allowance_total.unwrap_or(zero))
            .and_then(|v| v.checked_add(sums.charge_total.unwrap_or(zero)));
        match expected {
            Some(expected) if basis != expected => errors.push(ValidationError::with_rule(
                field,
                format!("tax basis total {basis} does not match calculation {expected}"),
                "BR-CO-13",
            )),
            Some(_) => {}
            None => errors.push(overflow(field, "tax basis calculation", "BR-CO-13")),
        }
    }

    // BR-CO-14: VAT total = sum of breakdown amounts
    if let (Some(tax_total), false) = (sums.tax_total, settlement.taxes.is_empty()) {
        let field = "settlement.monetary_summation.tax_total";
        match checked_sum(settlement.taxes.iter().filter_map(|t| t.calculated_amount)) {
            Some(expected) if tax_total != expected => errors.push(ValidationError::with_rule(
                field,
                format!("tax total {tax_total} does not match sum of breakdown amounts {expected}"),
                "BR-CO-14",
            )),
            Some(_) => {}
            None => errors.push(overflow(field, "sum of breakdown amounts", "BR-CO-14")),
        }
    }

    // BR-CO-15: grand total = tax basis + VAT
    if let (Some(grand), Some(basis)) = (sums.grand_total, sums.tax_basis_total) {
        let field = "settlement.monetary_summation.grand_total";
        let tax = sums.tax_total.unwrap_or(zero);
        match basis.checked_add(tax) {
            Some(expected) if grand != expected => errors.push(ValidationError::with_rule(
                field,
                format!("grand total {grand} does not match basis {basis} + tax {tax}"),
                "BR-CO-15",
            )),
            Some(_) => {}
            None => errors.push(overflow(field, "basis + tax", "BR-CO-15")),
        }
    }

    // BR-CO-16: due = grand total - prepaid + rounding
    if let (Some(due), Some(grand)) = (sums.due_payable, sums.grand_total) {
        let field = "settlement.monetary_summation.due_payable";
        let prepaid = sums.total_prepaid.unwrap_or(zero);
        let rounding = sums.rounding.unwrap_or(zero);
        match grand.checked_sub(prepaid).and_then(|v| v.checked_add(rounding)) {
            Some(expected) if due != expected => errors.push(ValidationError::with_rule(
                field,
                format!(
                    "amount due {due} does not match grand {grand} - prepaid {prepaid} + rounding {rounding}"
                ),
                "BR-CO-16",
            )),
            Some(_) => {}
            None => errors.push(overflow(field, "grand - prepaid + rounding", "BR-CO-16")),
        }
    }

    // BR-CO-17: category tax = basis × rate / 100
    // ±0.02 absorbs line-level rounding accumulated per category.
    for (i, tax) in settlement.taxes.iter().enumerate() {
        let (Some(calculated), Some(basis), Some(rate)) = (
            tax.calculated_amount,
            tax.basis_amount,
            tax.rate_applicable_percent,
        ) else {
            continue;
        };
        let field = format!("settlement.taxes[{i}].calculated_amount");
        let Some(expected) = basis
            .checked_mul(rate)
            .and_then(|v| v.checked_div(dec!(100)))
            .map(|v| round_half_up(v, 2))
        else {
            errors.push(overflow(&field, "basis × rate", "BR-CO-17"));
            continue;
        };
        if exceeds(calculated, expected, dec!(0.02)) {
            errors.push(ValidationError::with_rule(
                field,
                format!(
                    "tax amount {calculated} does not match basis {basis} × rate {rate}% = {expected} (tolerance ±0.02)"
                ),
                "BR-CO-17",
            ));
        }
    }

    errors
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let (Some(total), Some(price), Some(quantity)) = (
        line.settlement.line_total_amount,
        line.agreement.net_price.as_ref(),
        line.delivery.billed_quantity.as_ref(),
    ) else {
        return;
    };
    let field = format!("line_items[{index}].settlement.line_total_amount");
    let basis = price.basis_quantity.as_ref().map(|q| q.value);
    let Some(expected) = line_net_amount(
        quantity.value,
        price.charge_amount,
        basis,
        &line.settlement.allowance_charges,
    ) else {
        errors.push(overflow(&field, "quantity × price", "BR-LIN-04"));
        return;
    };
    if exceeds(total, expected, dec!(0.01)) {
        errors.push(ValidationError::with_rule(
            field,
            format!(
                "line amount {total} does not match quantity {} × price {} = {expected}",
                quantity.value, price.charge_amount
            ),
            "BR-LIN-04",
        ));
    }
}

fn checked_sum(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    values.fold(Some(Decimal::ZERO), |acc, v| acc?.checked_add(v))
}

/// `|actual - expected| > tolerance`; a difference too large to represent
/// exceeds any tolerance.
fn exceeds(actual: Decimal, expected: Decimal, tolerance: Decimal) -> bool {
    actual
        .checked_sub(expected)
        .is_none_or(|diff| diff.abs() > tolerance)
}

fn overflow(field: &str, what: &str, rule: &str) -> ValidationError {
    ValidationError::with_rule(field, format!("{what} overflows the decimal range"), rule)
}
