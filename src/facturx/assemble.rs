use tracing::{debug, instrument, trace};

use super::element::Element;
use super::emit::agreement::header_agreement;
use super::emit::delivery::header_delivery;
use super::emit::document::{context, exchanged_document};
use super::emit::line::line_item;
use super::emit::settlement::header_settlement;
use super::emit::{EmitResult, ROOT, Scope};
use super::lattice::{Field, TransactionField};
use crate::core::{FacturXError, InvoiceDocument, LineItem, Profile};

const TRANSACTION: &str = "rsm:SupplyChainTradeTransaction";

/// Build the CII element tree of `doc` at `profile`.
///
/// The declared guideline must equal `profile`. Fields not permitted at
/// `profile` are dropped, absent mandatory fields fail with their schema
/// path. The walk visits context, document, agreement, delivery, settlement
/// and finally the line items, and stops at the first failure, so the
/// same input always yields the same tree or the same error.
///
/// ```
/// use chrono::NaiveDate;
/// use facturx::core::*;
/// use facturx::facturx::assemble;
/// use rust_decimal_macros::dec;
///
/// let doc = InvoiceBuilder::new(Profile::Minimum, "FA-1", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .seller(PartyBuilder::new("Lapin SARL").build())
///     .buyer(PartyBuilder::new("Client SA").build())
///     .add_line(LineItemBuilder::new("1", "Conseil", dec!(10), "HUR", dec!(10)).build())
///     .totals(HeaderMonetarySummation::new(dec!(100), dec!(20), dec!(120)))
///     .build();
///
/// let tree = assemble(&doc, Profile::Minimum).unwrap();
/// assert_eq!(tree.find("rsm:ExchangedDocument/ram:ID").and_then(|e| e.text()), Some("FA-1"));
/// ```
#[instrument(level = "debug", skip_all, fields(invoice = %doc.document.id, profile = %profile))]
pub fn assemble(doc: &InvoiceDocument, profile: Profile) -> Result<Element, FacturXError> {
    if doc.context.guideline != profile {
        return Err(FacturXError::ProfileMismatch {
            declared: doc.context.guideline,
            requested: profile,
        });
    }

    build(doc, &Scope::root(profile)).inspect_err(|e| {
        debug!(path = e.path().unwrap_or("-"), error = %e, "assembly failed");
    })
}

fn build(doc: &InvoiceDocument, root: &Scope) -> EmitResult<Element> {
    let mut tree = Element::new(ROOT);
    tree.push(context(&doc.context, root)?);
    tree.push(exchanged_document(&doc.document, root)?);

    let scope = root.enter(TRANSACTION);
    let transaction = &doc.transaction;
    let agreement = header_agreement(&transaction.agreement, &scope)?;
    let delivery = header_delivery(&transaction.delivery, &scope)?;
    let settlement = header_settlement(&transaction.settlement, &scope)?;
    let lines = line_items(&transaction.line_items, &scope)?;

    let mut trade = Element::new(TRANSACTION);
    trade.extend(lines);
    trade.push(agreement);
    trade.push(delivery);
    trade.push(settlement);
    tree.push(trade);

    debug!(lines = transaction.line_items.len(), "assembled");
    Ok(tree)
}

/// An invoice bills at least one line at every profile, even at profiles
/// where lines are not emitted.
fn line_items(lines: &[LineItem], scope: &Scope) -> EmitResult<Vec<Element>> {
    let field = Field::Transaction(TransactionField::LineItems);
    if lines.is_empty() {
        return Err(FacturXError::EmptyTransaction {
            path: scope.path_of(field),
        });
    }
    if !scope.allows(field) {
        trace!(count = lines.len(), profile = %scope.profile(), "line items stripped");
        return Ok(Vec::new());
    }
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| line_item(line, field.element(), &scope.enter_item(field, i, lines.len())))
        .collect()
}
