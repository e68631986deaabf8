use super::party::trade_party;
use super::reference::referenced_document;
use super::{EmitResult, Scope};
use crate::core::HeaderTradeDelivery;
use crate::facturx::element::Element;
use crate::facturx::lattice::{DeliveryField, Field, PartyRole};

pub(crate) const DELIVERY: &str = "ram:ApplicableHeaderTradeDelivery";

/// `ram:ApplicableHeaderTradeDelivery`. Emitted even when empty: the
/// aggregate is mandatory in every profile schema.
pub(crate) fn header_delivery(
    delivery: &HeaderTradeDelivery,
    transaction: &Scope,
) -> EmitResult<Element> {
    let scope = transaction.enter(DELIVERY);
    let f = Field::Delivery;
    let mut el = Element::new(DELIVERY);

    let ship_to = f(DeliveryField::ShipTo);
    if let Some(party) = scope.field(ship_to, delivery.ship_to.as_ref())? {
        el.push(trade_party(
            party,
            PartyRole::ShipTo,
            ship_to.element(),
            &scope.enter_field(ship_to),
        )?);
    }

    let event = f(DeliveryField::ActualDeliveryDate);
    if let Some(date) = scope.field(event, delivery.actual_delivery_date.as_ref())? {
        let event_scope = scope.enter_field(event);
        let mut event_el = Element::new(event.element());
        event_el.push(event_scope.wrapped_date("ram:OccurrenceDateTime", "udt:DateTimeString", *date)?);
        el.push(event_el);
    }

    for (field, doc) in [
        (DeliveryField::DespatchAdvice, delivery.despatch_advice.as_ref()),
        (DeliveryField::ReceivingAdvice, delivery.receiving_advice.as_ref()),
    ] {
        if let Some(doc) = scope.field(f(field), doc)? {
            let name = f(field).element();
            el.push(referenced_document(doc, name, &scope.enter(name))?);
        }
    }

    Ok(el)
}
