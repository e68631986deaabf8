use super::{EmitResult, Scope, non_blank, present};
use crate::core::{CodeList, LegalOrganization, TradeAddress, TradeContact, TradeParty};
use crate::facturx::codec;
use crate::facturx::element::Element;
use crate::facturx::lattice::{AddressField, ContactField, Field, PartyField, PartyRole};

/// Any `ram:*TradeParty`. `scope` is the scope of the party element itself.
pub(crate) fn trade_party(
    party: &TradeParty,
    role: PartyRole,
    name: &'static str,
    scope: &Scope,
) -> EmitResult<Element> {
    let f = |field| Field::Party(role, field);
    let mut el = Element::new(name);

    for id in scope.list(f(PartyField::Ids), &party.ids)? {
        if let Some(id) = non_blank(id) {
            el.push(Element::with_text("ram:ID", id));
        }
    }
    for gid in scope.list(f(PartyField::GlobalIds), &party.global_ids)? {
        if let Some(id) = non_blank(&gid.id) {
            el.push(Element::with_text("ram:GlobalID", id).with_attr("schemeID", &gid.scheme_id));
        }
    }

    el.push_opt(scope.text(f(PartyField::Name), present(&party.name))?);
    el.push_opt(scope.text(f(PartyField::Description), present(&party.description))?);

    let legal = f(PartyField::LegalOrganization);
    if let Some(org) = scope.field(legal, party.legal_organization.as_ref())? {
        el.push(legal_organization(org, role, &scope.enter_field(legal))?);
    }

    let contact = f(PartyField::Contact);
    if let Some(c) = scope.field(contact, party.contact.as_ref())? {
        el.push_opt(trade_contact(c, &scope.enter_field(contact))?);
    }

    let address = f(PartyField::PostalAddress);
    if let Some(a) = scope.field(address, party.address.as_ref())? {
        el.push(postal_address(a, &scope.enter_field(address))?);
    }

    let uri = f(PartyField::ElectronicAddress);
    if let Some(ea) = scope.field(uri, party.electronic_address.as_ref())? {
        let uri_scope = scope.enter_field(uri);
        let mut id = uri_scope.required_text("ram:URIID", &ea.value)?;
        if let Some(scheme) = non_blank(&ea.scheme) {
            id = id.with_attr("schemeID", scheme);
        }
        let mut wrapper = Element::new(uri.element());
        wrapper.push(id);
        el.push(wrapper);
    }

    // BT-31 / BT-32: VAT identifier before local tax number
    for (field, value, scheme) in [
        (PartyField::VatId, &party.vat_id, "VA"),
        (PartyField::TaxNumber, &party.tax_number, "FC"),
    ] {
        if let Some(id) = scope.field(f(field), present(value))? {
            let mut registration = Element::new("ram:SpecifiedTaxRegistration");
            registration.push(Element::with_text("ram:ID", id).with_attr("schemeID", scheme));
            el.push(registration);
        }
    }

    Ok(el)
}

fn legal_organization(
    org: &LegalOrganization,
    role: PartyRole,
    scope: &Scope,
) -> EmitResult<Element> {
    let mut el = Element::new("ram:SpecifiedLegalOrganization");
    let id_field = Field::Party(role, PartyField::LegalOrganizationId);
    if let Some(id) = scope.field(id_field, non_blank(&org.id))? {
        let mut id_el = Element::with_text("ram:ID", id);
        if let Some(scheme) = present(&org.scheme_id) {
            id_el = id_el.with_attr("schemeID", scheme);
        }
        el.push(id_el);
    }
    el.push_opt(scope.text(
        Field::Party(role, PartyField::TradingBusinessName),
        present(&org.trading_business_name),
    )?);
    Ok(el)
}

/// Returns `None` when the contact carries nothing to emit.
fn trade_contact(contact: &TradeContact, scope: &Scope) -> EmitResult<Option<Element>> {
    let mut el = Element::new("ram:DefinedTradeContact");
    el.push_opt(scope.text(
        Field::Contact(ContactField::PersonName),
        present(&contact.person_name),
    )?);
    el.push_opt(scope.text(
        Field::Contact(ContactField::DepartmentName),
        present(&contact.department_name),
    )?);

    let phone = Field::Contact(ContactField::Telephone);
    if let Some(number) = scope.field(phone, present(&contact.telephone))? {
        let mut wrapper = Element::new(phone.element());
        wrapper.push(Element::with_text("ram:CompleteNumber", number));
        el.push(wrapper);
    }
    let email = Field::Contact(ContactField::Email);
    if let Some(address) = scope.field(email, present(&contact.email))? {
        let mut wrapper = Element::new(email.element());
        wrapper.push(Element::with_text("ram:URIID", address));
        el.push(wrapper);
    }

    Ok((!el.is_empty()).then_some(el))
}

/// `ram:PostalTradeAddress`.
pub(crate) fn postal_address(address: &TradeAddress, scope: &Scope) -> EmitResult<Element> {
    let mut el = Element::new("ram:PostalTradeAddress");
    let f = Field::Address;
    el.push_opt(scope.text(f(AddressField::Postcode), present(&address.postcode))?);
    el.push_opt(scope.text(f(AddressField::LineOne), present(&address.line_one))?);
    el.push_opt(scope.text(f(AddressField::LineTwo), present(&address.line_two))?);
    el.push_opt(scope.text(f(AddressField::LineThree), present(&address.line_three))?);
    el.push_opt(scope.text(f(AddressField::City), present(&address.city))?);

    let country = f(AddressField::Country);
    if let Some(code) = scope.field(country, non_blank(&address.country_code))? {
        let code = codec::encode_code(CodeList::Country, code, &scope.path_of(country))?;
        el.push(Element::with_text(country.element(), code));
    }

    el.push_opt(scope.text(f(AddressField::Subdivision), present(&address.subdivision))?);
    Ok(el)
}
