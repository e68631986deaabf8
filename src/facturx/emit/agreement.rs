use super::party::trade_party;
use super::reference::referenced_document;
use super::{EmitResult, Scope, non_blank, present};
use crate::core::HeaderTradeAgreement;
use crate::facturx::element::Element;
use crate::facturx::lattice::{AgreementField, Field, PartyRole, ProjectField};

pub(crate) const AGREEMENT: &str = "ram:ApplicableHeaderTradeAgreement";

/// `ram:ApplicableHeaderTradeAgreement`. `scope` is the transaction scope.
pub(crate) fn header_agreement(
    agreement: &HeaderTradeAgreement,
    transaction: &Scope,
) -> EmitResult<Element> {
    let scope = transaction.enter(AGREEMENT);
    let f = Field::Agreement;
    let mut el = Element::new(AGREEMENT);

    el.push_opt(scope.text(
        f(AgreementField::BuyerReference),
        present(&agreement.buyer_reference),
    )?);

    for (field, role, party) in [
        (AgreementField::Seller, PartyRole::Seller, Some(&agreement.seller)),
        (AgreementField::Buyer, PartyRole::Buyer, Some(&agreement.buyer)),
        (
            AgreementField::SellerTaxRepresentative,
            PartyRole::SellerTaxRepresentative,
            agreement.seller_tax_representative.as_ref(),
        ),
    ] {
        if let Some(party) = scope.field(f(field), party)? {
            let name = f(field).element();
            el.push(trade_party(party, role, name, &scope.enter(name))?);
        }
    }

    for field in [AgreementField::BuyerOrder, AgreementField::Contract] {
        let doc = match field {
            AgreementField::BuyerOrder => agreement.buyer_order.as_ref(),
            _ => agreement.contract.as_ref(),
        };
        if let Some(doc) = scope.field(f(field), doc)? {
            let name = f(field).element();
            el.push(referenced_document(doc, name, &scope.enter(name))?);
        }
    }

    let additional = f(AgreementField::AdditionalDocuments);
    let documents = scope.list(additional, &agreement.additional_documents)?;
    for (i, doc) in documents.iter().enumerate() {
        let item = scope.enter_item(additional, i, documents.len());
        el.push(referenced_document(doc, additional.element(), &item)?);
    }

    let project = f(AgreementField::ProcuringProject);
    if let Some(p) = scope.field(project, agreement.procuring_project.as_ref())? {
        let project_scope = scope.enter_field(project);
        let mut project_el = Element::new(project.element());
        project_el.push_opt(project_scope.text(Field::Project(ProjectField::Id), non_blank(&p.id))?);
        project_el.push_opt(
            project_scope.text(Field::Project(ProjectField::Name), non_blank(&p.name))?,
        );
        el.push(project_el);
    }

    Ok(el)
}
