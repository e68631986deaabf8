use super::{EmitResult, Scope, present};
use crate::core::{BinaryObject, CodeList, ReferencedDocument};
use crate::facturx::codec;
use crate::facturx::element::Element;
use crate::facturx::lattice::{Field, ReferenceField};

/// Any `ram:*ReferencedDocument`. `scope` is the scope of the element itself.
pub(crate) fn referenced_document(
    doc: &ReferencedDocument,
    name: &'static str,
    scope: &Scope,
) -> EmitResult<Element> {
    let f = Field::Reference;
    let mut el = Element::new(name);

    el.push_opt(scope.text(
        f(ReferenceField::IssuerAssignedId),
        present(&doc.issuer_assigned_id),
    )?);
    el.push_opt(scope.text(f(ReferenceField::UriId), present(&doc.uri_id))?);
    el.push_opt(scope.text(f(ReferenceField::LineId), present(&doc.line_id))?);

    let type_code = doc.type_code.map(|c| c.code().to_string());
    el.push_opt(scope.text(f(ReferenceField::TypeCode), type_code.as_deref())?);
    el.push_opt(scope.text(f(ReferenceField::Name), present(&doc.name))?);

    let attachment = f(ReferenceField::Attachment);
    if let Some(object) = scope.field(attachment, doc.attachment.as_ref())? {
        el.push(binary_object(object, &scope.path_of(attachment))?);
    }

    el.push_opt(scope.text(
        f(ReferenceField::ReferenceTypeCode),
        present(&doc.reference_type_code),
    )?);

    let issued = f(ReferenceField::IssueDate);
    if let Some(date) = scope.field(issued, doc.issue_date.as_ref())? {
        el.push(scope.wrapped_date(issued.element(), "qdt:DateTimeString", *date)?);
    }
    Ok(el)
}

fn binary_object(object: &BinaryObject, path: &str) -> EmitResult<Element> {
    let content = codec::encode_binary(&object.content, path)?;
    let mime = codec::encode_code(CodeList::MimeCode, &object.mime_code, &format!("{path}/@mimeCode"))?;
    let mut el = Element::with_text("ram:AttachmentBinaryObject", content).with_attr("mimeCode", mime);
    if !object.filename.trim().is_empty() {
        el = el.with_attr("filename", &object.filename);
    }
    Ok(el)
}
