use super::{EmitResult, Scope, id_wrapper, non_blank, present};
use crate::core::{ExchangedDocument, ExchangedDocumentContext, Note};
use crate::facturx::element::Element;
use crate::facturx::lattice::{ContextField, DocumentField, Field, NoteField};

pub(crate) const CONTEXT: &str = "rsm:ExchangedDocumentContext";
pub(crate) const DOCUMENT: &str = "rsm:ExchangedDocument";

/// `rsm:ExchangedDocumentContext`.
pub(crate) fn context(ctx: &ExchangedDocumentContext, root: &Scope) -> EmitResult<Element> {
    let scope = root.enter(CONTEXT);
    let mut el = Element::new(CONTEXT);

    let process = Field::Context(ContextField::BusinessProcess);
    if let Some(id) = scope.field(process, present(&ctx.business_process))? {
        el.push(id_wrapper(process.element(), id));
    }

    let guideline = Field::Context(ContextField::Guideline);
    if let Some(urn) = scope.field(guideline, Some(ctx.guideline.urn()))? {
        el.push(id_wrapper(guideline.element(), urn));
    }
    Ok(el)
}

/// `rsm:ExchangedDocument`.
pub(crate) fn exchanged_document(doc: &ExchangedDocument, root: &Scope) -> EmitResult<Element> {
    let scope = root.enter(DOCUMENT);
    let mut el = Element::new(DOCUMENT);

    el.push_opt(scope.text(Field::Document(DocumentField::Id), non_blank(&doc.id))?);

    let type_code = doc.type_code.map(|c| c.code().to_string());
    el.push_opt(scope.text(Field::Document(DocumentField::TypeCode), type_code.as_deref())?);

    el.push_opt(scope.date_time(Field::Document(DocumentField::IssueDate), doc.issue_date)?);

    let notes_field = Field::Document(DocumentField::Notes);
    let notes = scope.list(notes_field, &doc.notes)?;
    for (i, note) in notes.iter().enumerate() {
        el.push(included_note(note, &scope.enter_item(notes_field, i, notes.len()))?);
    }
    Ok(el)
}

fn included_note(note: &Note, scope: &Scope) -> EmitResult<Element> {
    let mut el = Element::new("ram:IncludedNote");
    el.push_opt(scope.text(Field::Note(NoteField::Content), non_blank(&note.content))?);
    el.push_opt(scope.text(
        Field::Note(NoteField::SubjectCode),
        note.subject_code.map(|c| c.code()),
    )?);
    Ok(el)
}
