//! Element emitters.
//!
//! One function per CII aggregate. Each receives the [`Scope`] of the element
//! it builds and consults the lattice through it for every child: fields not
//! permitted at the target profile are dropped, absent fields that are
//! mandatory fail with their full schema path.

pub(crate) mod agreement;
pub(crate) mod allowance;
pub(crate) mod delivery;
pub(crate) mod document;
pub(crate) mod line;
pub(crate) mod party;
pub(crate) mod reference;
pub(crate) mod settlement;
pub(crate) mod tax;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::codec;
use super::element::Element;
use super::lattice::{self, Field};
use crate::core::{FacturXError, Profile};

pub(crate) type EmitResult<T> = Result<T, FacturXError>;

pub(crate) const ROOT: &str = "rsm:CrossIndustryInvoice";

/// Target profile plus the schema path of the element being built.
#[derive(Debug, Clone)]
pub(crate) struct Scope {
    profile: Profile,
    path: String,
}

impl Scope {
    pub(crate) fn root(profile: Profile) -> Self {
        Self {
            profile,
            path: format!("/{ROOT}"),
        }
    }

    pub(crate) fn profile(&self) -> Profile {
        self.profile
    }

    pub(crate) fn path(&self) -> &str {
        &self.path
    }

    pub(crate) fn enter(&self, name: &str) -> Scope {
        Scope {
            profile: self.profile,
            path: format!("{}/{name}", self.path),
        }
    }

    pub(crate) fn enter_field(&self, field: Field) -> Scope {
        self.enter(field.element())
    }

    /// Scope of the `index`-th of `len` repeated `field` elements.
    pub(crate) fn enter_item(&self, field: Field, index: usize, len: usize) -> Scope {
        if len > 1 {
            self.enter(&format!("{}[{}]", field.element(), index + 1))
        } else {
            self.enter_field(field)
        }
    }

    pub(crate) fn path_of(&self, field: Field) -> String {
        format!("{}/{}", self.path, field.element())
    }

    pub(crate) fn allows(&self, field: Field) -> bool {
        lattice::is_allowed(field, self.profile)
    }

    fn missing(&self, field: Field) -> FacturXError {
        FacturXError::MissingMandatoryField {
            path: self.path_of(field),
            profile: self.profile,
        }
    }

    /// Gate one value through the lattice.
    ///
    /// Returns the value when the field is permitted and present, `None`
    /// when it is absent or not permitted, and an error when a mandatory
    /// field is absent.
    pub(crate) fn field<'a, T: ?Sized>(
        &self,
        field: Field,
        value: Option<&'a T>,
    ) -> EmitResult<Option<&'a T>> {
        if !self.allows(field) {
            if value.is_some() {
                tracing::trace!(
                    path = %self.path_of(field),
                    profile = %self.profile,
                    "field stripped"
                );
            }
            return Ok(None);
        }
        match value {
            None if lattice::is_required(field, self.profile) => Err(self.missing(field)),
            other => Ok(other),
        }
    }

    /// Gate a repeated field. Empty slices count as absent.
    pub(crate) fn list<'a, T>(&self, field: Field, values: &'a [T]) -> EmitResult<&'a [T]> {
        let gated = self.field(field, Some(values).filter(|v| !v.is_empty()))?;
        Ok(gated.unwrap_or(&[]))
    }

    /// A leaf that must exist whenever its parent does, independent of the
    /// lattice (an identifier inside an identifier wrapper).
    pub(crate) fn required_text(&self, name: &'static str, value: &str) -> EmitResult<Element> {
        if value.trim().is_empty() {
            return Err(FacturXError::MissingMandatoryField {
                path: format!("{}/{name}", self.path),
                profile: self.profile,
            });
        }
        Ok(Element::with_text(name, value))
    }

    /// Gated text leaf.
    pub(crate) fn text(&self, field: Field, value: Option<&str>) -> EmitResult<Option<Element>> {
        Ok(self
            .field(field, value)?
            .map(|v| Element::with_text(field.element(), v)))
    }

    /// Gated amount leaf, two decimals.
    pub(crate) fn amount(&self, field: Field, value: Option<Decimal>) -> EmitResult<Option<Element>> {
        match self.field(field, value.as_ref())? {
            Some(v) => {
                let text = codec::encode_amount(*v, &self.path_of(field))?;
                Ok(Some(Element::with_text(field.element(), text)))
            }
            None => Ok(None),
        }
    }

    /// Gated date wrapped in `udt:DateTimeString format="102"`.
    pub(crate) fn date_time(
        &self,
        field: Field,
        value: Option<NaiveDate>,
    ) -> EmitResult<Option<Element>> {
        match self.field(field, value.as_ref())? {
            Some(d) => Ok(Some(self.wrapped_date(field.element(), "udt:DateTimeString", *d)?)),
            None => Ok(None),
        }
    }

    /// `<outer><inner format="102">CCYYMMDD</inner></outer>`.
    pub(crate) fn wrapped_date(
        &self,
        outer: &'static str,
        inner: &'static str,
        date: NaiveDate,
    ) -> EmitResult<Element> {
        let path = format!("{}/{outer}/{inner}", self.path());
        let text = codec::encode_date(date, &path)?;
        let mut wrapper = Element::new(outer);
        wrapper.push(Element::with_text(inner, text).with_attr("format", codec::DATE_FORMAT_102));
        Ok(wrapper)
    }
}

/// Treat blank strings as absent.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

pub(crate) fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() { None } else { Some(value) }
}

/// `<name><ram:ID>value</ram:ID></name>`.
pub(crate) fn id_wrapper(name: &'static str, id: &str) -> Element {
    let mut wrapper = Element::new(name);
    wrapper.push(Element::with_text("ram:ID", id));
    wrapper
}
