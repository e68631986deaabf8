use thiserror::Error;

use super::codes::CodeList;
use super::profile::Profile;

/// Errors raised while turning an invoice into a Factur-X element tree.
///
/// Every variant is deterministic: the same input always yields the same
/// error, and where a field is involved the variant carries its schema path
/// (e.g. `/rsm:CrossIndustryInvoice/rsm:ExchangedDocument/ram:ID`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FacturXError {
    /// The guideline declared in the document context differs from the
    /// profile requested of the assembler.
    #[error("profile mismatch: document declares {declared}, {requested} was requested")]
    ProfileMismatch { declared: Profile, requested: Profile },

    /// A field that is mandatory at the requested profile is absent.
    #[error("missing mandatory field {path} for profile {profile}")]
    MissingMandatoryField { path: String, profile: Profile },

    /// A code value that is not part of its code list.
    #[error("unknown {list} code {value:?}{}", at(.path))]
    UnknownCode {
        list: CodeList,
        value: String,
        path: Option<String>,
    },

    /// A leaf value that has no valid wire representation.
    #[error("cannot encode {path}: {reason}")]
    Encoding { path: String, reason: String },

    /// The transaction carries no line items.
    #[error("transaction at {path} has no line items")]
    EmptyTransaction { path: String },

    /// XML text rendering error.
    #[error("XML error: {0}")]
    Xml(String),
}

fn at(path: &Option<String>) -> String {
    match path {
        Some(p) => format!(" at {p}"),
        None => String::new(),
    }
}

impl FacturXError {
    /// Schema path of the offending field, if the error concerns one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingMandatoryField { path, .. }
            | Self::Encoding { path, .. }
            | Self::EmptyTransaction { path } => Some(path),
            Self::UnknownCode { path, .. } => path.as_deref(),
            Self::ProfileMismatch { .. } | Self::Xml(_) => None,
        }
    }

    pub(crate) fn unknown_code(list: CodeList, value: impl Into<String>) -> Self {
        Self::UnknownCode {
            list,
            value: value.into(),
            path: None,
        }
    }

    /// Attach a schema path to an [`FacturXError::UnknownCode`] that was
    /// raised without one. Other variants pass through unchanged.
    pub(crate) fn at_path(self, at: &str) -> Self {
        match self {
            Self::UnknownCode {
                list,
                value,
                path: None,
            } => Self::UnknownCode {
                list,
                value,
                path: Some(at.to_string()),
            },
            other => other,
        }
    }
}

/// A single finding of the arithmetic checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the field (e.g. "settlement.monetary_summation.grand_total").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// EN 16931 business rule ID if applicable (e.g. "BR-CO-15").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accessor() {
        let err = FacturXError::MissingMandatoryField {
            path: "/rsm:CrossIndustryInvoice/rsm:ExchangedDocument/ram:ID".into(),
            profile: Profile::Minimum,
        };
        assert_eq!(
            err.path(),
            Some("/rsm:CrossIndustryInvoice/rsm:ExchangedDocument/ram:ID")
        );

        let err = FacturXError::ProfileMismatch {
            declared: Profile::Basic,
            requested: Profile::EN16931,
        };
        assert_eq!(err.path(), None);
    }

    #[test]
    fn unknown_code_picks_up_path_once() {
        let err = FacturXError::unknown_code(CodeList::Currency, "XXY").at_path("/a/b");
        assert_eq!(err.path(), Some("/a/b"));
        let again = err.at_path("/c");
        assert_eq!(again.path(), Some("/a/b"));
    }

    #[test]
    fn display_messages() {
        let err = FacturXError::ProfileMismatch {
            declared: Profile::Basic,
            requested: Profile::EN16931,
        };
        assert_eq!(
            err.to_string(),
            "profile mismatch: document declares BASIC, EN 16931 was requested"
        );

        let err = FacturXError::unknown_code(CodeList::Unit, "BOGUS").at_path("/x");
        assert_eq!(err.to_string(), "unknown unit code \"BOGUS\" at /x");

        let v = ValidationError::with_rule("settlement", "mismatch", "BR-CO-15");
        assert_eq!(v.to_string(), "[BR-CO-15] settlement: mismatch");
    }
}
