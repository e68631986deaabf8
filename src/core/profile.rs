use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::codes::CodeList;
use super::error::FacturXError;

/// Factur-X conformance profile.
///
/// Profiles are nested: every element permitted at a lower profile is also
/// permitted at every higher one, so the derived `Ord` is the lattice order
/// `Minimum < BasicWl < Basic < EN16931`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Profile {
    /// Document-level totals only.
    Minimum,
    /// Basic data without line items.
    BasicWl,
    /// Basic with line items.
    Basic,
    /// Full EN 16931 core invoice.
    EN16931,
}

impl Profile {
    /// The URN used in `GuidelineSpecifiedDocumentContextParameter/ID`.
    pub fn urn(&self) -> &'static str {
        match self {
            Self::Minimum => "urn:factur-x.eu:1p0:minimum",
            Self::BasicWl => "urn:factur-x.eu:1p0:basicwl",
            Self::Basic => "urn:cen.eu:en16931:2017#compliant#urn:factur-x.eu:1p0:basic",
            Self::EN16931 => "urn:cen.eu:en16931:2017",
        }
    }

    /// Parse a guideline URN.
    pub fn from_urn(urn: &str) -> Result<Self, FacturXError> {
        match urn {
            "urn:factur-x.eu:1p0:minimum" => Ok(Self::Minimum),
            "urn:factur-x.eu:1p0:basicwl" => Ok(Self::BasicWl),
            "urn:cen.eu:en16931:2017#compliant#urn:factur-x.eu:1p0:basic" => Ok(Self::Basic),
            "urn:cen.eu:en16931:2017" => Ok(Self::EN16931),
            other => Err(FacturXError::unknown_code(CodeList::Guideline, other)),
        }
    }

    /// The XMP `ConformanceLevel` value.
    pub fn conformance_level(&self) -> &'static str {
        match self {
            Self::Minimum => "MINIMUM",
            Self::BasicWl => "BASIC WL",
            Self::Basic => "BASIC",
            Self::EN16931 => "EN 16931",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.conformance_level())
    }
}

impl TryFrom<String> for Profile {
    type Error = FacturXError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_urn(&value)
    }
}

impl From<Profile> for String {
    fn from(profile: Profile) -> Self {
        profile.urn().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn lattice_order() {
        assert!(Profile::Minimum < Profile::BasicWl);
        assert!(Profile::BasicWl < Profile::Basic);
        assert!(Profile::Basic < Profile::EN16931);
        let all: Vec<_> = Profile::iter().collect();
        let mut sorted = all.clone();
        sorted.sort();
        assert_eq!(all, sorted);
    }

    #[test]
    fn urn_roundtrip() {
        for profile in Profile::iter() {
            assert_eq!(Profile::from_urn(profile.urn()).unwrap(), profile);
        }
    }

    #[test]
    fn extended_is_not_supported() {
        let err = Profile::from_urn("urn:cen.eu:en16931:2017#conformant#urn:factur-x.eu:1p0:extended")
            .unwrap_err();
        assert!(matches!(
            err,
            FacturXError::UnknownCode {
                list: CodeList::Guideline,
                ..
            }
        ));
    }
}
