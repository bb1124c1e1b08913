use crate::error::ValidationError;
use crate::registry::AttributeKind;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A parsed or generated IBAN: country code, check digits and the BBAN
/// attribute values in the country rule's layout order, plus the canonical
/// string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iban {
    country_code: String,
    check_digits: String,
    attributes: Vec<(AttributeKind, String)>,
    value: String,
}

impl Iban {
    pub(crate) fn new(
        country_code: String,
        check_digits: String,
        attributes: Vec<(AttributeKind, String)>,
    ) -> Iban {
        let bban: String = attributes
            .iter()
            .map(|(_, value)| value.as_str())
            .collect();
        let value = format!("{country_code}{check_digits}{bban}");
        Iban {
            country_code,
            check_digits,
            attributes,
            value,
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn check_digits(&self) -> &str {
        &self.check_digits
    }

    /// The canonical IBAN string, `country + check digits + bban`.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn bban(&self) -> &str {
        &self.value[4..]
    }

    /// Value of one BBAN attribute; `None` when the country does not define
    /// the attribute.
    pub fn attribute(&self, kind: AttributeKind) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| *attr == kind)
            .map(|(_, value)| value.as_str())
    }

    /// BBAN attributes in layout order.
    pub fn attributes(&self) -> impl Iterator<Item = (AttributeKind, &str)> + '_ {
        self.attributes
            .iter()
            .map(|(kind, value)| (*kind, value.as_str()))
    }

    /// Dictionary form: `CountryCode`, `CheckDigits`, `value` plus exactly
    /// the BBAN attributes the country defines.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("CountryCode".to_string(), self.country_code.clone());
        map.insert("CheckDigits".to_string(), self.check_digits.clone());
        for (kind, value) in &self.attributes {
            map.insert(kind.name().to_string(), value.clone());
        }
        map.insert("value".to_string(), self.value.clone());
        map
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iban {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Iban, ValidationError> {
        crate::parse::parse(s)
    }
}

impl Serialize for Iban {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len() + 3))?;
        map.serialize_entry("CountryCode", &self.country_code)?;
        map.serialize_entry("CheckDigits", &self.check_digits)?;
        for (kind, value) in &self.attributes {
            map.serialize_entry(kind.name(), value)?;
        }
        map.serialize_entry("value", &self.value)?;
        map.end()
    }
}
