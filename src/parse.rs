use crate::charset::{self, CharClass};
use crate::checksum;
use crate::error::ValidationError;
use crate::iban::Iban;
use crate::registry::{self, AttrSpec};

/// Parse and validate a candidate IBAN string. Input must be fully
/// upper-case `[A-Z0-9]`; no trimming or case folding is applied.
pub fn parse(raw: &str) -> Result<Iban, ValidationError> {
    if raw.len() < 4 || !raw.chars().all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()) {
        return Err(ValidationError::Malformed {
            value: raw.to_string(),
        });
    }

    let country_code = &raw[..2];
    let check_digits = &raw[2..4];
    let bban = &raw[4..];

    let rule = registry::lookup(country_code).ok_or_else(|| ValidationError::UnsupportedCountry {
        value: country_code.to_string(),
    })?;

    if raw.len() != rule.iban_len {
        return Err(ValidationError::LengthMismatch {
            expected: rule.iban_len,
            actual: raw.len(),
            value: raw.to_string(),
        });
    }

    let mut attributes = Vec::with_capacity(rule.bban.len());
    let mut offset = 0;
    for spec in rule.bban {
        let value = &bban[offset..offset + spec.len];
        offset += spec.len;
        check_attribute(spec, value)?;
        attributes.push((spec.kind, value.to_string()));
    }

    if !charset::matches(check_digits, CharClass::Numeric, 2)
        || !checksum::is_valid(country_code, check_digits, bban)
    {
        return Err(ValidationError::ChecksumMismatch {
            value: raw.to_string(),
        });
    }

    Ok(Iban::new(
        country_code.to_string(),
        check_digits.to_string(),
        attributes,
    ))
}

/// Matcher walk shared with the generator: one attribute value against its
/// declared class and length.
pub(crate) fn check_attribute(spec: &AttrSpec, value: &str) -> Result<(), ValidationError> {
    if charset::matches(value, spec.class, spec.len) {
        Ok(())
    } else {
        Err(ValidationError::InvalidCharacters {
            kind: spec.kind,
            value: value.to_string(),
        })
    }
}
