use crate::charset;
use crate::checksum;
use crate::error::ValidationError;
use crate::iban::Iban;
use crate::parse::check_attribute;
use crate::registry::{self, AttributeKind, CountryRule, COUNTRY_RULES};
use rand::seq::SliceRandom;
use rand::Rng;

/// Optional inputs to the generators, one field per BBAN attribute kind.
/// `country_code` is only consulted by [`generate_random`]; attributes a
/// country's rule does not declare are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub country_code: Option<String>,
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub account_number: Option<String>,
    pub national_check_digit: Option<String>,
    pub account_type: Option<String>,
    pub owner_account_type: Option<String>,
    pub identification_number: Option<String>,
}

impl Attributes {
    pub fn get(&self, kind: AttributeKind) -> Option<&str> {
        let field = match kind {
            AttributeKind::BankCode => &self.bank_code,
            AttributeKind::BranchCode => &self.branch_code,
            AttributeKind::AccountNumber => &self.account_number,
            AttributeKind::NationalCheckDigit => &self.national_check_digit,
            AttributeKind::AccountType => &self.account_type,
            AttributeKind::OwnerAccountType => &self.owner_account_type,
            AttributeKind::IdentificationNumber => &self.identification_number,
        };
        field.as_deref()
    }
}

/// Build an IBAN from explicitly supplied attributes. Every attribute the
/// country's rule declares must be present and well-formed; check digits are
/// computed, never taken as input.
pub fn generate(country_code: &str, attrs: &Attributes) -> Result<Iban, ValidationError> {
    let rule = registry::lookup(country_code).ok_or_else(|| ValidationError::UnsupportedCountry {
        value: country_code.to_string(),
    })?;

    let mut attributes = Vec::with_capacity(rule.bban.len());
    for spec in rule.bban {
        let value = attrs
            .get(spec.kind)
            .ok_or_else(|| ValidationError::MissingAttribute {
                kind: spec.kind,
                country: country_code.to_string(),
            })?;
        check_attribute(spec, value)?;
        attributes.push((spec.kind, value.to_string()));
    }

    Ok(assemble(rule, attributes))
}

/// Build a random IBAN. The country is taken from `attrs` or drawn uniformly
/// from the supported set; missing attributes are synthesized from their
/// declared character class, supplied ones are validated like in
/// [`generate`].
pub fn generate_random<R: Rng + ?Sized>(
    rng: &mut R,
    attrs: &Attributes,
) -> Result<Iban, ValidationError> {
    let rule = match attrs.country_code.as_deref() {
        Some(code) => {
            registry::lookup(code).ok_or_else(|| ValidationError::UnsupportedCountry {
                value: code.to_string(),
            })?
        }
        None => {
            let rule = COUNTRY_RULES.choose(rng).unwrap_or(&COUNTRY_RULES[0]);
            log::debug!("no country supplied, drew {}", rule.country);
            rule
        }
    };

    let mut attributes = Vec::with_capacity(rule.bban.len());
    for spec in rule.bban {
        let value = match attrs.get(spec.kind) {
            Some(value) => {
                check_attribute(spec, value)?;
                value.to_string()
            }
            None => charset::random_value(rng, spec.class, spec.len),
        };
        attributes.push((spec.kind, value));
    }

    Ok(assemble(rule, attributes))
}

/// [`generate_random`] with the thread-local rng.
pub fn random(attrs: &Attributes) -> Result<Iban, ValidationError> {
    generate_random(&mut rand::thread_rng(), attrs)
}

fn assemble(rule: &CountryRule, attributes: Vec<(AttributeKind, String)>) -> Iban {
    let bban: String = attributes
        .iter()
        .map(|(_, value)| value.as_str())
        .collect();
    let check_digits = checksum::check_digits(rule.country, &bban);
    Iban::new(rule.country.to_string(), check_digits, attributes)
}
