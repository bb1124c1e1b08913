use crate::charset::CharClass;
use serde::Serialize;
use std::fmt;

/// BBAN attribute vocabulary of the IBAN registry. Every country defines at
/// least `BankCode` and `AccountNumber`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AttributeKind {
    BankCode,
    BranchCode,
    AccountNumber,
    NationalCheckDigit,
    AccountType,
    OwnerAccountType,
    IdentificationNumber,
}

impl AttributeKind {
    pub fn name(self) -> &'static str {
        match self {
            AttributeKind::BankCode => "BankCode",
            AttributeKind::BranchCode => "BranchCode",
            AttributeKind::AccountNumber => "AccountNumber",
            AttributeKind::NationalCheckDigit => "NationalCheckDigit",
            AttributeKind::AccountType => "AccountType",
            AttributeKind::OwnerAccountType => "OwnerAccountType",
            AttributeKind::IdentificationNumber => "IdentificationNumber",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrSpec {
    pub kind: AttributeKind,
    pub len: usize,
    pub class: CharClass,
}

/// Layout of one country's IBAN: total length and the left-to-right BBAN
/// attribute sequence. Invariant: `iban_len == 4 + sum of attribute lengths`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryRule {
    pub country: &'static str,
    pub iban_len: usize,
    pub bban: &'static [AttrSpec],
}

const fn num(kind: AttributeKind, len: usize) -> AttrSpec {
    AttrSpec {
        kind,
        len,
        class: CharClass::Numeric,
    }
}

const fn alpha(kind: AttributeKind, len: usize) -> AttrSpec {
    AttrSpec {
        kind,
        len,
        class: CharClass::UpperAlpha,
    }
}

const fn alnum(kind: AttributeKind, len: usize) -> AttrSpec {
    AttrSpec {
        kind,
        len,
        class: CharClass::AlphaNumeric,
    }
}

const fn rule(country: &'static str, iban_len: usize, bban: &'static [AttrSpec]) -> CountryRule {
    CountryRule {
        country,
        iban_len,
        bban,
    }
}

use AttributeKind::{
    AccountNumber, AccountType, BankCode, BranchCode, IdentificationNumber, NationalCheckDigit,
    OwnerAccountType,
};

#[rustfmt::skip]
pub const COUNTRY_RULES: &[CountryRule] = &[
    rule("AD", 24, &[num(BankCode, 4), num(BranchCode, 4), alnum(AccountNumber, 12)]),
    rule("AE", 23, &[num(BankCode, 3), num(AccountNumber, 16)]),
    rule("AL", 28, &[num(BankCode, 3), num(BranchCode, 4), num(NationalCheckDigit, 1), alnum(AccountNumber, 16)]),
    rule("AT", 20, &[num(BankCode, 5), num(AccountNumber, 11)]),
    rule("AZ", 28, &[alpha(BankCode, 4), alnum(AccountNumber, 20)]),
    rule("BA", 20, &[num(BankCode, 3), num(BranchCode, 3), num(AccountNumber, 8), num(NationalCheckDigit, 2)]),
    rule("BE", 16, &[num(BankCode, 3), num(AccountNumber, 7), num(NationalCheckDigit, 2)]),
    rule("BG", 22, &[alpha(BankCode, 4), num(BranchCode, 4), num(AccountType, 2), alnum(AccountNumber, 8)]),
    rule("BH", 22, &[alpha(BankCode, 4), alnum(AccountNumber, 14)]),
    rule("BR", 29, &[num(BankCode, 8), num(BranchCode, 5), num(AccountNumber, 10), alpha(AccountType, 1), alnum(OwnerAccountType, 1)]),
    rule("BY", 28, &[alnum(BankCode, 4), num(BranchCode, 4), alnum(AccountNumber, 16)]),
    rule("CH", 21, &[num(BankCode, 5), alnum(AccountNumber, 12)]),
    rule("CR", 22, &[num(BankCode, 4), num(AccountNumber, 14)]),
    rule("CY", 28, &[num(BankCode, 3), num(BranchCode, 5), alnum(AccountNumber, 16)]),
    rule("CZ", 24, &[num(BankCode, 4), num(AccountNumber, 16)]),
    rule("DE", 22, &[num(BankCode, 8), num(AccountNumber, 10)]),
    rule("DK", 18, &[num(BankCode, 4), num(AccountNumber, 10)]),
    rule("DO", 28, &[alnum(BankCode, 4), num(AccountNumber, 20)]),
    rule("EE", 20, &[num(BankCode, 2), num(BranchCode, 2), num(AccountNumber, 11), num(NationalCheckDigit, 1)]),
    rule("ES", 24, &[num(BankCode, 4), num(BranchCode, 4), num(NationalCheckDigit, 2), num(AccountNumber, 10)]),
    rule("FI", 18, &[num(BankCode, 6), num(AccountNumber, 7), num(NationalCheckDigit, 1)]),
    rule("FO", 18, &[num(BankCode, 4), num(AccountNumber, 9), num(NationalCheckDigit, 1)]),
    rule("FR", 27, &[num(BankCode, 5), num(BranchCode, 5), alnum(AccountNumber, 11), num(NationalCheckDigit, 2)]),
    rule("GB", 22, &[alpha(BankCode, 4), num(BranchCode, 6), num(AccountNumber, 8)]),
    rule("GE", 22, &[alpha(BankCode, 2), num(AccountNumber, 16)]),
    rule("GI", 23, &[alpha(BankCode, 4), alnum(AccountNumber, 15)]),
    rule("GL", 18, &[num(BankCode, 4), num(AccountNumber, 10)]),
    rule("GR", 27, &[num(BankCode, 3), num(BranchCode, 4), alnum(AccountNumber, 16)]),
    rule("GT", 28, &[alnum(BankCode, 4), alnum(AccountNumber, 20)]),
    rule("HR", 21, &[num(BankCode, 7), num(AccountNumber, 10)]),
    rule("HU", 28, &[num(BankCode, 3), num(BranchCode, 4), num(AccountNumber, 16), num(NationalCheckDigit, 1)]),
    rule("IE", 22, &[alpha(BankCode, 4), num(BranchCode, 6), num(AccountNumber, 8)]),
    rule("IL", 23, &[num(BankCode, 3), num(BranchCode, 3), num(AccountNumber, 13)]),
    rule("IS", 26, &[num(BankCode, 4), num(BranchCode, 2), num(AccountNumber, 6), num(IdentificationNumber, 10)]),
    rule("IT", 27, &[alpha(NationalCheckDigit, 1), num(BankCode, 5), num(BranchCode, 5), alnum(AccountNumber, 12)]),
    rule("JO", 30, &[alpha(BankCode, 4), num(BranchCode, 4), alnum(AccountNumber, 18)]),
    rule("KW", 30, &[alpha(BankCode, 4), alnum(AccountNumber, 22)]),
    rule("KZ", 20, &[num(BankCode, 3), alnum(AccountNumber, 13)]),
    rule("LB", 28, &[num(BankCode, 4), alnum(AccountNumber, 20)]),
    rule("LI", 21, &[num(BankCode, 5), alnum(AccountNumber, 12)]),
    rule("LT", 20, &[num(BankCode, 5), num(AccountNumber, 11)]),
    rule("LU", 20, &[num(BankCode, 3), alnum(AccountNumber, 13)]),
    rule("LV", 21, &[alpha(BankCode, 4), alnum(AccountNumber, 13)]),
    rule("MC", 27, &[num(BankCode, 5), num(BranchCode, 5), alnum(AccountNumber, 11), num(NationalCheckDigit, 2)]),
    rule("MD", 24, &[alnum(BankCode, 2), alnum(AccountNumber, 18)]),
    rule("ME", 22, &[num(BankCode, 3), num(AccountNumber, 13), num(NationalCheckDigit, 2)]),
    rule("MK", 19, &[num(BankCode, 3), alnum(AccountNumber, 10), num(NationalCheckDigit, 2)]),
    rule("MR", 27, &[num(BankCode, 5), num(BranchCode, 5), num(AccountNumber, 11), num(NationalCheckDigit, 2)]),
    rule("MT", 31, &[alpha(BankCode, 4), num(BranchCode, 5), alnum(AccountNumber, 18)]),
    rule("MU", 30, &[alnum(BankCode, 6), num(BranchCode, 2), alnum(AccountNumber, 18)]),
    rule("NL", 18, &[alpha(BankCode, 4), num(AccountNumber, 10)]),
    rule("NO", 15, &[num(BankCode, 4), num(AccountNumber, 6), num(NationalCheckDigit, 1)]),
    rule("PK", 24, &[alnum(BankCode, 4), num(AccountNumber, 16)]),
    rule("PL", 28, &[num(BankCode, 3), num(BranchCode, 4), num(NationalCheckDigit, 1), num(AccountNumber, 16)]),
    rule("PS", 29, &[alpha(BankCode, 4), alnum(AccountNumber, 21)]),
    rule("PT", 25, &[num(BankCode, 4), num(BranchCode, 4), num(AccountNumber, 11), num(NationalCheckDigit, 2)]),
    rule("QA", 29, &[alpha(BankCode, 4), alnum(AccountNumber, 21)]),
    rule("RO", 24, &[alpha(BankCode, 4), alnum(AccountNumber, 16)]),
    rule("RS", 22, &[num(BankCode, 3), num(AccountNumber, 13), num(NationalCheckDigit, 2)]),
    rule("SA", 24, &[num(BankCode, 2), alnum(AccountNumber, 18)]),
    rule("SE", 24, &[num(BankCode, 3), num(AccountNumber, 17)]),
    rule("SI", 19, &[num(BankCode, 2), num(BranchCode, 3), num(AccountNumber, 8), num(NationalCheckDigit, 2)]),
    rule("SK", 24, &[num(BankCode, 4), num(AccountNumber, 16)]),
    rule("SM", 27, &[alpha(NationalCheckDigit, 1), num(BankCode, 5), num(BranchCode, 5), alnum(AccountNumber, 12)]),
    rule("TN", 24, &[num(BankCode, 2), num(BranchCode, 3), alnum(AccountNumber, 15)]),
    rule("TR", 26, &[num(BankCode, 5), alnum(NationalCheckDigit, 1), alnum(AccountNumber, 16)]),
    rule("UA", 29, &[num(BankCode, 6), alnum(AccountNumber, 19)]),
    rule("VG", 24, &[alpha(BankCode, 4), num(AccountNumber, 16)]),
    rule("XK", 20, &[num(BankCode, 4), num(AccountNumber, 10), num(NationalCheckDigit, 2)]),
];

/// Case-sensitive lookup over exactly two upper-case letters; anything else
/// is unsupported, not normalized.
pub fn lookup(country_code: &str) -> Option<&'static CountryRule> {
    COUNTRY_RULES
        .iter()
        .find(|rule| rule.country == country_code)
}

pub fn is_supported_country(country_code: &str) -> bool {
    lookup(country_code).is_some()
}

pub fn supported_countries() -> Vec<&'static str> {
    COUNTRY_RULES.iter().map(|rule| rule.country).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_are_consistent() {
        for rule in COUNTRY_RULES {
            let bban_len: usize = rule.bban.iter().map(|spec| spec.len).sum();
            assert_eq!(rule.iban_len, 4 + bban_len, "{}", rule.country);
        }
    }

    #[test]
    fn every_country_has_bank_code_and_account_number() {
        for rule in COUNTRY_RULES {
            for kind in [AttributeKind::BankCode, AttributeKind::AccountNumber] {
                assert!(
                    rule.bban.iter().any(|spec| spec.kind == kind),
                    "{} lacks {}",
                    rule.country,
                    kind
                );
            }
        }
    }

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in COUNTRY_RULES.windows(2) {
            assert!(pair[0].country < pair[1].country);
        }
        for rule in COUNTRY_RULES {
            assert_eq!(rule.country.len(), 2);
            assert!(rule.country.chars().all(|ch| ch.is_ascii_uppercase()));
        }
    }

    #[test]
    fn lookup_is_strict() {
        assert!(is_supported_country("DE"));
        assert!(is_supported_country("GB"));
        assert!(!is_supported_country("ZZ"));
        assert!(!is_supported_country("de"));
        assert!(!is_supported_country("DEU"));
        assert!(!is_supported_country(""));
    }

    #[test]
    fn supported_countries_matches_table() {
        let countries = supported_countries();
        assert_eq!(countries.len(), COUNTRY_RULES.len());
        assert!(countries.contains(&"BR"));
    }
}
