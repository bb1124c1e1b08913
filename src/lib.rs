//! IBAN parsing, validation and generation.
//!
//! Country rules (BBAN layout, attribute character classes, total length)
//! come from a static registry table; check digits follow ISO 7064
//! MOD 97-10. Parsing is strict: input is expected fully upper-case with no
//! separators, and nothing is normalized or repaired.
//!
//! ```
//! use ibankit::{AttributeKind, Attributes};
//!
//! let iban = ibankit::parse("GB29NWBK60161331926819").unwrap();
//! assert_eq!(iban.country_code(), "GB");
//! assert_eq!(iban.attribute(AttributeKind::BankCode), Some("NWBK"));
//!
//! let attrs = Attributes {
//!     bank_code: Some("NWBK".to_string()),
//!     branch_code: Some("601613".to_string()),
//!     account_number: Some("31926819".to_string()),
//!     ..Default::default()
//! };
//! let built = ibankit::generate("GB", &attrs).unwrap();
//! assert_eq!(built.value(), "GB29NWBK60161331926819");
//! ```

mod charset;
mod checksum;
mod error;
mod generate;
mod iban;
mod parse;
mod registry;

pub use charset::CharClass;
pub use error::ValidationError;
pub use generate::{generate, generate_random, random, Attributes};
pub use iban::Iban;
pub use parse::parse;
pub use registry::{
    is_supported_country, lookup, supported_countries, AttrSpec, AttributeKind, CountryRule,
    COUNTRY_RULES,
};
