use rand::Rng;

/// Legal character set for a BBAN attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Numeric,
    UpperAlpha,
    AlphaNumeric,
}

const DIGITS: &[u8] = b"0123456789";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

impl CharClass {
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Numeric => DIGITS,
            CharClass::UpperAlpha => UPPER,
            CharClass::AlphaNumeric => UPPER_DIGITS,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        match self {
            CharClass::Numeric => ch.is_ascii_digit(),
            CharClass::UpperAlpha => ch.is_ascii_uppercase(),
            CharClass::AlphaNumeric => ch.is_ascii_digit() || ch.is_ascii_uppercase(),
        }
    }
}

pub fn matches(value: &str, class: CharClass, len: usize) -> bool {
    value.len() == len && value.chars().all(|ch| class.contains(ch))
}

pub fn random_value<R: Rng + ?Sized>(rng: &mut R, class: CharClass, len: usize) -> String {
    let charset = class.alphabet();
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0..charset.len());
        out.push(char::from(charset[idx]));
    }
    out
}
