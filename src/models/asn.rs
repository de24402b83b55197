//! Autonomous System Number parsing.

use crate::error::Error;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Bare number with an optional, case-insensitive `AS` in front.
static ASN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_asn_regex() -> &'static Regex {
    ASN_REGEX.get_or_init(|| Regex::new(r"^(?i:AS)?([0-9]+)$").expect("Invalid Regex"))
}

/// A positive 32-bit Autonomous System Number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Asn(u32);

impl Asn {
    pub fn new(number: u32) -> Result<Asn, Error> {
        if number == 0 {
            return Err(Error::InvalidArgument("ASN must be positive".to_string()));
        }
        Ok(Asn(number))
    }

    pub fn number(&self) -> u32 {
        self.0
    }
}

impl FromStr for Asn {
    type Err = Error;

    /// Accepts `714`, `AS714` and `as714`.
    fn from_str(s: &str) -> Result<Asn, Error> {
        let digits = get_asn_regex()
            .captures(s)
            .and_then(|caps| caps.get(1))
            .ok_or_else(|| {
                Error::InvalidArgument(format!("ASN must be numeric or start with AS: '{s}'"))
            })?;
        let number: u32 = digits
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("ASN out of range: '{s}'")))?;
        Asn::new(number)
    }
}

impl fmt::Display for Asn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asn_forms() {
        assert_eq!("714".parse::<Asn>().unwrap().number(), 714);
        assert_eq!("AS714".parse::<Asn>().unwrap().number(), 714);
        assert_eq!("as714".parse::<Asn>().unwrap().number(), 714);
        assert_eq!("As15169".parse::<Asn>().unwrap().number(), 15169);
        assert_eq!("4294967295".parse::<Asn>().unwrap().number(), u32::MAX);
    }

    #[test]
    fn test_parse_asn_rejects() {
        for bad in ["", "AS", "ASX1", "-5", "0", "AS0", "7 14", "SA714", "4294967296", " 714"] {
            let err = bad.parse::<Asn>().unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument(_)),
                "expected InvalidArgument for '{bad}', got {err}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Asn::new(714).unwrap().to_string(), "AS714");
    }
}
