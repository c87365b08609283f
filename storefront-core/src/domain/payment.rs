//! Checkout validation
//!
//! Pure functions over the fields of the payment form. Nothing here touches
//! storage; `PaymentDetails::validate` is what checkout runs before any
//! order is written.

use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

const MIN_CARD_DIGITS: usize = 12;
const MAX_CARD_DIGITS: usize = 19;

/// Card expiry as entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    /// 1 to 12
    pub month: u32,
    /// Four-digit year (2000 + YY)
    pub year: i32,
}

impl Expiry {
    /// 23:59:59 on the last day of the expiry month
    pub fn last_moment(&self) -> Option<NaiveDateTime> {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)?
            .pred_opt()?
            .and_hms_opt(23, 59, 59)
    }

    /// A card stays valid through the whole of its expiry month
    pub fn is_expired_at(&self, now: NaiveDateTime) -> bool {
        match self.last_moment() {
            Some(last) => last < now,
            None => true,
        }
    }
}

/// Luhn checksum over 12 to 19 digits, ignoring whitespace
pub fn luhn_check(text: &str) -> bool {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() < MIN_CARD_DIGITS
        || digits.len() > MAX_CARD_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return false;
    }

    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let n = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = n * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                n
            }
        })
        .sum();

    sum % 10 == 0
}

fn expiry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{2})\s*/\s*([0-9]{2})$").expect("expiry pattern is valid")
    })
}

/// Parse `MM/YY`; the month must be 1 to 12
pub fn parse_expiry(text: &str) -> Option<Expiry> {
    let caps = expiry_pattern().captures(text.trim())?;
    let month: u32 = caps.get(1)?.as_str().parse().ok()?;
    let yy: i32 = caps.get(2)?.as_str().parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(Expiry {
        month,
        year: 2000 + yy,
    })
}

fn all_digits_between(text: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}

/// 3 or 4 digits
pub fn is_valid_cvv(text: &str) -> bool {
    all_digits_between(text.trim(), 3, 4)
}

/// 4 to 10 digits
pub fn is_valid_zip(text: &str) -> bool {
    all_digits_between(text.trim(), 4, 10)
}

/// Raw payment form input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub cardholder: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub zip: String,
}

impl PaymentDetails {
    /// Run every check in form order and stop at the first failure
    pub fn validate(&self, now: NaiveDateTime) -> Result<Expiry> {
        if self.cardholder.trim().chars().count() < 2 {
            return Err(Error::validation("Enter the name on the card."));
        }
        if !luhn_check(&self.card_number) {
            return Err(Error::validation("Enter a valid card number."));
        }
        let expiry = parse_expiry(&self.expiry)
            .ok_or_else(|| Error::validation("Expiry must be in MM/YY format."))?;
        if expiry.is_expired_at(now) {
            return Err(Error::validation("Card is expired."));
        }
        if !is_valid_cvv(&self.cvv) {
            return Err(Error::validation("CVV must be 3-4 digits."));
        }
        if !is_valid_zip(&self.zip) {
            return Err(Error::validation("Enter a valid ZIP/Postal code."));
        }
        Ok(expiry)
    }

    /// Last four digits of the card, for receipts
    pub fn card_last4(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(|c| c.is_ascii_digit()).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    fn valid_details() -> PaymentDetails {
        PaymentDetails {
            cardholder: "Test User".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            expiry: "08/29".to_string(),
            cvv: "123".to_string(),
            zip: "560001".to_string(),
        }
    }

    #[test]
    fn test_luhn_known_numbers() {
        assert!(luhn_check("4111111111111111"));
        assert!(!luhn_check("4111111111111112"));
        assert!(luhn_check("4242 4242 4242 4242"));
        assert!(luhn_check("5555555555554444"));
        assert!(luhn_check("378282246310005"));
    }

    #[test]
    fn test_luhn_rejects_letters_and_bad_lengths() {
        assert!(!luhn_check("4111a11111111111"));
        assert!(!luhn_check(""));
        // 11 digits, checksum would pass but too short
        assert!(!luhn_check("00000000000"));
        assert!(luhn_check("000000000000"));
        // 20 digits
        assert!(!luhn_check("00000000000000000000"));
        assert!(!luhn_check("４１１１１１１１１１１１１１１１"));
    }

    #[test]
    fn test_parse_expiry() {
        assert_eq!(parse_expiry("01/29"), Some(Expiry { month: 1, year: 2029 }));
        assert_eq!(parse_expiry(" 12 / 30 "), Some(Expiry { month: 12, year: 2030 }));
        assert_eq!(parse_expiry("13/29"), None);
        assert_eq!(parse_expiry("00/29"), None);
        assert_eq!(parse_expiry("1/29"), None);
        assert_eq!(parse_expiry("01/2029"), None);
        assert_eq!(parse_expiry("0129"), None);
        assert_eq!(parse_expiry(""), None);
    }

    #[test]
    fn test_expiry_last_moment() {
        let feb_leap = Expiry { month: 2, year: 2028 };
        assert_eq!(feb_leap.last_moment(), Some(at(2028, 2, 29, 23, 59, 59)));

        let dec = Expiry { month: 12, year: 2029 };
        assert_eq!(dec.last_moment(), Some(at(2029, 12, 31, 23, 59, 59)));
    }

    #[test]
    fn test_card_valid_through_end_of_month() {
        let exp = Expiry { month: 6, year: 2026 };
        assert!(!exp.is_expired_at(at(2026, 6, 30, 23, 59, 59)));
        assert!(exp.is_expired_at(at(2026, 7, 1, 0, 0, 0)));
        assert!(!exp.is_expired_at(at(2026, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_cvv_and_zip() {
        assert!(is_valid_cvv("123"));
        assert!(is_valid_cvv("1234"));
        assert!(!is_valid_cvv("12"));
        assert!(!is_valid_cvv("12345"));
        assert!(!is_valid_cvv("12a"));

        assert!(is_valid_zip("560001"));
        assert!(is_valid_zip("1234"));
        assert!(is_valid_zip("1234567890"));
        assert!(!is_valid_zip("123"));
        assert!(!is_valid_zip("12345678901"));
        assert!(!is_valid_zip("SW1A 1AA"));
    }

    #[test]
    fn test_validate_accepts_good_details() {
        let now = at(2026, 1, 15, 12, 0, 0);
        let expiry = valid_details().validate(now).unwrap();
        assert_eq!(expiry, Expiry { month: 8, year: 2029 });
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let now = at(2026, 1, 15, 12, 0, 0);

        let mut details = valid_details();
        details.cardholder = " A ".to_string();
        details.card_number = "1234".to_string();
        let err = details.validate(now).unwrap_err();
        assert_eq!(err.to_string(), "Enter the name on the card.");

        let mut details = valid_details();
        details.card_number = "4111111111111112".to_string();
        details.cvv = "x".to_string();
        assert_eq!(
            details.validate(now).unwrap_err().to_string(),
            "Enter a valid card number."
        );

        let mut details = valid_details();
        details.expiry = "8/29".to_string();
        assert_eq!(
            details.validate(now).unwrap_err().to_string(),
            "Expiry must be in MM/YY format."
        );

        let mut details = valid_details();
        details.expiry = "12/25".to_string();
        assert_eq!(details.validate(now).unwrap_err().to_string(), "Card is expired.");

        let mut details = valid_details();
        details.cvv = "12".to_string();
        assert_eq!(
            details.validate(now).unwrap_err().to_string(),
            "CVV must be 3-4 digits."
        );

        let mut details = valid_details();
        details.zip = "12".to_string();
        let err = details.validate(now).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Enter a valid ZIP/Postal code.");
    }

    #[test]
    fn test_card_last4() {
        assert_eq!(valid_details().card_last4(), "4242");
        let short = PaymentDetails {
            card_number: "12".to_string(),
            ..PaymentDetails::default()
        };
        assert_eq!(short.card_last4(), "12");
    }
}
