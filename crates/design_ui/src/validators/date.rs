//! Date-format and birthdate-range validators for masked date inputs.
//!
//! Validators never fail with an error: malformed or out-of-range input
//! always surfaces as a returned user-facing message, and an empty value
//! always passes (required-ness is composed separately).

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::enumeration::Enumeration;
use crate::error::ConfigError;
use crate::mask::{Mask, MaskToken};

/// A boxed message-returning validator: `None` means the value passed.
pub type Validator = Box<dyn Fn(&str) -> Option<String>>;

/// Canonical tokens of the supported display formats.
pub const DATE_FORMATS: Enumeration = Enumeration::new(
    "DATE_FORMATS",
    &[
        ("MM_DD_YYYY", "mm/dd/yyyy"),
        ("MM_YYYY", "mm/yyyy"),
        ("MM_YY", "mm/yy"),
    ],
);

const INVALID_DATE_MESSAGE: &str = "Please enter a valid date.";

const D: MaskToken = MaskToken::Digit;
const SLASH: MaskToken = MaskToken::Literal('/');

const MM_DD_YYYY_MASK: Mask = Mask::new(&[D, D, SLASH, D, D, SLASH, D, D, D, D]);
const MM_YYYY_MASK: Mask = Mask::new(&[D, D, SLASH, D, D, D, D]);
const MM_YY_MASK: Mask = Mask::new(&[D, D, SLASH, D, D]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// One of the three fixed display formats for date-like inputs.
///
/// Each format carries one input mask and one anchored validation pattern;
/// the two accept exactly the same set of well-formed strings (covered by
/// the lockstep test below).
pub enum DateFormat {
    /// Month-day-year form, `mm/dd/yyyy`.
    #[serde(rename = "mm/dd/yyyy")]
    MmDdYyyy,
    /// Month-year form, `mm/yyyy`.
    #[serde(rename = "mm/yyyy")]
    MmYyyy,
    /// Two-digit-year month form, `mm/yy`.
    #[serde(rename = "mm/yy")]
    MmYy,
}

impl DateFormat {
    /// The canonical display token.
    pub fn token(self) -> &'static str {
        match self {
            Self::MmDdYyyy => "mm/dd/yyyy",
            Self::MmYyyy => "mm/yyyy",
            Self::MmYy => "mm/yy",
        }
    }

    /// Parses a canonical token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::IllegalValue`] for tokens outside
    /// [`DATE_FORMATS`].
    pub fn from_token(value: &str) -> Result<Self, ConfigError> {
        match value {
            "mm/dd/yyyy" => Ok(Self::MmDdYyyy),
            "mm/yyyy" => Ok(Self::MmYyyy),
            "mm/yy" => Ok(Self::MmYy),
            other => Err(ConfigError::IllegalValue {
                prop: "dateFormat",
                value: other.to_string(),
            }),
        }
    }

    /// The input mask handed to the masking widget.
    pub fn mask(self) -> Mask {
        match self {
            Self::MmDdYyyy => MM_DD_YYYY_MASK,
            Self::MmYyyy => MM_YYYY_MASK,
            Self::MmYy => MM_YY_MASK,
        }
    }

    /// The anchored validation pattern for this format.
    pub fn pattern(self) -> &'static Regex {
        static MM_DD_YYYY_RE: OnceLock<Regex> = OnceLock::new();
        static MM_YYYY_RE: OnceLock<Regex> = OnceLock::new();
        static MM_YY_RE: OnceLock<Regex> = OnceLock::new();
        match self {
            Self::MmDdYyyy => MM_DD_YYYY_RE
                .get_or_init(|| Regex::new(r"^\d\d/\d\d/\d\d\d\d$").expect("fixed pattern")),
            Self::MmYyyy => {
                MM_YYYY_RE.get_or_init(|| Regex::new(r"^\d\d/\d\d\d\d$").expect("fixed pattern"))
            }
            Self::MmYy => {
                MM_YY_RE.get_or_init(|| Regex::new(r"^\d\d/\d\d$").expect("fixed pattern"))
            }
        }
    }

    /// The chrono format string used to localize bounds for display.
    fn chrono_format(self) -> &'static str {
        match self {
            Self::MmDdYyyy => "%m/%d/%Y",
            Self::MmYyyy => "%m/%Y",
            Self::MmYy => "%m/%y",
        }
    }

    /// Parses a cleaned display-format value into a calendar date. Formats
    /// without a day component resolve to the first of the month; two-digit
    /// years follow the usual pivot (00-68 are 2000s, 69-99 are 1900s).
    fn parse_value(self, value: &str) -> Option<NaiveDate> {
        match self {
            Self::MmDdYyyy => NaiveDate::parse_from_str(value, "%m/%d/%Y").ok(),
            Self::MmYyyy | Self::MmYy => {
                let (month, year) = value.split_once('/')?;
                let month: u32 = month.parse().ok()?;
                let mut year: i32 = year.parse().ok()?;
                if self == Self::MmYy {
                    year += if year <= 68 { 2000 } else { 1900 };
                }
                NaiveDate::from_ymd_opt(year, month, 1)
            }
        }
    }
}

/// Strips everything a masked input may leave behind except the characters
/// the format patterns understand (ASCII alphanumerics and `/`).
pub fn clean_date_string(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '/')
        .collect()
}

/// Checks a raw input string against the named display format.
///
/// The raw string is cleaned first, so stray mask artifacts do not fail the
/// check. Returns `None` when the value is empty or well-formed, otherwise a
/// fixed user-facing message.
pub fn matches_format(raw: &str, format: DateFormat) -> Option<String> {
    let cleansed = clean_date_string(raw);
    if cleansed.is_empty() || format.pattern().is_match(&cleansed) {
        None
    } else {
        Some(INVALID_DATE_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Configuration for [`min_date_validator`].
pub struct MinDateConfig {
    /// Earliest acceptable date, ISO (`yyyy-mm-dd`) or display format.
    pub min_date: String,
    /// Overrides the default message when present.
    #[serde(default)]
    pub custom_error_message: Option<String>,
    /// Display format values are entered in.
    pub date_format: DateFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Configuration for [`max_date_validator`].
pub struct MaxDateConfig {
    /// Latest acceptable date, ISO (`yyyy-mm-dd`) or display format.
    pub max_date: String,
    /// Overrides the default message when present.
    #[serde(default)]
    pub custom_error_message: Option<String>,
    /// Display format values are entered in.
    pub date_format: DateFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Configuration for [`min_max_birthdate_validator`].
pub struct MinMaxDateConfig {
    /// Earliest acceptable birthdate (oldest allowed age).
    pub min_birthdate: String,
    /// Latest acceptable birthdate (youngest allowed age).
    pub max_birthdate: String,
    /// Youngest allowed age, interpolated into the combined message.
    pub min_age: u32,
    /// Oldest allowed age, interpolated into the combined message.
    pub max_age: u32,
    /// Display format values are entered in.
    pub date_format: DateFormat,
    /// Overrides the combined message when present.
    #[serde(default)]
    pub custom_error_message: Option<String>,
}

fn parse_bound(raw: &str, format: DateFormat) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| format.parse_value(&clean_date_string(raw)))
}

fn localized(bound: Option<NaiveDate>, format: DateFormat) -> Option<String> {
    bound.map(|date| date.format(format.chrono_format()).to_string())
}

/// Builds a validator requiring values to fall strictly after a minimum
/// date. An empty value always passes.
pub fn min_date_validator(config: MinDateConfig) -> Validator {
    Box::new(move |value| {
        if value.is_empty() {
            return None;
        }
        let bound = parse_bound(&config.min_date, config.date_format);
        let message = config.custom_error_message.clone().unwrap_or_else(|| {
            match localized(bound, config.date_format) {
                Some(display) => format!("Please enter a date after {display}"),
                None => INVALID_DATE_MESSAGE.to_string(),
            }
        });
        match (config.date_format.parse_value(&clean_date_string(value)), bound) {
            (Some(date), Some(bound)) if date > bound => None,
            _ => Some(message),
        }
    })
}

/// Builds a validator requiring values to fall strictly before a maximum
/// date. An empty value always passes.
pub fn max_date_validator(config: MaxDateConfig) -> Validator {
    Box::new(move |value| {
        if value.is_empty() {
            return None;
        }
        let bound = parse_bound(&config.max_date, config.date_format);
        let message = config.custom_error_message.clone().unwrap_or_else(|| {
            match localized(bound, config.date_format) {
                Some(display) => format!("Please enter a date before {display}"),
                None => INVALID_DATE_MESSAGE.to_string(),
            }
        });
        match (config.date_format.parse_value(&clean_date_string(value)), bound) {
            (Some(date), Some(bound)) if date < bound => None,
            _ => Some(message),
        }
    })
}

/// Builds a birthdate range validator from both bounds. Either bound
/// failing yields one combined age-range message; the individual bound
/// messages are discarded in its favor.
pub fn min_max_birthdate_validator(config: MinMaxDateConfig) -> Validator {
    let range_message = config
        .custom_error_message
        .clone()
        .unwrap_or_else(|| format!("Sorry, you must be {}–{}.", config.min_age, config.max_age));
    let min = min_date_validator(MinDateConfig {
        min_date: config.min_birthdate.clone(),
        custom_error_message: Some(range_message.clone()),
        date_format: config.date_format,
    });
    let max = max_date_validator(MaxDateConfig {
        max_date: config.max_birthdate.clone(),
        custom_error_message: Some(range_message.clone()),
        date_format: config.date_format,
    });
    Box::new(move |value| {
        if min(value).is_some() || max(value).is_some() {
            Some(range_message.clone())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const ALL_FORMATS: [DateFormat; 3] =
        [DateFormat::MmDdYyyy, DateFormat::MmYyyy, DateFormat::MmYy];

    /// Builds a well-formed string by filling every digit slot of the mask.
    fn fill_mask(format: DateFormat, digit: char) -> String {
        format
            .mask()
            .tokens()
            .iter()
            .map(|token| match token {
                MaskToken::Literal(literal) => *literal,
                MaskToken::Digit => digit,
            })
            .collect()
    }

    #[test]
    fn tokens_round_trip_through_the_enumeration() {
        for format in ALL_FORMATS {
            assert!(DATE_FORMATS.is_member(format.token()));
            assert_eq!(DateFormat::from_token(format.token()), Ok(format));
        }
        assert!(DateFormat::from_token("dd/mm/yyyy").is_err());
    }

    #[test]
    fn mask_and_pattern_stay_in_lockstep() {
        for format in ALL_FORMATS {
            let well_formed = fill_mask(format, '1');
            assert!(format.mask().matches(&well_formed));
            assert!(format.pattern().is_match(&well_formed));

            let truncated = &well_formed[..well_formed.len() - 1];
            assert!(!format.mask().matches(truncated));
            assert!(!format.pattern().is_match(truncated));

            let extended = format!("{well_formed}1");
            assert!(!format.mask().matches(&extended));
            assert!(!format.pattern().is_match(&extended));

            let lettered = well_formed.replacen('1', "x", 1);
            assert!(!format.mask().matches(&lettered));
            assert!(!format.pattern().is_match(&lettered));

            let dashed = well_formed.replacen('/', "-", 1);
            assert!(!format.mask().matches(&dashed));
            assert!(!format.pattern().is_match(&dashed));
        }
    }

    #[test]
    fn matches_format_tolerates_mask_noise() {
        assert_eq!(matches_format("12/31/2000", DateFormat::MmDdYyyy), None);
        assert_eq!(matches_format(" 12/31/·2000_", DateFormat::MmDdYyyy), None);
        assert_eq!(matches_format("", DateFormat::MmDdYyyy), None);
        assert_eq!(
            matches_format("12/31/20", DateFormat::MmDdYyyy),
            Some(INVALID_DATE_MESSAGE.to_string())
        );
        assert_eq!(
            matches_format("12/31/2000", DateFormat::MmYy),
            Some(INVALID_DATE_MESSAGE.to_string())
        );
    }

    #[test]
    fn empty_value_always_passes_the_bound_validators() {
        let min = min_date_validator(MinDateConfig {
            min_date: "1920-01-01".to_string(),
            custom_error_message: None,
            date_format: DateFormat::MmDdYyyy,
        });
        let max = max_date_validator(MaxDateConfig {
            max_date: "2005-01-01".to_string(),
            custom_error_message: None,
            date_format: DateFormat::MmDdYyyy,
        });
        assert_eq!(min(""), None);
        assert_eq!(max(""), None);
    }

    #[test]
    fn min_bound_is_strict_and_localizes_the_default_message() {
        let min = min_date_validator(MinDateConfig {
            min_date: "1920-01-01".to_string(),
            custom_error_message: None,
            date_format: DateFormat::MmDdYyyy,
        });
        assert_eq!(min("06/15/1980"), None);
        assert_eq!(
            min("01/01/1920"),
            Some("Please enter a date after 01/01/1920".to_string())
        );
        assert_eq!(
            min("12/31/1919"),
            Some("Please enter a date after 01/01/1920".to_string())
        );
    }

    #[test]
    fn max_bound_is_strict_and_respects_the_override() {
        let max = max_date_validator(MaxDateConfig {
            max_date: "2005-01-01".to_string(),
            custom_error_message: Some("Too recent.".to_string()),
            date_format: DateFormat::MmDdYyyy,
        });
        assert_eq!(max("12/31/2004"), None);
        assert_eq!(max("01/01/2005"), Some("Too recent.".to_string()));
        assert_eq!(max("garbage"), Some("Too recent.".to_string()));
    }

    #[test]
    fn birthdate_range_returns_the_combined_message() {
        let validate = min_max_birthdate_validator(MinMaxDateConfig {
            min_birthdate: "1920-01-01".to_string(),
            max_birthdate: "2005-01-01".to_string(),
            min_age: 18,
            max_age: 100,
            date_format: DateFormat::MmDdYyyy,
            custom_error_message: None,
        });
        assert_eq!(
            validate("01/01/2010"),
            Some("Sorry, you must be 18–100.".to_string())
        );
        assert_eq!(
            validate("01/01/1900"),
            Some("Sorry, you must be 18–100.".to_string())
        );
        assert_eq!(validate("06/15/1980"), None);
        assert_eq!(validate(""), None);
    }

    #[test]
    fn two_digit_years_follow_the_pivot() {
        let min = min_date_validator(MinDateConfig {
            min_date: "1990-01-01".to_string(),
            custom_error_message: None,
            date_format: DateFormat::MmYy,
        });
        // 03/95 is 1995-03-01, after the bound; 03/85 is 1985-03-01.
        assert_eq!(min("03/95"), None);
        assert!(min("03/85").is_some());
        // 03/05 pivots into the 2000s.
        assert_eq!(min("03/05"), None);
    }
}
