//! Mask descriptors handed to the external text-masking widget.
//!
//! The widget owns keystroke-level behavior; this crate only describes the
//! expected shape of typed input. Date-like inputs use an ordered token
//! mask, number inputs use a dynamic number-mask configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One step of an input mask: a literal character or a digit slot.
pub enum MaskToken {
    /// A fixed character the widget inserts for the user.
    Literal(char),
    /// A slot accepting one ASCII digit.
    Digit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An ordered input mask.
pub struct Mask {
    tokens: &'static [MaskToken],
}

impl Mask {
    /// Declares a mask over a fixed token sequence.
    pub const fn new(tokens: &'static [MaskToken]) -> Self {
        Self { tokens }
    }

    /// The token sequence.
    pub fn tokens(&self) -> &'static [MaskToken] {
        self.tokens
    }

    /// Number of tokens in the mask.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the mask is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Whether `input` matches the mask shape exactly: same length, literals
    /// in place, digits in every digit slot.
    pub fn matches(&self, input: &str) -> bool {
        let mut chars = input.chars();
        for token in self.tokens {
            let Some(ch) = chars.next() else {
                return false;
            };
            let ok = match token {
                MaskToken::Literal(literal) => ch == *literal,
                MaskToken::Digit => ch.is_ascii_digit(),
            };
            if !ok {
                return false;
            }
        }
        chars.next().is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Dynamic number-mask configuration for the masking widget.
pub struct NumberMask {
    /// Whether a decimal point may be entered.
    pub allow_decimal: bool,
    /// Whether leading zeroes are kept.
    pub allow_leading_zeroes: bool,
    /// Whether the widget shows placeholder guides.
    pub guide: bool,
    /// Whether thousands separators are inserted while typing.
    pub include_thousands_separator: bool,
    /// Fixed prefix inserted before the number.
    pub prefix: String,
}

impl Default for NumberMask {
    fn default() -> Self {
        integer_mask()
    }
}

/// The default integer mask used by number inputs: no decimals, no leading
/// zeroes, thousands separators, empty prefix.
pub fn integer_mask() -> NumberMask {
    NumberMask {
        allow_decimal: false,
        allow_leading_zeroes: false,
        guide: false,
        include_thousands_separator: true,
        prefix: String::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
/// The descriptor a masked input hands across the widget boundary.
pub enum MaskDescriptor {
    /// Fixed-shape token mask (date-like inputs).
    Tokens(Mask),
    /// Dynamic number mask (number inputs).
    Number(NumberMask),
}
