//! Removable digit values.
//!
//! Every entry of the digit string is a `Digit` in `1..=4`. The range is
//! enforced at construction, so a digit string can never hold anything else.
//!
//! ```
//! use numstring::core::Digit;
//!
//! let four = Digit::new(4).unwrap();
//! assert!(four.is_even());
//! assert_eq!(four.value(), 4);
//!
//! assert!(Digit::new(0).is_none());
//! assert!(Digit::new(5).is_none());
//! ```

use serde::{Deserialize, Serialize};

/// A single removable value in `Digit::MIN..=Digit::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Smallest digit value.
    pub const MIN: u8 = 1;
    /// Largest digit value.
    pub const MAX: u8 = 4;

    /// Every digit, smallest first.
    pub const ALL: [Digit; 4] = [Digit(1), Digit(2), Digit(3), Digit(4)];

    /// Create a digit, or `None` if `value` is outside `1..=4`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Is the value even?
    #[must_use]
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// Parse a digit string such as `"1342"`.
    ///
    /// Returns `None` if any character is not a valid digit.
    #[must_use]
    pub fn parse_string(text: &str) -> Option<Vec<Self>> {
        text.chars()
            .map(|c| c.to_digit(10).and_then(|v| Self::new(v as u8)))
            .collect()
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("digit {value} is outside {}..={}", Self::MIN, Self::MAX))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
