//! Product record and its fixed-point price.
//!
//! # Responsibility
//! - Define the product data holder used by the controller demo.
//! - Represent prices exactly as integer cents, never as floats.
//!
//! # Invariants
//! - `Price` is never negative.
//! - Textual prices carry at most two fractional digits.

use crate::model::record::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const CENTS_PER_UNIT: i64 = 100;
const MAX_FRACTION_DIGITS: usize = 2;

/// Error for invalid price input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    Empty,
    Negative,
    TooManyFractionDigits(String),
    Malformed(String),
    Overflow(String),
    CentsOutOfRange(u8),
}

impl Display for PriceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "price cannot be empty"),
            Self::Negative => write!(f, "price cannot be negative"),
            Self::TooManyFractionDigits(value) => write!(
                f,
                "price `{value}` has more than {MAX_FRACTION_DIGITS} fractional digits"
            ),
            Self::Malformed(value) => write!(f, "price `{value}` is not a decimal amount"),
            Self::Overflow(value) => write!(f, "price `{value}` is out of range"),
            Self::CentsOutOfRange(cents) => {
                write!(f, "cents part {cents} must be below {CENTS_PER_UNIT}")
            }
        }
    }
}

impl Error for PriceError {}

/// Non-negative decimal amount with two fractional digits, stored as cents.
///
/// Serialized as integer cents; deserialization goes through `from_cents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    /// Builds a price from whole units plus cents, e.g. `Price::new(99, 99)`.
    ///
    /// # Panics
    /// When `cents` is 100 or more. In a `const` item this is a compile error;
    /// use [`Price::try_new`] for runtime input.
    pub const fn new(units: u32, cents: u8) -> Self {
        assert!(
            (cents as i64) < CENTS_PER_UNIT,
            "cents part must be below 100"
        );
        Self(units as i64 * CENTS_PER_UNIT + cents as i64)
    }

    /// Fallible form of [`Price::new`].
    pub fn try_new(units: u32, cents: u8) -> Result<Self, PriceError> {
        if i64::from(cents) >= CENTS_PER_UNIT {
            return Err(PriceError::CentsOutOfRange(cents));
        }
        Ok(Self(i64::from(units) * CENTS_PER_UNIT + i64::from(cents)))
    }

    /// Builds a price from integer cents.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        if cents < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(cents))
    }

    /// Returns the amount in cents.
    pub fn cents(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = PriceError;

    fn try_from(cents: i64) -> Result<Self, Self::Error> {
        Self::from_cents(cents)
    }
}

impl From<Price> for i64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PriceError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(PriceError::Negative);
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(PriceError::Malformed(trimmed.to_string()));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(PriceError::Malformed(trimmed.to_string()));
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(PriceError::TooManyFractionDigits(trimmed.to_string()));
        }

        let overflow = || PriceError::Overflow(trimmed.to_string());
        let whole_units = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().map_err(|_| overflow())?
        };
        // "5" -> 0 cents, "5.5" -> 50 cents, "5.05" -> 5 cents.
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| overflow())?,
        };

        whole_units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|cents| cents.checked_add(fraction_cents))
            .map(Price)
            .ok_or_else(overflow)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / CENTS_PER_UNIT,
            self.0 % CENTS_PER_UNIT
        )
    }
}

/// Product managed by the controller demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
    pub price: Price,
}

/// Product fields used when the repository assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
}

impl Product {
    /// Creates a product with a caller-provided id.
    pub fn new(id: RecordId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Record for Product {
    type Draft = NewProduct;

    const KIND: &'static str = "product";

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
        }
    }
}

/// Controller listing line: `{id}: {name} - ${price}`.
impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} - ${}", self.id, self.name, self.price)
    }
}
