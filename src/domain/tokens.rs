use crate::error::SdkError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Add;

/// Number of nano units in one whole token.
pub const NANO_PER_TOKEN: u64 = 1_000_000_000;
const TOKEN_DECIMALS: u32 = 9;

/// A non-negative token amount, stored in nano units.
///
/// Serialized as a decimal string of nano units, the way wallets and
/// providers exchange amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tokens(u128);

impl Tokens {
    pub const ZERO: Self = Self(0);

    pub fn from_nano(nano: u128) -> Self {
        Self(nano)
    }

    pub fn nano(&self) -> u128 {
        self.0
    }

    /// Converts a whole-token amount into nano units.
    ///
    /// Rejects negative values and values with more than 9 fractional digits.
    pub fn from_decimal(value: Decimal) -> Result<Self, SdkError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(SdkError::InvalidAmount(format!("{value} is negative")));
        }

        let nano = value
            .checked_mul(Decimal::from(NANO_PER_TOKEN))
            .ok_or_else(|| SdkError::InvalidAmount(format!("{value} is too large")))?;
        if !nano.fract().is_zero() {
            return Err(SdkError::InvalidAmount(format!(
                "{value} has more than {TOKEN_DECIMALS} decimal places"
            )));
        }

        nano.to_u128()
            .map(Self)
            .ok_or_else(|| SdkError::InvalidAmount(format!("{value} is out of range")))
    }

    /// The whole-token value, when it fits a `Decimal`.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let nano = i128::try_from(self.0).ok()?;
        Decimal::try_from_i128_with_scale(nano, TOKEN_DECIMALS)
            .ok()
            .map(|d| d.normalize())
    }
}

impl Add for Tokens {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_decimal() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "{} nano", self.0),
        }
    }
}

impl TryFrom<Decimal> for Tokens {
    type Error = SdkError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

impl Serialize for Tokens {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Tokens {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text
                .trim()
                .parse::<u128>()
                .map(Self)
                .map_err(serde::de::Error::custom),
            Raw::Number(nano) => Ok(Self(u128::from(nano))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_decimal_converts_to_nano() {
        assert_eq!(Tokens::from_decimal(dec!(1)).unwrap().nano(), 1_000_000_000);
        assert_eq!(Tokens::from_decimal(dec!(0.5)).unwrap().nano(), 500_000_000);
        assert_eq!(Tokens::from_decimal(dec!(0.000000001)).unwrap().nano(), 1);
        assert_eq!(Tokens::from_decimal(dec!(0)).unwrap(), Tokens::ZERO);
    }

    #[test]
    fn test_from_decimal_rejects_invalid_amounts() {
        assert!(matches!(
            Tokens::from_decimal(dec!(-1)),
            Err(SdkError::InvalidAmount(_))
        ));
        assert!(matches!(
            Tokens::from_decimal(dec!(0.0000000001)),
            Err(SdkError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_display_renders_whole_tokens() {
        assert_eq!(Tokens::from_nano(1_500_000_000).to_string(), "1.5");
        assert_eq!(Tokens::from_nano(7).to_string(), "0.000000007");
        assert_eq!(Tokens::ZERO.to_string(), "0");
    }

    #[test]
    fn test_serde_accepts_strings_and_numbers() {
        let from_text: Tokens = serde_json::from_str("\"1000000000\"").unwrap();
        let from_number: Tokens = serde_json::from_str("1000000000").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"1000000000\"");
        assert!(serde_json::from_str::<Tokens>("\"-5\"").is_err());
    }
}
