use std::{fmt::Display, iter};

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::Error;

const MULTIPLY_FACTOR: u32 = 2024;

/// Stone with a number engraved on it, the number may grow without bound.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stone(BigUint);

impl From<u64> for Stone {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Stone {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Stone {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidStoneText(value.to_string()));
        }

        value
            .parse::<BigUint>()
            .map(Self)
            .map_err(|_| Error::InvalidStoneText(value.to_string()))
    }
}

impl Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Stone {
    /// Stone(s) this one changes into after a single blink:
    /// 0 becomes 1, a number with even digits splits into its left and right halves,
    /// any other number gets multiplied by 2024.
    pub fn blink(&self) -> Blinked {
        if self.0.is_zero() {
            return Blinked::Single(Stone(BigUint::one()));
        }

        let digits_n = self.digits_n();
        if digits_n % 2 == 0 {
            let split_factor = BigUint::from(10u32).pow(digits_n / 2);
            Blinked::Split(
                Stone(&self.0 / &split_factor),
                Stone(&self.0 % &split_factor),
            )
        } else {
            Blinked::Single(Stone(&self.0 * MULTIPLY_FACTOR))
        }
    }

    fn digits_n(&self) -> u32 {
        // Decimal text of a BigUint never has leading zeros.
        self.0.to_str_radix(10).len() as u32
    }
}

/// Ordered result of blinking at one stone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blinked {
    Single(Stone),
    Split(Stone, Stone),
}

impl IntoIterator for Blinked {
    type Item = Stone;
    type IntoIter = iter::Chain<iter::Once<Stone>, std::option::IntoIter<Stone>>;

    fn into_iter(self) -> Self::IntoIter {
        let (first, second) = match self {
            Blinked::Single(stone) => (stone, None),
            Blinked::Split(left, right) => (left, Some(right)),
        };

        iter::once(first).chain(second)
    }
}
