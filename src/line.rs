use std::fmt::Display;

use crate::{counter::BlinkCounter, stone::Stone, Error};

/// Stones in a straight line, in the order they are engraved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoneLine {
    stones: Vec<Stone>,
}

impl Display for StoneLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        let mut stone_iter = self.stones.iter();
        if let Some(first) = stone_iter.next() {
            write!(f, "{}", first)?;
        }
        for stone in stone_iter {
            write!(f, ", {}", stone)?;
        }

        write!(f, "]")
    }
}

impl TryFrom<&str> for StoneLine {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        value
            .split_ascii_whitespace()
            .map(Stone::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl FromIterator<Stone> for StoneLine {
    fn from_iter<T: IntoIterator<Item = Stone>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl StoneLine {
    pub fn new(stones: Vec<Stone>) -> Self {
        Self { stones }
    }

    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    pub fn count(&self) -> usize {
        self.stones.len()
    }

    /// Change every stone in place, the line grows as stones split.
    pub fn blink(&mut self) {
        let mut next_stones = Vec::with_capacity(self.stones.len() * 2);
        for stone in &self.stones {
            next_stones.extend(stone.blink());
        }

        self.stones = next_stones;
    }

    pub fn stone_n_after_blink(&self, blink_n: usize) -> u128 {
        let mut counter = BlinkCounter::new();
        self.stone_n_after_blink_with(blink_n, &mut counter)
    }

    pub fn stone_n_after_blink_with(&self, blink_n: usize, counter: &mut BlinkCounter) -> u128 {
        counter.total_after(&self.stones, blink_n)
    }
}
