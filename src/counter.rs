use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::stone::Stone;

/// Counts stones after some blinks without expanding them, results of every
/// (stone, blinks left) pair visited are kept for the following queries.
#[derive(Debug, Default)]
pub struct BlinkCounter {
    // Indexed by blinks left minus one.
    blink_history: Vec<HashMap<Stone, u128>>,
}

impl BlinkCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_after(&mut self, stone: &Stone, blink_n: usize) -> u128 {
        if blink_n == 0 {
            return 1;
        }

        if let Some(count) = self
            .blink_history
            .get(blink_n - 1)
            .and_then(|history| history.get(stone))
        {
            return *count;
        }

        let count = stone
            .blink()
            .into_iter()
            .map(|next_stone| self.count_after(&next_stone, blink_n - 1))
            .sum::<u128>();
        if self.blink_history.len() < blink_n {
            self.blink_history.resize_with(blink_n, HashMap::new);
        }
        self.blink_history[blink_n - 1].insert(stone.clone(), count);

        count
    }

    pub fn total_after<'a, I>(&mut self, stones: I, blink_n: usize) -> u128
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        stones
            .into_iter()
            .map(|stone| self.count_after(stone, blink_n))
            .sum()
    }

    /// Number of (stone, blinks left) pairs remembered so far.
    pub fn memo_len(&self) -> usize {
        self.blink_history.iter().map(HashMap::len).sum()
    }
}

/// [`BlinkCounter`] behind a lock, so threads can share what has been counted.
#[derive(Debug, Default)]
pub struct SharedBlinkCounter {
    counter: Mutex<BlinkCounter>,
}

impl From<BlinkCounter> for SharedBlinkCounter {
    fn from(value: BlinkCounter) -> Self {
        Self {
            counter: Mutex::new(value),
        }
    }
}

impl SharedBlinkCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_after(&self, stone: &Stone, blink_n: usize) -> u128 {
        self.lock().count_after(stone, blink_n)
    }

    pub fn total_after<'a, I>(&self, stones: I, blink_n: usize) -> u128
    where
        I: IntoIterator<Item = &'a Stone>,
    {
        self.lock().total_after(stones, blink_n)
    }

    pub fn memo_len(&self) -> usize {
        self.lock().memo_len()
    }

    pub fn into_inner(self) -> BlinkCounter {
        self.counter
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, BlinkCounter> {
        // Entries are only inserted once fully counted, a poisoned history is still valid.
        self.counter.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
