use std::thread;

use stones::{BlinkCounter, SharedBlinkCounter, Stone, StoneLine};

fn line_of(ns: &[u64]) -> StoneLine {
    ns.iter().copied().map(Stone::from).collect()
}

fn simulate(line: &StoneLine, blink_n: usize) -> u128 {
    let mut line = line.clone();
    for _ in 0..blink_n {
        line.blink();
    }

    line.count() as u128
}

#[test]
fn no_blink_counts_stone_itself() {
    let mut counter = BlinkCounter::new();
    for n in [0, 1, 17, 125, 2024, u64::MAX] {
        assert_eq!(counter.count_after(&Stone::from(n), 0), 1);
    }
    assert_eq!(counter.memo_len(), 0);
}

#[test]
fn count_follows_successors() {
    let mut counter = BlinkCounter::new();
    for n in [0, 1, 7, 10, 99, 125, 1000, 2024, 253000] {
        let stone = Stone::from(n);
        for blink_n in 1..=8 {
            let mut fresh = BlinkCounter::new();
            let expected = stone
                .blink()
                .into_iter()
                .map(|next| fresh.count_after(&next, blink_n - 1))
                .sum::<u128>();
            assert_eq!(counter.count_after(&stone, blink_n), expected);
        }
    }
}

#[test]
fn memo_agrees_with_simulation() {
    for n in [0, 1, 10, 17, 99, 125, 999, 2024] {
        let line = line_of(&[n]);
        for blink_n in 0..=10 {
            assert_eq!(
                line.stone_n_after_blink(blink_n),
                simulate(&line, blink_n),
                "stone {} after {} blink(s)",
                n,
                blink_n
            );
        }
    }
}

#[test]
fn example_counts() {
    let line = line_of(&[125, 17]);
    assert_eq!(line.stone_n_after_blink(6), 22);
    assert_eq!(line.stone_n_after_blink(25), 55312);
    assert_eq!(line.stone_n_after_blink(75), 65601038650482);
}

#[test]
fn total_ignores_stone_order() {
    let mut counter = BlinkCounter::new();
    let forward = StoneLine::try_from("125 17 0 2024").unwrap();
    let backward = StoneLine::try_from("2024 0 17 125").unwrap();
    assert_eq!(
        counter.total_after(forward.stones(), 40),
        counter.total_after(backward.stones(), 40)
    );
}

#[test]
fn empty_line_counts_zero() {
    let line = StoneLine::try_from("  ").unwrap();
    assert_eq!(line.count(), 0);
    assert_eq!(line.stone_n_after_blink(75), 0);
}

#[test]
fn retained_counter_reuses_history() {
    let line = line_of(&[125, 17]);
    let mut counter = BlinkCounter::new();
    assert_eq!(line.stone_n_after_blink_with(25, &mut counter), 55312);
    let memo_len = counter.memo_len();
    assert!(memo_len > 0);

    assert_eq!(line.stone_n_after_blink_with(25, &mut counter), 55312);
    assert_eq!(counter.memo_len(), memo_len);

    // Line after one blink, every stone on it was counted with 24 blinks left.
    let blinked = line_of(&[253000, 1, 7]);
    assert_eq!(blinked.stone_n_after_blink_with(24, &mut counter), 55312);
    assert_eq!(counter.memo_len(), memo_len);
}

#[test]
fn shared_counter_across_threads() {
    let line = line_of(&[125, 17]);
    let mut warmed = BlinkCounter::new();
    assert_eq!(line.stone_n_after_blink_with(6, &mut warmed), 22);
    let warmed_len = warmed.memo_len();

    let counter: SharedBlinkCounter = warmed.into();
    assert_eq!(counter.memo_len(), warmed_len);
    thread::scope(|s| {
        let handles = (0..4)
            .map(|_| s.spawn(|| counter.total_after(line.stones(), 25)))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 55312);
        }
    });

    assert_eq!(counter.count_after(&Stone::from(0), 0), 1);
    let mut counter = counter.into_inner();
    assert_eq!(line.stone_n_after_blink_with(75, &mut counter), 65601038650482);
}

#[test]
fn new_shared_counter_starts_empty() {
    let counter = SharedBlinkCounter::new();
    assert_eq!(counter.memo_len(), 0);
    assert_eq!(counter.count_after(&Stone::from(17), 3), 3);
    assert_eq!(counter.memo_len(), 5);
}
