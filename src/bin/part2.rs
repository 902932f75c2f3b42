use anyhow::{Context, Result};
use clap::Parser;
use stones::{BlinkCounter, CLIArgs};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let stones = stones::read_stones(&args.input_path).with_context(|| {
        format!(
            "Failed to read stones from given file({}).",
            args.input_path.display()
        )
    })?;

    let mut counter = BlinkCounter::new();
    for blink_count in [25, 75] {
        let stone_count = stones.stone_n_after_blink_with(blink_count, &mut counter);
        println!(
            "After {} blink(s), the number of given stones changes to {}.",
            blink_count, stone_count
        );
    }
    println!(
        "{} (stone, blinks left) pair(s) counted in total.",
        counter.memo_len()
    );

    Ok(())
}
