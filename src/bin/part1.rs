use anyhow::{Context, Result};
use clap::Parser;
use stones::SimulateCLIArgs;

fn main() -> Result<()> {
    let args = SimulateCLIArgs::parse();
    let mut stones = stones::read_stones(&args.input_path).with_context(|| {
        format!(
            "Failed to read stones from given file({}).",
            args.input_path.display()
        )
    })?;

    let blink_count = 25;
    let stone_count = if args.simulate {
        for _ in 0..blink_count {
            stones.blink();
        }
        stones.count() as u128
    } else {
        stones.stone_n_after_blink(blink_count)
    };
    println!(
        "After {} blink(s), the number of given stones changes to {}.",
        blink_count, stone_count
    );

    Ok(())
}
