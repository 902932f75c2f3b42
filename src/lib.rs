use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod counter;
pub mod line;
pub mod stone;

pub use counter::{BlinkCounter, SharedBlinkCounter};
pub use line::StoneLine;
pub use stone::{Blinked, Stone};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyFile,
    InvalidStoneText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyFile => write!(
                f,
                "Can't read stones from empty file, expect one line in it."
            ),
            Error::InvalidStoneText(s) => write!(
                f,
                "Invalid text({}) for stone, expect a non-negative integer.",
                s
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Parser)]
pub struct SimulateCLIArgs {
    pub input_path: PathBuf,
    /// Expand the whole stone line in every blink instead of counting with memo
    #[arg(long)]
    pub simulate: bool,
}

pub fn read_stones<P: AsRef<Path>>(path: P) -> Result<StoneLine> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let text = reader.lines().next().ok_or(Error::EmptyFile)?.with_context(|| {
        format!(
            "Failed to read the first line of given file({}).",
            path.as_ref().display()
        )
    })?;

    StoneLine::try_from(text.as_str())
        .with_context(|| format!("Failed to parse stones from given text({}).", text))
}
