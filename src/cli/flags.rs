use clap::Parser;

use crate::settings::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Default, Parser)]
#[command(
    name = "strongpass",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliFlags {
    #[arg(short, long)]
    pub help: bool,

    #[arg(short, long)]
    pub version: bool,

    #[arg(short, long)]
    pub quiet: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Start from saved settings
    #[arg(short, long)]
    pub saved: bool,

    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,

    #[arg(short, long, value_parser = parse_count)]
    pub number: Option<usize>,

    #[arg(long)]
    pub no_uppercase: bool,

    #[arg(long)]
    pub no_lowercase: bool,

    #[arg(long)]
    pub no_digits: bool,

    #[arg(long)]
    pub no_special: bool,

    /// Score a password; without a value it is read from stdin
    #[arg(short, long, num_args = 0..=1)]
    pub evaluate: Option<Option<String>>,
}

fn parse_length(s: &str) -> Result<usize, String> {
    let len: usize = s.parse().map_err(|_| format!("Invalid number: {s}"))?;
    if (MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        Ok(len)
    } else {
        Err(format!("length must be between {MIN_LENGTH} and {MAX_LENGTH}"))
    }
}

fn parse_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("number must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Invalid number: {s}")),
    }
}
