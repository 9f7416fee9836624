use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "candlesticks",
    version,
    about = "Five-number summaries for benchmark timing tables"
)]
pub struct Cli {
    /// Timing table: one sample row per line, fields separated by single
    /// spaces, all fields floating-point. Gzip input is detected by magic
    /// bytes and decompressed transparently.
    pub table: PathBuf,

    /// Append the arithmetic mean of each stage as a seventh field.
    #[arg(long)]
    pub mean: bool,

    /// Fail when the table's column count differs from the number of stage
    /// labels instead of truncating to the shorter of the two.
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_argument_is_a_usage_error() {
        let err = Cli::try_parse_from(["candlesticks"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn flags_default_to_off() {
        let cli = Cli::try_parse_from(["candlesticks", "timings.txt"]).unwrap();
        assert!(!cli.mean);
        assert!(!cli.strict);
    }

    #[test]
    fn mean_and_strict_parse() {
        let cli = Cli::try_parse_from(["candlesticks", "timings.txt", "--mean", "--strict"])
            .unwrap();
        assert!(cli.mean);
        assert!(cli.strict);
    }
}
