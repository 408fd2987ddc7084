//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};

#[derive(Debug, Parser)]
#[command(
    name = "shorex",
    version,
    about = "Parse supplier confirmation workbooks into normalized order records"
)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    #[command(flatten)]
    pub color: colorchoice_clap::Color,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a confirmation workbook and print the result as JSON.
    Parse(ParseArgs),
    /// List the canonical fields and the label aliases that resolve to them.
    Aliases,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Path to the workbook (.xlsx).
    pub file: PathBuf,

    /// Emit the flattened order batch instead of the raw parse result.
    #[arg(long)]
    pub orders: bool,

    /// Compact single-line JSON output.
    #[arg(long)]
    pub compact: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_parse_command() {
        let cli = Cli::try_parse_from(["shorex", "parse", "confirmation.xlsx", "--orders"])
            .expect("valid args");
        match cli.command {
            Command::Parse(args) => {
                assert_eq!(args.file, PathBuf::from("confirmation.xlsx"));
                assert!(args.orders);
                assert!(!args.compact);
            }
            Command::Aliases => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_cli_requires_file_argument() {
        assert!(Cli::try_parse_from(["shorex", "parse"]).is_err());
    }
}
