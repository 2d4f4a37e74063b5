use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

use super::types::OutputFormatArg;

/// Renumber or re-prefix Johnny Decimal folders (e.g. "10.01 Projects")
#[derive(Parser, Debug)]
#[command(name = "jdrenum")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prefix of the folders to rename (e.g. '10')
    #[arg(long = "from", value_name = "PREFIX", required_unless_present = "completions")]
    pub from: Option<String>,

    /// New prefix (e.g. '20'). Defaults to --from when renumbering
    #[arg(long = "to", value_name = "PREFIX")]
    pub to: Option<String>,

    /// Renumber sequentially starting from this number (0 keeps existing numbers)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub start: u64,

    /// Directory to process
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Preview changes without making them
    #[arg(long)]
    pub dry_run: bool,

    /// Number of digits after the decimal point [default: 2]
    #[arg(long, value_name = "N")]
    pub digits: Option<usize>,

    /// Output format [default: summary]
    #[arg(long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Log what the renamer is doing to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// The target prefix, with an empty `--to ""` treated as not given.
    pub fn target_prefix(&self) -> &str {
        self.to.as_deref().unwrap_or_default()
    }

    /// Either a new prefix or a start number is needed for there to be any work.
    pub fn has_action(&self) -> bool {
        self.start > 0 || !self.target_prefix().is_empty()
    }
}
