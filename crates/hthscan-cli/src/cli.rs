use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "hthscan",
    author = "HTHScan Developers",
    version,
    about = "HTHScan - Detect helix-turn-helix DNA-binding motifs in protein sequences with the Dodd & Egan weight matrix.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input protein FASTA file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path for the tab-separated report (created or overwritten).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set the number of worker threads used to scan sequences.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Do not draw a progress bar while scanning.
    #[arg(long)]
    pub no_progress: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S dispatch.threads=4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and the progress bar
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
