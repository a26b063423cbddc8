use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use sizing::SizeValue;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dbplan")]
#[command(version)]
#[command(about = "Plan SQL Server database file layout and disk space", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the full provisioning plan from a configuration file
    Plan(PlanArgs),

    /// Calculate the data file count for an expected database size
    Files(FilesArgs),

    /// Calculate disk space requirements for a file layout
    Space(SpaceArgs),

    /// Write a sample configuration file
    Init(InitArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct PlanArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "dbplan.toml")]
    pub config: PathBuf,

    /// Emit the plan as JSON instead of formatted text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FilesArgs {
    /// Expected database size (e.g. "50GB")
    #[arg(short, long)]
    pub expected: SizeValue,

    /// Maximum size per data file before another file is allocated
    #[arg(short, long)]
    pub threshold: SizeValue,

    /// Hard cap on the number of data files
    #[arg(long, default_value_t = sizing::MAX_DATA_FILES)]
    pub max_files: u32,
}

#[derive(Args)]
pub struct SpaceArgs {
    /// Number of data files
    #[arg(short, long)]
    pub files: u32,

    /// Initial size of each data file (e.g. "200MB")
    #[arg(short, long)]
    pub data_size: SizeValue,

    /// Initial size of the log file (e.g. "100MB")
    #[arg(short, long)]
    pub log_size: SizeValue,

    /// Safety margin factor applied to all requirements
    #[arg(short, long, default_value_t = sizing::DEFAULT_MARGIN)]
    pub margin: f64,
}

#[derive(Args)]
pub struct InitArgs {
    /// Where to write the configuration file
    #[arg(default_value = "dbplan.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
