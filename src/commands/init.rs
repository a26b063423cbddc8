//! Init command - write a commented sample configuration file

use anyhow::{Result, bail};
use std::fs;

use crate::Context;
use crate::cli::InitArgs;
use crate::ui;

const SAMPLE_CONFIG: &str = r#"# dbplan configuration
# Sizes are written as <number><unit> with unit B, KB, MB, GB or TB
# (binary multiples: 1KB = 1024B).

sql_instance = "YourServerName"

[database]
name = "MyDatabase"
data_drive = "G"
log_drive = "L"
# Drives the data file count: one file per threshold of expected size,
# e.g. 50GB at a 10GB threshold yields 5 files (capped at 8).
expected_size = "50GB"

[file_sizes]
data_size = "200MB"
data_growth = "100MB"
log_size = "100MB"
log_growth = "100MB"
threshold = "10GB"

# Optional free-space figures per drive letter. dbplan never queries real
# disks; drives listed here are validated, others are skipped.
[available_space]
G = "500GB"
L = "100GB"
"#;

/// Run the init command
pub fn run(ctx: &Context, args: InitArgs) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    fs::write(&args.path, SAMPLE_CONFIG)?;
    if !ctx.quiet {
        ui::success(&format!("Wrote {}", args.path.display()));
    }
    Ok(())
}
