//! Data file count command - one-shot calculation from the command line

use anyhow::Result;
use sizing::optimal_file_count;

use crate::Context;
use crate::cli::FilesArgs;
use crate::ui;

/// Run the files command
pub fn run(ctx: &Context, args: FilesArgs) -> Result<()> {
    let count = optimal_file_count(args.expected, args.threshold, args.max_files)?;

    // quiet mode prints just the number for scripting
    if ctx.quiet {
        println!("{count}");
        return Ok(());
    }

    ui::kv("Expected size", &args.expected.to_string());
    ui::kv("Per-file threshold", &args.threshold.to_string());
    ui::kv("Data files", &count.to_string());
    Ok(())
}
