//! Space requirement command - one-shot calculation from the command line

use anyhow::Result;
use sizing::required_space;

use crate::Context;
use crate::cli::SpaceArgs;
use crate::ui;

/// Run the space command
pub fn run(ctx: &Context, args: SpaceArgs) -> Result<()> {
    let space = required_space(args.files, args.data_size, args.log_size, args.margin)?;

    // quiet mode prints just the total byte count for scripting
    if ctx.quiet {
        println!("{}", space.total.bytes());
        return Ok(());
    }

    ui::kv(
        "Data drive",
        &format!(
            "{} ({} file(s) of {})",
            ui::format_size(space.data.bytes()),
            args.files,
            args.data_size
        ),
    );
    ui::kv("Log drive", &ui::format_size(space.log.bytes()));
    ui::kv("Total", &ui::format_size(space.total.bytes()));
    Ok(())
}
