//! `genesis check`: validate the project and summarize the assembled build.

use std::io::Write;

use genesis_config::validation::{main_candidates, main_exists};
use genesis_config::{Assembler, validate_fs};
use tracing::{info, warn};

use crate::cli::CheckArgs;
use crate::error::Result;

pub fn execute(args: &CheckArgs, out: &mut dyn Write) -> Result<()> {
    let settings = args.settings.loader().load()?;

    if !args.no_fs {
        validate_fs(&settings)?;
        if !main_exists(&settings) {
            let tried: Vec<_> = main_candidates(&settings)
                .iter()
                .map(|path| path.display().to_string())
                .collect();
            warn!(tried = %tried.join(", "), "main module not found");
        }
    }

    let config = Assembler::new(&settings).assemble();
    let entries: Vec<_> = config.entry.keys().map(String::as_str).collect();

    writeln!(out, "env:      {}", settings.env)?;
    writeln!(out, "output:   {}", config.output.path.join(&config.output.filename).display())?;
    writeln!(out, "entries:  {}", entries.join(", "))?;
    writeln!(out, "rules:    {}", config.module.rules.len())?;
    writeln!(out, "plugins:  {}", config.plugin_names().join(", "))?;

    info!(env = %settings.env, "project settings are valid");
    Ok(())
}
