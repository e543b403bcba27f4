//! `genesis settings`: show the resolved project settings.

use std::io::Write;

use crate::cli::SettingsArgs;
use crate::error::Result;

pub fn execute(args: &SettingsArgs, out: &mut dyn Write) -> Result<()> {
    let settings = args.loader().load()?;
    writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
    Ok(())
}
