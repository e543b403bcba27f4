//! `genesis print`: assemble the build config and emit it as JSON.

use std::fs;
use std::io::Write;

use genesis_config::{BuildConfig, assemble};
use tracing::info;

use crate::cli::PrintArgs;
use crate::error::{CliError, Result};

pub fn execute(args: &PrintArgs, out: &mut dyn Write) -> Result<()> {
    let loader = args.settings.loader();
    let settings = loader.load()?;
    let config = assemble(&settings);
    let json = render(&config, args.compact)?;

    match &args.out {
        Some(path) => {
            let path = loader.root().join(path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| CliError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, json + "\n").map_err(|source| CliError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), env = %settings.env, "wrote build config");
        }
        None => writeln!(out, "{json}")?,
    }

    Ok(())
}

fn render(config: &BuildConfig, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    Ok(json)
}
