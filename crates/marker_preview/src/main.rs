use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::io;

use marker_preview::{run_preview, PreviewRequest};

fn main() -> Result<()> {
    let matches = Command::new("marker_preview")
        .version("0.1.0")
        .about("Previews the text around two fixed markers before an edit is applied")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    init_logger(verbose);

    let request = PreviewRequest::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_preview(&request, &mut out)
        .with_context(|| format!("Failed to preview {}", request.path.display()))?;

    Ok(())
}

/// Logs go to stderr; RUST_LOG overrides the default level.
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
