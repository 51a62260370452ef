// Render the ezview man page to stdout (or to the path given as the first argument)

use anyhow::{Context, Result};
use clap::CommandFactory;
use ezview::cli::Cli;

fn main() -> Result<()> {
    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer: Vec<u8> = Vec::new();
    man.render(&mut buffer).context("Failed to render man page")?;

    match std::env::args().nth(1) {
        Some(path) => std::fs::write(&path, buffer)
            .with_context(|| format!("Failed to write man page to {}", path))?,
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&buffer).context("Failed to write man page")?;
        }
    }
    Ok(())
}
