//! Dumps the dashboard API's OpenAPI document as pretty JSON.
//!
//!   generate_openapi                  # to stdout
//!   generate_openapi -o openapi.json  # or --output / --output=<path>

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use sensor_dashboard::api::handlers::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, PartialEq)]
enum Target {
    Stdout,
    File(PathBuf),
}

fn parse_target(mut args: impl Iterator<Item = String>) -> Result<Target> {
    let mut target = Target::Stdout;
    while let Some(arg) = args.next() {
        target = match arg.as_str() {
            "-o" | "--output" => match args.next() {
                Some(path) => Target::File(path.into()),
                None => bail!("{arg} needs a path"),
            },
            _ => match arg.strip_prefix("--output=") {
                Some(path) if !path.is_empty() => Target::File(path.into()),
                _ => bail!("unexpected argument: {arg:?}"),
            },
        };
    }
    Ok(target)
}

fn main() -> Result<()> {
    let target = parse_target(std::env::args().skip(1))?;
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("Failed to serialise OpenAPI document")?;

    match target {
        Target::Stdout => io::stdout()
            .write_all(json.as_bytes())
            .context("Failed to write to stdout")?,
        Target::File(path) => {
            fs::write(&path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", json.len(), path.display());
        }
    }
    Ok(())
}
