// SPDX-FileCopyrightText: 2024 The Brlock Authors
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use argh::FromArgs;
use brlock::LockOptions;
use tracing::info;

mod logging;

#[derive(FromArgs)]
/// Create a Buildroot package lock file based on package inputs.
struct Args {
    #[argh(option)]
    /// path to the input package info JSON file
    input: PathBuf,

    #[argh(option, short = 'o')]
    /// path to write the output lock file, defaults to stdout
    output: Option<PathBuf>,

    #[argh(option)]
    /// path to Buildroot sources
    buildroot: Option<PathBuf>,

    #[argh(option)]
    /// JSON object of name to sha256 mappings not defined in Buildroot .hash files
    hashes: Option<PathBuf>,

    #[argh(switch, short = 'v')]
    /// log every scanned file and resolved download to stderr
    verbose: bool,
}

fn run(args: Args) -> Result<()> {
    let description = brlock::read_description(&args.input)
        .with_context(|| format!("Could not read package info from {:?}", args.input))?;

    let mut options = LockOptions::new();
    if let Some(buildroot) = &args.buildroot {
        options.root(buildroot);
    }
    if let Some(hashes) = &args.hashes {
        let overrides = brlock::read_overrides(hashes)
            .with_context(|| format!("Could not read extra hashes from {hashes:?}"))?;
        options.overrides(overrides);
    }
    let index = options
        .checksum_index()
        .context("Could not index .hash files")?;

    // Nothing is written unless every download resolves.
    let lockfile = brlock::reconcile(&description, &index)?;
    let output = brlock::lockfile_to_string(&lockfile)?;
    match &args.output {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Could not write the lock file to {path:?}"))?;
            info!(path = %path.display(), downloads = lockfile.len(), "wrote lock file");
        }
        None => println!("{output}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    logging::init(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<brlock::Error>() {
                Some(missing @ brlock::Error::MissingChecksum { .. }) => eprintln!("{missing}\n"),
                _ => eprintln!("Error: {err:?}"),
            }
            ExitCode::FAILURE
        }
    }
}
