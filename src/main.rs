//! Weasel CLI - evolve a random string into the target phrase.
//!
//! Usage: `weasel [--pause]`. Any other arguments are ignored.
//! Set `RUST_LOG=debug` for per-generation diagnostics on stderr.

use std::ffi::OsString;
use std::io::{self, BufRead};

use anyhow::Result;
use clap::Parser;
use log::debug;

use weasel::evolve::{EvolveConfig, EvolveRunner};
use weasel::report::ConsoleReporter;

const PAUSE_FLAG: &str = "--pause";

/// Evolves a random string into a fixed target phrase.
#[derive(Parser, Debug)]
#[command(name = "weasel", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Wait for Enter before exiting
    #[arg(long)]
    pause: bool,

    /// Unrecognized arguments, accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<OsString>,
}

impl Cli {
    fn pause_requested(&self) -> bool {
        self.pause || self.rest.iter().any(|a| a == PAUSE_FLAG)
    }
}

/// Parses arguments without ever rejecting them.
///
/// Arguments stay as `OsString` throughout, so non-UTF-8 input is ignored
/// like any other unknown argument.
fn pause_requested<I, T>(args: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(&args) {
        Ok(cli) => cli.pause_requested(),
        Err(e) => {
            debug!("ignoring unparsable arguments: {e}");
            scan_for_pause(&args)
        }
    }
}

/// Looks for an exact `--pause` after the program name.
fn scan_for_pause(args: &[OsString]) -> bool {
    args.iter().skip(1).any(|a| a == PAUSE_FLAG)
}

fn main() -> Result<()> {
    env_logger::init();

    let pause = pause_requested(std::env::args_os());
    let config = EvolveConfig::default();

    let mut reporter = ConsoleReporter::new(io::stdout().lock());
    EvolveRunner::run_with_observer(&config, &mut reporter)?;
    drop(reporter);

    if pause {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}
