mod args;
mod cut;
mod error;
mod range;
mod split;

use args::Args;
use clap::ArgMatches;
use error::Error;
use split::Splitter;
use std::fs::File;
use std::io::{self, Read, Write};
use std::result::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    let matches = args::get_matches();

    if let Result::Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        if let Error::Parse(_) = err {
            eprintln!("\n{}", matches.usage());
        }
        std::process::exit(1);
    }
}

/// Logs to stderr, filtered by `RUST_LOG`. Only warnings are shown by default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let args = args::parse_args(matches)?;
    cut(args)
}

fn cut(args: Args) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut splitter = Splitter::new();

    for_each_input(&args.inputs, |name, mut input| {
        cut::cut_fields(name, &mut input, &mut stdout, &mut splitter, &args.ranges, args.order)
    })?;
    debug!(mode = ?splitter.mode(), "finished all inputs");

    stdout.flush().map_err(Error::Write)
}

/// Opens each input in order and passes it to `f`. Stops at the first input that cannot be
/// opened or fully processed.
fn for_each_input<F>(inputs: &[String], mut f: F) -> Result<(), Error>
where
    F: FnMut(&str, Box<dyn Read>) -> Result<(), Error>,
{
    for input in inputs {
        debug!(%input, "opening input");
        let reader: Box<dyn Read> = if input == "-" {
            Box::new(io::stdin())
        } else {
            Box::new(File::open(input).map_err(|err| Error::read(input, err))?)
        };

        f(input, reader)?;
    }

    Result::Ok(())
}
