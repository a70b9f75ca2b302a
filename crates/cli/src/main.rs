use std::process::ExitCode;

use clap::Parser;

use riddle::cli::Cli;
use riddle::error;

mod cmd_filter;

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match cmd_filter::run(&args) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("riddle: {err:#}");
            error::ExitCode::Error.into()
        }
    }
}

/// Route diagnostics to stderr; `-v` raises riddle's level to debug.
///
/// An explicit `RUST_LOG` still wins over the flag.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "riddle=debug" } else { "riddle=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
