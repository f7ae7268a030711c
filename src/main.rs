use gosyms::{
    cli::Args,
    core::{go_env_root, Walker},
    error::Result,
    output::create_processor,
};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing(args.quiet, args.verbose);
    process::exit(run(args));
}

/// Set up stderr logging; RUST_LOG overrides the flag-derived level
fn init_tracing(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "gosyms=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the scan and map the outcome to an exit code
fn run(args: Args) -> i32 {
    match execute(args) {
        Ok(()) => 0,
        Err(err) => {
            error!("{err}");
            1
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => go_env_root()?,
    };
    let srcdir = root.join("src");
    let mut processor = create_processor(args.mode, &srcdir);
    let mut walker = Walker::new(&srcdir)?;
    walker.walk(processor.as_mut())
}
