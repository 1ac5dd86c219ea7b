//! Command-line interface for projcat.
//!
//! Flattens the current directory into `_project_context.txt`.

use clap::Parser;
use projcat::{FlattenBuilder, FlattenOptions, flatten};
use std::process::exit;

/// projcat: flatten the current project into one text file
#[derive(Parser)]
#[command(name = "projcat", version, about, long_about = None)]
struct Cli {
    /// Log each pruned directory and skipped entry to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_options(self) -> (FlattenOptions, bool) {
        let mut builder = FlattenBuilder::new(".");
        if let Some(name) = own_file_name() {
            builder = builder.tool_name(name);
        }
        (builder.build(), self.verbose)
    }
}

fn own_file_name() -> Option<String> {
    let exe = std::env::current_exe().ok()?;
    exe.file_name().map(|n| n.to_string_lossy().into_owned())
}

#[cfg(feature = "logging")]
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (options, verbose) = cli.into_options();

    #[cfg(feature = "logging")]
    init_logging(verbose);
    #[cfg(not(feature = "logging"))]
    let _ = verbose;

    match flatten(&options) {
        Ok(_) => println!(
            "Done! Copy the contents of {} into the chat.",
            options.output_file
        ),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
