use clap::Parser;
use html_attributes::{load_data, render_path, HelperOptions, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut options = HelperOptions::load(Some(&cli.config))?;
    if let Some(name) = cli.function_name {
        options = options.with_function_name(name);
    }
    if cli.sort {
        options = options.with_sort(true);
    }
    debug!(?options, config = %cli.config.display(), "options loaded");

    let data = load_data(cli.data.as_deref())?;
    let output = render_path(&cli.template, &data, &options)?;
    print!("{}", output);
    Ok(())
}

/// Logs go to stderr so rendered output stays clean. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
