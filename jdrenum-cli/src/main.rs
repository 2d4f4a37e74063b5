use clap::{CommandFactory, Parser};
use jdrenum_core::{Config, OutputFormat, RenumberConfig};
use std::io::{self, IsTerminal, Write};
use std::process;

mod cli;
mod logging;
mod renumber;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate_completions(shell, &mut cmd, "jdrenum", &mut io::stdout());
        process::exit(0);
    }

    // Load config to get defaults
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Error: failed to load .jdrenum/config.toml: {e:#}");
        process::exit(2);
    });

    let use_color =
        !cli.no_color && config.defaults.use_color.unwrap_or_else(|| io::stdout().is_terminal());
    logging::init_logging(cli.verbose, !cli.no_color && io::stderr().is_terminal());

    if !cli.has_action() {
        eprintln!("Please provide --to when not using --start");
        eprintln!("{}", Cli::command().render_usage());
        process::exit(2);
    }

    let renumber_config = build_config(&cli, config.defaults.digits);
    let output: OutputFormat = cli.output.map_or(config.defaults.output, Into::into);
    tracing::debug!(?output, use_color, digits = renumber_config.digits, "resolved settings");

    match renumber::handle_renumber(&renumber_config, output, use_color) {
        Ok(0) => process::exit(0),
        Ok(_failed) => {
            // The report already names each folder that failed.
            process::exit(1);
        },
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

fn build_config(cli: &Cli, default_digits: usize) -> RenumberConfig {
    RenumberConfig::new(cli.from.clone().unwrap_or_default(), cli.dir.clone())
        .with_target_prefix(cli.target_prefix())
        .with_start(cli.start)
        .with_digits(cli.digits.unwrap_or(default_digits))
        .with_dry_run(cli.dry_run)
}

// Generate shell completions
pub fn generate_completions<G: clap_complete::Generator>(
    gen: G,
    cmd: &mut clap::Command,
    name: &str,
    out: &mut dyn Write,
) {
    clap_complete::generate(gen, cmd, name, out);
}
