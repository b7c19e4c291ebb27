//! rulematch CLI entry point

use clap::Parser;
use rulematch::cli::{Command, args::Cli, common::init_logging};
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Check {
            values,
            sources,
            json,
            format,
        } => rulematch::cli::check::run_check(&values, &sources, json, format, cli.color),
        Command::List { sources, format } => rulematch::cli::list::run_list(&sources, format),
    };

    process::exit(exit_code);
}
