#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::IsTerminal;
use std::process::ExitCode;

use eqgen_cli::args::CliArgs;
use eqgen_cli::tracing_config::{LogSettings, init_tracing};
use eqgen_cli::driver;

fn run(args: &CliArgs) -> Result<String> {
    if let Some(settings) = LogSettings::from_args(args) {
        init_tracing(&settings)?;
    }
    driver::run(args)
}

fn main() -> ExitCode {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let args = CliArgs::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
