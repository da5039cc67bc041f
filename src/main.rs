//! Typedstore command-line tool - reads and edits one store file per invocation.

use std::{error::Error, process};

use clap::Parser;
use typedstore::{
    cli::{self, Cli, formatting::format_error},
    tracing_config,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_config::init_cli_mode()?;

    let args = Cli::parse();

    match cli::run(args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
