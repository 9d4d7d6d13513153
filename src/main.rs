// SPDX-License-Identifier: MIT
//
// tinct — color parsing, transforms, palettes and gradients from the shell.
//
// The binary is a thin front end over the two library crates:
//
//   tinct-color   → Color, hex / tuple parsing, notations
//   tinct-palette → transforms, harmonies, gradients, output formats
//
// Set RUST_LOG=debug (or trace) to watch the engine allocate gradient
// segments and size palettes.

mod cli;

use std::env;
use std::process;

use cli::{Cli, CliError, USAGE, render};

fn main() {
    env_logger::init();

    let cli = match Cli::parse(env::args().skip(1)) {
        Ok(cli) => cli,
        Err(CliError::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("tinct: {e}");
            if matches!(e, CliError::Usage(_)) {
                eprintln!("\n{USAGE}");
            }
            process::exit(1);
        }
    };

    match cli.run().and_then(|output| render(&output, cli.json)) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("tinct: {e}");
            process::exit(1);
        }
    }
}
