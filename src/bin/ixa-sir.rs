use std::io;
use std::process::ExitCode;

use clap::Parser;
use ixa_sir::runner::{run_with_args, BaseArgs};

fn main() -> ExitCode {
    let args = BaseArgs::parse();
    match run_with_args(&args, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
