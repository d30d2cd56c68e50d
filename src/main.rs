use std::io;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use gfpoly::cli::{self, Args};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match cli::run(&args, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
