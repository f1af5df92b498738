use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::driver::{Driver, IO_FAILURE};

mod cli;
mod driver;
mod editor;
mod report;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .format_timestamp(None)
        .init();

    match Driver::from_config(cli) {
        Ok(driver) => driver.run(),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(IO_FAILURE)
        }
    }
}
