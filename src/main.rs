use clap::Parser;
use retscan::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
