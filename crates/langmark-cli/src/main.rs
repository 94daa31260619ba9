use std::env;

use langmark_cli::run_cli;

fn main() {
    let args: Vec<String> = env::args().collect();
    if let Err(err) = run_cli(args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
