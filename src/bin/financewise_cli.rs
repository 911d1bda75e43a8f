use std::{env, process};

use financewise_core::{cli, init};

fn main() {
    init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = cli::run(&args) {
        cli::output::error(&err);
        process::exit(1);
    }
}
