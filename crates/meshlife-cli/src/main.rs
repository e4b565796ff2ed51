//! Command-line driver: load a pattern file, run the mesh one generation
//! at a time, render after each.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use meshlife::{read_field, run};

/// Generations simulated when the count argument is omitted.
const DEFAULT_GENERATIONS: u64 = 10;

fn usage() -> ExitCode {
    eprintln!("usage: meshlife <pattern-file> [generations]");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return usage();
    };
    let generations = match args.next() {
        None => DEFAULT_GENERATIONS,
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("meshlife: invalid generation count '{raw}'");
                return usage();
            }
        },
    };
    if args.next().is_some() {
        return usage();
    }

    // Missing input: report and exit without ever starting the simulation.
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("meshlife: cannot open '{path}': {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut field = match read_field(BufReader::new(file)) {
        Ok(field) => field,
        Err(err) => {
            eprintln!("meshlife: cannot load '{path}': {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", field.render());
    for generation in 1..=generations {
        run(&mut field, 1);
        println!("generation {generation}:");
        println!("{}", field.render());
    }
    ExitCode::SUCCESS
}
