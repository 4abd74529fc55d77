use pyscal_rust::{init_tracing, json, run_with_config, Config};

use std::env;
use std::fs;
use std::process;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: pyscal <file>");
        process::exit(2);
    }
    let path = &args[1];

    let source = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Cannot read {}: {}", path, e);
            process::exit(1);
        }
    };
    let source = source.trim();

    let config = Config::default();
    match run_with_config(source, config) {
        Ok(env) => println!("{}", json::render(&env, config.style)),
        Err(err) => {
            // Line numbers count from the start of the trimmed text.
            let line_text = source.lines().nth(err.line().saturating_sub(1)).unwrap_or("");
            eprintln!("ERROR AT LINE {}:", err.line());
            eprintln!("{}", line_text.trim());
            eprintln!("{} ({})", err, err.code());
            process::exit(1);
        }
    }
}
