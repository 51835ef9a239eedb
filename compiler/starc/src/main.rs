//! starc: the star command-line driver.

use std::process::ExitCode;

use starc::commands::{check_file, lex_file, parse_file, run_file};
use starc::{init_tracing, RunConfig};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::SUCCESS;
    };
    let rest = &args[2..];

    match command.as_str() {
        "run" => match RunConfig::from_args(rest) {
            Ok(config) => run_file(&config),
            Err(error) => usage_error("run <file.star> [--deny-warnings] [--no-prelude]", &error),
        },
        "check" => match RunConfig::from_args(rest) {
            Ok(config) => check_file(&config),
            Err(error) => usage_error("check <file.star> [--deny-warnings]", &error),
        },
        "parse" => match rest {
            [path] => parse_file(path),
            _ => usage_line("parse <file.star>"),
        },
        "lex" => match rest {
            [path] => lex_file(path),
            _ => usage_line("lex <file.star>"),
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "version" | "--version" | "-V" => {
            println!("starc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => {
            // A bare `.star` path runs it.
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("star"))
            {
                run_file(&RunConfig::new(command.as_str()))
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                ExitCode::FAILURE
            }
        }
    }
}

fn usage_error(usage: &str, error: &starc::ConfigError) -> ExitCode {
    eprintln!("error: {error}");
    usage_line(usage)
}

fn usage_line(usage: &str) -> ExitCode {
    eprintln!("Usage: starc {usage}");
    ExitCode::FAILURE
}

fn print_usage() {
    println!("starc: run star programs");
    println!();
    println!("Usage: starc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.star>      Compile and run a program");
    println!("  check <file.star>    Compile only and report diagnostics");
    println!("  parse <file.star>    Parse and display the syntax tree");
    println!("  lex <file.star>      Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --deny-warnings, -D  Treat warnings as errors");
    println!("  --no-prelude         Do not define print, len, tag and the other natives");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=star_patterns=trace) to trace dispatch.");
}
