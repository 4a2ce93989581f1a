//! Command-line interface for rex
//! This binary parses regex-dialect patterns and prints them as token
//! dumps or ASCII tree diagrams.
//!
//! Usage:
//!   rex diagram [`<pattern>`]                      - Print the parse tree diagram
//!   rex process `<pattern>` [--format `<format>`]    - Run a stage-format processor
//!   rex list-formats                             - List all available formats

use clap::{Arg, Command};

use rex::pattern::builder;
use rex::pattern::processor::{available_formats, process_pattern, ProcessingSpec};

/// Pattern printed when `diagram` is invoked without an argument
const DEMO_PATTERN: &str = "((a|b)+ (19|20)[0-9]{2}) [^x-z]";

fn main() {
    let matches = Command::new("rex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting regex-dialect patterns as trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("diagram")
                .about("Parse a pattern and print its ASCII tree diagram")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern to parse (a built-in demo pattern when omitted)")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("process")
                .about("Run a stage-format processor over a pattern")
                .arg(
                    Arg::new("pattern")
                        .help("The pattern to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'tree-diagram')")
                        .default_value("tree-diagram"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available stage-format strings"))
        .get_matches();

    match matches.subcommand() {
        Some(("diagram", diagram_matches)) => {
            let pattern = diagram_matches
                .get_one::<String>("pattern")
                .map(String::as_str)
                .unwrap_or(DEMO_PATTERN);
            handle_diagram_command(pattern);
        }
        Some(("process", process_matches)) => {
            let pattern = process_matches.get_one::<String>("pattern").unwrap();
            let format = process_matches.get_one::<String>("format").unwrap();
            handle_process_command(pattern, format);
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Handle the diagram command
fn handle_diagram_command(pattern: &str) {
    match builder::diagram(pattern) {
        Ok(diagram) => print!("{}", diagram),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the process command
fn handle_process_command(pattern: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match process_pattern(pattern, &spec) {
        Ok(output) => {
            print!("{}", output);
            if !output.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available stage-format strings:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
