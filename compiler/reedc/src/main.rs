//! Reed Compiler CLI
//!
//! Front-end driver for the Reed language.

use reedc::commands::lex_file;
use reedc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: reed lex <file.reed>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Reed Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Reed Compiler");
    println!();
    println!("Usage: reed <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.reed>   Tokenize and display tokens");
    println!("  help              Show this help message");
    println!("  version           Show version information");
}
