//! Command handlers for the Reed compiler CLI.
//!
//! Each handler reads its input, reports failures on stderr, and exits
//! with a non-zero status; the process is the error boundary here.

use reed_lexer::lex;

/// Tokenize a file and print the resulting stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);

    let stream = match lex(&source) {
        Ok(stream) => stream,
        Err(error) => {
            eprintln!("{path}: {error}");
            std::process::exit(1);
        }
    };

    println!("Tokens for '{}' ({} tokens):", path, stream.len());
    for token in &stream {
        println!("  {token:?}");
    }
}

pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
