use std::{env, fs::read_to_string, process};

use minic::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 || (args.len() == 3 && args[2] != "--tokens") {
        eprintln!("Usage: minic <source-file> [--tokens]");
        process::exit(1);
    }

    let file_path: &str = &args[1];
    let dump_tokens = args.len() == 3;

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: failed to read '{}': {}", file_path, error);
            process::exit(1);
        }
    };

    let tokens = match tokenize(source.clone()) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, file_path);
            process::exit(1);
        }
    };

    if dump_tokens {
        for token in &tokens {
            println!("{}", token);
        }
        return;
    }

    if let Err(error) = parse(tokens) {
        display_error(&error, &source, file_path);
        process::exit(1);
    }

    println!("Syntax analysis completed successfully!");
}
