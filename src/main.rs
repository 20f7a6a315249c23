use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use log::info;
use monkey::{parser::parser::parse, render_error, source_name};
use rustyline::{error::ReadlineError, DefaultEditor};

const PROMPT: &str = ">> ";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => run_repl(),
        2 => run_file(&args[1]),
        _ => {
            eprintln!("Usage: {} [file]", args[0]);
            ExitCode::FAILURE
        }
    }
}

fn run_file(file_path: &str) -> ExitCode {
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", file_path, err);
            return ExitCode::FAILURE;
        }
    };
    let file_name = source_name(file_path);

    let start = Instant::now();
    let (program, errors) = parse(&source);
    info!("Parsed {} in {:?}", file_name, start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", render_error(error, &source, file_name));
        }
        return ExitCode::FAILURE;
    }

    for stmt in program.iter() {
        println!("{}", stmt);
    }
    ExitCode::SUCCESS
}

fn run_repl() -> ExitCode {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("Failed to initialize editor: {}", err);
            return ExitCode::FAILURE;
        }
    };

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());

                let (program, errors) = parse(&line);
                if !errors.is_empty() {
                    println!(" parser errors:");
                    for error in &errors {
                        println!("\t{}", error);
                    }
                    continue;
                }
                println!("{}", program);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
