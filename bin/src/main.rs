use std::{
    io::{stdin, stdout, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;

use interpreter::{InterpretError, Interpreter};

// Exit statuses from sysexits.h
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_SOFTWARE: u8 = 70;
const EX_IOERR: u8 = 74;

/// Evaluates a single expression from a file, or runs an interactive prompt.
#[derive(clap::Parser)]
struct Args {
    file: Option<PathBuf>,
}

fn run_file(path: &Path, interpreter: &Interpreter) -> anyhow::Result<ExitCode> {
    log::debug!("Running {}", path.display());
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    Ok(match run(&source, interpreter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    })
}

fn run_prompt(interpreter: &Interpreter) -> anyhow::Result<ExitCode> {
    let mut lines = stdin().lock().lines();
    loop {
        print!(">> ");
        stdout().flush()?;

        let Some(line) = lines.next().transpose()? else { break };
        if line.trim() == "exit" {
            break;
        }

        if let Err(e) = run(&line, interpreter) {
            report(e);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run(source: &str, interpreter: &Interpreter) -> Result<(), InterpretError> {
    interpreter.run_source(source, &mut stdout().lock())
}

fn report(error: InterpretError) -> ExitCode {
    eprintln!("{}", error);
    ExitCode::from(match error {
        InterpretError::CompileError(_) => EX_DATAERR,
        InterpretError::RuntimeError(_) => EX_SOFTWARE,
        InterpretError::Io(_) => EX_IOERR,
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            if let Err(io) = e.print() {
                log::error!("Could not print usage error: {}", io);
            }
            return ExitCode::from(EX_USAGE);
        }
        Err(e) => e.exit(),
    };

    let interpreter = Interpreter::new();
    let result = match args.file {
        Some(file) => run_file(&file, &interpreter),
        None => run_prompt(&interpreter),
    };

    result.unwrap_or_else(|e| {
        eprintln!("{:?}", e);
        ExitCode::from(EX_IOERR)
    })
}
