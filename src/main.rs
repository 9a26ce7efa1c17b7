use clap::Parser;
use senary::runtime::{
    error,
    interpreter::{CodeManagement, forth_interpreter::ForthInterpreter},
};
use senary::lang::tokenizing::TokenStream;
use std::{
    io::{BufReader, stdin},
    path::PathBuf,
};

/// A small concurrent Forth that counts in base 6.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Script file to run.  Standard input is read when neither a script nor --eval is given.
    script: Option<PathBuf>,

    /// Run the given source text instead of a script.
    #[arg(short, long, value_name = "SOURCE", conflicts_with = "script")]
    eval: Option<String>,
}

fn main() -> error::Result<()> {
    let args = Args::parse();

    // Tasks run detached from the host loop, so a failing task ends the process right away.
    let mut interpreter = ForthInterpreter::with_builtin_words();
    interpreter.set_exit_on_task_failure(true);

    match (args.eval, args.script) {
        (Some(source), _) => interpreter.process_source("<eval>", &source),

        (None, Some(path)) => interpreter.process_source_file(&path.to_string_lossy()),

        (None, None) => {
            let reader = Box::new(BufReader::new(stdin()));
            interpreter.process_stream(TokenStream::new("<stdin>", reader))
        }
    }
}
