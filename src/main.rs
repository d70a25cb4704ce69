use std::fs;

use clap::Parser;
use revpol::{
    interpreter::{dispatch::default_dispatch, environment::Environment, value::Value},
    parse_program,
};

/// revpol is a tree-walking interpreter for a small reverse-Polish-notation
/// expression language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells revpol to look at a file instead of an inline program.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression tree before evaluating it.
    #[arg(short, long)]
    tree: bool,

    /// Pipe mode prints the final value of the program, unless the program
    /// produced no value.
    #[arg(short, long)]
    pipe_mode: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let program = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let dispatch = default_dispatch();

    let tree = match parse_program(&program, &dispatch) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if args.tree {
        println!("{tree}");
    }

    let mut env = Environment::new();

    match tree.evaluate(&mut env) {
        Ok(value) => {
            if args.pipe_mode && value != Value::Unit {
                println!("{value}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
