use std::{fs, path::PathBuf};

use clap::Parser;
use paint::run;

/// paint is a tree-walking interpreter for the Paint scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the Paint script to execute.
    file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.file).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.file.display());
        std::process::exit(1);
    });

    if let Err(diagnostic) = run(&source) {
        eprintln!("{diagnostic}");
        std::process::exit(1);
    }
}
