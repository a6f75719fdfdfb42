//! Typefill
//!
//! Semantic type-filling pass for a small statically typed language.
//! Reads an already-parsed program (JSON), resolves names, assigns a type
//! to every expression and reports the first semantic error.

mod feedback;
mod frontend;
mod types;
mod utils;

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use anyhow::Context;

use feedback::{CheckFeedback, CheckStats};
use frontend::input::load_ast;
use frontend::semantic::SemanticAnalyzer;

/// Typefill
#[derive(Parser, Debug)]
#[command(name = "typefill")]
#[command(version = "0.1.0")]
#[command(about = "Type-check a parsed program and fill in expression types")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input AST file (.json)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a program for semantic errors
    Check {
        /// Input AST file
        input: PathBuf,

        /// Print a structured JSON report instead of plain text
        #[arg(long)]
        json: bool,

        /// Write the typed AST as JSON ("-" for stdout)
        #[arg(long, value_name = "FILE")]
        emit_typed: Option<PathBuf>,
    },
    /// Print version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Check { input, json, emit_typed }) => {
            check_file(input, *json, emit_typed.as_deref())
        }
        Some(Commands::Version) => {
            println!("typefill 0.1.0");
            Ok(true)
        }
        None => {
            if let Some(ref input) = cli.input {
                check_file(input, false, None)
            } else {
                eprintln!("Error: No input file specified");
                eprintln!("Usage: typefill <FILE> or typefill check <FILE>");
                process::exit(1);
            }
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Check one program. Returns whether it passed.
fn check_file(input: &Path, json: bool, emit_typed: Option<&Path>) -> anyhow::Result<bool> {
    log::info!("checking {}", input.display());
    let mut ast = load_ast(input)?;
    let source_file = input.display().to_string();

    let started = Instant::now();
    let mut analyzer = SemanticAnalyzer::new();
    let result = analyzer.analyze(&mut ast);
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let stats = CheckStats::from_analyzer(&analyzer, elapsed_ms);
    log::info!(
        "semantic pass finished in {} ms ({} expressions typed)",
        elapsed_ms,
        stats.typed_expression_count
    );

    if let Err(e) = result {
        if json {
            println!("{}", CheckFeedback::failure(source_file, &e, stats).to_json());
        } else {
            match e.location() {
                Some(location) => eprintln!("{}: error: {}", location, e),
                None => eprintln!("error: {}", e),
            }
        }
        return Ok(false);
    }

    if let Some(path) = emit_typed {
        let typed = serde_json::to_string_pretty(&ast).context("could not serialize typed AST")?;
        if path == Path::new("-") {
            println!("{}", typed);
        } else {
            fs::write(path, typed).with_context(|| format!("could not write {}", path.display()))?;
            log::info!("wrote typed AST to {}", path.display());
        }
    }

    if json {
        println!("{}", CheckFeedback::success(source_file, stats).to_json());
    } else {
        println!("No errors found");
    }
    Ok(true)
}
