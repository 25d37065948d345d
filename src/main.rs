use std::{collections::BTreeMap, fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use lang_frontend::{display_error, lexer::lexer::tokenize, parse_source};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "frontend")]
#[command(about = "Parse a source file and report the first syntax error")]
struct Cli {
    /// Source file to parse
    file: PathBuf,

    /// Print the full syntax tree
    #[arg(long)]
    dump_ast: bool,

    /// Print the token stream instead of parsing
    #[arg(long)]
    tokens: bool,

    /// Log parser decisions (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    let source = match read_to_string(&cli.file) {
        Ok(source) => source,
        Err(err) => {
            error!("Failed to read '{}': {}", cli.file.display(), err);
            process::exit(1);
        }
    };

    if cli.tokens {
        match tokenize(source.clone(), Some(file_name)) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{}", token.debug());
                }
            }
            Err(err) => {
                display_error(&err, &source);
                process::exit(1);
            }
        }
        return;
    }

    let start = Instant::now();
    let program = match parse_source(&source, &file_name) {
        Ok(program) => program,
        Err(err) => {
            display_error(&err, &source);
            process::exit(1);
        }
    };

    info!("Parsed {} in {:?}", file_name, start.elapsed());

    if cli.dump_ast {
        println!("{:#?}", program.statements);
        return;
    }

    let mut counts = BTreeMap::new();
    for statement in program.iter() {
        *counts
            .entry(statement.get_stmt_type().to_string())
            .or_insert(0usize) += 1;
    }

    println!("{}: {} top-level statements", file_name, program.len());
    for (kind, count) in counts {
        println!("  - {}: {}", kind, count);
    }
}
