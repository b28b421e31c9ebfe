use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use lipi_core::rules::RuleSet;
use lipi_core::scheme::Scheme;
use lipi_engine::{Composition, Engine, TranslitResult};

#[derive(Parser)]
#[command(name = "lipitool", about = "Lipi transliteration diagnostics")]
struct Cli {
    /// Path to a scheme TOML file (default: built-in Devanagari)
    #[arg(long, global = true)]
    scheme: Option<String>,

    /// Path to a rules TOML file (default: built-in Devanagari)
    #[arg(long, global = true)]
    rules: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate a string and print the composed output
    Convert {
        /// Input text to transliterate
        text: String,

        /// Print every emitted result record
        #[arg(long)]
        trace_results: bool,
    },

    /// Interactive line mode: transliterate each line with a fresh engine
    Repl,
}

fn load_tables(cli: &Cli) -> (Arc<Scheme>, Arc<RuleSet>) {
    let scheme = match &cli.scheme {
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read scheme file {}: {}", path, e);
                process::exit(1);
            });
            Arc::new(Scheme::parse(&content).unwrap_or_else(|e| {
                eprintln!("Failed to parse scheme {}: {}", path, e);
                process::exit(1);
            }))
        }
        None => Arc::new(Scheme::default_devanagari()),
    };

    let rules = match &cli.rules {
        Some(path) => {
            let content = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read rules file {}: {}", path, e);
                process::exit(1);
            });
            Arc::new(RuleSet::parse(&content).unwrap_or_else(|e| {
                eprintln!("Failed to parse rules {}: {}", path, e);
                process::exit(1);
            }))
        }
        None => Arc::new(RuleSet::default_devanagari()),
    };

    (scheme, rules)
}

fn run_engine(scheme: Arc<Scheme>, rules: Arc<RuleSet>, text: &str) -> Vec<TranslitResult> {
    let mut engine = Engine::new(scheme, rules);
    engine.execute(text).unwrap_or_else(|e| {
        eprintln!("Rendering failed: {}", e);
        process::exit(1);
    })
}

fn fold(results: &[TranslitResult]) -> String {
    let mut composition = Composition::new();
    for result in results {
        composition.push(result);
    }
    composition.text()
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let (scheme, rules) = load_tables(&cli);

    match cli.command {
        Command::Convert {
            text,
            trace_results,
        } => {
            let results = run_engine(scheme, rules, &text);
            if trace_results {
                for result in &results {
                    println!(
                        "{:>8} -> {:<12} final={} previous_final={}",
                        format!("{:?}", result.input),
                        format!("{:?}", result.output),
                        result.is_final,
                        result.is_previous_final,
                    );
                }
            }
            println!("{}", fold(&results));
        }

        Command::Repl => {
            let stdin = io::stdin();
            print!("> ");
            io::stdout().flush().ok();
            for line in stdin.lock().lines() {
                let line = line.unwrap_or_else(|e| {
                    eprintln!("Failed to read line: {}", e);
                    process::exit(1);
                });
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let results = run_engine(Arc::clone(&scheme), Arc::clone(&rules), trimmed);
                    println!("{}", fold(&results));
                }
                print!("> ");
                io::stdout().flush().ok();
            }
        }
    }
}
