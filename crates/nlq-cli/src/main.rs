// nlq CLI - natural language log queries to search requests

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use nlq_core::compiler::FALLBACK_PAYLOAD;
use nlq_core::{load_config, CompilerConfig, QueryCompiler, Route, TracingObserver};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{warn, Level};

#[derive(Parser)]
#[command(name = "nlq")]
#[command(version = "0.1.0")]
#[command(about = "Compile plain English log queries into search requests", long_about = None)]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Compiler settings file (or set NLQ_CONFIG env var)
    #[arg(short, long, global = true, env = "NLQ_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile one utterance
    Parse {
        /// The query in plain English
        #[arg(required = true)]
        words: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compile every line of a file
    Batch {
        /// File with one utterance per line
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Interactive prompt
    Repl {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Clone)]
struct OutputArgs {
    /// Print the request as it would be typed into Dev Tools
    #[arg(long)]
    dev_tools: bool,

    /// Index pattern searches are sent to
    #[arg(short, long, default_value = "*")]
    index: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CompilerConfig::default(),
    };
    let compiler = QueryCompiler::with_config(config).with_observer(TracingObserver);

    match cli.command {
        Commands::Parse { words, output } => {
            let utterance = words.join(" ");
            println!("{}", render(&compiler, &utterance, &output)?);
        }
        Commands::Batch { file, output } => {
            run_batch(&compiler, &file, &output)?;
        }
        Commands::Repl { output } => {
            run_repl(&compiler, &output)?;
        }
    }

    Ok(())
}

// JSON payload, or the routed request with --dev-tools
fn render(
    compiler: &QueryCompiler,
    utterance: &str,
    output: &OutputArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    if !output.dev_tools {
        return Ok(compiler.parse(utterance));
    }

    let query = match compiler.compile(utterance) {
        Ok(query) => query,
        Err(e) => {
            warn!(error = %e, "Query processing failed");
            return Ok(FALLBACK_PAYLOAD.to_string());
        }
    };
    match Route::for_query(&query, &output.index)? {
        Some(route) => Ok(route.to_string()),
        None => Ok(query.to_json()?),
    }
}

fn run_batch(
    compiler: &QueryCompiler,
    file: &Path,
    output: &OutputArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(file)?;

    let mut count = 0;
    for line in content.lines().map(str::trim) {
        // blank lines and # comments are skipped
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        println!("{} {}", ">".dimmed(), line.bold());
        println!("{}\n", render(compiler, line, output)?);
        count += 1;
    }

    eprintln!("{} {}", "Compiled:".dimmed(), count.to_string().green());
    Ok(())
}

fn run_repl(compiler: &QueryCompiler, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "Natural Language Log Query Compiler".cyan().bold());
    println!("{}\n", "Enter 'quit' or 'exit' to stop".dimmed());

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("{} ", "Enter your query:".cyan());
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break; // EOF
        }

        let utterance = input.trim();
        if matches!(utterance.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }
        if utterance.is_empty() {
            continue;
        }

        println!("\n{}", render(compiler, utterance, output)?);
        println!("{}", "-".repeat(50).dimmed());
    }

    println!("\n{}", "Goodbye!".green());
    Ok(())
}
