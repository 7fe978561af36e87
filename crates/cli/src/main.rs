mod commands;
mod dump;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::ReportOptions;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Strict JSON parser with semantic checks.
#[derive(Parser)]
#[command(
    name = "strictjson",
    version,
    about = "Strict JSON parser with semantic checks"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Spaces per nesting level when printing a tree
    #[arg(long, global = true, default_value = "2")]
    indent: usize,

    /// Write the report to this file instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a JSON file and print its syntax tree or its errors
    Parse {
        /// Path to the JSON source file
        file: PathBuf,
    },

    /// Check a JSON file and report only whether it is valid
    Check {
        /// Path to the JSON source file
        file: PathBuf,
    },

    /// Print the token stream of a JSON file as a token dump
    Tokens {
        /// Path to the JSON source file
        file: PathBuf,
    },

    /// Parse a token dump (`<KIND: literal>` per line)
    Replay {
        /// Path to the token dump file
        dump: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let opts = ReportOptions {
        output: cli.output,
        quiet: cli.quiet,
        indent: cli.indent,
        out: cli.out,
    };

    match cli.command {
        Commands::Parse { file } => commands::parse::cmd_parse(&file, &opts),
        Commands::Check { file } => commands::check::cmd_check(&file, &opts),
        Commands::Tokens { file } => commands::tokens::cmd_tokens(&file, &opts),
        Commands::Replay { dump } => commands::replay::cmd_replay(&dump, &opts),
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}
