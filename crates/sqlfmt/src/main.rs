//! The sqlfmt CLI.
//!
//! Provides the `sqlfmt` command with two subcommands:
//!
//! - `sqlfmt lsp` - run the language server on stdin/stdout
//! - `sqlfmt fmt <file>` - format a file (or stdin, with `-`) and print the
//!   result to stdout

use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use sqlfmt_common::dialect::AnsiDialect;
use sqlfmt_common::FormatOptions;

#[derive(Parser)]
#[command(name = "sqlfmt", version, about = "A SQL source-code formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the language server on stdin/stdout
    Lsp,
    /// Format a file (or stdin with `-`) and print the result
    Fmt {
        /// Path to the file to format, or `-` for stdin
        path: PathBuf,

        /// Indent width in spaces
        #[arg(long, default_value = "2")]
        tab_size: u32,

        /// Indent with tabs instead of spaces
        #[arg(long)]
        tabs: bool,

        /// Lowercase reserved keywords in the output
        #[arg(long)]
        lowercase_keywords: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Lsp => sqlfmt_lsp::run_server().await,
        Commands::Fmt { path, tab_size, tabs, lowercase_keywords } => {
            if let Err(e) = fmt(&path, tab_size, tabs, lowercase_keywords) {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }
}

fn fmt(path: &std::path::Path, tab_size: u32, tabs: bool, lowercase_keywords: bool) -> Result<(), String> {
    let source = if path == std::path::Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(|e| format!("failed to read stdin: {e}"))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))?
    };

    let options = FormatOptions { tab_size, insert_spaces: !tabs };
    let edit = sqlfmt_format::format_document(&source, &options, &AnsiDialect, lowercase_keywords)
        .map_err(|e| e.to_string())?;

    print!("{}", edit.new_text);
    Ok(())
}
