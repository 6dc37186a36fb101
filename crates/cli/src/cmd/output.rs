//! Output formats shared by the listing commands.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use kegdex_core::{Dex, Entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Same as dex/nodes.json
    Json,
    /// id, updated and title separated by tabs
    Tsv,
    /// Same as dex/nodes.md
    Md,
    /// Colored, aligned ids with highlighted matches
    Pretty,
    /// Markdown links without timestamps
    Include,
}

/// Pretty on a color terminal, tsv otherwise.
pub fn resolve_format(requested: Option<OutputFormat>) -> OutputFormat {
    requested.unwrap_or_else(|| {
        if io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
            OutputFormat::Pretty
        } else {
            OutputFormat::Tsv
        }
    })
}

pub fn print_dex(dex: &Dex, format: OutputFormat) {
    match format {
        OutputFormat::Json => match dex.to_json() {
            Ok(json) => print!("{json}"),
            Err(e) => {
                eprintln!("Error encoding json: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Tsv => print!("{}", dex.tsv()),
        OutputFormat::Md => print!("{}", dex.md()),
        OutputFormat::Pretty => print!("{}", dex.pretty()),
        OutputFormat::Include => print!("{}", dex.as_includes()),
    }
}

pub fn print_entry(entry: &Entry, format: OutputFormat) {
    match format {
        OutputFormat::Json => match serde_json::to_string(entry) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error encoding json: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Tsv => println!("{}", entry.tsv()),
        OutputFormat::Md => println!("{}", entry.md()),
        OutputFormat::Pretty => println!("{}", entry.pretty(entry.id().to_string().len())),
        OutputFormat::Include => println!("{}", entry.as_include()),
    }
}
