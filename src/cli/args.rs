//! Command-line surface. Thin by design: the spec frames the CLI as an
//! outer shell around the core library, not a feature in its own right.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "semindex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Incremental semantic index for a TypeScript/JavaScript codebase")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a default `semindex.toml` in the given directory.
    Init {
        #[arg(default_value = ".")]
        dir: PathBuf,

        #[arg(short, long)]
        force: bool,
    },

    /// Run a full index pass over the configured roots and exit.
    Index {
        #[arg(default_value = ".")]
        workspace: PathBuf,
    },

    /// Run a full index pass, then watch for changes until interrupted.
    Watch {
        #[arg(default_value = ".")]
        workspace: PathBuf,
    },

    /// Resolve and run a query pattern against the graph store.
    Query {
        /// `findCallers(foo)` call syntax, or free text like "who calls foo".
        input: String,

        #[arg(default_value = ".")]
        workspace: PathBuf,
    },
}
