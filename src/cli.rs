use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Routegen - route module generator for front-end dev servers
#[derive(Parser, Debug)]
#[command(name = "routegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the router, entry and service-worker modules once
    Generate {
        /// Project root
        #[arg(long, default_value = ".")]
        cwd: PathBuf,
    },

    /// Generate, then regenerate routes on change until Ctrl+C
    ///
    /// Dev server messages are printed to stdout, one JSON object per line.
    ///
    /// With NODE_ENV=development pages are compiled on demand: each route
    /// renders the loading placeholder until the dev server driving this
    /// process marks its url as requested. A standalone run has no such
    /// server, so every page stays on the placeholder.
    /// Set COMPILE_ON_DEMAND=none to emit production routes instead.
    Dev {
        /// Project root
        #[arg(long, default_value = ".")]
        cwd: PathBuf,
    },
}

impl Commands {
    pub fn cwd(&self) -> &PathBuf {
        match self {
            Commands::Generate { cwd } | Commands::Dev { cwd } => cwd,
        }
    }
}
