//! Routegen CLI
//!
//! Usage: routegen <COMMAND>
//!
//! Commands:
//!   generate  Generate the router, entry and service-worker modules once
//!   dev       Generate, then regenerate routes on change

mod cli;

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::warn;

use routegen::infrastructure::{LocalFs, PageScanner, SharedRequestCache, StdoutNotifier};
use routegen::{logging, Config, FilesGenerator, GeneratorPaths, RenderMode};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        report_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::path::absolute(cli.command.cwd())
        .with_context(|| format!("cannot resolve {}", cli.command.cwd().display()))?;

    let (config, warnings) = Config::load_or_default(&cwd)?;
    logging::init_with_config(&config.logging);
    for warning in &warnings {
        warn!("{warning}");
    }

    match cli.command {
        Commands::Generate { .. } => cmd_generate(&cwd, config),
        Commands::Dev { .. } => cmd_dev(&cwd, config),
    }
}

fn build_generator(cwd: &Path, config: Config) -> FilesGenerator<LocalFs, PageScanner> {
    let paths = GeneratorPaths::new(cwd, &config);
    FilesGenerator::new(paths, config, LocalFs::new(), PageScanner::new())
        .with_render_mode(RenderMode::from_env())
}

fn cmd_generate(cwd: &Path, config: Config) -> Result<()> {
    let mut generator = build_generator(cwd, config);
    generator.generate()?;
    Ok(())
}

fn cmd_dev(cwd: &Path, config: Config) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    // The dev server owning this process marks requested urls itself; a
    // standalone run starts with an empty cache.
    let mut generator = build_generator(cwd, config)
        .with_notifier(StdoutNotifier)
        .with_request_cache(SharedRequestCache::new());
    if generator.render_mode().is_on_demand() {
        warn!(
            "on-demand rendering: pages show the loading placeholder until requested \
             through the dev server; set COMPILE_ON_DEMAND=none for production routes"
        );
    }
    generator.generate()?;
    generator.watch(&running)?;
    Ok(())
}

fn report_error(err: &anyhow::Error) {
    let label = if std::io::stderr().is_terminal() {
        "\x1b[1;31merror\x1b[0m"
    } else {
        "error"
    };
    eprintln!("{label}: {err}");
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
