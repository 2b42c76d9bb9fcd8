use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::index_storage::load_index;
use crate::indexer::{BuildReport, build_index, generate_index};
use crate::models::{Diagnostic, Severity};
use crate::utils::{IndexPaths, get_working_dir, resolve_against};

#[derive(Parser)]
#[command(name = "project-search-index")]
#[command(version = "0.1.0")]
#[command(about = "Generate the project search index from per-project JSON documents", long_about = None)]
pub struct Cli {
    /// Base directory for the data/ layout (defaults to the working directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Source directory with project documents (default: <root>/data/projects)
    #[arg(long, global = true)]
    pub projects_dir: Option<PathBuf>,

    /// Output index file (default: <root>/data/search/search_index.json)
    #[arg(long, global = true)]
    pub output: Option<PathBuf>,

    /// Only print warnings, not informational diagnostics
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index and write it (default)
    Generate,
    /// Build the index and report diagnostics without writing anything
    Check,
    /// Show statistics about the existing index file
    Stats,
}

impl Cli {
    fn paths(&self) -> Result<IndexPaths> {
        let working_dir = get_working_dir()?;
        let root = match &self.root {
            Some(root) => resolve_against(&working_dir, root),
            None => working_dir,
        };
        Ok(IndexPaths::with_overrides(&root, self.projects_dir.as_deref(), self.output.as_deref()))
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = cli.paths()?;

    match &cli.command {
        Some(Commands::Generate) | None => generate(&paths, cli.quiet)?,
        Some(Commands::Check) => check(&paths, cli.quiet),
        Some(Commands::Stats) => show_stats(&paths)?,
    }

    Ok(())
}

fn print_diagnostics(diagnostics: &[Diagnostic], quiet: bool) {
    for diagnostic in diagnostics {
        if quiet && diagnostic.severity == Severity::Info {
            continue;
        }
        eprintln!("{}: {}", diagnostic.severity, diagnostic);
    }
}

fn print_counts(report: &BuildReport) {
    eprintln!(
        "Indexed {} projects ({} files skipped, {} warnings)",
        report.indexed(),
        report.files_skipped,
        report.warnings().count()
    );
}

fn generate(paths: &IndexPaths, quiet: bool) -> Result<()> {
    let report = generate_index(paths)?;
    print_diagnostics(&report.diagnostics, quiet);
    print_counts(&report);
    println!("{}", report.summary_line(&paths.output_file));
    Ok(())
}

fn check(paths: &IndexPaths, quiet: bool) {
    let report = build_index(&paths.projects_dir);
    print_diagnostics(&report.diagnostics, quiet);
    print_counts(&report);
    println!("Checked {} projects in {} (nothing written)", report.indexed(), paths.projects_dir.display());
}

fn show_stats(paths: &IndexPaths) -> Result<()> {
    let Some(document) = load_index(&paths.output_file)? else {
        println!("No search index at {}", paths.output_file.display());
        println!("Run `project-search-index generate` to create it");
        return Ok(());
    };

    let developers: HashSet<&str> = document
        .projects
        .iter()
        .map(|p| p.developer.as_str())
        .filter(|d| !d.is_empty())
        .collect();
    let emirates: HashSet<&str> = document
        .projects
        .iter()
        .map(|p| p.emirate.as_str())
        .filter(|e| !e.is_empty())
        .collect();
    let tokens: HashSet<&str> =
        document.projects.iter().flat_map(|p| p.tokens.iter().map(String::as_str)).collect();
    let priced = document.projects.iter().filter(|p| p.price_from_aed.is_some()).count();

    println!("Project Search Index Statistics");
    println!("================================");
    println!("Version: {}", document.version);
    println!("Generated at: {}", document.generated_at.format("%Y-%m-%d %H:%M:%S UTC"));
    println!("Total projects: {}", document.len());
    println!("  With price: {}", priced);
    println!("Developers: {}", developers.len());
    println!("Emirates: {}", emirates.len());
    println!("Distinct tokens: {}", tokens.len());
    println!();
    println!("Index file: {}", paths.output_file.display());

    Ok(())
}
