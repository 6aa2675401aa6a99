//! seetree: render a directory as a colorized, emoji-annotated tree with an
//! optional version-control status overlay.

mod classify;
mod render;
mod style;

use std::io;
use std::path::PathBuf;

use clap::Parser;

use seetree_file_ignore::PatternSet;
use seetree_git_status::EmptyStatus;
use seetree_git_status::GitStatus;
use seetree_git_status::StatusProvider;
use seetree_walk::Walker;

#[derive(Parser)]
#[command(name = "seetree")]
#[command(version)]
#[command(about = "Colorized, emoji-annotated project tree")]
struct Cli {
    /// Directory to render
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Skip the version-control status overlay
    #[arg(long)]
    no_status: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let root = cli.root.canonicalize().unwrap_or(cli.root.clone());

    let patterns = PatternSet::load(&root);
    tracing::debug!("loaded {} ignore patterns", patterns.len());

    // Walker construction is the only fatal path: a missing root exits
    // non-zero before anything is printed.
    let walker = Walker::new(&root, &patterns)?;

    let status: Box<dyn StatusProvider> = if cli.no_status {
        Box::new(EmptyStatus)
    } else {
        Box::new(GitStatus::load(&root))
    };

    let stdout = io::stdout().lock();
    render::Renderer::new(stdout, status.as_ref()).render(walker)?;
    Ok(())
}
