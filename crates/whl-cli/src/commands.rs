use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use whl_cli::pipeline::load_reconciler;
use whl_cli::summary::print_stats;
use whl_report::{build_sitelist, build_wonderlist, render};

use crate::cli::{GenerateArgs, StatsArgs};

pub fn run_sitelist(args: &GenerateArgs) -> Result<()> {
    let recon = load_reconciler(&args.snapshot_dir)?;
    let report = build_sitelist(&recon);
    info!(
        whs_visited = report.tally.inscribed_visited,
        twhs_visited = report.tally.tentative_visited,
        "sitelist built"
    );
    write_document(&render(&report.items, args.profile.into()), args)
}

pub fn run_wonderlist(args: &GenerateArgs) -> Result<()> {
    let recon = load_reconciler(&args.snapshot_dir)?;
    let report = build_wonderlist(&recon);
    info!(
        wonders_visited = report.tally.wonders_visited,
        finalists_visited = report.tally.finalists_visited,
        "wonderlist built"
    );
    write_document(&render(&report.items, args.profile.into()), args)
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let recon = load_reconciler(&args.snapshot_dir)?;
    print_stats(&recon);
    Ok(())
}

fn write_document(document: &str, args: &GenerateArgs) -> Result<()> {
    match &args.output {
        Some(path) => fs::write(path, document)
            .with_context(|| format!("write document: {}", path.display()))?,
        None => print!("{document}"),
    }
    Ok(())
}
