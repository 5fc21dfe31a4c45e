mod blame;
mod cli;
mod commit_hash;
mod commit_info;
mod discover;
mod git;
mod install_tracing;
mod line_record;
mod person_info;
mod report;

use calm_io::stdoutln;
use clap::Parser;
use cli::Opts;
use git::Git;
use install_tracing::install_tracing;
use report::csv_for_files;

fn main() -> miette::Result<()> {
    let opts = Opts::parse();
    install_tracing(&opts.log)?;

    let git = Git::new();
    let report = csv_for_files(&git, opts.pattern.as_deref())?;
    let _ = stdoutln!("{report}");

    Ok(())
}
