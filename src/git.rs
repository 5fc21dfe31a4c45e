use std::process::Command;

use camino::Utf8Path;
use command_error::CommandExt;
use miette::miette;
use miette::Context;
use miette::IntoDiagnostic;
use utf8_command::Utf8Output;

/// `git` CLI wrapper.
#[derive(Debug)]
pub struct Git {}

impl Git {
    pub fn new() -> Self {
        Self {}
    }

    /// Get a `git` command.
    pub fn command(&self) -> Command {
        Command::new("git")
    }

    /// Annotate one file with `git blame --porcelain` and capture its
    /// complete stdout.
    ///
    /// The command runs in the file's containing directory, so `git`
    /// resolves the repository the file actually belongs to.
    pub fn blame(&self, path: &Utf8Path) -> miette::Result<String> {
        let file = path
            .file_name()
            .ok_or_else(|| miette!("Path has no file name: `{path}`"))?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let output: Utf8Output = self
            .command()
            .current_dir(dir)
            .args(["--no-pager", "blame", file, "--porcelain"])
            .output_checked_utf8()
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to annotate `{path}`"))?;

        if output.stdout.is_empty() {
            return Err(miette!("`git blame` produced no output for `{path}`"));
        }

        Ok(output.stdout)
    }
}
