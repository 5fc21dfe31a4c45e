use clap::Parser;

/// Report which commit last touched every line of your source files.
///
/// Prints one `;`-separated row per annotated line: file, line number,
/// committer name, committer email, committer date, author name, author
/// email, author date.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
#[command(max_term_width = 100)]
pub struct Opts {
    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`.
    #[arg(long, default_value = "info", env = "GIT_BLAME_CSV_LOG")]
    pub log: String,

    /// Glob pattern selecting the files to annotate.
    ///
    /// Defaults to every Rust source file under the current directory.
    #[arg()]
    pub pattern: Option<String>,
}
