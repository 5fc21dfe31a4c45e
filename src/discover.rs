use camino::Utf8Path;
use camino::Utf8PathBuf;
use globset::Glob;
use miette::miette;
use miette::Context;
use miette::IntoDiagnostic;
use walkdir::WalkDir;

/// Pattern used when the caller doesn't supply one: every Rust source file
/// under the tree.
pub const DEFAULT_PATTERN: &str = "**/*.rs";

/// Find every file under `root` matching the glob `pattern`.
///
/// Returned paths are relative to `root`. The walk order is the processing
/// order for the whole run.
pub fn discover_files(root: &Utf8Path, pattern: &str) -> miette::Result<Vec<Utf8PathBuf>> {
    let matcher = Glob::new(pattern)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to compile glob pattern `{pattern}`"))?
        .compile_matcher();

    let mut paths = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to walk `{root}`"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = Utf8PathBuf::from_path_buf(entry.into_path())
            .map_err(|path| miette!("Path is not UTF-8: {}", path.display()))?;
        let path = match path.strip_prefix(root) {
            Ok(relative) => relative.to_owned(),
            Err(_) => path,
        };
        if matcher.is_match(&path) {
            paths.push(path);
        }
    }

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_discover_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        fs::write(root.join("a.rs"), "fn a() {}").unwrap();
        fs::write(root.join("c.txt"), "not source").unwrap();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("sub").join("b.rs"), "fn b() {}").unwrap();

        let paths = discover_files(root, DEFAULT_PATTERN).unwrap();

        assert_eq!(
            paths,
            vec![Utf8PathBuf::from("a.rs"), Utf8PathBuf::from("sub/b.rs")]
        );
    }

    #[test]
    fn test_discover_files_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();
        fs::write(root.join("notes.md"), "plain").unwrap();

        let paths = discover_files(root, DEFAULT_PATTERN).unwrap();

        assert_eq!(paths, Vec::<Utf8PathBuf>::new());
    }

    #[test]
    fn test_discover_files_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8Path::from_path(dir.path()).unwrap();

        assert!(discover_files(root, "a/**b{").is_err());
    }
}
