use std::collections::HashMap;

use camino::Utf8Path;
use miette::Context;

use crate::blame::parse_blame;
use crate::blame::ParsedLine;
use crate::discover::discover_files;
use crate::discover::DEFAULT_PATTERN;
use crate::git::Git;
use crate::line_record::LineRecord;

/// Produce the complete report for every file under the current directory
/// matching `pattern`.
///
/// One row per annotated source line: file, line number, committer name,
/// committer email, committer date, author name, author email, author date,
/// joined with `;`. No header row, no trailing separator. An empty match
/// set renders the empty string.
pub fn csv_for_files(git: &Git, pattern: Option<&str>) -> miette::Result<String> {
    let pattern = pattern.unwrap_or(DEFAULT_PATTERN);
    let mut records: Vec<LineRecord> = Vec::new();

    for path in discover_files(Utf8Path::new("."), pattern)? {
        tracing::debug!(%path, "Annotating file");
        let blame = git.blame(&path)?;
        let parsed = parse_blame(&blame)
            .wrap_err_with(|| format!("Failed to parse annotation output for `{path}`"))?;
        prepend_file_records(&mut records, &path, parsed);
    }

    render(&records)
}

/// Insert one file's records ahead of everything accumulated so far.
///
/// Later files therefore sort before earlier ones at the block level, while
/// each file's own lines stay in ascending order.
fn prepend_file_records(records: &mut Vec<LineRecord>, file: &Utf8Path, parsed: Vec<ParsedLine>) {
    let file_records: Vec<LineRecord> = parsed
        .into_iter()
        .map(|line| LineRecord::new(file.to_owned(), line))
        .collect();
    records.splice(0..0, file_records);
}

fn render(records: &[LineRecord]) -> miette::Result<String> {
    let rows = records
        .iter()
        .map(LineRecord::to_row)
        .collect::<miette::Result<Vec<_>>>()?;
    Ok(rows.join("\n"))
}

/// Group records by the committer's rendered calendar date.
///
/// Records with no committer date land under the empty-string key. Within a
/// bucket, records keep their report order.
#[allow(dead_code)]
pub fn by_committer_date(
    records: &[LineRecord],
) -> miette::Result<HashMap<String, Vec<&LineRecord>>> {
    let mut buckets: HashMap<String, Vec<&LineRecord>> = HashMap::new();
    for record in records {
        buckets
            .entry(record.info.committer.date_field()?)
            .or_default()
            .push(record);
    }
    Ok(buckets)
}
