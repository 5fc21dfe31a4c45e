use std::rc::Rc;

use camino::Utf8PathBuf;

use crate::blame::ParsedLine;
use crate::commit_info::CommitInfo;

/// One row of the report: a source line and the commit that last touched it.
#[derive(Debug, Clone)]
pub struct LineRecord {
    pub file: Utf8PathBuf,
    /// 1-based line number within `file`.
    pub line: usize,
    pub info: Rc<CommitInfo>,
}

impl LineRecord {
    pub fn new(file: Utf8PathBuf, parsed: ParsedLine) -> Self {
        Self {
            file,
            line: parsed.line,
            info: parsed.info,
        }
    }

    /// Render the record as one `;`-separated report row.
    pub fn to_row(&self) -> miette::Result<String> {
        Ok([
            self.file.to_string(),
            self.line.to_string(),
            self.info.committer.name_field(),
            self.info.committer.email_field(),
            self.info.committer.date_field()?,
            self.info.author.name_field(),
            self.info.author.email_field(),
            self.info.author.date_field()?,
        ]
        .join(";"))
    }
}
