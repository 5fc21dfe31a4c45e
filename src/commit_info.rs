use std::collections::HashMap;

use time::OffsetDateTime;

use crate::person_info::PersonInfo;

/// The metadata keys of one annotation block, in the relative order
/// `git blame --porcelain` emits them.
const BLOCK_KEYS: [&str; 11] = [
    "author",
    "author-mail",
    "author-time",
    "author-tz",
    "committer",
    "committer-mail",
    "committer-time",
    "committer-tz",
    "summary",
    "previous",
    "filename",
];

/// Identity and timing of one commit, decoded from the metadata block that
/// follows the commit's first annotation line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub author: PersonInfo,
    pub committer: PersonInfo,
}

impl CommitInfo {
    /// Decode one metadata block from `lines`, starting at `cursor`.
    ///
    /// Each expected key is matched against the head of the remaining lines.
    /// Keys may be omitted entirely, but when present appear in the fixed
    /// relative order, so a mismatch skips the key and the same head line is
    /// tried against the next one. The timezone, summary, previous, and
    /// filename lines are consumed to keep the stream aligned but are not
    /// surfaced.
    ///
    /// Returns the decoded info and the cursor past the consumed lines.
    pub fn decode(lines: &[&str], cursor: usize) -> (Self, usize) {
        let mut cursor = cursor;
        let mut values: HashMap<&str, &str> = HashMap::new();

        for key in BLOCK_KEYS {
            let Some(line) = lines.get(cursor) else {
                break;
            };
            if let Some(value) = line.strip_prefix(key).and_then(|rest| rest.strip_prefix(' ')) {
                values.insert(key, value);
                cursor += 1;
            }
        }

        let info = Self {
            author: person(&values, "author", "author-mail", "author-time"),
            committer: person(&values, "committer", "committer-mail", "committer-time"),
        };
        (info, cursor)
    }
}

fn person(
    values: &HashMap<&str, &str>,
    name_key: &str,
    mail_key: &str,
    time_key: &str,
) -> PersonInfo {
    PersonInfo {
        name: values.get(name_key).map(|value| (*value).to_owned()),
        email: values.get(mail_key).map(|value| (*value).to_owned()),
        date: values.get(time_key).and_then(|value| epoch_seconds(value)),
    }
}

/// Seconds since the Unix epoch, as an absolute instant.
///
/// Unparseable values degrade to an absent date, like a missing key.
fn epoch_seconds(value: &str) -> Option<OffsetDateTime> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|seconds| OffsetDateTime::from_unix_timestamp(seconds).ok())
}
