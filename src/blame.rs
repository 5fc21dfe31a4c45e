use std::collections::HashMap;
use std::rc::Rc;

use miette::miette;

use crate::commit_hash::CommitHash;
use crate::commit_info::CommitInfo;

/// One annotated source line, before it is attached to a file.
#[derive(Debug, Clone)]
pub struct ParsedLine {
    /// 1-based position within the file.
    pub line: usize,
    /// Metadata of the commit that last touched the line, shared by every
    /// line the same commit touched.
    pub info: Rc<CommitInfo>,
}

/// Parse one file's `git blame --porcelain` output into per-line records.
///
/// Each annotation line starts with the commit hash that last touched it.
/// The first occurrence of a hash is followed by its metadata block; later
/// occurrences are followed directly by the line's content. The two cases
/// are distinguished purely by hash novelty. Content lines are dropped;
/// only the commit metadata is reported.
pub fn parse_blame(blame: &str) -> miette::Result<Vec<ParsedLine>> {
    let lines: Vec<&str> = blame.split('\n').collect();
    let mut cursor = 0;
    let mut parsed: Vec<ParsedLine> = Vec::new();
    let mut info_by_hash: HashMap<CommitHash, Rc<CommitInfo>> = HashMap::new();

    // The final line terminator leaves one trailing empty line behind.
    while lines.len() - cursor > 1 {
        let header = lines[cursor];
        cursor += 1;

        let hash = header
            .split(' ')
            .next()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                miette!("Annotation line {cursor} has no commit identifier: {header:?}")
            })?;
        let hash = CommitHash::new(hash.to_owned());

        let info = match info_by_hash.get(&hash) {
            Some(info) => Rc::clone(info),
            None => {
                let (info, rest) = CommitInfo::decode(&lines, cursor);
                cursor = rest;
                let info = Rc::new(info);
                info_by_hash.insert(hash, Rc::clone(&info));
                info
            }
        };

        parsed.push(ParsedLine {
            line: parsed.len() + 1,
            info,
        });

        // The line's source text is not part of the report.
        if cursor < lines.len() {
            cursor += 1;
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn porcelain(lines: &[&str]) -> String {
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn block(author: &str, committer: &str, seconds: i64) -> Vec<String> {
        vec![
            format!("author {author}"),
            format!("author-mail <{author}@example.com>"),
            format!("author-time {seconds}"),
            "author-tz +0000".to_owned(),
            format!("committer {committer}"),
            format!("committer-mail <{committer}@example.com>"),
            format!("committer-time {seconds}"),
            "committer-tz +0000".to_owned(),
            "summary A change".to_owned(),
            "filename demo.rs".to_owned(),
        ]
    }

    #[test]
    fn test_parse_single_commit() {
        let mut lines = vec!["aaaa1111 1 1 3".to_owned()];
        lines.extend(block("ada", "charles", 1622520000));
        lines.extend([
            "\tlet x = 1;".to_owned(),
            "aaaa1111 2 2".to_owned(),
            "\tlet y = 2;".to_owned(),
            "aaaa1111 3 3".to_owned(),
            "\tlet z = 3;".to_owned(),
        ]);
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

        let parsed = parse_blame(&porcelain(&refs)).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(
            parsed.iter().map(|line| line.line).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(parsed[0].info.author.name.as_deref(), Some("ada"));
        // One decode, shared by every line.
        assert!(Rc::ptr_eq(&parsed[0].info, &parsed[1].info));
        assert!(Rc::ptr_eq(&parsed[1].info, &parsed[2].info));
    }

    #[test]
    fn test_parse_interleaved_commits() {
        let mut lines = vec!["aaaa1111 1 1 1".to_owned()];
        lines.extend(block("ada", "ada", 1622520000));
        lines.push("\tfirst".to_owned());
        lines.push("bbbb2222 1 2 1".to_owned());
        lines.extend(block("grace", "grace", 1622606400));
        lines.push("\tsecond".to_owned());
        lines.push("aaaa1111 2 3".to_owned());
        lines.push("\tthird".to_owned());
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();

        let parsed = parse_blame(&porcelain(&refs)).unwrap();

        assert_eq!(parsed.len(), 3);
        assert_eq!(
            parsed.iter().map(|line| line.line).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        // A repeated hash reuses the decoded info instead of re-decoding.
        assert!(Rc::ptr_eq(&parsed[0].info, &parsed[2].info));
        assert!(!Rc::ptr_eq(&parsed[0].info, &parsed[1].info));
        assert_eq!(parsed[1].info.author.name.as_deref(), Some("grace"));
    }

    #[test]
    fn test_parse_empty_output() {
        assert_eq!(parse_blame("").unwrap().len(), 0);
    }

    #[test]
    fn test_parse_header_without_identifier() {
        let result = parse_blame(" 1 1 1\n\tcontent\n");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("no commit identifier"));
    }
}
