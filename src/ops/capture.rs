//! Extracting regex captures from each line into a new leading field
//!
//! Match policy: every capture group of every non-overlapping match of
//! the pattern contributes, in order, joined by `;`. Lines that do not
//! match get the configured missing-value token instead.

use std::io::Write;

use regex::Regex;

use crate::error::{Error, Result};

/// Options for [`capture_lines`]
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    /// Token emitted for lines the pattern does not match
    pub missing_value: String,
    /// Restrict the search to this 1-based field instead of the whole line
    pub field: Option<usize>,
    /// Field delimiter used when `field` is set
    pub delimiter: u8,
    /// Drop lines starting with `#`
    pub skip_comments: bool,
    /// Pass the first line through unprocessed
    pub skip_header: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            missing_value: String::new(),
            field: None,
            delimiter: b'\t',
            skip_comments: false,
            skip_header: false,
        }
    }
}

/// Compile the pattern, requiring at least one capture group
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    let re = Regex::new(pattern)?;
    // captures_len() counts the implicit whole-match group 0
    if re.captures_len() <= 1 {
        return Err(Error::NoCaptureGroups(pattern.to_string()));
    }
    Ok(re)
}

/// Collect all captures from `text`, or `None` when nothing matches
pub fn capture_fields(re: &Regex, text: &str) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    for caps in re.captures_iter(text) {
        for i in 1..caps.len() {
            parts.push(caps.get(i).map(|m| m.as_str()).unwrap_or(""));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(";"))
    }
}

/// Process a whole input: each output line is the captured field, a tab,
/// then the original line
pub fn capture_lines<W: Write>(
    re: &Regex,
    text: &str,
    opts: &CaptureOptions,
    mut out: W,
) -> Result<()> {
    let mut lines = text.lines();
    if opts.skip_header {
        if let Some(header) = lines.next() {
            writeln!(out, "{}", header)?;
        }
    }
    let sep = opts.delimiter as char;
    for line in lines {
        if opts.skip_comments && line.starts_with('#') {
            continue;
        }
        let target = match opts.field {
            Some(idx) => {
                let fields: Vec<&str> = line.split(sep).collect();
                if idx == 0 || fields.len() == 1 || idx > fields.len() {
                    eprintln!(
                        "[warning] field {} not found after splitting the line; searching the full line",
                        idx
                    );
                    line
                } else {
                    fields[idx - 1]
                }
            }
            None => line,
        };
        match capture_fields(re, target) {
            Some(captured) => writeln!(out, "{}\t{}", captured, line)?,
            None => writeln!(out, "{}\t{}", opts.missing_value, line)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pattern: &str, text: &str, opts: &CaptureOptions) -> String {
        let re = compile_pattern(pattern).unwrap();
        let mut buf = Vec::new();
        capture_lines(&re, text, opts, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_capture_scenario() {
        let out = run(
            r"id=(\d+)",
            "user id=42 active\nuser active\n",
            &CaptureOptions::default(),
        );
        assert_eq!(out, "42\tuser id=42 active\n\tuser active\n");
    }

    #[test]
    fn test_missing_value_token_on_no_match() {
        let opts = CaptureOptions {
            missing_value: "NA".to_string(),
            ..Default::default()
        };
        let out = run(r"id=(\d+)", "user active\n", &opts);
        assert_eq!(out, "NA\tuser active\n");
    }

    #[test]
    fn test_multiple_matches_all_contribute() {
        let out = run(
            r"gene_id=(ENSG[^;]+)",
            "gene_id=ENSG1;x gene_id=ENSG2;y\n",
            &CaptureOptions::default(),
        );
        assert!(out.starts_with("ENSG1;ENSG2\t"));
    }

    #[test]
    fn test_multiple_groups_in_one_match() {
        let out = run(r"(\w+)=(\d+)", "a=1 b=2\n", &CaptureOptions::default());
        assert!(out.starts_with("a;1;b;2\t"));
    }

    #[test]
    fn test_field_restriction() {
        let opts = CaptureOptions {
            field: Some(2),
            ..Default::default()
        };
        let out = run(r"(\d+)", "id=9\tval=42\n", &opts);
        assert_eq!(out, "42\tid=9\tval=42\n");
    }

    #[test]
    fn test_skip_comments_and_header() {
        let opts = CaptureOptions {
            skip_comments: true,
            skip_header: true,
            ..Default::default()
        };
        let out = run(r"(\d+)", "name\n# comment\nx1\n", &opts);
        assert_eq!(out, "name\n1\tx1\n");
    }

    #[test]
    fn test_pattern_without_groups_is_rejected() {
        let err = compile_pattern(r"id=\d+").unwrap_err();
        assert!(matches!(err, Error::NoCaptureGroups(_)));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = compile_pattern(r"(unclosed").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern(_)));
    }
}
