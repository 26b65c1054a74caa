use std::fmt;

use crate::config::ListingConfig;
use crate::entry::SyscallNumber;

use super::SyscallRecord;

/// A field of a listing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Number,
    Name,
    Prototype,
}

/// Line numbers are 1-based. Rendering errors use the line the record would have taken.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("line {line}: expected `{macro_name}(` at the start of the record")]
    MissingPrefix { line: usize, macro_name: String },

    #[error("line {line}: record does not end with `)`")]
    MissingSuffix { line: usize },

    #[error("line {line}: invalid syscall number {text:?}")]
    BadNumber { line: usize, text: String },

    #[error("line {line}: {field} is not a double quoted string")]
    Unquoted { line: usize, field: Field },

    #[error("line {line}: unexpected input after the prototype")]
    TrailingInput { line: usize },

    #[error("line {line}: blank or comment line not allowed by the listing config")]
    Unexpected { line: usize },

    #[error("line {line}: {field} contains a double quote or line break")]
    Unrenderable { line: usize, field: Field },

    #[error("formatting listing failed")]
    Fmt(#[from] fmt::Error),
}

impl ListingError {
    pub fn line(&self) -> Option<usize> {
        match self {
            ListingError::MissingPrefix { line, .. }
            | ListingError::MissingSuffix { line }
            | ListingError::BadNumber { line, .. }
            | ListingError::Unquoted { line, .. }
            | ListingError::TrailingInput { line }
            | ListingError::Unexpected { line }
            | ListingError::Unrenderable { line, .. } => Some(*line),
            ListingError::Fmt(_) => None,
        }
    }
}

/// Parse a single record line. Errors report line 1.
pub fn parse_record(line: &str, config: &ListingConfig) -> Result<SyscallRecord, ListingError> {
    parse_line(line, 1, config)
}

/// Parse a whole listing, one record per line, keeping the listing order.
pub fn parse_listing(text: &str, config: &ListingConfig) -> Result<Vec<SyscallRecord>, ListingError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let trimmed = raw.trim();
        let is_blank = trimmed.is_empty();
        let is_comment = trimmed.starts_with("//");

        if is_blank || is_comment {
            if (is_blank && config.allow_blank_lines) || (is_comment && config.allow_comments) {
                skipped += 1;
                continue;
            }
            return Err(ListingError::Unexpected { line });
        }

        records.push(parse_line(raw, line, config)?);
    }

    log::debug!("parsed {} listing records ({} lines skipped)", records.len(), skipped);
    Ok(records)
}

fn parse_line(raw: &str, line: usize, config: &ListingConfig) -> Result<SyscallRecord, ListingError> {
    let text = raw.strip_suffix('\r').unwrap_or(raw);

    let body = text
        .strip_prefix(config.macro_name.as_str())
        .and_then(|rest| rest.strip_prefix('('))
        .ok_or_else(|| ListingError::MissingPrefix { line, macro_name: config.macro_name.clone() })?;
    let body = body.strip_suffix(')').ok_or(ListingError::MissingSuffix { line })?;

    let (number_text, rest) = body.split_once(',').unwrap_or((body, ""));
    let number = parse_number(number_text).ok_or_else(|| ListingError::BadNumber { line, text: number_text.to_string() })?;

    let (name, rest) = take_quoted(rest).ok_or(ListingError::Unquoted { line, field: Field::Name })?;
    let rest = rest.strip_prefix(',').ok_or(ListingError::Unquoted { line, field: Field::Prototype })?;
    let (prototype, rest) = take_quoted(rest).ok_or(ListingError::Unquoted { line, field: Field::Prototype })?;
    if !rest.is_empty() {
        return Err(ListingError::TrailingInput { line });
    }

    Ok(SyscallRecord { number, name: name.to_string(), prototype: prototype.to_string() })
}

/// Plain decimal only: no sign, no whitespace, no radix prefix.
fn parse_number(text: &str) -> Option<SyscallNumber> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Split `"value"rest` into `(value, rest)`.
fn take_quoted(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('"')?;
    let end = inner.find('"')?;
    Some((&inner[..end], &inner[end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListingConfigBuilder;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    fn strict() -> ListingConfig {
        ListingConfig::default()
    }

    #[test]
    fn parses_record_with_commas_in_prototype() {
        let r = parse_record(
            r#"SYSCALL(63,"read","asmlinkage long sys_read(unsigned int fd, char __user *buf, size_t count);")"#,
            &strict(),
        )
        .unwrap();
        assert_eq!(r.number, 63);
        assert_eq!(r.name, "read");
        assert_eq!(r.prototype, "asmlinkage long sys_read(unsigned int fd, char __user *buf, size_t count);");
    }

    #[test]
    fn tolerates_crlf() {
        let r = parse_record("SYSCALL(81,\"sync\",\"asmlinkage long sys_sync(void);\")\r", &strict()).unwrap();
        assert_eq!(r.name, "sync");
        assert_eq!(r.prototype, "asmlinkage long sys_sync(void);");
    }

    #[test]
    fn empty_fields_are_kept() {
        let r = parse_record(r#"SYSCALL(0,"","")"#, &strict()).unwrap();
        assert_eq!(r, SyscallRecord { number: 0, name: String::new(), prototype: String::new() });
    }

    #[test]
    fn rejects_wrong_prefix() {
        let err = parse_record(r#"SYSCALLS(1,"a","b")"#, &strict()).unwrap_err();
        assert_eq!(err, ListingError::MissingPrefix { line: 1, macro_name: "SYSCALL".into() });
        let err = parse_record(r#" SYSCALL(1,"a","b")"#, &strict()).unwrap_err();
        assert!(matches!(err, ListingError::MissingPrefix { .. }));
    }

    #[test]
    fn custom_macro_name() {
        let config = ListingConfigBuilder::new().with_macro_name("__SYSCALL").get();
        let r = parse_record(r#"__SYSCALL(93,"exit","asmlinkage long sys_exit(int error_code);")"#, &config).unwrap();
        assert_eq!(r.number, 93);
        assert!(parse_record(r#"SYSCALL(93,"exit","x")"#, &config).is_err());
    }

    #[test]
    fn rejects_missing_suffix() {
        let err = parse_record(r#"SYSCALL(1,"a","b");"#, &strict()).unwrap_err();
        assert_eq!(err, ListingError::MissingSuffix { line: 1 });
    }

    #[test]
    fn rejects_bad_numbers() {
        for text in ["-1", "+1", " 1", "0x10", "", "99999999999"] {
            let line = format!(r#"SYSCALL({},"a","b")"#, text);
            let err = parse_record(&line, &strict()).unwrap_err();
            assert_eq!(err, ListingError::BadNumber { line: 1, text: text.to_string() });
        }
    }

    #[test]
    fn rejects_unquoted_fields() {
        let err = parse_record(r#"SYSCALL(1,a,"b")"#, &strict()).unwrap_err();
        assert_eq!(err, ListingError::Unquoted { line: 1, field: Field::Name });

        let err = parse_record(r#"SYSCALL(1)"#, &strict()).unwrap_err();
        assert_eq!(err, ListingError::Unquoted { line: 1, field: Field::Name });

        let err = parse_record(r#"SYSCALL(1,"a")"#, &strict()).unwrap_err();
        assert_eq!(err, ListingError::Unquoted { line: 1, field: Field::Prototype });

        let err = parse_record(r#"SYSCALL(1,"a","b)"#, &strict()).unwrap_err();
        assert_eq!(err, ListingError::Unquoted { line: 1, field: Field::Prototype });
    }

    #[test]
    fn rejects_trailing_input() {
        let err = parse_record(r#"SYSCALL(1,"a","b",2)"#, &strict()).unwrap_err();
        assert_eq!(err, ListingError::TrailingInput { line: 1 });
    }

    #[test]
    fn listing_reports_line_numbers() {
        let text = "SYSCALL(0,\"a\",\"x\")\nSYSCALL(1,\"b\",\"y\")\nSYSCALL(two,\"c\",\"z\")\n";
        let err = parse_listing(text, &strict()).unwrap_err();
        assert_eq!(err.line(), Some(3));
        assert_eq!(err.to_string(), "line 3: invalid syscall number \"two\"");
    }

    #[test]
    fn blank_and_comment_lines_follow_config() {
        let text = "// riscv\nSYSCALL(0,\"a\",\"x\")\n\nSYSCALL(1,\"b\",\"y\")\n";

        assert_eq!(parse_listing(text, &strict()).unwrap_err(), ListingError::Unexpected { line: 1 });

        let comments_only = ListingConfigBuilder::new().with_comments(true).get();
        assert_eq!(parse_listing(text, &comments_only).unwrap_err(), ListingError::Unexpected { line: 3 });

        let records = parse_listing(text, &ListingConfig::lenient()).unwrap();
        assert_eq!(records.iter().map(|r| r.number).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn empty_listing_is_empty() {
        assert!(parse_listing("", &strict()).unwrap().is_empty());
    }

    #[test]
    fn field_display_names() {
        let names: Vec<String> = Field::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, vec!["number", "name", "prototype"]);
    }
}
