//! The `SYSCALL(number,"name","prototype")` listing format.
//!
//! One record per line, no spaces around the separators, name and prototype double
//! quoted. This is the format the built-in table was transcribed from, so rendering
//! the table and reading the source listing back must agree byte for byte.

use std::{fmt, fmt::Write as _, fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{ListingConfig, DEFAULT_MACRO_NAME};
use crate::entry::{SyscallEntry, SyscallNumber};

mod compare;
mod parser;

pub use compare::{compare, Mismatch};
pub use parser::{parse_listing, parse_record, Field, ListingError};

/// Read access to the three fields of a record, shared by the static table entries and
/// records parsed at runtime.
pub trait Record {
    fn number(&self) -> SyscallNumber;
    fn name(&self) -> &str;
    fn prototype(&self) -> &str;
}

impl Record for SyscallEntry {
    fn number(&self) -> SyscallNumber {
        self.number
    }

    fn name(&self) -> &str {
        self.name
    }

    fn prototype(&self) -> &str {
        self.prototype
    }
}

/// An owned listing record, as produced by [`parse_record`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SyscallRecord {
    pub number: SyscallNumber,
    pub name: String,
    pub prototype: String,
}

impl Record for SyscallRecord {
    fn number(&self) -> SyscallNumber {
        self.number
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn prototype(&self) -> &str {
        &self.prototype
    }
}

/// Writes the record line as is. Use [`render_listing`] when the text has to parse back.
impl fmt::Display for SyscallRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, DEFAULT_MACRO_NAME, self.number, &self.name, &self.prototype)
    }
}

pub(crate) fn write_record(
    f: &mut impl fmt::Write,
    macro_name: &str,
    number: SyscallNumber,
    name: &str,
    prototype: &str,
) -> fmt::Result {
    write!(f, "{}({},\"{}\",\"{}\")", macro_name, number, name, prototype)
}

/// Render records with the default `SYSCALL` macro name, one `\n`-terminated line each.
///
/// Fails with [`ListingError::Unrenderable`] when a name or prototype holds a `"` or a
/// line break, since such a line would not parse back into the same record.
pub fn render_listing<'a, R, I>(records: I) -> Result<String, ListingError>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    render_listing_with(records, &ListingConfig::default())
}

/// Same as [`render_listing`], with the macro name taken from `config`.
pub fn render_listing_with<'a, R, I>(records: I, config: &ListingConfig) -> Result<String, ListingError>
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut out = String::new();
    for (i, r) in records.into_iter().enumerate() {
        let line = i + 1;
        check_field(r.name(), line, Field::Name)?;
        check_field(r.prototype(), line, Field::Prototype)?;
        // fmt::Write for String never returns an error.
        write_record(&mut out, &config.macro_name, r.number(), r.name(), r.prototype())?;
        writeln!(out)?;
    }
    Ok(out)
}

fn check_field(value: &str, line: usize, field: Field) -> Result<(), ListingError> {
    if value.contains(['"', '\n', '\r']) {
        return Err(ListingError::Unrenderable { line, field });
    }
    Ok(())
}

/// Read and parse a listing file.
pub fn read_listing_file(path: impl AsRef<Path>, config: &ListingConfig) -> Result<Vec<SyscallRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read listing {:?}", path))?;
    let records = parse_listing(&text, config).with_context(|| format!("parse listing {:?}", path))?;
    log::debug!("{:?}: {} records", path, records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListingConfigBuilder;

    fn sample() -> Vec<SyscallRecord> {
        vec![
            SyscallRecord {
                number: 84,
                name: "sync_file_range2".into(),
                prototype: "asmlinkage long sys_sync_file_range2(int fd, unsigned int flags, loff_t offset, loff_t nbytes);".into(),
            },
            SyscallRecord {
                number: 84,
                name: "sync_file_range".into(),
                prototype: "asmlinkage long sys_sync_file_range(int fd, loff_t offset, loff_t nbytes, unsigned int flags);".into(),
            },
        ]
    }

    #[test]
    fn render_two_records() {
        insta::assert_snapshot!(render_listing(&sample()).unwrap(), @r###"
        SYSCALL(84,"sync_file_range2","asmlinkage long sys_sync_file_range2(int fd, unsigned int flags, loff_t offset, loff_t nbytes);")
        SYSCALL(84,"sync_file_range","asmlinkage long sys_sync_file_range(int fd, loff_t offset, loff_t nbytes, unsigned int flags);")
        "###);
    }

    #[test]
    fn render_with_custom_macro() {
        let config = ListingConfigBuilder::new().with_macro_name("__SC").get();
        let out = render_listing_with(&sample()[..1], &config).unwrap();
        assert!(out.starts_with("__SC(84,\"sync_file_range2\","));
        assert!(out.ends_with(")\n"));
    }

    #[test]
    fn render_empty() {
        let none: &[SyscallRecord] = &[];
        assert_eq!(render_listing(none).unwrap(), "");
    }

    #[test]
    fn render_then_parse_keeps_records() {
        let records = sample();
        let text = render_listing(&records).unwrap();
        assert_eq!(parse_listing(&text, &ListingConfig::default()).unwrap(), records);
    }

    #[test]
    fn quote_or_line_break_cannot_be_rendered() {
        let mut records = sample();
        records[1].name = "a\"b".into();
        assert_eq!(render_listing(&records), Err(ListingError::Unrenderable { line: 2, field: Field::Name }));

        records[1].name = "a\nb".into();
        assert_eq!(render_listing(&records), Err(ListingError::Unrenderable { line: 2, field: Field::Name }));

        let mut records = sample();
        records[0].prototype = "long f(void);\r\n".into();
        assert_eq!(render_listing(&records), Err(ListingError::Unrenderable { line: 1, field: Field::Prototype }));
    }

    #[test]
    fn rendered_records_always_parse_back() {
        let mut records = sample();
        records.push(SyscallRecord { number: 0, name: String::new(), prototype: "long f(int a, char __user *b);".into() });
        let text = render_listing(&records).unwrap();
        assert_eq!(parse_listing(&text, &ListingConfig::default()).unwrap(), records);
    }

    #[test]
    fn record_json_roundtrip() {
        let records = sample();
        let json = serde_json::to_string(&records).unwrap();
        assert!(json.contains(r#""name":"sync_file_range2""#));
        let back: Vec<SyscallRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);

        let one: SyscallRecord =
            serde_json::from_str(r#"{ "number": 63, "name": "read", "prototype": "asmlinkage long sys_read(void);" }"#).unwrap();
        assert_eq!(one.number, 63);
        assert_eq!(one.to_string(), r#"SYSCALL(63,"read","asmlinkage long sys_read(void);")"#);
    }

    #[test]
    fn read_missing_file_has_context() {
        let err = read_listing_file("/nonexistent/listing", &ListingConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).starts_with("read listing"));
    }
}
