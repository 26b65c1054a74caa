//! Read-only lookups over a syscall table.
//!
//! Neither numbers nor names are unique, so the multi-valued lookups hand back every
//! matching record in table order and the single-valued ones pick the first.

use std::collections::HashMap;

use itertools::Itertools;
use once_cell::sync::Lazy;

use crate::entry::{SyscallEntry, SyscallNumber};
use crate::listing::{render_listing, ListingError};
use crate::table::SYSCALLS;

static RISCV: Lazy<SyscallTable> = Lazy::new(|| SyscallTable::new(SYSCALLS));

#[derive(Debug)]
pub struct SyscallTable {
    entries: &'static [SyscallEntry],
    by_number: HashMap<SyscallNumber, Vec<usize>>,
    by_name: HashMap<&'static str, Vec<usize>>,
}

impl SyscallTable {
    pub fn new(entries: &'static [SyscallEntry]) -> Self {
        let mut by_number: HashMap<SyscallNumber, Vec<usize>> = HashMap::new();
        let mut by_name: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (i, e) in entries.iter().enumerate() {
            by_number.entry(e.number).or_default().push(i);
            by_name.entry(e.name).or_default().push(i);
        }
        log::debug!(
            "syscall table: {} records, {} distinct numbers, {} distinct names",
            entries.len(),
            by_number.len(),
            by_name.len()
        );
        Self { entries, by_number, by_name }
    }

    /// The built-in RISC-V table, indexed on first use.
    pub fn riscv() -> &'static SyscallTable {
        &RISCV
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &'static [SyscallEntry] {
        self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'static, SyscallEntry> {
        self.entries.iter()
    }

    pub fn by_number(&self, number: SyscallNumber) -> impl Iterator<Item = &'static SyscallEntry> + '_ {
        self.resolve(self.by_number.get(&number))
    }

    pub fn first_by_number(&self, number: SyscallNumber) -> Option<&'static SyscallEntry> {
        self.by_number(number).next()
    }

    pub fn by_name<'a>(&'a self, name: &str) -> impl Iterator<Item = &'static SyscallEntry> + 'a {
        self.resolve(self.by_name.get(name))
    }

    /// First record named `name`. For names repeated in the time64 block this is the
    /// native entry.
    pub fn lookup(&self, name: &str) -> Option<&'static SyscallEntry> {
        self.by_name(name).next()
    }

    pub fn number_of(&self, name: &str) -> Option<SyscallNumber> {
        self.lookup(name).map(|e| e.number)
    }

    pub fn contains_number(&self, number: SyscallNumber) -> bool {
        self.by_number.contains_key(&number)
    }

    /// Numbers carried by more than one record, ascending.
    pub fn duplicate_numbers(&self) -> Vec<SyscallNumber> {
        self.entries.iter().map(|e| e.number).duplicates().sorted().collect()
    }

    pub fn max_number(&self) -> Option<SyscallNumber> {
        self.entries.iter().map(|e| e.number).max()
    }

    /// The whole table in listing format. Fails only if an entry cannot be written as a
    /// listing line, see [`render_listing`].
    pub fn render(&self) -> Result<String, ListingError> {
        render_listing(self.entries)
    }

    fn resolve<'a>(&'a self, indices: Option<&'a Vec<usize>>) -> impl Iterator<Item = &'static SyscallEntry> + 'a {
        let entries = self.entries;
        indices.into_iter().flatten().map(move |&i| &entries[i])
    }
}

impl<'a> IntoIterator for &'a SyscallTable {
    type Item = &'static SyscallEntry;
    type IntoIter = std::slice::Iter<'static, SyscallEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nr;
    use crate::table::SYSCALL_COUNT;
    use pretty_assertions::assert_eq;

    fn names(it: impl Iterator<Item = &'static SyscallEntry>) -> Vec<&'static str> {
        it.map(|e| e.name).collect()
    }

    #[test]
    fn count_matches_listing() {
        let t = SyscallTable::riscv();
        assert_eq!(t.len(), SYSCALL_COUNT);
        assert_eq!(t.len(), 312);
        assert!(!t.is_empty());
    }

    #[test]
    fn spot_checks() {
        let t = SyscallTable::riscv();
        assert_eq!(t.number_of("read"), Some(63));
        assert_eq!(t.number_of("write"), Some(64));
        assert_eq!(t.number_of("io_uring_setup"), Some(425));
        assert_eq!(t.number_of("no_such_call"), None);
        assert_eq!(t.first_by_number(93).map(|e| e.name), Some("exit"));
    }

    #[test]
    fn number_84_appears_twice_in_order() {
        let t = SyscallTable::riscv();
        assert_eq!(names(t.by_number(84)), vec!["sync_file_range2", "sync_file_range"]);
        assert_eq!(t.duplicate_numbers(), vec![84]);
    }

    #[test]
    fn time64_names_resolve_to_native_entry() {
        let t = SyscallTable::riscv();
        let numbers: Vec<_> = t.by_name("clock_gettime").map(|e| e.number).collect();
        assert_eq!(numbers, vec![113, 403]);
        assert_eq!(t.lookup("clock_gettime").map(|e| e.number), Some(nr::SYS_CLOCK_GETTIME));
        assert!(t.by_name("clock_gettime").nth(1).is_some_and(|e| e.is_time64_variant()));
    }

    #[test]
    fn gaps_are_empty() {
        let t = SyscallTable::riscv();
        assert!(!t.contains_number(244));
        assert_eq!(t.by_number(244).count(), 0);
        assert!(t.first_by_number(421).is_none());
        assert!(t.contains_number(0));
        assert_eq!(t.max_number(), Some(440));
    }

    #[test]
    fn copy_paste_prototypes_are_kept() {
        let t = SyscallTable::riscv();
        let proto = |n: &str| t.lookup(n).map(|e| e.prototype).unwrap_or_default();
        assert!(proto("linkat").starts_with("asmlinkage long sys_unlinkat("));
        assert_eq!(proto("mount"), proto("umount"));
        assert!(proto("splice").starts_with("asmlinkage long sys_vmsplice("));
    }

    #[test]
    fn iteration_is_listing_order() {
        let t = SyscallTable::riscv();
        let first: Vec<_> = t.iter().take(3).map(|e| e.number).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!((&*t).into_iter().last().map(|e| e.name), Some("process_madvise"));
    }

    #[test]
    fn custom_table() {
        static SMALL: &[SyscallEntry] = &[
            SyscallEntry::new(7, "a", "long a(void);"),
            SyscallEntry::new(7, "b", "long b(void);"),
            SyscallEntry::new(9, "a", "long a2(void);"),
        ];
        let t = SyscallTable::new(SMALL);
        assert_eq!(names(t.by_number(7)), vec!["a", "b"]);
        assert_eq!(t.by_name("a").map(|e| e.number).collect::<Vec<_>>(), vec![7, 9]);
        assert_eq!(t.duplicate_numbers(), vec![7]);
        assert_eq!(t.render().unwrap(), "SYSCALL(7,\"a\",\"long a(void);\")\nSYSCALL(7,\"b\",\"long b(void);\")\nSYSCALL(9,\"a\",\"long a2(void);\")\n");
    }

    #[test]
    fn empty_table() {
        let t = SyscallTable::new(&[]);
        assert!(t.is_empty());
        assert_eq!(t.max_number(), None);
        assert_eq!(t.render().unwrap(), "");
        assert!(t.duplicate_numbers().is_empty());
    }

    #[test]
    fn render_rejects_quoted_prototype() {
        static BAD: &[SyscallEntry] = &[
            SyscallEntry::new(1, "ok", "long ok(void);"),
            SyscallEntry::new(2, "bad", "long bad(const char *s = \"x\");"),
        ];
        let err = SyscallTable::new(BAD).render().unwrap_err();
        assert_eq!(err, ListingError::Unrenderable { line: 2, field: crate::listing::Field::Prototype });
    }
}
