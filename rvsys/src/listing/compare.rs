use itertools::{EitherOrBoth, Itertools};

use super::{Field, Record};

/// One difference between a listing and a reference table, by record position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// The listing ends before the table; `index` is the first record it lacks.
    Missing { index: usize },
    /// The listing has a record past the end of the table.
    Extra { index: usize },
    /// Both have a record at `index`, but `field` differs.
    Differs { index: usize, field: Field },
}

/// Compare `listing` against `table` position by position.
///
/// An empty result means both hold byte-identical `(number, name, prototype)` triples in
/// the same order. Duplicates are compared like any other record, never merged.
pub fn compare<A: Record, B: Record>(listing: &[A], table: &[B]) -> Vec<Mismatch> {
    let mut out = Vec::new();

    for (index, pair) in listing.iter().zip_longest(table.iter()).enumerate() {
        match pair {
            EitherOrBoth::Both(l, t) => {
                if l.number() != t.number() {
                    out.push(Mismatch::Differs { index, field: Field::Number });
                }
                if l.name() != t.name() {
                    out.push(Mismatch::Differs { index, field: Field::Name });
                }
                if l.prototype() != t.prototype() {
                    out.push(Mismatch::Differs { index, field: Field::Prototype });
                }
            }
            EitherOrBoth::Left(_) => out.push(Mismatch::Extra { index }),
            EitherOrBoth::Right(_) => out.push(Mismatch::Missing { index }),
        }
    }

    if !out.is_empty() {
        log::warn!("listing differs from table in {} place(s), first: {:?}", out.len(), out[0]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::SyscallEntry;
    use crate::listing::SyscallRecord;
    use pretty_assertions::assert_eq;

    const TABLE: &[SyscallEntry] = &[
        SyscallEntry::new(39, "umount", "asmlinkage long sys_umount(char __user *name, int flags);"),
        SyscallEntry::new(40, "mount", "asmlinkage long sys_umount(char __user *name, int flags);"),
    ];

    fn owned() -> Vec<SyscallRecord> {
        TABLE.iter().map(SyscallRecord::from).collect()
    }

    #[test]
    fn identical_has_no_mismatch() {
        assert!(compare(&owned(), TABLE).is_empty());
    }

    #[test]
    fn fixing_a_prototype_is_a_mismatch() {
        let mut listing = owned();
        listing[1].prototype =
            "asmlinkage long sys_mount(char __user *dev_name, char __user *dir_name, char __user *type, unsigned long flags, void __user *data);"
                .into();
        assert_eq!(compare(&listing, TABLE), vec![Mismatch::Differs { index: 1, field: Field::Prototype }]);
    }

    #[test]
    fn every_differing_field_is_reported() {
        let mut listing = owned();
        listing[0].number = 1;
        listing[0].name = "x".into();
        assert_eq!(
            compare(&listing, TABLE),
            vec![
                Mismatch::Differs { index: 0, field: Field::Number },
                Mismatch::Differs { index: 0, field: Field::Name },
            ]
        );
    }

    #[test]
    fn length_differences() {
        let all = owned();
        assert_eq!(compare(&all[..1], TABLE), vec![Mismatch::Missing { index: 1 }]);

        let mut long = owned();
        long.push(long[0].clone());
        assert_eq!(compare(&long, TABLE), vec![Mismatch::Extra { index: 2 }]);
    }

    #[test]
    fn order_matters() {
        let mut swapped = owned();
        swapped.swap(0, 1);
        let m = compare(&swapped, TABLE);
        assert!(m.contains(&Mismatch::Differs { index: 0, field: Field::Number }));
        assert!(m.contains(&Mismatch::Differs { index: 1, field: Field::Name }));
    }
}
