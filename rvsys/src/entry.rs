use std::fmt;
use std::ops::RangeInclusive;

use crate::config::DEFAULT_MACRO_NAME;
use crate::listing::{write_record, SyscallRecord};

pub type SyscallNumber = u32;

/// The asm-generic block holding the 64-bit `time_t` variants of older calls.
///
/// Names in this block repeat names from the native part of the table.
pub const TIME64_NUMBERS: RangeInclusive<SyscallNumber> = 403..=423;

/// One record of the syscall table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyscallEntry {
    pub number: SyscallNumber,
    pub name: &'static str,
    /// Kernel-side C declaration, copied verbatim. It may belong to a different call
    /// (`linkat` carries `sys_unlinkat`'s), so it is only ever displayed.
    pub prototype: &'static str,
}

impl SyscallEntry {
    pub const fn new(number: SyscallNumber, name: &'static str, prototype: &'static str) -> Self {
        Self { number, name, prototype }
    }

    #[inline]
    pub fn is_time64_variant(&self) -> bool {
        TIME64_NUMBERS.contains(&self.number)
    }

    pub fn to_owned_record(&self) -> SyscallRecord {
        SyscallRecord {
            number: self.number,
            name: self.name.to_string(),
            prototype: self.prototype.to_string(),
        }
    }
}

/// Renders the entry as a listing line, e.g. `SYSCALL(63,"read","asmlinkage long sys_read(...);")`.
/// Fields are written unchecked; [`crate::render_listing`] rejects ones that would not parse back.
impl fmt::Display for SyscallEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, DEFAULT_MACRO_NAME, self.number, self.name, self.prototype)
    }
}

impl From<&SyscallEntry> for SyscallRecord {
    fn from(entry: &SyscallEntry) -> Self {
        entry.to_owned_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_listing_line() {
        let e = SyscallEntry::new(23, "dup", "asmlinkage long sys_dup(unsigned int fildes);");
        assert_eq!(e.to_string(), r#"SYSCALL(23,"dup","asmlinkage long sys_dup(unsigned int fildes);")"#);
    }

    #[test]
    fn time64_block_bounds() {
        assert!(!SyscallEntry::new(402, "x", "").is_time64_variant());
        assert!(SyscallEntry::new(403, "clock_gettime", "").is_time64_variant());
        assert!(SyscallEntry::new(423, "sched_rr_get_interval", "").is_time64_variant());
        assert!(!SyscallEntry::new(424, "pidfd_send_signal", "").is_time64_variant());
    }

    #[test]
    fn owned_record_keeps_fields() {
        let e = SyscallEntry::new(57, "close", "asmlinkage long sys_close(unsigned int fd);");
        let r = SyscallRecord::from(&e);
        assert_eq!(r.number, 57);
        assert_eq!(r.name, "close");
        assert_eq!(r.prototype, e.prototype);
        assert_eq!(r.to_string(), e.to_string());
    }
}
