//! rvsys
//!
//! The RISC-V Linux system call table: numbers, user-space names and the kernel-side
//! C prototypes, transcribed record for record from a `SYSCALL(n,"name","proto")` listing.
//!
//! The data is kept exactly as listed. Numbers and names repeat (84 is used twice, the
//! time64 block reuses older names) and some prototypes belong to a different syscall.
//! Treat [`SyscallEntry::prototype`] as a display string, never as a parsed signature.

#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod entry;
pub mod index;
pub mod listing;
pub mod nr;
pub mod table;

pub use config::{ListingConfig, ListingConfigBuilder};
pub use entry::{SyscallEntry, SyscallNumber, TIME64_NUMBERS};
pub use index::SyscallTable;
pub use listing::{
    compare, parse_listing, parse_record, read_listing_file, render_listing, render_listing_with, Field,
    ListingError, Mismatch, Record, SyscallRecord,
};
pub use table::{SYSCALLS, SYSCALL_COUNT};
