use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use pretty_assertions::assert_eq;

use rvsys::{
    compare, nr, parse_listing, read_listing_file, render_listing, ListingConfig, Mismatch, SyscallTable, SYSCALLS,
    SYSCALL_COUNT,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn listing_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testcase/riscv64.syscalls")
}

#[test]
fn one_record_per_listing_line() -> Result<()> {
    init_logger();
    let text = fs::read_to_string(listing_path())?;
    assert_eq!(SYSCALLS.len(), text.lines().count());
    assert_eq!(SyscallTable::riscv().len(), 312);
    assert_eq!(SYSCALL_COUNT, SYSCALLS.len());
    Ok(())
}

#[test]
fn listing_matches_table_record_for_record() -> Result<()> {
    init_logger();
    let records = read_listing_file(listing_path(), &ListingConfig::default())?;
    assert_eq!(compare(&records, SYSCALLS), Vec::<Mismatch>::new());
    Ok(())
}

#[test]
fn rendered_table_is_byte_identical_to_listing() -> Result<()> {
    init_logger();
    let text = fs::read_to_string(listing_path())?;
    assert_eq!(SyscallTable::riscv().render()?, text);
    assert_eq!(render_listing(SYSCALLS)?, text);
    Ok(())
}

#[test]
fn rendered_table_parses_back() -> Result<()> {
    init_logger();
    let rendered = SyscallTable::riscv().render()?;
    let records = parse_listing(&rendered, &ListingConfig::default())?;
    assert_eq!(records.len(), SYSCALLS.len());
    for (r, e) in records.iter().zip(SYSCALLS) {
        assert_eq!((r.number, r.name.as_str(), r.prototype.as_str()), (e.number, e.name, e.prototype));
    }
    Ok(())
}

#[test]
fn entry_display_is_the_listing_line() -> Result<()> {
    let text = fs::read_to_string(listing_path())?;
    for (line, e) in text.lines().zip(SYSCALLS) {
        assert_eq!(e.to_string(), line);
    }
    Ok(())
}

#[test]
fn duplicate_number_84() {
    let at_84: Vec<_> = SYSCALLS.iter().filter(|e| e.number == 84).map(|e| e.name).collect();
    assert_eq!(at_84, vec!["sync_file_range2", "sync_file_range"]);
}

#[test]
fn well_known_numbers() {
    let t = SyscallTable::riscv();
    for (name, n) in [
        ("read", nr::SYS_READ),
        ("write", nr::SYS_WRITE),
        ("io_uring_setup", nr::SYS_IO_URING_SETUP),
        ("sync_file_range2", nr::SYS_SYNC_FILE_RANGE2),
        ("sync_file_range", nr::SYS_SYNC_FILE_RANGE),
        ("futex", nr::SYS_FUTEX),
        ("process_madvise", nr::SYS_PROCESS_MADVISE),
    ] {
        assert_eq!(t.number_of(name), Some(n), "{}", name);
    }
    assert_eq!(nr::SYS_READ, 63);
    assert_eq!(nr::SYS_WRITE, 64);
    assert_eq!(nr::SYS_IO_URING_SETUP, 425);
    assert_eq!(nr::SYS_FUTEX, 98);
}

#[test]
fn time64_block() {
    let time64: Vec<_> = SYSCALLS.iter().filter(|e| e.is_time64_variant()).collect();
    assert!(!time64.is_empty());
    let t = SyscallTable::riscv();
    for e in time64 {
        let native = t.lookup(e.name).map(|n| n.number);
        assert!(native.is_some_and(|n| n < e.number), "{} has no native entry", e.name);
    }
}
