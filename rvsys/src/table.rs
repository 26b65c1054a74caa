// AUTO-GENERATED from testcase/riscv64.syscalls; do not edit by hand.
// Record order and contents follow the listing exactly, including repeated numbers and names.

use crate::entry::SyscallEntry;

/// Number of records in [`SYSCALLS`].
pub const SYSCALL_COUNT: usize = SYSCALLS.len();

/// Every RISC-V system call record, in listing order.
pub const SYSCALLS: &[SyscallEntry] = &[
    SyscallEntry { number: 0, name: "io_setup", prototype: "asmlinkage long sys_io_setup(unsigned nr_reqs, aio_context_t __user *ctx);" },
    SyscallEntry { number: 1, name: "io_destroy", prototype: "asmlinkage long sys_io_destroy(aio_context_t ctx);" },
    SyscallEntry { number: 2, name: "io_submit", prototype: "asmlinkage long sys_io_submit(aio_context_t, long, struct iocb __user * __user *);" },
    SyscallEntry { number: 3, name: "io_cancel", prototype: "asmlinkage long sys_io_cancel(aio_context_t ctx_id, struct iocb __user *iocb, struct io_event __user *result);" },
    SyscallEntry { number: 4, name: "io_getevents", prototype: "asmlinkage long sys_io_getevents(aio_context_t ctx_id, long min_nr, long nr, struct io_event __user *events, struct __kernel_timespec __user *timeout);" },
    SyscallEntry { number: 5, name: "setxattr", prototype: "asmlinkage long sys_setxattr(const char __user *path, const char __user *name, const void __user *value, size_t size, int flags);" },
    SyscallEntry { number: 6, name: "lsetxattr", prototype: "asmlinkage long sys_lsetxattr(const char __user *path, const char __user *name, const void __user *value, size_t size, int flags);" },
    SyscallEntry { number: 7, name: "fsetxattr", prototype: "asmlinkage long sys_fsetxattr(int fd, const char __user *name, const void __user *value, size_t size, int flags);" },
    SyscallEntry { number: 8, name: "getxattr", prototype: "asmlinkage long sys_getxattr(const char __user *path, const char __user *name, void __user *value, size_t size);" },
    SyscallEntry { number: 9, name: "lgetxattr", prototype: "asmlinkage long sys_lgetxattr(const char __user *path, const char __user *name, void __user *value, size_t size);" },
    SyscallEntry { number: 10, name: "fgetxattr", prototype: "asmlinkage long sys_fgetxattr(int fd, const char __user *name, void __user *value, size_t size);" },
    SyscallEntry { number: 11, name: "listxattr", prototype: "asmlinkage long sys_listxattr(const char __user *path, char __user *list, size_t size);" },
    SyscallEntry { number: 12, name: "llistxattr", prototype: "asmlinkage long sys_llistxattr(const char __user *path, char __user *list, size_t size);" },
    SyscallEntry { number: 13, name: "flistxattr", prototype: "asmlinkage long sys_flistxattr(int fd, char __user *list, size_t size);" },
    SyscallEntry { number: 14, name: "removexattr", prototype: "asmlinkage long sys_removexattr(const char __user *path, const char __user *name);" },
    SyscallEntry { number: 15, name: "lremovexattr", prototype: "asmlinkage long sys_lremovexattr(const char __user *path, const char __user *name);" },
    SyscallEntry { number: 16, name: "fremovexattr", prototype: "asmlinkage long sys_fremovexattr(int fd, const char __user *name);" },
    SyscallEntry { number: 17, name: "getcwd", prototype: "asmlinkage long sys_getcwd(char __user *buf, unsigned long size);" },
    SyscallEntry { number: 18, name: "lookup_dcookie", prototype: "asmlinkage long sys_lookup_dcookie(u64 cookie64, char __user *buf, size_t len);" },
    SyscallEntry { number: 19, name: "eventfd2", prototype: "asmlinkage long sys_eventfd2(unsigned int count, int flags);" },
    SyscallEntry { number: 20, name: "epoll_create1", prototype: "asmlinkage long sys_epoll_create1(int flags);" },
    SyscallEntry { number: 21, name: "epoll_ctl", prototype: "asmlinkage long sys_epoll_ctl(int epfd, int op, int fd, struct epoll_event __user *event);" },
    SyscallEntry { number: 22, name: "epoll_pwait", prototype: "asmlinkage long sys_epoll_pwait(int epfd, struct epoll_event __user *events, int maxevents, int timeout, const sigset_t __user *sigmask, size_t sigsetsize);" },
    SyscallEntry { number: 23, name: "dup", prototype: "asmlinkage long sys_dup(unsigned int fildes);" },
    SyscallEntry { number: 24, name: "dup3", prototype: "asmlinkage long sys_dup3(unsigned int oldfd, unsigned int newfd, int flags);" },
    SyscallEntry { number: 25, name: "fcntl64", prototype: "asmlinkage long sys_fcntl64(unsigned int fd, unsigned int cmd, unsigned long arg);" },
    SyscallEntry { number: 26, name: "inotify_init1", prototype: "asmlinkage long sys_inotify_init1(int flags);" },
    SyscallEntry { number: 27, name: "inotify_add_watch", prototype: "asmlinkage long sys_inotify_add_watch(int fd, const char __user *path, u32 mask);" },
    SyscallEntry { number: 28, name: "inotify_rm_watch", prototype: "asmlinkage long sys_inotify_rm_watch(int fd, __s32 wd);" },
    SyscallEntry { number: 29, name: "ioctl", prototype: "asmlinkage long sys_ioctl(unsigned int fd, unsigned int cmd, unsigned long arg);" },
    SyscallEntry { number: 30, name: "ioprio_set", prototype: "asmlinkage long sys_ioprio_set(int which, int who, int ioprio);" },
    SyscallEntry { number: 31, name: "ioprio_get", prototype: "asmlinkage long sys_ioprio_get(int which, int who);" },
    SyscallEntry { number: 32, name: "flock", prototype: "asmlinkage long sys_flock(unsigned int fd, unsigned int cmd);" },
    SyscallEntry { number: 33, name: "mknodat", prototype: "asmlinkage long sys_mknodat(int dfd, const char __user * filename, umode_t mode, unsigned dev);" },
    SyscallEntry { number: 34, name: "mkdirat", prototype: "asmlinkage long sys_mkdirat(int dfd, const char __user * pathname, umode_t mode);" },
    SyscallEntry { number: 35, name: "unlinkat", prototype: "asmlinkage long sys_unlinkat(int dfd, const char __user * pathname, int flag);" },
    SyscallEntry { number: 36, name: "symlinkat", prototype: "asmlinkage long sys_symlinkat(const char __user * oldname, int newdfd, const char __user * newname);" },
    SyscallEntry { number: 37, name: "linkat", prototype: "asmlinkage long sys_unlinkat(int dfd, const char __user * pathname, int flag);" },
    SyscallEntry { number: 38, name: "renameat", prototype: "asmlinkage long sys_renameat(int olddfd, const char __user * oldname, int newdfd, const char __user * newname);" },
    SyscallEntry { number: 39, name: "umount", prototype: "asmlinkage long sys_umount(char __user *name, int flags);" },
    SyscallEntry { number: 40, name: "mount", prototype: "asmlinkage long sys_umount(char __user *name, int flags);" },
    SyscallEntry { number: 41, name: "pivot_root", prototype: "asmlinkage long sys_pivot_root(const char __user *new_root, const char __user *put_old);" },
    SyscallEntry { number: 42, name: "ni_syscall", prototype: "asmlinkage long sys_ni_syscall(void);" },
    SyscallEntry { number: 43, name: "statfs64", prototype: "asmlinkage long sys_statfs64(const char __user *path, size_t sz, struct statfs64 __user *buf);" },
    SyscallEntry { number: 44, name: "fstatfs64", prototype: "asmlinkage long sys_fstatfs64(unsigned int fd, size_t sz, struct statfs64 __user *buf);" },
    SyscallEntry { number: 45, name: "truncate64", prototype: "asmlinkage long sys_truncate64(const char __user *path, loff_t length);" },
    SyscallEntry { number: 46, name: "ftruncate64", prototype: "asmlinkage long sys_ftruncate64(unsigned int fd, loff_t length);" },
    SyscallEntry { number: 47, name: "fallocate", prototype: "asmlinkage long sys_fallocate(int fd, int mode, loff_t offset, loff_t len);" },
    SyscallEntry { number: 48, name: "faccessat", prototype: "asmlinkage long sys_faccessat(int dfd, const char __user *filename, int mode);" },
    SyscallEntry { number: 49, name: "chdir", prototype: "asmlinkage long sys_chdir(const char __user *filename);" },
    SyscallEntry { number: 50, name: "fchdir", prototype: "asmlinkage long sys_fchdir(unsigned int fd);" },
    SyscallEntry { number: 51, name: "chroot", prototype: "asmlinkage long sys_chroot(const char __user *filename);" },
    SyscallEntry { number: 52, name: "fchmod", prototype: "asmlinkage long sys_fchmod(unsigned int fd, umode_t mode);" },
    SyscallEntry { number: 53, name: "fchmodat", prototype: "asmlinkage long sys_fchmodat(int dfd, const char __user * filename, umode_t mode);" },
    SyscallEntry { number: 54, name: "fchownat", prototype: "asmlinkage long sys_fchownat(int dfd, const char __user *filename, uid_t user, gid_t group, int flag);" },
    SyscallEntry { number: 55, name: "fchown", prototype: "asmlinkage long sys_fchown(unsigned int fd, uid_t user, gid_t group);" },
    SyscallEntry { number: 56, name: "openat", prototype: "asmlinkage long sys_openat(int dfd, const char __user *filename, int flags, umode_t mode);" },
    SyscallEntry { number: 57, name: "close", prototype: "asmlinkage long sys_close(unsigned int fd);" },
    SyscallEntry { number: 58, name: "vhangup", prototype: "asmlinkage long sys_vhangup(void);" },
    SyscallEntry { number: 59, name: "pipe2", prototype: "asmlinkage long sys_pipe2(int __user *fildes, int flags);" },
    SyscallEntry { number: 60, name: "quotactl", prototype: "asmlinkage long sys_quotactl(unsigned int cmd, const char __user *special, qid_t id, void __user *addr);" },
    SyscallEntry { number: 61, name: "getdents64", prototype: "asmlinkage long sys_getdents64(unsigned int fd, struct linux_dirent64 __user *dirent, unsigned int count);" },
    SyscallEntry { number: 62, name: "lseek", prototype: "asmlinkage long sys_llseek(unsigned int fd, unsigned long offset_high, unsigned long offset_low, loff_t __user *result, unsigned int whence);" },
    SyscallEntry { number: 63, name: "read", prototype: "asmlinkage long sys_read(unsigned int fd, char __user *buf, size_t count);" },
    SyscallEntry { number: 64, name: "write", prototype: "asmlinkage long sys_write(unsigned int fd, const char __user *buf, size_t count);" },
    SyscallEntry { number: 65, name: "readv", prototype: "asmlinkage long sys_readv(unsigned long fd, const struct iovec __user *vec, unsigned long vlen);" },
    SyscallEntry { number: 66, name: "writev", prototype: "asmlinkage long sys_writev(unsigned long fd, const struct iovec __user *vec, unsigned long vlen);" },
    SyscallEntry { number: 67, name: "pread64", prototype: "asmlinkage long sys_pread64(unsigned int fd, char __user *buf, size_t count, loff_t pos);" },
    SyscallEntry { number: 68, name: "pwrite64", prototype: "asmlinkage long sys_pwrite64(unsigned int fd, const char __user *buf, size_t count, loff_t pos);" },
    SyscallEntry { number: 69, name: "preadv", prototype: "asmlinkage long sys_preadv(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h);" },
    SyscallEntry { number: 70, name: "pwritev", prototype: "asmlinkage long sys_pwritev(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h);" },
    SyscallEntry { number: 71, name: "sendfile64", prototype: "asmlinkage long sys_sendfile64(int out_fd, int in_fd, loff_t __user *offset, size_t count);" },
    SyscallEntry { number: 72, name: "pselect6_time32", prototype: "asmlinkage long sys_pselect6_time32(int, fd_set __user *, fd_set __user *, fd_set __user *, struct old_timespec32 __user *, void __user *);" },
    SyscallEntry { number: 73, name: "ppoll_time32", prototype: "asmlinkage long sys_ppoll_time32(struct pollfd __user *, unsigned int, struct old_timespec32 __user *, const sigset_t __user *, size_t);" },
    SyscallEntry { number: 74, name: "signalfd4", prototype: "asmlinkage long sys_signalfd4(int ufd, sigset_t __user *user_mask, size_t sizemask, int flags);" },
    SyscallEntry { number: 75, name: "vmsplice", prototype: "asmlinkage long sys_vmsplice(int fd, const struct iovec __user *iov, unsigned long nr_segs, unsigned int flags);" },
    SyscallEntry { number: 76, name: "splice", prototype: "asmlinkage long sys_vmsplice(int fd, const struct iovec __user *iov, unsigned long nr_segs, unsigned int flags);" },
    SyscallEntry { number: 77, name: "tee", prototype: "asmlinkage long sys_tee(int fdin, int fdout, size_t len, unsigned int flags);" },
    SyscallEntry { number: 78, name: "readlinkat", prototype: "asmlinkage long sys_readlinkat(int dfd, const char __user *path, char __user *buf, int bufsiz);" },
    SyscallEntry { number: 79, name: "newfstatat", prototype: "asmlinkage long sys_newfstatat(int dfd, const char __user *filename, struct stat __user *statbuf, int flag);" },
    SyscallEntry { number: 80, name: "newfstat", prototype: "asmlinkage long sys_newfstat(unsigned int fd, struct stat __user *statbuf);" },
    SyscallEntry { number: 81, name: "sync", prototype: "asmlinkage long sys_sync(void);" },
    SyscallEntry { number: 82, name: "fsync", prototype: "asmlinkage long sys_fsync(unsigned int fd);" },
    SyscallEntry { number: 83, name: "fdatasync", prototype: "asmlinkage long sys_fdatasync(unsigned int fd);" },
    SyscallEntry { number: 84, name: "sync_file_range2", prototype: "asmlinkage long sys_sync_file_range2(int fd, unsigned int flags, loff_t offset, loff_t nbytes);" },
    SyscallEntry { number: 84, name: "sync_file_range", prototype: "asmlinkage long sys_sync_file_range(int fd, loff_t offset, loff_t nbytes, unsigned int flags);" },
    SyscallEntry { number: 85, name: "timerfd_create", prototype: "asmlinkage long sys_timerfd_create(int clockid, int flags);" },
    SyscallEntry { number: 86, name: "timerfd_settime", prototype: "asmlinkage long sys_timerfd_settime(int ufd, int flags, const struct __kernel_itimerspec __user *utmr, struct __kernel_itimerspec __user *otmr);" },
    SyscallEntry { number: 87, name: "timerfd_gettime", prototype: "asmlinkage long sys_timerfd_gettime(int ufd, struct __kernel_itimerspec __user *otmr);" },
    SyscallEntry { number: 88, name: "utimensat", prototype: "asmlinkage long sys_utimensat(int dfd, const char __user *filename, struct __kernel_timespec __user *utimes, int flags);" },
    SyscallEntry { number: 89, name: "acct", prototype: "asmlinkage long sys_acct(const char __user *name);" },
    SyscallEntry { number: 90, name: "capget", prototype: "asmlinkage long sys_capget(cap_user_header_t header, cap_user_data_t dataptr);" },
    SyscallEntry { number: 91, name: "capset", prototype: "asmlinkage long sys_capset(cap_user_header_t header, const cap_user_data_t data);" },
    SyscallEntry { number: 92, name: "personality", prototype: "asmlinkage long sys_personality(unsigned int personality);" },
    SyscallEntry { number: 93, name: "exit", prototype: "asmlinkage long sys_exit(int error_code);" },
    SyscallEntry { number: 94, name: "exit_group", prototype: "asmlinkage long sys_exit_group(int error_code);" },
    SyscallEntry { number: 95, name: "waitid", prototype: "asmlinkage long sys_waitid(int which, pid_t pid, struct siginfo __user *infop, int options, struct rusage __user *ru);" },
    SyscallEntry { number: 96, name: "set_tid_address", prototype: "asmlinkage long sys_set_tid_address(int __user *tidptr);" },
    SyscallEntry { number: 97, name: "unshare", prototype: "asmlinkage long sys_unshare(unsigned long unshare_flags);" },
    SyscallEntry { number: 98, name: "futex", prototype: "asmlinkage long sys_futex(u32 __user *uaddr, int op, u32 val, struct __kernel_timespec __user *utime, u32 __user *uaddr2, u32 val3);" },
    SyscallEntry { number: 99, name: "set_robust_list", prototype: "asmlinkage long sys_set_robust_list(struct robust_list_head __user *head, size_t len);" },
    SyscallEntry { number: 100, name: "get_robust_list", prototype: "asmlinkage long sys_get_robust_list(int pid, struct robust_list_head __user * __user *head_ptr, size_t __user *len_ptr);" },
    SyscallEntry { number: 101, name: "nanosleep", prototype: "asmlinkage long sys_nanosleep(struct __kernel_timespec __user *rqtp, struct __kernel_timespec __user *rmtp);" },
    SyscallEntry { number: 102, name: "getitimer", prototype: "asmlinkage long sys_getitimer(int which, struct __kernel_old_itimerval __user *value);" },
    SyscallEntry { number: 103, name: "setitimer", prototype: "asmlinkage long sys_setitimer(int which, struct __kernel_old_itimerval __user *value, struct __kernel_old_itimerval __user *ovalue);" },
    SyscallEntry { number: 104, name: "kexec_load", prototype: "asmlinkage long sys_kexec_load(unsigned long entry, unsigned long nr_segments, struct kexec_segment __user *segments, unsigned long flags);" },
    SyscallEntry { number: 105, name: "init_module", prototype: "asmlinkage long sys_init_module(void __user *umod, unsigned long len, const char __user *uargs);" },
    SyscallEntry { number: 106, name: "delete_module", prototype: "asmlinkage long sys_delete_module(const char __user *name_user, unsigned int flags);" },
    SyscallEntry { number: 107, name: "timer_create", prototype: "asmlinkage long sys_timer_create(clockid_t which_clock, struct sigevent __user *timer_event_spec, timer_t __user * created_timer_id);" },
    SyscallEntry { number: 108, name: "timer_gettime", prototype: "asmlinkage long sys_timer_gettime(timer_t timer_id, struct __kernel_itimerspec __user *setting);" },
    SyscallEntry { number: 109, name: "timer_getoverrun", prototype: "asmlinkage long sys_timer_getoverrun(timer_t timer_id);" },
    SyscallEntry { number: 110, name: "timer_settime", prototype: "asmlinkage long sys_timer_settime(timer_t timer_id, int flags, const struct __kernel_itimerspec __user *new_setting, struct __kernel_itimerspec __user *old_setting);" },
    SyscallEntry { number: 111, name: "timer_delete", prototype: "asmlinkage long sys_timer_delete(timer_t timer_id);" },
    SyscallEntry { number: 112, name: "clock_settime", prototype: "asmlinkage long sys_clock_settime(clockid_t which_clock, const struct __kernel_timespec __user *tp);" },
    SyscallEntry { number: 113, name: "clock_gettime", prototype: "asmlinkage long sys_clock_gettime(clockid_t which_clock, struct __kernel_timespec __user *tp);" },
    SyscallEntry { number: 114, name: "clock_getres", prototype: "asmlinkage long sys_clock_getres(clockid_t which_clock, struct __kernel_timespec __user *tp);" },
    SyscallEntry { number: 115, name: "clock_nanosleep", prototype: "asmlinkage long sys_clock_nanosleep(clockid_t which_clock, int flags, const struct __kernel_timespec __user *rqtp, struct __kernel_timespec __user *rmtp);" },
    SyscallEntry { number: 116, name: "syslog", prototype: "asmlinkage long sys_syslog(int type, char __user *buf, int len);" },
    SyscallEntry { number: 117, name: "ptrace", prototype: "asmlinkage long sys_ptrace(long request, long pid, unsigned long addr, unsigned long data);" },
    SyscallEntry { number: 118, name: "sched_setparam", prototype: "asmlinkage long sys_sched_setparam(pid_t pid, struct sched_param __user *param);" },
    SyscallEntry { number: 119, name: "sched_setscheduler", prototype: "asmlinkage long sys_sched_setscheduler(pid_t pid, int policy, struct sched_param __user *param);" },
    SyscallEntry { number: 120, name: "sched_getscheduler", prototype: "asmlinkage long sys_sched_getscheduler(pid_t pid);" },
    SyscallEntry { number: 121, name: "sched_getparam", prototype: "asmlinkage long sys_sched_getparam(pid_t pid, struct sched_param __user *param);" },
    SyscallEntry { number: 122, name: "sched_setaffinity", prototype: "asmlinkage long sys_sched_setaffinity(pid_t pid, unsigned int len, unsigned long __user *user_mask_ptr);" },
    SyscallEntry { number: 123, name: "sched_getaffinity", prototype: "asmlinkage long sys_sched_getaffinity(pid_t pid, unsigned int len, unsigned long __user *user_mask_ptr);" },
    SyscallEntry { number: 124, name: "sched_yield", prototype: "asmlinkage long sys_sched_yield(void);" },
    SyscallEntry { number: 125, name: "sched_get_priority_max", prototype: "asmlinkage long sys_sched_get_priority_max(int policy);" },
    SyscallEntry { number: 126, name: "sched_get_priority_min", prototype: "asmlinkage long sys_sched_get_priority_min(int policy);" },
    SyscallEntry { number: 127, name: "sched_rr_get_interval", prototype: "asmlinkage long sys_sched_rr_get_interval(pid_t pid, struct __kernel_timespec __user *interval);" },
    SyscallEntry { number: 128, name: "restart_syscall", prototype: "asmlinkage long sys_restart_syscall(void);" },
    SyscallEntry { number: 129, name: "kill", prototype: "asmlinkage long sys_kill(pid_t pid, int sig);" },
    SyscallEntry { number: 130, name: "tkill", prototype: "asmlinkage long sys_tkill(pid_t pid, int sig);" },
    SyscallEntry { number: 131, name: "tgkill", prototype: "asmlinkage long sys_tgkill(pid_t tgid, pid_t pid, int sig);" },
    SyscallEntry { number: 132, name: "sigaltstack", prototype: "asmlinkage long sys_sigaltstack(const struct sigaltstack __user *uss, struct sigaltstack __user *uoss);" },
    SyscallEntry { number: 133, name: "rt_sigsuspend", prototype: "asmlinkage long sys_rt_sigsuspend(sigset_t __user *unewset, size_t sigsetsize);" },
    SyscallEntry { number: 134, name: "rt_sigaction", prototype: "asmlinkage long sys_rt_sigaction(int, const struct sigaction __user *, struct sigaction __user *, size_t);" },
    SyscallEntry { number: 135, name: "rt_sigprocmask", prototype: "asmlinkage long sys_rt_sigprocmask(int how, sigset_t __user *set, sigset_t __user *oset, size_t sigsetsize);" },
    SyscallEntry { number: 136, name: "rt_sigpending", prototype: "asmlinkage long sys_rt_sigpending(sigset_t __user *set, size_t sigsetsize);" },
    SyscallEntry { number: 137, name: "rt_sigtimedwait_time32", prototype: "asmlinkage long sys_rt_sigtimedwait_time32(const sigset_t __user *uthese, siginfo_t __user *uinfo, const struct old_timespec32 __user *uts, size_t sigsetsize);" },
    SyscallEntry { number: 138, name: "rt_sigqueueinfo", prototype: "asmlinkage long sys_rt_sigqueueinfo(pid_t pid, int sig, siginfo_t __user *uinfo);" },
    SyscallEntry { number: 140, name: "setpriority", prototype: "asmlinkage long sys_setpriority(int which, int who, int niceval);" },
    SyscallEntry { number: 141, name: "getpriority", prototype: "asmlinkage long sys_getpriority(int which, int who);" },
    SyscallEntry { number: 142, name: "reboot", prototype: "asmlinkage long sys_reboot(int magic1, int magic2, unsigned int cmd, void __user *arg);" },
    SyscallEntry { number: 143, name: "setregid", prototype: "asmlinkage long sys_setregid(gid_t rgid, gid_t egid);" },
    SyscallEntry { number: 144, name: "setgid", prototype: "asmlinkage long sys_setgid(gid_t gid);" },
    SyscallEntry { number: 145, name: "setreuid", prototype: "asmlinkage long sys_setreuid(uid_t ruid, uid_t euid);" },
    SyscallEntry { number: 146, name: "setuid", prototype: "asmlinkage long sys_setuid(uid_t uid);" },
    SyscallEntry { number: 147, name: "setresuid", prototype: "asmlinkage long sys_setresuid(uid_t ruid, uid_t euid, uid_t suid);" },
    SyscallEntry { number: 148, name: "getresuid", prototype: "asmlinkage long sys_getresuid(uid_t __user *ruid, uid_t __user *euid, uid_t __user *suid);" },
    SyscallEntry { number: 149, name: "setresgid", prototype: "asmlinkage long sys_setresgid(gid_t rgid, gid_t egid, gid_t sgid);" },
    SyscallEntry { number: 150, name: "getresgid", prototype: "asmlinkage long sys_getresgid(gid_t __user *rgid, gid_t __user *egid, gid_t __user *sgid);" },
    SyscallEntry { number: 151, name: "setfsuid", prototype: "asmlinkage long sys_setfsuid(uid_t uid);" },
    SyscallEntry { number: 152, name: "setfsgid", prototype: "asmlinkage long sys_setfsgid(gid_t gid);" },
    SyscallEntry { number: 153, name: "times", prototype: "asmlinkage long sys_times(struct tms __user *tbuf);" },
    SyscallEntry { number: 154, name: "setpgid", prototype: "asmlinkage long sys_setpgid(pid_t pid, pid_t pgid);" },
    SyscallEntry { number: 155, name: "getpgid", prototype: "asmlinkage long sys_getpgid(pid_t pid);" },
    SyscallEntry { number: 156, name: "getsid", prototype: "asmlinkage long sys_getsid(pid_t pid);" },
    SyscallEntry { number: 157, name: "setsid", prototype: "asmlinkage long sys_setsid(void);" },
    SyscallEntry { number: 158, name: "getgroups", prototype: "asmlinkage long sys_getgroups(int gidsetsize, gid_t __user *grouplist);" },
    SyscallEntry { number: 159, name: "setgroups", prototype: "asmlinkage long sys_setgroups(int gidsetsize, gid_t __user *grouplist);" },
    SyscallEntry { number: 160, name: "newuname", prototype: "asmlinkage long sys_newuname(struct new_utsname __user *name);" },
    SyscallEntry { number: 161, name: "sethostname", prototype: "asmlinkage long sys_sethostname(char __user *name, int len);" },
    SyscallEntry { number: 162, name: "setdomainname", prototype: "asmlinkage long sys_setdomainname(char __user *name, int len);" },
    SyscallEntry { number: 163, name: "getrlimit", prototype: "asmlinkage long sys_getrlimit(unsigned int resource, struct rlimit __user *rlim);" },
    SyscallEntry { number: 164, name: "setrlimit", prototype: "asmlinkage long sys_setrlimit(unsigned int resource, struct rlimit __user *rlim);" },
    SyscallEntry { number: 165, name: "getrusage", prototype: "asmlinkage long sys_getrusage(int who, struct rusage __user *ru);" },
    SyscallEntry { number: 166, name: "umask", prototype: "asmlinkage long sys_umask(int mask);" },
    SyscallEntry { number: 167, name: "prctl", prototype: "asmlinkage long sys_prctl(int option, unsigned long arg2, unsigned long arg3, unsigned long arg4, unsigned long arg5);" },
    SyscallEntry { number: 168, name: "getcpu", prototype: "asmlinkage long sys_getcpu(unsigned __user *cpu, unsigned __user *node, struct getcpu_cache __user *cache);" },
    SyscallEntry { number: 169, name: "gettimeofday", prototype: "asmlinkage long sys_gettimeofday(struct __kernel_old_timeval __user *tv, struct timezone __user *tz);" },
    SyscallEntry { number: 170, name: "settimeofday", prototype: "asmlinkage long sys_settimeofday(struct __kernel_old_timeval __user *tv, struct timezone __user *tz);" },
    SyscallEntry { number: 171, name: "adjtimex", prototype: "asmlinkage long sys_adjtimex(struct __kernel_timex __user *txc_p);" },
    SyscallEntry { number: 172, name: "getpid", prototype: "asmlinkage long sys_getpid(void);" },
    SyscallEntry { number: 173, name: "getppid", prototype: "asmlinkage long sys_getppid(void);" },
    SyscallEntry { number: 174, name: "getuid", prototype: "asmlinkage long sys_getuid(void);" },
    SyscallEntry { number: 175, name: "geteuid", prototype: "asmlinkage long sys_geteuid(void);" },
    SyscallEntry { number: 176, name: "getgid", prototype: "asmlinkage long sys_getgid(void);" },
    SyscallEntry { number: 177, name: "getegid", prototype: "asmlinkage long sys_getegid(void);" },
    SyscallEntry { number: 178, name: "gettid", prototype: "asmlinkage long sys_gettid(void);" },
    SyscallEntry { number: 179, name: "sysinfo", prototype: "asmlinkage long sys_sysinfo(struct sysinfo __user *info);" },
    SyscallEntry { number: 180, name: "mq_open", prototype: "asmlinkage long sys_mq_open(const char __user *name, int oflag, umode_t mode, struct mq_attr __user *attr);" },
    SyscallEntry { number: 181, name: "mq_unlink", prototype: "asmlinkage long sys_mq_unlink(const char __user *name);" },
    SyscallEntry { number: 182, name: "mq_timedsend", prototype: "asmlinkage long sys_mq_timedsend(mqd_t mqdes, const char __user *msg_ptr, size_t msg_len, unsigned int msg_prio, const struct __kernel_timespec __user *abs_timeout);" },
    SyscallEntry { number: 183, name: "mq_timedreceive", prototype: "asmlinkage long sys_mq_timedreceive(mqd_t mqdes, char __user *msg_ptr, size_t msg_len, unsigned int __user *msg_prio, const struct __kernel_timespec __user *abs_timeout);" },
    SyscallEntry { number: 184, name: "mq_notify", prototype: "asmlinkage long sys_mq_notify(mqd_t mqdes, const struct sigevent __user *notification);" },
    SyscallEntry { number: 185, name: "mq_getsetattr", prototype: "asmlinkage long sys_mq_getsetattr(mqd_t mqdes, const struct mq_attr __user *mqstat, struct mq_attr __user *omqstat);" },
    SyscallEntry { number: 186, name: "msgget", prototype: "asmlinkage long sys_msgget(key_t key, int msgflg);" },
    SyscallEntry { number: 187, name: "msgctl", prototype: "asmlinkage long sys_old_msgctl(int msqid, int cmd, struct msqid_ds __user *buf);" },
    SyscallEntry { number: 188, name: "msgrcv", prototype: "asmlinkage long sys_msgrcv(int msqid, struct msgbuf __user *msgp, size_t msgsz, long msgtyp, int msgflg);" },
    SyscallEntry { number: 189, name: "msgsnd", prototype: "asmlinkage long sys_msgsnd(int msqid, struct msgbuf __user *msgp, size_t msgsz, int msgflg);" },
    SyscallEntry { number: 190, name: "semget", prototype: "asmlinkage long sys_semget(key_t key, int nsems, int semflg);" },
    SyscallEntry { number: 191, name: "semctl", prototype: "asmlinkage long sys_semctl(int semid, int semnum, int cmd, unsigned long arg);" },
    SyscallEntry { number: 192, name: "semtimedop", prototype: "asmlinkage long sys_semtimedop(int semid, struct sembuf __user *sops, unsigned nsops, const struct __kernel_timespec __user *timeout);" },
    SyscallEntry { number: 193, name: "semop", prototype: "asmlinkage long sys_semop(int semid, struct sembuf __user *sops, unsigned nsops);" },
    SyscallEntry { number: 194, name: "shmget", prototype: "asmlinkage long sys_shmget(key_t key, size_t size, int flag);" },
    SyscallEntry { number: 195, name: "shmctl", prototype: "asmlinkage long sys_old_shmctl(int shmid, int cmd, struct shmid_ds __user *buf);" },
    SyscallEntry { number: 196, name: "shmat", prototype: "asmlinkage long sys_shmat(int shmid, char __user *shmaddr, int shmflg);" },
    SyscallEntry { number: 197, name: "shmdt", prototype: "asmlinkage long sys_shmdt(char __user *shmaddr);" },
    SyscallEntry { number: 198, name: "socket", prototype: "asmlinkage long sys_socket(int, int, int);" },
    SyscallEntry { number: 199, name: "socketpair", prototype: "asmlinkage long sys_socketpair(int, int, int, int __user *);" },
    SyscallEntry { number: 200, name: "bind", prototype: "asmlinkage long sys_bind(int, struct sockaddr __user *, int);" },
    SyscallEntry { number: 201, name: "listen", prototype: "asmlinkage long sys_listen(int, int);" },
    SyscallEntry { number: 202, name: "accept", prototype: "asmlinkage long sys_accept(int, struct sockaddr __user *, int __user *);" },
    SyscallEntry { number: 203, name: "connect", prototype: "asmlinkage long sys_connect(int, struct sockaddr __user *, int);" },
    SyscallEntry { number: 204, name: "getsockname", prototype: "asmlinkage long sys_getsockname(int, struct sockaddr __user *, int __user *);" },
    SyscallEntry { number: 205, name: "getpeername", prototype: "asmlinkage long sys_getpeername(int, struct sockaddr __user *, int __user *);" },
    SyscallEntry { number: 206, name: "sendto", prototype: "asmlinkage long sys_sendto(int, void __user *, size_t, unsigned, struct sockaddr __user *, int);" },
    SyscallEntry { number: 207, name: "recvfrom", prototype: "asmlinkage long sys_recvfrom(int, void __user *, size_t, unsigned, struct sockaddr __user *, int __user *);" },
    SyscallEntry { number: 208, name: "setsockopt", prototype: "asmlinkage long sys_setsockopt(int fd, int level, int optname, char __user *optval, int optlen);" },
    SyscallEntry { number: 209, name: "getsockopt", prototype: "asmlinkage long sys_getsockopt(int fd, int level, int optname, char __user *optval, int __user *optlen);" },
    SyscallEntry { number: 210, name: "shutdown", prototype: "asmlinkage long sys_shutdown(int, int);" },
    SyscallEntry { number: 211, name: "sendmsg", prototype: "asmlinkage long sys_sendmsg(int fd, struct user_msghdr __user *msg, unsigned flags);" },
    SyscallEntry { number: 212, name: "recvmsg", prototype: "asmlinkage long sys_recvmsg(int fd, struct user_msghdr __user *msg, unsigned flags);" },
    SyscallEntry { number: 213, name: "readahead", prototype: "asmlinkage long sys_readahead(int fd, loff_t offset, size_t count);" },
    SyscallEntry { number: 214, name: "brk", prototype: "asmlinkage long sys_brk(unsigned long brk);" },
    SyscallEntry { number: 215, name: "munmap", prototype: "asmlinkage long sys_munmap(unsigned long addr, size_t len);" },
    SyscallEntry { number: 216, name: "mremap", prototype: "asmlinkage long sys_mremap(unsigned long addr, unsigned long old_len, unsigned long new_len, unsigned long flags, unsigned long new_addr);" },
    SyscallEntry { number: 217, name: "add_key", prototype: "asmlinkage long sys_add_key(const char __user *_type, const char __user *_description, const void __user *_payload, size_t plen, key_serial_t destringid);" },
    SyscallEntry { number: 218, name: "request_key", prototype: "asmlinkage long sys_request_key(const char __user *_type, const char __user *_description, const char __user *_callout_info, key_serial_t destringid);" },
    SyscallEntry { number: 219, name: "keyctl", prototype: "asmlinkage long sys_keyctl(int cmd, unsigned long arg2, unsigned long arg3, unsigned long arg4, unsigned long arg5);" },
    SyscallEntry { number: 220, name: "clone", prototype: "asmlinkage long sys_clone(unsigned long, unsigned long, int __user *, unsigned long, int __user *);" },
    SyscallEntry { number: 221, name: "execve", prototype: "asmlinkage long sys_execve(const char __user *filename, const char __user *const __user *argv, const char __user *const __user *envp);" },
    SyscallEntry { number: 222, name: "mmap", prototype: "asmlinkage long sys_old_mmap(struct mmap_arg_struct __user *arg);" },
    SyscallEntry { number: 223, name: "fadvise64_64", prototype: "asmlinkage long sys_fadvise64_64(int fd, loff_t offset, loff_t len, int advice);" },
    SyscallEntry { number: 224, name: "swapon", prototype: "asmlinkage long sys_swapon(const char __user *specialfile, int swap_flags);" },
    SyscallEntry { number: 225, name: "swapoff", prototype: "asmlinkage long sys_swapoff(const char __user *specialfile);" },
    SyscallEntry { number: 226, name: "mprotect", prototype: "asmlinkage long sys_mprotect(unsigned long start, size_t len, unsigned long prot);" },
    SyscallEntry { number: 227, name: "msync", prototype: "asmlinkage long sys_msync(unsigned long start, size_t len, int flags);" },
    SyscallEntry { number: 228, name: "mlock", prototype: "asmlinkage long sys_mlock(unsigned long start, size_t len);" },
    SyscallEntry { number: 229, name: "munlock", prototype: "asmlinkage long sys_munlock(unsigned long start, size_t len);" },
    SyscallEntry { number: 230, name: "mlockall", prototype: "asmlinkage long sys_mlockall(int flags);" },
    SyscallEntry { number: 231, name: "munlockall", prototype: "asmlinkage long sys_munlockall(void);" },
    SyscallEntry { number: 232, name: "mincore", prototype: "asmlinkage long sys_mincore(unsigned long start, size_t len, unsigned char __user * vec);" },
    SyscallEntry { number: 233, name: "madvise", prototype: "asmlinkage long sys_madvise(unsigned long start, size_t len, int behavior);" },
    SyscallEntry { number: 234, name: "remap_file_pages", prototype: "asmlinkage long sys_remap_file_pages(unsigned long start, unsigned long size, unsigned long prot, unsigned long pgoff, unsigned long flags);" },
    SyscallEntry { number: 235, name: "mbind", prototype: "asmlinkage long sys_mbind(unsigned long start, unsigned long len, unsigned long mode, const unsigned long __user *nmask, unsigned long maxnode, unsigned flags);" },
    SyscallEntry { number: 236, name: "get_mempolicy", prototype: "asmlinkage long sys_get_mempolicy(int __user *policy, unsigned long __user *nmask, unsigned long maxnode, unsigned long addr, unsigned long flags);" },
    SyscallEntry { number: 237, name: "set_mempolicy", prototype: "asmlinkage long sys_set_mempolicy(int mode, const unsigned long __user *nmask, unsigned long maxnode);" },
    SyscallEntry { number: 238, name: "migrate_pages", prototype: "asmlinkage long sys_migrate_pages(pid_t pid, unsigned long maxnode, const unsigned long __user *from, const unsigned long __user *to);" },
    SyscallEntry { number: 239, name: "move_pages", prototype: "asmlinkage long sys_move_pages(pid_t pid, unsigned long nr_pages, const void __user * __user *pages, const int __user *nodes, int __user *status, int flags);" },
    SyscallEntry { number: 240, name: "rt_tgsigqueueinfo", prototype: "asmlinkage long sys_rt_tgsigqueueinfo(pid_t tgid, pid_t pid, int sig, siginfo_t __user *uinfo);" },
    SyscallEntry { number: 241, name: "perf_event_open", prototype: "asmlinkage long sys_perf_event_open(" },
    SyscallEntry { number: 242, name: "accept4", prototype: "asmlinkage long sys_accept4(int, struct sockaddr __user *, int __user *, int);" },
    SyscallEntry { number: 243, name: "recvmmsg_time32", prototype: "asmlinkage long sys_recvmmsg_time32(int fd, struct mmsghdr __user *msg, unsigned int vlen, unsigned flags, struct old_timespec32 __user *timeout);" },
    SyscallEntry { number: 260, name: "wait4", prototype: "asmlinkage long sys_wait4(pid_t pid, int __user *stat_addr, int options, struct rusage __user *ru);" },
    SyscallEntry { number: 261, name: "prlimit64", prototype: "asmlinkage long sys_prlimit64(pid_t pid, unsigned int resource, const struct rlimit64 __user *new_rlim, struct rlimit64 __user *old_rlim);" },
    SyscallEntry { number: 262, name: "fanotify_init", prototype: "asmlinkage long sys_fanotify_init(unsigned int flags, unsigned int event_f_flags);" },
    SyscallEntry { number: 263, name: "fanotify_mark", prototype: "asmlinkage long sys_fanotify_mark(int fanotify_fd, unsigned int flags, u64 mask, int fd, const char __user *pathname);" },
    SyscallEntry { number: 264, name: "name_to_handle_at", prototype: "asmlinkage long sys_name_to_handle_at(int dfd, const char __user *name, struct file_handle __user *handle, int __user *mnt_id, int flag);" },
    SyscallEntry { number: 265, name: "open_by_handle_at", prototype: "asmlinkage long sys_open_by_handle_at(int mountdirfd, struct file_handle __user *handle, int flags);" },
    SyscallEntry { number: 266, name: "clock_adjtime", prototype: "asmlinkage long sys_clock_adjtime(clockid_t which_clock, struct __kernel_timex __user *tx);" },
    SyscallEntry { number: 267, name: "syncfs", prototype: "asmlinkage long sys_syncfs(int fd);" },
    SyscallEntry { number: 268, name: "setns", prototype: "asmlinkage long sys_setns(int fd, int nstype);" },
    SyscallEntry { number: 269, name: "sendmmsg", prototype: "asmlinkage long sys_sendmmsg(int fd, struct mmsghdr __user *msg, unsigned int vlen, unsigned flags);" },
    SyscallEntry { number: 270, name: "process_vm_readv", prototype: "asmlinkage long sys_process_vm_readv(pid_t pid, const struct iovec __user *lvec, unsigned long liovcnt, const struct iovec __user *rvec, unsigned long riovcnt, unsigned long flags);" },
    SyscallEntry { number: 271, name: "process_vm_writev", prototype: "asmlinkage long sys_process_vm_writev(pid_t pid, const struct iovec __user *lvec, unsigned long liovcnt, const struct iovec __user *rvec, unsigned long riovcnt, unsigned long flags);" },
    SyscallEntry { number: 272, name: "kcmp", prototype: "asmlinkage long sys_kcmp(pid_t pid1, pid_t pid2, int type, unsigned long idx1, unsigned long idx2);" },
    SyscallEntry { number: 273, name: "finit_module", prototype: "asmlinkage long sys_finit_module(int fd, const char __user *uargs, int flags);" },
    SyscallEntry { number: 274, name: "sched_setattr", prototype: "asmlinkage long sys_sched_setattr(pid_t pid, struct sched_attr __user *attr, unsigned int flags);" },
    SyscallEntry { number: 275, name: "sched_getattr", prototype: "asmlinkage long sys_sched_getattr(pid_t pid, struct sched_attr __user *attr, unsigned int size, unsigned int flags);" },
    SyscallEntry { number: 276, name: "renameat2", prototype: "asmlinkage long sys_renameat2(int olddfd, const char __user *oldname, int newdfd, const char __user *newname, unsigned int flags);" },
    SyscallEntry { number: 277, name: "seccomp", prototype: "asmlinkage long sys_seccomp(unsigned int op, unsigned int flags, void __user *uargs);" },
    SyscallEntry { number: 278, name: "getrandom", prototype: "asmlinkage long sys_getrandom(char __user *buf, size_t count, unsigned int flags);" },
    SyscallEntry { number: 279, name: "memfd_create", prototype: "asmlinkage long sys_memfd_create(const char __user *uname_ptr, unsigned int flags);" },
    SyscallEntry { number: 280, name: "bpf", prototype: "asmlinkage long sys_bpf(int cmd, union bpf_attr *attr, unsigned int size);" },
    SyscallEntry { number: 281, name: "execveat", prototype: "asmlinkage long sys_execveat(int dfd, const char __user *filename, const char __user *const __user *argv, const char __user *const __user *envp, int flags);" },
    SyscallEntry { number: 282, name: "userfaultfd", prototype: "asmlinkage long sys_userfaultfd(int flags);" },
    SyscallEntry { number: 283, name: "membarrier", prototype: "asmlinkage long sys_membarrier(int cmd, unsigned int flags, int cpu_id);" },
    SyscallEntry { number: 284, name: "mlock2", prototype: "asmlinkage long sys_mlock2(unsigned long start, size_t len, int flags);" },
    SyscallEntry { number: 285, name: "copy_file_range", prototype: "asmlinkage long sys_copy_file_range(int fd_in, loff_t __user *off_in, int fd_out, loff_t __user *off_out, size_t len, unsigned int flags);" },
    SyscallEntry { number: 286, name: "preadv2", prototype: "asmlinkage long sys_preadv2(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h, rwf_t flags);" },
    SyscallEntry { number: 287, name: "pwritev2", prototype: "asmlinkage long sys_pwritev2(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h, rwf_t flags);" },
    SyscallEntry { number: 288, name: "pkey_mprotect", prototype: "asmlinkage long sys_pkey_mprotect(unsigned long start, size_t len, unsigned long prot, int pkey);" },
    SyscallEntry { number: 289, name: "pkey_alloc", prototype: "asmlinkage long sys_pkey_alloc(unsigned long flags, unsigned long init_val);" },
    SyscallEntry { number: 290, name: "pkey_free", prototype: "asmlinkage long sys_pkey_free(int pkey);" },
    SyscallEntry { number: 291, name: "statx", prototype: "asmlinkage long sys_statx(int dfd, const char __user *path, unsigned flags, unsigned mask, struct statx __user *buffer);" },
    SyscallEntry { number: 292, name: "io_pgetevents", prototype: "asmlinkage long sys_io_pgetevents(aio_context_t ctx_id, long min_nr, long nr, struct io_event __user *events, struct __kernel_timespec __user *timeout, const struct __aio_sigset *sig);" },
    SyscallEntry { number: 293, name: "rseq", prototype: "asmlinkage long sys_rseq(struct rseq __user *rseq, uint32_t rseq_len, int flags, uint32_t sig);" },
    SyscallEntry { number: 294, name: "kexec_file_load", prototype: "asmlinkage long sys_kexec_file_load(int kernel_fd, int initrd_fd, unsigned long cmdline_len, const char __user *cmdline_ptr, unsigned long flags);" },
    SyscallEntry { number: 403, name: "clock_gettime", prototype: "asmlinkage long sys_clock_gettime(clockid_t which_clock, struct __kernel_timespec __user *tp);" },
    SyscallEntry { number: 404, name: "clock_settime", prototype: "asmlinkage long sys_clock_settime(clockid_t which_clock, const struct __kernel_timespec __user *tp);" },
    SyscallEntry { number: 405, name: "clock_adjtime", prototype: "asmlinkage long sys_clock_adjtime(clockid_t which_clock, struct __kernel_timex __user *tx);" },
    SyscallEntry { number: 406, name: "clock_getres", prototype: "asmlinkage long sys_clock_getres(clockid_t which_clock, struct __kernel_timespec __user *tp);" },
    SyscallEntry { number: 407, name: "clock_nanosleep", prototype: "asmlinkage long sys_clock_nanosleep(clockid_t which_clock, int flags, const struct __kernel_timespec __user *rqtp, struct __kernel_timespec __user *rmtp);" },
    SyscallEntry { number: 408, name: "timer_gettime", prototype: "asmlinkage long sys_timer_gettime(timer_t timer_id, struct __kernel_itimerspec __user *setting);" },
    SyscallEntry { number: 409, name: "timer_settime", prototype: "asmlinkage long sys_timer_settime(timer_t timer_id, int flags, const struct __kernel_itimerspec __user *new_setting, struct __kernel_itimerspec __user *old_setting);" },
    SyscallEntry { number: 410, name: "timerfd_gettime", prototype: "asmlinkage long sys_timerfd_gettime(int ufd, struct __kernel_itimerspec __user *otmr);" },
    SyscallEntry { number: 411, name: "timerfd_settime", prototype: "asmlinkage long sys_timerfd_settime(int ufd, int flags, const struct __kernel_itimerspec __user *utmr, struct __kernel_itimerspec __user *otmr);" },
    SyscallEntry { number: 412, name: "utimensat", prototype: "asmlinkage long sys_utimensat(int dfd, const char __user *filename, struct __kernel_timespec __user *utimes, int flags);" },
    SyscallEntry { number: 416, name: "io_pgetevents", prototype: "asmlinkage long sys_io_pgetevents(aio_context_t ctx_id, long min_nr, long nr, struct io_event __user *events, struct __kernel_timespec __user *timeout, const struct __aio_sigset *sig);" },
    SyscallEntry { number: 418, name: "mq_timedsend", prototype: "asmlinkage long sys_mq_timedsend(mqd_t mqdes, const char __user *msg_ptr, size_t msg_len, unsigned int msg_prio, const struct __kernel_timespec __user *abs_timeout);" },
    SyscallEntry { number: 419, name: "mq_timedreceive", prototype: "asmlinkage long sys_mq_timedreceive(mqd_t mqdes, char __user *msg_ptr, size_t msg_len, unsigned int __user *msg_prio, const struct __kernel_timespec __user *abs_timeout);" },
    SyscallEntry { number: 420, name: "semtimedop", prototype: "asmlinkage long sys_semtimedop(int semid, struct sembuf __user *sops, unsigned nsops, const struct __kernel_timespec __user *timeout);" },
    SyscallEntry { number: 422, name: "futex", prototype: "asmlinkage long sys_futex(u32 __user *uaddr, int op, u32 val, struct __kernel_timespec __user *utime, u32 __user *uaddr2, u32 val3);" },
    SyscallEntry { number: 423, name: "sched_rr_get_interval", prototype: "asmlinkage long sys_sched_rr_get_interval(pid_t pid, struct __kernel_timespec __user *interval);" },
    SyscallEntry { number: 424, name: "pidfd_send_signal", prototype: "asmlinkage long sys_pidfd_send_signal(int pidfd, int sig, siginfo_t __user *info, unsigned int flags);" },
    SyscallEntry { number: 425, name: "io_uring_setup", prototype: "asmlinkage long sys_io_uring_setup(u32 entries, struct io_uring_params __user *p);" },
    SyscallEntry { number: 426, name: "io_uring_enter", prototype: "asmlinkage long sys_io_uring_enter(unsigned int fd, u32 to_submit, u32 min_complete, u32 flags, const sigset_t __user *sig, size_t sigsz);" },
    SyscallEntry { number: 427, name: "io_uring_register", prototype: "asmlinkage long sys_io_uring_register(unsigned int fd, unsigned int op, void __user *arg, unsigned int nr_args);" },
    SyscallEntry { number: 428, name: "open_tree", prototype: "asmlinkage long sys_open_tree(int dfd, const char __user *path, unsigned flags);" },
    SyscallEntry { number: 429, name: "move_mount", prototype: "asmlinkage long sys_move_mount(int from_dfd, const char __user *from_path, int to_dfd, const char __user *to_path, unsigned int ms_flags);" },
    SyscallEntry { number: 430, name: "fsopen", prototype: "asmlinkage long sys_fsopen(const char __user *fs_name, unsigned int flags);" },
    SyscallEntry { number: 431, name: "fsconfig", prototype: "asmlinkage long sys_fsconfig(int fs_fd, unsigned int cmd, const char __user *key, const void __user *value, int aux);" },
    SyscallEntry { number: 432, name: "fsmount", prototype: "asmlinkage long sys_fsmount(int fs_fd, unsigned int flags, unsigned int ms_flags);" },
    SyscallEntry { number: 433, name: "fspick", prototype: "asmlinkage long sys_fspick(int dfd, const char __user *path, unsigned int flags);" },
    SyscallEntry { number: 434, name: "pidfd_open", prototype: "asmlinkage long sys_pidfd_open(pid_t pid, unsigned int flags);" },
    SyscallEntry { number: 435, name: "clone3", prototype: "asmlinkage long sys_clone3(struct clone_args __user *uargs, size_t size);" },
    SyscallEntry { number: 436, name: "close_range", prototype: "asmlinkage long sys_close_range(unsigned int fd, unsigned int max_fd, unsigned int flags);" },
    SyscallEntry { number: 437, name: "openat2", prototype: "asmlinkage long sys_openat2(int dfd, const char __user *filename, struct open_how *how, size_t size);" },
    SyscallEntry { number: 438, name: "pidfd_getfd", prototype: "asmlinkage long sys_pidfd_getfd(int pidfd, int fd, unsigned int flags);" },
    SyscallEntry { number: 439, name: "faccessat2", prototype: "asmlinkage long sys_faccessat2(int dfd, const char __user *filename, int mode, int flags);" },
    SyscallEntry { number: 440, name: "process_madvise", prototype: "asmlinkage long sys_process_madvise(int pidfd, const struct iovec __user *vec, size_t vlen, int behavior, unsigned int flags);" },
];
