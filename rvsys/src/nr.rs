// AUTO-GENERATED from testcase/riscv64.syscalls; do not edit by hand.

//! One constant per distinct syscall name.
//!
//! Names that occur more than once (the time64 block at 403..=423) are bound to the
//! first record carrying them, i.e. the native 64-bit number.

use crate::entry::SyscallNumber;

/// `long sys_io_setup(unsigned nr_reqs, aio_context_t __user *ctx);`
pub const SYS_IO_SETUP: SyscallNumber = 0;
/// `long sys_io_destroy(aio_context_t ctx);`
pub const SYS_IO_DESTROY: SyscallNumber = 1;
/// `long sys_io_submit(aio_context_t, long, struct iocb __user * __user *);`
pub const SYS_IO_SUBMIT: SyscallNumber = 2;
/// `long sys_io_cancel(aio_context_t ctx_id, struct iocb __user *iocb, struct io_event __user *result);`
pub const SYS_IO_CANCEL: SyscallNumber = 3;
/// `long sys_io_getevents(aio_context_t ctx_id, long min_nr, long nr, struct io_event __user *events, struct __kernel_timespec __user *timeout);`
pub const SYS_IO_GETEVENTS: SyscallNumber = 4;
/// `long sys_setxattr(const char __user *path, const char __user *name, const void __user *value, size_t size, int flags);`
pub const SYS_SETXATTR: SyscallNumber = 5;
/// `long sys_lsetxattr(const char __user *path, const char __user *name, const void __user *value, size_t size, int flags);`
pub const SYS_LSETXATTR: SyscallNumber = 6;
/// `long sys_fsetxattr(int fd, const char __user *name, const void __user *value, size_t size, int flags);`
pub const SYS_FSETXATTR: SyscallNumber = 7;
/// `long sys_getxattr(const char __user *path, const char __user *name, void __user *value, size_t size);`
pub const SYS_GETXATTR: SyscallNumber = 8;
/// `long sys_lgetxattr(const char __user *path, const char __user *name, void __user *value, size_t size);`
pub const SYS_LGETXATTR: SyscallNumber = 9;
/// `long sys_fgetxattr(int fd, const char __user *name, void __user *value, size_t size);`
pub const SYS_FGETXATTR: SyscallNumber = 10;
/// `long sys_listxattr(const char __user *path, char __user *list, size_t size);`
pub const SYS_LISTXATTR: SyscallNumber = 11;
/// `long sys_llistxattr(const char __user *path, char __user *list, size_t size);`
pub const SYS_LLISTXATTR: SyscallNumber = 12;
/// `long sys_flistxattr(int fd, char __user *list, size_t size);`
pub const SYS_FLISTXATTR: SyscallNumber = 13;
/// `long sys_removexattr(const char __user *path, const char __user *name);`
pub const SYS_REMOVEXATTR: SyscallNumber = 14;
/// `long sys_lremovexattr(const char __user *path, const char __user *name);`
pub const SYS_LREMOVEXATTR: SyscallNumber = 15;
/// `long sys_fremovexattr(int fd, const char __user *name);`
pub const SYS_FREMOVEXATTR: SyscallNumber = 16;
/// `long sys_getcwd(char __user *buf, unsigned long size);`
pub const SYS_GETCWD: SyscallNumber = 17;
/// `long sys_lookup_dcookie(u64 cookie64, char __user *buf, size_t len);`
pub const SYS_LOOKUP_DCOOKIE: SyscallNumber = 18;
/// `long sys_eventfd2(unsigned int count, int flags);`
pub const SYS_EVENTFD2: SyscallNumber = 19;
/// `long sys_epoll_create1(int flags);`
pub const SYS_EPOLL_CREATE1: SyscallNumber = 20;
/// `long sys_epoll_ctl(int epfd, int op, int fd, struct epoll_event __user *event);`
pub const SYS_EPOLL_CTL: SyscallNumber = 21;
/// `long sys_epoll_pwait(int epfd, struct epoll_event __user *events, int maxevents, int timeout, const sigset_t __user *sigmask, size_t sigsetsize);`
pub const SYS_EPOLL_PWAIT: SyscallNumber = 22;
/// `long sys_dup(unsigned int fildes);`
pub const SYS_DUP: SyscallNumber = 23;
/// `long sys_dup3(unsigned int oldfd, unsigned int newfd, int flags);`
pub const SYS_DUP3: SyscallNumber = 24;
/// `long sys_fcntl64(unsigned int fd, unsigned int cmd, unsigned long arg);`
pub const SYS_FCNTL64: SyscallNumber = 25;
/// `long sys_inotify_init1(int flags);`
pub const SYS_INOTIFY_INIT1: SyscallNumber = 26;
/// `long sys_inotify_add_watch(int fd, const char __user *path, u32 mask);`
pub const SYS_INOTIFY_ADD_WATCH: SyscallNumber = 27;
/// `long sys_inotify_rm_watch(int fd, __s32 wd);`
pub const SYS_INOTIFY_RM_WATCH: SyscallNumber = 28;
/// `long sys_ioctl(unsigned int fd, unsigned int cmd, unsigned long arg);`
pub const SYS_IOCTL: SyscallNumber = 29;
/// `long sys_ioprio_set(int which, int who, int ioprio);`
pub const SYS_IOPRIO_SET: SyscallNumber = 30;
/// `long sys_ioprio_get(int which, int who);`
pub const SYS_IOPRIO_GET: SyscallNumber = 31;
/// `long sys_flock(unsigned int fd, unsigned int cmd);`
pub const SYS_FLOCK: SyscallNumber = 32;
/// `long sys_mknodat(int dfd, const char __user * filename, umode_t mode, unsigned dev);`
pub const SYS_MKNODAT: SyscallNumber = 33;
/// `long sys_mkdirat(int dfd, const char __user * pathname, umode_t mode);`
pub const SYS_MKDIRAT: SyscallNumber = 34;
/// `long sys_unlinkat(int dfd, const char __user * pathname, int flag);`
pub const SYS_UNLINKAT: SyscallNumber = 35;
/// `long sys_symlinkat(const char __user * oldname, int newdfd, const char __user * newname);`
pub const SYS_SYMLINKAT: SyscallNumber = 36;
/// `long sys_unlinkat(int dfd, const char __user * pathname, int flag);`
pub const SYS_LINKAT: SyscallNumber = 37;
/// `long sys_renameat(int olddfd, const char __user * oldname, int newdfd, const char __user * newname);`
pub const SYS_RENAMEAT: SyscallNumber = 38;
/// `long sys_umount(char __user *name, int flags);`
pub const SYS_UMOUNT: SyscallNumber = 39;
/// `long sys_umount(char __user *name, int flags);`
pub const SYS_MOUNT: SyscallNumber = 40;
/// `long sys_pivot_root(const char __user *new_root, const char __user *put_old);`
pub const SYS_PIVOT_ROOT: SyscallNumber = 41;
/// `long sys_ni_syscall(void);`
pub const SYS_NI_SYSCALL: SyscallNumber = 42;
/// `long sys_statfs64(const char __user *path, size_t sz, struct statfs64 __user *buf);`
pub const SYS_STATFS64: SyscallNumber = 43;
/// `long sys_fstatfs64(unsigned int fd, size_t sz, struct statfs64 __user *buf);`
pub const SYS_FSTATFS64: SyscallNumber = 44;
/// `long sys_truncate64(const char __user *path, loff_t length);`
pub const SYS_TRUNCATE64: SyscallNumber = 45;
/// `long sys_ftruncate64(unsigned int fd, loff_t length);`
pub const SYS_FTRUNCATE64: SyscallNumber = 46;
/// `long sys_fallocate(int fd, int mode, loff_t offset, loff_t len);`
pub const SYS_FALLOCATE: SyscallNumber = 47;
/// `long sys_faccessat(int dfd, const char __user *filename, int mode);`
pub const SYS_FACCESSAT: SyscallNumber = 48;
/// `long sys_chdir(const char __user *filename);`
pub const SYS_CHDIR: SyscallNumber = 49;
/// `long sys_fchdir(unsigned int fd);`
pub const SYS_FCHDIR: SyscallNumber = 50;
/// `long sys_chroot(const char __user *filename);`
pub const SYS_CHROOT: SyscallNumber = 51;
/// `long sys_fchmod(unsigned int fd, umode_t mode);`
pub const SYS_FCHMOD: SyscallNumber = 52;
/// `long sys_fchmodat(int dfd, const char __user * filename, umode_t mode);`
pub const SYS_FCHMODAT: SyscallNumber = 53;
/// `long sys_fchownat(int dfd, const char __user *filename, uid_t user, gid_t group, int flag);`
pub const SYS_FCHOWNAT: SyscallNumber = 54;
/// `long sys_fchown(unsigned int fd, uid_t user, gid_t group);`
pub const SYS_FCHOWN: SyscallNumber = 55;
/// `long sys_openat(int dfd, const char __user *filename, int flags, umode_t mode);`
pub const SYS_OPENAT: SyscallNumber = 56;
/// `long sys_close(unsigned int fd);`
pub const SYS_CLOSE: SyscallNumber = 57;
/// `long sys_vhangup(void);`
pub const SYS_VHANGUP: SyscallNumber = 58;
/// `long sys_pipe2(int __user *fildes, int flags);`
pub const SYS_PIPE2: SyscallNumber = 59;
/// `long sys_quotactl(unsigned int cmd, const char __user *special, qid_t id, void __user *addr);`
pub const SYS_QUOTACTL: SyscallNumber = 60;
/// `long sys_getdents64(unsigned int fd, struct linux_dirent64 __user *dirent, unsigned int count);`
pub const SYS_GETDENTS64: SyscallNumber = 61;
/// `long sys_llseek(unsigned int fd, unsigned long offset_high, unsigned long offset_low, loff_t __user *result, unsigned int whence);`
pub const SYS_LSEEK: SyscallNumber = 62;
/// `long sys_read(unsigned int fd, char __user *buf, size_t count);`
pub const SYS_READ: SyscallNumber = 63;
/// `long sys_write(unsigned int fd, const char __user *buf, size_t count);`
pub const SYS_WRITE: SyscallNumber = 64;
/// `long sys_readv(unsigned long fd, const struct iovec __user *vec, unsigned long vlen);`
pub const SYS_READV: SyscallNumber = 65;
/// `long sys_writev(unsigned long fd, const struct iovec __user *vec, unsigned long vlen);`
pub const SYS_WRITEV: SyscallNumber = 66;
/// `long sys_pread64(unsigned int fd, char __user *buf, size_t count, loff_t pos);`
pub const SYS_PREAD64: SyscallNumber = 67;
/// `long sys_pwrite64(unsigned int fd, const char __user *buf, size_t count, loff_t pos);`
pub const SYS_PWRITE64: SyscallNumber = 68;
/// `long sys_preadv(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h);`
pub const SYS_PREADV: SyscallNumber = 69;
/// `long sys_pwritev(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h);`
pub const SYS_PWRITEV: SyscallNumber = 70;
/// `long sys_sendfile64(int out_fd, int in_fd, loff_t __user *offset, size_t count);`
pub const SYS_SENDFILE64: SyscallNumber = 71;
/// `long sys_pselect6_time32(int, fd_set __user *, fd_set __user *, fd_set __user *, struct old_timespec32 __user *, void __user *);`
pub const SYS_PSELECT6_TIME32: SyscallNumber = 72;
/// `long sys_ppoll_time32(struct pollfd __user *, unsigned int, struct old_timespec32 __user *, const sigset_t __user *, size_t);`
pub const SYS_PPOLL_TIME32: SyscallNumber = 73;
/// `long sys_signalfd4(int ufd, sigset_t __user *user_mask, size_t sizemask, int flags);`
pub const SYS_SIGNALFD4: SyscallNumber = 74;
/// `long sys_vmsplice(int fd, const struct iovec __user *iov, unsigned long nr_segs, unsigned int flags);`
pub const SYS_VMSPLICE: SyscallNumber = 75;
/// `long sys_vmsplice(int fd, const struct iovec __user *iov, unsigned long nr_segs, unsigned int flags);`
pub const SYS_SPLICE: SyscallNumber = 76;
/// `long sys_tee(int fdin, int fdout, size_t len, unsigned int flags);`
pub const SYS_TEE: SyscallNumber = 77;
/// `long sys_readlinkat(int dfd, const char __user *path, char __user *buf, int bufsiz);`
pub const SYS_READLINKAT: SyscallNumber = 78;
/// `long sys_newfstatat(int dfd, const char __user *filename, struct stat __user *statbuf, int flag);`
pub const SYS_NEWFSTATAT: SyscallNumber = 79;
/// `long sys_newfstat(unsigned int fd, struct stat __user *statbuf);`
pub const SYS_NEWFSTAT: SyscallNumber = 80;
/// `long sys_sync(void);`
pub const SYS_SYNC: SyscallNumber = 81;
/// `long sys_fsync(unsigned int fd);`
pub const SYS_FSYNC: SyscallNumber = 82;
/// `long sys_fdatasync(unsigned int fd);`
pub const SYS_FDATASYNC: SyscallNumber = 83;
/// `long sys_sync_file_range2(int fd, unsigned int flags, loff_t offset, loff_t nbytes);`
pub const SYS_SYNC_FILE_RANGE2: SyscallNumber = 84;
/// `long sys_sync_file_range(int fd, loff_t offset, loff_t nbytes, unsigned int flags);`
pub const SYS_SYNC_FILE_RANGE: SyscallNumber = 84;
/// `long sys_timerfd_create(int clockid, int flags);`
pub const SYS_TIMERFD_CREATE: SyscallNumber = 85;
/// `long sys_timerfd_settime(int ufd, int flags, const struct __kernel_itimerspec __user *utmr, struct __kernel_itimerspec __user *otmr);`
pub const SYS_TIMERFD_SETTIME: SyscallNumber = 86;
/// `long sys_timerfd_gettime(int ufd, struct __kernel_itimerspec __user *otmr);`
pub const SYS_TIMERFD_GETTIME: SyscallNumber = 87;
/// `long sys_utimensat(int dfd, const char __user *filename, struct __kernel_timespec __user *utimes, int flags);`
pub const SYS_UTIMENSAT: SyscallNumber = 88;
/// `long sys_acct(const char __user *name);`
pub const SYS_ACCT: SyscallNumber = 89;
/// `long sys_capget(cap_user_header_t header, cap_user_data_t dataptr);`
pub const SYS_CAPGET: SyscallNumber = 90;
/// `long sys_capset(cap_user_header_t header, const cap_user_data_t data);`
pub const SYS_CAPSET: SyscallNumber = 91;
/// `long sys_personality(unsigned int personality);`
pub const SYS_PERSONALITY: SyscallNumber = 92;
/// `long sys_exit(int error_code);`
pub const SYS_EXIT: SyscallNumber = 93;
/// `long sys_exit_group(int error_code);`
pub const SYS_EXIT_GROUP: SyscallNumber = 94;
/// `long sys_waitid(int which, pid_t pid, struct siginfo __user *infop, int options, struct rusage __user *ru);`
pub const SYS_WAITID: SyscallNumber = 95;
/// `long sys_set_tid_address(int __user *tidptr);`
pub const SYS_SET_TID_ADDRESS: SyscallNumber = 96;
/// `long sys_unshare(unsigned long unshare_flags);`
pub const SYS_UNSHARE: SyscallNumber = 97;
/// `long sys_futex(u32 __user *uaddr, int op, u32 val, struct __kernel_timespec __user *utime, u32 __user *uaddr2, u32 val3);`
pub const SYS_FUTEX: SyscallNumber = 98;
/// `long sys_set_robust_list(struct robust_list_head __user *head, size_t len);`
pub const SYS_SET_ROBUST_LIST: SyscallNumber = 99;
/// `long sys_get_robust_list(int pid, struct robust_list_head __user * __user *head_ptr, size_t __user *len_ptr);`
pub const SYS_GET_ROBUST_LIST: SyscallNumber = 100;
/// `long sys_nanosleep(struct __kernel_timespec __user *rqtp, struct __kernel_timespec __user *rmtp);`
pub const SYS_NANOSLEEP: SyscallNumber = 101;
/// `long sys_getitimer(int which, struct __kernel_old_itimerval __user *value);`
pub const SYS_GETITIMER: SyscallNumber = 102;
/// `long sys_setitimer(int which, struct __kernel_old_itimerval __user *value, struct __kernel_old_itimerval __user *ovalue);`
pub const SYS_SETITIMER: SyscallNumber = 103;
/// `long sys_kexec_load(unsigned long entry, unsigned long nr_segments, struct kexec_segment __user *segments, unsigned long flags);`
pub const SYS_KEXEC_LOAD: SyscallNumber = 104;
/// `long sys_init_module(void __user *umod, unsigned long len, const char __user *uargs);`
pub const SYS_INIT_MODULE: SyscallNumber = 105;
/// `long sys_delete_module(const char __user *name_user, unsigned int flags);`
pub const SYS_DELETE_MODULE: SyscallNumber = 106;
/// `long sys_timer_create(clockid_t which_clock, struct sigevent __user *timer_event_spec, timer_t __user * created_timer_id);`
pub const SYS_TIMER_CREATE: SyscallNumber = 107;
/// `long sys_timer_gettime(timer_t timer_id, struct __kernel_itimerspec __user *setting);`
pub const SYS_TIMER_GETTIME: SyscallNumber = 108;
/// `long sys_timer_getoverrun(timer_t timer_id);`
pub const SYS_TIMER_GETOVERRUN: SyscallNumber = 109;
/// `long sys_timer_settime(timer_t timer_id, int flags, const struct __kernel_itimerspec __user *new_setting, struct __kernel_itimerspec __user *old_setting);`
pub const SYS_TIMER_SETTIME: SyscallNumber = 110;
/// `long sys_timer_delete(timer_t timer_id);`
pub const SYS_TIMER_DELETE: SyscallNumber = 111;
/// `long sys_clock_settime(clockid_t which_clock, const struct __kernel_timespec __user *tp);`
pub const SYS_CLOCK_SETTIME: SyscallNumber = 112;
/// `long sys_clock_gettime(clockid_t which_clock, struct __kernel_timespec __user *tp);`
pub const SYS_CLOCK_GETTIME: SyscallNumber = 113;
/// `long sys_clock_getres(clockid_t which_clock, struct __kernel_timespec __user *tp);`
pub const SYS_CLOCK_GETRES: SyscallNumber = 114;
/// `long sys_clock_nanosleep(clockid_t which_clock, int flags, const struct __kernel_timespec __user *rqtp, struct __kernel_timespec __user *rmtp);`
pub const SYS_CLOCK_NANOSLEEP: SyscallNumber = 115;
/// `long sys_syslog(int type, char __user *buf, int len);`
pub const SYS_SYSLOG: SyscallNumber = 116;
/// `long sys_ptrace(long request, long pid, unsigned long addr, unsigned long data);`
pub const SYS_PTRACE: SyscallNumber = 117;
/// `long sys_sched_setparam(pid_t pid, struct sched_param __user *param);`
pub const SYS_SCHED_SETPARAM: SyscallNumber = 118;
/// `long sys_sched_setscheduler(pid_t pid, int policy, struct sched_param __user *param);`
pub const SYS_SCHED_SETSCHEDULER: SyscallNumber = 119;
/// `long sys_sched_getscheduler(pid_t pid);`
pub const SYS_SCHED_GETSCHEDULER: SyscallNumber = 120;
/// `long sys_sched_getparam(pid_t pid, struct sched_param __user *param);`
pub const SYS_SCHED_GETPARAM: SyscallNumber = 121;
/// `long sys_sched_setaffinity(pid_t pid, unsigned int len, unsigned long __user *user_mask_ptr);`
pub const SYS_SCHED_SETAFFINITY: SyscallNumber = 122;
/// `long sys_sched_getaffinity(pid_t pid, unsigned int len, unsigned long __user *user_mask_ptr);`
pub const SYS_SCHED_GETAFFINITY: SyscallNumber = 123;
/// `long sys_sched_yield(void);`
pub const SYS_SCHED_YIELD: SyscallNumber = 124;
/// `long sys_sched_get_priority_max(int policy);`
pub const SYS_SCHED_GET_PRIORITY_MAX: SyscallNumber = 125;
/// `long sys_sched_get_priority_min(int policy);`
pub const SYS_SCHED_GET_PRIORITY_MIN: SyscallNumber = 126;
/// `long sys_sched_rr_get_interval(pid_t pid, struct __kernel_timespec __user *interval);`
pub const SYS_SCHED_RR_GET_INTERVAL: SyscallNumber = 127;
/// `long sys_restart_syscall(void);`
pub const SYS_RESTART_SYSCALL: SyscallNumber = 128;
/// `long sys_kill(pid_t pid, int sig);`
pub const SYS_KILL: SyscallNumber = 129;
/// `long sys_tkill(pid_t pid, int sig);`
pub const SYS_TKILL: SyscallNumber = 130;
/// `long sys_tgkill(pid_t tgid, pid_t pid, int sig);`
pub const SYS_TGKILL: SyscallNumber = 131;
/// `long sys_sigaltstack(const struct sigaltstack __user *uss, struct sigaltstack __user *uoss);`
pub const SYS_SIGALTSTACK: SyscallNumber = 132;
/// `long sys_rt_sigsuspend(sigset_t __user *unewset, size_t sigsetsize);`
pub const SYS_RT_SIGSUSPEND: SyscallNumber = 133;
/// `long sys_rt_sigaction(int, const struct sigaction __user *, struct sigaction __user *, size_t);`
pub const SYS_RT_SIGACTION: SyscallNumber = 134;
/// `long sys_rt_sigprocmask(int how, sigset_t __user *set, sigset_t __user *oset, size_t sigsetsize);`
pub const SYS_RT_SIGPROCMASK: SyscallNumber = 135;
/// `long sys_rt_sigpending(sigset_t __user *set, size_t sigsetsize);`
pub const SYS_RT_SIGPENDING: SyscallNumber = 136;
/// `long sys_rt_sigtimedwait_time32(const sigset_t __user *uthese, siginfo_t __user *uinfo, const struct old_timespec32 __user *uts, size_t sigsetsize);`
pub const SYS_RT_SIGTIMEDWAIT_TIME32: SyscallNumber = 137;
/// `long sys_rt_sigqueueinfo(pid_t pid, int sig, siginfo_t __user *uinfo);`
pub const SYS_RT_SIGQUEUEINFO: SyscallNumber = 138;
/// `long sys_setpriority(int which, int who, int niceval);`
pub const SYS_SETPRIORITY: SyscallNumber = 140;
/// `long sys_getpriority(int which, int who);`
pub const SYS_GETPRIORITY: SyscallNumber = 141;
/// `long sys_reboot(int magic1, int magic2, unsigned int cmd, void __user *arg);`
pub const SYS_REBOOT: SyscallNumber = 142;
/// `long sys_setregid(gid_t rgid, gid_t egid);`
pub const SYS_SETREGID: SyscallNumber = 143;
/// `long sys_setgid(gid_t gid);`
pub const SYS_SETGID: SyscallNumber = 144;
/// `long sys_setreuid(uid_t ruid, uid_t euid);`
pub const SYS_SETREUID: SyscallNumber = 145;
/// `long sys_setuid(uid_t uid);`
pub const SYS_SETUID: SyscallNumber = 146;
/// `long sys_setresuid(uid_t ruid, uid_t euid, uid_t suid);`
pub const SYS_SETRESUID: SyscallNumber = 147;
/// `long sys_getresuid(uid_t __user *ruid, uid_t __user *euid, uid_t __user *suid);`
pub const SYS_GETRESUID: SyscallNumber = 148;
/// `long sys_setresgid(gid_t rgid, gid_t egid, gid_t sgid);`
pub const SYS_SETRESGID: SyscallNumber = 149;
/// `long sys_getresgid(gid_t __user *rgid, gid_t __user *egid, gid_t __user *sgid);`
pub const SYS_GETRESGID: SyscallNumber = 150;
/// `long sys_setfsuid(uid_t uid);`
pub const SYS_SETFSUID: SyscallNumber = 151;
/// `long sys_setfsgid(gid_t gid);`
pub const SYS_SETFSGID: SyscallNumber = 152;
/// `long sys_times(struct tms __user *tbuf);`
pub const SYS_TIMES: SyscallNumber = 153;
/// `long sys_setpgid(pid_t pid, pid_t pgid);`
pub const SYS_SETPGID: SyscallNumber = 154;
/// `long sys_getpgid(pid_t pid);`
pub const SYS_GETPGID: SyscallNumber = 155;
/// `long sys_getsid(pid_t pid);`
pub const SYS_GETSID: SyscallNumber = 156;
/// `long sys_setsid(void);`
pub const SYS_SETSID: SyscallNumber = 157;
/// `long sys_getgroups(int gidsetsize, gid_t __user *grouplist);`
pub const SYS_GETGROUPS: SyscallNumber = 158;
/// `long sys_setgroups(int gidsetsize, gid_t __user *grouplist);`
pub const SYS_SETGROUPS: SyscallNumber = 159;
/// `long sys_newuname(struct new_utsname __user *name);`
pub const SYS_NEWUNAME: SyscallNumber = 160;
/// `long sys_sethostname(char __user *name, int len);`
pub const SYS_SETHOSTNAME: SyscallNumber = 161;
/// `long sys_setdomainname(char __user *name, int len);`
pub const SYS_SETDOMAINNAME: SyscallNumber = 162;
/// `long sys_getrlimit(unsigned int resource, struct rlimit __user *rlim);`
pub const SYS_GETRLIMIT: SyscallNumber = 163;
/// `long sys_setrlimit(unsigned int resource, struct rlimit __user *rlim);`
pub const SYS_SETRLIMIT: SyscallNumber = 164;
/// `long sys_getrusage(int who, struct rusage __user *ru);`
pub const SYS_GETRUSAGE: SyscallNumber = 165;
/// `long sys_umask(int mask);`
pub const SYS_UMASK: SyscallNumber = 166;
/// `long sys_prctl(int option, unsigned long arg2, unsigned long arg3, unsigned long arg4, unsigned long arg5);`
pub const SYS_PRCTL: SyscallNumber = 167;
/// `long sys_getcpu(unsigned __user *cpu, unsigned __user *node, struct getcpu_cache __user *cache);`
pub const SYS_GETCPU: SyscallNumber = 168;
/// `long sys_gettimeofday(struct __kernel_old_timeval __user *tv, struct timezone __user *tz);`
pub const SYS_GETTIMEOFDAY: SyscallNumber = 169;
/// `long sys_settimeofday(struct __kernel_old_timeval __user *tv, struct timezone __user *tz);`
pub const SYS_SETTIMEOFDAY: SyscallNumber = 170;
/// `long sys_adjtimex(struct __kernel_timex __user *txc_p);`
pub const SYS_ADJTIMEX: SyscallNumber = 171;
/// `long sys_getpid(void);`
pub const SYS_GETPID: SyscallNumber = 172;
/// `long sys_getppid(void);`
pub const SYS_GETPPID: SyscallNumber = 173;
/// `long sys_getuid(void);`
pub const SYS_GETUID: SyscallNumber = 174;
/// `long sys_geteuid(void);`
pub const SYS_GETEUID: SyscallNumber = 175;
/// `long sys_getgid(void);`
pub const SYS_GETGID: SyscallNumber = 176;
/// `long sys_getegid(void);`
pub const SYS_GETEGID: SyscallNumber = 177;
/// `long sys_gettid(void);`
pub const SYS_GETTID: SyscallNumber = 178;
/// `long sys_sysinfo(struct sysinfo __user *info);`
pub const SYS_SYSINFO: SyscallNumber = 179;
/// `long sys_mq_open(const char __user *name, int oflag, umode_t mode, struct mq_attr __user *attr);`
pub const SYS_MQ_OPEN: SyscallNumber = 180;
/// `long sys_mq_unlink(const char __user *name);`
pub const SYS_MQ_UNLINK: SyscallNumber = 181;
/// `long sys_mq_timedsend(mqd_t mqdes, const char __user *msg_ptr, size_t msg_len, unsigned int msg_prio, const struct __kernel_timespec __user *abs_timeout);`
pub const SYS_MQ_TIMEDSEND: SyscallNumber = 182;
/// `long sys_mq_timedreceive(mqd_t mqdes, char __user *msg_ptr, size_t msg_len, unsigned int __user *msg_prio, const struct __kernel_timespec __user *abs_timeout);`
pub const SYS_MQ_TIMEDRECEIVE: SyscallNumber = 183;
/// `long sys_mq_notify(mqd_t mqdes, const struct sigevent __user *notification);`
pub const SYS_MQ_NOTIFY: SyscallNumber = 184;
/// `long sys_mq_getsetattr(mqd_t mqdes, const struct mq_attr __user *mqstat, struct mq_attr __user *omqstat);`
pub const SYS_MQ_GETSETATTR: SyscallNumber = 185;
/// `long sys_msgget(key_t key, int msgflg);`
pub const SYS_MSGGET: SyscallNumber = 186;
/// `long sys_old_msgctl(int msqid, int cmd, struct msqid_ds __user *buf);`
pub const SYS_MSGCTL: SyscallNumber = 187;
/// `long sys_msgrcv(int msqid, struct msgbuf __user *msgp, size_t msgsz, long msgtyp, int msgflg);`
pub const SYS_MSGRCV: SyscallNumber = 188;
/// `long sys_msgsnd(int msqid, struct msgbuf __user *msgp, size_t msgsz, int msgflg);`
pub const SYS_MSGSND: SyscallNumber = 189;
/// `long sys_semget(key_t key, int nsems, int semflg);`
pub const SYS_SEMGET: SyscallNumber = 190;
/// `long sys_semctl(int semid, int semnum, int cmd, unsigned long arg);`
pub const SYS_SEMCTL: SyscallNumber = 191;
/// `long sys_semtimedop(int semid, struct sembuf __user *sops, unsigned nsops, const struct __kernel_timespec __user *timeout);`
pub const SYS_SEMTIMEDOP: SyscallNumber = 192;
/// `long sys_semop(int semid, struct sembuf __user *sops, unsigned nsops);`
pub const SYS_SEMOP: SyscallNumber = 193;
/// `long sys_shmget(key_t key, size_t size, int flag);`
pub const SYS_SHMGET: SyscallNumber = 194;
/// `long sys_old_shmctl(int shmid, int cmd, struct shmid_ds __user *buf);`
pub const SYS_SHMCTL: SyscallNumber = 195;
/// `long sys_shmat(int shmid, char __user *shmaddr, int shmflg);`
pub const SYS_SHMAT: SyscallNumber = 196;
/// `long sys_shmdt(char __user *shmaddr);`
pub const SYS_SHMDT: SyscallNumber = 197;
/// `long sys_socket(int, int, int);`
pub const SYS_SOCKET: SyscallNumber = 198;
/// `long sys_socketpair(int, int, int, int __user *);`
pub const SYS_SOCKETPAIR: SyscallNumber = 199;
/// `long sys_bind(int, struct sockaddr __user *, int);`
pub const SYS_BIND: SyscallNumber = 200;
/// `long sys_listen(int, int);`
pub const SYS_LISTEN: SyscallNumber = 201;
/// `long sys_accept(int, struct sockaddr __user *, int __user *);`
pub const SYS_ACCEPT: SyscallNumber = 202;
/// `long sys_connect(int, struct sockaddr __user *, int);`
pub const SYS_CONNECT: SyscallNumber = 203;
/// `long sys_getsockname(int, struct sockaddr __user *, int __user *);`
pub const SYS_GETSOCKNAME: SyscallNumber = 204;
/// `long sys_getpeername(int, struct sockaddr __user *, int __user *);`
pub const SYS_GETPEERNAME: SyscallNumber = 205;
/// `long sys_sendto(int, void __user *, size_t, unsigned, struct sockaddr __user *, int);`
pub const SYS_SENDTO: SyscallNumber = 206;
/// `long sys_recvfrom(int, void __user *, size_t, unsigned, struct sockaddr __user *, int __user *);`
pub const SYS_RECVFROM: SyscallNumber = 207;
/// `long sys_setsockopt(int fd, int level, int optname, char __user *optval, int optlen);`
pub const SYS_SETSOCKOPT: SyscallNumber = 208;
/// `long sys_getsockopt(int fd, int level, int optname, char __user *optval, int __user *optlen);`
pub const SYS_GETSOCKOPT: SyscallNumber = 209;
/// `long sys_shutdown(int, int);`
pub const SYS_SHUTDOWN: SyscallNumber = 210;
/// `long sys_sendmsg(int fd, struct user_msghdr __user *msg, unsigned flags);`
pub const SYS_SENDMSG: SyscallNumber = 211;
/// `long sys_recvmsg(int fd, struct user_msghdr __user *msg, unsigned flags);`
pub const SYS_RECVMSG: SyscallNumber = 212;
/// `long sys_readahead(int fd, loff_t offset, size_t count);`
pub const SYS_READAHEAD: SyscallNumber = 213;
/// `long sys_brk(unsigned long brk);`
pub const SYS_BRK: SyscallNumber = 214;
/// `long sys_munmap(unsigned long addr, size_t len);`
pub const SYS_MUNMAP: SyscallNumber = 215;
/// `long sys_mremap(unsigned long addr, unsigned long old_len, unsigned long new_len, unsigned long flags, unsigned long new_addr);`
pub const SYS_MREMAP: SyscallNumber = 216;
/// `long sys_add_key(const char __user *_type, const char __user *_description, const void __user *_payload, size_t plen, key_serial_t destringid);`
pub const SYS_ADD_KEY: SyscallNumber = 217;
/// `long sys_request_key(const char __user *_type, const char __user *_description, const char __user *_callout_info, key_serial_t destringid);`
pub const SYS_REQUEST_KEY: SyscallNumber = 218;
/// `long sys_keyctl(int cmd, unsigned long arg2, unsigned long arg3, unsigned long arg4, unsigned long arg5);`
pub const SYS_KEYCTL: SyscallNumber = 219;
/// `long sys_clone(unsigned long, unsigned long, int __user *, unsigned long, int __user *);`
pub const SYS_CLONE: SyscallNumber = 220;
/// `long sys_execve(const char __user *filename, const char __user *const __user *argv, const char __user *const __user *envp);`
pub const SYS_EXECVE: SyscallNumber = 221;
/// `long sys_old_mmap(struct mmap_arg_struct __user *arg);`
pub const SYS_MMAP: SyscallNumber = 222;
/// `long sys_fadvise64_64(int fd, loff_t offset, loff_t len, int advice);`
pub const SYS_FADVISE64_64: SyscallNumber = 223;
/// `long sys_swapon(const char __user *specialfile, int swap_flags);`
pub const SYS_SWAPON: SyscallNumber = 224;
/// `long sys_swapoff(const char __user *specialfile);`
pub const SYS_SWAPOFF: SyscallNumber = 225;
/// `long sys_mprotect(unsigned long start, size_t len, unsigned long prot);`
pub const SYS_MPROTECT: SyscallNumber = 226;
/// `long sys_msync(unsigned long start, size_t len, int flags);`
pub const SYS_MSYNC: SyscallNumber = 227;
/// `long sys_mlock(unsigned long start, size_t len);`
pub const SYS_MLOCK: SyscallNumber = 228;
/// `long sys_munlock(unsigned long start, size_t len);`
pub const SYS_MUNLOCK: SyscallNumber = 229;
/// `long sys_mlockall(int flags);`
pub const SYS_MLOCKALL: SyscallNumber = 230;
/// `long sys_munlockall(void);`
pub const SYS_MUNLOCKALL: SyscallNumber = 231;
/// `long sys_mincore(unsigned long start, size_t len, unsigned char __user * vec);`
pub const SYS_MINCORE: SyscallNumber = 232;
/// `long sys_madvise(unsigned long start, size_t len, int behavior);`
pub const SYS_MADVISE: SyscallNumber = 233;
/// `long sys_remap_file_pages(unsigned long start, unsigned long size, unsigned long prot, unsigned long pgoff, unsigned long flags);`
pub const SYS_REMAP_FILE_PAGES: SyscallNumber = 234;
/// `long sys_mbind(unsigned long start, unsigned long len, unsigned long mode, const unsigned long __user *nmask, unsigned long maxnode, unsigned flags);`
pub const SYS_MBIND: SyscallNumber = 235;
/// `long sys_get_mempolicy(int __user *policy, unsigned long __user *nmask, unsigned long maxnode, unsigned long addr, unsigned long flags);`
pub const SYS_GET_MEMPOLICY: SyscallNumber = 236;
/// `long sys_set_mempolicy(int mode, const unsigned long __user *nmask, unsigned long maxnode);`
pub const SYS_SET_MEMPOLICY: SyscallNumber = 237;
/// `long sys_migrate_pages(pid_t pid, unsigned long maxnode, const unsigned long __user *from, const unsigned long __user *to);`
pub const SYS_MIGRATE_PAGES: SyscallNumber = 238;
/// `long sys_move_pages(pid_t pid, unsigned long nr_pages, const void __user * __user *pages, const int __user *nodes, int __user *status, int flags);`
pub const SYS_MOVE_PAGES: SyscallNumber = 239;
/// `long sys_rt_tgsigqueueinfo(pid_t tgid, pid_t pid, int sig, siginfo_t __user *uinfo);`
pub const SYS_RT_TGSIGQUEUEINFO: SyscallNumber = 240;
/// `long sys_perf_event_open(`
pub const SYS_PERF_EVENT_OPEN: SyscallNumber = 241;
/// `long sys_accept4(int, struct sockaddr __user *, int __user *, int);`
pub const SYS_ACCEPT4: SyscallNumber = 242;
/// `long sys_recvmmsg_time32(int fd, struct mmsghdr __user *msg, unsigned int vlen, unsigned flags, struct old_timespec32 __user *timeout);`
pub const SYS_RECVMMSG_TIME32: SyscallNumber = 243;
/// `long sys_wait4(pid_t pid, int __user *stat_addr, int options, struct rusage __user *ru);`
pub const SYS_WAIT4: SyscallNumber = 260;
/// `long sys_prlimit64(pid_t pid, unsigned int resource, const struct rlimit64 __user *new_rlim, struct rlimit64 __user *old_rlim);`
pub const SYS_PRLIMIT64: SyscallNumber = 261;
/// `long sys_fanotify_init(unsigned int flags, unsigned int event_f_flags);`
pub const SYS_FANOTIFY_INIT: SyscallNumber = 262;
/// `long sys_fanotify_mark(int fanotify_fd, unsigned int flags, u64 mask, int fd, const char __user *pathname);`
pub const SYS_FANOTIFY_MARK: SyscallNumber = 263;
/// `long sys_name_to_handle_at(int dfd, const char __user *name, struct file_handle __user *handle, int __user *mnt_id, int flag);`
pub const SYS_NAME_TO_HANDLE_AT: SyscallNumber = 264;
/// `long sys_open_by_handle_at(int mountdirfd, struct file_handle __user *handle, int flags);`
pub const SYS_OPEN_BY_HANDLE_AT: SyscallNumber = 265;
/// `long sys_clock_adjtime(clockid_t which_clock, struct __kernel_timex __user *tx);`
pub const SYS_CLOCK_ADJTIME: SyscallNumber = 266;
/// `long sys_syncfs(int fd);`
pub const SYS_SYNCFS: SyscallNumber = 267;
/// `long sys_setns(int fd, int nstype);`
pub const SYS_SETNS: SyscallNumber = 268;
/// `long sys_sendmmsg(int fd, struct mmsghdr __user *msg, unsigned int vlen, unsigned flags);`
pub const SYS_SENDMMSG: SyscallNumber = 269;
/// `long sys_process_vm_readv(pid_t pid, const struct iovec __user *lvec, unsigned long liovcnt, const struct iovec __user *rvec, unsigned long riovcnt, unsigned long flags);`
pub const SYS_PROCESS_VM_READV: SyscallNumber = 270;
/// `long sys_process_vm_writev(pid_t pid, const struct iovec __user *lvec, unsigned long liovcnt, const struct iovec __user *rvec, unsigned long riovcnt, unsigned long flags);`
pub const SYS_PROCESS_VM_WRITEV: SyscallNumber = 271;
/// `long sys_kcmp(pid_t pid1, pid_t pid2, int type, unsigned long idx1, unsigned long idx2);`
pub const SYS_KCMP: SyscallNumber = 272;
/// `long sys_finit_module(int fd, const char __user *uargs, int flags);`
pub const SYS_FINIT_MODULE: SyscallNumber = 273;
/// `long sys_sched_setattr(pid_t pid, struct sched_attr __user *attr, unsigned int flags);`
pub const SYS_SCHED_SETATTR: SyscallNumber = 274;
/// `long sys_sched_getattr(pid_t pid, struct sched_attr __user *attr, unsigned int size, unsigned int flags);`
pub const SYS_SCHED_GETATTR: SyscallNumber = 275;
/// `long sys_renameat2(int olddfd, const char __user *oldname, int newdfd, const char __user *newname, unsigned int flags);`
pub const SYS_RENAMEAT2: SyscallNumber = 276;
/// `long sys_seccomp(unsigned int op, unsigned int flags, void __user *uargs);`
pub const SYS_SECCOMP: SyscallNumber = 277;
/// `long sys_getrandom(char __user *buf, size_t count, unsigned int flags);`
pub const SYS_GETRANDOM: SyscallNumber = 278;
/// `long sys_memfd_create(const char __user *uname_ptr, unsigned int flags);`
pub const SYS_MEMFD_CREATE: SyscallNumber = 279;
/// `long sys_bpf(int cmd, union bpf_attr *attr, unsigned int size);`
pub const SYS_BPF: SyscallNumber = 280;
/// `long sys_execveat(int dfd, const char __user *filename, const char __user *const __user *argv, const char __user *const __user *envp, int flags);`
pub const SYS_EXECVEAT: SyscallNumber = 281;
/// `long sys_userfaultfd(int flags);`
pub const SYS_USERFAULTFD: SyscallNumber = 282;
/// `long sys_membarrier(int cmd, unsigned int flags, int cpu_id);`
pub const SYS_MEMBARRIER: SyscallNumber = 283;
/// `long sys_mlock2(unsigned long start, size_t len, int flags);`
pub const SYS_MLOCK2: SyscallNumber = 284;
/// `long sys_copy_file_range(int fd_in, loff_t __user *off_in, int fd_out, loff_t __user *off_out, size_t len, unsigned int flags);`
pub const SYS_COPY_FILE_RANGE: SyscallNumber = 285;
/// `long sys_preadv2(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h, rwf_t flags);`
pub const SYS_PREADV2: SyscallNumber = 286;
/// `long sys_pwritev2(unsigned long fd, const struct iovec __user *vec, unsigned long vlen, unsigned long pos_l, unsigned long pos_h, rwf_t flags);`
pub const SYS_PWRITEV2: SyscallNumber = 287;
/// `long sys_pkey_mprotect(unsigned long start, size_t len, unsigned long prot, int pkey);`
pub const SYS_PKEY_MPROTECT: SyscallNumber = 288;
/// `long sys_pkey_alloc(unsigned long flags, unsigned long init_val);`
pub const SYS_PKEY_ALLOC: SyscallNumber = 289;
/// `long sys_pkey_free(int pkey);`
pub const SYS_PKEY_FREE: SyscallNumber = 290;
/// `long sys_statx(int dfd, const char __user *path, unsigned flags, unsigned mask, struct statx __user *buffer);`
pub const SYS_STATX: SyscallNumber = 291;
/// `long sys_io_pgetevents(aio_context_t ctx_id, long min_nr, long nr, struct io_event __user *events, struct __kernel_timespec __user *timeout, const struct __aio_sigset *sig);`
pub const SYS_IO_PGETEVENTS: SyscallNumber = 292;
/// `long sys_rseq(struct rseq __user *rseq, uint32_t rseq_len, int flags, uint32_t sig);`
pub const SYS_RSEQ: SyscallNumber = 293;
/// `long sys_kexec_file_load(int kernel_fd, int initrd_fd, unsigned long cmdline_len, const char __user *cmdline_ptr, unsigned long flags);`
pub const SYS_KEXEC_FILE_LOAD: SyscallNumber = 294;
/// `long sys_pidfd_send_signal(int pidfd, int sig, siginfo_t __user *info, unsigned int flags);`
pub const SYS_PIDFD_SEND_SIGNAL: SyscallNumber = 424;
/// `long sys_io_uring_setup(u32 entries, struct io_uring_params __user *p);`
pub const SYS_IO_URING_SETUP: SyscallNumber = 425;
/// `long sys_io_uring_enter(unsigned int fd, u32 to_submit, u32 min_complete, u32 flags, const sigset_t __user *sig, size_t sigsz);`
pub const SYS_IO_URING_ENTER: SyscallNumber = 426;
/// `long sys_io_uring_register(unsigned int fd, unsigned int op, void __user *arg, unsigned int nr_args);`
pub const SYS_IO_URING_REGISTER: SyscallNumber = 427;
/// `long sys_open_tree(int dfd, const char __user *path, unsigned flags);`
pub const SYS_OPEN_TREE: SyscallNumber = 428;
/// `long sys_move_mount(int from_dfd, const char __user *from_path, int to_dfd, const char __user *to_path, unsigned int ms_flags);`
pub const SYS_MOVE_MOUNT: SyscallNumber = 429;
/// `long sys_fsopen(const char __user *fs_name, unsigned int flags);`
pub const SYS_FSOPEN: SyscallNumber = 430;
/// `long sys_fsconfig(int fs_fd, unsigned int cmd, const char __user *key, const void __user *value, int aux);`
pub const SYS_FSCONFIG: SyscallNumber = 431;
/// `long sys_fsmount(int fs_fd, unsigned int flags, unsigned int ms_flags);`
pub const SYS_FSMOUNT: SyscallNumber = 432;
/// `long sys_fspick(int dfd, const char __user *path, unsigned int flags);`
pub const SYS_FSPICK: SyscallNumber = 433;
/// `long sys_pidfd_open(pid_t pid, unsigned int flags);`
pub const SYS_PIDFD_OPEN: SyscallNumber = 434;
/// `long sys_clone3(struct clone_args __user *uargs, size_t size);`
pub const SYS_CLONE3: SyscallNumber = 435;
/// `long sys_close_range(unsigned int fd, unsigned int max_fd, unsigned int flags);`
pub const SYS_CLOSE_RANGE: SyscallNumber = 436;
/// `long sys_openat2(int dfd, const char __user *filename, struct open_how *how, size_t size);`
pub const SYS_OPENAT2: SyscallNumber = 437;
/// `long sys_pidfd_getfd(int pidfd, int fd, unsigned int flags);`
pub const SYS_PIDFD_GETFD: SyscallNumber = 438;
/// `long sys_faccessat2(int dfd, const char __user *filename, int mode, int flags);`
pub const SYS_FACCESSAT2: SyscallNumber = 439;
/// `long sys_process_madvise(int pidfd, const struct iovec __user *vec, size_t vlen, int behavior, unsigned int flags);`
pub const SYS_PROCESS_MADVISE: SyscallNumber = 440;
