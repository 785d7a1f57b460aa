//! Required baseline data: the constant names that must exist in any
//! valid resolved mapping, per platform family. Pure configuration,
//! injected into the validator — values are never checked, only presence.

/// Error numbers every Linux architecture must resolve.
pub const LINUX_REQUIRED_ERRNOS: &[&str] = &[
    "EPERM", "ENOENT", "EEXIST", "EISDIR", "ENOTDIR", "ESRCH", "EINTR", "EIO", "ENXIO", "E2BIG",
    "ENOEXEC", "EACCES", "EAGAIN", "EALREADY", "EBADF", "EBUSY", "ECHILD", "EDEADLK", "EFAULT",
    "EFBIG", "EINPROGRESS", "EINVAL", "ENOTBLK", "ENFILE", "EMFILE", "ENOTTY", "EXDEV", "ETXTBSY",
    "ENOSPC", "ESPIPE", "EROFS", "EMLINK", "EPIPE", "EDOM", "ERANGE", "ENOTSOCK", "EDESTADDRREQ",
    "EMSGSIZE", "EPROTOTYPE", "ENOPROTOOPT", "EPROTONOSUPPORT", "ESOCKTNOSUPPORT", "EOPNOTSUPP",
    "EPFNOSUPPORT", "EAFNOSUPPORT", "EADDRINUSE", "EADDRNOTAVAIL", "ENETDOWN", "ENETUNREACH",
    "ENETRESET", "ECONNABORTED", "ECONNRESET", "ENOBUFS", "EISCONN", "ENOTCONN", "ESHUTDOWN",
    "ETOOMANYREFS", "ETIMEDOUT", "ECONNREFUSED", "ELOOP", "ENAMETOOLONG", "EHOSTDOWN",
    "EHOSTUNREACH", "ENOTEMPTY", "EUSERS", "EDQUOT", "ESTALE", "EREMOTE", "ENOLCK", "ENOSYS",
    "EIDRM", "ENOMSG", "EOVERFLOW", "ECANCELED", "EILSEQ", "EBADMSG", "EMULTIHOP", "ENOLINK",
    "EPROTO", "ENOMEM", "ENODEV", "EBADE", "EBADFD", "EBADR", "EBADRQC", "EBADSLT", "ECHRNG",
    "ECOMM", "EHWPOISON", "EISNAM", "EKEYEXPIRED", "EKEYREJECTED", "EKEYREVOKED", "ENOKEY",
    "EREMOTEIO", "EL2HLT", "EL2NSYNC", "EL3HLT", "EL3RST", "ELNRNG", "EUNATCH", "ENOCSI",
    "EXFULL", "ENOANO", "EBFONT", "ENOTNAM", "ERFKILL", "ENAVAIL", "EUCLEAN", "ESTRPIPE",
    "ELIBEXEC", "ELIBSCN", "ELIBMAX", "ELIBBAD", "ELIBACC", "EDOTDOT", "ERESTART", "ENOTUNIQ",
    "EADV", "ESRMNT", "ENOPKG", "ENONET", "EREMCHG", "ETIME", "ENODATA", "ENOSR", "ENOSTR",
    "ENOMEDIUM", "EMEDIUMTYPE", "ENOTRECOVERABLE", "EOWNERDEAD", "EDEADLOCK", "EWOULDBLOCK",
];

/// Error numbers a FreeBSD errno.h must resolve.
pub const FREEBSD_REQUIRED_ERRNOS: &[&str] = &[
    "EPERM", "ENOENT", "EEXIST", "EISDIR", "ENOTDIR", "ESRCH", "EINTR", "EIO", "ENXIO", "E2BIG",
    "ENOEXEC", "EACCES", "EAGAIN", "EALREADY", "EBADF", "EBUSY", "ECHILD", "EDEADLK", "EFAULT",
    "EFBIG", "EINPROGRESS", "EINVAL", "ENOTBLK", "ENFILE", "EMFILE", "ENOTTY", "EXDEV", "ETXTBSY",
    "ENOSPC", "ESPIPE", "EROFS", "EMLINK", "EPIPE", "EDOM", "ERANGE", "ENOTSOCK", "EDESTADDRREQ",
    "EMSGSIZE", "EPROTOTYPE", "ENOPROTOOPT", "EPROTONOSUPPORT", "ESOCKTNOSUPPORT", "EOPNOTSUPP",
    "EPFNOSUPPORT", "EAFNOSUPPORT", "EADDRINUSE", "EADDRNOTAVAIL", "ENETDOWN", "ENETUNREACH",
    "ENETRESET", "ECONNABORTED", "ECONNRESET", "ENOBUFS", "EISCONN", "ENOTCONN", "ESHUTDOWN",
    "ETOOMANYREFS", "ETIMEDOUT", "ECONNREFUSED", "ELOOP", "ENAMETOOLONG", "EHOSTDOWN",
    "EHOSTUNREACH", "ENOTEMPTY", "EUSERS", "EDQUOT", "ESTALE", "EREMOTE", "ENOLCK", "ENOSYS",
    "EIDRM", "ENOMSG", "EOVERFLOW", "ECANCELED", "EILSEQ", "EBADMSG", "EMULTIHOP", "ENOLINK",
    "EPROTO", "ENOMEM", "ENODEV", "ENOATTR", "ENEEDAUTH", "EAUTH", "EFTYPE", "EPROGUNAVAIL",
    "EPROGMISMATCH", "EPROCUNAVAIL", "ERPCMISMATCH", "EBADRPC", "EPROCLIM", "EDOOFUS",
    "ENOTCAPABLE", "ECAPMODE", "ENOTRECOVERABLE", "EOWNERDEAD", "ENOTSUP", "EWOULDBLOCK",
    "EINTEGRITY",
];

/// Error numbers a macOS errno.h must resolve.
pub const MACOS_REQUIRED_ERRNOS: &[&str] = &[
    "EPERM", "ENOENT", "EEXIST", "EISDIR", "ENOTDIR", "ESRCH", "EINTR", "EIO", "ENXIO", "E2BIG",
    "ENOEXEC", "EACCES", "EAGAIN", "EALREADY", "EBADF", "EBUSY", "ECHILD", "EDEADLK", "EFAULT",
    "EFBIG", "EINPROGRESS", "EINVAL", "ENOTBLK", "ENFILE", "EMFILE", "ENOTTY", "EXDEV", "ETXTBSY",
    "ENOSPC", "ESPIPE", "EROFS", "EMLINK", "EPIPE", "EDOM", "ERANGE", "ENOTSOCK", "EDESTADDRREQ",
    "EMSGSIZE", "EPROTOTYPE", "ENOPROTOOPT", "EPROTONOSUPPORT", "ESOCKTNOSUPPORT", "EOPNOTSUPP",
    "EPFNOSUPPORT", "EAFNOSUPPORT", "EADDRINUSE", "EADDRNOTAVAIL", "ENETDOWN", "ENETUNREACH",
    "ENETRESET", "ECONNABORTED", "ECONNRESET", "ENOBUFS", "EISCONN", "ENOTCONN", "ESHUTDOWN",
    "ETOOMANYREFS", "ETIMEDOUT", "ECONNREFUSED", "ELOOP", "ENAMETOOLONG", "EHOSTDOWN",
    "EHOSTUNREACH", "ENOTEMPTY", "EUSERS", "EDQUOT", "ESTALE", "EREMOTE", "ENOLCK", "ENOSYS",
    "EIDRM", "ENOMSG", "EOVERFLOW", "ECANCELED", "EILSEQ", "EBADMSG", "EMULTIHOP", "ENOLINK",
    "EPROTO", "ENOMEM", "ENODEV", "ENOATTR", "ENEEDAUTH", "EAUTH", "EFTYPE", "EPROGUNAVAIL",
    "EPROGMISMATCH", "EPROCUNAVAIL", "ERPCMISMATCH", "EBADRPC", "EPROCLIM", "ENOPOLICY",
    "EQFULL", "EBADMACHO", "ESHLIBVERS", "EBADARCH", "EBADEXEC", "EDEVERR", "EPWROFF",
    "ENOTRECOVERABLE", "EOWNERDEAD", "ENODATA", "ENOTSUP", "ENOSTR", "ETIME", "EWOULDBLOCK",
    "ENOSR",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_distinct(names: &[&str]) {
        let mut sorted: Vec<_> = names.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len());
    }

    #[test]
    fn test_baselines_have_no_duplicates() {
        assert_distinct(LINUX_REQUIRED_ERRNOS);
        assert_distinct(FREEBSD_REQUIRED_ERRNOS);
        assert_distinct(MACOS_REQUIRED_ERRNOS);
    }

    #[test]
    fn test_baselines_look_like_errnos() {
        for name in LINUX_REQUIRED_ERRNOS
            .iter()
            .chain(FREEBSD_REQUIRED_ERRNOS)
            .chain(MACOS_REQUIRED_ERRNOS)
        {
            assert!(name.starts_with('E'), "{name} is not an errno name");
        }
    }
}
