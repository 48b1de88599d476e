//! POSIX error numbers in the numbering the status table uses.
//!
//! Values follow the Microsoft C runtime `errno.h`: the classic set from 1 to
//! 42, `STRUNCATE`, and the POSIX supplement from 100 to 140. They differ from
//! Linux numbering above 34, so compare against these constants rather than
//! `libc`.

macro_rules! errno_table {
	($($name:ident = $value:literal,)*) => {
		$(
			#[doc = concat!("`", stringify!($name), "`")]
			pub const $name: i32 = $value;
		)*

		/// Returns the symbolic name of an error number, if it has one.
		///
		/// `0` has no name: it means no POSIX equivalent is defined.
		pub fn name(errno: i32) -> Option<&'static str> {
			match errno {
				$($value => Some(stringify!($name)),)*
				_ => None,
			}
		}

		/// Every known error number with its name, ascending.
		pub const ALL: &[(i32, &str)] = &[$(($value, stringify!($name)),)*];
	};
}

errno_table! {
	EPERM = 1,
	ENOENT = 2,
	ESRCH = 3,
	EINTR = 4,
	EIO = 5,
	ENXIO = 6,
	E2BIG = 7,
	ENOEXEC = 8,
	EBADF = 9,
	ECHILD = 10,
	EAGAIN = 11,
	ENOMEM = 12,
	EACCES = 13,
	EFAULT = 14,
	EBUSY = 16,
	EEXIST = 17,
	EXDEV = 18,
	ENODEV = 19,
	ENOTDIR = 20,
	EISDIR = 21,
	EINVAL = 22,
	ENFILE = 23,
	EMFILE = 24,
	ENOTTY = 25,
	EFBIG = 27,
	ENOSPC = 28,
	ESPIPE = 29,
	EROFS = 30,
	EMLINK = 31,
	EPIPE = 32,
	EDOM = 33,
	ERANGE = 34,
	EDEADLK = 36,
	ENAMETOOLONG = 38,
	ENOLCK = 39,
	ENOSYS = 40,
	ENOTEMPTY = 41,
	EILSEQ = 42,
	STRUNCATE = 80,
	EADDRINUSE = 100,
	EADDRNOTAVAIL = 101,
	EAFNOSUPPORT = 102,
	EALREADY = 103,
	EBADMSG = 104,
	ECANCELED = 105,
	ECONNABORTED = 106,
	ECONNREFUSED = 107,
	ECONNRESET = 108,
	EDESTADDRREQ = 109,
	EHOSTUNREACH = 110,
	EIDRM = 111,
	EINPROGRESS = 112,
	EISCONN = 113,
	ELOOP = 114,
	EMSGSIZE = 115,
	ENETDOWN = 116,
	ENETRESET = 117,
	ENETUNREACH = 118,
	ENOBUFS = 119,
	ENODATA = 120,
	ENOLINK = 121,
	ENOMSG = 122,
	ENOPROTOOPT = 123,
	ENOSR = 124,
	ENOSTR = 125,
	ENOTCONN = 126,
	ENOTRECOVERABLE = 127,
	ENOTSOCK = 128,
	ENOTSUP = 129,
	EOPNOTSUPP = 130,
	EOTHER = 131,
	EOVERFLOW = 132,
	EOWNERDEAD = 133,
	EPROTO = 134,
	EPROTONOSUPPORT = 135,
	EPROTOTYPE = 136,
	ETIME = 137,
	ETIMEDOUT = 138,
	ETXTBSY = 139,
	EWOULDBLOCK = 140,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_names() {
		assert_eq!(name(ENOENT), Some("ENOENT"));
		assert_eq!(name(138), Some("ETIMEDOUT"));
		assert_eq!(name(EWOULDBLOCK), Some("EWOULDBLOCK"));
		assert_eq!(name(0), None);
		assert_eq!(name(15), None);
		assert_eq!(name(-1), None);
	}

	#[test]
	fn test_all_is_ascending() {
		assert!(ALL.windows(2).all(|w| w[0].0 < w[1].0));
		assert!(ALL.iter().all(|&(value, n)| name(value) == Some(n)));
	}
}
