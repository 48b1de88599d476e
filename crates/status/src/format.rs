use std::borrow::Cow;

/// Substitutes positional `%1`..`%9` placeholders in a message template.
///
/// `%N` is replaced by `args[N - 1]`. A placeholder with no matching argument
/// is kept verbatim. `%%` is an escaped percent and is kept as-is together
/// with whatever follows it, so `%%1` never substitutes. Every other `%`
/// sequence (`%hs`, `%ld`, `%08lx`, a trailing `%`) is literal text.
///
/// Never fails. Returns the template borrowed when nothing was substituted.
///
/// ```
/// use nterr_status::format_message;
///
/// let text = format_message("Insert the diskette for drive %1.", &["A:"]);
/// assert_eq!(text, "Insert the diskette for drive A:.");
/// ```
pub fn format_message<'t, S: AsRef<str>>(template: &'t str, args: &[S]) -> Cow<'t, str> {
	let bytes = template.as_bytes();
	let mut out: Option<String> = None;
	// Template bytes before this offset are already in `out`.
	let mut flushed = 0;
	let mut pos = 0;

	while let Some(off) = template[pos..].find('%') {
		let at = pos + off;
		match bytes.get(at + 1) {
			Some(b'%') => pos = at + 2,
			Some(&digit @ b'1'..=b'9') => {
				if let Some(arg) = args.get(usize::from(digit - b'1')) {
					let buf = out.get_or_insert_with(|| String::with_capacity(template.len()));
					buf.push_str(&template[flushed..at]);
					buf.push_str(arg.as_ref());
					flushed = at + 2;
				}
				pos = at + 2;
			}
			_ => pos = at + 1,
		}
	}

	match out {
		Some(mut buf) => {
			buf.push_str(&template[flushed..]);
			Cow::Owned(buf)
		}
		None => Cow::Borrowed(template),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	const NONE: &[&str] = &[];

	#[test]
	fn test_identity_without_placeholders() {
		let template = "The requested operation was successful.";
		let out = format_message(template, NONE);
		assert!(matches!(out, Cow::Borrowed(_)));
		assert_eq!(out, template);
	}

	#[test]
	fn test_positional_substitution() {
		assert_eq!(
			format_message("Insert the diskette for drive %1.", &["A:"]),
			"Insert the diskette for drive A:."
		);
		assert_eq!(
			format_message("%2 then %1, %2 again", &["one", "two"]),
			"two then one, two again"
		);
	}

	#[test]
	fn test_missing_argument_is_verbatim() {
		assert_eq!(
			format_message("Volume %1 on drive %2.", &["DATA"]),
			"Volume DATA on drive %2."
		);
		let out = format_message("Drive %1 is locked.", NONE);
		assert!(matches!(out, Cow::Borrowed(_)));
	}

	#[test]
	fn test_printf_remnants_are_literal() {
		let template = "The instruction at 0x%p referenced memory at 0x%p. The memory could not be %s.";
		assert_eq!(format_message(template, &["x"]), template);
		assert_eq!(
			format_message("The ordinal %ld could not be located in %hs, see %1.", &["log"]),
			"The ordinal %ld could not be located in %hs, see log."
		);
	}

	#[test]
	fn test_escaped_percent() {
		assert_eq!(format_message("100%% of %1", &["disk"]), "100%% of disk");
		assert_eq!(format_message("%%1", &["x"]), "%%1");
	}

	#[test]
	fn test_single_digit_only() {
		assert_eq!(format_message("%10", &["a"]), "a0");
		assert_eq!(format_message("%0 stays", &["a"]), "%0 stays");
	}

	#[test]
	fn test_trailing_percent() {
		assert_eq!(format_message("50%", &["a"]), "50%");
		assert_eq!(format_message("%", NONE), "%");
	}

	#[test]
	fn test_paragraph_breaks_preserved() {
		let template = "{Drive Not Ready}\nThe drive %1 is not ready.\n\nCheck the drive and retry.\r\n\r\nDone.";
		assert_eq!(
			format_message(template, &["C:"]),
			"{Drive Not Ready}\nThe drive C: is not ready.\n\nCheck the drive and retry.\r\n\r\nDone."
		);
	}

	#[test]
	fn test_non_ascii_text() {
		assert_eq!(format_message("Lecteur %1 occupé — %2", &["É:", "ü"]), "Lecteur É: occupé — ü");
	}

	#[test]
	fn test_owned_args() {
		let args = vec![String::from("\\\\server\\share")];
		assert_eq!(
			format_message("The network path %1 was not found.", &args),
			"The network path \\\\server\\share was not found."
		);
	}

	fn count_substitutions(template: &str, argc: usize) -> usize {
		let bytes = template.as_bytes();
		let mut count = 0;
		let mut i = 0;
		while i < bytes.len() {
			if bytes[i] == b'%' {
				match bytes.get(i + 1) {
					Some(b'%') => i += 2,
					Some(&d @ b'1'..=b'9') => {
						if usize::from(d - b'1') < argc {
							count += 1;
						}
						i += 2;
					}
					_ => i += 1,
				}
			} else {
				i += 1;
			}
		}
		count
	}

	proptest! {
		#[test]
		fn never_panics_and_stays_bounded(
			template in "[a-z %0-9hsl\n]{0,64}",
			args in proptest::collection::vec("[A-Za-z:%0-9é]{0,12}", 0..10),
		) {
			let out = format_message(&template, &args);
			let longest = args.iter().map(String::len).max().unwrap_or(0);
			let subs = count_substitutions(&template, args.len());
			prop_assert!(out.len() <= template.len() + subs * longest);
		}

		#[test]
		fn templates_without_percent_are_identity(
			template in "[^%]{0,64}",
			args in proptest::collection::vec(".{0,8}", 0..4),
		) {
			let out = format_message(&template, &args);
			prop_assert!(matches!(out, Cow::Borrowed(_)));
			prop_assert_eq!(out.as_ref(), template.as_str());
		}
	}
}
