use clap::Parser;
use nterr_status::StatusCode;
use pretty_assertions::assert_eq;

use super::*;
use crate::cli::SeverityFilter;

fn invoke(args: &[&str]) -> Rendered {
	let cli = Cli::try_parse_from(std::iter::once("nterr").chain(args.iter().copied())).unwrap();
	run(&cli, StatusRegistry::global()).unwrap()
}

#[test]
fn parse_resolve_codes() {
	let cli = Cli::try_parse_from(["nterr", "resolve", "0xC0000034", "258", "-1073741772"]).unwrap();
	match cli.command {
		Command::Resolve { codes } => assert_eq!(
			codes,
			[StatusCode(0xC000_0034), StatusCode(258), StatusCode(0xC000_0034)]
		),
		other => panic!("expected resolve, got {other:?}"),
	}
}

#[test]
fn parse_rejects_bad_code() {
	assert!(Cli::try_parse_from(["nterr", "resolve", "0xZZ"]).is_err());
	assert!(Cli::try_parse_from(["nterr", "resolve"]).is_err());
}

#[test]
fn parse_global_flags_after_subcommand() {
	let cli = Cli::try_parse_from(["nterr", "list", "--severity", "warning", "--json", "-v"]).unwrap();
	assert!(cli.json);
	assert!(cli.verbose);
	match cli.command {
		Command::List { severity } => assert_eq!(severity, Some(SeverityFilter::Warning)),
		other => panic!("expected list, got {other:?}"),
	}
}

#[test]
fn resolve_text() {
	let out = invoke(&["resolve", "0xC0000034"]);
	assert!(out.complete);
	assert_eq!(
		out.text,
		"0xC0000034  error  facility=0x000 code=0x0034\n  dos:     2\n  errno:   2 (ENOENT)\n  message: Object Name not found.\n"
	);
}

#[test]
fn resolve_unknown_is_incomplete() {
	let out = invoke(&["resolve", "0x102", "0xFFFFFFFF"]);
	assert!(!out.complete);
	assert!(out.text.starts_with("0x00000102  success"));
	assert!(out.text.ends_with("unknown status 0xFFFFFFFF\n"));
}

#[test]
fn resolve_multiline_message_is_indented() {
	let out = invoke(&["resolve", "0xC0000022"]);
	assert!(
		out.text
			.contains("  message: {Access Denied}\n           A process has requested access")
	);
}

#[test]
fn resolve_json() {
	let out = invoke(&["--json", "resolve", "258", "0xFFFFFFFF"]);
	let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
	assert_eq!(value[0]["status"], 258);
	assert_eq!(value[0]["severity"], "success");
	assert_eq!(value[0]["dos_error"], 1460);
	assert_eq!(value[0]["posix_error"], 138);
	assert_eq!(value[0]["posix_name"], "ETIMEDOUT");
	assert_eq!(value[0]["message"], "STATUS_TIMEOUT");
	assert_eq!(value[1]["found"], false);
	assert!(value[1].get("message").is_none());
}

#[test]
fn format_substitutes_args() {
	let out = invoke(&["format", "0xC0000361", "C:\\app.exe"]);
	assert!(out.complete);
	assert_eq!(
		out.text,
		"Access to C:\\app.exe has been restricted by your Administrator by the default software restriction policy level.\n"
	);
}

#[test]
fn format_takes_hyphenated_args_literally() {
	let out = invoke(&["format", "0xC0000361", "-x"]);
	assert_eq!(
		out.text,
		"Access to -x has been restricted by your Administrator by the default software restriction policy level.\n"
	);

	let cli =
		Cli::try_parse_from(["nterr", "-v", "format", "0xC0000362", "app.exe", "--json", "-1"])
			.unwrap();
	assert!(cli.verbose);
	assert!(!cli.json);
	match cli.command {
		Command::Format { code, args } => {
			assert_eq!(code, StatusCode(0xC000_0362));
			assert_eq!(args, ["app.exe", "--json", "-1"]);
		}
		other => panic!("expected format, got {other:?}"),
	}
}

#[test]
fn format_unknown() {
	let out = invoke(&["format", "0xFFFFFFFF", "x"]);
	assert!(!out.complete);
	assert_eq!(out.text, "unknown status 0xFFFFFFFF\n");
}

#[test]
fn list_filters_by_severity() {
	let out = invoke(&["list", "--severity", "warning"]);
	assert!(!out.text.is_empty());
	assert!(out.text.lines().all(|l| l.starts_with("0x8")));
	assert!(out.text.contains("0x80000005  warning"));
}

#[test]
fn list_skips_shadowed_records() {
	let out = invoke(&["list", "--severity", "success"]);
	assert!(out.text.contains("STATUS_SUCCESS"));
	assert!(!out.text.contains("STATUS_WAIT_0"));
	assert_eq!(
		out.text.lines().count(),
		StatusRegistry::global()
			.authoritative()
			.filter(|r| r.code().severity() == Severity::Success)
			.count()
	);
}

#[test]
fn shadowed_lists_aliases() {
	let out = invoke(&["shadowed"]);
	assert!(out.text.contains("\"STATUS_SUCCESS\" shadows"));
	assert!(out.text.contains("\"STATUS_WAIT_0\""));

	let json = invoke(&["shadowed", "--json"]);
	let value: serde_json::Value = serde_json::from_str(&json.text).unwrap();
	assert_eq!(value[0]["status"], 0);
	assert_eq!(value[0]["winner_message"], "STATUS_SUCCESS");
	assert_eq!(value[0]["shadowed_message"], "STATUS_WAIT_0");
}

#[test]
fn status_shaped_dos_error_renders_as_hex() {
	let out = invoke(&["resolve", "0x80000003"]);
	assert!(out.text.contains("  dos:     0x80000003\n"));
}
