//! Reports printed by each subcommand, as text or JSON.

use std::borrow::Cow;
use std::fmt::Write as _;

use nterr_status::{Collision, ResolvedStatus, Severity, StatusCode, StatusRecord};
use serde::Serialize;

/// One resolved (or unknown) status code.
#[derive(Debug, Serialize)]
pub struct ResolveReport {
	pub status: StatusCode,
	pub severity: Severity,
	pub facility: u16,
	pub code: u16,
	pub found: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dos_error: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub posix_error: Option<i32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub posix_name: Option<&'static str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub message: Option<&'static str>,
}

impl ResolveReport {
	pub fn new(status: StatusCode, resolved: Option<ResolvedStatus>) -> Self {
		Self {
			status,
			severity: status.severity(),
			facility: status.facility(),
			code: status.code(),
			found: resolved.is_some(),
			dos_error: resolved.map(|r| r.dos_error),
			posix_error: resolved.map(|r| r.posix_error),
			posix_name: resolved.and_then(|r| r.posix_name()),
			message: resolved.map(|r| r.message),
		}
	}

	pub fn render_text(&self, out: &mut String) {
		let Some(message) = self.message else {
			let _ = writeln!(out, "{}", unknown_status(self.status));
			return;
		};

		let _ = writeln!(
			out,
			"{}  {}  facility=0x{:03X} code=0x{:04X}",
			self.status, self.severity, self.facility, self.code
		);
		if let Some(dos) = self.dos_error {
			let _ = writeln!(out, "  dos:     {}", dos_label(dos));
		}
		if let Some(errno) = self.posix_error {
			match self.posix_name {
				Some(name) => {
					let _ = writeln!(out, "  errno:   {errno} ({name})");
				}
				None => {
					let _ = writeln!(out, "  errno:   {errno}");
				}
			}
		}
		let _ = writeln!(out, "  message: {}", indent_continuation(message, 11));
	}
}

/// A message with insertion strings applied.
#[derive(Debug, Serialize)]
pub struct FormatReport {
	pub status: StatusCode,
	pub message: Cow<'static, str>,
}

impl FormatReport {
	pub fn render_text(&self, out: &mut String) {
		let _ = writeln!(out, "{}", self.message);
	}
}

/// One authoritative table record.
#[derive(Debug, Serialize)]
pub struct ListEntry {
	pub status: StatusCode,
	pub severity: Severity,
	pub dos_error: u32,
	pub posix_error: i32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub posix_name: Option<&'static str>,
	pub message: &'static str,
}

impl From<&StatusRecord> for ListEntry {
	fn from(record: &StatusRecord) -> Self {
		let resolved = record.resolved();
		Self {
			status: record.code(),
			severity: record.code().severity(),
			dos_error: record.dos_error,
			posix_error: record.posix_error,
			posix_name: resolved.posix_name(),
			message: record.message,
		}
	}
}

impl ListEntry {
	pub fn render_text(&self, out: &mut String) {
		let _ = writeln!(
			out,
			"{}  {:<13}  {:>10}  {:<15}  {}",
			self.status,
			self.severity,
			dos_label(self.dos_error),
			self.posix_name.unwrap_or("-"),
			self.message.escape_debug()
		);
	}
}

/// A record that lost its status to an earlier one.
#[derive(Debug, Serialize)]
pub struct ShadowedEntry {
	pub status: StatusCode,
	pub winner: usize,
	pub shadowed: usize,
	pub winner_message: &'static str,
	pub shadowed_message: &'static str,
}

impl ShadowedEntry {
	pub fn new(collision: &Collision<u32>, records: &[StatusRecord]) -> Self {
		Self {
			status: StatusCode(collision.key),
			winner: collision.winner,
			shadowed: collision.loser(),
			winner_message: records[collision.winner].message,
			shadowed_message: records[collision.loser()].message,
		}
	}

	pub fn render_text(&self, out: &mut String) {
		let _ = writeln!(
			out,
			"{}  #{} {:?} shadows #{} {:?}",
			self.status,
			self.winner,
			self.winner_message,
			self.shadowed,
			self.shadowed_message
		);
	}
}

/// Caller-side fallback line for a status missing from the table.
pub fn unknown_status(status: StatusCode) -> String {
	format!("unknown status {status}")
}

/// Renders a DOS error, in hex when it is shaped like a status value.
fn dos_label(dos: u32) -> String {
	if dos > 0xFFFF {
		format!("0x{dos:08X}")
	} else {
		dos.to_string()
	}
}

fn indent_continuation(message: &str, width: usize) -> Cow<'_, str> {
	if !message.contains('\n') {
		return Cow::Borrowed(message);
	}
	let pad = format!("\n{:width$}", "");
	Cow::Owned(message.trim_end_matches('\n').replace('\n', &pad))
}
