//! `nterr` binary.
//!
//! Stands in for a caller whose operating system could not describe a
//! status code: it asks the fallback table and prints what it finds.

mod cli;
mod output;
#[cfg(test)]
mod tests;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use nterr_status::{Severity, StatusRegistry};
use output::{FormatReport, ListEntry, ResolveReport, ShadowedEntry};
use serde::Serialize;
use tracing::{debug, warn};

/// Output of one invocation, ready to print.
#[derive(Debug)]
struct Rendered {
	text: String,
	/// False when some requested status was not in the table.
	complete: bool,
}

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let rendered = run(&cli, StatusRegistry::global())?;

	let mut stdout = std::io::stdout().lock();
	stdout
		.write_all(rendered.text.as_bytes())
		.context("failed to write output")?;

	Ok(if rendered.complete {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}

fn run(cli: &Cli, registry: &StatusRegistry<'static>) -> anyhow::Result<Rendered> {
	debug!(
		records = registry.len(),
		statuses = registry.key_count(),
		shadowed = registry.shadowed().len(),
		"status table ready"
	);

	match &cli.command {
		Command::Resolve { codes } => {
			let reports: Vec<_> = codes
				.iter()
				.map(|&code| ResolveReport::new(code, registry.resolve(code.as_u32())))
				.collect();
			for report in reports.iter().filter(|r| !r.found) {
				warn!(status = %report.status, "status not in fallback table");
			}
			let complete = reports.iter().all(|r| r.found);
			let text = render(cli.json, &reports, ResolveReport::render_text)?;
			Ok(Rendered { text, complete })
		}
		Command::Format { code, args } => {
			let Some(resolved) = registry.resolve(code.as_u32()) else {
				warn!(status = %code, "status not in fallback table");
				let report = ResolveReport::new(*code, None);
				let text = render(cli.json, std::slice::from_ref(&report), ResolveReport::render_text)?;
				return Ok(Rendered {
					text,
					complete: false,
				});
			};
			let report = FormatReport {
				status: *code,
				message: resolved.format(args.as_slice()),
			};
			let text = if cli.json {
				to_json(&report)?
			} else {
				let mut text = String::new();
				report.render_text(&mut text);
				text
			};
			Ok(Rendered {
				text,
				complete: true,
			})
		}
		Command::List { severity } => {
			let severity = severity.map(Severity::from);
			let entries: Vec<ListEntry> = registry
				.authoritative()
				.filter(|r| severity.is_none_or(|s| r.code().severity() == s))
				.map(ListEntry::from)
				.collect();
			debug!(listed = entries.len(), ?severity, "listing records");
			let text = render(cli.json, &entries, ListEntry::render_text)?;
			Ok(Rendered {
				text,
				complete: true,
			})
		}
		Command::Shadowed => {
			let records = registry.records();
			let entries: Vec<_> = registry
				.shadowed()
				.iter()
				.map(|c| ShadowedEntry::new(c, records))
				.collect();
			let text = render(cli.json, &entries, ShadowedEntry::render_text)?;
			Ok(Rendered {
				text,
				complete: true,
			})
		}
	}
}

/// Renders a list of reports as text lines or a JSON array.
fn render<T: Serialize>(
	json: bool,
	items: &[T],
	text: impl Fn(&T, &mut String),
) -> anyhow::Result<String> {
	if json {
		return to_json(items);
	}
	let mut out = String::new();
	for item in items {
		text(item, &mut out);
	}
	Ok(out)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
	let mut text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
	text.push('\n');
	Ok(text)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
