//! CLI schema for the `nterr` binary.

use clap::{Parser, Subcommand, ValueEnum};
use nterr_status::{Severity, StatusCode};

#[derive(Parser, Debug)]
#[command(name = "nterr")]
#[command(about = "Translate NTSTATUS codes using the built-in fallback table")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Print machine-readable JSON instead of text
	#[arg(long, global = true)]
	pub json: bool,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Resolve status codes to their DOS error, errno and message
	Resolve {
		/// Status codes (0x-prefixed hex, decimal, or negative decimal)
		#[arg(required = true, value_name = "CODE", allow_negative_numbers = true)]
		codes: Vec<StatusCode>,
	},
	/// Print the message of a status with %1..%9 substituted
	Format {
		/// Status code to format.
		#[arg(value_name = "CODE", allow_negative_numbers = true)]
		code: StatusCode,

		/// Insertion strings, in placeholder order. Everything after CODE is
		/// taken literally, including values that start with `-`.
		#[arg(value_name = "ARG", allow_hyphen_values = true, trailing_var_arg = true)]
		args: Vec<String>,
	},
	/// List every authoritative record
	List {
		/// Only list records of this severity
		#[arg(long, value_enum)]
		severity: Option<SeverityFilter>,
	},
	/// List records shadowed by an earlier record with the same status
	Shadowed,
}

/// Severity accepted by `list --severity`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeverityFilter {
	/// Success codes.
	Success,
	/// Informational codes.
	Informational,
	/// Warning codes.
	Warning,
	/// Error codes.
	Error,
}

impl From<SeverityFilter> for Severity {
	fn from(filter: SeverityFilter) -> Self {
		match filter {
			SeverityFilter::Success => Severity::Success,
			SeverityFilter::Informational => Severity::Informational,
			SeverityFilter::Warning => Severity::Warning,
			SeverityFilter::Error => Severity::Error,
		}
	}
}
