//! CLI argument definitions for the health-study field kit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "hsk",
    version,
    about = "Health Study Kit - Validate and normalize participant-facing values",
    long_about = "Validate credentials and payload values, canonicalize date strings,\n\
                  decode hex theme colors, and resolve per-bucket storage directories\n\
                  for health-study client data."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw input values (credentials, dates) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a field value against its enrollment rule.
    Validate(ValidateArgs),

    /// Inspect a JSON payload value for presence and type.
    Value(ValueArgs),

    /// Canonicalize a date string.
    Date(DateArgs),

    /// Decode a hex color string into RGBA channels.
    Color(ColorArgs),

    /// Resolve the on-disk directory for a storage bucket.
    Storage(StorageArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Field whose rule should be applied.
    #[arg(long = "kind", value_enum)]
    pub kind: FieldKindArg,

    /// Value to check.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Parser)]
pub struct ValueArgs {
    /// JSON value to inspect (for example '42' or '{"age": 7}').
    #[arg(value_name = "JSON")]
    pub json: String,

    /// Additionally require the value to be of this kind.
    #[arg(long = "expect", value_enum)]
    pub expect: Option<ValueKindArg>,
}

#[derive(Parser)]
pub struct DateArgs {
    /// Date string to canonicalize.
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Treat the input as timezone-stripped (ignores any fractional part).
    #[arg(long = "stripped")]
    pub stripped: bool,

    /// Parse with an explicit chrono pattern instead of the transport form.
    ///
    /// Takes precedence over --stripped. Unlike the transport form, a
    /// mismatch here aborts the command instead of reporting a failed parse.
    #[arg(long = "format", value_name = "PATTERN")]
    pub format: Option<String>,
}

#[derive(Parser)]
pub struct ColorArgs {
    /// Hex color string, with or without a leading '#'.
    #[arg(value_name = "HEX")]
    pub hex: String,

    /// Alpha channel override, clamped into the 0.0..=1.0 range.
    #[arg(long = "alpha", value_name = "ALPHA")]
    pub alpha: Option<f32>,
}

#[derive(Parser)]
pub struct StorageArgs {
    /// Storage bucket to resolve.
    #[arg(value_enum, value_name = "BUCKET")]
    pub bucket: BucketArg,

    /// Documents root to resolve under (default: the host documents directory).
    #[arg(long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// CLI field kind choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FieldKindArg {
    Phone,
    Name,
    Email,
    Password,
}

/// CLI value kind choices for --expect.
#[derive(Clone, Copy, ValueEnum)]
pub enum ValueKindArg {
    Bool,
    Int,
    Float,
    Text,
    Date,
    Mapping,
    Sequence,
}

/// CLI storage bucket choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum BucketArg {
    Study,
    Gateway,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
