use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the eqgen binary.
#[derive(Parser, Debug)]
#[command(
    name = "eqgen",
    version,
    about = "Generate structural Equals overrides from a type model"
)]
pub struct CliArgs {
    /// JSON model file describing the types.
    #[arg(long)]
    pub model: PathBuf,

    /// Name of the type to generate Equals for.
    #[arg(long = "type", value_name = "NAME")]
    pub type_name: String,

    /// Members to compare, in order. Defaults to every instance field and
    /// property in declaration order.
    #[arg(long, value_delimiter = ',')]
    pub members: Option<Vec<String>>,

    /// Keep `this.` on member accesses.
    #[arg(long = "qualify-this")]
    pub qualify_this: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, ignore_case = true)]
    pub format: OutputFormat,

    /// Diagnostic log filter written to stderr, e.g. `debug` or
    /// `eqgen_synth=trace`. Falls back to `EQGEN_LOG`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Layout of diagnostic log output.
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Text, ignore_case = true)]
    pub log_format: LogFormat,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The generated C# method.
    #[default]
    Text,
    /// A JSON report of the per-member decisions.
    Json,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One line per event.
    #[default]
    Text,
    /// Events nested under their spans.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}
