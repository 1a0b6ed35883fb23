//! CLI argument definitions for the subform builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use subform_cli::logging::LogFormat;
use subform_model::{FieldOrder, NamingMode, PipelineOptions};
use subform_report::{DEFAULT_PAGE_WIDTH, DocumentStyle};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "subform-cli",
    version,
    about = "Checklist subform builder - group checklist rows into subforms and render them",
    long_about = "Group an inspection checklist CSV into named subforms.\n\n\
                  Subforms are saved as JSON records and rendered as reference\n\
                  listings or step-by-step authoring instructions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for fewer messages).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Group a checklist CSV into subforms and write JSON records.
    Generate(GenerateArgs),

    /// Render saved subform records as documents.
    Render(RenderArgs),

    /// Generate records and render documents in one pass.
    Run(RunArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the checklist CSV.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Directory for subform records.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "subforms")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub grouping: GroupingArgs,

    /// Process only the subform with this name.
    #[arg(long = "only", value_name = "NAME")]
    pub only: Option<String>,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Directory holding subform records.
    #[arg(value_name = "SUBFORMS_DIR", default_value = "subforms")]
    pub subforms_dir: PathBuf,

    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Render only the subform with this name.
    #[arg(long = "only", value_name = "NAME")]
    pub only: Option<String>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to the checklist CSV.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Directory for subform records.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "subforms")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub grouping: GroupingArgs,

    #[command(flatten)]
    pub documents: DocumentArgs,

    /// Process only the subform with this name.
    #[arg(long = "only", value_name = "NAME")]
    pub only: Option<String>,
}

/// Grouping and ordering flags.
#[derive(Args)]
pub struct GroupingArgs {
    /// How hyphen-prefixed naming keys are resolved.
    #[arg(long = "naming", value_enum, default_value = "merge")]
    pub naming: NamingArg,

    /// Field order within each subform.
    #[arg(long = "order", value_enum, default_value = "encounter")]
    pub order: OrderArg,
}

impl GroupingArgs {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::new()
            .with_naming(match self.naming {
                NamingArg::Merge => NamingMode::MergeNumbered,
                NamingArg::Separate => NamingMode::KeepSeparate,
            })
            .with_ordering(match self.order {
                OrderArg::Encounter => FieldOrder::Encounter,
                OrderArg::TaskSuffix => FieldOrder::TaskSuffix,
            })
    }
}

/// Document rendering flags.
#[derive(Args)]
pub struct DocumentArgs {
    /// Document styles to render.
    #[arg(long = "style", value_enum, default_value = "both")]
    pub style: StyleArg,

    /// Output root for reference documents.
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Output root for instruction documents.
    #[arg(long = "instruction-dir", value_name = "DIR")]
    pub instruction_dir: Option<PathBuf>,

    /// Page width in characters.
    #[arg(long = "page-width", value_name = "N", default_value_t = DEFAULT_PAGE_WIDTH)]
    pub page_width: u16,
}

impl DocumentArgs {
    pub fn styles(&self) -> Vec<DocumentStyle> {
        match self.style {
            StyleArg::Reference => vec![DocumentStyle::Reference],
            StyleArg::Instruction => vec![DocumentStyle::Instruction],
            StyleArg::Both => DocumentStyle::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NamingArg {
    /// Merge `-KEY` rows into the numbered subform for their section.
    Merge,
    /// Keep `-KEY` rows under their raw key.
    Separate,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OrderArg {
    /// Keep checklist order.
    Encounter,
    /// Sort by the trailing number of the inspection task.
    TaskSuffix,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StyleArg {
    Reference,
    Instruction,
    Both,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
