// payrecon CLI - reconcile payroll registry dumps against the full report

mod compare;
mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use payrecon_core::{CompareError, Dataset, LabelLanguage, ParseError, RegistryLayout};

use exit_codes::{compare_exit_code, EXIT_EXPORT, EXIT_READ, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "payrecon")]
#[command(about = "Reconcile payroll registry dumps against the full report")]
#[command(version)]
#[command(subcommand_required = false)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a payment registry against the full payroll report
    #[command(after_help = "\
Examples:
  payrecon compare registry.txt report.txt
  payrecon compare registry.txt report.txt --layout two-column --labels ru
  cat registry.txt | payrecon compare - report.txt --bidirectional
  payrecon compare registry.txt report.txt --out json | jq .summary
  payrecon compare registry.txt report.txt --export comparison.xlsx --hide-matches
  payrecon compare")]
    Compare {
        /// Registry dump (file path, or - for stdin; omit both paths to replay the last run)
        registry: Option<String>,

        /// Full report dump (file path, or - for stdin)
        report: Option<String>,

        /// Registry column layout
        #[arg(long)]
        layout: Option<CompareLayout>,

        /// Also flag registry people absent from the report
        #[arg(long)]
        bidirectional: bool,

        /// Hide matching rows in table, CSV, and export output
        #[arg(long)]
        hide_matches: bool,

        /// Hide missing-in-registry rows in table, CSV, and export output
        #[arg(long)]
        hide_missing: bool,

        /// Status and header vocabulary
        #[arg(long)]
        labels: Option<CompareLabels>,

        /// Output format
        #[arg(long, alias = "format", default_value = "table")]
        out: CompareOutputFormat,

        /// Export results to a file (.csv or .xlsx; a directory gets a dated xlsx name)
        #[arg(long)]
        export: Option<PathBuf>,

        /// Do not record this run for replay
        #[arg(long)]
        no_session: bool,

        /// Quiet mode - suppress stderr summary
        #[arg(long, short = 'q')]
        quiet: bool,
    },

    /// List supported registry layouts
    Layouts,
}

#[derive(Clone, Copy, ValueEnum)]
enum CompareLayout {
    ThreeColumn,
    TwoColumn,
    NineColumn,
    EightPlus,
}

impl From<CompareLayout> for RegistryLayout {
    fn from(arg: CompareLayout) -> Self {
        match arg {
            CompareLayout::ThreeColumn => RegistryLayout::ThreeColumn,
            CompareLayout::TwoColumn => RegistryLayout::TwoColumn,
            CompareLayout::NineColumn => RegistryLayout::NineColumn,
            CompareLayout::EightPlus => RegistryLayout::EightPlusColumn,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CompareLabels {
    En,
    Ru,
}

impl From<CompareLabels> for LabelLanguage {
    fn from(arg: CompareLabels) -> Self {
        match arg {
            CompareLabels::En => LabelLanguage::En,
            CompareLabels::Ru => LabelLanguage::Ru,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CompareOutputFormat {
    Table,
    Json,
    Csv,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => {
            // No subcommand = show help
            eprintln!("Usage: payrecon <command> [options]");
            eprintln!("       payrecon --help for more information");
            Ok(())
        }
        Some(Commands::Compare {
            registry,
            report,
            layout,
            bidirectional,
            hide_matches,
            hide_missing,
            labels,
            out,
            export,
            no_session,
            quiet,
        }) => compare::cmd_compare(
            registry,
            report,
            layout.map(Into::into),
            bidirectional,
            hide_matches,
            hide_missing,
            labels.map(Into::into),
            out,
            export,
            no_session,
            quiet,
        ),
        Some(Commands::Layouts) => compare::cmd_layouts(),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn read(msg: impl Into<String>) -> Self {
        Self { code: EXIT_READ, message: msg.into(), hint: None }
    }

    pub fn export(msg: impl Into<String>) -> Self {
        Self { code: EXIT_EXPORT, message: msg.into(), hint: None }
    }

    /// Create error from a comparison failure with its registered exit code.
    pub fn compare(err: &CompareError) -> Self {
        let hint = match err {
            CompareError::Parse {
                dataset: Dataset::Registry,
                source: ParseError::MalformedLine { .. },
            } => Some(
                "check --layout against the registry columns; payrecon layouts lists the supported layouts"
                    .to_string(),
            ),
            CompareError::Parse {
                source: ParseError::UnparsableAmount { .. },
                ..
            } => Some("amounts look like 50 000,00 or 1234.56; an empty field means zero".to_string()),
            _ => None,
        };
        Self {
            code: compare_exit_code(err),
            message: err.to_string(),
            hint,
        }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
