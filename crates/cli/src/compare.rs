//! Compare command: read two pasted dumps, reconcile, render, export.
//!
//! Dataflow: resolve inputs (args, settings, or the recorded last run),
//! read both datasets, run the engine, then fan the one comparison out to
//! stdout, an optional export file, the stderr summary, and the session
//! file for replay.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use payrecon_core::amount::format_amount;
use payrecon_core::{
    run, CompareRequest, LabelLanguage, Labels, ReconcileMode, RegistryLayout, ResultRow, Status,
};

use payrecon_config::session::{LastRun, Session, SESSION_VERSION};
use payrecon_config::settings::Settings;

use crate::exit_codes::EXIT_DIFFERENCES;
use crate::{CliError, CompareOutputFormat};

#[allow(clippy::too_many_arguments)]
pub fn cmd_compare(
    registry_arg: Option<String>,
    report_arg: Option<String>,
    layout_flag: Option<RegistryLayout>,
    bidirectional: bool,
    hide_matches_flag: bool,
    hide_missing_flag: bool,
    labels_flag: Option<LabelLanguage>,
    out: CompareOutputFormat,
    export: Option<PathBuf>,
    no_session: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = Settings::load();
    let inputs = resolve_inputs(registry_arg, report_arg, layout_flag, bidirectional, &settings)?;

    // A bad export path is a usage error; catch it before doing any work.
    let export_plan = match &export {
        Some(path) => Some(resolve_export(path)?),
        None => None,
    };

    let (registry_text, registry_path) = read_input(&inputs.registry)?;
    let (report_text, report_path) = read_input(&inputs.report)?;

    let language = labels_flag.unwrap_or(settings.labels);
    let labels = language.labels();
    let hide_matches = hide_matches_flag || settings.hide_matches;
    let hide_missing = hide_missing_flag || settings.hide_missing_in_registry;

    let comparison = run(&CompareRequest {
        registry_text: &registry_text,
        report_text: &report_text,
        layout: inputs.layout,
        mode: inputs.mode,
    })
    .map_err(|e| CliError::compare(&e))?;

    // JSON carries every row; filters shape only what a person reads.
    let visible: Vec<ResultRow> = comparison
        .rows
        .iter()
        .filter(|row| !(hide_matches && row.status == Status::Match))
        .filter(|row| !(hide_missing && row.status == Status::MissingInRegistry))
        .cloned()
        .collect();

    let output_bytes = match out {
        CompareOutputFormat::Table => render_table(&visible, labels).into_bytes(),
        CompareOutputFormat::Json => {
            let mut bytes = serde_json::to_vec_pretty(&comparison)
                .map_err(|e| CliError::export(format!("Failed to serialize comparison: {}", e)))?;
            bytes.push(b'\n');
            bytes
        }
        CompareOutputFormat::Csv => payrecon_io::csv::render(&visible, labels)
            .map_err(CliError::export)?
            .into_bytes(),
    };

    io::stdout()
        .write_all(&output_bytes)
        .map_err(|e| CliError::export(format!("Failed to write output: {}", e)))?;

    if let Some((path, format)) = &export_plan {
        match format {
            ExportFormat::Csv => {
                payrecon_io::csv::export(&visible, labels, path).map_err(CliError::export)?
            }
            ExportFormat::Xlsx => {
                payrecon_io::xlsx::export(&visible, labels, path).map_err(CliError::export)?
            }
        }
        if !quiet {
            eprintln!("exported to: {}", path.display());
        }
    }

    let summary = &comparison.summary;
    if !quiet {
        eprintln!("rows: {}", summary.total);
        eprintln!("matches: {}", summary.matches);
        eprintln!("mismatches: {}", summary.mismatches);
        eprintln!("missing_in_registry: {}", summary.missing_in_registry);
        if inputs.mode == ReconcileMode::Bidirectional {
            eprintln!("missing_in_report: {}", summary.missing_in_report);
        }
        eprintln!("total_difference: {}", format_amount(summary.net_difference_cents));
    }

    // Only file-backed runs can be replayed; stdin is gone by now.
    if !no_session {
        if let (Some(registry), Some(report)) = (registry_path, report_path) {
            let session = Session {
                version: SESSION_VERSION,
                last: Some(LastRun {
                    registry,
                    report,
                    layout: inputs.layout,
                    mode: inputs.mode,
                    run_at: comparison.meta.run_at.clone(),
                }),
            };
            if let Err(e) = session.save() {
                if !quiet {
                    eprintln!("warning: could not record session: {}", e);
                }
            }
        }
    }

    // Exit 1 when anything differs, diff(1)-style.
    if summary.mismatches > 0 || summary.missing_in_registry > 0 || summary.missing_in_report > 0 {
        return Err(CliError { code: EXIT_DIFFERENCES, message: String::new(), hint: None });
    }
    Ok(())
}

/// List the supported registry layouts with their column rules.
pub fn cmd_layouts() -> Result<(), CliError> {
    let layouts: [(&str, RegistryLayout, &str); 4] = [
        ("three-column", RegistryLayout::ThreeColumn, "name, personnel number, amount"),
        (
            "two-column",
            RegistryLayout::TwoColumn,
            "free-text name, amount; repeated names summed",
        ),
        ("nine-column", RegistryLayout::NineColumn, "name first, amount in column 9"),
        (
            "eight-plus",
            RegistryLayout::EightPlusColumn,
            "free-text name first, amount in column 8; repeated names summed",
        ),
    ];
    for (flag, layout, description) in layouts {
        println!("{:<14}{:>10} columns  {}", flag, layout.columns(), description);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

enum InputSource {
    Stdin,
    File(PathBuf),
}

struct ResolvedInputs {
    registry: InputSource,
    report: InputSource,
    layout: RegistryLayout,
    mode: ReconcileMode,
}

fn resolve_inputs(
    registry_arg: Option<String>,
    report_arg: Option<String>,
    layout_flag: Option<RegistryLayout>,
    bidirectional: bool,
    settings: &Settings,
) -> Result<ResolvedInputs, CliError> {
    match (registry_arg, report_arg) {
        (Some(registry), Some(report)) => {
            let registry = parse_source(&registry);
            let report = parse_source(&report);
            if matches!(registry, InputSource::Stdin) && matches!(report, InputSource::Stdin) {
                return Err(CliError::args("cannot read both datasets from stdin")
                    .with_hint("provide at least one file path: payrecon compare - report.txt"));
            }
            let mode = if bidirectional || settings.bidirectional {
                ReconcileMode::Bidirectional
            } else {
                ReconcileMode::OneWay
            };
            Ok(ResolvedInputs {
                registry,
                report,
                layout: layout_flag.unwrap_or(settings.layout),
                mode,
            })
        }
        (None, None) => {
            // Bare `payrecon compare` replays the previous run.
            let last = Session::load()
                .and_then(|s| s.last)
                .ok_or_else(|| {
                    CliError::args("no previous run to replay")
                        .with_hint("run payrecon compare <registry> <report> first")
                })?;
            let mode = if bidirectional { ReconcileMode::Bidirectional } else { last.mode };
            Ok(ResolvedInputs {
                registry: InputSource::File(last.registry),
                report: InputSource::File(last.report),
                layout: layout_flag.unwrap_or(last.layout),
                mode,
            })
        }
        (Some(_), None) | (None, Some(_)) => Err(CliError::args("missing report argument")
            .with_hint("payrecon compare <registry> <report>, or no arguments to replay the last run")),
    }
}

fn parse_source(arg: &str) -> InputSource {
    if arg == "-" {
        InputSource::Stdin
    } else {
        InputSource::File(PathBuf::from(arg))
    }
}

fn read_input(source: &InputSource) -> Result<(String, Option<PathBuf>), CliError> {
    match source {
        InputSource::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| CliError::read(format!("stdin: {}", e)))?;
            Ok((text, None))
        }
        InputSource::File(path) => {
            let text = payrecon_io::text::read_file_as_utf8(path).map_err(CliError::read)?;
            Ok((text, Some(path.clone())))
        }
    }
}

// ---------------------------------------------------------------------------
// Export resolution
// ---------------------------------------------------------------------------

enum ExportFormat {
    Csv,
    Xlsx,
}

fn resolve_export(path: &Path) -> Result<(PathBuf, ExportFormat), CliError> {
    if path.is_dir() {
        let path = path.join(payrecon_io::dated_filename("comparison", "xlsx"));
        return Ok((path, ExportFormat::Xlsx));
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => Ok((path.to_path_buf(), ExportFormat::Csv)),
        Some("xlsx") => Ok((path.to_path_buf(), ExportFormat::Xlsx)),
        _ => Err(CliError::args(format!(
            "cannot infer export format from \"{}\"",
            path.display()
        ))
        .with_hint("export paths must end in .csv or .xlsx")),
    }
}

// ---------------------------------------------------------------------------
// Table rendering
// ---------------------------------------------------------------------------

fn render_table(rows: &[ResultRow], labels: &Labels) -> String {
    let differences: Vec<String> =
        rows.iter().map(|row| format_amount(row.difference_cents)).collect();
    let total: i64 = rows.iter().map(|row| row.difference_cents).sum();
    let total_amount = format_amount(total);

    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain([labels.name.chars().count(), labels.total.chars().count()])
        .max()
        .unwrap_or(0);
    let diff_width = differences
        .iter()
        .map(|d| d.chars().count())
        .chain([labels.difference.chars().count(), total_amount.chars().count()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:>diff_width$}  {}\n",
        labels.name, labels.difference, labels.status
    ));
    for (row, difference) in rows.iter().zip(&differences) {
        out.push_str(&format!(
            "{:<name_width$}  {:>diff_width$}  {}\n",
            row.name,
            difference,
            row.status.label(labels.language)
        ));
    }
    out.push_str(&format!("{:<name_width$}  {:>diff_width$}\n", labels.total, total_amount));
    out
}
