// Top-level comparison pipeline: validate, parse both sides, reconcile.

use crate::error::{CompareError, Dataset};
use crate::model::{Comparison, ReconcileMode, RegistryLayout, RunMeta};
use crate::parse::{parse_registry, parse_report};
use crate::reconcile::{reconcile, summarize};

/// Inputs for a single comparison run.
#[derive(Debug, Clone, Copy)]
pub struct CompareRequest<'a> {
    pub registry_text: &'a str,
    pub report_text: &'a str,
    pub layout: RegistryLayout,
    pub mode: ReconcileMode,
}

/// Run the full pipeline over two pasted blocks of text.
pub fn run(request: &CompareRequest) -> Result<Comparison, CompareError> {
    if request.registry_text.trim().is_empty() {
        return Err(CompareError::EmptyInput(Dataset::Registry));
    }
    if request.report_text.trim().is_empty() {
        return Err(CompareError::EmptyInput(Dataset::Report));
    }

    let registry = parse_registry(request.registry_text, request.layout).map_err(|source| {
        CompareError::Parse {
            dataset: Dataset::Registry,
            source,
        }
    })?;
    let report = parse_report(request.report_text).map_err(|source| CompareError::Parse {
        dataset: Dataset::Report,
        source,
    })?;

    let rows = reconcile(&registry, &report, request.mode);
    let summary = summarize(&rows);

    Ok(Comparison {
        meta: RunMeta {
            layout: request.layout,
            mode: request.mode,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        rows,
    })
}
