// Name-keyed reconciliation of registry records against report records.
// Pure functions: two record sets in, classified rows out.

use std::collections::{HashMap, HashSet};

use crate::model::{ReconcileMode, Record, ResultRow, Status, Summary};

/// Classify every report record against the registry.
///
/// Output preserves report order. In bidirectional mode, registry records
/// absent from the report are appended afterwards in registry order.
/// Difference is always report minus registry.
pub fn reconcile(registry: &[Record], report: &[Record], mode: ReconcileMode) -> Vec<ResultRow> {
    // Last write wins if duplicate names survived parsing.
    let mut registry_amounts: HashMap<&str, i64> = HashMap::new();
    for record in registry {
        registry_amounts.insert(record.name.as_str(), record.amount_cents);
    }

    let mut rows = Vec::with_capacity(report.len());
    for record in report {
        let row = match registry_amounts.get(record.name.as_str()) {
            Some(&registry_cents) => {
                let difference_cents = record.amount_cents - registry_cents;
                let status = if difference_cents == 0 {
                    Status::Match
                } else {
                    Status::Mismatch
                };
                ResultRow {
                    name: record.name.clone(),
                    difference_cents,
                    status,
                }
            }
            None => ResultRow {
                name: record.name.clone(),
                difference_cents: record.amount_cents,
                status: Status::MissingInRegistry,
            },
        };
        rows.push(row);
    }

    if mode == ReconcileMode::Bidirectional {
        let report_names: HashSet<&str> = report.iter().map(|r| r.name.as_str()).collect();
        for record in registry {
            if !report_names.contains(record.name.as_str()) {
                rows.push(ResultRow {
                    name: record.name.clone(),
                    difference_cents: -record.amount_cents,
                    status: Status::MissingInReport,
                });
            }
        }
    }

    rows
}

/// Tally row counts and the signed sum of all differences.
pub fn summarize(rows: &[ResultRow]) -> Summary {
    let mut summary = Summary {
        total: rows.len(),
        ..Summary::default()
    };
    for row in rows {
        match row.status {
            Status::Match => summary.matches += 1,
            Status::Mismatch => summary.mismatches += 1,
            Status::MissingInRegistry => summary.missing_in_registry += 1,
            Status::MissingInReport => summary.missing_in_report += 1,
        }
        summary.net_difference_cents += row.difference_cents;
    }
    summary
}
