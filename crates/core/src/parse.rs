// Tab-separated dataset parsers. Both datasets arrive as pasted text, one
// record per line; the first malformed line aborts the whole parse.

use std::collections::HashMap;

use crate::amount::parse_amount;
use crate::error::ParseError;
use crate::model::{ColumnRule, Record, RegistryLayout};
use crate::name::{name_prefix, normalize_name, FULL_NAME_WORDS};

/// Parse the registry block under the given column layout.
///
/// Records come out in line order; for merging layouts, in first-seen order
/// per distinct normalized name with amounts summed.
pub fn parse_registry(text: &str, layout: RegistryLayout) -> Result<Vec<Record>, ParseError> {
    let rule = layout.columns();
    let mut records: Vec<Record> = Vec::new();
    // Merging layouts: index of the first record per normalized name.
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (line_no, line) in lines(text) {
        let fields: Vec<&str> = line.split('\t').collect();
        if !rule.accepts(fields.len()) {
            return Err(ParseError::MalformedLine {
                line: line_no,
                found: fields.len(),
                expected: rule,
            });
        }

        let name = if layout.free_text_name() {
            name_prefix(fields[0], FULL_NAME_WORDS)
        } else {
            normalize_name(fields[0])
        };
        let amount_cents = parse_field_amount(fields[layout.amount_col()], line_no)?;

        if layout.merges_duplicates() {
            if let Some(&idx) = seen.get(&name) {
                records[idx].amount_cents += amount_cents;
                continue;
            }
            seen.insert(name.clone(), records.len());
        }
        records.push(Record { name, amount_cents });
    }

    Ok(records)
}

/// Parse the full report block: exactly two columns, duplicates kept.
pub fn parse_report(text: &str) -> Result<Vec<Record>, ParseError> {
    const RULE: ColumnRule = ColumnRule::Exactly(2);
    let mut records = Vec::new();

    for (line_no, line) in lines(text) {
        let fields: Vec<&str> = line.split('\t').collect();
        if !RULE.accepts(fields.len()) {
            return Err(ParseError::MalformedLine {
                line: line_no,
                found: fields.len(),
                expected: RULE,
            });
        }
        records.push(Record {
            name: normalize_name(fields[0]),
            amount_cents: parse_field_amount(fields[1], line_no)?,
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 1-based line numbering over the trimmed text, CRLF-tolerant.
fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.trim()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

fn parse_field_amount(field: &str, line_no: usize) -> Result<i64, ParseError> {
    let field = field.trim();
    parse_amount(field).ok_or_else(|| ParseError::UnparsableAmount {
        line: line_no,
        value: field.to_string(),
    })
}
