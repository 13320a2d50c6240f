//! Report rendering for batch results
//!
//! Renders a [`BatchReport`] in the three supported output formats: an
//! aligned human-readable table, CSV with a fixed column order, and JSON
//! for scripting. Rendering never mutates the report; the same report can
//! be rendered in every format.

use serde_json::json;

use crate::app::models::BatchReport;
use crate::constants::REPORT_COLUMNS;
use crate::Result;

/// Render the report as CSV with a header row
///
/// Column order is fixed: `filename,affinity_kcal_per_mol,rmsd_lb,rmsd_ub`.
/// One data row per successful parse, in report order; failures are not
/// included. Numeric values are serialized in standard decimal notation.
pub fn render_csv(report: &BatchReport) -> String {
    let mut csv = String::new();
    csv.push_str(&REPORT_COLUMNS.join(","));
    csv.push('\n');

    for row in report.rows() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            csv_escape(&row.filename),
            row.affinity_kcal_per_mol,
            row.rmsd_lb,
            row.rmsd_ub
        ));
    }

    csv
}

/// Render the report as pretty-printed JSON
///
/// Carries the batch summary, all extracted rows, and the per-file failure
/// reasons so scripted callers can distinguish partial success from a clean
/// run.
pub fn render_json(report: &BatchReport) -> Result<String> {
    let failures: Vec<_> = report
        .failures()
        .map(|(filename, error)| {
            json!({
                "filename": filename,
                "reason": error.to_string(),
            })
        })
        .collect();

    let json_report = json!({
        "summary": {
            "attempted": report.attempted(),
            "succeeded": report.succeeded(),
            "failed": report.failed(),
        },
        "results": report.rows().collect::<Vec<_>>(),
        "failures": failures,
    });

    Ok(serde_json::to_string_pretty(&json_report)?)
}

/// Render the report as a human-readable table
///
/// Successes come first as an aligned listing, followed by the batch
/// summary and a per-file failure list with reasons.
pub fn render_table(report: &BatchReport) -> String {
    let mut output = String::new();

    if report.succeeded() > 0 {
        output.push_str("🧬 Best-Mode Docking Results:\n");
        output.push_str(
            "Filename                                | Affinity (kcal/mol) | RMSD l.b. | RMSD u.b.\n",
        );
        output.push_str(
            "----------------------------------------|---------------------|-----------|----------\n",
        );

        for row in report.rows() {
            output.push_str(&format!(
                "{:39} | {:19.1} | {:9.3} | {:9.3}\n",
                truncate_name(&row.filename, 39),
                row.affinity_kcal_per_mol,
                row.rmsd_lb,
                row.rmsd_ub
            ));
        }

        output.push('\n');
    }

    output.push_str(&format!(
        "📊 Summary: {} of {} log file(s) parsed\n",
        report.succeeded(),
        report.attempted()
    ));

    if report.failed() > 0 {
        output.push_str("\n⚠️  Unparsed files:\n");
        for (filename, error) in report.failures() {
            output.push_str(&format!("   • {}: {}\n", filename, error));
        }
    }

    output
}

/// Escape a value for CSV output
///
/// Quotes the value when it contains a comma, quote, or newline; embedded
/// quotes are doubled.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Shorten a filename to fit the table column
fn truncate_name(name: &str, width: usize) -> String {
    if name.len() > width {
        format!("{}...", &name[..width - 3])
    } else {
        name.to_string()
    }
}
