use std::io::{self, Write};

use serde_json::Value;
use stockmine_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_envelope(&mut out, envelope, format, pretty)?;
    out.flush()?;
    Ok(())
}

pub fn write_envelope<W: Write>(
    out: &mut W,
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(envelope)?;
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => write_table(out, envelope)?,
    }

    Ok(())
}

fn write_table<W: Write>(out: &mut W, envelope: &Envelope<Value>) -> Result<(), CliError> {
    let meta = &envelope.meta;
    writeln!(out, "request_id  : {}", meta.request_id)?;
    writeln!(out, "schema      : {}", meta.schema_version)?;
    writeln!(out, "generated_at: {}", meta.generated_at)?;
    writeln!(
        out,
        "symbols     : {}",
        meta.symbols
            .iter()
            .map(|symbol| symbol.as_str())
            .collect::<Vec<_>>()
            .join(",")
    )?;
    writeln!(out, "records     : {}", meta.record_count)?;
    writeln!(out, "grouping    : {}", meta.grouping)?;

    if !meta.warnings.is_empty() {
        writeln!(out, "warnings:")?;
        for warning in &meta.warnings {
            writeln!(out, "  - {warning}")?;
        }
    }

    let mut month_tables = 0;
    for section in ["months", "best", "worst"] {
        if let Some(Value::Array(rows)) = envelope.data.get(section) {
            writeln!(out, "{section}:")?;
            write_month_rows(out, rows)?;
            month_tables += 1;
        }
    }

    if month_tables == 0 && !envelope.data.is_null() {
        writeln!(out, "data:")?;
        let pretty_data = serde_json::to_string_pretty(&envelope.data)?;
        for line in pretty_data.lines() {
            writeln!(out, "  {line}")?;
        }
    }

    if !envelope.errors.is_empty() {
        writeln!(out, "errors:")?;
        for error in &envelope.errors {
            writeln!(out, "  - {}: {}", error.code, error.message)?;
        }
    }

    Ok(())
}

/// Rows shaped `["YYYY/MM", average]`.
fn write_month_rows<W: Write>(out: &mut W, rows: &[Value]) -> Result<(), CliError> {
    for row in rows {
        match (row.get(0).and_then(Value::as_str), row.get(1).and_then(Value::as_f64)) {
            (Some(month), Some(average)) => writeln!(out, "  {month}  {average:>10.2}")?,
            _ => writeln!(out, "  {row}")?,
        }
    }
    Ok(())
}
