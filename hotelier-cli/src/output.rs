//! Rendering of listing output as table, JSON or CSV.

use crate::error::CliError;
use hotelier::OutputFormat;
use serde::Serialize;
use std::io::Write;

/// Write `rows` in the requested format.
///
/// Tables use `headers` (upper-cased) and the cells produced by `cells`,
/// separated by tabs. JSON writes a pretty-printed array and CSV derives its
/// header from the row's field names.
pub fn write_rows<T, F>(
    out: &mut dyn Write,
    format: OutputFormat,
    headers: &[&str],
    rows: &[T],
    cells: F,
) -> Result<(), CliError>
where
    T: Serialize,
    F: Fn(&T) -> Vec<String>,
{
    match format {
        OutputFormat::Table => write_table(out, headers, rows, cells),
        OutputFormat::Json => write_json(out, rows),
        OutputFormat::Csv => write_csv(out, rows),
    }
}

fn write_table<T, F>(
    out: &mut dyn Write,
    headers: &[&str],
    rows: &[T],
    cells: F,
) -> Result<(), CliError>
where
    F: Fn(&T) -> Vec<String>,
{
    let header_line = headers
        .iter()
        .map(|h| h.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for row in rows {
        writeln!(out, "{}", cells(row).join("\t"))?;
    }
    Ok(())
}

fn write_json<T: Serialize>(out: &mut dyn Write, rows: &[T]) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<T: Serialize>(out: &mut dyn Write, rows: &[T]) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    const ROWS: [Row; 2] = [
        Row {
            name: "Room 1",
            price: 1299.0,
        },
        Row {
            name: "Room 2",
            price: 150.5,
        },
    ];

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_rows(&mut out, format, &["name", "price"], &ROWS, |r| {
            vec![r.name.to_string(), format!("{:.2}", r.price)]
        })
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_output() {
        let output = render(OutputFormat::Table);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "NAME\tPRICE");
        assert_eq!(lines[1], "Room 1\t1299.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_json_output() {
        let output = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[1]["name"], "Room 2");
        assert_eq!(value[0]["price"], 1299.0);
    }

    #[test]
    fn test_csv_output() {
        let output = render(OutputFormat::Csv);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "name,price");
        assert_eq!(lines[2], "Room 2,150.5");
    }

    #[test]
    fn test_empty_csv_has_no_header() {
        let mut out = Vec::new();
        let rows: [Row; 0] = [];
        write_rows(&mut out, OutputFormat::Csv, &["name"], &rows, |_| vec![]).unwrap();
        assert!(out.is_empty());
    }
}
