// src/csv.rs
use std::io::{ self, Write };

use crate::table::TableData;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table as delimited text.
/// With `include_headers`: contest title line, then the column header line.
pub fn write_table<W: Write>(mut w: W, table: &TableData, include_headers: bool, sep: char) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &table.group_row(), sep)?;
        write_row(&mut w, &table.headers, sep)?;
    }
    for row in table.text_rows() {
        write_row(&mut w, &row, sep)?;
    }
    Ok(())
}

pub fn table_to_string(table: &TableData, include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_table(&mut buf, table, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
