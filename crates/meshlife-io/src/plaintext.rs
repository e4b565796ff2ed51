//! The line-oriented pattern reader and writer.

use std::io::{BufRead, Write};

use meshlife_core::{Field, ALIVE_GLYPH, DEAD_GLYPH};

use crate::error::LoadError;

/// Comment prefix: lines starting with this are skipped entirely and do
/// not count as grid rows.
const COMMENT_PREFIX: char = '!';

/// Scan every non-comment line into a row of alive bits, returning the
/// rows and the widest row seen.
fn scan_rows<R: BufRead>(reader: R) -> Result<(Vec<Vec<bool>>, usize), LoadError> {
    let mut rows = Vec::new();
    let mut max_cols = 0;
    for line in reader.lines() {
        let line = line?;
        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        let row: Vec<bool> = line.chars().map(|ch| ch == ALIVE_GLYPH).collect();
        max_cols = max_cols.max(row.len());
        rows.push(row);
    }
    Ok((rows, max_cols))
}

/// Copy scanned rows into `field`, top-left aligned. Everything outside
/// the pattern stays dead; ragged rows are implicitly padded.
fn blit(field: &mut Field, rows: &[Vec<bool>]) {
    for (r, row) in rows.iter().enumerate() {
        for (c, &alive) in row.iter().enumerate() {
            field.set_alive(r, c, alive);
        }
    }
}

/// Read a pattern into a freshly sized [`Field`].
///
/// The field's dimensions are the pattern's row count by its widest row;
/// shorter rows are padded with dead cells. A pattern with no rows or no
/// columns is [`LoadError::EmptyPattern`].
pub fn read_field<R: BufRead>(reader: R) -> Result<Field, LoadError> {
    let (rows, max_cols) = scan_rows(reader)?;
    if rows.is_empty() || max_cols == 0 {
        return Err(LoadError::EmptyPattern);
    }
    let mut field = Field::all_dead(rows.len(), max_cols)?;
    blit(&mut field, &rows);
    Ok(field)
}

/// Read a pattern into an existing [`Field`], growing it to fit.
///
/// The destination keeps its dimensions where they already exceed the
/// pattern's (it never shrinks) and grows where they do not. Every cell
/// outside the loaded pattern is cleared. An empty pattern therefore
/// clears the whole field.
pub fn load_into<R: BufRead>(field: &mut Field, reader: R) -> Result<(), LoadError> {
    let (rows, max_cols) = scan_rows(reader)?;
    let target_rows = field.rows().max(rows.len());
    let target_cols = field.cols().max(max_cols);
    let mut next = Field::all_dead(target_rows, target_cols)?;
    blit(&mut next, &rows);
    *field = next;
    Ok(())
}

/// Write `field` as pattern text: one glyph per cell, one newline per row.
///
/// Returns the number of bytes written. Unlike the display rendering,
/// the save format carries no spaces between glyphs — this is what makes
/// a save/load round trip reproduce the field exactly, since the reader
/// would treat a space as a dead cell.
pub fn write_field<W: Write>(field: &Field, mut writer: W) -> std::io::Result<usize> {
    let mut written = 0;
    let mut line = String::with_capacity(field.cols() + 1);
    for row in 0..field.rows() {
        line.clear();
        for col in 0..field.cols() {
            line.push(if field.alive(row, col) {
                ALIVE_GLYPH
            } else {
                DEAD_GLYPH
            });
        }
        line.push('\n');
        writer.write_all(line.as_bytes())?;
        written += line.len();
    }
    Ok(written)
}
