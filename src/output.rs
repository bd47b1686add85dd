//! Rendering of walk results
//!
//! One line per visited path, in table insertion order:
//! `<cumulative size> <cumulative count> <path>`.

use crate::walker::UsageTables;
use std::io::{self, Write};

/// Write every row of `tables` to `out`
///
/// Returns the number of lines written.
pub fn write_lines<W: Write>(tables: &UsageTables, mut out: W) -> io::Result<usize> {
    let mut written = 0;
    for (path, size, count) in tables.rows() {
        writeln!(out, "{} {} {}", size, count, path)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Write every row to stdout, treating a closed pipe as the end of output
pub fn print_lines(tables: &UsageTables) -> io::Result<usize> {
    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());
    match write_lines(tables, out) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(0),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::types::Metadata;

    #[test]
    fn test_write_lines_in_insertion_order() {
        let mut tables = UsageTables::new();
        tables.fold_ancestors("/r", "/r", &Metadata::directory());
        tables.fold_ancestors("/r/b", "/r", &Metadata::file(50));
        tables.fold_ancestors("/r/a", "/r", &Metadata::file(100));

        let mut buf = Vec::new();
        let n = write_lines(&tables, &mut buf).unwrap();

        assert_eq!(n, 3);
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "150 2 /r\n50 1 /r/b\n100 1 /r/a\n"
        );
    }

    #[test]
    fn test_write_lines_empty() {
        let mut buf = Vec::new();
        assert_eq!(write_lines(&UsageTables::new(), &mut buf).unwrap(), 0);
        assert!(buf.is_empty());
    }
}
