//! CSV Ticket File Loader
//!
//! Tokenizes a ticket file into raw string rows for the checker service.
//! No validation happens here; rows of any width are passed through.
//!
//! ## 文件格式
//! ```text
//! Ticket Number,WB 1,WB 2,WB 3,WB 4,WB 5,Powerball
//! 12345-6789,32,16,19,57,34,13
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot open ticket file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading tickets: {0}")]
    Io(#[from] std::io::Error),
}

/// Splits CSV text into trimmed columns, one row per non-blank line
///
/// When `has_header` is set the first line is skipped.
pub fn read_ticket_rows<R: BufRead>(reader: R, has_header: bool) -> Result<Vec<Vec<String>>, LoaderError> {
    let mut rows = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if has_header && i == 0 {
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rows.push(line.split(',').map(|col| col.trim().to_string()).collect());
    }

    Ok(rows)
}

/// Reads and tokenizes a ticket file
pub fn read_ticket_file(path: impl AsRef<Path>, has_header: bool) -> Result<Vec<Vec<String>>, LoaderError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let rows = read_ticket_rows(BufReader::new(file), has_header)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "ticket file read");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_header_skipped() {
        let csv = "Ticket Number,WB 1,WB 2,WB 3,WB 4,WB 5,Powerball\n\
                   12345-6789, 32, 16, 19, 57, 34, 13\n";
        let rows = read_ticket_rows(Cursor::new(csv), true).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["12345-6789", "32", "16", "19", "57", "34", "13"]);
    }

    #[test]
    fn test_no_header() {
        let csv = "A,1,2,3,4,5,6\nB,7,8,9,10,11,12\n";
        let rows = read_ticket_rows(Cursor::new(csv), false).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][0], "B");
    }

    #[test]
    fn test_blank_lines_and_short_rows_kept_apart() {
        let csv = "header\n\nA,1,2\r\n   \nB,1,2,3,4,5,6";
        let rows = read_ticket_rows(Cursor::new(csv), true).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["A", "1", "2"]);
        assert_eq!(rows[1].len(), 7);
    }

    #[test]
    fn test_missing_file() {
        let result = read_ticket_file("/nonexistent/tickets.csv", true);
        assert!(matches!(result, Err(LoaderError::Open { .. })));
    }

    #[test]
    fn test_read_file_from_disk() {
        let path = std::env::temp_dir().join(format!("powerball-loader-{}.csv", std::process::id()));
        std::fs::write(&path, "Ticket,WB1,WB2,WB3,WB4,WB5,PB\nT1,1,2,3,4,5,6\n").unwrap();

        let rows = read_ticket_file(&path, true).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(rows, vec![vec!["T1", "1", "2", "3", "4", "5", "6"]]);
    }
}
