use crate::core::error::Error;
use memchr::memchr_iter;

/// Parses a whitespace-delimited numeric table: one row per line, fields
/// separated by single spaces, every field a floating-point literal. Blank
/// lines are skipped; CRLF endings are tolerated. Rows must all have the
/// same field count as the first row.
pub fn parse(bytes: &[u8]) -> Result<Vec<Vec<f64>>, Error> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut start = 0usize;
    let mut line = 0usize;
    for nl in memchr_iter(b'\n', bytes) {
        line += 1;
        push_row(&bytes[start..nl], line, &mut rows)?;
        start = nl + 1;
    }
    if start < bytes.len() {
        line += 1;
        push_row(&bytes[start..], line, &mut rows)?;
    }
    if rows.is_empty() {
        return Err(Error::EmptyTable);
    }
    Ok(rows)
}

fn push_row(raw: &[u8], line: usize, rows: &mut Vec<Vec<f64>>) -> Result<(), Error> {
    let raw = match raw.last() {
        Some(b'\r') => &raw[..raw.len() - 1],
        _ => raw,
    };
    if raw.is_empty() {
        return Ok(());
    }
    let text = String::from_utf8_lossy(raw);
    let mut row = Vec::new();
    for (i, token) in text.split(' ').enumerate() {
        let value: f64 = token.trim().parse().map_err(|_| Error::Parse {
            line,
            field: i + 1,
            token: token.to_string(),
        })?;
        row.push(value);
    }
    if let Some(first) = rows.first() {
        if row.len() != first.len() {
            return Err(Error::RaggedRow {
                line,
                expected: first.len(),
                got: row.len(),
            });
        }
    }
    rows.push(row);
    Ok(())
}

/// R x C in, C x R out: output row j is input column j.
pub fn transpose(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    let mut out = vec![Vec::with_capacity(rows.len()); first.len()];
    for row in rows {
        for (j, &v) in row.iter().enumerate() {
            out[j].push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn parses_a_rectangular_table() {
        let rows = parse(b"1 10 100\n2 20 200\n").unwrap();
        assert_eq!(rows, vec![vec![1.0, 10.0, 100.0], vec![2.0, 20.0, 200.0]]);
    }

    #[test]
    fn tolerates_crlf_and_missing_final_newline() {
        let rows = parse(b"1.5 2.5\r\n3.5 4.5").unwrap();
        assert_eq!(rows, vec![vec![1.5, 2.5], vec![3.5, 4.5]]);
    }

    #[test]
    fn skips_blank_lines() {
        let rows = parse(b"1 2\n\n3 4\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[rstest]
    #[case(b"1 x\n" as &[u8], 1, 2, "x")]
    #[case(b"1 2\n3 4f\n" as &[u8], 2, 2, "4f")]
    #[case(b"1  2\n" as &[u8], 1, 2, "")]
    fn rejects_non_numeric_fields(
        #[case] input: &[u8],
        #[case] line: usize,
        #[case] field: usize,
        #[case] token: &str,
    ) {
        match parse(input).unwrap_err() {
            Error::Parse {
                line: l,
                field: f,
                token: t,
            } => {
                assert_eq!((l, f, t.as_str()), (line, field, token));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_ragged_rows() {
        match parse(b"1 2 3\n4 5\n").unwrap_err() {
            Error::RaggedRow {
                line,
                expected,
                got,
            } => {
                assert_eq!((line, expected, got), (2, 3, 2));
            }
            other => panic!("expected RaggedRow error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_an_empty_file() {
        assert!(matches!(parse(b"").unwrap_err(), Error::EmptyTable));
        assert!(matches!(parse(b"\n\n").unwrap_err(), Error::EmptyTable));
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(
            transpose(&m),
            vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]
        );
    }

    proptest! {
        #[test]
        fn transpose_is_an_involution(
            rows in (1usize..8, 1usize..8).prop_flat_map(|(r, c)| {
                vec(vec(-1e6f64..1e6, c), r)
            })
        ) {
            prop_assert_eq!(transpose(&transpose(&rows)), rows);
        }
    }
}
