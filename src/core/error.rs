use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}, field {field}: {token:?} is not a number")]
    Parse {
        line: usize,
        field: usize,
        token: String,
    },

    #[error("line {line} has {got} fields, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("table has no rows")]
    EmptyTable,

    #[error("stage {name:?} has no samples")]
    EmptyColumn { name: String },

    #[error("table has {columns} columns but there are {labels} stage labels")]
    ColumnCount { columns: usize, labels: usize },

    #[error("failed to write report")]
    Write(#[from] std::io::Error),
}
