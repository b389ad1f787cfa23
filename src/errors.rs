use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("{0}")]
    Usage(String),
    #[error("unsupported input format: {0} (expected a .json or .csv file)")]
    UnsupportedFormat(PathBuf),
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed csv in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("missing column: {0}")]
    MissingColumn(String),
    #[error("column {column} holds non-numeric value {value:?}")]
    InvalidNumber { column: String, value: String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl CompareError {
    pub fn usage<T: Into<String>>(msg: T) -> Self {
        CompareError::Usage(msg.into())
    }

    pub fn unsupported_format<P: Into<PathBuf>>(path: P) -> Self {
        CompareError::UnsupportedFormat(path.into())
    }

    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        CompareError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json<P: Into<PathBuf>>(path: P, source: serde_json::Error) -> Self {
        CompareError::Json {
            path: path.into(),
            source,
        }
    }

    pub fn csv<P: Into<PathBuf>>(path: P, source: csv::Error) -> Self {
        CompareError::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn missing_column<T: Into<String>>(name: T) -> Self {
        CompareError::MissingColumn(name.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        CompareError::InvalidInput(msg.into())
    }

    /// Process exit status for this error. Usage and format problems are 1,
    /// everything that went wrong after argument validation is 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            CompareError::Usage(_) | CompareError::UnsupportedFormat(_) => 1,
            _ => 2,
        }
    }
}
