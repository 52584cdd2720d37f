use super::*;

/// Failure to read one textual record of the integration log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A record line without exactly 4 parenthesized and 2 bracketed groups.
    #[error("malformed record: expected 4 parenthesized and 2 bracketed groups, found {parens} and {brackets}")]
    MalformedRecord { parens: usize, brackets: usize },
    #[error("expected text enclosed in '{open}' and '{close}', found {text:?}")]
    MissingDelimiters { text: String, open: char, close: char },
    #[error("expected {expected} components, found {found} in {text:?}")]
    ComponentCount { expected: usize, found: usize, text: String },
    #[error("could not parse {token:?} as a floating point number")]
    InvalidFloat { token: String },
    /// A named quantity requested from a record that was written short.
    #[error("component {index} requested from a record with {len} components")]
    MissingComponent { index: usize, len: usize },
    #[error("leg {index} out of range for a path with {len} legs")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid leg range [{begin}, {end}]")]
    InvalidRange { begin: usize, end: usize },
}

/// Errors that end an analysis run.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{0}")]
    Usage(String),
    #[error("Could not open the file: {}, exiting", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line_number}: {source}")]
    Parse {
        line_number: usize,
        #[source]
        source: ParseError,
    },
    #[error("Output error: could not write to {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Input error: {0}")]
    Config(String),
}

impl AnalyzeError {
    /// Process exit status reported by the `analyze` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnalyzeError::Usage(_) => 2,
            _ => 1,
        }
    }
}
