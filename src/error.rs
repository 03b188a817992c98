use std::path::PathBuf;

/// Error returned to `main`: a message for stderr plus the process exit code.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    /// Exit code 1 is used for data/model failures, 2 for usage and setup problems.
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        AppError::new(1, err.to_string())
    }
}

/// Location-carrying diagnostic for malformed numeric text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-indexed line, when the failure is tied to one.
    pub line: Option<usize>,
    /// 1-indexed column (field position).
    pub column: Option<usize>,
    /// Offending token text for non-numeric fields.
    pub token: Option<String>,
    pub message: String,
}

impl ParseError {
    pub fn empty_field(line: usize, column: usize) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
            token: None,
            message: format!("parse error: empty value at line {line}, col {column}"),
        }
    }

    pub fn bad_number(line: usize, column: usize, token: &str) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
            token: Some(token.to_string()),
            message: format!("parse error: cannot convert \"{token}\" to number at line {line}, col {column}"),
        }
    }

    pub fn no_data_rows(source: &str) -> Self {
        Self {
            line: None,
            column: None,
            token: None,
            message: format!("no data rows found in: {source}"),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Failures raised by the reader, solver, fitter, predictor and model loader.
#[derive(Debug)]
pub enum StatsError {
    Parse(ParseError),
    /// Mismatched or invalid shapes.
    Dimension(String),
    /// Pivot magnitude fell below the singularity threshold.
    SingularMatrix(String),
    /// Malformed or empty persisted model.
    Model(String),
    Io {
        context: String,
        path: Option<PathBuf>,
        source: std::io::Error,
    },
}

impl StatsError {
    pub fn dimension(message: impl Into<String>) -> Self {
        StatsError::Dimension(message.into())
    }

    pub fn model(message: impl Into<String>) -> Self {
        StatsError::Model(message.into())
    }

    pub fn io(context: impl Into<String>, path: Option<PathBuf>, source: std::io::Error) -> Self {
        StatsError::Io {
            context: context.into(),
            path,
            source,
        }
    }
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::Parse(e) => write!(f, "{e}"),
            StatsError::Dimension(msg) | StatsError::SingularMatrix(msg) | StatsError::Model(msg) => {
                write!(f, "{msg}")
            }
            StatsError::Io { context, path, source } => match path {
                Some(p) => write!(f, "{context}: {} ({source})", p.display()),
                None => write!(f, "{context}: {source}"),
            },
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseError> for StatsError {
    fn from(err: ParseError) -> Self {
        StatsError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_errors_map_to_exit_code_one() {
        let err: AppError = StatsError::dimension("fit: empty dataset").into();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "fit: empty dataset");
    }

    #[test]
    fn parse_error_message_names_location_and_token() {
        let e = ParseError::bad_number(2, 2, "x");
        assert_eq!(e.to_string(), "parse error: cannot convert \"x\" to number at line 2, col 2");
        assert_eq!(e.token.as_deref(), Some("x"));
    }

    #[test]
    fn io_error_exposes_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = StatsError::io("cannot open file", Some(PathBuf::from("a.csv")), inner);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("cannot open file: a.csv"));
    }
}
