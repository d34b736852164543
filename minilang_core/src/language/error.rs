use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Lexer,
    Parser,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub line: Option<usize>,
    pub column: Option<usize>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Lexer => "Lexer",
            ErrorKind::Parser => "Parser",
        };
        match (&self.line, &self.column) {
            (Some(line), Some(column)) => {
                write!(f, "{} error: {} (line {}, column {})", kind, self.message, line, column)
            }
            (Some(line), None) => {
                write!(f, "{} error: {} (line {})", kind, self.message, line)
            }
            _ => {
                write!(f, "{} error: {}", kind, self.message)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! lexer_error {
    ($msg:expr, $line:expr, $col:expr) => {
        Err($crate::language::error::Error {
            kind: $crate::language::error::ErrorKind::Lexer,
            message: $msg.to_string(),
            line: Some($line),
            column: Some($col),
        })
    };
}

#[macro_export]
macro_rules! parser_error {
    ($msg:expr, $line:expr, $col:expr) => {
        Err($crate::language::error::Error {
            kind: $crate::language::error::ErrorKind::Parser,
            message: $msg.to_string(),
            line: Some($line),
            column: Some($col),
        })
    };
}
