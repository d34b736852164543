use std::fmt;
use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    #[display("unknown")]
    Unknown,            // anything the lexer does not recognise
    #[display("numeric")]
    Numeric,            // 1234
    #[display("identifier")]
    Identifier,         // names
    #[display("operator")]
    Operator,           // ! ( ) + - / * = & | { } < > ; == != >= <= && ||
    #[display("keyword")]
    Keyword,            // if else while print
    #[display("end of file")]
    EndOfFile,
}

pub const KEYWORDS: [&str; 4] = ["if", "else", "while", "print"];

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) text: Option<String>,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: Option<String>, line: usize, column: usize) -> Self {
        Token { kind, text, line, column }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is(&self, kind: TokenKind, text: Option<&str>) -> bool {
        self.kind == kind && text.is_none_or(|t| self.text() == Some(t))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.text {
            Some(text) => write!(f, "\"{}\" ({})", self.kind, text),
            None => write!(f, "\"{}\"", self.kind),
        }
    }
}
