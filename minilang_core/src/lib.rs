pub mod language;

pub use language::{
    format_number, parse, AstBuilder, AstNode, CapturedOutput, Cursor, Error, ErrorKind,
    Interpreter, Lexer, Output, Result, StdoutOutput,
};
