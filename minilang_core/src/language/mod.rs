pub mod token;
pub mod operators;
pub mod ast;
pub mod lexer;
pub mod cursor;
pub mod parser;
pub mod error;
pub mod interpreter;

pub use error::{Error, ErrorKind, Result};
pub use ast::AstNode;
pub use lexer::Lexer;
pub use cursor::Cursor;
pub use parser::{parse, AstBuilder};
pub use interpreter::{format_number, CapturedOutput, Interpreter, Output, StdoutOutput};
