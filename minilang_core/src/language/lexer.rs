use log::trace;
use crate::language::token::{Token, TokenKind, KEYWORDS};
use crate::language::error::Result;
use crate::lexer_error;

const OPERATOR_CHARS: &str = "!()+-/*=&|{}<>;";

/// Where the lexer stands in its input. Restoring a snapshot makes the lexer
/// produce the same tokens again from that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerState {
    pub position: usize,
    pub line: usize,
    pub column: usize,
}

pub struct Lexer {
    pub(crate) input: Vec<char>,
    pub(crate) position: usize,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn state(&self) -> LexerState {
        LexerState {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    pub fn restore(&mut self, state: LexerState) {
        self.position = state.position;
        self.line = state.line;
        self.column = state.column;
    }

    pub fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    pub fn consume(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.consume();
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if accept(ch) {
                text.push(ch);
                self.consume();
            } else {
                break;
            }
        }

        text
    }

    fn read_operator(&mut self, first: char, line: usize, column: usize) -> Result<Token> {
        self.consume();
        let mut text = first.to_string();

        let completes = match (first, self.peek()) {
            ('=' | '!' | '<' | '>', Some('=')) => true,
            ('&', Some('&')) | ('|', Some('|')) => true,
            _ => false,
        };

        if completes {
            if let Some(second) = self.consume() {
                text.push(second);
            }
        } else if first == '&' || first == '|' {
            return lexer_error!(format!("unknown operator \"{}\"", first), line, column);
        }

        Ok(Token::new(TokenKind::Operator, Some(text), line, column))
    }

    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let line = self.line;
        let column = self.column;

        let token = match self.peek() {
            None => Token::new(TokenKind::EndOfFile, None, line, column),
            Some(ch) if is_ident_start(ch) => {
                let ident = self.read_while(is_ident_part);
                let kind = if KEYWORDS.contains(&ident.as_str()) {
                    TokenKind::Keyword
                } else {
                    TokenKind::Identifier
                };
                Token::new(kind, Some(ident), line, column)
            },
            Some(ch) if ch.is_ascii_digit() => {
                let digits = self.read_while(|c| c.is_ascii_digit());
                Token::new(TokenKind::Numeric, Some(digits), line, column)
            },
            Some(ch) if OPERATOR_CHARS.contains(ch) => self.read_operator(ch, line, column)?,
            Some(ch) => {
                self.consume();
                Token::new(TokenKind::Unknown, Some(ch.to_string()), line, column)
            },
        };

        trace!("Token {} at {}:{}", token, line, column);
        Ok(token)
    }

    /// Scans the whole input. The end-of-file token is included.
    #[cfg(test)]
    pub(crate) fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if done {
                break;
            }
        }

        Ok(tokens)
    }
}

fn is_ident_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_ident_part(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}
