use crate::language::error::Result;
use crate::language::lexer::{Lexer, LexerState};
use crate::language::token::Token;

/// Token stream over a [`Lexer`] with one current token and a stack of
/// positions it can step back to.
pub struct Cursor {
    lexer: Lexer,
    current: Token,
    history: Vec<(LexerState, Token)>,
}

impl Cursor {
    /// Pulls the first token straight away, so lexical errors at the very
    /// start of the input are reported here.
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Cursor {
            lexer,
            current,
            history: Vec::new(),
        })
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// On a lexical error the cursor is left untouched.
    pub fn advance(&mut self) -> Result<()> {
        let state = self.lexer.state();
        let next = match self.lexer.next_token() {
            Ok(token) => token,
            Err(e) => {
                self.lexer.restore(state);
                return Err(e);
            }
        };
        let previous = std::mem::replace(&mut self.current, next);
        self.history.push((state, previous));
        Ok(())
    }

    /// Steps back to the token that was current before the last `advance`.
    /// Returns `false` when there is nothing to go back to.
    pub fn rewind(&mut self) -> bool {
        match self.history.pop() {
            Some((state, token)) => {
                self.lexer.restore(state);
                self.current = token;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.history.len()
    }
}
