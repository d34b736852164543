use log::debug;
use crate::language::ast::AstNode;
use crate::language::cursor::Cursor;
use crate::language::lexer::Lexer;
use crate::language::operators::{ArithmeticOp, ComparisonOp, LogicalOp, TermOp, UnaryOp};
use crate::language::token::{Token, TokenKind};
use crate::language::error::Result;
use crate::parser_error;

/// Recursive-descent parser. Every binary level recurses into itself for its
/// right operand, so all binary operators group to the right.
pub struct AstBuilder {
    cursor: Cursor,
}

impl AstBuilder {
    pub fn new(cursor: Cursor) -> Self {
        AstBuilder { cursor }
    }

    /// Anything after a top-level '}' is left unread.
    pub fn build(mut self) -> Result<AstNode> {
        self.statements()
    }

    fn statements(&mut self) -> Result<AstNode> {
        let mut statements = Vec::new();

        while !self.matches(TokenKind::EndOfFile, None) && !self.matches(TokenKind::Operator, Some("}")) {
            statements.push(self.statement()?);
        }

        if statements.len() == 1 {
            Ok(statements.remove(0))
        } else {
            Ok(AstNode::CodeBlock(statements))
        }
    }

    fn block(&mut self) -> Result<AstNode> {
        if self.matches(TokenKind::Operator, Some("{")) {
            self.next()?;
            let statements = self.statements()?;
            self.expect(TokenKind::Operator, Some("}"))?;
            self.next()?;
            Ok(statements)
        } else {
            self.statement()
        }
    }

    fn statement(&mut self) -> Result<AstNode> {
        if !self.matches(TokenKind::Keyword, None) {
            let expression = self.expression()?;
            self.expect(TokenKind::Operator, Some(";"))?;
            self.next()?;
            return Ok(expression);
        }

        let keyword = self.text().to_string();
        match keyword.as_str() {
            "print" => {
                self.next()?;
                let expression = self.expression()?;
                self.expect(TokenKind::Operator, Some(";"))?;
                self.next()?;
                Ok(AstNode::Print(Box::new(expression)))
            },
            "if" => {
                self.next()?;
                let condition = self.parenthesised_condition()?;
                let positive_block = self.block()?;
                let negative_block = if self.matches(TokenKind::Keyword, Some("else")) {
                    self.next()?;
                    Some(Box::new(self.block()?))
                } else {
                    None
                };
                Ok(AstNode::If {
                    condition: Box::new(condition),
                    positive_block: Box::new(positive_block),
                    negative_block,
                })
            },
            "while" => {
                self.next()?;
                let condition = self.parenthesised_condition()?;
                let body = self.block()?;
                Ok(AstNode::While {
                    condition: Box::new(condition),
                    body: Box::new(body),
                })
            },
            _ => {
                let token = self.current();
                parser_error!(
                    format!("invalid statement: unexpected {}", token),
                    token.line,
                    token.column
                )
            },
        }
    }

    fn parenthesised_condition(&mut self) -> Result<AstNode> {
        self.expect(TokenKind::Operator, Some("("))?;
        self.next()?;
        let condition = self.expression()?;
        self.expect(TokenKind::Operator, Some(")"))?;
        self.next()?;
        Ok(condition)
    }

    fn expression(&mut self) -> Result<AstNode> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<AstNode> {
        if !self.matches(TokenKind::Identifier, None) {
            return self.logical_expression();
        }

        let variable_name = self.text().to_string();
        self.next()?;

        if self.matches(TokenKind::Operator, Some("=")) {
            self.next()?;
            let expression = self.assignment()?;
            Ok(AstNode::Assignment {
                variable_name,
                expression: Box::new(expression),
            })
        } else {
            self.rewind();
            self.logical_expression()
        }
    }

    fn logical_expression(&mut self) -> Result<AstNode> {
        let left = self.comparison()?;

        match self.operator(LogicalOp::from_symbol) {
            Some(op) => {
                self.next()?;
                let right = self.logical_expression()?;
                Ok(AstNode::LogicalExpr { op, left: Box::new(left), right: Box::new(right) })
            },
            None => Ok(left),
        }
    }

    fn comparison(&mut self) -> Result<AstNode> {
        let left = self.arithmetic()?;

        match self.operator(ComparisonOp::from_symbol) {
            Some(op) => {
                self.next()?;
                let right = self.comparison()?;
                Ok(AstNode::Comparison { op, left: Box::new(left), right: Box::new(right) })
            },
            None => Ok(left),
        }
    }

    fn arithmetic(&mut self) -> Result<AstNode> {
        let left = self.term()?;

        match self.operator(ArithmeticOp::from_symbol) {
            Some(op) => {
                self.next()?;
                let right = self.arithmetic()?;
                Ok(AstNode::Arithmetic { op, left: Box::new(left), right: Box::new(right) })
            },
            None => Ok(left),
        }
    }

    fn term(&mut self) -> Result<AstNode> {
        let left = self.unary()?;

        match self.operator(TermOp::from_symbol) {
            Some(op) => {
                self.next()?;
                let right = self.term()?;
                Ok(AstNode::Term { op, left: Box::new(left), right: Box::new(right) })
            },
            None => Ok(left),
        }
    }

    fn unary(&mut self) -> Result<AstNode> {
        match self.operator(UnaryOp::from_symbol) {
            Some(op) => {
                self.next()?;
                let operand = self.unary()?;
                Ok(AstNode::Unary { op, operand: Box::new(operand) })
            },
            None => self.factor(),
        }
    }

    fn factor(&mut self) -> Result<AstNode> {
        if self.matches(TokenKind::Identifier, None) {
            let node = AstNode::Variable(self.text().to_string());
            self.next()?;
            Ok(node)
        } else if self.matches(TokenKind::Numeric, None) {
            let token = self.current();
            let value = match self.text().parse::<f64>() {
                Ok(value) => value,
                Err(e) => {
                    return parser_error!(
                        format!("invalid numeric literal {}: {}", token, e),
                        token.line,
                        token.column
                    );
                }
            };
            self.next()?;
            Ok(AstNode::NumericLiteral(value))
        } else if self.matches(TokenKind::Operator, Some("(")) {
            self.next()?;
            let expression = self.expression()?;
            self.expect(TokenKind::Operator, Some(")"))?;
            self.next()?;
            Ok(expression)
        } else {
            let token = self.current();
            parser_error!(
                format!("expected a variable, number or '(', but found {}", token),
                token.line,
                token.column
            )
        }
    }

    fn operator<T>(&self, from_symbol: fn(&str) -> Option<T>) -> Option<T> {
        if self.matches(TokenKind::Operator, None) {
            from_symbol(self.text())
        } else {
            None
        }
    }

    fn matches(&self, kind: TokenKind, text: Option<&str>) -> bool {
        self.current().is(kind, text)
    }

    fn expect(&self, kind: TokenKind, text: Option<&str>) -> Result<()> {
        if self.matches(kind, text) {
            return Ok(());
        }

        let token = self.current();
        let expected = match text {
            Some(text) => format!("\"{}\" ({})", kind, text),
            None => format!("\"{}\"", kind),
        };
        parser_error!(
            format!("expected {}, but found {}", expected, token),
            token.line,
            token.column
        )
    }

    fn next(&mut self) -> Result<()> {
        self.cursor.advance()
    }

    fn rewind(&mut self) {
        self.cursor.rewind();
    }

    fn current(&self) -> &Token {
        self.cursor.current()
    }

    fn text(&self) -> &str {
        self.current().text().unwrap_or_default()
    }
}

/// Lexes and parses `input` in one go. Failures are returned, not logged;
/// reporting them is up to the caller.
pub fn parse(input: &str) -> Result<AstNode> {
    debug!("Parsing {} characters of source", input.len());

    let cursor = Cursor::new(Lexer::new(input))?;
    let ast = AstBuilder::new(cursor).build()?;
    debug!("Parsing finished: {}", ast);
    Ok(ast)
}
