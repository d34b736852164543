use std::fmt;
use serde::Serialize;
use crate::language::operators::{ArithmeticOp, ComparisonOp, LogicalOp, TermOp, UnaryOp};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AstNode {
    CodeBlock(Vec<AstNode>),
    If {
        condition: Box<AstNode>,
        positive_block: Box<AstNode>,
        negative_block: Option<Box<AstNode>>,
    },
    While {
        condition: Box<AstNode>,
        body: Box<AstNode>,
    },
    Print(Box<AstNode>),
    Assignment {
        variable_name: String,
        expression: Box<AstNode>,
    },
    LogicalExpr {
        op: LogicalOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    Comparison {
        op: ComparisonOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    Arithmetic {
        op: ArithmeticOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    Term {
        op: TermOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<AstNode>,
    },
    Variable(String),
    NumericLiteral(f64),
}

impl AstNode {
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            AstNode::CodeBlock(_) | AstNode::If { .. } | AstNode::While { .. } | AstNode::Print(_)
        )
    }
}

/// Writes statements back as source and expressions fully parenthesised,
/// so the grouping chosen by the parser is visible.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AstNode::CodeBlock(statements) => {
                write!(f, "{{")?;
                for stmt in statements {
                    write!(f, " {}", as_statement(stmt))?;
                }
                write!(f, " }}")
            },
            AstNode::If { condition, positive_block, negative_block } => {
                write!(f, "if ({}) {}", condition, as_statement(positive_block))?;
                if let Some(else_stmt) = negative_block {
                    write!(f, " else {}", as_statement(else_stmt))?;
                }
                Ok(())
            },
            AstNode::While { condition, body } => {
                write!(f, "while ({}) {}", condition, as_statement(body))
            },
            AstNode::Print(expression) => write!(f, "print {};", expression),
            AstNode::Assignment { variable_name, expression } => {
                write!(f, "({} = {})", variable_name, expression)
            },
            AstNode::LogicalExpr { op, left, right } => write!(f, "({} {} {})", left, op, right),
            AstNode::Comparison { op, left, right } => write!(f, "({} {} {})", left, op, right),
            AstNode::Arithmetic { op, left, right } => write!(f, "({} {} {})", left, op, right),
            AstNode::Term { op, left, right } => write!(f, "({} {} {})", left, op, right),
            AstNode::Unary { op, operand } => write!(f, "({}{})", op, operand),
            AstNode::Variable(name) => write!(f, "{}", name),
            AstNode::NumericLiteral(value) => write!(f, "{}", value),
        }
    }
}

fn as_statement(node: &AstNode) -> String {
    if node.is_statement() {
        node.to_string()
    } else {
        format!("{};", node)
    }
}
