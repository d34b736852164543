use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOp {
    #[display("&&")]
    And,
    #[display("||")]
    Or,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonOp {
    #[display("==")]
    Eq,
    #[display("!=")]
    Ne,
    #[display(">")]
    Gt,
    #[display(">=")]
    Ge,
    #[display("<")]
    Lt,
    #[display("<=")]
    Le,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArithmeticOp {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TermOp {
    #[display("*")]
    Mul,
    #[display("/")]
    Div,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    #[display("!")]
    Not,
    #[display("-")]
    Neg,
}

impl LogicalOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "&&" => Some(LogicalOp::And),
            "||" => Some(LogicalOp::Or),
            _ => None,
        }
    }
}

impl ComparisonOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(ComparisonOp::Eq),
            "!=" => Some(ComparisonOp::Ne),
            ">" => Some(ComparisonOp::Gt),
            ">=" => Some(ComparisonOp::Ge),
            "<" => Some(ComparisonOp::Lt),
            "<=" => Some(ComparisonOp::Le),
            _ => None,
        }
    }

    pub fn apply(self, left: f64, right: f64) -> bool {
        match self {
            ComparisonOp::Eq => left == right,
            ComparisonOp::Ne => left != right,
            ComparisonOp::Gt => left > right,
            ComparisonOp::Ge => left >= right,
            ComparisonOp::Lt => left < right,
            ComparisonOp::Le => left <= right,
        }
    }
}

impl ArithmeticOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(ArithmeticOp::Add),
            "-" => Some(ArithmeticOp::Sub),
            _ => None,
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            ArithmeticOp::Add => left + right,
            ArithmeticOp::Sub => left - right,
        }
    }
}

impl TermOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "*" => Some(TermOp::Mul),
            "/" => Some(TermOp::Div),
            _ => None,
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            TermOp::Mul => left * right,
            TermOp::Div => left / right,
        }
    }
}

impl UnaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "!" => Some(UnaryOp::Not),
            "-" => Some(UnaryOp::Neg),
            _ => None,
        }
    }
}
