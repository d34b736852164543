use log::trace;
use crate::language::ast::AstNode;
use super::context::ExecutionContext;
use super::evaluator::{is_truthy, Evaluator};
use super::Output;

/// Runs statement nodes; expressions are handed to the [`Evaluator`].
pub struct Executor<'a, O: Output> {
    context: &'a mut ExecutionContext,
    output: &'a mut O,
}

impl<'a, O: Output> Executor<'a, O> {
    pub fn new(context: &'a mut ExecutionContext, output: &'a mut O) -> Self {
        Executor { context, output }
    }

    pub fn execute(&mut self, node: &AstNode) {
        match node {
            AstNode::CodeBlock(statements) => {
                trace!("Executing block of {} statements", statements.len());
                for stmt in statements {
                    self.execute(stmt);
                }
            },
            AstNode::If { condition, positive_block, negative_block } => {
                if is_truthy(self.evaluate(condition)) {
                    self.execute(positive_block);
                } else if let Some(negative_block) = negative_block {
                    self.execute(negative_block);
                }
            },
            AstNode::While { condition, body } => {
                while is_truthy(self.evaluate(condition)) {
                    self.execute(body);
                }
            },
            AstNode::Print(expression) => {
                let value = self.evaluate(expression);
                self.output.print_line(value);
            },
            _ => {
                self.evaluate(node);
            },
        }
    }

    fn evaluate(&mut self, expr: &AstNode) -> f64 {
        Evaluator::new(self.context).evaluate(expr)
    }
}
