use log::trace;
use crate::language::ast::AstNode;
use crate::language::operators::{LogicalOp, UnaryOp};
use super::context::ExecutionContext;

pub(crate) fn from_bool(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Zero and NaN are false, everything else is true.
pub(crate) fn is_truthy(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

/// Computes expression values. The only side effect an expression can have
/// is an assignment writing into the context.
pub struct Evaluator<'a> {
    context: &'a mut ExecutionContext,
}

impl<'a> Evaluator<'a> {
    pub fn new(context: &'a mut ExecutionContext) -> Self {
        Evaluator { context }
    }

    pub fn evaluate(&mut self, expr: &AstNode) -> f64 {
        match expr {
            AstNode::Assignment { variable_name, expression } => {
                let value = self.evaluate(expression);
                trace!("Assigning {} = {}", variable_name, value);
                self.context.set_variable(variable_name, value);
                // the assignment itself yields 0, not the stored value
                0.0
            },
            AstNode::LogicalExpr { op, left, right } => {
                let left = is_truthy(self.evaluate(left));
                let result = match op {
                    LogicalOp::And => left && is_truthy(self.evaluate(right)),
                    LogicalOp::Or => left || is_truthy(self.evaluate(right)),
                };
                from_bool(result)
            },
            AstNode::Comparison { op, left, right } => {
                let left = self.evaluate(left);
                let right = self.evaluate(right);
                from_bool(op.apply(left, right))
            },
            AstNode::Arithmetic { op, left, right } => {
                let left = self.evaluate(left);
                let right = self.evaluate(right);
                op.apply(left, right)
            },
            AstNode::Term { op, left, right } => {
                let left = self.evaluate(left);
                let right = self.evaluate(right);
                op.apply(left, right)
            },
            AstNode::Unary { op, operand } => {
                let value = self.evaluate(operand);
                match op {
                    UnaryOp::Not => from_bool(!is_truthy(value)),
                    UnaryOp::Neg => -value,
                }
            },
            AstNode::Variable(name) => self.context.get_variable(name).unwrap_or(0.0),
            AstNode::NumericLiteral(value) => *value,
            AstNode::CodeBlock(_) | AstNode::If { .. } | AstNode::While { .. } | AstNode::Print(_) => {
                trace!("Statement node in expression position evaluates to 0: {}", expr);
                0.0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::parser::parse;

    fn eval(source: &str, context: &mut ExecutionContext) -> f64 {
        let ast = parse(source).unwrap();
        Evaluator::new(context).evaluate(&ast)
    }

    #[test]
    fn arithmetic_groups_to_the_right() {
        let mut context = ExecutionContext::new();
        assert_eq!(eval("10 - 3 - 2;", &mut context), 9.0);
        assert_eq!(eval("20 / 4 / 2;", &mut context), 10.0);
        assert_eq!(eval("2 * 3 + 4;", &mut context), 10.0);
    }

    #[test]
    fn comparisons_and_logic_yield_one_or_zero() {
        let mut context = ExecutionContext::new();
        assert_eq!(eval("3 >= 3;", &mut context), 1.0);
        assert_eq!(eval("3 != 3;", &mut context), 0.0);
        assert_eq!(eval("5 && 7;", &mut context), 1.0);
        assert_eq!(eval("0 || 0;", &mut context), 0.0);
        assert_eq!(eval("!5;", &mut context), 0.0);
        assert_eq!(eval("!0;", &mut context), 1.0);
        assert_eq!(eval("-(2 - 5);", &mut context), 3.0);
    }

    #[test]
    fn logical_operators_short_circuit() {
        let mut context = ExecutionContext::new();
        eval("0 && (x = 1);", &mut context);
        eval("1 || (y = 1);", &mut context);
        assert_eq!(context.get_variable("x"), None);
        assert_eq!(context.get_variable("y"), None);

        eval("1 && (x = 1);", &mut context);
        eval("0 || (y = 1);", &mut context);
        assert_eq!(context.get_variable("x"), Some(1.0));
        assert_eq!(context.get_variable("y"), Some(1.0));
    }

    #[test]
    fn comparison_evaluates_both_sides() {
        let mut context = ExecutionContext::new();
        eval("(a = 1) == (b = 2);", &mut context);
        assert_eq!(context.get_variable("a"), Some(1.0));
        assert_eq!(context.get_variable("b"), Some(2.0));
    }

    #[test]
    fn assignment_stores_value_but_yields_zero() {
        let mut context = ExecutionContext::new();
        assert_eq!(eval("z = (x = 5) + 1;", &mut context), 0.0);
        assert_eq!(context.get_variable("x"), Some(5.0));
        assert_eq!(context.get_variable("z"), Some(1.0));
    }

    #[test]
    fn unknown_variables_read_as_zero_without_being_stored() {
        let mut context = ExecutionContext::new();
        assert_eq!(eval("q + 1;", &mut context), 1.0);
        assert!(!context.has_variable("q"));
    }

    #[test]
    fn division_by_zero_follows_float_rules() {
        let mut context = ExecutionContext::new();
        assert_eq!(eval("1 / 0;", &mut context), f64::INFINITY);
        assert_eq!(eval("-1 / 0;", &mut context), f64::NEG_INFINITY);
        assert!(eval("0 / 0;", &mut context).is_nan());
    }

    #[test]
    fn nan_is_falsy_in_logic() {
        let mut context = ExecutionContext::new();
        assert_eq!(eval("!(0 / 0);", &mut context), 1.0);
        assert_eq!(eval("(0 / 0) && 1;", &mut context), 0.0);
        assert_eq!(eval("(0 / 0) || 0;", &mut context), 0.0);
        assert_eq!(eval("(0 / 0) || 2;", &mut context), 1.0);

        eval("(0 / 0) && (x = 1);", &mut context);
        assert_eq!(context.get_variable("x"), None);
    }
}
