use super::function;
use super::{Number, Operation, Val};
use crate::lang::ast::{Literal, Node};
use crate::lang::token::Operator;

/// `f(n) -> n`: a call to `f` with one argument is replaced by the argument.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    function: &'static str,
}

impl Rule {
    pub fn new(function: &'static str) -> Rule {
        Rule { function }
    }

    fn apply(&self, node: Node) -> Result<Node, Node> {
        match node {
            Node::Call(name, mut args) if name == self.function && args.len() == 1 => {
                Ok(args.remove(0))
            }
            node => Err(node),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}(n) -> n", self.function)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// One elision rule per registered formatting function.
    pub fn formatting() -> RuleSet {
        RuleSet {
            rules: function::formatters().map(|b| Rule::new(b.name)).collect(),
        }
    }

    /// No rules: only arithmetic on number literals is folded, so formatter
    /// calls stay in place.
    pub fn folding() -> RuleSet {
        RuleSet { rules: vec![] }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rewrites bottom-up until no rule applies, folding arithmetic on
    /// number literals along the way.
    pub fn simplify(&self, node: Node) -> Node {
        use Node::*;
        let node = match node {
            Unary(op, operand) => Unary(op, Box::new(self.simplify(*operand))),
            Binary(op, lhs, rhs) => Binary(
                op,
                Box::new(self.simplify(*lhs)),
                Box::new(self.simplify(*rhs)),
            ),
            Call(name, args) => Call(name, args.into_iter().map(|a| self.simplify(a)).collect()),
            Matrix(items) => Matrix(items.into_iter().map(|i| self.simplify(i)).collect()),
            Assign(name, value) => Assign(name, Box::new(self.simplify(*value))),
            node => node,
        };
        let mut node = node;
        for rule in &self.rules {
            match rule.apply(node) {
                Ok(arg) => return self.simplify(arg),
                Err(unchanged) => node = unchanged,
            }
        }
        fold(node)
    }

    /// Simplifies the operands of an operator or call root, leaving the
    /// root itself alone.
    pub fn simplify_operands(&self, root: Node) -> Node {
        use Node::*;
        match root {
            Unary(op, operand) => Unary(op, Box::new(self.simplify(*operand))),
            Binary(op, lhs, rhs) => Binary(
                op,
                Box::new(self.simplify(*lhs)),
                Box::new(self.simplify(*rhs)),
            ),
            Call(name, args) => Call(name, args.into_iter().map(|a| self.simplify(a)).collect()),
            root => root,
        }
    }
}

fn number(node: &Node) -> Option<&Number> {
    match node {
        Node::Literal(Literal::Number(n)) => Some(n),
        _ => None,
    }
}

/// Exact arithmetic on two number literals. A quotient is folded only
/// when it terminates.
fn fold(node: Node) -> Node {
    use Operator::*;
    let folded = match &node {
        Node::Binary(op @ Plus, lhs, rhs)
        | Node::Binary(op @ Minus, lhs, rhs)
        | Node::Binary(op @ Multiply, lhs, rhs) => match (number(lhs), number(rhs)) {
            (Some(l), Some(r)) => {
                match Operation::binary(*op, Val::Number(l.clone()), Val::Number(r.clone())) {
                    Ok(Val::Number(n)) => Some(n),
                    _ => None,
                }
            }
            _ => None,
        },
        Node::Binary(Divide, lhs, rhs) => match (number(lhs), number(rhs)) {
            (Some(l), Some(r)) => exact_quotient(l, r),
            _ => None,
        },
        _ => None,
    };
    match folded {
        Some(n) => Node::number(n),
        None => node,
    }
}

fn exact_quotient(l: &Number, r: &Number) -> Option<Number> {
    let q = l.div(r).ok()?;
    if q.mul(r) == *l {
        Some(q)
    } else {
        None
    }
}
