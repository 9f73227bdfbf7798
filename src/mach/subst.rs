use super::eval::too_deep;
use super::scope::{Binding, Scope};
use super::Val;
use crate::lang::ast::{Node, MAX_NESTING};
use crate::lang::{parse_str, Error};

type Result<T> = std::result::Result<T, Error>;

/// Replaces every free reference to a non-function binding with that
/// binding's tree. Spliced fragments are not scanned again, so one
/// binding's tree never picks up another binding. A result deeper than
/// `MAX_NESTING` is refused.
pub fn substitute(root: Node, scope: &Scope) -> Result<Node> {
    splice(root, scope, 1)
}

fn splice(node: Node, scope: &Scope, depth: usize) -> Result<Node> {
    use Node::*;
    if depth > MAX_NESTING {
        return Err(too_deep());
    }
    let next = depth + 1;
    match node {
        Literal(_) | Comment(_) | Function(..) => Ok(node),
        Ident(name) => match scope.get(&name) {
            Some(binding) if !binding.is_function() => {
                let tree = fragment(binding)?;
                if depth + tree.depth() - 1 > MAX_NESTING {
                    return Err(too_deep());
                }
                Ok(tree)
            }
            _ => Ok(Ident(name)),
        },
        Unary(op, operand) => Ok(Unary(op, Box::new(splice(*operand, scope, next)?))),
        Binary(op, lhs, rhs) => Ok(Binary(
            op,
            Box::new(splice(*lhs, scope, next)?),
            Box::new(splice(*rhs, scope, next)?),
        )),
        Call(name, args) => Ok(Call(name, splice_all(args, scope, next)?)),
        Matrix(items) => Ok(Matrix(splice_all(items, scope, next)?)),
        Assign(name, value) => Ok(Assign(name, Box::new(splice(*value, scope, next)?))),
    }
}

fn splice_all(nodes: Vec<Node>, scope: &Scope, depth: usize) -> Result<Vec<Node>> {
    nodes.into_iter().map(|n| splice(n, scope, depth)).collect()
}

/// The tree a binding stands for. Text is read as an expression.
fn fragment(binding: &Binding) -> Result<Node> {
    use Binding::*;
    match binding {
        Number(n) => Ok(Node::number(n.clone())),
        Boolean(b) => Ok(Node::boolean(*b)),
        Text(s) => parse_str(s),
        Collection(items) => Ok(Node::Matrix(items.iter().map(value_node).collect())),
        Expression(node) => Ok(node.clone()),
        Function(c) => Ok(Node::Ident(c.name().to_string())),
    }
}

/// A literal tree for an evaluated value.
pub fn value_node(val: &Val) -> Node {
    match val {
        Val::Number(n) => Node::number(n.clone()),
        Val::Text(s) => Node::text(s),
        Val::Boolean(b) => Node::boolean(*b),
        Val::Matrix(items) => Node::Matrix(items.iter().map(value_node).collect()),
        Val::Function(c) => Node::Ident(c.name().to_string()),
    }
}
