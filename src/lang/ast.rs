use super::ident::public_name;
use super::token::{Operator, POSTFIX_PRECEDENCE, UNARY_PRECEDENCE};
use crate::mach::Number;

/// Deepest tree the parser, substitution and evaluation will accept.
pub const MAX_NESTING: usize = 1024;

#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    Literal(Literal),
    Ident(String),
    Unary(Operator, Box<Node>),
    Binary(Operator, Box<Node>, Box<Node>),
    Call(String, Vec<Node>),
    Matrix(Vec<Node>),
    Assign(String, Box<Node>),
    Function(String, Vec<String>, Box<Node>),
    Comment(String),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(Number),
    Text(String),
    Boolean(bool),
}

impl Node {
    pub fn number(n: Number) -> Node {
        Node::Literal(Literal::Number(n))
    }

    pub fn text(s: &str) -> Node {
        Node::Literal(Literal::Text(s.to_string()))
    }

    pub fn boolean(b: bool) -> Node {
        Node::Literal(Literal::Boolean(b))
    }

    /// True when `name` is read anywhere outside a function body.
    pub fn mentions(&self, name: &str) -> bool {
        use Node::*;
        match self {
            Literal(_) | Comment(_) | Function(..) => false,
            Ident(n) => n == name,
            Unary(_, operand) => operand.mentions(name),
            Binary(_, lhs, rhs) => lhs.mentions(name) || rhs.mentions(name),
            Call(_, args) | Matrix(args) => args.iter().any(|n| n.mentions(name)),
            Assign(_, value) => value.mentions(name),
        }
    }

    /// True when `name` is the target of an assignment or the name or
    /// parameter of a function definition anywhere in the tree.
    pub fn assigns_to(&self, name: &str) -> bool {
        struct Targets<'a> {
            name: &'a str,
            found: bool,
        }
        impl<'a> Visitor for Targets<'a> {
            fn visit_node(&mut self, node: &Node) {
                match node {
                    Node::Assign(target, _) => self.found |= target == self.name,
                    Node::Function(fname, params, _) => {
                        self.found |= fname == self.name || params.iter().any(|p| p == self.name)
                    }
                    _ => {}
                }
            }
        }
        let mut targets = Targets { name, found: false };
        self.accept(&mut targets);
        targets.found
    }

    /// Follows `a = b = value` down to `value`.
    pub fn innermost_value(&self) -> &Node {
        let mut node = self;
        while let Node::Assign(_, value) = node {
            node = value;
        }
        node
    }

    /// Levels of nesting, counting this node.
    pub fn depth(&self) -> usize {
        use Node::*;
        1 + match self {
            Literal(_) | Comment(_) | Ident(_) => 0,
            Unary(_, operand) => operand.depth(),
            Binary(_, lhs, rhs) => lhs.depth().max(rhs.depth()),
            Call(_, args) | Matrix(args) => args.iter().map(Node::depth).max().unwrap_or(0),
            Assign(_, value) => value.depth(),
            Function(_, _, body) => body.depth(),
        }
    }

    /// Names bound by an assignment chain, outermost first.
    pub fn assignment_targets(&self) -> Vec<&str> {
        let mut targets = vec![];
        let mut node = self;
        while let Node::Assign(name, value) = node {
            targets.push(name.as_str());
            node = value;
        }
        targets
    }

    fn precedence(&self) -> usize {
        use Node::*;
        match self {
            Literal(self::Literal::Number(n)) if n.is_negative() => UNARY_PRECEDENCE,
            Unary(Operator::Factorial, _) => POSTFIX_PRECEDENCE,
            Unary(..) => UNARY_PRECEDENCE,
            Binary(op, ..) => op.precedence().unwrap_or(0),
            Assign(..) | Function(..) => 0,
            _ => usize::MAX,
        }
    }
}

pub trait Visitor {
    fn visit_node(&mut self, _: &Node) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Node {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Node::*;
        match self {
            Literal(_) | Ident(_) | Comment(_) => {}
            Unary(_, operand) => operand.accept(visitor),
            Binary(_, lhs, rhs) => {
                lhs.accept(visitor);
                rhs.accept(visitor);
            }
            Call(_, vec_node) | Matrix(vec_node) => {
                for node in vec_node {
                    node.accept(visitor);
                }
            }
            Assign(_, value) => value.accept(visitor),
            Function(_, _, body) => body.accept(visitor),
        }
        visitor.visit_node(self)
    }
}

fn write_list(f: &mut std::fmt::Formatter, items: &[Node]) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_operand(f: &mut std::fmt::Formatter, node: &Node, parens: bool) -> std::fmt::Result {
    if parens {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => {
                write!(f, "\"")?;
                for ch in s.chars() {
                    match ch {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                write!(f, "\"")
            }
            Literal::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Node::*;
        match self {
            Literal(l) => write!(f, "{}", l),
            Ident(name) => write!(f, "{}", public_name(name)),
            Unary(Operator::Factorial, operand) => {
                write_operand(f, operand, operand.precedence() < POSTFIX_PRECEDENCE)?;
                write!(f, "!")
            }
            Unary(op, operand) => {
                if op.is_word() {
                    write!(f, "{} ", op)?;
                } else {
                    write!(f, "{}", op)?;
                }
                write_operand(f, operand, operand.precedence() < UNARY_PRECEDENCE)
            }
            Binary(op, lhs, rhs) => {
                let prec = op.precedence().unwrap_or(0);
                let right_assoc = *op == Operator::Caret;
                let (lhs_parens, rhs_parens) = if right_assoc {
                    (lhs.precedence() <= prec, rhs.precedence() < prec)
                } else {
                    (lhs.precedence() < prec, rhs.precedence() <= prec)
                };
                write_operand(f, lhs, lhs_parens)?;
                write!(f, " {} ", op)?;
                write_operand(f, rhs, rhs_parens)
            }
            Call(name, args) => {
                write!(f, "{}(", public_name(name))?;
                write_list(f, args)?;
                write!(f, ")")
            }
            Matrix(items) => {
                write!(f, "[")?;
                write_list(f, items)?;
                write!(f, "]")
            }
            Assign(name, value) => write!(f, "{} = {}", public_name(name), value),
            Function(name, params, body) => {
                write!(f, "{}({}) = {}", name, params.join(", "), body)
            }
            Comment(text) => write!(f, "#{}", text),
        }
    }
}
