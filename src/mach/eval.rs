use super::function::{self, Callable, UserFunction};
use super::scope::{Binding, Scope};
use super::{matrix, Operation, Val};
use crate::error;
use crate::lang::ast::{Literal, Node, MAX_NESTING};
use crate::lang::{Error, CONTINUATION};
use std::collections::HashMap;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// Nesting limit for user function calls and bound expressions.
pub const MAX_CALL_DEPTH: usize = 512;

/// Limit on nodes entered at once, calls and bound expressions included.
const MAX_EVAL_NESTING: usize = 4 * MAX_NESTING;

pub fn too_deep() -> Error {
    error!(CallDepth; "Expression nested too deeply")
}

pub fn evaluate(node: &Node, scope: &mut Scope) -> Result<Val> {
    Evaluator {
        scope,
        frames: vec![],
        depth: 0,
        nesting: 0,
    }
    .eval(node)
}

struct Evaluator<'a> {
    scope: &'a mut Scope,
    frames: Vec<HashMap<String, Val>>,
    depth: usize,
    nesting: usize,
}

impl<'a> Evaluator<'a> {
    fn eval(&mut self, node: &Node) -> Result<Val> {
        if self.nesting >= MAX_EVAL_NESTING {
            return Err(too_deep());
        }
        self.nesting += 1;
        let result = self.eval_node(node);
        self.nesting -= 1;
        result
    }

    fn eval_node(&mut self, node: &Node) -> Result<Val> {
        use Node::*;
        match node {
            Literal(l) => Ok(literal(l)),
            Ident(name) => self.lookup(name),
            Unary(op, operand) => {
                let v = self.eval(operand)?;
                Operation::unary(*op, v)
            }
            Binary(op, lhs, rhs) => {
                let l = self.eval(lhs)?;
                let r = self.eval(rhs)?;
                Operation::binary(*op, l, r)
            }
            Call(name, args) => {
                let mut vals = Vec::with_capacity(args.len());
                for arg in args {
                    vals.push(self.eval(arg)?);
                }
                let callable = self.callable(name)?;
                self.call(&callable, vals)
            }
            Matrix(items) => {
                let mut vals = Vec::with_capacity(items.len());
                for item in items {
                    vals.push(self.eval(item)?);
                }
                matrix::shape(&vals)?;
                Ok(Val::Matrix(vals))
            }
            Assign(name, value) => {
                if name == CONTINUATION {
                    return Err(error!(ReservedAssignment));
                }
                let v = self.eval(value)?;
                match self.frames.last_mut() {
                    Some(frame) => {
                        frame.insert(name.clone(), v.clone());
                    }
                    None => self.scope.set(name, Binding::from(v.clone())),
                }
                Ok(v)
            }
            Function(name, params, body) => {
                if name == CONTINUATION || params.iter().any(|p| p == CONTINUATION) {
                    return Err(error!(ReservedAssignment));
                }
                let callable = self.scope.define(UserFunction {
                    name: name.clone(),
                    params: params.clone(),
                    body: (**body).clone(),
                    source: node.to_string(),
                });
                Ok(Val::Function(callable))
            }
            Comment(_) => Ok(Val::Text(String::new())),
        }
    }

    fn lookup(&mut self, name: &str) -> Result<Val> {
        if let Some(v) = self.frames.last().and_then(|frame| frame.get(name)) {
            return Ok(v.clone());
        }
        let binding = self.scope.get(name).cloned();
        match binding {
            Some(Binding::Number(n)) => return Ok(Val::Number(n)),
            Some(Binding::Text(s)) => return Ok(Val::Text(s)),
            Some(Binding::Collection(items)) => return Ok(Val::Matrix(items)),
            Some(Binding::Boolean(b)) => return Ok(Val::Boolean(b)),
            Some(Binding::Function(c)) => return Ok(Val::Function(c)),
            Some(Binding::Expression(node)) => {
                self.enter()?;
                let v = self.eval(&node);
                self.depth -= 1;
                return v;
            }
            None => {}
        }
        if let Some(n) = function::constant(name) {
            return Ok(Val::Number(n));
        }
        if let Some(b) = function::builtin(name) {
            return Ok(Val::Function(Callable::Builtin(b)));
        }
        if name == CONTINUATION {
            return Err(error!(EmptyContinuation));
        }
        Err(error!(UndefinedSymbol; &format!("Undefined symbol {}", name)))
    }

    fn callable(&self, name: &str) -> Result<Callable> {
        if let Some(Val::Function(c)) = self.frames.last().and_then(|frame| frame.get(name)) {
            return Ok(c.clone());
        }
        if let Some(c) = self.scope.function(name) {
            return Ok(c.clone());
        }
        if let Some(b) = function::builtin(name) {
            return Ok(Callable::Builtin(b));
        }
        if self.scope.get(name).is_some() {
            return Err(error!(TypeMismatch; &format!("{} is not a function", name)));
        }
        Err(error!(UndefinedSymbol; &format!("Undefined function {}", name)))
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_CALL_DEPTH {
            return Err(error!(CallDepth; "Maximum call stack size exceeded"));
        }
        self.depth += 1;
        Ok(())
    }

    fn call(&mut self, callable: &Callable, args: Vec<Val>) -> Result<Val> {
        let f = match callable {
            Callable::Builtin(b) => return b.call(args),
            Callable::User(f) => f.clone(),
        };
        if args.len() != f.params.len() {
            return Err(error!(TypeMismatch; &format!(
                "Wrong number of arguments in function {} ({} provided, {} expected)",
                f.name,
                args.len(),
                f.params.len()
            )));
        }
        self.enter()?;
        trace!(function = %f.name, depth = self.depth, "call");
        let frame: HashMap<String, Val> = f.params.iter().cloned().zip(args).collect();
        self.frames.push(frame);
        let result = self.eval(&f.body);
        self.frames.pop();
        self.depth -= 1;
        result
    }
}

fn literal(l: &Literal) -> Val {
    match l {
        Literal::Number(n) => Val::Number(n.clone()),
        Literal::Text(s) => Val::Text(s.clone()),
        Literal::Boolean(b) => Val::Boolean(*b),
    }
}
