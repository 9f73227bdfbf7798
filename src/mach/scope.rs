use super::function::{self, Callable, UserFunction};
use super::Val;
use crate::lang::ast::Node;
use crate::lang::CONTINUATION;
use indexmap::IndexMap;
use std::rc::Rc;

/// What a name in the [`Scope`] is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Number(super::Number),
    Text(String),
    Collection(Vec<Val>),
    Boolean(bool),
    Function(Callable),
    /// An unevaluated tree, spliced in wherever the name is referenced.
    Expression(Node),
}

impl Binding {
    pub fn is_function(&self) -> bool {
        matches!(self, Binding::Function(_))
    }
}

impl From<Val> for Binding {
    fn from(val: Val) -> Binding {
        match val {
            Val::Number(n) => Binding::Number(n),
            Val::Text(s) => Binding::Text(s),
            Val::Boolean(b) => Binding::Boolean(b),
            Val::Matrix(items) => Binding::Collection(items),
            Val::Function(c) => Binding::Function(c),
        }
    }
}

impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Binding::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Text(s) => write!(f, "{}", s),
            Collection(items) => write!(f, "{}", Val::Matrix(items.clone())),
            Boolean(b) => write!(f, "{}", b),
            Function(c) => write!(f, "{}", c),
            Expression(node) => write!(f, "{}", node),
        }
    }
}

/// ## Scope store
///
/// Every name the session knows about, in the order it was first bound.
/// The continuation slot lives here under its internal name.
#[derive(Debug, Clone)]
pub struct Scope {
    bindings: IndexMap<String, Binding>,
}

impl Default for Scope {
    fn default() -> Scope {
        let mut scope = Scope {
            bindings: IndexMap::new(),
        };
        for builtin in function::formatters() {
            scope.set(builtin.name, Binding::Function(Callable::Builtin(builtin)));
        }
        scope
    }
}

impl Scope {
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    pub fn set(&mut self, name: &str, binding: Binding) {
        self.bindings.insert(name.to_string(), binding);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn continuation(&self) -> Option<&Node> {
        match self.bindings.get(CONTINUATION) {
            Some(Binding::Expression(node)) => Some(node),
            _ => None,
        }
    }

    pub fn set_continuation(&mut self, node: Node) {
        self.set(CONTINUATION, Binding::Expression(node));
    }

    pub fn function(&self, name: &str) -> Option<&Callable> {
        match self.bindings.get(name) {
            Some(Binding::Function(c)) => Some(c),
            _ => None,
        }
    }

    pub fn define(&mut self, function: UserFunction) -> Callable {
        let name = function.name.clone();
        let callable = Callable::User(Rc::new(function));
        self.set(&name, Binding::Function(callable.clone()));
        callable
    }

    pub fn user_functions(&self) -> impl Iterator<Item = &Rc<UserFunction>> {
        self.bindings.values().filter_map(|b| match b {
            Binding::Function(Callable::User(u)) => Some(u),
            _ => None,
        })
    }
}
