use super::Callable;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(super::Number),
    Text(String),
    Boolean(bool),
    Matrix(Vec<Val>),
    Function(Callable),
}

impl Val {
    pub fn to_number(&self) -> Result<super::Number> {
        use Val::*;
        match self {
            Number(n) => Ok(n.clone()),
            Boolean(true) => Ok(super::Number::one()),
            Boolean(false) => Ok(super::Number::zero()),
            Text(s) => s
                .trim()
                .parse::<super::Number>()
                .map_err(|_| error!(TypeMismatch; &format!("Cannot convert \"{}\" to a number", s))),
            Matrix(_) | Function(_) => Err(error!(TypeMismatch;
                &format!("Unexpected type of argument ({})", self.type_name()))),
        }
    }

    pub fn is_truthy(&self) -> Result<bool> {
        use Val::*;
        match self {
            Boolean(b) => Ok(*b),
            Number(n) => Ok(!n.is_zero()),
            Text(s) => Ok(!s.is_empty()),
            Matrix(_) | Function(_) => Err(error!(TypeMismatch;
                &format!("Unexpected type of argument ({})", self.type_name()))),
        }
    }

    pub fn type_name(&self) -> &'static str {
        use Val::*;
        match self {
            Number(_) => "number",
            Text(_) => "string",
            Boolean(_) => "boolean",
            Matrix(_) => "matrix",
            Function(_) => "function",
        }
    }
}

impl From<super::Number> for Val {
    fn from(n: super::Number) -> Val {
        Val::Number(n)
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Boolean(b)
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Number(n) => write!(f, "{}", n),
            Text(s) => write!(f, "{}", s),
            Boolean(b) => write!(f, "{}", b),
            Matrix(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        Text(s) => write!(f, "{:?}", s)?,
                        _ => write!(f, "{}", item)?,
                    }
                }
                write!(f, "]")
            }
            Function(c) => write!(f, "{}", c),
        }
    }
}
