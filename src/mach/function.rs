use super::{matrix, Number, Operation, Val};
use crate::error;
use crate::lang::ast::Node;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

const VARIADIC: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Turns a number into display text. Elided inside larger expressions.
    Formatter,
    Math,
}

/// One entry of the registered-function table.
#[derive(Debug)]
pub struct Builtin {
    pub name: &'static str,
    pub syntax: &'static str,
    pub kind: Kind,
    arity: (usize, usize),
    imp: fn(Vec<Val>) -> Result<Val>,
}

impl Builtin {
    pub fn call(&self, args: Vec<Val>) -> Result<Val> {
        let (min, max) = self.arity;
        if args.len() < min {
            return Err(error!(TypeMismatch; &format!(
                "Too few arguments in function {} (expected: {}, actual: {})",
                self.name,
                min,
                args.len()
            )));
        }
        if args.len() > max {
            return Err(error!(TypeMismatch; &format!(
                "Too many arguments in function {} (expected: {}, actual: {})",
                self.name,
                max,
                args.len()
            )));
        }
        (self.imp)(args)
    }
}

pub fn builtin(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

pub fn builtins() -> impl Iterator<Item = &'static Builtin> {
    BUILTINS.iter()
}

pub fn formatters() -> impl Iterator<Item = &'static Builtin> {
    BUILTINS.iter().filter(|b| b.kind == Kind::Formatter)
}

pub fn constant(name: &str) -> Option<Number> {
    let two = Number::from(2);
    match name {
        "pi" | "PI" => Some(Number::pi()),
        "e" | "E" => Some(Number::e()),
        "tau" => Some(Number::pi().mul(&two)),
        "phi" => {
            let root = Number::from(5).sqrt().ok()?;
            root.add(&Number::one()).div(&two).ok()
        }
        "LN2" => two.ln().ok(),
        "LN10" => Some(Number::ln10()),
        "SQRT2" => two.sqrt().ok(),
        _ => None,
    }
}

/// A function the user defined with `f(x) = ...`.
#[derive(Debug)]
pub struct UserFunction {
    pub name: String,
    pub params: Vec<String>,
    pub body: Node,
    pub source: String,
}

#[derive(Debug, Clone)]
pub enum Callable {
    Builtin(&'static Builtin),
    User(Rc<UserFunction>),
}

impl Callable {
    pub fn name(&self) -> &str {
        match self {
            Callable::Builtin(b) => b.name,
            Callable::User(u) => &u.name,
        }
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Callable) -> bool {
        match (self, other) {
            (Callable::Builtin(l), Callable::Builtin(r)) => l.name == r.name,
            (Callable::User(l), Callable::User(r)) => Rc::ptr_eq(l, r),
            _ => false,
        }
    }
}

impl std::fmt::Display for Callable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Callable::Builtin(b) => write!(f, "{}", b.syntax),
            Callable::User(u) => write!(f, "{}", u.source),
        }
    }
}

fn first(args: Vec<Val>) -> Result<Val> {
    match args.into_iter().next() {
        Some(v) => Ok(v),
        None => Err(error!(InternalError; "Missing argument")),
    }
}

fn two(args: Vec<Val>) -> Result<(Val, Val)> {
    let mut it = args.into_iter();
    match (it.next(), it.next()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(error!(InternalError; "Missing argument")),
    }
}

fn each<F: Fn(&Number) -> Result<Number>>(args: Vec<Val>, f: F) -> Result<Val> {
    Operation::map(first(args)?, &|v| Ok(Val::Number(f(&v.to_number()?)?)))
}

fn each_text<F: Fn(&Number) -> String>(args: Vec<Val>, f: F) -> Result<Val> {
    Operation::map(first(args)?, &|v| Ok(Val::Text(f(&v.to_number()?))))
}

/// Scalars from the argument list, or the elements of a single collection.
fn numbers(args: Vec<Val>) -> Result<Vec<Number>> {
    let values = match args.as_slice() {
        [Val::Matrix(items)] => matrix::flatten(items),
        _ => matrix::flatten(&args),
    };
    values.iter().map(|v| v.to_number()).collect()
}

fn hex(args: Vec<Val>) -> Result<Val> {
    each_text(args, |n| format!("0x{}", n.to_radix_string(16)))
}

fn bin(args: Vec<Val>) -> Result<Val> {
    each_text(args, |n| format!("0b{}", n.to_radix_string(2)))
}

fn eng(args: Vec<Val>) -> Result<Val> {
    each_text(args, |n| n.to_engineering_string())
}

fn fix(args: Vec<Val>) -> Result<Val> {
    each_text(args, |n| n.to_fixed_string())
}

fn exponential(args: Vec<Val>) -> Result<Val> {
    each_text(args, |n| n.to_exponential_string())
}

fn abs(args: Vec<Val>) -> Result<Val> {
    each(args, |n| Ok(n.abs()))
}

fn sign(args: Vec<Val>) -> Result<Val> {
    each(args, |n| Ok(n.sign()))
}

fn sqrt(args: Vec<Val>) -> Result<Val> {
    each(args, Number::sqrt)
}

fn cbrt(args: Vec<Val>) -> Result<Val> {
    each(args, Number::cbrt)
}

fn exp(args: Vec<Val>) -> Result<Val> {
    each(args, Number::exp)
}

fn log(args: Vec<Val>) -> Result<Val> {
    if args.len() == 2 {
        let (x, base) = two(args)?;
        let base = base.to_number()?;
        return Operation::map(x, &|v| Ok(Val::Number(v.to_number()?.log(&base)?)));
    }
    each(args, Number::ln)
}

fn log2(args: Vec<Val>) -> Result<Val> {
    each(args, Number::log2)
}

fn log10(args: Vec<Val>) -> Result<Val> {
    each(args, Number::log10)
}

fn sin(args: Vec<Val>) -> Result<Val> {
    each(args, |n| Ok(n.sin()))
}

fn cos(args: Vec<Val>) -> Result<Val> {
    each(args, |n| Ok(n.cos()))
}

fn tan(args: Vec<Val>) -> Result<Val> {
    each(args, Number::tan)
}

fn asin(args: Vec<Val>) -> Result<Val> {
    each(args, Number::asin)
}

fn acos(args: Vec<Val>) -> Result<Val> {
    each(args, Number::acos)
}

fn atan(args: Vec<Val>) -> Result<Val> {
    each(args, |n| Ok(n.atan()))
}

fn atan2(args: Vec<Val>) -> Result<Val> {
    let (y, x) = two(args)?;
    Ok(Val::Number(y.to_number()?.atan2(&x.to_number()?)))
}

fn sinh(args: Vec<Val>) -> Result<Val> {
    each(args, Number::sinh)
}

fn cosh(args: Vec<Val>) -> Result<Val> {
    each(args, Number::cosh)
}

fn tanh(args: Vec<Val>) -> Result<Val> {
    each(args, Number::tanh)
}

fn floor(args: Vec<Val>) -> Result<Val> {
    each(args, |n| Ok(n.floor()))
}

fn ceil(args: Vec<Val>) -> Result<Val> {
    each(args, |n| Ok(n.ceil()))
}

fn round(args: Vec<Val>) -> Result<Val> {
    if args.len() == 2 {
        let (x, places) = two(args)?;
        let places = match places.to_number()?.to_i64() {
            Some(p) if (0..=1000).contains(&p) => p,
            _ => {
                return Err(error!(IllegalFunctionCall;
                    "Number of decimals in function round must be an integer from 0 to 1000"))
            }
        };
        return Operation::map(x, &|v| Ok(Val::Number(v.to_number()?.round(places))));
    }
    each(args, |n| Ok(n.round(0)))
}

fn modulus(args: Vec<Val>) -> Result<Val> {
    let (x, y) = two(args)?;
    Operation::modulus(x, y)
}

fn pow(args: Vec<Val>) -> Result<Val> {
    let (x, y) = two(args)?;
    Operation::power(x, y)
}

fn gcd(args: Vec<Val>) -> Result<Val> {
    let mut it = numbers(args)?.into_iter();
    let mut acc = it.next().unwrap_or_else(Number::zero);
    for n in it {
        acc = acc.gcd(&n)?;
    }
    Ok(Val::Number(acc.abs()))
}

fn lcm(args: Vec<Val>) -> Result<Val> {
    let mut it = numbers(args)?.into_iter();
    let mut acc = it.next().unwrap_or_else(Number::one);
    for n in it {
        acc = acc.lcm(&n)?;
    }
    Ok(Val::Number(acc.abs()))
}

fn factorial(args: Vec<Val>) -> Result<Val> {
    Operation::factorial(first(args)?)
}

fn extreme(args: Vec<Val>, name: &str, pick: fn(&Number, &Number) -> bool) -> Result<Val> {
    let mut it = numbers(args)?.into_iter();
    let mut acc = match it.next() {
        Some(n) => n,
        None => {
            return Err(error!(TypeMismatch;
                &format!("Cannot calculate {}, no values provided", name)))
        }
    };
    for n in it {
        if pick(&n, &acc) {
            acc = n;
        }
    }
    Ok(Val::Number(acc))
}

fn min(args: Vec<Val>) -> Result<Val> {
    extreme(args, "min", |n, acc| n < acc)
}

fn max(args: Vec<Val>) -> Result<Val> {
    extreme(args, "max", |n, acc| n > acc)
}

fn sum(args: Vec<Val>) -> Result<Val> {
    let mut acc = Number::zero();
    for n in numbers(args)? {
        acc = acc.add(&n);
    }
    Ok(Val::Number(acc))
}

fn size(args: Vec<Val>) -> Result<Val> {
    match first(args)? {
        Val::Matrix(items) => matrix::size(&items),
        Val::Text(s) => Ok(Val::Matrix(vec![Val::Number(
            (s.chars().count() as i64).into(),
        )])),
        _ => Ok(Val::Matrix(vec![])),
    }
}

fn transpose(args: Vec<Val>) -> Result<Val> {
    match first(args)? {
        Val::Matrix(items) => matrix::transpose(&items),
        v => Ok(v),
    }
}

fn random(args: Vec<Val>) -> Result<Val> {
    let (lo, hi) = match args.len() {
        0 => (Number::zero(), Number::one()),
        1 => (Number::zero(), first(args)?.to_number()?),
        _ => {
            let (lo, hi) = two(args)?;
            (lo.to_number()?, hi.to_number()?)
        }
    };
    let r = Number::from_f64(rand::random::<f64>());
    Ok(Val::Number(lo.add(&hi.sub(&lo).mul(&r))))
}

macro_rules! builtin {
    ($name:expr, $syntax:expr, $kind:ident, $min:expr, $max:expr, $imp:expr) => {
        Builtin {
            name: $name,
            syntax: $syntax,
            kind: Kind::$kind,
            arity: ($min, $max),
            imp: $imp,
        }
    };
}

static BUILTINS: &[Builtin] = &[
    builtin!("hex", "hex(n)", Formatter, 1, 1, hex),
    builtin!("bin", "bin(n)", Formatter, 1, 1, bin),
    builtin!("eng", "eng(n)", Formatter, 1, 1, eng),
    builtin!("fix", "fix(n)", Formatter, 1, 1, fix),
    builtin!("_exp", "_exp(n)", Formatter, 1, 1, exponential),
    builtin!("abs", "abs(x)", Math, 1, 1, abs),
    builtin!("sign", "sign(x)", Math, 1, 1, sign),
    builtin!("sqrt", "sqrt(x)", Math, 1, 1, sqrt),
    builtin!("cbrt", "cbrt(x)", Math, 1, 1, cbrt),
    builtin!("exp", "exp(x)", Math, 1, 1, exp),
    builtin!("log", "log(x[, base])", Math, 1, 2, log),
    builtin!("log2", "log2(x)", Math, 1, 1, log2),
    builtin!("log10", "log10(x)", Math, 1, 1, log10),
    builtin!("sin", "sin(x)", Math, 1, 1, sin),
    builtin!("cos", "cos(x)", Math, 1, 1, cos),
    builtin!("tan", "tan(x)", Math, 1, 1, tan),
    builtin!("asin", "asin(x)", Math, 1, 1, asin),
    builtin!("acos", "acos(x)", Math, 1, 1, acos),
    builtin!("atan", "atan(x)", Math, 1, 1, atan),
    builtin!("atan2", "atan2(y, x)", Math, 2, 2, atan2),
    builtin!("sinh", "sinh(x)", Math, 1, 1, sinh),
    builtin!("cosh", "cosh(x)", Math, 1, 1, cosh),
    builtin!("tanh", "tanh(x)", Math, 1, 1, tanh),
    builtin!("floor", "floor(x)", Math, 1, 1, floor),
    builtin!("ceil", "ceil(x)", Math, 1, 1, ceil),
    builtin!("round", "round(x[, n])", Math, 1, 2, round),
    builtin!("mod", "mod(x, y)", Math, 2, 2, modulus),
    builtin!("pow", "pow(x, y)", Math, 2, 2, pow),
    builtin!("gcd", "gcd(a, b, ...)", Math, 1, VARIADIC, gcd),
    builtin!("lcm", "lcm(a, b, ...)", Math, 1, VARIADIC, lcm),
    builtin!("factorial", "factorial(n)", Math, 1, 1, factorial),
    builtin!("min", "min(a, b, ...)", Math, 1, VARIADIC, min),
    builtin!("max", "max(a, b, ...)", Math, 1, VARIADIC, max),
    builtin!("sum", "sum(a, b, ...)", Math, 1, VARIADIC, sum),
    builtin!("size", "size(x)", Math, 1, 1, size),
    builtin!("transpose", "transpose(x)", Math, 1, 1, transpose),
    builtin!("random", "random([min, ]max)", Math, 0, 2, random),
];
