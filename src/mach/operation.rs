use super::{matrix, Val};
use crate::error;
use crate::lang::token::Operator;
use crate::lang::Error;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: Val, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Caret => Operation::power(lhs, rhs),
            Multiply => Operation::product(lhs, rhs),
            Divide => Operation::quotient(lhs, rhs),
            Modulus => Operation::modulus(lhs, rhs),
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::difference(lhs, rhs),
            Equal => Operation::equal(lhs, rhs),
            NotEqual => Operation::not_equal(lhs, rhs),
            Less => Operation::less(lhs, rhs),
            LessEqual => Operation::less_equal(lhs, rhs),
            Greater => Operation::greater(lhs, rhs),
            GreaterEqual => Operation::greater_equal(lhs, rhs),
            BitAnd => Operation::bit_and(lhs, rhs),
            BitOr => Operation::bit_or(lhs, rhs),
            BitXor => Operation::bit_xor(lhs, rhs),
            ShiftLeft => Operation::shift_left(lhs, rhs),
            ShiftRight => Operation::shift_right(lhs, rhs),
            And => Operation::and(lhs, rhs),
            Or => Operation::or(lhs, rhs),
            Xor => Operation::xor(lhs, rhs),
            Factorial | BitNot | Not => Err(error!(InternalError; "Not a binary operator")),
        }
    }

    pub fn unary(op: Operator, val: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Minus => Operation::negate(val),
            Plus => Operation::map(val, &|v| Ok(Val::Number(v.to_number()?))),
            BitNot => Operation::bit_not(val),
            Not => Operation::not(val),
            Factorial => Operation::factorial(val),
            _ => Err(error!(InternalError; "Not a unary operator")),
        }
    }

    /// Applies `f` to every element of a collection, or to a scalar.
    pub fn map<F: Fn(Val) -> Result<Val>>(val: Val, f: &F) -> Result<Val> {
        match val {
            Val::Matrix(items) => {
                let out: Result<Vec<Val>> =
                    items.into_iter().map(|v| Operation::map(v, f)).collect();
                Ok(Val::Matrix(out?))
            }
            v => f(v),
        }
    }

    fn broadcast(lhs: Val, rhs: Val, op: fn(Val, Val) -> Result<Val>) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Matrix(l), Matrix(r)) => {
                if l.len() != r.len() {
                    return Err(error!(DimensionMismatch; &format!(
                        "Dimension mismatch ({} != {})",
                        l.len(),
                        r.len()
                    )));
                }
                let out: Result<Vec<Val>> =
                    l.into_iter().zip(r.into_iter()).map(|(l, r)| op(l, r)).collect();
                Ok(Matrix(out?))
            }
            (Matrix(l), r) => {
                let out: Result<Vec<Val>> = l.into_iter().map(|l| op(l, r.clone())).collect();
                Ok(Matrix(out?))
            }
            (l, Matrix(r)) => {
                let out: Result<Vec<Val>> = r.into_iter().map(|r| op(l.clone(), r)).collect();
                Ok(Matrix(out?))
            }
            (l, r) => op(l, r),
        }
    }

    pub fn negate(val: Val) -> Result<Val> {
        Operation::map(val, &|v| Ok(Val::Number(v.to_number()?.neg())))
    }

    pub fn factorial(val: Val) -> Result<Val> {
        Operation::map(val, &|v| Ok(Val::Number(v.to_number()?.factorial()?)))
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Text(l), Text(r)) => Ok(Text(l + &r)),
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::sum),
            (l, r) => Ok(Number(l.to_number()?.add(&r.to_number()?))),
        }
    }

    pub fn difference(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::difference)
            }
            (l, r) => Ok(Number(l.to_number()?.sub(&r.to_number()?))),
        }
    }

    pub fn product(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Matrix(l), Matrix(r)) => matrix::multiply(&l, &r),
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::product)
            }
            (l, r) => Ok(Number(l.to_number()?.mul(&r.to_number()?))),
        }
    }

    pub fn quotient(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Matrix(_), Matrix(_)) => Err(error!(TypeMismatch;
                "Division of two matrices is not supported")),
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::quotient)
            }
            (l, r) => Ok(Number(l.to_number()?.div(&r.to_number()?)?)),
        }
    }

    pub fn modulus(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::modulus)
            }
            (l, r) => Ok(Number(l.to_number()?.modulo(&r.to_number()?)?)),
        }
    }

    pub fn power(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Matrix(_), _) | (_, Matrix(_)) => Err(error!(TypeMismatch;
                "Matrix exponentiation is not supported")),
            (l, r) => Ok(Number(l.to_number()?.pow(&r.to_number()?)?)),
        }
    }

    fn compare(lhs: &Val, rhs: &Val) -> Result<Ordering> {
        use Val::*;
        match (lhs, rhs) {
            (Text(l), Text(r)) => Ok(l.cmp(r)),
            (l, r) => Ok(l.to_number()?.cmp(&r.to_number()?)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::equal),
            (l, r) => Ok(Boolean(Operation::compare(&l, &r)? == Ordering::Equal)),
        }
    }

    pub fn not_equal(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::not_equal)
            }
            (l, r) => Ok(Boolean(Operation::compare(&l, &r)? != Ordering::Equal)),
        }
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::less),
            (l, r) => Ok(Boolean(Operation::compare(&l, &r)? == Ordering::Less)),
        }
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::less_equal)
            }
            (l, r) => Ok(Boolean(Operation::compare(&l, &r)? != Ordering::Greater)),
        }
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::greater)
            }
            (l, r) => Ok(Boolean(Operation::compare(&l, &r)? == Ordering::Greater)),
        }
    }

    pub fn greater_equal(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::greater_equal)
            }
            (l, r) => Ok(Boolean(Operation::compare(&l, &r)? != Ordering::Less)),
        }
    }

    fn integer(val: &Val, op: &str) -> Result<BigInt> {
        let n = val.to_number()?;
        if !n.is_integer() {
            return Err(error!(IllegalFunctionCall;
                &format!("Integers expected in function {}", op)));
        }
        Ok(n.to_bigint())
    }

    fn bitwise(lhs: Val, rhs: Val, name: &str, f: fn(BigInt, BigInt) -> BigInt) -> Result<Val> {
        let l = Operation::integer(&lhs, name)?;
        let r = Operation::integer(&rhs, name)?;
        Ok(Val::Number(super::Number::from(f(l, r))))
    }

    pub fn bit_and(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::bit_and),
            (l, r) => Operation::bitwise(l, r, "bitAnd", |l, r| l & r),
        }
    }

    pub fn bit_or(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::bit_or),
            (l, r) => Operation::bitwise(l, r, "bitOr", |l, r| l | r),
        }
    }

    pub fn bit_xor(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::bit_xor),
            (l, r) => Operation::bitwise(l, r, "bitXor", |l, r| l ^ r),
        }
    }

    pub fn bit_not(val: Val) -> Result<Val> {
        Operation::map(val, &|v| {
            let n = Operation::integer(&v, "bitNot")?;
            Ok(Val::Number(super::Number::from(-n - 1)))
        })
    }

    fn shift_amount(val: &Val, op: &str) -> Result<usize> {
        match Operation::integer(val, op)?.to_usize() {
            Some(n) if n <= 1_000_000 => Ok(n),
            _ => Err(error!(IllegalFunctionCall;
                &format!("Shift amount out of range in function {}", op))),
        }
    }

    pub fn shift_left(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::shift_left)
            }
            (l, r) => {
                let n = Operation::integer(&l, "leftShift")?;
                let s = Operation::shift_amount(&r, "leftShift")?;
                Ok(Number(super::Number::from(n << s)))
            }
        }
    }

    pub fn shift_right(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => {
                Operation::broadcast(l, r, Operation::shift_right)
            }
            (l, r) => {
                let n = Operation::integer(&l, "rightArithShift")?;
                let s = Operation::shift_amount(&r, "rightArithShift")?;
                Ok(Number(super::Number::from(n >> s)))
            }
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        Operation::map(val, &|v| Ok(Val::Boolean(!v.is_truthy()?)))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::and),
            (l, r) => Ok(Boolean(l.is_truthy()? && r.is_truthy()?)),
        }
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::or),
            (l, r) => Ok(Boolean(l.is_truthy()? || r.is_truthy()?)),
        }
    }

    pub fn xor(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (l @ Matrix(_), r) | (l, r @ Matrix(_)) => Operation::broadcast(l, r, Operation::xor),
            (l, r) => Ok(Boolean(l.is_truthy()? != r.is_truthy()?)),
        }
    }
}
