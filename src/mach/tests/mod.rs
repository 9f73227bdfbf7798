use super::eval::evaluate;
use super::*;
use crate::lang::parse_str;

mod eval_test;
mod format_test;
mod num_test;
mod simplify_test;
mod subst_test;

fn num(s: &str) -> Number {
    match s.parse::<Number>() {
        Ok(n) => n,
        Err(e) => panic!("{:?} parsing {:?}", e, s),
    }
}

fn eval_in(scope: &mut Scope, s: &str) -> Val {
    let node = match parse_str(s) {
        Ok(node) => node,
        Err(e) => panic!("{:?} parsing {:?}", e, s),
    };
    match evaluate(&node, scope) {
        Ok(val) => val,
        Err(e) => panic!("{:?} evaluating {:?}", e, s),
    }
}

fn eval(s: &str) -> String {
    eval_in(&mut Scope::default(), s).to_string()
}

fn eval_err(s: &str) -> crate::lang::Error {
    let node = match parse_str(s) {
        Ok(node) => node,
        Err(e) => panic!("{:?} parsing {:?}", e, s),
    };
    match evaluate(&node, &mut Scope::default()) {
        Ok(val) => panic!("{:?} evaluated to {}", s, val),
        Err(e) => e,
    }
}
