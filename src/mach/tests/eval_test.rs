use super::*;
use crate::lang::ErrorCode;

#[test]
fn test_arithmetic() {
    assert_eq!(eval("1 + 2 * 3"), "7");
    assert_eq!(eval("2 ^ 3 ^ 2"), "512");
    assert_eq!(eval("-2 ^ 2"), "-4");
    assert_eq!(eval("(1 + 2) * 3"), "9");
    assert_eq!(eval("10 / 4"), "2.5");
    assert_eq!(eval("7 mod 3"), "1");
    assert_eq!(eval("5!"), "120");
    assert_eq!(eval("2pi") == eval("tau"), true);
}

#[test]
fn test_comparison_and_logic() {
    assert_eq!(eval("1 < 2"), "true");
    assert_eq!(eval("2 == 2.0"), "true");
    assert_eq!(eval("\"a\" != \"b\""), "true");
    assert_eq!(eval("not (1 > 2) and true"), "true");
    assert_eq!(eval("true xor true"), "false");
}

#[test]
fn test_bitwise() {
    assert_eq!(eval("12 & 10"), "8");
    assert_eq!(eval("12 | 3"), "15");
    assert_eq!(eval("6 ^| 3"), "5");
    assert_eq!(eval("~5"), "-6");
    assert_eq!(eval("1 << 10"), "1024");
    assert_eq!(eval("1024 >> 3"), "128");
    assert_eq!(eval_err("1.5 & 1").code(), ErrorCode::IllegalFunctionCall);
}

#[test]
fn test_text() {
    assert_eq!(eval("\"ab\" + \"cd\""), "abcd");
    assert_eq!(eval("\"2\" * 3"), "6");
}

#[test]
fn test_matrices() {
    assert_eq!(eval("[1, 2] + [3, 4]"), "[4, 6]");
    assert_eq!(eval("[1, 2] * 3"), "[3, 6]");
    assert_eq!(eval("[1, 2] * [3, 4]"), "11");
    assert_eq!(eval("[1, 2; 3, 4] * [1, 1]"), "[3, 7]");
    assert_eq!(eval("[1, 2; 3, 4] * [1, 0; 0, 1]"), "[[1, 2], [3, 4]]");
    assert_eq!(eval("transpose([1, 2; 3, 4])"), "[[1, 3], [2, 4]]");
    assert_eq!(eval("size([1, 2, 3; 4, 5, 6])"), "[2, 3]");
    assert_eq!(eval("sqrt([4, 9])"), "[2, 3]");
    assert_eq!(eval_err("[1, 2] + [1, 2, 3]").code(), ErrorCode::DimensionMismatch);
    assert_eq!(eval_err("[[1, 2], [3]]").code(), ErrorCode::DimensionMismatch);
}

#[test]
fn test_builtins() {
    assert_eq!(eval("abs(-3)"), "3");
    assert_eq!(eval("round(2.567, 2)"), "2.57");
    assert_eq!(eval("round(2.5)"), "3");
    assert_eq!(eval("max(1, 5, 3)"), "5");
    assert_eq!(eval("min([4, 2, 8])"), "2");
    assert_eq!(eval("sum(1, 2, 3)"), "6");
    assert_eq!(eval("gcd(12, 18)"), "6");
    assert_eq!(eval("mod(-7, 3)"), "2");
    assert_eq!(eval("log(8, 2)") == eval("log2(8)"), true);
    assert_eq!(eval("hex(255)"), "0xFF");
    assert_eq!(eval("bin(5)"), "0b101");
    assert_eq!(eval("hex(-1)"), "0xF");
    assert_eq!(eval("hex(-255)"), "0xF01");
    assert_eq!(eval("fix(1e21)"), "1000000000000000000000");
    assert_eq!(eval("_exp(1500)"), "1.5e+3");
    assert_eq!(eval("eng(12345)"), "12.345e+3");
}

#[test]
fn test_builtin_arity() {
    let e = eval_err("sqrt(1, 2)");
    assert_eq!(e.code(), ErrorCode::TypeMismatch);
    assert_eq!(
        e.detail(),
        "Too many arguments in function sqrt (expected: 1, actual: 2)"
    );
    assert_eq!(eval_err("atan2(1)").code(), ErrorCode::TypeMismatch);
}

#[test]
fn test_undefined() {
    let e = eval_err("y + 1");
    assert_eq!(e.code(), ErrorCode::UndefinedSymbol);
    assert_eq!(e.to_string(), "Undefined symbol y");
    let e = eval_err("nope(1)");
    assert_eq!(e.to_string(), "Undefined function nope");
    assert_eq!(eval_err("__at__ + 1").code(), ErrorCode::EmptyContinuation);
}

#[test]
fn test_assignment_updates_scope() {
    let mut scope = Scope::default();
    assert_eq!(eval_in(&mut scope, "a = b = 4").to_string(), "4");
    assert_eq!(scope.get("a"), Some(&Binding::Number(num("4"))));
    assert_eq!(scope.get("b"), Some(&Binding::Number(num("4"))));
    assert_eq!(eval_in(&mut scope, "a * b").to_string(), "16");
}

#[test]
fn test_user_functions() {
    let mut scope = Scope::default();
    let f = eval_in(&mut scope, "f(x, y) = x ^ 2 + y");
    assert_eq!(f.to_string(), "f(x, y) = x ^ 2 + y");
    assert_eq!(eval_in(&mut scope, "f(3, 1)").to_string(), "10");
    let sources: Vec<&str> = scope.user_functions().map(|u| u.source.as_str()).collect();
    assert_eq!(sources, vec!["f(x, y) = x ^ 2 + y"]);
}

#[test]
fn test_user_function_arguments_shadow_scope() {
    let mut scope = Scope::default();
    eval_in(&mut scope, "x = 100");
    eval_in(&mut scope, "g(x) = x + 1");
    assert_eq!(eval_in(&mut scope, "g(1)").to_string(), "2");
}

#[test]
fn test_recursion_depth_is_limited() {
    let child = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(|| {
            let mut scope = Scope::default();
            eval_in(&mut scope, "r(n) = r(n + 1)");
            let node = parse_str("r(0)").unwrap();
            evaluate(&node, &mut scope).unwrap_err()
        })
        .unwrap();
    let e = child.join().unwrap();
    assert_eq!(e.code(), ErrorCode::CallDepth);
    assert_eq!(e.to_string(), "Maximum call stack size exceeded");
}

#[test]
fn test_reserved_assignment() {
    assert_eq!(eval_err("__at__ = 3").code(), ErrorCode::ReservedAssignment);
}

#[test]
fn test_constants() {
    assert_eq!(eval("round(pi, 5)"), "3.14159");
    assert_eq!(eval("round(phi, 3)"), "1.618");
    assert_eq!(eval("round(SQRT2, 4)"), "1.4142");
}
