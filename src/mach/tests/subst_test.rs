use super::*;
use crate::lang::ast::Node;
use crate::lang::ErrorCode;

fn subst(scope: &Scope, s: &str) -> String {
    let node = match parse_str(s) {
        Ok(node) => node,
        Err(e) => panic!("{:?} parsing {:?}", e, s),
    };
    match subst::substitute(node, scope) {
        Ok(node) => node.to_string(),
        Err(e) => panic!("{:?} substituting {:?}", e, s),
    }
}

#[test]
fn test_every_occurrence_is_replaced() {
    let mut scope = Scope::default();
    scope.set("x", Binding::Number(num("5")));
    assert_eq!(subst(&scope, "x + x"), "5 + 5");
    assert_eq!(subst(&scope, "sqrt(x) * [x, 1]"), "sqrt(5) * [5, 1]");
}

#[test]
fn test_assignment_target_is_kept() {
    let mut scope = Scope::default();
    scope.set("x", Binding::Number(num("5")));
    assert_eq!(subst(&scope, "x = x + 1"), "x = 5 + 1");
    assert_eq!(subst(&scope, "y = x = 2x"), "y = x = 2 * 5");
}

#[test]
fn test_function_bodies_are_untouched() {
    let mut scope = Scope::default();
    scope.set("x", Binding::Number(num("5")));
    assert_eq!(subst(&scope, "f(x) = x + 1"), "f(x) = x + 1");
}

#[test]
fn test_expression_binding_is_spliced() {
    let mut scope = Scope::default();
    let tree = parse_str("1 + 2").unwrap();
    scope.set("a", Binding::Expression(tree));
    assert_eq!(subst(&scope, "a * 3"), "(1 + 2) * 3");
}

#[test]
fn test_fragments_are_not_rescanned() {
    let mut scope = Scope::default();
    scope.set("a", Binding::Expression(Node::Ident("b".to_string())));
    scope.set("b", Binding::Number(num("7")));
    assert_eq!(subst(&scope, "a + b"), "b + 7");
}

#[test]
fn test_text_binding_is_parsed() {
    let mut scope = Scope::default();
    scope.set("t", Binding::Text("0x10 + 1k".to_string()));
    assert_eq!(subst(&scope, "t"), "16 + 1000");
    scope.set("bad", Binding::Text("1 +".to_string()));
    let node = parse_str("bad").unwrap();
    let e = subst::substitute(node, &scope).unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
}

#[test]
fn test_collection_and_boolean_bindings() {
    let mut scope = Scope::default();
    scope.set(
        "m",
        Binding::Collection(vec![Val::Number(num("1")), Val::Text("a".to_string())]),
    );
    scope.set("flag", Binding::Boolean(true));
    assert_eq!(subst(&scope, "m"), "[1, \"a\"]");
    assert_eq!(subst(&scope, "not flag"), "not true");
}

#[test]
fn test_functions_and_unbound_names_stay() {
    let scope = Scope::default();
    assert_eq!(subst(&scope, "hex(y)"), "hex(y)");
    assert_eq!(subst(&scope, "hex"), "hex");
}
