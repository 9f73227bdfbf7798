mod common;
use calc::mach::Runtime;
use common::*;

#[test]
fn test_bare_word_is_a_command_and_leaves_history() {
    let mut r = Runtime::default();
    enter(&mut r, "1 + 1");
    assert_eq!(enter(&mut r, "history"), "1 + 1\n");
    assert_eq!(history(&r), vec!["1 + 1"]);
    assert_eq!(enter(&mut r, "nonsense"), "?Unknown Command\n");
    assert_eq!(history(&r), vec!["1 + 1"]);
}

#[test]
fn test_history_is_newest_first() {
    let mut r = Runtime::default();
    enter(&mut r, "1");
    enter(&mut r, "2");
    enter(&mut r, "  3  ");
    assert_eq!(enter(&mut r, "history"), "3\n2\n1\n");
}

#[test]
fn test_failed_lines_in_history() {
    let mut r = Runtime::default();
    enter(&mut r, "1 +");
    enter(&mut r, "undefined_thing * 2");
    enter(&mut r, "sqrt(1, 2)");
    assert_eq!(history(&r), vec!["1 +", "sqrt(1, 2)"]);
}

#[test]
fn test_clear() {
    let mut r = Runtime::default();
    enter(&mut r, "1");
    assert_eq!(enter(&mut r, "clear"), "");
    assert!(r.history().is_empty());
    assert_eq!(enter(&mut r, "history"), "");
}

#[test]
fn test_cls_and_exit() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "cls"), "<cls>\n");
    assert_eq!(enter(&mut r, "exit"), "<exit>\n");
    assert_eq!(enter(&mut r, "quit"), "<exit>\n");
}

#[test]
fn test_ls() {
    let mut r = Runtime::default();
    enter(&mut r, "a = 1");
    enter(&mut r, "b = \"text\"");
    enter(&mut r, "f(x) = x");
    enter(&mut r, "a + 1");
    assert_eq!(enter(&mut r, "ls"), "a: 1\nb: \"text\"\n@: 2\n");
}

#[test]
fn test_ls_truncates() {
    let mut r = Runtime::default();
    enter(&mut r, "t = 1 / 3");
    let listing = enter(&mut r, "ls");
    let first = listing.lines().next().unwrap();
    assert_eq!(first, "t: 1 / 3");
    enter(&mut r, "u = 0.1234567890123456789012345678901234567890123456789012345678901234567890123456789");
    let listing = enter(&mut r, "ls");
    let line = listing.lines().nth(1).unwrap();
    assert!(line.starts_with("u: 0.123"));
    assert!(line.ends_with("..."));
    assert_eq!(line.chars().count(), "u: ".len() + 80 + 3);
}

#[test]
fn test_la_shows_everything() {
    let mut r = Runtime::default();
    enter(&mut r, "a = 1");
    let all = enter(&mut r, "la");
    assert!(all.starts_with("hex: hex(n)\nbin: bin(n)\n"));
    assert!(all.contains("\na: 1\n"));
    assert!(all.ends_with("\n__at__: 1\n"));
}

#[test]
fn test_func_reproduces_sources() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "f(x, y) = x ^ 2 + y"), "f(x, y) = x ^ 2 + y\n");
    enter(&mut r, "sq(n)=n*n");
    assert_eq!(
        enter(&mut r, "func"),
        "hex = hex(n)\n\n\
         bin = bin(n)\n\n\
         eng = eng(n)\n\n\
         fix = fix(n)\n\n\
         _exp = _exp(n)\n\n\
         User Defined Function:\n\n\
         f(x, y) = x ^ 2 + y\n\n\
         sq(n) = n * n\n\n"
    );
}

#[test]
fn test_func_without_user_functions() {
    let mut r = Runtime::default();
    let out = enter(&mut r, "func");
    assert!(out.starts_with("hex = hex(n)\n\n"));
    assert!(!out.contains("User Defined Function"));
}
