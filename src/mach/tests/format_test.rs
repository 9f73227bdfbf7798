use super::format::{display, truncate};
use super::*;

#[test]
fn test_truncate_short_is_unchanged() {
    assert_eq!(truncate("12345", 5), "12345");
    assert_eq!(truncate("", 0), "");
}

#[test]
fn test_truncate_plain() {
    let s = "7".repeat(200);
    let t = truncate(&s, 80);
    assert_eq!(t, format!("{}...", "7".repeat(80)));
}

#[test]
fn test_truncate_keeps_exponent() {
    let s = format!("1.{}e+50", "2".repeat(100));
    let t = truncate(&s, 80);
    assert!(t.ends_with("...e+50"));
    assert_eq!(t.chars().count(), 80 + 3);
    let t = truncate(&s, 3);
    assert_eq!(t, "...e+50");
}

#[test]
fn test_display_rounds_and_truncates() {
    let third = Val::Number(num("1").div(&num("3")).unwrap());
    assert_eq!(display(third.clone(), 128, 1000), format!("0.{}", "3".repeat(128)));
    assert_eq!(display(third, 128, 10), "0.33333333...");
    assert_eq!(display(Val::Boolean(false), 128, 2), "false");
    let m = Val::Matrix(vec![Val::Number(num("0.125")), Val::Number(num("2"))]);
    assert_eq!(display(m, 2, 80), "[0.13, 2]");
}
