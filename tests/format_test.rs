mod common;
use calc::config::Config;
use calc::mach::format::truncate;
use calc::mach::Runtime;
use common::*;

#[test]
fn test_truncate_without_exponent() {
    let s = "x".repeat(200);
    let t = truncate(&s, 80);
    assert_eq!(t.len(), 83);
    assert!(t.ends_with("x..."));
}

#[test]
fn test_truncate_keeps_exponent_visible() {
    let s = format!("1.{}e+50", "234".repeat(40));
    for limit in [0, 5, 40, 80].iter() {
        assert!(truncate(&s, *limit).ends_with("...e+50"));
    }
}

#[test]
fn test_long_results_are_truncated() {
    let mut r = Runtime::default();
    let out = enter(&mut r, "1 / 3");
    assert_eq!(out, format!("0.{}...\n", "3".repeat(78)));
    let out = enter(&mut r, "2 / 3 * 1e-30");
    assert!(out.ends_with("...e-31\n"));
    assert_eq!(out.trim_end().chars().count(), 80 + 3);
}

#[test]
fn test_results_are_rounded() {
    let mut r = Runtime::new(Config {
        width: 1000,
        ..Config::default()
    });
    let out = enter(&mut r, "2 / 3");
    assert_eq!(out, format!("0.{}7\n", "6".repeat(127)));
}

#[test]
fn test_formatters() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "hex(255)"), "0xFF\n");
    assert_eq!(enter(&mut r, "hex(-1)"), "0xF\n");
    assert_eq!(enter(&mut r, "hex(-255)"), "0xF01\n");
    assert_eq!(enter(&mut r, "hex(10.5)"), "0xA.8\n");
    assert_eq!(enter(&mut r, "hex(-0.5)"), "0x0.8\n");
    assert_eq!(enter(&mut r, "bin(-0.25)"), "0b0.11\n");
    assert_eq!(enter(&mut r, "bin(5.5)"), "0b101.1\n");
    assert_eq!(enter(&mut r, "eng(0.00025)"), "250e-6\n");
    assert_eq!(enter(&mut r, "fix(1.5e25)"), "15000000000000000000000000\n");
    assert_eq!(enter(&mut r, "_exp(0.5)"), "5e-1\n");
    assert_eq!(enter(&mut r, "hex([1, 255])"), "[\"0x1\", \"0xFF\"]\n");
}

#[test]
fn test_formatter_elided_inside_operators() {
    let mut r = Runtime::default();
    assert_eq!(enter(&mut r, "hex(255) + 1"), "256\n");
    assert_eq!(enter(&mut r, "sqrt(bin(16))"), "4\n");
    assert_eq!(enter(&mut r, "2 * hex(3)"), "6\n");
}
