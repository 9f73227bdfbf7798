use super::*;

fn simplified(s: &str) -> String {
    RuleSet::formatting().simplify(parse_str(s).unwrap()).to_string()
}

#[test]
fn test_rules_come_from_formatters() {
    let rules: Vec<String> = RuleSet::formatting()
        .rules()
        .iter()
        .map(|r| r.to_string())
        .collect();
    assert_eq!(
        rules,
        vec!["hex(n) -> n", "bin(n) -> n", "eng(n) -> n", "fix(n) -> n", "_exp(n) -> n"]
    );
}

#[test]
fn test_formatters_are_elided() {
    assert_eq!(simplified("hex(255)"), "255");
    assert_eq!(simplified("bin(hex(x))"), "x");
    assert_eq!(simplified("sqrt(fix(y))"), "sqrt(y)");
    assert_eq!(simplified("hex(1, 2)"), "hex(1, 2)");
}

#[test]
fn test_literal_folding() {
    assert_eq!(simplified("hex(255) + 1"), "256");
    assert_eq!(simplified("2 * 3 - 1"), "5");
    assert_eq!(simplified("x + 1 + 2"), "x + 1 + 2");
    assert_eq!(simplified("1 / 3"), "1 / 3");
}

#[test]
fn test_operands_only() {
    let rules = RuleSet::formatting();
    let root = rules.simplify_operands(parse_str("hex(hex(255))").unwrap());
    assert_eq!(root.to_string(), "hex(255)");
    let root = rules.simplify_operands(parse_str("x = hex(1)").unwrap());
    assert_eq!(root.to_string(), "x = hex(1)");
}

#[test]
fn test_exact_quotients_fold() {
    assert_eq!(simplified("6 / 4"), "1.5");
    assert_eq!(simplified("1 / 0"), "1 / 0");
    assert_eq!(simplified("2 / 3"), "2 / 3");
}

#[test]
fn test_folding_keeps_formatters() {
    let folded = RuleSet::folding().simplify(parse_str("hex(2 + 3) * (4 / 8)").unwrap());
    assert_eq!(folded.to_string(), "hex(5) * 0.5");
    assert!(RuleSet::folding().rules().is_empty());
}
