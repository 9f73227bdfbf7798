use super::ast::Node;
use super::*;

mod lex_test;
mod line_test;

fn parse_ok(s: &str) -> Node {
    match parse_str(s) {
        Ok(node) => node,
        Err(e) => panic!("{:?} parsing {:?}", e, s),
    }
}

fn display(s: &str) -> String {
    parse_ok(s).to_string()
}
