use super::*;

#[test]
fn test_continuation_prefix() {
    let l = Line::new("+3").unwrap();
    assert_eq!(l.text(), "__at__ +3");
    let l = Line::new("  << 2").unwrap();
    assert_eq!(l.text(), "__at__ << 2");
    let l = Line::new("3+").unwrap();
    assert_eq!(l.text(), "3+");
}

#[test]
fn test_sigil_renamed() {
    let l = Line::new("@ * 2").unwrap();
    assert_eq!(l.text(), "__at__ * 2");
    assert_eq!(l.raw(), "@ * 2");
}

#[test]
fn test_normalized() {
    let l = Line::new("*0x10").unwrap();
    assert_eq!(l.text(), "__at__ *16");
    assert!(Line::new("0x1.1.1").is_err());
}

#[test]
fn test_crlf() {
    let l = Line::new("x\r\n").unwrap();
    assert_eq!(l.ast(), Ok(ast::Node::Ident("x".to_string())));
}
