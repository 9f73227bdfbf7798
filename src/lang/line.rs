use super::ast::Node;
use super::ident::{CONTINUATION, CONTINUATION_SIGIL};
use super::{lex, literal, parse, Error};

/// Operators that continue from the previous result when they open a line.
const CONTINUATION_OPERATORS: [&str; 9] = ["<<", ">>", "+", "-", "*", "/", "^", "|", "&"];

/// One line of user input, prepared for parsing.
#[derive(Debug, PartialEq)]
pub struct Line {
    raw: String,
    text: String,
}

impl Line {
    pub fn new(raw: &str) -> Result<Line, Error> {
        let mut text = raw.replace(CONTINUATION_SIGIL, CONTINUATION);
        let trimmed = text.trim_start();
        if CONTINUATION_OPERATORS
            .iter()
            .any(|op| trimmed.starts_with(op))
        {
            text = format!("{} {}", CONTINUATION, trimmed);
        }
        let text = literal::normalize(&text)?;
        Ok(Line {
            raw: raw.to_string(),
            text,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The prepared text handed to the lexer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Error columns are kept only when preparation left the line as typed.
    pub fn ast(&self) -> Result<Node, Error> {
        let node = parse(&lex(&self.text));
        if self.text == self.raw {
            node
        } else {
            node.map_err(Error::without_column)
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
