/*!
# Rust Language Module

This Rust module turns a line of calculator input into an expression tree:
literal normalization, lexical analysis, and parsing.

*/

#[macro_use]
mod error;
mod ident;
mod lex;
mod line;
mod literal;
mod parse;

pub mod ast;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::Fault;
pub use ident::{is_internal, public_name, CONTINUATION, CONTINUATION_SIGIL};
pub use lex::lex;
pub use line::Line;
pub use literal::normalize;
pub use parse::parse;

pub type Column = std::ops::Range<usize>;

/// Normalize literals, lex, and parse a fragment of text.
pub fn parse_str(s: &str) -> Result<ast::Node, Error> {
    let text = normalize(s)?;
    parse(&lex(&text))
}

#[cfg(test)]
mod tests;
