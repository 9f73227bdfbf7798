/*!
## Rust Machine Module

This Rust module evaluates expression trees and keeps the session state:
numbers, values, the scope store, substitution, simplification, and the
runtime that drives one line at a time.

*/

mod command;
mod history;
mod matrix;
mod num;
mod operation;
mod runtime;
mod val;

pub mod eval;
pub mod format;
pub mod function;
pub mod scope;
pub mod simplify;
pub mod subst;

pub use command::Command;
pub use function::Callable;
pub use history::History;
pub use num::Number;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Runtime;
pub use scope::{Binding, Scope};
pub use simplify::RuleSet;
pub use val::Val;

#[cfg(test)]
mod tests;
