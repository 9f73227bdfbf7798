//! # Calc
//!
//! An arbitrary-precision calculator for the terminal.
//!
//! Run the executable and type expressions one line at a time. Previous
//! results, variables and functions are remembered for the session.
//! ```text
//!  Calc  2 + 2
//! 4
//!  Calc  * 10
//! 40
//! ```
//!
//! Settings come from the environment, see [`config`].

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod config;
pub mod lang;
pub mod mach;
pub mod term;
