use calc::mach::{Event, Runtime};

/// Enters one line and renders what it produced. Errors are prefixed
/// with `?`.
pub fn enter(runtime: &mut Runtime, line: &str) -> String {
    match runtime.enter(line) {
        Event::Stopped => String::new(),
        Event::Result(s) => format!("{}\n", s),
        Event::Print(s) => s,
        Event::Error(error) => format!("?{}\n", error),
        Event::ClearScreen => "<cls>\n".to_string(),
        Event::Exit => "<exit>\n".to_string(),
    }
}

/// Enters each line in turn and returns the output of the last.
#[allow(dead_code)]
pub fn session(lines: &[&str]) -> String {
    let mut r = Runtime::default();
    let mut s = String::new();
    for line in lines {
        s = enter(&mut r, line);
    }
    s
}

#[allow(dead_code)]
pub fn history(runtime: &Runtime) -> Vec<String> {
    runtime.history().iter().cloned().collect()
}
